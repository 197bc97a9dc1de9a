//! Command-line argument definitions

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    apply::ApplyArgs, ask::AskArgs, completions::CompletionsArgs, init::InitArgs, list::ListArgs,
    log::LogArgs, report::ReportArgs, shell::ShellArgs, stock::AdjustArgs, stock::DeliverArgs,
    stock::MoveArgs, stock::ReceiveArgs,
};

#[derive(Parser, Debug)]
#[command(
    name = "stock",
    version,
    about = "StockMaster - inventory ledger driven by natural-language commands",
    long_about = "Track products and their stock movements in a local project.\n\n\
                  Use `stock ask \"Received 50 iPhones at Warehouse A\"` to describe a change in \
                  plain words, or the explicit receive/deliver/move/adjust commands."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, value_enum, default_value = "auto")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Project root (default: search upward from the current directory)
    #[arg(long, global = true, env = "STOCKMASTER_ROOT")]
    pub root: Option<PathBuf>,
}

/// Output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Table for lists, plain text for everything else
    #[default]
    Auto,
    /// Bordered table
    Table,
    /// JSON
    Json,
    /// YAML
    Yaml,
    /// Comma-separated values
    Csv,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a StockMaster project in the current directory
    Init(InitArgs),

    /// Receive stock (create the product if it is new)
    Receive(ReceiveArgs),

    /// Deliver stock out to a customer
    Deliver(DeliverArgs),

    /// Move a product to another location
    Move(MoveArgs),

    /// Set a product's quantity from a physical count
    Adjust(AdjustArgs),

    /// List products
    List(ListArgs),

    /// Show the activity log, newest first
    Log(LogArgs),

    /// Show summary metrics and stock by location
    Report(ReportArgs),

    /// Run one natural-language command through the language model
    Ask(AskArgs),

    /// Apply a structured intent (JSON) without calling the language model
    Apply(ApplyArgs),

    /// Interactive command prompt
    Shell(ShellArgs),

    /// Load demo data into an empty project
    Seed,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
