//! `stock log` command - Show the activity log

use miette::Result;

use crate::cli::filters::LogTypeFilter;
use crate::cli::helpers::open_ledger;
use crate::cli::output::print_log;
use crate::cli::GlobalOpts;
use crate::core::CommandError;
use crate::entities::LogEntry;

#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Filter by entry type
    #[arg(long = "type", short = 't', value_enum, default_value = "all")]
    pub log_type: LogTypeFilter,

    /// Limit number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show count only
    #[arg(long)]
    pub count: bool,
}

pub fn run(args: LogArgs, global: &GlobalOpts) -> Result<()> {
    let (_, _, ledger) = open_ledger(global)?;

    let mut entries: Vec<LogEntry> = ledger
        .list_log()
        .map_err(CommandError::from)?
        .into_iter()
        .filter(|e| args.log_type.matches(e.log_type))
        .collect();
    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    if args.count {
        println!("{}", entries.len());
        return Ok(());
    }

    print_log(&entries, global.format)
}
