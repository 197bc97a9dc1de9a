//! `stock shell` command - Interactive command prompt
//!
//! Each line goes through the interpreter and the ledger in turn. A failed
//! command prints its error and the prompt continues. With stdin piped, lines
//! are read without prompting.

use console::style;
use dialoguer::{theme::ColorfulTheme, Input};
use miette::{IntoDiagnostic, Result};
use std::io::{self, BufRead, IsTerminal};

use crate::cli::helpers::open_ledger;
use crate::cli::output::print_outcome;
use crate::cli::GlobalOpts;
use crate::core::{run_command, Ledger};
use crate::interpreter::Interpreter;

#[derive(clap::Args, Debug)]
pub struct ShellArgs {
    /// Stop at the first failed command (exit non-zero)
    #[arg(long)]
    pub fail_fast: bool,
}

const EXAMPLES: &[&str] = &[
    "Received 50 iPhones at Warehouse A",
    "Delivered 5 Office Chairs",
    "Move Steel Rods to Zone C",
    "Correct stock of IPhones to 48",
    "How is the inventory doing?",
];

/// What the loop should do with one input line
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Skip,
    Exit,
    Help,
    Command(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "" => Line::Skip,
        "exit" | "quit" => Line::Exit,
        "help" | "?" => Line::Help,
        _ => Line::Command(line),
    }
}

fn print_help() {
    println!("Describe a stock change in plain words, for example:");
    for example in EXAMPLES {
        println!("  {}", style(example).cyan());
    }
    println!("Type {} to leave.", style("exit").bold());
}

pub fn run(args: ShellArgs, global: &GlobalOpts) -> Result<()> {
    let (_, config, mut ledger) = open_ledger(global)?;
    let interpreter = super::ask::interpreter(&config)?;

    if io::stdin().is_terminal() {
        print_help();
        let theme = ColorfulTheme::default();
        loop {
            let line: String = Input::with_theme(&theme)
                .with_prompt("stock")
                .allow_empty(true)
                .interact_text()
                .into_diagnostic()?;
            if !handle(&line, &interpreter, &mut ledger, &args, global)? {
                break;
            }
        }
    } else {
        for line in io::stdin().lock().lines() {
            let line = line.into_diagnostic()?;
            if !handle(&line, &interpreter, &mut ledger, &args, global)? {
                break;
            }
        }
    }
    Ok(())
}

/// Process one line; returns `false` when the loop should stop
fn handle(
    line: &str,
    interpreter: &dyn Interpreter,
    ledger: &mut Ledger,
    args: &ShellArgs,
    global: &GlobalOpts,
) -> Result<bool> {
    match classify(line) {
        Line::Skip => Ok(true),
        Line::Exit => Ok(false),
        Line::Help => {
            print_help();
            Ok(true)
        }
        Line::Command(text) => match run_command(text, interpreter, ledger) {
            Ok(outcome) => {
                print_outcome(&outcome, global.format, ledger.default_min_stock())?;
                Ok(true)
            }
            Err(err) if args.fail_fast => Err(err.into()),
            Err(err) => {
                eprintln!("{} {}", style("✗").red(), err);
                Ok(true)
            }
        },
    }
}
