//! `stock ask` command - One natural-language command

use console::style;
use miette::Result;
use tracing::debug;

use crate::cli::helpers::open_ledger;
use crate::cli::output::print_outcome;
use crate::cli::GlobalOpts;
use crate::core::{run_command, Config};
use crate::interpreter::GeminiInterpreter;

#[derive(clap::Args, Debug)]
pub struct AskArgs {
    /// What happened, in plain words (e.g. "Delivered 5 Office Chairs")
    #[arg(required = true, trailing_var_arg = true, num_args = 1..)]
    pub text: Vec<String>,
}

/// Build the language-model interpreter from config
pub fn interpreter(config: &Config) -> Result<GeminiInterpreter> {
    let interpreter = GeminiInterpreter::from_config(&config.interpreter).map_err(|e| {
        miette::miette!(
            help = "Set STOCKMASTER_API_KEY (or GEMINI_API_KEY), or interpreter.api_key in the config",
            "{}",
            e
        )
    })?;
    debug!(model = interpreter.model(), "interpreter ready");
    Ok(interpreter)
}

pub fn run(args: AskArgs, global: &GlobalOpts) -> Result<()> {
    let (_, config, mut ledger) = open_ledger(global)?;
    let interpreter = interpreter(&config)?;

    let text = args.text.join(" ");
    if !global.quiet {
        eprintln!("{} {}", style("→").blue(), style(&text).dim());
    }

    let outcome = run_command(&text, &interpreter, &mut ledger)?;
    print_outcome(&outcome, global.format, ledger.default_min_stock())
}
