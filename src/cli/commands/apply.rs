//! `stock apply` command - Apply a structured intent without the language model
//!
//! Accepts the same JSON object the interpreter produces, e.g.
//! `{"tool":"ADD_STOCK","name":"Bolts","qty":40,"location":"Bin 3"}`, either
//! as an argument or on stdin.

use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{open_ledger, read_stdin_text};
use crate::cli::output::print_outcome;
use crate::cli::GlobalOpts;
use crate::core::apply_raw;
use crate::interpreter::RawIntent;

#[derive(clap::Args, Debug)]
pub struct ApplyArgs {
    /// Intent as a JSON object (default: read from stdin)
    pub json: Option<String>,
}

/// Parse an intent object, reporting where the JSON is malformed
pub fn parse_intent(json: &str) -> Result<RawIntent> {
    serde_json::from_str(json.trim()).into_diagnostic().map_err(|e| {
        e.wrap_err("Invalid intent JSON: expected an object with a \"tool\" field")
    })
}

pub fn run(args: ApplyArgs, global: &GlobalOpts) -> Result<()> {
    let json = match args.json {
        Some(json) => json,
        None => read_stdin_text()?.ok_or_else(|| {
            miette::miette!(
                help = "Pass the intent as an argument or pipe it on stdin",
                "No intent given"
            )
        })?,
    };
    let raw = parse_intent(&json)?;

    let (_, _, mut ledger) = open_ledger(global)?;
    let outcome = apply_raw(raw, &mut ledger)?;
    print_outcome(&outcome, global.format, ledger.default_min_stock())
}
