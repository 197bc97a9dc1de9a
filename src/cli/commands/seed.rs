//! `stock seed` command - Load demo data into an empty project

use console::style;
use miette::Result;

use crate::cli::helpers::open_ledger;
use crate::cli::GlobalOpts;
use crate::core::CommandError;

pub fn run(global: &GlobalOpts) -> Result<()> {
    let (_, _, mut ledger) = open_ledger(global)?;

    if ledger.seed_demo().map_err(CommandError::from)? {
        let count = ledger.list_products().map_err(CommandError::from)?.len();
        println!(
            "{} Loaded {} demo product(s)",
            style("✓").green(),
            style(count).cyan()
        );
    } else {
        println!(
            "{} Project already holds products; nothing to seed",
            style("!").yellow()
        );
    }
    Ok(())
}
