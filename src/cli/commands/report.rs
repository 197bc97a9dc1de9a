//! `stock report` command - Summary metrics and stock by location

use miette::Result;

use crate::cli::helpers::open_ledger;
use crate::cli::output::print_report;
use crate::cli::GlobalOpts;
use crate::core::CommandError;

#[derive(clap::Args, Debug)]
pub struct ReportArgs {
    /// Omit the low-stock list
    #[arg(long)]
    pub no_low_stock: bool,
}

pub fn run(args: ReportArgs, global: &GlobalOpts) -> Result<()> {
    let (_, _, ledger) = open_ledger(global)?;

    let summary = ledger.summary().map_err(CommandError::from)?;
    let locations = ledger.stock_by_location().map_err(CommandError::from)?;
    let low_stock = if args.no_low_stock {
        Vec::new()
    } else {
        ledger.low_stock().map_err(CommandError::from)?
    };

    print_report(&summary, &locations, &low_stock, global.format)
}
