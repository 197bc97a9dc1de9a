//! Stock movement commands - `stock receive|deliver|move|adjust`
//!
//! Each command builds an [`Intent`] directly and goes through the same
//! dispatch path as interpreted text, so messages and errors match `stock ask`.

use miette::Result;

use crate::cli::helpers::open_ledger;
use crate::cli::output::print_outcome;
use crate::cli::GlobalOpts;
use crate::core::dispatch;
use crate::interpreter::Intent;

#[derive(clap::Args, Debug)]
pub struct ReceiveArgs {
    /// Product name (matched ignoring case)
    pub name: String,

    /// Units received
    pub qty: u64,

    /// Where the stock is put away
    #[arg(long, short = 'l')]
    pub location: String,

    /// Category for a new product (default: General)
    #[arg(long, short = 'c')]
    pub category: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct DeliverArgs {
    /// Product name (matched ignoring case)
    pub name: String,

    /// Units delivered
    pub qty: u64,
}

#[derive(clap::Args, Debug)]
pub struct MoveArgs {
    /// Product name (matched ignoring case)
    pub name: String,

    /// Destination location
    #[arg(long)]
    pub to: String,

    /// Units being moved, recorded in the log (default: all)
    #[arg(long)]
    pub qty: Option<u64>,
}

#[derive(clap::Args, Debug)]
pub struct AdjustArgs {
    /// Product name (matched ignoring case)
    pub name: String,

    /// Counted quantity
    #[arg(allow_negative_numbers = true)]
    pub true_qty: i64,
}

fn apply(intent: Intent, global: &GlobalOpts) -> Result<()> {
    let (_, _, mut ledger) = open_ledger(global)?;
    let outcome = dispatch(intent, &mut ledger)?;
    print_outcome(&outcome, global.format, ledger.default_min_stock())
}

pub fn run_receive(args: ReceiveArgs, global: &GlobalOpts) -> Result<()> {
    apply(
        Intent::Receive {
            name: args.name,
            qty: args.qty,
            location: args.location,
            category: args.category,
        },
        global,
    )
}

pub fn run_deliver(args: DeliverArgs, global: &GlobalOpts) -> Result<()> {
    apply(
        Intent::Deliver {
            name: args.name,
            qty: args.qty,
        },
        global,
    )
}

pub fn run_move(args: MoveArgs, global: &GlobalOpts) -> Result<()> {
    apply(
        Intent::Move {
            name: args.name,
            qty: args.qty,
            to_location: args.to,
        },
        global,
    )
}

pub fn run_adjust(args: AdjustArgs, global: &GlobalOpts) -> Result<()> {
    apply(
        Intent::Adjust {
            name: args.name,
            true_qty: args.true_qty,
        },
        global,
    )
}
