//! StockMaster: an inventory ledger driven by natural-language commands
//!
//! Free text is interpreted into one of a fixed set of stock actions, which
//! are applied to a small products-and-activity-log store.

pub mod cli;
pub mod core;
pub mod entities;
pub mod interpreter;
