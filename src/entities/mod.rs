//! Entity types stored by the ledger

pub mod log_entry;
pub mod product;

pub use log_entry::{LogAction, LogEntry, LogType};
pub use product::{Product, DEFAULT_CATEGORY, DEFAULT_MIN_STOCK};
