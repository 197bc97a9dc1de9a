//! Filter and sort enums for list commands

use clap::ValueEnum;

use crate::entities::{LogType, Product};

/// Log type filter for `stock log`
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum LogTypeFilter {
    /// Receipts only
    In,
    /// Deliveries only
    Out,
    /// Transfers only
    Move,
    /// Adjustments only
    Adjust,
    /// Informational entries only
    Info,
    /// Every entry - default
    #[default]
    All,
}

impl LogTypeFilter {
    /// Check if a LogType matches this filter
    pub fn matches(&self, log_type: LogType) -> bool {
        match self {
            LogTypeFilter::In => log_type == LogType::In,
            LogTypeFilter::Out => log_type == LogType::Out,
            LogTypeFilter::Move => log_type == LogType::Move,
            LogTypeFilter::Adjust => log_type == LogType::Adjust,
            LogTypeFilter::Info => log_type == LogType::Info,
            LogTypeFilter::All => true,
        }
    }
}

/// Sort key for `stock list`
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum SortField {
    /// Insertion order
    #[default]
    Created,
    Name,
    Qty,
    Location,
    Category,
}

impl SortField {
    /// Sort products in place
    pub fn sort(&self, products: &mut [Product]) {
        match self {
            SortField::Created => products.sort_by(|a, b| a.created.cmp(&b.created)),
            SortField::Name => products.sort_by_key(|p| p.name.to_lowercase()),
            SortField::Qty => products.sort_by_key(|p| p.quantity),
            SortField::Location => products.sort_by_key(|p| p.location.to_lowercase()),
            SortField::Category => products.sort_by_key(|p| p.category.to_lowercase()),
        }
    }
}
