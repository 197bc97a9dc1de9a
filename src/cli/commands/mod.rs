//! CLI command implementations

pub mod apply;
pub mod ask;
pub mod completions;
pub mod init;
pub mod list;
pub mod log;
pub mod report;
pub mod seed;
pub mod shell;
pub mod stock;
