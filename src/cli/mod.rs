//! CLI module - argument parsing, output and command implementations

pub mod args;
pub mod commands;
pub mod filters;
pub mod helpers;
pub mod logging;
pub mod output;

pub use args::{Cli, Commands, GlobalOpts, OutputFormat};
pub use filters::{LogTypeFilter, SortField};
