//! Shared helper functions for CLI commands
//!
//! Project discovery, ledger construction and small text utilities used by
//! several command modules.

use miette::{IntoDiagnostic, Result};
use std::io::{self, IsTerminal, Read};

use crate::cli::GlobalOpts;
use crate::core::{Config, Ledger, Project};

/// Locate the project from `--root` / `STOCKMASTER_ROOT`, else from the cwd
pub fn open_project(global: &GlobalOpts) -> Result<Project> {
    let project = match &global.root {
        Some(root) => Project::discover_from(root),
        None => Project::discover(),
    };
    project.map_err(|e| miette::miette!("{}", e))
}

/// Open the project, its layered config and a ledger over its store
pub fn open_ledger(global: &GlobalOpts) -> Result<(Project, Config, Ledger)> {
    let project = open_project(global)?;
    let config = Config::load(Some(&project)).map_err(|e| miette::miette!("{}", e))?;
    let store = project.store().map_err(|e| miette::miette!("{}", e))?;

    let mut ledger =
        Ledger::new(store).with_low_stock_threshold(config.inventory.low_stock_threshold);
    ledger.init().map_err(|e| miette::miette!("{}", e))?;

    Ok((project, config, ledger))
}

/// Truncate a string to max_len characters, adding "..." if truncated
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Read all of stdin when it is piped
///
/// Returns `None` when stdin is a terminal.
pub fn read_stdin_text() -> Result<Option<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut text = String::new();
    stdin.lock().read_to_string(&mut text).into_diagnostic()?;
    Ok(Some(text))
}
