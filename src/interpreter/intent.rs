//! Intent types - the interpreter's raw output and its validated form
//!
//! [`RawIntent`] mirrors the JSON object the model returns, with every field
//! optional. [`Intent`] is what the ledger is allowed to see: one variant per
//! action, each carrying exactly the fields that action needs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::dispatch::CommandError;

/// The fixed set of actions the interpreter may choose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToolAction {
    AddStock,
    DeliverStock,
    MoveStock,
    AdjustStock,
    Report,
    Unknown,
}

impl ToolAction {
    pub fn all() -> &'static [ToolAction] {
        &[
            ToolAction::AddStock,
            ToolAction::DeliverStock,
            ToolAction::MoveStock,
            ToolAction::AdjustStock,
            ToolAction::Report,
            ToolAction::Unknown,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolAction::AddStock => "ADD_STOCK",
            ToolAction::DeliverStock => "DELIVER_STOCK",
            ToolAction::MoveStock => "MOVE_STOCK",
            ToolAction::AdjustStock => "ADJUST_STOCK",
            ToolAction::Report => "REPORT",
            ToolAction::Unknown => "UNKNOWN",
        }
    }

    /// Human label used in "Missing parameters for ..." messages
    pub fn label(&self) -> &'static str {
        match self {
            ToolAction::AddStock => "Adding Stock",
            ToolAction::DeliverStock => "Delivering Stock",
            ToolAction::MoveStock => "Moving Stock",
            ToolAction::AdjustStock => "Adjustment",
            ToolAction::Report => "Report",
            ToolAction::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ToolAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolAction::all()
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown tool: {}", s))
    }
}

/// Unvalidated interpreter output
///
/// `tool` stays a string so an unexpected value surfaces as an unknown
/// command rather than a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawIntent {
    pub tool: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qty: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub true_qty: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RawIntent {
    /// Convenience constructor for a bare tool
    pub fn tool(action: ToolAction) -> Self {
        Self {
            tool: action.as_str().to_string(),
            ..Default::default()
        }
    }
}

/// A validated command, ready for the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Intent {
    Receive {
        name: String,
        qty: u64,
        location: String,
        category: Option<String>,
    },
    Deliver {
        name: String,
        qty: u64,
    },
    Move {
        name: String,
        qty: Option<u64>,
        to_location: String,
    },
    Adjust {
        name: String,
        true_qty: i64,
    },
    Report,
}

impl Intent {
    pub fn action(&self) -> ToolAction {
        match self {
            Intent::Receive { .. } => ToolAction::AddStock,
            Intent::Deliver { .. } => ToolAction::DeliverStock,
            Intent::Move { .. } => ToolAction::MoveStock,
            Intent::Adjust { .. } => ToolAction::AdjustStock,
            Intent::Report => ToolAction::Report,
        }
    }
}

impl TryFrom<RawIntent> for Intent {
    type Error = CommandError;

    fn try_from(raw: RawIntent) -> Result<Self, Self::Error> {
        if let Some(error) = non_blank(raw.error) {
            return Err(CommandError::InterpreterFailure(error));
        }

        let action: ToolAction = raw.tool.parse().map_err(|_| CommandError::UnknownCommand)?;
        let missing = || CommandError::MissingParameters(action.label());

        let name = non_blank(raw.name);
        let qty = raw.qty.and_then(|q| u64::try_from(q).ok()).filter(|q| *q > 0);

        match action {
            ToolAction::AddStock => Ok(Intent::Receive {
                name: name.ok_or_else(missing)?,
                qty: qty.ok_or_else(missing)?,
                location: non_blank(raw.location).ok_or_else(missing)?,
                category: non_blank(raw.category),
            }),
            ToolAction::DeliverStock => Ok(Intent::Deliver {
                name: name.ok_or_else(missing)?,
                qty: qty.ok_or_else(missing)?,
            }),
            ToolAction::MoveStock => Ok(Intent::Move {
                name: name.ok_or_else(missing)?,
                qty,
                to_location: non_blank(raw.to_location).ok_or_else(missing)?,
            }),
            ToolAction::AdjustStock => Ok(Intent::Adjust {
                name: name.ok_or_else(missing)?,
                true_qty: raw.true_qty.ok_or_else(missing)?,
            }),
            ToolAction::Report => Ok(Intent::Report),
            ToolAction::Unknown => Err(CommandError::UnknownCommand),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
