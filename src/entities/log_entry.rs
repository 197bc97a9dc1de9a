//! Activity log entry - immutable audit record of one ledger mutation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::entity::Entity;
use crate::core::identity::{EntityId, EntityPrefix};

/// Direction/kind of a logged movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogType {
    In,
    Out,
    Move,
    Adjust,
    Info,
}

impl std::fmt::Display for LogType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogType::In => write!(f, "IN"),
            LogType::Out => write!(f, "OUT"),
            LogType::Move => write!(f, "MOVE"),
            LogType::Adjust => write!(f, "ADJUST"),
            LogType::Info => write!(f, "INFO"),
        }
    }
}

impl std::str::FromStr for LogType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "IN" => Ok(LogType::In),
            "OUT" => Ok(LogType::Out),
            "MOVE" => Ok(LogType::Move),
            "ADJUST" => Ok(LogType::Adjust),
            "INFO" => Ok(LogType::Info),
            _ => Err(format!("Unknown log type: {}", s)),
        }
    }
}

/// Category label stored in `action`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogAction {
    AddStock,
    DeliverStock,
    MoveStock,
    AdjustStock,
}

impl LogAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogAction::AddStock => "ADD_STOCK",
            LogAction::DeliverStock => "DELIVER_STOCK",
            LogAction::MoveStock => "MOVE_STOCK",
            LogAction::AdjustStock => "ADJUST_STOCK",
        }
    }

    /// The log type an action is recorded under
    pub fn log_type(&self) -> LogType {
        match self {
            LogAction::AddStock => LogType::In,
            LogAction::DeliverStock => LogType::Out,
            LogAction::MoveStock => LogType::Move,
            LogAction::AdjustStock => LogType::Adjust,
        }
    }
}

impl std::fmt::Display for LogAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single activity log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: EntityId,
    pub timestamp: DateTime<Utc>,
    pub action: LogAction,
    pub details: String,
    #[serde(rename = "type")]
    pub log_type: LogType,
}

impl LogEntry {
    /// Create an entry stamped now, typed after its action
    pub fn new(action: LogAction, details: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(EntityPrefix::Log),
            timestamp: Utc::now(),
            action,
            details: details.into(),
            log_type: action.log_type(),
        }
    }
}

impl Entity for LogEntry {
    const PREFIX: EntityPrefix = EntityPrefix::Log;
    const COLLECTION: &'static str = "stockmaster_logs";

    fn id(&self) -> &EntityId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_type_follows_action() {
        assert_eq!(LogEntry::new(LogAction::AddStock, "x").log_type, LogType::In);
        assert_eq!(LogEntry::new(LogAction::DeliverStock, "x").log_type, LogType::Out);
        assert_eq!(LogEntry::new(LogAction::MoveStock, "x").log_type, LogType::Move);
        assert_eq!(LogEntry::new(LogAction::AdjustStock, "x").log_type, LogType::Adjust);
    }

    #[test]
    fn test_serialized_shape() {
        let entry = LogEntry::new(LogAction::MoveStock, "Moved all Rods from A to B");
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["action"], "MOVE_STOCK");
        assert_eq!(value["type"], "MOVE");
        assert_eq!(value["details"], "Moved all Rods from A to B");
    }

    #[test]
    fn test_log_type_parse() {
        assert_eq!("in".parse::<LogType>().unwrap(), LogType::In);
        assert_eq!("Adjust".parse::<LogType>().unwrap(), LogType::Adjust);
        assert!("sideways".parse::<LogType>().is_err());
    }
}
