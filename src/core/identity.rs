//! Record identity - prefixed ULID identifiers
//!
//! Every stored record carries an ID of the form `PREFIX-<ulid>`, e.g.
//! `PRD-01J9Z3K8Q6S1V2X4Y5Z6A7B8C9`. ULIDs are time-ordered and never reused.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use ulid::Ulid;

/// Record type prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityPrefix {
    /// Product
    Prd,
    /// Activity log entry
    Log,
}

impl EntityPrefix {
    /// All known prefixes
    pub fn all() -> &'static [EntityPrefix] {
        &[EntityPrefix::Prd, EntityPrefix::Log]
    }

    /// String form used inside IDs
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPrefix::Prd => "PRD",
            EntityPrefix::Log => "LOG",
        }
    }
}

impl fmt::Display for EntityPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityPrefix {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityPrefix::all()
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| IdParseError::UnknownPrefix(s.to_string()))
    }
}

/// Errors from parsing an ID string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdParseError {
    #[error("ID is missing the '-' separator: {0}")]
    MissingSeparator(String),

    #[error("Unknown ID prefix: {0}")]
    UnknownPrefix(String),

    #[error("Invalid ULID in ID: {0}")]
    InvalidUlid(String),
}

/// A prefixed, time-ordered unique identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId {
    prefix: EntityPrefix,
    ulid: Ulid,
}

impl EntityId {
    /// Generate a fresh ID for the given record type
    pub fn new(prefix: EntityPrefix) -> Self {
        Self {
            prefix,
            ulid: Ulid::new(),
        }
    }

    pub fn prefix(&self) -> EntityPrefix {
        self.prefix
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.prefix, self.ulid)
    }
}

impl FromStr for EntityId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, ulid) = s
            .split_once('-')
            .ok_or_else(|| IdParseError::MissingSeparator(s.to_string()))?;
        let prefix = prefix.parse()?;
        let ulid = Ulid::from_string(ulid).map_err(|_| IdParseError::InvalidUlid(s.to_string()))?;
        Ok(Self { prefix, ulid })
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
