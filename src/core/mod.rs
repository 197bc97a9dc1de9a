//! Core module - fundamental types, storage and the ledger

pub mod config;
pub mod dispatch;
pub mod entity;
pub mod identity;
pub mod ledger;
pub mod project;
pub mod store;

pub use config::Config;
pub use dispatch::{apply_raw, dispatch, run_command, CommandError, Outcome};
pub use entity::Entity;
pub use identity::{EntityId, EntityPrefix, IdParseError};
pub use ledger::{Ledger, LedgerError, LocationStock, Summary};
pub use project::{Project, ProjectError};
pub use store::{FileStore, MemoryStore, Store, StoreError};
