//! Entity trait - common interface for stored record types

use serde::{de::DeserializeOwned, Serialize};

use crate::core::identity::{EntityId, EntityPrefix};

/// Common trait for records persisted as a whole collection in a [`Store`]
///
/// [`Store`]: crate::core::store::Store
pub trait Entity: Serialize + DeserializeOwned {
    /// The ID prefix for this record type
    const PREFIX: EntityPrefix;

    /// Store key holding the serialized collection
    const COLLECTION: &'static str;

    /// Get the record's unique ID
    fn id(&self) -> &EntityId;
}
