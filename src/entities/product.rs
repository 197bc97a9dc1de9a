//! Product entity type - a named stock item held at one location

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::entity::Entity;
use crate::core::identity::{EntityId, EntityPrefix};

/// Category given to products received without one
pub const DEFAULT_CATEGORY: &str = "General";

/// Low-stock threshold used when a product has no `min_stock`
pub const DEFAULT_MIN_STOCK: u64 = 10;

/// A Product entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: EntityId,

    /// Display name, unique across products ignoring case
    pub name: String,

    /// Stock keeping unit, generated at creation
    pub sku: String,

    /// Free-text category
    #[serde(default = "default_category")]
    pub category: String,

    /// Units on hand
    #[serde(rename = "qty")]
    pub quantity: u64,

    /// Where the product is stored
    pub location: String,

    /// Low-stock threshold override
    #[serde(default, rename = "minStock", skip_serializing_if = "Option::is_none")]
    pub min_stock: Option<u64>,

    /// Creation timestamp
    pub created: DateTime<Utc>,

    /// Last modification timestamp
    pub updated: DateTime<Utc>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Product {
    /// Create a new product with a fresh ID and SKU
    pub fn new(
        name: impl Into<String>,
        quantity: u64,
        location: impl Into<String>,
        category: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: EntityId::new(EntityPrefix::Prd),
            name: name.into(),
            sku: generate_sku(),
            category: category
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(default_category),
            quantity,
            location: location.into(),
            min_stock: None,
            created: now,
            updated: now,
        }
    }

    /// Case-insensitive name comparison
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Effective low-stock threshold
    pub fn threshold(&self, default_min: u64) -> u64 {
        self.min_stock.unwrap_or(default_min)
    }

    /// Whether the quantity sits below the low-stock threshold
    pub fn is_low_stock(&self, default_min: u64) -> bool {
        self.quantity < self.threshold(default_min)
    }

    pub(crate) fn touch(&mut self) {
        self.updated = Utc::now();
    }
}

impl Entity for Product {
    const PREFIX: EntityPrefix = EntityPrefix::Prd;
    const COLLECTION: &'static str = "stockmaster_products";

    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// Generate a SKU of the form `SKU-<n>` with `n` in `0..10000`
pub fn generate_sku() -> String {
    let n: u32 = rand::rng().random_range(0..10_000);
    format!("SKU-{}", n)
}
