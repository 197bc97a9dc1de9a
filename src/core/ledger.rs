//! Inventory ledger - products plus an append-only activity log
//!
//! Every operation reads both collections from the [`Store`], applies its
//! change in memory and writes the collections back whole. A failed operation
//! returns before anything is written, so neither the products nor the log
//! change on error. Each successful mutation prepends exactly one log entry.
//!
//! Products are addressed by name, compared case-insensitively. A product has
//! a single location; moving it relocates the whole record.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::entity::Entity;
use crate::core::store::{self, Store, StoreError};
use crate::entities::{LogAction, LogEntry, Product, DEFAULT_MIN_STOCK};

/// Errors from ledger operations
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Product \"{0}\" not found.")]
    NotFound(String),

    #[error("Insufficient stock for {name}: requested {requested}, available {available}")]
    InsufficientStock {
        name: String,
        requested: u64,
        available: u64,
    },

    #[error("Quantity must be a positive integer (got {qty})")]
    InvalidQuantity { qty: u64 },

    #[error("Receiving {qty} more {name} would exceed the largest storable quantity")]
    QuantityOverflow { name: String, qty: u64 },

    #[error("Stock of {name} cannot be set to a negative quantity ({qty})")]
    NegativeStock { name: String, qty: i64 },

    #[error("Field '{0}' must not be empty")]
    InvalidField(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Aggregate figures over the current inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Units across all products
    pub total_units: u64,
    /// Distinct product names, ignoring case
    pub unique_products: usize,
    /// Products below their low-stock threshold
    pub low_stock: usize,
    /// Most recent log entry
    pub last_activity: Option<LogEntry>,
}

/// Units held at one location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationStock {
    pub location: String,
    pub quantity: u64,
}

/// Label used for products with a blank location
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// The inventory ledger
pub struct Ledger {
    store: Box<dyn Store>,
    default_min_stock: u64,
}

impl Ledger {
    /// Create a ledger over the given store
    pub fn new(store: impl Store + 'static) -> Self {
        Self::with_store(Box::new(store))
    }

    pub fn with_store(store: Box<dyn Store>) -> Self {
        Self {
            store,
            default_min_stock: DEFAULT_MIN_STOCK,
        }
    }

    /// Override the low-stock threshold for products without `min_stock`
    pub fn with_low_stock_threshold(mut self, threshold: u64) -> Self {
        self.default_min_stock = threshold;
        self
    }

    pub fn default_min_stock(&self) -> u64 {
        self.default_min_stock
    }

    /// Write empty collections for any that were never stored
    pub fn init(&mut self) -> Result<(), LedgerError> {
        store::init_collection::<Product>(self.store.as_mut())?;
        store::init_collection::<LogEntry>(self.store.as_mut())?;
        Ok(())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Receive stock: increment an existing product or create a new one
    ///
    /// An existing product also takes the given location.
    pub fn receive(
        &mut self,
        name: &str,
        qty: u64,
        location: &str,
        category: Option<&str>,
    ) -> Result<Product, LedgerError> {
        let name = required(name, "name")?;
        let location = required(location, "location")?;
        if qty == 0 {
            return Err(LedgerError::InvalidQuantity { qty });
        }

        let mut products = self.products()?;
        let (product, details) = match find_index(&products, name) {
            Some(idx) => {
                let product = &mut products[idx];
                let Some(total) = product.quantity.checked_add(qty) else {
                    return Err(LedgerError::QuantityOverflow {
                        name: product.name.clone(),
                        qty,
                    });
                };
                product.quantity = total;
                product.location = location.to_string();
                product.touch();
                let details = format!(
                    "Updated {}: +{} (Total: {}) at {}",
                    product.name, qty, product.quantity, product.location
                );
                (product.clone(), details)
            }
            None => {
                let product = Product::new(name, qty, location, category.map(str::to_string));
                let details = format!(
                    "Created {}: {} units at {} ({})",
                    product.name, qty, product.location, product.category
                );
                products.push(product.clone());
                (product, details)
            }
        };

        self.commit(&products, LogEntry::new(LogAction::AddStock, details))?;
        info!(product = %product.name, qty, total = product.quantity, "received stock");
        Ok(product)
    }

    /// Deliver stock out; fails without change if stock is insufficient
    pub fn deliver(&mut self, name: &str, qty: u64) -> Result<Product, LedgerError> {
        let name = required(name, "name")?;
        if qty == 0 {
            return Err(LedgerError::InvalidQuantity { qty });
        }

        let mut products = self.products()?;
        let idx = find_index(&products, name).ok_or_else(|| LedgerError::NotFound(name.to_string()))?;
        let product = &mut products[idx];

        if qty > product.quantity {
            return Err(LedgerError::InsufficientStock {
                name: product.name.clone(),
                requested: qty,
                available: product.quantity,
            });
        }

        product.quantity -= qty;
        product.touch();
        let product = product.clone();
        let details = format!(
            "Delivered {} {} (Remaining: {})",
            qty, product.name, product.quantity
        );

        self.commit(&products, LogEntry::new(LogAction::DeliverStock, details))?;
        info!(product = %product.name, qty, remaining = product.quantity, "delivered stock");
        Ok(product)
    }

    /// Move a product to a new location
    ///
    /// The whole record moves; `qty` only appears in the log message.
    pub fn move_stock(
        &mut self,
        name: &str,
        qty: Option<u64>,
        to_location: &str,
    ) -> Result<Product, LedgerError> {
        let name = required(name, "name")?;
        let to_location = required(to_location, "to_location")?;

        let mut products = self.products()?;
        let idx = find_index(&products, name).ok_or_else(|| LedgerError::NotFound(name.to_string()))?;
        let product = &mut products[idx];

        let from = std::mem::replace(&mut product.location, to_location.to_string());
        product.touch();
        let product = product.clone();

        let amount = match qty {
            Some(n) if n > 0 => n.to_string(),
            _ => "all".to_string(),
        };
        let details = format!(
            "Moved {} {} from {} to {}",
            amount, product.name, from, product.location
        );

        self.commit(&products, LogEntry::new(LogAction::MoveStock, details))?;
        info!(product = %product.name, %from, to = %product.location, "moved stock");
        Ok(product)
    }

    /// Overwrite a product's quantity from a physical count
    pub fn adjust(&mut self, name: &str, true_qty: i64) -> Result<Product, LedgerError> {
        let name = required(name, "name")?;

        let mut products = self.products()?;
        let idx = find_index(&products, name).ok_or_else(|| LedgerError::NotFound(name.to_string()))?;
        let product = &mut products[idx];

        let new_qty = u64::try_from(true_qty).map_err(|_| LedgerError::NegativeStock {
            name: product.name.clone(),
            qty: true_qty,
        })?;

        let old_qty = product.quantity;
        product.quantity = new_qty;
        product.touch();
        let product = product.clone();

        let delta = new_qty as i128 - old_qty as i128;
        let details = format!(
            "Audit {}: Corrected qty from {} to {} ({:+})",
            product.name, old_qty, new_qty, delta
        );

        self.commit(&products, LogEntry::new(LogAction::AdjustStock, details))?;
        info!(product = %product.name, old_qty, new_qty, "adjusted stock");
        Ok(product)
    }

    /// Load the demo data set into an empty ledger
    ///
    /// Returns `false` without change when products already exist.
    pub fn seed_demo(&mut self) -> Result<bool, LedgerError> {
        if !self.products()?.is_empty() {
            return Ok(false);
        }
        self.receive("IPhones", 50, "Warehouse A", Some("Electronics"))?;
        self.receive("Office Chairs", 120, "Showroom", Some("Furniture"))?;
        self.receive("Steel Rods", 500, "Zone B", Some("Raw Material"))?;
        Ok(true)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// All products in insertion order
    pub fn list_products(&self) -> Result<Vec<Product>, LedgerError> {
        self.products()
    }

    /// The activity log, newest first
    pub fn list_log(&self) -> Result<Vec<LogEntry>, LedgerError> {
        Ok(store::load_collection(self.store.as_ref())?)
    }

    /// Look up one product by name, ignoring case
    pub fn find(&self, name: &str) -> Result<Option<Product>, LedgerError> {
        Ok(self
            .products()?
            .into_iter()
            .find(|p| p.matches_name(name.trim())))
    }

    /// Products below their low-stock threshold
    pub fn low_stock(&self) -> Result<Vec<Product>, LedgerError> {
        let threshold = self.default_min_stock;
        Ok(self
            .products()?
            .into_iter()
            .filter(|p| p.is_low_stock(threshold))
            .collect())
    }

    /// Headline figures for the dashboard
    pub fn summary(&self) -> Result<Summary, LedgerError> {
        let products = self.products()?;
        let log = self.list_log()?;

        let mut names: Vec<String> = products.iter().map(|p| p.name.to_lowercase()).collect();
        names.sort();
        names.dedup();

        Ok(Summary {
            total_units: total_units(&products),
            unique_products: names.len(),
            low_stock: products
                .iter()
                .filter(|p| p.is_low_stock(self.default_min_stock))
                .count(),
            last_activity: log.into_iter().next(),
        })
    }

    /// Units per location, in order of first appearance
    pub fn stock_by_location(&self) -> Result<Vec<LocationStock>, LedgerError> {
        let mut totals: Vec<LocationStock> = Vec::new();
        for product in self.products()? {
            let location = if product.location.trim().is_empty() {
                UNKNOWN_LOCATION.to_string()
            } else {
                product.location
            };
            match totals.iter_mut().find(|t| t.location == location) {
                Some(entry) => entry.quantity = entry.quantity.saturating_add(product.quantity),
                None => totals.push(LocationStock {
                    location,
                    quantity: product.quantity,
                }),
            }
        }
        Ok(totals)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn products(&self) -> Result<Vec<Product>, LedgerError> {
        Ok(store::load_collection(self.store.as_ref())?)
    }

    /// Persist the product collection and prepend one log entry
    ///
    /// Both collections change or neither does: when the log write fails the
    /// previous products value is written back before the error returns.
    fn commit(&mut self, products: &[Product], entry: LogEntry) -> Result<(), LedgerError> {
        let mut log = self.list_log()?;
        debug!(action = %entry.action, details = %entry.details, "appending log entry");
        log.insert(0, entry);

        let prior = self.store.get(Product::COLLECTION)?;
        store::save_collection(self.store.as_mut(), products)?;

        if let Err(err) = store::save_collection(self.store.as_mut(), &log) {
            warn!(error = %err, "log write failed, restoring products");
            match prior {
                Some(raw) => self.store.set(Product::COLLECTION, &raw)?,
                None => store::save_collection::<Product>(self.store.as_mut(), &[])?,
            }
            return Err(err.into());
        }
        Ok(())
    }
}

/// Units across products, saturating at `u64::MAX`
pub fn total_units(products: &[Product]) -> u64 {
    products
        .iter()
        .fold(0u64, |total, p| total.saturating_add(p.quantity))
}

fn find_index(products: &[Product], name: &str) -> Option<usize> {
    products.iter().position(|p| p.matches_name(name))
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, LedgerError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(LedgerError::InvalidField(field))
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::MemoryStore;
    use crate::entities::LogType;

    fn ledger() -> Ledger {
        Ledger::new(MemoryStore::new())
    }

    fn ledger_with(name: &str, qty: u64, location: &str) -> Ledger {
        let mut ledger = ledger();
        ledger.receive(name, qty, location, None).unwrap();
        ledger
    }

    // =========================================================================
    // receive
    // =========================================================================

    #[test]
    fn test_receive_new_product() {
        let mut ledger = ledger();
        ledger.receive("Widget", 5, "A", None).unwrap();

        let products = ledger.list_products().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Widget");
        assert_eq!(products[0].quantity, 5);
        assert_eq!(products[0].location, "A");
        assert_eq!(products[0].category, "General");

        let log = ledger.list_log().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].log_type, LogType::In);
        assert_eq!(log[0].action, LogAction::AddStock);
        assert_eq!(log[0].details, "Created Widget: 5 units at A (General)");
    }

    #[test]
    fn test_receive_existing_product_ignores_case() {
        let mut ledger = ledger_with("Widget", 5, "A");
        let sku = ledger.list_products().unwrap()[0].sku.clone();

        let product = ledger.receive("WIDGET", 7, "B", Some("Hardware")).unwrap();
        assert_eq!(product.quantity, 12);
        assert_eq!(product.location, "B");
        // Category and SKU are fixed at creation
        assert_eq!(product.category, "General");
        assert_eq!(product.sku, sku);

        let products = ledger.list_products().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Widget");

        let log = ledger.list_log().unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].log_type, LogType::In);
        assert_eq!(log[0].details, "Updated Widget: +7 (Total: 12) at B");
    }

    #[test]
    fn test_receive_with_category() {
        let mut ledger = ledger();
        let product = ledger.receive("Chair", 3, "Showroom", Some("Furniture")).unwrap();
        assert_eq!(product.category, "Furniture");
    }

    #[test]
    fn test_receive_rejects_zero_quantity() {
        let mut ledger = ledger();
        let err = ledger.receive("Widget", 0, "A", None).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidQuantity { qty: 0 }));
        assert!(ledger.list_products().unwrap().is_empty());
        assert!(ledger.list_log().unwrap().is_empty());
    }

    #[test]
    fn test_receive_overflow_changes_nothing() {
        let mut ledger = ledger_with("Widget", u64::MAX, "A");

        let err = ledger.receive("widget", 5, "B", None).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::QuantityOverflow { ref name, qty: 5 } if name == "Widget"
        ));

        let products = ledger.list_products().unwrap();
        assert_eq!(products[0].quantity, u64::MAX);
        assert_eq!(products[0].location, "A");
        assert_eq!(ledger.list_log().unwrap().len(), 1);
    }

    #[test]
    fn test_totals_saturate() {
        let mut ledger = ledger_with("Widget", u64::MAX, "A");
        ledger.receive("Gadget", 10, "A", None).unwrap();

        assert_eq!(ledger.summary().unwrap().total_units, u64::MAX);
        let by_location = ledger.stock_by_location().unwrap();
        assert_eq!(by_location[0].quantity, u64::MAX);
    }

    #[test]
    fn test_receive_requires_location() {
        let mut ledger = ledger();
        let err = ledger.receive("Widget", 1, "   ", None).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidField("location")));
        assert!(ledger.list_log().unwrap().is_empty());
    }

    // =========================================================================
    // deliver
    // =========================================================================

    #[test]
    fn test_deliver_decrements() {
        let mut ledger = ledger_with("Widget", 50, "A");
        let product = ledger.deliver("widget", 10).unwrap();
        assert_eq!(product.quantity, 40);

        let log = ledger.list_log().unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].log_type, LogType::Out);
        assert_eq!(log[0].details, "Delivered 10 Widget (Remaining: 40)");
    }

    #[test]
    fn test_deliver_entire_stock() {
        let mut ledger = ledger_with("Widget", 50, "A");
        let product = ledger.deliver("Widget", 50).unwrap();
        assert_eq!(product.quantity, 0);
    }

    #[test]
    fn test_deliver_insufficient_stock_changes_nothing() {
        let mut ledger = ledger_with("Widget", 50, "A");
        let err = ledger.deliver("Widget", 60).unwrap_err();
        match err {
            LedgerError::InsufficientStock {
                requested,
                available,
                ..
            } => {
                assert_eq!(requested, 60);
                assert_eq!(available, 50);
            }
            other => panic!("unexpected error: {other}"),
        }

        assert_eq!(ledger.list_products().unwrap()[0].quantity, 50);
        assert_eq!(ledger.list_log().unwrap().len(), 1);
    }

    // =========================================================================
    // missing products
    // =========================================================================

    #[test]
    fn test_missing_product_is_not_found_everywhere() {
        let mut ledger = ledger_with("Widget", 5, "A");
        let before_products = ledger.list_products().unwrap();
        let before_log = ledger.list_log().unwrap();

        assert!(matches!(ledger.deliver("Gadget", 1), Err(LedgerError::NotFound(n)) if n == "Gadget"));
        assert!(matches!(ledger.move_stock("Gadget", None, "B"), Err(LedgerError::NotFound(_))));
        assert!(matches!(ledger.adjust("Gadget", 3), Err(LedgerError::NotFound(_))));

        assert_eq!(ledger.list_products().unwrap(), before_products);
        assert_eq!(ledger.list_log().unwrap(), before_log);
    }

    // =========================================================================
    // move
    // =========================================================================

    #[test]
    fn test_move_overwrites_location_without_qty() {
        let mut ledger = ledger_with("Steel Rods", 500, "Zone B");
        let product = ledger.move_stock("steel rods", None, "Showroom").unwrap();
        assert_eq!(product.location, "Showroom");
        assert_eq!(product.quantity, 500);

        let log = ledger.list_log().unwrap();
        assert_eq!(log[0].log_type, LogType::Move);
        assert_eq!(log[0].details, "Moved all Steel Rods from Zone B to Showroom");
    }

    #[test]
    fn test_move_with_qty_still_moves_whole_record() {
        let mut ledger = ledger_with("Widget", 50, "A");
        let product = ledger.move_stock("Widget", Some(10), "B").unwrap();
        assert_eq!(product.location, "B");
        assert_eq!(product.quantity, 50);
        assert_eq!(ledger.list_products().unwrap().len(), 1);
        assert_eq!(
            ledger.list_log().unwrap()[0].details,
            "Moved 10 Widget from A to B"
        );
    }

    #[test]
    fn test_move_zero_qty_reads_as_all() {
        let mut ledger = ledger_with("Widget", 50, "A");
        ledger.move_stock("Widget", Some(0), "B").unwrap();
        assert_eq!(
            ledger.list_log().unwrap()[0].details,
            "Moved all Widget from A to B"
        );
    }

    // =========================================================================
    // adjust
    // =========================================================================

    #[test]
    fn test_adjust_sets_exact_quantity_and_logs_delta() {
        let mut ledger = ledger_with("Office Chairs", 120, "Showroom");

        let product = ledger.adjust("office chairs", 115).unwrap();
        assert_eq!(product.quantity, 115);
        assert_eq!(
            ledger.list_log().unwrap()[0].details,
            "Audit Office Chairs: Corrected qty from 120 to 115 (-5)"
        );

        let product = ledger.adjust("Office Chairs", 130).unwrap();
        assert_eq!(product.quantity, 130);
        let log = ledger.list_log().unwrap();
        assert_eq!(log[0].log_type, LogType::Adjust);
        assert_eq!(
            log[0].details,
            "Audit Office Chairs: Corrected qty from 115 to 130 (+15)"
        );
    }

    #[test]
    fn test_adjust_to_zero() {
        let mut ledger = ledger_with("Widget", 5, "A");
        assert_eq!(ledger.adjust("Widget", 0).unwrap().quantity, 0);
    }

    #[test]
    fn test_adjust_negative_is_rejected() {
        let mut ledger = ledger_with("Widget", 5, "A");
        let err = ledger.adjust("Widget", -3).unwrap_err();
        assert!(matches!(err, LedgerError::NegativeStock { qty: -3, .. }));
        assert_eq!(ledger.list_products().unwrap()[0].quantity, 5);
        assert_eq!(ledger.list_log().unwrap().len(), 1);
    }

    // =========================================================================
    // log ordering and reads
    // =========================================================================

    #[test]
    fn test_log_is_newest_first() {
        let mut ledger = ledger();
        ledger.receive("Widget", 50, "A", None).unwrap();
        ledger.deliver("Widget", 5).unwrap();
        ledger.move_stock("Widget", None, "B").unwrap();
        ledger.adjust("Widget", 40).unwrap();

        let types: Vec<LogType> = ledger.list_log().unwrap().iter().map(|e| e.log_type).collect();
        assert_eq!(
            types,
            vec![LogType::Adjust, LogType::Move, LogType::Out, LogType::In]
        );
    }

    #[test]
    fn test_find_ignores_case_and_whitespace() {
        let ledger = ledger_with("Widget", 5, "A");
        assert!(ledger.find("  wIdGeT ").unwrap().is_some());
        assert!(ledger.find("Gadget").unwrap().is_none());
    }

    #[test]
    fn test_summary() {
        let mut ledger = ledger();
        assert_eq!(
            ledger.summary().unwrap(),
            Summary {
                total_units: 0,
                unique_products: 0,
                low_stock: 0,
                last_activity: None,
            }
        );

        ledger.receive("Widget", 5, "A", None).unwrap();
        ledger.receive("Gadget", 20, "A", None).unwrap();
        ledger.deliver("Gadget", 1).unwrap();

        let summary = ledger.summary().unwrap();
        assert_eq!(summary.total_units, 24);
        assert_eq!(summary.unique_products, 2);
        assert_eq!(summary.low_stock, 1);
        assert_eq!(
            summary.last_activity.map(|e| e.action),
            Some(LogAction::DeliverStock)
        );
    }

    #[test]
    fn test_low_stock_uses_configured_threshold() {
        let mut ledger = Ledger::new(MemoryStore::new()).with_low_stock_threshold(100);
        ledger.receive("Widget", 50, "A", None).unwrap();
        ledger.receive("Gadget", 150, "A", None).unwrap();

        let low: Vec<String> = ledger.low_stock().unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(low, vec!["Widget".to_string()]);
    }

    #[test]
    fn test_stock_by_location() {
        let mut ledger = ledger();
        ledger.receive("IPhones", 50, "Warehouse A", None).unwrap();
        ledger.receive("Office Chairs", 120, "Showroom", None).unwrap();
        ledger.receive("Cables", 30, "Warehouse A", None).unwrap();

        assert_eq!(
            ledger.stock_by_location().unwrap(),
            vec![
                LocationStock {
                    location: "Warehouse A".to_string(),
                    quantity: 80,
                },
                LocationStock {
                    location: "Showroom".to_string(),
                    quantity: 120,
                },
            ]
        );
    }

    #[test]
    fn test_seed_demo_only_when_empty() {
        let mut ledger = ledger();
        assert!(ledger.seed_demo().unwrap());
        let products = ledger.list_products().unwrap();
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].name, "IPhones");
        assert_eq!(products[2].category, "Raw Material");
        assert_eq!(ledger.list_log().unwrap().len(), 3);

        assert!(!ledger.seed_demo().unwrap());
        assert_eq!(ledger.list_products().unwrap().len(), 3);
    }

    #[test]
    fn test_init_writes_empty_collections() {
        let mut ledger = ledger();
        ledger.init().unwrap();
        assert!(ledger.list_products().unwrap().is_empty());
        assert!(ledger.list_log().unwrap().is_empty());
    }

    // =========================================================================
    // failed writes
    // =========================================================================

    /// Memory store whose writes to the log collection always fail
    struct FailingLogStore {
        inner: MemoryStore,
    }

    impl Store for FailingLogStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            if key == LogEntry::COLLECTION {
                return Err(StoreError::Io {
                    path: key.into(),
                    source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
                });
            }
            self.inner.set(key, value)
        }
    }

    #[test]
    fn test_failed_log_write_leaves_products_untouched() {
        let mut seeded = ledger();
        seeded.receive("Widget", 5, "A", None).unwrap();

        // Start from a store that already holds one product and one entry
        let mut inner = MemoryStore::new();
        for key in [Product::COLLECTION, LogEntry::COLLECTION] {
            let raw = seeded.store.get(key).unwrap().unwrap();
            inner.set(key, &raw).unwrap();
        }
        let mut ledger = Ledger::new(FailingLogStore { inner });

        assert!(matches!(
            ledger.receive("Gadget", 3, "B", None),
            Err(LedgerError::Store(_))
        ));
        assert!(ledger.deliver("Widget", 2).is_err());
        assert!(ledger.move_stock("Widget", None, "C").is_err());
        assert!(ledger.adjust("Widget", 9).is_err());

        let products = ledger.list_products().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].quantity, 5);
        assert_eq!(products[0].location, "A");
        assert_eq!(ledger.list_log().unwrap().len(), 1);
    }

    #[test]
    fn test_failed_first_write_leaves_store_empty() {
        let mut ledger = Ledger::new(FailingLogStore {
            inner: MemoryStore::new(),
        });

        assert!(ledger.receive("Widget", 5, "A", None).is_err());
        assert!(ledger.list_products().unwrap().is_empty());
        assert!(ledger.list_log().unwrap().is_empty());
    }
}
