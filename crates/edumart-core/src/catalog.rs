//! # Catalog Provider
//!
//! Read-only catalog access for the engine.
//!
//! ## Injected Provider Interface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Provider Boundary                           │
//! │                                                                         │
//! │  ┌──────────────────┐         ┌─────────────────────────────────────┐  │
//! │  │  OrderAggregator │         │       CatalogProvider (trait)       │  │
//! │  │  Comparison      │ ──────► │                                     │  │
//! │  │  Selector        │  reads  │  list_items()                       │  │
//! │  └──────────────────┘         │  list_entities(kind)                │  │
//! │                               │  find_item(id) / find_entity(id)    │  │
//! │                               └──────────────┬──────────────────────┘  │
//! │                                              │                          │
//! │                     ┌────────────────────────┼──────────────────┐      │
//! │                     ▼                        ▼                  ▼      │
//! │              StaticCatalog            live CMS source      test fixture │
//! │              (this module)            (production)         (unit tests) │
//! │                                                                         │
//! │  The engines never know which implementation they talk to.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All provider methods are synchronous, read-only and side-effect-free.
//! Callers that need determinism across a whole computation take a snapshot
//! via `list_items()` once and work from that.

use chrono::Utc;
use uuid::Uuid;

use crate::types::{CatalogItem, ComparableEntity, EntityKind};

// =============================================================================
// Provider Trait
// =============================================================================

/// Read-only source of catalog records.
///
/// Production supplies a live implementation backed by the content system;
/// tests supply a [`StaticCatalog`]. Either way the engine code is identical.
pub trait CatalogProvider: Send + Sync {
    /// Returns the orderable items in the catalog.
    ///
    /// Inactive (delisted) items are excluded by contract.
    fn list_items(&self) -> Vec<CatalogItem>;

    /// Returns the comparable entities of one kind.
    fn list_entities(&self, kind: EntityKind) -> Vec<ComparableEntity>;

    /// Looks up a single item by id.
    ///
    /// The default implementation scans `list_items()`; providers with an
    /// index may override.
    fn find_item(&self, item_id: &str) -> Option<CatalogItem> {
        self.list_items().into_iter().find(|i| i.id == item_id)
    }

    /// Looks up a single entity by id across both kinds.
    fn find_entity(&self, entity_id: &str) -> Option<ComparableEntity> {
        self.list_entities(EntityKind::School)
            .into_iter()
            .chain(self.list_entities(EntityKind::Teacher))
            .find(|e| e.id == entity_id)
    }
}

// =============================================================================
// Static Catalog
// =============================================================================

/// An in-memory catalog backed by fixed record lists.
///
/// ## Usage
/// ```rust
/// use edumart_core::catalog::{CatalogProvider, StaticCatalog};
///
/// let catalog = StaticCatalog::demo();
/// assert!(!catalog.list_items().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    items: Vec<CatalogItem>,
    entities: Vec<ComparableEntity>,
}

impl StaticCatalog {
    /// Creates a catalog from explicit record lists.
    pub fn new(items: Vec<CatalogItem>, entities: Vec<ComparableEntity>) -> Self {
        StaticCatalog { items, entities }
    }

    /// Returns all items, including inactive ones.
    ///
    /// Unlike [`CatalogProvider::list_items`], this is the raw backing list;
    /// useful for tests that need to reference ids of delisted records.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Returns all entities regardless of kind.
    pub fn entities(&self) -> &[ComparableEntity] {
        &self.entities
    }

    /// Builds the seeded development catalog.
    ///
    /// ## Generated Records
    /// Study-supply products with a spread of price points, a couple of
    /// on-sale items, one exhausted item, plus school and teacher profiles
    /// for the comparison pages. Ids are fresh UUIDs on every call, so look
    /// records up by SKU or name rather than hard-coding ids.
    pub fn demo() -> Self {
        let now = Utc::now();

        // (sku, name, price_cents, sale_bps, stock)
        const PRODUCTS: &[(&str, &str, i64, Option<u32>, i64)] = &[
            ("NTB-A5", "A5 Spiral Notebook", 349, None, 240),
            ("NTB-A4", "A4 Hardcover Notebook", 899, Some(1000), 180),
            ("PEN-BLU", "Ballpoint Pen Blue (12-pack)", 599, None, 500),
            ("PEN-GEL", "Gel Pen Set", 1299, Some(1500), 75),
            ("CAL-SCI", "Scientific Calculator", 2499, None, 60),
            ("BAG-STD", "Student Backpack", 4999, Some(2000), 35),
            ("MRK-WHB", "Whiteboard Markers (8-pack)", 1099, None, 120),
            ("ART-SET", "Art Supplies Set", 3499, None, 0), // sold out
        ];

        let items = PRODUCTS
            .iter()
            .map(|&(sku, name, price_cents, sale_discount_bps, stock)| CatalogItem {
                id: Uuid::new_v4().to_string(),
                sku: sku.to_string(),
                name: name.to_string(),
                description: None,
                price_cents,
                sale_discount_bps,
                stock,
                is_active: true,
                created_at: now,
                updated_at: now,
            })
            .collect();

        // (kind, name, rating, review_count, location, headline)
        let profiles: &[(EntityKind, &str, f64, i64, &str, &str)] = &[
            (
                EntityKind::School,
                "Northfield Academy",
                4.7,
                312,
                "Lahore",
                "STEM-focused K-12 campus",
            ),
            (
                EntityKind::School,
                "Riverside Grammar School",
                4.4,
                198,
                "Karachi",
                "Classical curriculum since 1962",
            ),
            (
                EntityKind::School,
                "Hillcrest Montessori",
                4.8,
                121,
                "Islamabad",
                "Child-led early education",
            ),
            (
                EntityKind::School,
                "Lakeview High",
                4.1,
                540,
                "Lahore",
                "Largest sports program in the region",
            ),
            (
                EntityKind::School,
                "Cedar Park International",
                4.6,
                87,
                "Karachi",
                "IB diploma programme",
            ),
            (
                EntityKind::Teacher,
                "Amina Raza",
                4.9,
                230,
                "Lahore",
                "Mathematics, O/A levels",
            ),
            (
                EntityKind::Teacher,
                "Bilal Hussain",
                4.5,
                164,
                "Karachi",
                "Physics and robotics",
            ),
            (
                EntityKind::Teacher,
                "Sara Khan",
                4.7,
                98,
                "Islamabad",
                "English literature",
            ),
            (
                EntityKind::Teacher,
                "Omar Siddiqui",
                4.3,
                310,
                "Lahore",
                "Chemistry, exam prep",
            ),
            (
                EntityKind::Teacher,
                "Fatima Noor",
                4.8,
                142,
                "Karachi",
                "Computer science",
            ),
        ];

        let entities = profiles
            .iter()
            .map(
                |&(kind, name, rating, review_count, location, headline)| ComparableEntity {
                    id: Uuid::new_v4().to_string(),
                    kind,
                    name: name.to_string(),
                    rating,
                    review_count,
                    location: Some(location.to_string()),
                    headline: Some(headline.to_string()),
                },
            )
            .collect();

        StaticCatalog::new(items, entities)
    }
}

impl CatalogProvider for StaticCatalog {
    fn list_items(&self) -> Vec<CatalogItem> {
        self.items
            .iter()
            .filter(|i| i.is_active)
            .cloned()
            .collect()
    }

    fn list_entities(&self, kind: EntityKind) -> Vec<ComparableEntity> {
        self.entities
            .iter()
            .filter(|e| e.kind == kind)
            .cloned()
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_has_records() {
        let catalog = StaticCatalog::demo();
        assert_eq!(catalog.list_items().len(), 8);
        assert_eq!(catalog.list_entities(EntityKind::School).len(), 5);
        assert_eq!(catalog.list_entities(EntityKind::Teacher).len(), 5);
    }

    #[test]
    fn test_find_item_by_id() {
        let catalog = StaticCatalog::demo();
        let first = &catalog.items()[0];

        let found = catalog.find_item(&first.id).unwrap();
        assert_eq!(found.sku, first.sku);

        assert!(catalog.find_item("no-such-id").is_none());
    }

    #[test]
    fn test_find_entity_searches_both_kinds() {
        let catalog = StaticCatalog::demo();
        let school = &catalog.list_entities(EntityKind::School)[0];
        let teacher = &catalog.list_entities(EntityKind::Teacher)[0];

        assert_eq!(catalog.find_entity(&school.id).unwrap().kind, EntityKind::School);
        assert_eq!(
            catalog.find_entity(&teacher.id).unwrap().kind,
            EntityKind::Teacher
        );
        assert!(catalog.find_entity("no-such-id").is_none());
    }

    #[test]
    fn test_inactive_items_are_excluded_from_listing() {
        let mut catalog = StaticCatalog::demo();
        catalog.items[0].is_active = false;
        let delisted_id = catalog.items[0].id.clone();

        assert_eq!(catalog.list_items().len(), 7);
        assert!(catalog.find_item(&delisted_id).is_none());
    }
}
