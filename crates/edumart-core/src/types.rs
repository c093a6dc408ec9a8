//! # Domain Types
//!
//! Core domain types used throughout the EduMart engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────┐   ┌─────────────────┐   │
//! │  │  CatalogItem    │   │  ComparableEntity   │   │  DiscountRate   │   │
//! │  │  ─────────────  │   │  ─────────────────  │   │  ─────────────  │   │
//! │  │  id (UUID)      │   │  id (UUID)          │   │  bps (u32)      │   │
//! │  │  sku (business) │   │  kind               │   │  500 = 5%       │   │
//! │  │  name           │   │  name, rating       │   └─────────────────┘   │
//! │  │  price_cents    │   │  location, headline │                         │
//! │  │  stock          │   └─────────────────────┘   ┌─────────────────┐   │
//! │  └─────────────────┘                             │   EntityKind    │   │
//! │                                                  │  ─────────────  │   │
//! │  Items are priced and ordered; entities are      │  School         │   │
//! │  rated and compared. The two never mix.          │  Teacher        │   │
//! │                                                  └─────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every catalog record has:
//! - `id`: UUID v4 - immutable, stable across catalog refreshes
//! - Business ID: (sku for items) - human-readable, potentially mutable

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 500 bps = 5% (the first bulk tier of the standard schedule)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a discount rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        DiscountRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero discount rate.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Catalog Item
// =============================================================================

/// A product available in the storefront catalog.
///
/// Catalog items are owned and supplied by the catalog provider; the engine
/// treats them as immutable records.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogItem {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Stock Keeping Unit - business identifier.
    pub sku: String,

    /// Display name shown in the storefront and on the order summary.
    pub name: String,

    /// Optional description for product details.
    pub description: Option<String>,

    /// Listed price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Item-level sale discount in basis points, if the item is on sale.
    /// Applied before any bulk tier discount.
    pub sale_discount_bps: Option<u32>,

    /// Current stock level. Non-negative by provider contract.
    pub stock: i64,

    /// Whether the item is listed for sale (soft delete).
    pub is_active: bool,

    /// When the item was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the item was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl CatalogItem {
    /// Returns the listed price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the item-level sale rate (zero when not on sale).
    #[inline]
    pub fn sale_rate(&self) -> DiscountRate {
        DiscountRate::from_bps(self.sale_discount_bps.unwrap_or(0))
    }

    /// Checks if the item is currently on sale.
    #[inline]
    pub fn is_on_sale(&self) -> bool {
        !self.sale_rate().is_zero()
    }

    /// Returns the effective unit price with the sale discount applied.
    ///
    /// The discount is truncated toward zero, so an on-sale item is never
    /// cheaper than its advertised percentage implies by a rounded-up cent.
    pub fn effective_unit_price(&self) -> Money {
        self.price().less_discount(self.sale_rate())
    }

    /// Checks if the item has any stock at all.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Checks if the requested quantity can be fulfilled from stock.
    pub fn can_order(&self, quantity: i64) -> bool {
        self.stock >= quantity
    }
}

// =============================================================================
// Entity Kind
// =============================================================================

/// The kind of a comparable catalog entity.
///
/// A comparison set is homogeneous: schools compare against schools,
/// teachers against teachers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A school profile.
    School,
    /// A teacher profile.
    Teacher,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::School => write!(f, "school"),
            EntityKind::Teacher => write!(f, "teacher"),
        }
    }
}

// =============================================================================
// Comparable Entity
// =============================================================================

/// A school or teacher profile eligible for side-by-side comparison.
///
/// Display attributes only; entities are never priced or ordered.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComparableEntity {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Whether this record is a school or a teacher.
    pub kind: EntityKind,

    /// Display name.
    pub name: String,

    /// Average rating, 0.0 to 5.0.
    pub rating: f64,

    /// Number of reviews behind the rating.
    pub review_count: i64,

    /// City / area shown in the comparison table.
    pub location: Option<String>,

    /// Short tagline (subject taught, school motto).
    pub headline: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================
