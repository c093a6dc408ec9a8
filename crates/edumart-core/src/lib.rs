//! # edumart-core: Pure Business Logic for the EduMart Storefront
//!
//! This crate is the **heart** of the EduMart education marketplace. It
//! contains all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       EduMart Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Storefront (TypeScript)                  │   │
//! │  │   Shop UI ──► Cart UI ──► Schools UI ──► Compare UI             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ generated TS bindings                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    edumart-session                              │   │
//! │  │    per-session state, response DTOs, store config               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ edumart-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │  pricing  │  │   order   │  │  compare  │  │   │
//! │  │   │   Money   │  │ Discount  │  │   Order   │  │Comparison │  │   │
//! │  │   │  Discount │  │ Schedule  │  │Aggregator │  │ Selector  │  │   │
//! │  │   │   Rate    │  │   tiers   │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              Catalog Provider (injected interface)              │   │
//! │  │        static fixture in tests, live source in production       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CatalogItem, ComparableEntity, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Bulk discount tiers and tier lookup
//! - [`catalog`] - Catalog provider interface + static fixture
//! - [`order`] - Order aggregation and summary computation
//! - [`compare`] - Bounded side-by-side comparison selection
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every computation is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All failure conditions are typed result values, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use edumart_core::catalog::StaticCatalog;
//! use edumart_core::order::OrderAggregator;
//! use edumart_core::pricing::DiscountSchedule;
//!
//! let catalog = Arc::new(StaticCatalog::demo());
//! let item_id = catalog.items()[0].id.clone();
//!
//! let mut order = OrderAggregator::new(catalog, DiscountSchedule::standard_retail());
//! order.set_quantity(&item_id, 25).unwrap();
//!
//! let summary = order.summary();
//! assert_eq!(summary.total_quantity, 25);
//! // 25 units cross the 20-unit threshold: the 5% bulk tier applies
//! assert_eq!(summary.applied_tier.unwrap().rate_bps, 500);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod compare;
pub mod error;
pub mod money;
pub mod order;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use edumart_core::Money` instead of
// `use edumart_core::money::Money`

pub use catalog::{CatalogProvider, StaticCatalog};
pub use compare::{ComparisonSelector, ToggleAction};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{LineItem, OrderAggregator, OrderLine, OrderSummary};
pub use pricing::{DiscountSchedule, DiscountTier};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum entities allowed in a comparison set.
///
/// ## Business Reason
/// The side-by-side comparison view renders at most four columns; a fifth
/// selection is refused rather than silently evicting an earlier choice.
pub const MAX_COMPARE_ENTRIES: usize = 4;

/// Maximum distinct lines allowed in a single order.
///
/// ## Business Reason
/// Prevents runaway carts and ensures reasonable bulk-order sizes.
/// Can be made configurable per store in future versions.
pub const MAX_ORDER_LINES: usize = 100;

/// Maximum quantity of a single item in an order.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// Configurable per store in future versions.
pub const MAX_LINE_QUANTITY: i64 = 999;
