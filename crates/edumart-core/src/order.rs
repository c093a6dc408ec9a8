//! # Order Aggregation
//!
//! Converts catalog selections and quantities into a priced order summary.
//!
//! ## Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Aggregator Operations                          │
//! │                                                                         │
//! │  Storefront Action          Operation               State Change        │
//! │  ─────────────────          ─────────               ────────────        │
//! │                                                                         │
//! │  Pick quantity ───────────► set_quantity(id, n) ──► line created or     │
//! │                                                     quantity replaced   │
//! │                                                                         │
//! │  Set quantity to 0 ───────► set_quantity(id, 0) ──► line removed        │
//! │                                                                         │
//! │  Click Remove ────────────► remove_line(id) ──────► line removed        │
//! │                                                                         │
//! │  Click Clear ─────────────► clear() ──────────────► all lines removed   │
//! │                                                                         │
//! │  View order ──────────────► summary() ────────────► (read only)         │
//! │                                                                         │
//! │  summary() snapshots the catalog ONCE at entry and prices the whole     │
//! │  order from that snapshot, so a concurrent catalog refresh can never    │
//! │  produce a summary that mixes old and new prices.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pricing Pipeline
//! ```text
//! listed price ──► item sale discount (truncated) ──► effective unit price
//!       effective unit price × quantity ──► line total
//!       Σ line totals ──► subtotal
//!       Σ quantities ──► tier lookup ──► bulk discount (truncated)
//!       subtotal − bulk discount ──► total
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::CatalogProvider;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::pricing::{DiscountSchedule, DiscountTier};
use crate::{MAX_LINE_QUANTITY, MAX_ORDER_LINES};

// =============================================================================
// Order Line
// =============================================================================

/// A (item, quantity) pair in the working order.
///
/// ## Invariant
/// `quantity` is always positive. A quantity of zero removes the line; a
/// zero-quantity line is never stored.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Catalog item id this line refers to.
    pub item_id: String,

    /// Quantity ordered. Always > 0.
    pub quantity: i64,

    /// When this line was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

// =============================================================================
// Summary DTOs
// =============================================================================

/// A priced line in the order summary.
///
/// Sku and name are resolved from the catalog snapshot so the storefront can
/// render the summary without further lookups.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Catalog item id.
    pub item_id: String,

    /// SKU from the catalog snapshot.
    pub sku: String,

    /// Display name from the catalog snapshot.
    pub name: String,

    /// Quantity ordered.
    pub quantity: i64,

    /// Listed unit price in cents, before any discount.
    pub list_price_cents: i64,

    /// Effective unit price in cents, item sale discount applied (truncated).
    pub unit_price_cents: i64,

    /// Whether an item-level sale discount was applied.
    pub on_sale: bool,

    /// Line total in cents (effective unit price × quantity).
    pub line_total_cents: i64,
}

/// The computed order summary.
///
/// Pure data: recomputing against the same catalog snapshot and the same
/// lines always yields an identical value.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// One entry per resolvable order line, insertion order preserved.
    pub line_items: Vec<LineItem>,

    /// Sum of line totals in cents.
    pub subtotal_cents: i64,

    /// Sum of quantities across lines. This is the bulk tier lookup input,
    /// not the count of distinct items.
    pub total_quantity: i64,

    /// The bulk tier in effect, if the total quantity reaches one.
    pub applied_tier: Option<DiscountTier>,

    /// Bulk discount in cents (subtotal × tier rate, truncated).
    pub bulk_discount_cents: i64,

    /// Final payable total in cents (subtotal − bulk discount).
    pub total_cents: i64,
}

impl OrderSummary {
    /// The all-zero summary of an empty order.
    pub fn empty() -> Self {
        OrderSummary {
            line_items: Vec::new(),
            subtotal_cents: 0,
            total_quantity: 0,
            applied_tier: None,
            bulk_discount_cents: 0,
            total_cents: 0,
        }
    }
}

// =============================================================================
// Order Aggregator
// =============================================================================

/// Maintains a working set of order lines and prices them on demand.
///
/// ## Lifecycle
/// One aggregator per session, created empty, mutated only through the
/// operations below, discarded with the session. Nothing is persisted.
///
/// ## Invariants
/// - Lines are unique by `item_id`
/// - Quantities are always > 0 (setting 0 removes the line)
/// - At most [`MAX_ORDER_LINES`] lines, [`MAX_LINE_QUANTITY`] per line
pub struct OrderAggregator {
    catalog: Arc<dyn CatalogProvider>,
    schedule: DiscountSchedule,
    lines: Vec<OrderLine>,
}

impl OrderAggregator {
    /// Creates an empty aggregator over an injected catalog provider.
    pub fn new(catalog: Arc<dyn CatalogProvider>, schedule: DiscountSchedule) -> Self {
        OrderAggregator {
            catalog,
            schedule,
            lines: Vec::new(),
        }
    }

    /// Sets the quantity for a catalog item, creating or replacing its line.
    ///
    /// ## Behavior
    /// - Quantity 0: removes the line if present; `Ok` either way
    /// - Quantity > 0: creates the line or replaces its quantity
    /// - Repeated identical calls are idempotent
    ///
    /// ## Errors
    /// - [`CoreError::ItemNotFound`] - id does not resolve in the catalog.
    ///   Expected when the UI races a catalog refresh; the caller surfaces
    ///   it as feedback, the order is unchanged.
    /// - [`CoreError::OutOfStock`] - the item has zero stock. Reported, not
    ///   silently clamped, so the UI can distinguish it from a stale id.
    /// - [`CoreError::InsufficientStock`] - stock exists but not enough.
    /// - [`CoreError::QuantityTooLarge`] / [`CoreError::OrderTooLarge`] -
    ///   per-line and per-order caps.
    /// - Negative quantity is invalid input and fails validation.
    pub fn set_quantity(&mut self, item_id: &str, quantity: i64) -> CoreResult<()> {
        if quantity < 0 {
            return Err(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: 0,
                max: MAX_LINE_QUANTITY,
            }
            .into());
        }

        if quantity == 0 {
            self.remove_line(item_id);
            return Ok(());
        }

        if quantity > MAX_LINE_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_LINE_QUANTITY,
            });
        }

        let item = self
            .catalog
            .find_item(item_id)
            .ok_or_else(|| CoreError::ItemNotFound(item_id.to_string()))?;

        if !item.in_stock() {
            return Err(CoreError::OutOfStock { sku: item.sku });
        }

        if !item.can_order(quantity) {
            return Err(CoreError::InsufficientStock {
                sku: item.sku,
                available: item.stock,
                requested: quantity,
            });
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item_id) {
            line.quantity = quantity;
            return Ok(());
        }

        if self.lines.len() >= MAX_ORDER_LINES {
            return Err(CoreError::OrderTooLarge {
                max: MAX_ORDER_LINES,
            });
        }

        self.lines.push(OrderLine {
            item_id: item_id.to_string(),
            quantity,
            added_at: Utc::now(),
        });
        Ok(())
    }

    /// Removes a line by item id. Returns whether a line was removed;
    /// removing an absent line is a no-op, not an error.
    pub fn remove_line(&mut self, item_id: &str) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.item_id != item_id);
        self.lines.len() != initial_len
    }

    /// Clears all order lines unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Returns the current order lines, insertion order preserved.
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Returns the number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Checks if the order is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Computes the priced order summary. Pure: no state is mutated and the
    /// same lines against the same catalog always produce identical output.
    ///
    /// ## Snapshot Discipline
    /// The catalog is listed exactly once at entry; every price and name in
    /// the summary comes from that snapshot. A line whose item no longer
    /// resolves in the snapshot (delisted mid-session) contributes nothing -
    /// neither money nor quantity - rather than failing the whole summary.
    ///
    /// ## Example
    /// Three lines with quantities 10, 10 and 5 total 25 units, which earns
    /// the 20-unit tier of the standard schedule: the summary's total is the
    /// subtotal less 5%, truncated to whole cents.
    pub fn summary(&self) -> OrderSummary {
        if self.lines.is_empty() {
            return OrderSummary::empty();
        }

        let snapshot: HashMap<String, _> = self
            .catalog
            .list_items()
            .into_iter()
            .map(|item| (item.id.clone(), item))
            .collect();

        let mut line_items = Vec::with_capacity(self.lines.len());
        let mut subtotal = Money::zero();
        let mut total_quantity = 0i64;

        for line in &self.lines {
            let Some(item) = snapshot.get(&line.item_id) else {
                // Stale line: the item left the catalog after it was added
                continue;
            };

            let unit_price = item.effective_unit_price();
            let line_total = unit_price.multiply_quantity(line.quantity);

            line_items.push(LineItem {
                item_id: line.item_id.clone(),
                sku: item.sku.clone(),
                name: item.name.clone(),
                quantity: line.quantity,
                list_price_cents: item.price_cents,
                unit_price_cents: unit_price.cents(),
                on_sale: item.is_on_sale(),
                line_total_cents: line_total.cents(),
            });

            subtotal += line_total;
            total_quantity += line.quantity;
        }

        let applied_tier = self.schedule.tier_for(total_quantity);
        let bulk_discount = match applied_tier {
            Some(tier) => subtotal.discount_amount(tier.rate()),
            None => Money::zero(),
        };

        OrderSummary {
            line_items,
            subtotal_cents: subtotal.cents(),
            total_quantity,
            applied_tier,
            bulk_discount_cents: bulk_discount.cents(),
            total_cents: (subtotal - bulk_discount).cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
