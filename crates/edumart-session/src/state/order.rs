//! # Order State
//!
//! Manages the current session's order.
//!
//! ## Thread Safety
//! The aggregator is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple interaction events may access/modify the order
//! 2. Only one event should modify the order at a time
//! 3. The web layer may dispatch events from concurrent tasks
//!
//! ## Order Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order State Operations                               │
//! │                                                                         │
//! │  Storefront Action        Facade Method            Engine Change        │
//! │  ─────────────────        ─────────────            ─────────────        │
//! │                                                                         │
//! │  Pick quantity ─────────► set_quantity() ────────► line set/replaced    │
//! │                                                                         │
//! │  Click Remove ──────────► remove_line() ─────────► line removed         │
//! │                                                                         │
//! │  Click Clear ───────────► clear() ───────────────► all lines removed    │
//! │                                                                         │
//! │  View order ────────────► get_order() ───────────► (read only)          │
//! │                                                                         │
//! │  NOTE: All write operations acquire the Mutex lock exclusively.         │
//! │        Read operations also acquire the lock but release it quickly.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use edumart_core::catalog::CatalogProvider;
use edumart_core::order::{OrderAggregator, OrderLine, OrderSummary};
use edumart_core::pricing::DiscountSchedule;

use crate::error::SessionError;

/// Order response including lines and the computed summary.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub lines: Vec<OrderLine>,
    pub summary: OrderSummary,
}

impl OrderResponse {
    fn from_aggregator(order: &OrderAggregator) -> Self {
        OrderResponse {
            lines: order.lines().to_vec(),
            summary: order.summary(),
        }
    }
}

/// Session-managed order state.
///
/// ## Why Not RwLock?
/// Order operations are quick, and most operations modify state.
/// A RwLock would add complexity with minimal benefit.
#[derive(Clone)]
pub struct OrderState {
    order: Arc<Mutex<OrderAggregator>>,
}

impl OrderState {
    /// Creates a new empty order state for a session.
    pub fn new(catalog: Arc<dyn CatalogProvider>, schedule: DiscountSchedule) -> Self {
        OrderState {
            order: Arc::new(Mutex::new(OrderAggregator::new(catalog, schedule))),
        }
    }

    /// Executes a function with read access to the aggregator.
    pub fn with_order<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OrderAggregator) -> R,
    {
        let order = self.order.lock().expect("Order mutex poisoned");
        f(&order)
    }

    /// Executes a function with write access to the aggregator.
    pub fn with_order_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrderAggregator) -> R,
    {
        let mut order = self.order.lock().expect("Order mutex poisoned");
        f(&mut order)
    }

    /// Gets the current order contents and summary.
    pub fn get_order(&self) -> OrderResponse {
        debug!("get_order");
        self.with_order(OrderResponse::from_aggregator)
    }

    /// Sets the quantity for an item (0 removes its line).
    ///
    /// ## Returns
    /// Updated order on success; a structured [`SessionError`] when the
    /// engine refuses (stale id, out of stock, caps). The order is unchanged
    /// on refusal.
    pub fn set_quantity(&self, item_id: &str, quantity: i64) -> Result<OrderResponse, SessionError> {
        debug!(item_id = %item_id, quantity = %quantity, "set_quantity");

        self.with_order_mut(|order| {
            order.set_quantity(item_id, quantity)?;
            Ok(OrderResponse::from_aggregator(order))
        })
    }

    /// Removes a line from the order. Absent lines are a no-op.
    pub fn remove_line(&self, item_id: &str) -> OrderResponse {
        debug!(item_id = %item_id, "remove_line");

        self.with_order_mut(|order| {
            order.remove_line(item_id);
            OrderResponse::from_aggregator(order)
        })
    }

    /// Clears all lines from the order.
    ///
    /// ## When Used
    /// - User abandons the bulk order
    /// - After checkout hand-off (new order)
    pub fn clear(&self) -> OrderResponse {
        debug!("clear_order");

        self.with_order_mut(|order| {
            order.clear();
            OrderResponse::from_aggregator(order)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use edumart_core::catalog::StaticCatalog;
    use edumart_core::types::CatalogItem;

    fn test_item(id: &str, price_cents: i64, stock: i64) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            sku: format!("SKU-{}", id),
            name: format!("Item {}", id),
            description: None,
            price_cents,
            sale_discount_bps: None,
            stock,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn order_state() -> OrderState {
        let catalog = Arc::new(StaticCatalog::new(
            vec![test_item("1", 999, 50), test_item("2", 500, 50)],
            Vec::new(),
        ));
        OrderState::new(catalog, DiscountSchedule::standard_retail())
    }

    #[test]
    fn test_set_quantity_returns_updated_order() {
        let state = order_state();

        let response = state.set_quantity("1", 2).unwrap();
        assert_eq!(response.lines.len(), 1);
        assert_eq!(response.summary.subtotal_cents, 1998);
    }

    #[test]
    fn test_refusal_leaves_order_unchanged() {
        let state = order_state();
        state.set_quantity("1", 2).unwrap();

        assert!(state.set_quantity("ghost", 1).is_err());

        let response = state.get_order();
        assert_eq!(response.lines.len(), 1);
        assert_eq!(response.summary.total_quantity, 2);
    }

    #[test]
    fn test_clear_returns_empty_order() {
        let state = order_state();
        state.set_quantity("1", 2).unwrap();
        state.set_quantity("2", 3).unwrap();

        let response = state.clear();
        assert!(response.lines.is_empty());
        assert_eq!(response.summary.total_cents, 0);
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let state = order_state();
        state.set_quantity("1", 1).unwrap();

        let json = serde_json::to_value(state.get_order()).unwrap();
        assert!(json["summary"]["totalQuantity"].is_i64());
        assert!(json["lines"][0]["itemId"].is_string());
    }
}
