//! Integration tests driving a whole storefront session through the public
//! facade: ordering, comparison, and replay determinism.

use std::sync::Arc;

use chrono::Utc;
use edumart_core::catalog::StaticCatalog;
use edumart_core::pricing::DiscountSchedule;
use edumart_core::types::{CatalogItem, ComparableEntity, EntityKind};
use edumart_session::{CompareState, OrderState};

fn item(id: &str, price_cents: i64, sale_bps: Option<u32>, stock: i64) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        sku: format!("SKU-{}", id),
        name: format!("Item {}", id),
        description: None,
        price_cents,
        sale_discount_bps: sale_bps,
        stock,
        is_active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn school(id: &str, name: &str) -> ComparableEntity {
    ComparableEntity {
        id: id.to_string(),
        kind: EntityKind::School,
        name: name.to_string(),
        rating: 4.5,
        review_count: 50,
        location: Some("Lahore".to_string()),
        headline: None,
    }
}

fn fixture_catalog() -> Arc<StaticCatalog> {
    Arc::new(StaticCatalog::new(
        vec![
            item("notebook", 349, None, 500),
            item("pens", 599, Some(1000), 500),
            item("calculator", 2499, None, 500),
        ],
        vec![
            school("n", "Northfield"),
            school("r", "Riverside"),
            school("h", "Hillcrest"),
            school("l", "Lakeview"),
            school("c", "Cedar Park"),
        ],
    ))
}

/// Runs a fixed mutation sequence against fresh state and returns the final
/// order + selection, serialized.
fn run_session(catalog: Arc<StaticCatalog>) -> (String, String) {
    let order = OrderState::new(catalog.clone(), DiscountSchedule::standard_retail());
    let compare = CompareState::new(catalog);

    order.set_quantity("notebook", 30).unwrap();
    order.set_quantity("pens", 10).unwrap();
    order.set_quantity("notebook", 25).unwrap(); // replace, not accumulate
    order.set_quantity("calculator", 20).unwrap();
    order.set_quantity("pens", 0).unwrap(); // remove the pens line

    compare.toggle("n").unwrap();
    compare.toggle("r").unwrap();
    compare.toggle("h").unwrap();
    compare.toggle("r").unwrap(); // toggle off
    compare.toggle("l").unwrap();

    let summary = serde_json::to_string(&order.get_order().summary).unwrap();
    let selection: Vec<String> = compare
        .get_selection()
        .entries
        .iter()
        .map(|e| e.id.clone())
        .collect();
    (summary, selection.join(","))
}

#[test]
fn full_session_prices_and_selects_correctly() {
    let order = OrderState::new(fixture_catalog(), DiscountSchedule::standard_retail());

    order.set_quantity("notebook", 25).unwrap();
    order.set_quantity("calculator", 20).unwrap();

    let summary = order.get_order().summary;

    // 45 units: 25×349 + 20×2499 = 8725 + 49980 = 58705, still in the 5% tier
    assert_eq!(summary.total_quantity, 45);
    assert_eq!(summary.subtotal_cents, 58_705);
    assert_eq!(summary.applied_tier.unwrap().min_quantity, 20);
    // 5% of 58705 = 2935.25 → 2935 (truncated)
    assert_eq!(summary.bulk_discount_cents, 2_935);
    assert_eq!(summary.total_cents, 55_770);
}

#[test]
fn sale_price_feeds_the_bulk_tier() {
    let order = OrderState::new(fixture_catalog(), DiscountSchedule::standard_retail());

    // pens are 10% off: 599 → 539.1 → 539 effective
    order.set_quantity("pens", 50).unwrap();
    let summary = order.get_order().summary;

    assert_eq!(summary.line_items[0].unit_price_cents, 539);
    assert_eq!(summary.subtotal_cents, 26_950);
    // 50 units reach the 10% tier; 10% of 26950 = 2695 exactly
    assert_eq!(summary.applied_tier.unwrap().rate_bps, 1000);
    assert_eq!(summary.total_cents, 24_255);
}

#[test]
fn replaying_a_session_is_deterministic() {
    let catalog = fixture_catalog();

    let first = run_session(catalog.clone());
    let second = run_session(catalog);

    assert_eq!(first.0, second.0);
    assert_eq!(first.1, second.1);
}

#[test]
fn comparison_cap_holds_across_the_facade() {
    let compare = CompareState::new(fixture_catalog());

    for id in ["n", "r", "h", "l"] {
        compare.toggle(id).unwrap();
    }

    let refused = compare.toggle("c").unwrap_err();
    assert_eq!(refused.code, edumart_session::ErrorCode::CompareLimitReached);

    let selection = compare.get_selection();
    assert_eq!(selection.entries.len(), 4);
    assert_eq!(selection.remaining_slots, 0);
}

#[test]
fn clears_reset_both_components() {
    let catalog = fixture_catalog();
    let order = OrderState::new(catalog.clone(), DiscountSchedule::standard_retail());
    let compare = CompareState::new(catalog);

    order.set_quantity("notebook", 5).unwrap();
    compare.toggle("n").unwrap();

    order.clear();
    compare.clear();

    assert_eq!(order.get_order().summary.total_cents, 0);
    assert!(compare.get_selection().entries.is_empty());
}
