//! # Storefront Walkthrough
//!
//! Drives a scripted session against the seeded demo catalog for manual
//! inspection of the engine output.
//!
//! ## Usage
//! ```bash
//! cargo run -p edumart-session --bin walkthrough
//!
//! # With engine logs
//! RUST_LOG=debug cargo run -p edumart-session --bin walkthrough
//! ```
//!
//! ## What It Does
//! 1. Builds the demo catalog (study supplies + school/teacher profiles)
//! 2. Places a bulk order that crosses the 20-unit discount tier
//! 3. Toggles schools into the comparison until the cap refuses a fifth
//! 4. Prints the priced summary and the final comparison set

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use edumart_core::catalog::{CatalogProvider, StaticCatalog};
use edumart_session::{CompareState, OrderState, StoreConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = StoreConfig::from_env();
    let catalog = Arc::new(StaticCatalog::demo());

    let order = OrderState::new(
        catalog.clone(),
        config.schedule().expect("default schedule is valid"),
    );
    let compare = CompareState::new(catalog.clone());

    println!("=== {} ===", config.store_name);

    // Bulk order: 12 A5 notebooks, 8 pen packs, 5 calculators = 25 units
    let items = catalog.list_items();
    let by_sku = |sku: &str| {
        items
            .iter()
            .find(|i| i.sku == sku)
            .unwrap_or_else(|| panic!("demo catalog is missing {}", sku))
            .id
            .clone()
    };

    order.set_quantity(&by_sku("NTB-A5"), 12).expect("in stock");
    order.set_quantity(&by_sku("PEN-BLU"), 8).expect("in stock");
    order.set_quantity(&by_sku("CAL-SCI"), 5).expect("in stock");

    // The sold-out art set is refused, as it should be
    if let Err(refused) = order.set_quantity(&by_sku("ART-SET"), 1) {
        println!("refused: {}", refused.message);
    }

    let response = order.get_order();
    println!("\n--- Order ---");
    for line in &response.summary.line_items {
        println!(
            "{:<32} x{:>3}  {}",
            line.name,
            line.quantity,
            config.format_currency(line.line_total_cents)
        );
    }
    println!(
        "subtotal: {} ({} units)",
        config.format_currency(response.summary.subtotal_cents),
        response.summary.total_quantity
    );
    if let Some(tier) = response.summary.applied_tier {
        println!(
            "bulk tier {}+ units: -{}",
            tier.min_quantity,
            config.format_currency(response.summary.bulk_discount_cents)
        );
    }
    println!("total: {}", config.format_currency(response.summary.total_cents));

    // Comparison: try all five demo schools; the fifth is refused
    println!("\n--- Comparison ---");
    for school in catalog.list_entities(edumart_core::EntityKind::School) {
        match compare.toggle(&school.id) {
            Ok(resp) => println!("added {} ({} slots left)", school.name, resp.remaining_slots),
            Err(refused) => println!("refused {}: {}", school.name, refused.message),
        }
    }

    let selection = compare.get_selection();
    println!(
        "comparing {} schools: {}",
        selection.entries.len(),
        selection
            .entries
            .iter()
            .map(|e| e.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
}
