//! # Session Walkthrough Demo
//!
//! Drives one cart session end to end: add items, apply a promo, pick
//! shipping, switch display currency, place the order.
//!
//! ## Usage
//! ```bash
//! cargo run -p storefront-session --bin demo
//!
//! # With debug logs per operation
//! RUST_LOG=debug cargo run -p storefront-session --bin demo
//! ```

use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use storefront_core::types::{Product, ShippingMethod, VariantSelection};
use storefront_session::CartSession;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront_core=debug,storefront_session=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// A slice of the catalog, as the catalog source would supply it.
fn sample_catalog() -> Vec<Product> {
    vec![
        Product {
            id: "tote-01".to_string(),
            name: "Minimal Tote".to_string(),
            category: "Bags".to_string(),
            price_cents: 4900,
            original_price_cents: Some(6500),
            colors: vec!["Black".to_string(), "Tan".to_string()],
            sizes: vec![],
            rating: 4.6,
            review_count: 128,
        },
        Product {
            id: "tee-04".to_string(),
            name: "Heavyweight Tee".to_string(),
            category: "Apparel".to_string(),
            price_cents: 3200,
            original_price_cents: None,
            colors: vec!["White".to_string(), "Navy".to_string()],
            sizes: vec!["S".to_string(), "M".to_string(), "L".to_string()],
            rating: 4.8,
            review_count: 412,
        },
    ]
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let catalog = sample_catalog();
    let session = CartSession::new();

    // Build a cart: two totes (one add merges into the other) and a tee.
    session.add_to_cart(&catalog[0], VariantSelection::none())?;
    session.add_to_cart(&catalog[0], VariantSelection::none())?;
    let totals = session.add_to_cart(&catalog[1], VariantSelection::new("Navy", "M"))?;
    info!(subtotal = %totals.subtotal, "Cart built");

    if session.apply_promo("SAVE10") {
        info!(discount = %session.totals().discount, "Promo applied");
    }

    session.set_shipping(
        ShippingMethod::find("express").expect("express tier is always offered"),
    );

    let totals = session.totals();
    info!(
        subtotal = %totals.subtotal,
        discount = %totals.discount,
        tax = %totals.tax,
        shipping = %totals.shipping,
        total = %totals.total,
        "Order preview"
    );

    // The international storefront shows the same total in yen.
    session.set_currency("JPY")?;
    info!(display_total = %session.display_total(), "Display currency switched");

    let confirmation = session.place_order(Duration::from_millis(800)).await?;
    info!(
        order_id = %confirmation.order_id,
        total = %confirmation.totals.total,
        "Checkout complete"
    );

    Ok(())
}
