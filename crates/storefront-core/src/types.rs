//! # Catalog Types
//!
//! Read-only types supplied by the product catalog (an external collaborator)
//! plus the fixed shipping tiers the checkout offers.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Types                                   │
//! │                                                                         │
//! │  ┌──────────────────┐   ┌───────────────────┐   ┌──────────────────┐   │
//! │  │     Product      │   │ VariantSelection  │   │  ShippingMethod  │   │
//! │  │  ──────────────  │   │  ───────────────  │   │  ──────────────  │   │
//! │  │  id              │   │  color (opt)      │   │  id              │   │
//! │  │  name, category  │   │  size (opt)       │   │  name            │   │
//! │  │  price_cents     │   └───────────────────┘   │  price_cents     │   │
//! │  │  original_price  │                           │  eta             │   │
//! │  │  colors, sizes   │                           └──────────────────┘   │
//! │  │  rating, reviews │                                                  │
//! │  └──────────────────┘                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart only reads `id`, `price_cents`, `name`, `category`, and the
//! optional variant/sale fields; everything else on a product is rendering
//! material.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product from the catalog.
///
/// Read-only to the cart and pricing logic: products are never mutated here,
/// only snapshotted into cart lines at add time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Display name shown in the catalog and cart.
    pub name: String,

    /// Category label used by catalog filters.
    pub category: String,

    /// Current price in cents (smallest base-currency unit).
    pub price_cents: i64,

    /// Pre-sale price in cents, when the product is on sale.
    /// Display-only (strikethrough price); never enters cart math.
    pub original_price_cents: Option<i64>,

    /// Available color variants, empty when the product has none.
    #[serde(default)]
    pub colors: Vec<String>,

    /// Available size variants, empty when the product has none.
    #[serde(default)]
    pub sizes: Vec<String>,

    /// Average review rating (0.0 - 5.0), display only.
    pub rating: f32,

    /// Number of reviews behind the rating, display only.
    pub review_count: u32,
}

impl Product {
    /// Returns the current price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the pre-sale price, when present.
    #[inline]
    pub fn original_price(&self) -> Option<Money> {
        self.original_price_cents.map(Money::from_cents)
    }

    /// Whether the product is currently on sale.
    pub fn is_on_sale(&self) -> bool {
        self.original_price_cents
            .is_some_and(|orig| orig > self.price_cents)
    }
}

// =============================================================================
// Variant Selection
// =============================================================================

/// The color/size choice made when adding a product to the cart.
///
/// Two cart lines for the same product with different selections stay
/// separate lines; identical selections merge.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct VariantSelection {
    /// Selected color value, if the product has color variants.
    pub color: Option<String>,

    /// Selected size label, if the product has size variants.
    pub size: Option<String>,
}

impl VariantSelection {
    /// No variant chosen (products without color/size options).
    pub const fn none() -> Self {
        VariantSelection {
            color: None,
            size: None,
        }
    }

    /// Both color and size.
    pub fn new(color: impl Into<String>, size: impl Into<String>) -> Self {
        VariantSelection {
            color: Some(color.into()),
            size: Some(size.into()),
        }
    }
}

// =============================================================================
// Shipping Method
// =============================================================================

/// A delivery tier offered at checkout.
///
/// Immutable; the session selects one of the offered methods but never
/// owns or mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShippingMethod {
    /// Stable identifier ("standard", "express", ...).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Flat price in cents, before any free-shipping waiver.
    pub price_cents: i64,

    /// Delivery estimate shown next to the option ("5-7 business days").
    pub eta: String,
}

impl ShippingMethod {
    /// Returns the flat price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// The delivery tiers offered at checkout, selector order.
    pub fn offered() -> Vec<ShippingMethod> {
        vec![
            ShippingMethod {
                id: "standard".to_string(),
                name: "Standard Shipping".to_string(),
                price_cents: 599,
                eta: "5-7 business days".to_string(),
            },
            ShippingMethod {
                id: "express".to_string(),
                name: "Express Shipping".to_string(),
                price_cents: 1299,
                eta: "2-3 business days".to_string(),
            },
            ShippingMethod {
                id: "overnight".to_string(),
                name: "Overnight Shipping".to_string(),
                price_cents: 2499,
                eta: "Next business day".to_string(),
            },
        ]
    }

    /// Looks up an offered method by id.
    pub fn find(id: &str) -> Option<ShippingMethod> {
        ShippingMethod::offered().into_iter().find(|m| m.id == id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
