//! # Pricing Engine
//!
//! Pure computation from cart lines and optional modifiers (promo code,
//! shipping method) to a [`PricingResult`].
//!
//! ## Order of Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pricing Pipeline                                 │
//! │                                                                         │
//! │  items ──► subtotal (Σ price × qty)                                     │
//! │                │                                                        │
//! │                ├──► discount (promo rule, clamped to subtotal)          │
//! │                │                                                        │
//! │                ├──► tax = (subtotal − discount) × rate                  │
//! │                │                                                        │
//! │                ├──► shipping (flat tier, waived above threshold)        │
//! │                │                                                        │
//! │                └──► total = max(0, subtotal − discount) + tax + ship    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is a pure function over cents; the result is recomputed
//! from scratch after every cart mutation, which is cheap and removes any
//! chance of a stale total.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartItem;
use crate::money::{Money, TaxRate};
use crate::promo;
use crate::types::ShippingMethod;

// =============================================================================
// Pricing Config
// =============================================================================

/// Tunable pricing parameters.
///
/// Defaults match the storefront constants: 8% tax, free shipping at
/// $100.00. Callers that need a different jurisdiction pass their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    /// Sales tax rate applied to the discounted subtotal.
    pub tax_rate: TaxRate,

    /// Pre-discount subtotal at or above which shipping is waived.
    /// `None` disables free shipping entirely.
    pub free_shipping_threshold: Option<Money>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            tax_rate: TaxRate::default(),
            free_shipping_threshold: Some(Money::from_cents(
                crate::FREE_SHIPPING_THRESHOLD_CENTS,
            )),
        }
    }
}

// =============================================================================
// Pricing Result
// =============================================================================

/// The derived totals for a cart, recomputed on every mutation.
///
/// ## Invariants
/// - `discount <= subtotal`
/// - `total >= tax + shipping` (a discount can zero the goods, never the cart)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    /// Σ unit price × quantity over active cart lines.
    pub subtotal: Money,
    /// Promo discount, clamped to the subtotal.
    pub discount: Money,
    /// Tax on the discounted subtotal.
    pub tax: Money,
    /// Shipping cost after the free-shipping waiver.
    pub shipping: Money,
    /// `max(0, subtotal − discount) + tax + shipping`.
    pub total: Money,
}

impl PricingResult {
    /// Pricing of an empty cart: all zeros.
    pub fn empty() -> Self {
        PricingResult {
            subtotal: Money::zero(),
            discount: Money::zero(),
            tax: Money::zero(),
            shipping: Money::zero(),
            total: Money::zero(),
        }
    }
}

// =============================================================================
// Operations
// =============================================================================

/// Sums `unit price × quantity` over all lines. Zero for an empty list.
pub fn subtotal(items: &[CartItem]) -> Money {
    items
        .iter()
        .fold(Money::zero(), |acc, item| acc + item.line_total())
}

/// Shipping cost for the selected method.
///
/// The flat tier price, waived (zero) once the **pre-discount** subtotal
/// reaches the free-shipping threshold - the threshold rewards order size,
/// and a promo concession does not shrink the order. No selected method
/// (cart page, before checkout) costs nothing.
pub fn shipping_cost(
    method: Option<&ShippingMethod>,
    subtotal: Money,
    config: &PricingConfig,
) -> Money {
    let Some(method) = method else {
        return Money::zero();
    };
    if let Some(threshold) = config.free_shipping_threshold {
        if subtotal >= threshold {
            return Money::zero();
        }
    }
    method.price()
}

/// Combines the parts into a grand total.
///
/// `max(0, subtotal − discount) + tax + shipping`. The clamp is the only
/// guarded edge case: an oversized discount zeroes the goods portion but can
/// never push the total negative.
pub fn calculate_total(subtotal: Money, tax: Money, shipping: Money, discount: Money) -> Money {
    subtotal.saturating_sub(discount) + tax + shipping
}

/// Prices a cart end to end.
///
/// Tax applies to the discounted subtotal (discount first, then tax), and
/// the free-shipping waiver checks the pre-discount subtotal. `promo_code`
/// may be unknown; it is then worth nothing.
///
/// ## Example
/// ```rust
/// use storefront_core::cart::Cart;
/// use storefront_core::pricing::{self, PricingConfig};
/// use storefront_core::types::{Product, VariantSelection};
///
/// # fn product(id: &str, cents: i64) -> Product {
/// #     Product { id: id.into(), name: id.into(), category: "Test".into(),
/// #               price_cents: cents, original_price_cents: None,
/// #               colors: vec![], sizes: vec![], rating: 0.0, review_count: 0 }
/// # }
/// let mut cart = Cart::new();
/// cart.add_item(&product("a", 1000), VariantSelection::none());
/// cart.add_item(&product("a", 1000), VariantSelection::none());
/// cart.add_item(&product("b", 2500), VariantSelection::none());
///
/// let result = pricing::price_cart(cart.items(), None, None, &PricingConfig::default());
/// assert_eq!(result.subtotal.cents(), 4500); // $45.00
/// assert_eq!(result.total.cents(), 4860);    // + 8% tax, no shipping selected
/// ```
pub fn price_cart(
    items: &[CartItem],
    promo_code: Option<&str>,
    shipping_method: Option<&ShippingMethod>,
    config: &PricingConfig,
) -> PricingResult {
    let subtotal = subtotal(items);
    let discount = match promo_code {
        Some(code) => promo::discount_amount(code, subtotal),
        None => Money::zero(),
    };
    let taxable = subtotal.saturating_sub(discount);
    let tax = taxable.calculate_tax(config.tax_rate);
    let shipping = shipping_cost(shipping_method, subtotal, config);
    let total = calculate_total(subtotal, tax, shipping, discount);

    PricingResult {
        subtotal,
        discount,
        tax,
        shipping,
        total,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::types::{Product, VariantSelection};

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            category: "Test".to_string(),
            price_cents,
            original_price_cents: None,
            colors: vec![],
            sizes: vec![],
            rating: 0.0,
            review_count: 0,
        }
    }

    fn cart_items() -> Vec<CartItem> {
        // Product A ($10.00, qty 2), Product B ($25.00, qty 1)
        let mut cart = Cart::new();
        let a = test_product("a", 1000);
        let b = test_product("b", 2500);
        cart.add_item(&a, VariantSelection::none());
        cart.add_item(&a, VariantSelection::none());
        cart.add_item(&b, VariantSelection::none());
        cart.items().to_vec()
    }

    #[test]
    fn test_subtotal_of_empty_list_is_zero() {
        assert_eq!(subtotal(&[]), Money::zero());
    }

    #[test]
    fn test_subtotal_sums_price_times_quantity() {
        assert_eq!(subtotal(&cart_items()).cents(), 4500); // $45.00
    }

    #[test]
    fn test_scenario_two_items_free_shipping() {
        // $45 subtotal, 8% tax, no shipping cost → $48.60
        let result = price_cart(&cart_items(), None, None, &PricingConfig::default());
        assert_eq!(result.subtotal.cents(), 4500);
        assert_eq!(result.discount, Money::zero());
        assert_eq!(result.tax.cents(), 360);
        assert_eq!(result.shipping, Money::zero());
        assert_eq!(result.total.cents(), 4860);
    }

    #[test]
    fn test_scenario_ten_percent_promo() {
        // 10% off a $100.00 subtotal → $10.00 discount, $90.00 taxable
        let mut cart = Cart::new();
        let p = test_product("p", 10000);
        cart.add_item(&p, VariantSelection::none());

        let result = price_cart(cart.items(), Some("SAVE10"), None, &PricingConfig::default());
        assert_eq!(result.discount.cents(), 1000);
        // tax on $90.00 at 8% = $7.20
        assert_eq!(result.tax.cents(), 720);
        assert_eq!(result.total.cents(), 9000 + 720);
    }

    #[test]
    fn test_unknown_promo_is_free_of_charge() {
        let with = price_cart(&cart_items(), Some("BOGUS"), None, &PricingConfig::default());
        let without = price_cart(&cart_items(), None, None, &PricingConfig::default());
        assert_eq!(with, without);
    }

    #[test]
    fn test_total_never_negative_from_discount() {
        // Flat $15 code against a $5.00 cart: goods portion clamps to zero
        let mut cart = Cart::new();
        cart.add_item(&test_product("tiny", 500), VariantSelection::none());
        let shipping = ShippingMethod::find("standard").unwrap();

        let result = price_cart(
            cart.items(),
            Some("FLAT15"),
            Some(&shipping),
            &PricingConfig::default(),
        );
        assert_eq!(result.discount.cents(), 500); // clamped
        assert_eq!(result.total, result.tax + result.shipping);
        assert!(!result.total.is_negative());
    }

    #[test]
    fn test_shipping_flat_price_below_threshold() {
        let config = PricingConfig::default();
        let standard = ShippingMethod::find("standard").unwrap();

        // $45.00 is under the $100.00 threshold
        let cost = shipping_cost(Some(&standard), Money::from_cents(4500), &config);
        assert_eq!(cost.cents(), 599);
    }

    #[test]
    fn test_shipping_waived_at_threshold() {
        let config = PricingConfig::default();
        let express = ShippingMethod::find("express").unwrap();

        let cost = shipping_cost(Some(&express), Money::from_cents(10_000), &config);
        assert_eq!(cost, Money::zero());
    }

    #[test]
    fn test_shipping_waiver_uses_pre_discount_subtotal() {
        // $100.00 subtotal with a 20% promo still ships free
        let mut cart = Cart::new();
        cart.add_item(&test_product("p", 10000), VariantSelection::none());
        let standard = ShippingMethod::find("standard").unwrap();

        let result = price_cart(
            cart.items(),
            Some("WELCOME20"),
            Some(&standard),
            &PricingConfig::default(),
        );
        assert_eq!(result.shipping, Money::zero());
    }

    #[test]
    fn test_no_free_shipping_when_threshold_disabled() {
        let config = PricingConfig {
            free_shipping_threshold: None,
            ..PricingConfig::default()
        };
        let standard = ShippingMethod::find("standard").unwrap();

        let cost = shipping_cost(Some(&standard), Money::from_cents(99_999), &config);
        assert_eq!(cost.cents(), 599);
    }

    #[test]
    fn test_calculate_total_clamp() {
        let total = calculate_total(
            Money::from_cents(500),
            Money::from_cents(40),
            Money::from_cents(599),
            Money::from_cents(9999), // oversized discount
        );
        // goods clamp to zero; tax + shipping remain
        assert_eq!(total.cents(), 40 + 599);
    }

    #[test]
    fn test_empty_pricing_result() {
        let result = price_cart(&[], None, None, &PricingConfig::default());
        assert_eq!(result, PricingResult::empty());
    }

    #[test]
    fn test_result_serializes_camel_case_for_frontend() {
        let result = price_cart(&cart_items(), None, None, &PricingConfig::default());
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["subtotal"], 4500);
        assert_eq!(json["tax"], 360);
        assert_eq!(json["total"], 4860);
    }
}
