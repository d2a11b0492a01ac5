//! # Cart Container
//!
//! Owns the mutable list of cart lines for a session and exposes mutation
//! operations that preserve the cart invariants.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Operations                                    │
//! │                                                                         │
//! │  Frontend Action          Operation              Cart Change            │
//! │  ───────────────          ─────────              ───────────            │
//! │  Click "Add to Cart" ───► add_item() ──────────► merge or push line     │
//! │  Quantity stepper ──────► update_quantity() ───► line.quantity = n      │
//! │  Click "Remove" ────────► remove_item() ───────► retain-filter          │
//! │  "Save for later" ──────► save_for_later() ────► items → saved          │
//! │  "Move to cart" ────────► move_to_cart() ──────► saved → items          │
//! │                                                                         │
//! │  Every mutation is followed by a pricing recomputation in the shell.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by (product id, variant selection); adding the same
//!   combination again increments quantity instead
//! - Quantity is always >= 1; removal is the only path to zero
//! - A line lives in exactly one of `items` / `saved`, never both or neither
//!
//! All operations are total functions over the current state: bad requests
//! (unknown ids, non-positive quantities) are silent no-ops, not errors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;
use crate::pricing;
use crate::types::{Product, VariantSelection};

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the cart: a product snapshot plus quantity and variant choice.
///
/// ## Price Freezing
/// Product data is snapshotted at add time. If the catalog price changes
/// while the item sits in the cart, the line keeps the price the shopper
/// saw when they added it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Line identifier (UUID v4), stable across quantity updates and
    /// saved-for-later transfers.
    pub id: String,

    /// Catalog product id this line was created from.
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Unit price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Pre-sale price at time of adding, for strikethrough display.
    pub original_price_cents: Option<i64>,

    /// Quantity in cart. Invariant: >= 1.
    pub quantity: i64,

    /// Color/size chosen when adding.
    pub variant: VariantSelection,

    /// When this line was added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a new line from a product with quantity 1.
    pub fn from_product(product: &Product, variant: VariantSelection) -> Self {
        CartItem {
            id: Uuid::new_v4().to_string(),
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price_cents: product.price_cents,
            original_price_cents: product.original_price_cents,
            quantity: 1,
            variant,
            added_at: Utc::now(),
        }
    }

    /// Unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }

    /// Whether this line matches a product + variant combination.
    fn matches(&self, product_id: &str, variant: &VariantSelection) -> bool {
        self.product_id == product_id && self.variant == *variant
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: active lines plus a saved-for-later list.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Active lines, priced by the pricing engine.
    items: Vec<CartItem>,

    /// Saved-for-later lines, excluded from pricing.
    saved: Vec<CartItem>,

    /// When the cart was created/last cleared.
    #[ts(as = "String")]
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            saved: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Active cart lines.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Saved-for-later lines.
    pub fn saved(&self) -> &[CartItem] {
        &self.saved
    }

    /// When the cart was created or last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Adds a product to the cart.
    ///
    /// If a line for the same product *and* variant selection already exists
    /// its quantity increases by 1; otherwise a new line with quantity 1 is
    /// appended. Returns the id of the affected line.
    pub fn add_item(&mut self, product: &Product, variant: VariantSelection) -> String {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.matches(&product.id, &variant))
        {
            item.quantity += 1;
            return item.id.clone();
        }

        let item = CartItem::from_product(product, variant);
        let id = item.id.clone();
        self.items.push(item);
        id
    }

    /// Sets the quantity of a line.
    ///
    /// `quantity < 1` is a silently-ignored no-op: [`Cart::remove_item`] is
    /// the only sanctioned path to zero, so a stepper glitch can never delete
    /// a line by accident. Unknown ids are also a no-op.
    pub fn update_quantity(&mut self, item_id: &str, quantity: i64) {
        if quantity < 1 {
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.id == item_id) {
            item.quantity = quantity;
        }
    }

    /// Removes a line by id. Absent ids are a no-op; calling twice is the
    /// same as calling once.
    pub fn remove_item(&mut self, item_id: &str) {
        self.items.retain(|i| i.id != item_id);
    }

    /// Moves an active line to the saved-for-later list.
    ///
    /// The line (with its quantity and variant) is transferred whole: from
    /// the caller's perspective it is never in both lists or neither.
    /// Unknown ids are a no-op.
    pub fn save_for_later(&mut self, item_id: &str) {
        if let Some(pos) = self.items.iter().position(|i| i.id == item_id) {
            let item = self.items.remove(pos);
            self.saved.push(item);
        }
    }

    /// Moves a saved line back into the active cart.
    pub fn move_to_cart(&mut self, item_id: &str) {
        if let Some(pos) = self.saved.iter().position(|i| i.id == item_id) {
            let item = self.saved.remove(pos);
            self.items.push(item);
        }
    }

    /// Clears the active cart (saved-for-later lines survive a checkout).
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Number of active lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total quantity across active lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Whether the active cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Subtotal of the active lines.
    pub fn subtotal(&self) -> Money {
        pricing::subtotal(&self.items)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            category: "Test".to_string(),
            price_cents,
            original_price_cents: None,
            colors: vec!["Black".to_string()],
            sizes: vec!["M".to_string(), "L".to_string()],
            rating: 4.0,
            review_count: 10,
        }
    }

    #[test]
    fn test_add_item_appends_with_quantity_one() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("1", 999), VariantSelection::none());

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
        assert_eq!(cart.subtotal().cents(), 999);
    }

    #[test]
    fn test_add_same_product_twice_merges_lines() {
        let mut cart = Cart::new();
        let product = test_product("1", 999);

        let first = cart.add_item(&product, VariantSelection::none());
        let second = cart.add_item(&product, VariantSelection::none());

        assert_eq!(first, second); // same line
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_different_variants_stay_separate_lines() {
        let mut cart = Cart::new();
        let product = test_product("1", 999);

        cart.add_item(&product, VariantSelection::new("Black", "M"));
        cart.add_item(&product, VariantSelection::new("Black", "L"));

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        let id = cart.add_item(&test_product("1", 1000), VariantSelection::none());

        cart.update_quantity(&id, 5);
        assert_eq!(cart.items()[0].quantity, 5);
        assert_eq!(cart.subtotal().cents(), 5000);
    }

    #[test]
    fn test_update_quantity_below_one_is_noop() {
        let mut cart = Cart::new();
        let id = cart.add_item(&test_product("1", 1000), VariantSelection::none());
        cart.update_quantity(&id, 3);

        cart.update_quantity(&id, 0);
        assert_eq!(cart.items()[0].quantity, 3); // unchanged

        cart.update_quantity(&id, -2);
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.item_count(), 1); // never removed
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("1", 1000), VariantSelection::none());

        cart.update_quantity("no-such-line", 7);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_remove_item_is_idempotent() {
        let mut cart = Cart::new();
        let id = cart.add_item(&test_product("1", 1000), VariantSelection::none());
        cart.add_item(&test_product("2", 2000), VariantSelection::none());

        cart.remove_item(&id);
        let after_first = cart.items().to_vec();

        cart.remove_item(&id); // second call is a no-op
        assert_eq!(cart.items().len(), after_first.len());
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0].product_id, "2");
    }

    #[test]
    fn test_save_for_later_transfers_whole_line() {
        let mut cart = Cart::new();
        let id = cart.add_item(&test_product("1", 1000), VariantSelection::none());
        cart.update_quantity(&id, 4);

        cart.save_for_later(&id);

        // Exactly one list holds the line, quantity intact
        assert!(cart.items().is_empty());
        assert_eq!(cart.saved().len(), 1);
        assert_eq!(cart.saved()[0].quantity, 4);
        // Saved lines do not price
        assert_eq!(cart.subtotal(), Money::zero());
    }

    #[test]
    fn test_move_to_cart_round_trip() {
        let mut cart = Cart::new();
        let id = cart.add_item(&test_product("1", 1000), VariantSelection::none());

        cart.save_for_later(&id);
        cart.move_to_cart(&id);

        assert_eq!(cart.item_count(), 1);
        assert!(cart.saved().is_empty());
        assert_eq!(cart.items()[0].id, id);
    }

    #[test]
    fn test_transfer_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("1", 1000), VariantSelection::none());

        cart.save_for_later("missing");
        cart.move_to_cart("missing");

        assert_eq!(cart.item_count(), 1);
        assert!(cart.saved().is_empty());
    }

    #[test]
    fn test_clear_keeps_saved_lines() {
        let mut cart = Cart::new();
        let keep = cart.add_item(&test_product("1", 1000), VariantSelection::none());
        cart.add_item(&test_product("2", 2000), VariantSelection::none());
        cart.save_for_later(&keep);

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.saved().len(), 1);
    }

    #[test]
    fn test_price_freezing_snapshot() {
        let mut cart = Cart::new();
        let mut product = test_product("1", 1000);
        cart.add_item(&product, VariantSelection::none());

        // Catalog price changes after the add
        product.price_cents = 9999;

        assert_eq!(cart.items()[0].unit_price_cents, 1000);
        assert_eq!(cart.subtotal().cents(), 1000);
    }
}
