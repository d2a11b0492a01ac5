//! # Session State
//!
//! Manages one shopper's cart session: the cart itself plus the applied
//! promo code, selected shipping method, and display currency.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple frontend events may access/modify the session
//! 2. Only one event should modify it at a time
//! 3. Holding the lock for a whole operation gives the "mutation fully
//!    applies before totals are next read" ordering for free
//!
//! Every mutation returns a freshly recomputed [`PricingResult`], so the
//! rendering layer always re-renders from current numbers and a stale total
//! cannot exist.

use std::sync::{Arc, Mutex};

use tracing::debug;

use storefront_core::cart::{Cart, CartItem};
use storefront_core::currency::Currency;
use storefront_core::error::{CoreError, CoreResult};
use storefront_core::pricing::{self, PricingConfig, PricingResult};
use storefront_core::types::{Product, ShippingMethod, VariantSelection};
use storefront_core::validation::{validate_product, validate_quantity};
use storefront_core::{promo, Money};

/// Everything guarded by the session lock.
#[derive(Debug, Default)]
struct SessionInner {
    cart: Cart,
    promo_code: Option<String>,
    shipping: Option<ShippingMethod>,
    currency: Currency,
}

/// A shopper's cart session.
///
/// ## Usage
/// ```rust
/// use storefront_session::CartSession;
/// use storefront_core::types::{Product, VariantSelection};
///
/// # fn product() -> Product {
/// #     Product { id: "p".into(), name: "Tote".into(), category: "Bags".into(),
/// #               price_cents: 4500, original_price_cents: None,
/// #               colors: vec![], sizes: vec![], rating: 0.0, review_count: 0 }
/// # }
/// let session = CartSession::new();
/// let totals = session.add_to_cart(&product(), VariantSelection::none()).unwrap();
/// assert_eq!(totals.subtotal.cents(), 4500);
/// ```
#[derive(Debug)]
pub struct CartSession {
    inner: Arc<Mutex<SessionInner>>,
    config: PricingConfig,
}

impl CartSession {
    /// Creates an empty session with the default pricing config.
    pub fn new() -> Self {
        CartSession::with_config(PricingConfig::default())
    }

    /// Creates an empty session with a custom pricing config.
    pub fn with_config(config: PricingConfig) -> Self {
        CartSession {
            inner: Arc::new(Mutex::new(SessionInner::default())),
            config,
        }
    }

    /// The pricing config this session prices with.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Closure-style access
    // -------------------------------------------------------------------------

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = session.with_cart(|cart| cart.item_count());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let inner = self.inner.lock().expect("Session mutex poisoned");
        f(&inner.cart)
    }

    /// Executes a function with write access to the cart and returns the
    /// recomputed totals alongside the closure's result.
    pub fn with_cart_mut<F, R>(&self, f: F) -> (R, PricingResult)
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut inner = self.inner.lock().expect("Session mutex poisoned");
        let result = f(&mut inner.cart);
        let totals = Self::totals_locked(&inner, &self.config);
        (result, totals)
    }

    // -------------------------------------------------------------------------
    // Cart operations
    // -------------------------------------------------------------------------

    /// Adds a product (validated first) and returns the new totals.
    pub fn add_to_cart(
        &self,
        product: &Product,
        variant: VariantSelection,
    ) -> CoreResult<PricingResult> {
        validate_product(product)?;
        let (line_id, totals) = self.with_cart_mut(|cart| cart.add_item(product, variant));
        debug!(product_id = %product.id, line_id = %line_id, "Added to cart");
        Ok(totals)
    }

    /// Sets a line's quantity and returns the new totals.
    ///
    /// Quantities below 1 are a no-op (removal is explicit); quantities
    /// above the stepper maximum are rejected as validation errors.
    pub fn update_quantity(&self, line_id: &str, quantity: i64) -> CoreResult<PricingResult> {
        if quantity < 1 {
            debug!(line_id = %line_id, quantity, "Ignoring non-positive quantity");
            return Ok(self.totals());
        }
        validate_quantity(quantity)?;
        let ((), totals) = self.with_cart_mut(|cart| cart.update_quantity(line_id, quantity));
        debug!(line_id = %line_id, quantity, "Updated quantity");
        Ok(totals)
    }

    /// Removes a line and returns the new totals. Idempotent.
    pub fn remove_item(&self, line_id: &str) -> PricingResult {
        let ((), totals) = self.with_cart_mut(|cart| cart.remove_item(line_id));
        debug!(line_id = %line_id, "Removed from cart");
        totals
    }

    /// Moves a line to saved-for-later and returns the new totals.
    pub fn save_for_later(&self, line_id: &str) -> PricingResult {
        let ((), totals) = self.with_cart_mut(|cart| cart.save_for_later(line_id));
        debug!(line_id = %line_id, "Saved for later");
        totals
    }

    /// Moves a saved line back into the cart and returns the new totals.
    pub fn move_to_cart(&self, line_id: &str) -> PricingResult {
        let ((), totals) = self.with_cart_mut(|cart| cart.move_to_cart(line_id));
        debug!(line_id = %line_id, "Moved back to cart");
        totals
    }

    /// Looks up a cart line by id (active or saved).
    pub fn line(&self, line_id: &str) -> CoreResult<CartItem> {
        self.with_cart(|cart| {
            cart.items()
                .iter()
                .chain(cart.saved().iter())
                .find(|i| i.id == line_id)
                .cloned()
                .ok_or_else(|| CoreError::LineNotFound(line_id.to_string()))
        })
    }

    // -------------------------------------------------------------------------
    // Modifiers: promo, shipping, currency
    // -------------------------------------------------------------------------

    /// Applies a promo code.
    ///
    /// Returns `true` and stores the code when it is in the known set;
    /// returns `false` otherwise (the UI shows "Invalid promo code" inline -
    /// an invalid code is not an error).
    pub fn apply_promo(&self, code: &str) -> bool {
        if !promo::is_valid_code(code) {
            debug!(code = %code, "Rejected promo code");
            return false;
        }
        let mut inner = self.inner.lock().expect("Session mutex poisoned");
        inner.promo_code = Some(code.to_string());
        debug!(code = %code, "Applied promo code");
        true
    }

    /// Removes any applied promo code.
    pub fn clear_promo(&self) {
        let mut inner = self.inner.lock().expect("Session mutex poisoned");
        inner.promo_code = None;
    }

    /// The currently applied promo code.
    pub fn promo_code(&self) -> Option<String> {
        let inner = self.inner.lock().expect("Session mutex poisoned");
        inner.promo_code.clone()
    }

    /// Selects a shipping method (one of [`ShippingMethod::offered`]).
    pub fn set_shipping(&self, method: ShippingMethod) {
        let mut inner = self.inner.lock().expect("Session mutex poisoned");
        debug!(method = %method.id, "Selected shipping method");
        inner.shipping = Some(method);
    }

    /// The selected shipping method, if any.
    pub fn shipping(&self) -> Option<ShippingMethod> {
        let inner = self.inner.lock().expect("Session mutex poisoned");
        inner.shipping.clone()
    }

    /// Selects the display currency by ISO code.
    pub fn set_currency(&self, code: &str) -> CoreResult<Currency> {
        let currency =
            Currency::from_code(code).ok_or_else(|| CoreError::UnknownCurrency(code.to_string()))?;
        let mut inner = self.inner.lock().expect("Session mutex poisoned");
        inner.currency = currency;
        debug!(currency = %code, "Selected display currency");
        Ok(currency)
    }

    /// The selected display currency.
    pub fn currency(&self) -> Currency {
        let inner = self.inner.lock().expect("Session mutex poisoned");
        inner.currency
    }

    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    /// Current totals for the session.
    pub fn totals(&self) -> PricingResult {
        let inner = self.inner.lock().expect("Session mutex poisoned");
        Self::totals_locked(&inner, &self.config)
    }

    /// The grand total formatted in the selected display currency.
    pub fn display_total(&self) -> String {
        let inner = self.inner.lock().expect("Session mutex poisoned");
        let totals = Self::totals_locked(&inner, &self.config);
        inner.currency.format_base(totals.total)
    }

    /// Formats any base-currency amount in the selected display currency.
    pub fn display_price(&self, amount: Money) -> String {
        self.currency().format_base(amount)
    }

    fn totals_locked(inner: &SessionInner, config: &PricingConfig) -> PricingResult {
        pricing::price_cart(
            inner.cart.items(),
            inner.promo_code.as_deref(),
            inner.shipping.as_ref(),
            config,
        )
    }

    /// Clears the active cart and applied promo after a placed order.
    /// Saved-for-later lines and the currency selection survive.
    pub(crate) fn reset_after_order(&self) {
        let mut inner = self.inner.lock().expect("Session mutex poisoned");
        inner.cart.clear();
        inner.promo_code = None;
        inner.shipping = None;
    }
}

impl Default for CartSession {
    fn default() -> Self {
        Self::new()
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
            colors: vec![],
            sizes: vec![],
            rating: 0.0,
            review_count: 0,
        }
    }

    #[test]
    fn test_add_to_cart_returns_recomputed_totals() {
        let session = CartSession::new();
        let totals = session
            .add_to_cart(&test_product("a", 1000), VariantSelection::none())
            .unwrap();
        assert_eq!(totals.subtotal.cents(), 1000);

        let totals = session
            .add_to_cart(&test_product("b", 2500), VariantSelection::none())
            .unwrap();
        assert_eq!(totals.subtotal.cents(), 3500);
    }

    #[test]
    fn test_add_to_cart_rejects_malformed_product() {
        let session = CartSession::new();
        let mut bad = test_product("a", 1000);
        bad.price_cents = -1;

        let result = session.add_to_cart(&bad, VariantSelection::none());
        assert!(matches!(result, Err(CoreError::Validation(_))));
        assert!(session.with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_update_quantity_below_one_keeps_cart() {
        let session = CartSession::new();
        session
            .add_to_cart(&test_product("a", 1000), VariantSelection::none())
            .unwrap();
        let line_id = session.with_cart(|c| c.items()[0].id.clone());

        let totals = session.update_quantity(&line_id, 0).unwrap();
        assert_eq!(totals.subtotal.cents(), 1000); // unchanged
        assert_eq!(session.with_cart(|c| c.items()[0].quantity), 1);
    }

    #[test]
    fn test_update_quantity_above_max_is_rejected() {
        let session = CartSession::new();
        session
            .add_to_cart(&test_product("a", 1000), VariantSelection::none())
            .unwrap();
        let line_id = session.with_cart(|c| c.items()[0].id.clone());

        let result = session.update_quantity(&line_id, 1000);
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_apply_promo_valid_and_invalid() {
        let session = CartSession::new();
        session
            .add_to_cart(&test_product("a", 10000), VariantSelection::none())
            .unwrap();

        assert!(!session.apply_promo("save10")); // wrong case
        assert_eq!(session.promo_code(), None);
        assert_eq!(session.totals().discount.cents(), 0);

        assert!(session.apply_promo("SAVE10"));
        assert_eq!(session.promo_code().as_deref(), Some("SAVE10"));
        assert_eq!(session.totals().discount.cents(), 1000);

        session.clear_promo();
        assert_eq!(session.totals().discount.cents(), 0);
    }

    #[test]
    fn test_shipping_selection_prices_in() {
        let session = CartSession::new();
        session
            .add_to_cart(&test_product("a", 4500), VariantSelection::none())
            .unwrap();

        session.set_shipping(ShippingMethod::find("standard").unwrap());
        assert_eq!(session.totals().shipping.cents(), 599);
    }

    #[test]
    fn test_set_currency_and_display_total() {
        let session = CartSession::new();
        session
            .add_to_cart(&test_product("a", 4500), VariantSelection::none())
            .unwrap();

        // $45.00 + 8% tax = $48.60
        assert_eq!(session.display_total(), "$48.60");

        session.set_currency("JPY").unwrap();
        // 4860 cents at 151.20 JPY/USD = ¥7348.32 → ¥7348
        assert_eq!(session.display_total(), "¥7348");

        assert!(matches!(
            session.set_currency("xyz"),
            Err(CoreError::UnknownCurrency(_))
        ));
    }

    #[test]
    fn test_line_lookup() {
        let session = CartSession::new();
        session
            .add_to_cart(&test_product("a", 1000), VariantSelection::none())
            .unwrap();
        let line_id = session.with_cart(|c| c.items()[0].id.clone());

        assert_eq!(session.line(&line_id).unwrap().product_id, "a");
        assert!(matches!(
            session.line("missing"),
            Err(CoreError::LineNotFound(_))
        ));

        // Saved lines are still addressable
        session.save_for_later(&line_id);
        assert!(session.line(&line_id).is_ok());
    }

    #[test]
    fn test_saved_lines_do_not_price() {
        let session = CartSession::new();
        session
            .add_to_cart(&test_product("a", 1000), VariantSelection::none())
            .unwrap();
        session
            .add_to_cart(&test_product("b", 2000), VariantSelection::none())
            .unwrap();
        let line_id = session.with_cart(|c| c.items()[0].id.clone());

        let totals = session.save_for_later(&line_id);
        assert_eq!(totals.subtotal.cents(), 2000);

        let totals = session.move_to_cart(&line_id);
        assert_eq!(totals.subtotal.cents(), 3000);
    }
}
