//! # Checkout
//!
//! The simulated order-placement gateway.
//!
//! The real storefront has no backend; order placement "succeeds" after a
//! latency the caller supplies. Making the delay a parameter (instead of a
//! hardcoded sleep) keeps the operation testable - tests pass
//! `Duration::ZERO` and never wait - while the demo and frontend pass a
//! realistic few hundred milliseconds.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use storefront_core::error::{CoreError, CoreResult};
use storefront_core::pricing::PricingResult;

use crate::state::CartSession;

// =============================================================================
// Order Confirmation
// =============================================================================

/// What the shopper sees on the confirmation screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    /// Order identifier (UUID v4).
    pub order_id: String,

    /// When the order was placed.
    pub placed_at: DateTime<Utc>,

    /// The totals the order was placed with.
    pub totals: PricingResult,

    /// Number of cart lines in the order.
    pub item_count: usize,
}

// =============================================================================
// Gateway
// =============================================================================

impl CartSession {
    /// Places the order: validates the cart, waits out the simulated
    /// gateway latency, then clears the session for the next order.
    ///
    /// ## Errors
    /// [`CoreError::EmptyCart`] when there is nothing to order. That is the
    /// only failure; the simulated gateway itself always succeeds.
    ///
    /// ## Example
    /// ```rust,no_run
    /// # use std::time::Duration;
    /// # use storefront_session::CartSession;
    /// # async fn run(session: CartSession) {
    /// let confirmation = session.place_order(Duration::from_millis(800)).await.unwrap();
    /// println!("Order {} placed", confirmation.order_id);
    /// # }
    /// ```
    pub async fn place_order(&self, delay: Duration) -> CoreResult<OrderConfirmation> {
        let item_count = self.with_cart(|cart| cart.item_count());
        if item_count == 0 {
            return Err(CoreError::EmptyCart);
        }
        let totals = self.totals();

        debug!(delay_ms = delay.as_millis() as u64, "Submitting order");
        tokio::time::sleep(delay).await;

        let confirmation = OrderConfirmation {
            order_id: Uuid::new_v4().to_string(),
            placed_at: Utc::now(),
            totals,
            item_count,
        };

        self.reset_after_order();
        info!(
            order_id = %confirmation.order_id,
            total = %confirmation.totals.total,
            items = confirmation.item_count,
            "Order placed"
        );
        Ok(confirmation)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::types::{Product, VariantSelection};

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

    #[tokio::test]
    async fn test_place_order_on_empty_cart_is_rejected() {
        let session = CartSession::new();
        let result = session.place_order(Duration::ZERO).await;
        assert!(matches!(result, Err(CoreError::EmptyCart)));
    }

    #[tokio::test]
    async fn test_place_order_captures_totals_and_clears_session() {
        let session = CartSession::new();
        session
            .add_to_cart(&test_product("a", 10000), VariantSelection::none())
            .unwrap();
        assert!(session.apply_promo("SAVE10"));

        let confirmation = session.place_order(Duration::ZERO).await.unwrap();

        assert_eq!(confirmation.item_count, 1);
        assert_eq!(confirmation.totals.subtotal.cents(), 10000);
        assert_eq!(confirmation.totals.discount.cents(), 1000);

        // Session is reset for the next order
        assert!(session.with_cart(|c| c.is_empty()));
        assert_eq!(session.promo_code(), None);
        assert_eq!(session.totals().discount.cents(), 0);
    }

    #[tokio::test]
    async fn test_confirmation_serializes_camel_case_for_frontend() {
        let session = CartSession::new();
        session
            .add_to_cart(&test_product("a", 4500), VariantSelection::none())
            .unwrap();

        let confirmation = session.place_order(Duration::ZERO).await.unwrap();
        let json = serde_json::to_value(&confirmation).unwrap();

        assert!(json["orderId"].is_string());
        assert_eq!(json["itemCount"], 1);
        assert_eq!(json["totals"]["total"], 4860);
    }

    #[tokio::test]
    async fn test_saved_lines_survive_checkout() {
        let session = CartSession::new();
        session
            .add_to_cart(&test_product("keep", 500), VariantSelection::none())
            .unwrap();
        session
            .add_to_cart(&test_product("buy", 2000), VariantSelection::none())
            .unwrap();
        let saved_id = session.with_cart(|c| c.items()[0].id.clone());
        session.save_for_later(&saved_id);

        session.place_order(Duration::ZERO).await.unwrap();

        assert!(session.with_cart(|c| c.is_empty()));
        assert_eq!(session.with_cart(|c| c.saved().len()), 1);
    }
}
