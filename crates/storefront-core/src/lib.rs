//! # storefront-core: Pure Business Logic for the Storefront
//!
//! This crate is the **heart** of the storefront. It contains all business
//! logic as pure functions with zero I/O dependencies. The rendering layer
//! (a web frontend, out of scope here) calls into this crate on every user
//! interaction and re-renders from the returned values.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storefront Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   Frontend (web views)                          │   │
//! │  │   Catalog UI ──► Cart UI ──► Checkout UI ──► Article TOC        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              storefront-session (thin shell)                    │   │
//! │  │   add_to_cart, apply_promo, place_order, totals                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ storefront-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │  ┌────────┐ ┌──────────┐ ┌─────────┐ ┌────────┐ ┌──────────┐  │   │
//! │  │  │ money  │ │ currency │ │ pricing │ │  cart  │ │   toc    │  │   │
//! │  │  │ Money  │ │ format / │ │ promos  │ │  Cart  │ │ headings │  │   │
//! │  │  │TaxRate │ │ convert  │ │shipping │ │ lines  │ │ tracking │  │   │
//! │  │  └────────┘ └──────────┘ └─────────┘ └────────┘ └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DOM • NO NETWORK • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog types (Product, VariantSelection, ShippingMethod)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`currency`] - Display currencies, conversion, and formatting
//! - [`promo`] - Promo code table and discount rules
//! - [`pricing`] - Subtotal / discount / tax / shipping / total computation
//! - [`cart`] - Cart container with merge-on-add and saved-for-later
//! - [`toc`] - Active-section tracking for article tables of contents
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and DOM access are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Total Cart Operations**: Cart mutations never fail; bad requests are no-ops
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::money::{Money, TaxRate};
//!
//! // Create money from cents (never from floats!)
//! let subtotal = Money::from_cents(4500); // $45.00
//!
//! // Tax at the default 8% rate
//! let tax = subtotal.calculate_tax(TaxRate::from_bps(800));
//! assert_eq!(tax.cents(), 360); // $3.60
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod currency;
pub mod error;
pub mod money;
pub mod pricing;
pub mod promo;
pub mod toc;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use storefront_core::Money` instead of
// `use storefront_core::money::Money`

pub use cart::{Cart, CartItem};
pub use currency::Currency;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, TaxRate};
pub use pricing::{PricingConfig, PricingResult};
pub use toc::{Heading, TocTracker};
pub use types::{Product, ShippingMethod, VariantSelection};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default sales tax rate in basis points (800 = 8%).
///
/// Treated as configuration, not a magic number: every pricing entry point
/// takes a [`pricing::PricingConfig`], and this is only the documented
/// default that config falls back to.
pub const DEFAULT_TAX_RATE_BPS: u32 = 800;

/// Order subtotal (in cents) at or above which shipping is waived.
///
/// $100.00. Compared against the pre-discount subtotal; see
/// [`pricing::shipping_cost`].
pub const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 10_000;

/// Maximum quantity of a single cart line.
///
/// Guards against accidental over-ordering (e.g. typing 100 instead of 10)
/// via the quantity stepper. Enforced at the session boundary, not inside
/// the cart container itself.
pub const MAX_ITEM_QUANTITY: i64 = 99;

/// Distance (logical px) from the top of the viewport within which a heading
/// counts as "reached" for table-of-contents highlighting.
pub const SCROLL_ACTIVE_THRESHOLD_PX: f64 = 100.0;
