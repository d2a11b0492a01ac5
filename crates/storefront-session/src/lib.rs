//! # storefront-session: The Imperative Shell
//!
//! Session state for one shopper: the cart, the applied promo code, the
//! selected shipping method and display currency, and the simulated order
//! gateway. Everything stateful or asynchronous in the workspace lives
//! here; the math all happens in `storefront-core`.
//!
//! ## Functional Core, Imperative Shell
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Frontend event ──► CartSession (Mutex-guarded state)                   │
//! │                          │ mutate                                       │
//! │                          ▼                                              │
//! │                storefront-core (pure functions)                         │
//! │                          │ recompute                                    │
//! │                          ▼                                              │
//! │                 PricingResult ──► re-render                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A mutation fully applies before totals are next read; that ordering is
//! naturally satisfied by holding the cart lock for the duration of each
//! operation.

pub mod checkout;
pub mod state;

pub use checkout::OrderConfirmation;
pub use state::CartSession;
