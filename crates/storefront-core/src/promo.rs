//! # Promo Codes
//!
//! The fixed promo-code table and its discount rules.
//!
//! Validity is a pure lookup: unknown codes are simply invalid (the UI shows
//! an inline "Invalid promo code" message), never an error. Lookups are
//! case-sensitive, matching the codes as printed in marketing emails.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Promo Rule
// =============================================================================

/// How a promo code reduces the subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum PromoRule {
    /// Percentage off the subtotal, in basis points (1000 = 10%).
    PercentOff(u32),
    /// Flat amount off the subtotal, in cents.
    AmountOff(i64),
}

impl PromoRule {
    /// The discount this rule is worth against a subtotal, clamped so it
    /// never exceeds the subtotal itself.
    pub fn discount(&self, subtotal: Money) -> Money {
        let raw = match self {
            PromoRule::PercentOff(bps) => subtotal.percent_of(*bps),
            PromoRule::AmountOff(cents) => Money::from_cents(*cents),
        };
        if raw > subtotal {
            subtotal
        } else {
            raw
        }
    }
}

// =============================================================================
// Code Table
// =============================================================================

/// Known promo codes and their rules.
///
/// A fixed table for now; a promotions service would replace this lookup
/// without changing any caller.
const PROMO_CODES: &[(&str, PromoRule)] = &[
    ("SAVE10", PromoRule::PercentOff(1000)),
    ("WELCOME20", PromoRule::PercentOff(2000)),
    ("FLAT15", PromoRule::AmountOff(1500)),
];

/// Case-sensitive lookup of a promo code's rule.
///
/// ## Example
/// ```rust
/// use storefront_core::promo;
///
/// assert!(promo::lookup("SAVE10").is_some());
/// assert!(promo::lookup("save10").is_none()); // case matters
/// ```
pub fn lookup(code: &str) -> Option<PromoRule> {
    PROMO_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, rule)| *rule)
}

/// Whether a code is in the known set.
pub fn is_valid_code(code: &str) -> bool {
    lookup(code).is_some()
}

/// The discount a code is worth against a subtotal.
///
/// Unknown codes are worth zero - never an error. The result is clamped to
/// the subtotal, so a flat $15 code on a $5.00 cart discounts exactly $5.00.
///
/// ## Example
/// ```rust
/// use storefront_core::promo;
/// use storefront_core::money::Money;
///
/// let subtotal = Money::from_cents(10000); // $100.00
/// assert_eq!(promo::discount_amount("SAVE10", subtotal).cents(), 1000);
/// assert_eq!(promo::discount_amount("BOGUS", subtotal), Money::zero());
/// ```
pub fn discount_amount(code: &str, subtotal: Money) -> Money {
    match lookup(code) {
        Some(rule) => rule.discount(subtotal),
        None => Money::zero(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
