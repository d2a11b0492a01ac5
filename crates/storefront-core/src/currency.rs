//! # Currency Module
//!
//! Display currencies for the international storefront: ISO codes, symbols,
//! fixed exchange rates from the base currency (USD), and locale-aware
//! formatting.
//!
//! All cart math happens in base-currency cents ([`crate::money::Money`]);
//! conversion and formatting are strictly presentation-side, applied once at
//! the display boundary.
//!
//! ## Usage
//! ```rust
//! use storefront_core::currency::Currency;
//! use storefront_core::money::Money;
//!
//! let price = Money::from_cents(123450);
//! assert_eq!(Currency::Usd.format(price), "$1,234.50");
//!
//! let local = Currency::Jpy.convert_from_base(Money::from_cents(1000));
//! assert_eq!(Currency::Jpy.format(local), "¥1512"); // at 151.20 JPY/USD
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Exchange rates are fixed-point micros: 1_000_000 = 1.0 local per base.
const RATE_SCALE: i128 = 1_000_000;

// =============================================================================
// Currency
// =============================================================================

/// A display currency supported by the international storefront.
///
/// The base currency is USD; catalog prices are stored in USD cents and
/// converted on display. Rates are a fixed table (the storefront has no
/// live FX feed), matching the currency selector in the international cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Currency {
    /// United States dollar (base currency).
    #[default]
    Usd,
    /// Euro.
    Eur,
    /// Pound sterling.
    Gbp,
    /// Canadian dollar.
    Cad,
    /// Australian dollar.
    Aud,
    /// Japanese yen (zero-decimal currency).
    Jpy,
}

impl Currency {
    /// All supported currencies, in selector order.
    pub const ALL: [Currency; 6] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Cad,
        Currency::Aud,
        Currency::Jpy,
    ];

    /// ISO 4217 code.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
            Currency::Jpy => "JPY",
        }
    }

    /// Display symbol prefixed to formatted amounts.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd | Currency::Cad | Currency::Aud => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Jpy => "¥",
        }
    }

    /// Number of minor-unit digits shown after the decimal point.
    ///
    /// Zero-decimal currencies (JPY) render whole amounts only.
    pub const fn decimal_digits(&self) -> u32 {
        match self {
            Currency::Jpy => 0,
            _ => 2,
        }
    }

    /// Fixed exchange rate from the base currency, in micros
    /// (1_000_000 = 1.0 local per 1.0 USD).
    pub const fn rate_micros(&self) -> i64 {
        match self {
            Currency::Usd => 1_000_000,
            Currency::Eur => 920_000,
            Currency::Gbp => 790_000,
            Currency::Cad => 1_360_000,
            Currency::Aud => 1_520_000,
            Currency::Jpy => 151_200_000,
        }
    }

    /// Case-sensitive lookup by ISO code.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::currency::Currency;
    ///
    /// assert_eq!(Currency::from_code("JPY"), Some(Currency::Jpy));
    /// assert_eq!(Currency::from_code("jpy"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Currency> {
        Currency::ALL.iter().copied().find(|c| c.code() == code)
    }

    /// Converts a base-currency amount into this currency's minor units,
    /// rounding half up.
    ///
    /// The result is only meaningful for display through [`Currency::format`];
    /// cart math stays in base cents.
    pub fn convert_from_base(&self, amount: Money) -> Money {
        // base cents → local major (via rate) → local minor units.
        // numerator / denominator in one step so we round exactly once.
        let pow10 = 10_i128.pow(self.decimal_digits());
        let numerator = amount.cents() as i128 * self.rate_micros() as i128 * pow10;
        let denominator = 100 * RATE_SCALE;
        let rounded = div_half_up(numerator, denominator);
        Money::from_cents(rounded as i64)
    }

    /// Formats an amount (already in this currency's minor units) for display.
    ///
    /// Two-decimal currencies get thousands grouping and a two-digit minor
    /// part (`$1,234.50`); zero-decimal currencies render the bare integer
    /// (`¥1234`), matching the international cart's display.
    pub fn format(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        if self.decimal_digits() == 0 {
            return format!("{}{}{}", sign, self.symbol(), amount.cents().abs());
        }
        format!(
            "{}{}{}.{:02}",
            sign,
            self.symbol(),
            group_thousands(amount.major_part().abs()),
            amount.minor_part()
        )
    }

    /// Converts from base cents and formats in one step.
    ///
    /// This is the `formatLocalPrice` equivalent the international cart uses
    /// for every displayed amount.
    pub fn format_base(&self, base_amount: Money) -> String {
        self.format(self.convert_from_base(base_amount))
    }
}

/// Integer division rounding half away from zero is not needed here; amounts
/// fed to conversion are non-negative catalog prices, so plain half-up works.
fn div_half_up(numerator: i128, denominator: i128) -> i128 {
    (numerator + denominator / 2) / denominator
}

/// Inserts `,` separators every three digits: 1234567 → "1,234,567".
fn group_thousands(mut value: i64) -> String {
    let mut groups = Vec::new();
    loop {
        let chunk = value % 1000;
        value /= 1000;
        if value == 0 {
            groups.push(chunk.to_string());
            break;
        }
        groups.push(format!("{:03}", chunk));
    }
    groups.reverse();
    groups.join(",")
}

// =============================================================================
// Unit Tests
// =============================================================================
