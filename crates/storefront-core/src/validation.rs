//! # Validation Module
//!
//! Boundary validation applied by the session shell before cart logic runs.
//!
//! Cart operations themselves are total functions; the catalog is the
//! authority on product validity. These checks catch malformed input early
//! at the one place it enters the system (the shell), so the pure core can
//! assume well-formed data.
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::validate_quantity;
//!
//! // Validate a quantity from the cart stepper
//! assert!(validate_quantity(5).is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::Product;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a requested line quantity.
///
/// ## Rules
/// - Must be at least 1 (zero is reserved for removal)
/// - Must not exceed [`MAX_ITEM_QUANTITY`]
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 1 || quantity > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }
    Ok(())
}

/// Validates a product record before it enters the cart.
///
/// ## Rules
/// - Id and name must be non-empty
/// - Price must not be negative
/// - Original (pre-sale) price, when present, must be at least the price
///
/// A record failing these checks is a misconfigured catalog entry, a caller
/// precondition violation rather than a runtime fault.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    if product.id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if product.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if product.price_cents < 0 {
        return Err(ValidationError::MustBePositive {
            field: "priceCents".to_string(),
        });
    }

    if let Some(original) = product.original_price_cents {
        if original < product.price_cents {
            return Err(ValidationError::InvalidFormat {
                field: "originalPriceCents".to_string(),
                reason: "must be at least the current price".to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_product() -> Product {
        Product {
            id: "p-1".to_string(),
            name: "Canvas Sneaker".to_string(),
            category: "Shoes".to_string(),
            price_cents: 5900,
            original_price_cents: Some(7900),
            colors: vec![],
            sizes: vec![],
            rating: 4.2,
            review_count: 37,
        }
    }

    #[test]
    fn test_validate_quantity_bounds() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(MAX_ITEM_QUANTITY).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
        assert!(validate_quantity(MAX_ITEM_QUANTITY + 1).is_err());
    }

    #[test]
    fn test_validate_product_accepts_well_formed() {
        assert!(validate_product(&valid_product()).is_ok());
    }

    #[test]
    fn test_validate_product_rejects_empty_fields() {
        let mut p = valid_product();
        p.id = "  ".to_string();
        assert!(matches!(
            validate_product(&p),
            Err(ValidationError::Required { .. })
        ));

        let mut p = valid_product();
        p.name = String::new();
        assert!(validate_product(&p).is_err());
    }

    #[test]
    fn test_validate_product_rejects_negative_price() {
        let mut p = valid_product();
        p.price_cents = -100;
        assert!(matches!(
            validate_product(&p),
            Err(ValidationError::MustBePositive { .. })
        ));
    }

    #[test]
    fn test_validate_product_rejects_inconsistent_sale_price() {
        let mut p = valid_product();
        p.original_price_cents = Some(100); // below current price
        assert!(matches!(
            validate_product(&p),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }
}
