//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! The taxonomy is deliberately small: cart mutations are total functions
//! (bad requests are no-ops) and an invalid promo code is a boolean result,
//! not an error. What remains are shell-boundary failures - rejecting an
//! empty-cart checkout, an unknown currency code from the selector, and
//! input validation.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (ids, field names)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These represent rule violations surfaced at the session boundary. They
/// are caught by the shell and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Checkout was requested on an empty cart.
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    /// A currency code from the selector is not in the supported table.
    #[error("Unsupported currency: {0}")]
    UnknownCurrency(String),

    /// A line id from the frontend does not exist in the cart.
    ///
    /// Cart mutations treat this as a no-op; this variant exists for shell
    /// operations that must report the miss (e.g. a detail lookup).
    #[error("Cart line not found: {0}")]
    LineNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when caller-supplied input doesn't meet preconditions.
/// Used for early validation at the shell boundary, before cart logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format or inconsistent data.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
