//! # Error Types
//!
//! Domain-specific error types for cashier-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cashier-core errors (this file)                                       │
//! │  ├── CoreError        - Business rule failures                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  cashier-db errors (separate crate)                                    │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  API errors (apps/api)                                                 │
//! │  └── ApiError         - Status code + message in the JSON envelope     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → DbError → ApiError → Client       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found.
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    /// Insufficient stock to complete a checkout line.
    ///
    /// ## User Workflow
    /// ```text
    /// Checkout { product_id: 1, quantity: 5 }
    ///      │
    ///      ▼
    /// stock for product 1 = 3
    ///      │
    ///      ▼
    /// InsufficientStock { product_id: 1, available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// whole checkout rolled back, client gets 422
    /// ```
    #[error("Insufficient stock for product {product_id}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: i64,
        available: i64,
        requested: i64,
    },

    /// A subtotal or the running total does not fit in an `i64`.
    #[error("Amount overflow while pricing product {product_id}")]
    AmountOverflow { product_id: i64 },

    /// Checkout has more lines than allowed.
    #[error("Checkout cannot have more than {max} items")]
    TooManyItems { max: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any database work starts.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            product_id: 1,
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for product 1: available 3, requested 5"
        );

        assert_eq!(
            CoreError::ProductNotFound(9999).to_string(),
            "Product not found: 9999"
        );

        assert_eq!(
            CoreError::AmountOverflow { product_id: 4 }.to_string(),
            "Amount overflow while pricing product 4"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "items".to_string(),
        };
        assert_eq!(err.to_string(), "items is required");

        let err = ValidationError::MustNotBeNegative {
            field: "stock".to_string(),
        };
        assert_eq!(err.to_string(), "stock must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
