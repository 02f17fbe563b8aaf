//! # Validation Module
//!
//! Input validation for the cashier backend.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractor (axum)                                        │
//! │  └── JSON shape / path id parsing                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Business rule validation (names, prices, quantities)              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── Foreign key constraints                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cashier_core::validation::{validate_product_name, validate_quantity};
//!
//! validate_product_name("Kopi Susu").unwrap();
//! validate_quantity(5).unwrap();
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{CheckoutItem, NewCategory, NewProduct};
use crate::{MAX_CHECKOUT_ITEMS, MAX_ITEM_QUANTITY, MAX_PRICE, MAX_STOCK};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

fn validate_name(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use cashier_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Teh Botol").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_name("name", name, 200)
}

/// Validates a category name (required, at most 100 characters).
pub fn validate_category_name(name: &str) -> ValidationResult<()> {
    validate_name("name", name, 100)
}

/// Validates the optional `name` filter of the product listing.
///
/// ## Returns
/// The trimmed filter, or `None` when it is blank.
pub fn validate_search_query(query: Option<&str>) -> ValidationResult<Option<String>> {
    let Some(query) = query.map(str::trim).filter(|q| !q.is_empty()) else {
        return Ok(None);
    };

    if query.chars().count() > 100 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 100,
        });
    }

    Ok(Some(query.to_string()))
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a checkout quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

fn validate_amount(field: &str, value: i64, max: i64) -> ValidationResult<()> {
    if value < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
        });
    }

    if value > max {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max,
        });
    }

    Ok(())
}

/// Validates a unit price. Zero is allowed (free items).
///
/// ## Example
/// ```rust
/// use cashier_core::validation::validate_price;
/// use cashier_core::MAX_PRICE;
///
/// assert!(validate_price(0).is_ok());
/// assert!(validate_price(-1).is_err());
/// assert!(validate_price(MAX_PRICE + 1).is_err());
/// ```
pub fn validate_price(price: i64) -> ValidationResult<()> {
    validate_amount("price", price, MAX_PRICE)
}

/// Validates a stock level set through create/update (0..=MAX_STOCK).
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    validate_amount("stock", stock, MAX_STOCK)
}

// =============================================================================
// Payload Validators
// =============================================================================

/// Validates a product create/update payload.
pub fn validate_new_product(product: &NewProduct) -> ValidationResult<()> {
    validate_product_name(&product.name)?;
    validate_price(product.price)?;
    validate_stock(product.stock)
}

/// Validates a category create/update payload.
pub fn validate_new_category(category: &NewCategory) -> ValidationResult<()> {
    validate_category_name(&category.name)?;

    if let Some(description) = &category.description {
        if description.chars().count() > 1000 {
            return Err(ValidationError::TooLong {
                field: "description".to_string(),
                max: 1000,
            });
        }
    }

    Ok(())
}

/// Validates a checkout item list before the unit of work starts.
///
/// ## Rules
/// ```text
/// items = []            → Required { field: "items" }
/// items.len() > 100     → TooManyItems
/// any quantity <= 0     → MustBePositive
/// duplicate product ids → allowed, processed as separate lines
/// ```
pub fn validate_checkout_items(items: &[CheckoutItem]) -> CoreResult<()> {
    if items.is_empty() {
        return Err(ValidationError::Required {
            field: "items".to_string(),
        }
        .into());
    }

    if items.len() > MAX_CHECKOUT_ITEMS {
        return Err(CoreError::TooManyItems {
            max: MAX_CHECKOUT_ITEMS,
        });
    }

    for item in items {
        validate_quantity(item.quantity)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
