//! # Validation Module
//!
//! Input validation utilities for QuickMart.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console session (quickmart-cli)                              │
//! │  ├── normalize_product_name() before catalog lookup                    │
//! │  └── parse_quantity() on the raw quantity line                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Domain operations (this crate)                               │
//! │  ├── validate_quantity() in add_item / reduce_stock                    │
//! │  └── validate_product_name/price/stock in Product::new                 │
//! │                                                                         │
//! │  Every failure is a ValidationError, never a panic                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quickmart_core::validation::{normalize_product_name, parse_quantity};
//!
//! assert_eq!(normalize_product_name("  Washing Machine \n"), "washing machine");
//! assert_eq!(parse_quantity(" 3 ").unwrap(), 3);
//! assert!(parse_quantity("three").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_PRICE_CENTS, MAX_PRODUCT_NAME_LEN, MAX_STOCK_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Turns free text into a catalog key: trimmed and lowercased.
pub fn normalize_product_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "Product name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "Product name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses the quantity line typed by the shopper.
///
/// Surrounding whitespace is ignored; anything else that is not a whole
/// number is rejected. Sign is kept, so `"-2"` parses and is then refused by
/// [`validate_quantity`].
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::NotAnInteger {
            field: "Quantity".to_string(),
        })
}

/// Validates a quantity value.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart: Add Item                                                         │
/// │                                                                         │
/// │  User enters quantity: 5                                               │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity(5) ← THIS FUNCTION                                  │
/// │       │                                                                 │
/// │       ├── qty <= 0? → Error: "Quantity must be positive."              │
/// │       │                                                                 │
/// │       └── OK → stock check in ShoppingCart::add_item                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "Quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price. Zero is allowed (free items).
///
/// ## Rules
/// - Must not be negative
/// - Must not exceed MAX_PRICE_CENTS, so `price × stock` stays well inside i64
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "Price".to_string(),
        });
    }

    if price.cents() > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "Price (cents)".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates an initial stock level. Zero is allowed (sold out).
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::Negative {
            field: "Stock".to_string(),
        });
    }

    if stock > MAX_STOCK_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "Stock".to_string(),
            min: 0,
            max: MAX_STOCK_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
