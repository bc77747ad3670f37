//! # Error Types
//!
//! Domain-specific error types for quickmart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  quickmart-core errors (this file)                                     │
//! │  ├── CoreError        - Catalog, stock and cart rule violations        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  quickmart-cli errors (separate crate)                                 │
//! │  └── CliError         - Config, catalog file, console I/O              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → printed by the session            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. The Display text IS the message shown to the shopper
//! 3. Variants carry context (name, available, requested) for logs
//! 4. None of these are fatal: the session prints them and carries on

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Every variant is an expected condition. The console session prints the
/// Display text and continues with the next step.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The shopper typed a name that is not in the catalog.
    #[error("Invalid product name.")]
    UnknownProduct { name: String },

    /// A [`ProductId`] that does not belong to this catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Adding to the cart would take more than is on the shelf.
    ///
    /// ## User Workflow
    /// ```text
    /// Add to Cart (Watch, qty: 100)
    ///      │
    ///      ▼
    /// Check stock: available=40
    ///      │
    ///      ▼
    /// StockLimitExceeded { name: "Watch", available: 40, requested: 100 }
    ///      │
    ///      ▼
    /// Console: "Quantity limit exceeded for Watch. Available stock: 40"
    /// ```
    #[error("Quantity limit exceeded for {name}. Available stock: {available}")]
    StockLimitExceeded {
        name: String,
        available: i64,
        requested: i64,
    },

    /// A direct stock reduction asked for more than is left.
    #[error("Not enough stock for {name}!")]
    NotEnoughStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Checkout was called on a cart with no entries.
    #[error("Your cart is empty.")]
    EmptyCart,

    /// A line subtotal or the order total does not fit in [`Money`](crate::Money).
    #[error("Order total is too large.")]
    AmountOverflow,

    /// Validation error (wraps ValidationError).
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Returns true for errors caused by what the shopper typed, as opposed
    /// to stock or programming problems.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CoreError::UnknownProduct { .. } | CoreError::Validation(_)
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input or catalog data doesn't meet
/// requirements. Field names are capitalized because they start the message.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be greater than zero.
    #[error("{field} must be positive.")]
    MustBePositive { field: String },

    /// Value must not be below zero.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Text that should have been a whole number.
    #[error("Invalid input. {field} should be an integer.")]
    NotAnInteger { field: String },

    /// Duplicate value (e.g., two products with the same name).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
