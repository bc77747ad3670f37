//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A 20% discount on $10.99 as f64 is 8.792000000000000...               │
//! │  and summing many of those drifts away from what the receipt shows.    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Discount is rounded to the cent ONCE per unit price                 │
//! │    Subtotals and totals are exact sums of what is printed              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quickmart_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Arithmetic is checked: overflow is `None`, never a wrapped amount
//! let doubled = price.checked_multiply_quantity(2);
//! let total = price.checked_add(Money::from_cents(500));
//! assert_eq!(doubled.map(|m| m.to_string()).as_deref(), Some("$21.98"));
//! assert_eq!(total.map(|m| m.to_string()).as_deref(), Some("$15.99"));
//! assert!(Money::from_cents(i64::MAX).checked_multiply_quantity(2).is_none());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Differences between amounts can be negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for receipt export
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► discounted_price() ──► ReceiptLine.unit_price
///                                              │
///                                              ▼ × quantity
///                                         ReceiptLine.subtotal ──► Receipt.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use quickmart_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use quickmart_core::money::Money;
    ///
    /// let price = Money::from_major_minor(100_000, 0); // $100000.00
    /// assert_eq!(price.cents(), 10_000_000);
    ///
    /// let negative = Money::from_major_minor(-5, 50); // -$5.50
    /// assert_eq!(negative.cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, or `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use quickmart_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(9_000_000); // $90000.00
    /// let subtotal = unit_price.checked_multiply_quantity(2).unwrap();
    /// assert_eq!(subtotal.to_string(), "$180000.00");
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, or `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// The discount itself is rounded half-up to the cent, then subtracted,
    /// so `price - discount` is always exactly what gets printed.
    ///
    /// ## Example
    /// ```rust
    /// use quickmart_core::money::Money;
    /// use quickmart_core::types::DiscountRate;
    ///
    /// let price = Money::from_cents(10000); // $100.00
    /// let discounted = price.apply_discount(DiscountRate::from_bps(1000)); // 10% off
    /// assert_eq!(discounted.cents(), 9000); // $90.00
    /// ```
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        // i128 keeps large prices from overflowing before the division
        let discount_amount = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(self.0 - discount_amount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders `$<dollars>.<cc>` and honours width/alignment flags, so
/// `format!("{:<11}", money)` lines up receipt columns.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let text = format!(
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        );
        f.pad(&text)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
