//! # Receipt
//!
//! The immutable result of one checkout.
//!
//! ## Rendered Layout
//! ```text
//! **************************************************
//!                  Checkout Summary
//! **************************************************
//! Product              Quantity   Price       Subtotal
//! --------------------------------------------------
//! Laptop               2          $90000.00   $180000.00
//! --------------------------------------------------
//! Total Amount: $180000.00
//! **************************************************
//! Thank you for shopping with us!
//! **************************************************
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::{rule, BANNER_WIDTH};

/// One product's line on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptLine {
    /// Product name at checkout time.
    pub name: String,
    /// Units bought.
    pub quantity: i64,
    /// Discounted unit price.
    pub unit_price: Money,
    /// `unit_price × quantity`.
    pub subtotal: Money,
}

impl ReceiptLine {
    /// ## Errors
    /// `AmountOverflow` if `unit_price × quantity` does not fit.
    pub fn new(name: impl Into<String>, quantity: i64, unit_price: Money) -> CoreResult<Self> {
        let subtotal = unit_price
            .checked_multiply_quantity(quantity)
            .ok_or(CoreError::AmountOverflow)?;
        Ok(ReceiptLine {
            name: name.into(),
            quantity,
            unit_price,
            subtotal,
        })
    }
}

/// A checkout summary.
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    id: Uuid,
    issued_at: DateTime<Utc>,
    lines: Vec<ReceiptLine>,
    total: Money,
}

impl Receipt {
    /// Builds a receipt; the total is the sum of the line subtotals.
    ///
    /// ## Errors
    /// `AmountOverflow` if the total does not fit.
    pub fn new(lines: Vec<ReceiptLine>) -> CoreResult<Self> {
        let total = sum_subtotals(&lines)?;
        Ok(Receipt {
            id: Uuid::new_v4(),
            issued_at: Utc::now(),
            lines,
            total,
        })
    }

    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    #[inline]
    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    #[inline]
    pub fn total(&self) -> Money {
        self.total
    }

    /// Total number of units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

/// Checked sum of line subtotals.
pub(crate) fn sum_subtotals(lines: &[ReceiptLine]) -> CoreResult<Money> {
    lines
        .iter()
        .try_fold(Money::zero(), |total, line| total.checked_add(line.subtotal))
        .ok_or(CoreError::AmountOverflow)
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stars = rule('*');
        let dashes = rule('-');

        writeln!(f, "{stars}")?;
        writeln!(f, "{:^width$}", "Checkout Summary", width = BANNER_WIDTH)?;
        writeln!(f, "{stars}")?;
        writeln!(
            f,
            "{:<20} {:<10} {:<11} {:<11}",
            "Product", "Quantity", "Price", "Subtotal"
        )?;
        writeln!(f, "{dashes}")?;
        for line in &self.lines {
            writeln!(
                f,
                "{:<20} {:<10} {:<11} {:<11}",
                line.name, line.quantity, line.unit_price, line.subtotal
            )?;
        }
        writeln!(f, "{dashes}")?;
        writeln!(f, "Total Amount: {}", self.total)?;
        writeln!(f, "{stars}")?;
        writeln!(f, "Thank you for shopping with us!")?;
        write!(f, "{stars}")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Receipt {
        Receipt::new(vec![
            ReceiptLine::new("Laptop", 2, Money::from_major_minor(90_000, 0)).unwrap(),
            ReceiptLine::new("Shoe", 3, Money::from_major_minor(800, 0)).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_totals() {
        let receipt = sample();
        assert_eq!(receipt.lines().len(), 2);
        assert_eq!(receipt.lines()[0].subtotal, Money::from_major_minor(180_000, 0));
        assert_eq!(receipt.total(), Money::from_major_minor(182_400, 0));
        assert_eq!(receipt.total_quantity(), 5);
    }

    #[test]
    fn test_render_layout() {
        let text = sample().to_string();
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();

        assert_eq!(lines[0], "*".repeat(50));
        assert_eq!(lines[1].trim(), "Checkout Summary");
        assert_eq!(lines[3], "Product              Quantity   Price       Subtotal");
        assert_eq!(lines[4], "-".repeat(50));
        assert_eq!(lines[5], "Laptop               2          $90000.00   $180000.00");
        assert_eq!(lines[6], "Shoe                 3          $800.00     $2400.00");
        assert_eq!(lines[8], "Total Amount: $182400.00");
        assert_eq!(lines[10], "Thank you for shopping with us!");
        assert_eq!(lines.len(), 12);
    }

    #[test]
    fn test_line_subtotal_overflow() {
        let err = ReceiptLine::new("Gold Bar", 3, Money::from_cents(5_000_000_000_000_000_000))
            .unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow));
    }

    #[test]
    fn test_total_overflow() {
        let big = Money::from_cents(i64::MAX / 2 + 1);
        let lines = vec![
            ReceiptLine::new("Left", 1, big).unwrap(),
            ReceiptLine::new("Right", 1, big).unwrap(),
        ];
        assert!(matches!(Receipt::new(lines), Err(CoreError::AmountOverflow)));
    }

    #[test]
    fn test_receipts_get_distinct_ids() {
        assert_ne!(sample().id(), sample().id());
    }

    #[test]
    fn test_serializes_to_json() {
        let receipt = sample();
        let json = serde_json::to_value(&receipt).unwrap();

        assert_eq!(json["total"], 18_240_000);
        assert_eq!(json["lines"][0]["name"], "Laptop");
        assert_eq!(json["lines"][0]["unit_price"], 9_000_000);
        assert_eq!(json["id"], receipt.id().to_string());
    }
}
