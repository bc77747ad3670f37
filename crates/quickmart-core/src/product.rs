//! # Product
//!
//! A catalog item with a category-driven discount and a stock counter.
//!
//! ## Stock Lifecycle
//! ```text
//! Product::new(stock = 10)
//!      │
//!      ▼
//! reduce_stock(2) ──► stock = 8      (only path that mutates stock)
//!      │
//!      ▼
//! reduce_stock(9) ──► NotEnoughStock, stock stays 8
//! ```

use serde::Serialize;
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Category;
use crate::validation::{validate_price, validate_product_name, validate_quantity, validate_stock};

/// A product available for sale.
///
/// Fields are private: the name, category and price never change after
/// construction, and stock only moves through [`Product::reduce_stock`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    name: String,
    category: Category,
    price: Money,
    stock_quantity: i64,
}

impl Product {
    /// Creates a validated product.
    ///
    /// ## Errors
    /// - empty or overlong name
    /// - negative price
    /// - negative stock
    pub fn new(
        name: impl Into<String>,
        category: Category,
        price: Money,
        stock_quantity: i64,
    ) -> CoreResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price(price)?;
        validate_stock(stock_quantity)?;

        Ok(Product {
            name: name.trim().to_string(),
            category,
            price,
            stock_quantity,
        })
    }

    /// Shorthand for an Electronics product.
    pub fn electronics(name: impl Into<String>, price: Money, stock: i64) -> CoreResult<Self> {
        Product::new(name, Category::Electronics, price, stock)
    }

    /// Shorthand for a Clothing product.
    pub fn clothing(name: impl Into<String>, price: Money, stock: i64) -> CoreResult<Self> {
        Product::new(name, Category::Clothing, price, stock)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn stock_quantity(&self) -> i64 {
        self.stock_quantity
    }

    /// Price after the category discount: `price × (1 − rate)`.
    pub fn discounted_price(&self) -> Money {
        self.price.apply_discount(self.category.discount_rate())
    }

    /// Checks whether `quantity` units can be taken from stock.
    pub fn can_sell(&self, quantity: i64) -> bool {
        quantity > 0 && self.stock_quantity >= quantity
    }

    /// Takes `quantity` units out of stock.
    ///
    /// Fails softly: on error nothing is mutated and the returned
    /// [`CoreError`] carries the message for the shopper.
    ///
    /// ## Errors
    /// - `Validation(MustBePositive)` if `quantity <= 0`
    /// - `NotEnoughStock` if `quantity` exceeds what is left
    pub fn reduce_stock(&mut self, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        if self.stock_quantity < quantity {
            return Err(CoreError::NotEnoughStock {
                name: self.name.clone(),
                available: self.stock_quantity,
                requested: quantity,
            });
        }

        self.stock_quantity -= quantity;
        Ok(())
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} (Stock: {})",
            self.name, self.price, self.stock_quantity
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Product {
        Product::electronics("Laptop", Money::from_major_minor(100_000, 0), 10).unwrap()
    }

    #[test]
    fn test_accessors() {
        let product = laptop();
        assert_eq!(product.name(), "Laptop");
        assert_eq!(product.category(), Category::Electronics);
        assert_eq!(product.price(), Money::from_major_minor(100_000, 0));
        assert_eq!(product.stock_quantity(), 10);
    }

    #[test]
    fn test_discounted_price_per_category() {
        assert_eq!(laptop().discounted_price(), Money::from_major_minor(90_000, 0));

        let watch = Product::clothing("Watch", Money::from_major_minor(10_000, 0), 40).unwrap();
        assert_eq!(watch.discounted_price(), Money::from_major_minor(8_000, 0));
    }

    #[test]
    fn test_discounted_price_matches_rate_formula() {
        for (category, price_cents) in [
            (Category::Electronics, 300_000),
            (Category::Electronics, 800_000),
            (Category::Clothing, 100_000),
            (Category::Clothing, 1_000_000),
        ] {
            let product = Product::new("Item", category, Money::from_cents(price_cents), 1).unwrap();
            let expected = price_cents * (10_000 - category.discount_rate().bps() as i64) / 10_000;
            assert_eq!(product.discounted_price().cents(), expected);
        }
    }

    #[test]
    fn test_reduce_stock() {
        let mut product = laptop();
        product.reduce_stock(3).unwrap();
        assert_eq!(product.stock_quantity(), 7);

        product.reduce_stock(7).unwrap();
        assert_eq!(product.stock_quantity(), 0);
    }

    #[test]
    fn test_reduce_stock_fails_softly_when_short() {
        let mut product = laptop();
        let err = product.reduce_stock(11).unwrap_err();

        assert!(matches!(
            err,
            CoreError::NotEnoughStock { available: 10, requested: 11, .. }
        ));
        assert_eq!(err.to_string(), "Not enough stock for Laptop!");
        assert_eq!(product.stock_quantity(), 10);
    }

    #[test]
    fn test_reduce_stock_rejects_non_positive() {
        let mut product = laptop();
        assert!(product.reduce_stock(0).is_err());
        assert!(product.reduce_stock(-4).is_err());
        assert_eq!(product.stock_quantity(), 10);
    }

    #[test]
    fn test_can_sell() {
        let product = laptop();
        assert!(product.can_sell(10));
        assert!(!product.can_sell(11));
        assert!(!product.can_sell(0));
    }

    #[test]
    fn test_display() {
        assert_eq!(laptop().to_string(), "Laptop - $100000.00 (Stock: 10)");
    }

    #[test]
    fn test_new_validates() {
        assert!(Product::electronics("", Money::zero(), 1).is_err());
        assert!(Product::electronics("Cable", Money::from_cents(-1), 1).is_err());
        assert!(Product::electronics("Cable", Money::zero(), -1).is_err());

        let trimmed = Product::clothing("  Scarf ", Money::from_cents(500), 0).unwrap();
        assert_eq!(trimmed.name(), "Scarf");
    }
}
