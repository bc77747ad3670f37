//! # Admin
//!
//! Read-only view over the catalog for store staff.
//!
//! ## Rendered Layout
//! ```text
//! **************************************************
//!                Current Stock Levels
//! **************************************************
//! Laptop - 10 units - $100000.00
//! Phone - 30 units - $50000.00
//! ...
//! **************************************************
//! ```

use std::fmt;

use crate::catalog::Catalog;
use crate::money::Money;
use crate::{rule, BANNER_WIDTH};

/// Borrows the shared catalog. Never copies it, so every report shows the
/// stock as it is right now.
#[derive(Debug, Clone, Copy)]
pub struct Admin<'a> {
    catalog: &'a Catalog,
}

impl<'a> Admin<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Admin { catalog }
    }

    /// Snapshot of every product's stock, in catalog order.
    pub fn stock_report(&self) -> StockReport {
        StockReport {
            rows: self
                .catalog
                .iter()
                .map(|(_, product)| StockRow {
                    name: product.name().to_string(),
                    stock_quantity: product.stock_quantity(),
                    price: product.price(),
                })
                .collect(),
        }
    }
}

/// One line of a [`StockReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockRow {
    pub name: String,
    pub stock_quantity: i64,
    pub price: Money,
}

/// Stock levels at the moment [`Admin::stock_report`] was called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockReport {
    rows: Vec<StockRow>,
}

impl StockReport {
    pub fn rows(&self) -> &[StockRow] {
        &self.rows
    }
}

impl fmt::Display for StockReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stars = rule('*');

        writeln!(f, "{stars}")?;
        writeln!(f, "{:^width$}", "Current Stock Levels", width = BANNER_WIDTH)?;
        writeln!(f, "{stars}")?;
        for row in &self.rows {
            writeln!(
                f,
                "{} - {} units - {}",
                row.name, row.stock_quantity, row.price
            )?;
        }
        write!(f, "{stars}")
    }
}
