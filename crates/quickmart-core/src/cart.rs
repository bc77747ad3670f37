//! # Shopping Cart
//!
//! Accumulates (product, quantity) selections and turns them into a receipt.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  add_item(catalog, #0, 2)                                              │
//! │     │                                                                   │
//! │     ├── qty <= 0?            → "Quantity must be positive."            │
//! │     ├── stock < qty?         → "Quantity limit exceeded ..."           │
//! │     └── OK: catalog[#0].reduce_stock(2), entries[#0] += 2              │
//! │                                                                         │
//! │  checkout(catalog)                                                     │
//! │     │                                                                   │
//! │     ├── no entries?          → "Your cart is empty."                   │
//! │     └── Receipt { lines, total }, then entries.clear()                 │
//! │                                                                         │
//! │  NOTE: Stock is taken at add time and never given back. Clearing the   │
//! │        cart (or checking out) leaves the catalog untouched.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use std::fmt;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::receipt::{sum_subtotals, Receipt, ReceiptLine};
use crate::types::ProductId;
use crate::validation::validate_quantity;

/// A product handle and the quantity accumulated for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartEntry {
    pub product: ProductId,
    pub quantity: i64,
}

/// Confirmation returned by a successful [`ShoppingCart::add_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedToCart {
    pub product: ProductId,
    pub name: String,
    pub quantity: i64,
    /// Stock left on the shelf after this add.
    pub remaining_stock: i64,
}

impl fmt::Display for AddedToCart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Added {} of {} to cart.", self.quantity, self.name)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Entries are unique by `ProductId` (adding the same product increases quantity)
/// - Entries keep first-added order
/// - Every unit recorded here has already been removed from catalog stock
#[derive(Debug, Clone)]
pub struct ShoppingCart {
    entries: Vec<CartEntry>,
    created_at: DateTime<Utc>,
}

impl ShoppingCart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        ShoppingCart {
            entries: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds `quantity` of a product, taking it out of catalog stock.
    ///
    /// This is the single gate between cart contents and stock: on success
    /// the stock reduction and the entry update happen together; on any
    /// error neither happens.
    ///
    /// ## Errors
    /// - `Validation(MustBePositive)` if `quantity <= 0`
    /// - `ProductNotFound` if the handle was issued by another catalog
    /// - `StockLimitExceeded` if `quantity` exceeds current stock
    pub fn add_item(
        &mut self,
        catalog: &mut Catalog,
        product: ProductId,
        quantity: i64,
    ) -> CoreResult<AddedToCart> {
        validate_quantity(quantity)?;

        let item = catalog.product_mut(product)?;
        if !item.can_sell(quantity) {
            return Err(CoreError::StockLimitExceeded {
                name: item.name().to_string(),
                available: item.stock_quantity(),
                requested: quantity,
            });
        }
        item.reduce_stock(quantity)?;

        match self.entries.iter_mut().find(|e| e.product == product) {
            Some(entry) => entry.quantity += quantity,
            None => self.entries.push(CartEntry { product, quantity }),
        }

        Ok(AddedToCart {
            product,
            name: item.name().to_string(),
            quantity,
            remaining_stock: item.stock_quantity(),
        })
    }

    /// Renders the cart as a receipt and empties it.
    ///
    /// Stock is not touched: it was already deducted by [`add_item`].
    /// Calling this again right away returns `EmptyCart`.
    ///
    /// ## Errors
    /// - `EmptyCart` if there is nothing to check out
    /// - `ProductNotFound` if an entry's handle is not from `catalog`
    /// - `AmountOverflow` if a subtotal or the total does not fit
    ///
    /// On error the cart is left as it was.
    ///
    /// [`add_item`]: ShoppingCart::add_item
    pub fn checkout(&mut self, catalog: &Catalog) -> CoreResult<Receipt> {
        if self.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let lines = self.receipt_lines(catalog)?;
        let receipt = Receipt::new(lines)?;
        self.clear();
        Ok(receipt)
    }

    /// Discounted total of the current contents, without checking out.
    pub fn total(&self, catalog: &Catalog) -> CoreResult<Money> {
        sum_subtotals(&self.receipt_lines(catalog)?)
    }

    fn receipt_lines(&self, catalog: &Catalog) -> CoreResult<Vec<ReceiptLine>> {
        self.entries
            .iter()
            .map(|entry| -> CoreResult<ReceiptLine> {
                let product = catalog.product(entry.product)?;
                ReceiptLine::new(product.name(), entry.quantity, product.discounted_price())
            })
            .collect()
    }

    /// Quantity recorded for a product (0 if absent).
    pub fn quantity_of(&self, product: ProductId) -> i64 {
        self.entries
            .iter()
            .find(|e| e.product == product)
            .map_or(0, |e| e.quantity)
    }

    /// Entries in first-added order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Clears all entries. Stock already taken stays taken.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.created_at = Utc::now();
    }

    /// Returns the number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the total quantity of all entries.
    pub fn total_quantity(&self) -> i64 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// When the cart was created or last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for ShoppingCart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
