//! # quickmart-core: Pure Business Logic for QuickMart
//!
//! This crate is the **heart** of QuickMart. It contains all checkout logic
//! as plain values and functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        QuickMart Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    quickmart-cli (console)                      │   │
//! │  │   Stock ──► Pick Product ──► Quantity ──► Name ──► Checkout     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ quickmart-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  types    │  │  catalog  │  │   cart    │  │  receipt  │  │   │
//! │  │   │ Category  │  │  Product  │  │ Shopping  │  │  Receipt  │  │   │
//! │  │   │ Discount  │  │  lookup   │  │   Cart    │  │  lines    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING SETUP • NO CONSOLE • PURE VALUES          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Category, DiscountRate, ProductId
//! - [`product`] - Product with stock tracking
//! - [`catalog`] - The single owning store of products
//! - [`cart`] - ShoppingCart accounting and checkout
//! - [`receipt`] - Checkout summary
//! - [`customer`] / [`admin`] - The two roles around the catalog
//! - [`validation`] - Input rules
//! - [`error`] - Domain error types
//!
//! ## Shared Products
//! The [`Catalog`] owns every [`Product`]. A cart only stores [`ProductId`]
//! handles, so stock taken by the cart is what the admin sees on the next
//! stock report.
//!
//! ## Example Usage
//!
//! ```rust
//! use quickmart_core::{Catalog, Customer};
//!
//! let mut catalog = Catalog::standard().unwrap();
//! let mut customer = Customer::new();
//!
//! let laptop = catalog.lookup("LAPTOP").unwrap();
//! customer.cart_mut().add_item(&mut catalog, laptop, 2).unwrap();
//!
//! let receipt = customer.cart_mut().checkout(&catalog).unwrap();
//! assert_eq!(receipt.total().to_string(), "$180000.00");
//! assert_eq!(catalog.product(laptop).unwrap().stock_quantity(), 8);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod customer;
pub mod error;
pub mod money;
pub mod product;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use admin::{Admin, StockReport};
pub use cart::{AddedToCart, CartEntry, ShoppingCart};
pub use catalog::Catalog;
pub use customer::Customer;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use product::Product;
pub use receipt::{Receipt, ReceiptLine};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Width of the `*` and `-` rules framing every console block.
pub const BANNER_WIDTH: usize = 50;

/// Maximum length of a product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Highest accepted unit price, in cents ($1,000,000,000.00).
pub const MAX_PRICE_CENTS: i64 = 100_000_000_000;

/// Highest accepted stock level for one product.
pub const MAX_STOCK_QUANTITY: i64 = 1_000_000;

/// Draws a rule of `ch` across [`BANNER_WIDTH`] columns.
pub(crate) fn rule(ch: char) -> String {
    std::iter::repeat(ch).take(BANNER_WIDTH).collect()
}
