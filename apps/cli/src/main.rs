//! # QuickMart Console Entry Point
//!
//! ```text
//! $ quickmart
//! **************************************************
//!                Current Stock Levels
//! **************************************************
//! Laptop - 10 units - $100000.00
//! ...
//! Enter the product name to add to the cart: laptop
//! Enter quantity: 2
//! Added 2 of Laptop to cart.
//! Enter your name for the order: Alice
//! ```
//!
//! The actual setup is in lib.rs for better testability.

fn main() {
    quickmart_cli::run();
}
