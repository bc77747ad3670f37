//! # Checkout Session
//!
//! One interactive run: show stock, take one selection, check out, show
//! stock again.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Admin stock report                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "Enter the product name ..."  ── unknown? ──► "Invalid product name." │
//! │       │ found                                          │                │
//! │       ▼                                                │                │
//! │  "Enter quantity: "  ── not a number? ──► message ─────┤                │
//! │       │                                                │                │
//! │       ▼                                                │                │
//! │  cart.add_item() ──► "Added ..." / rejection ──────────┤                │
//! │                                                        ▼                │
//! │  "Enter your name for the order: " ──► order banner                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  cart.checkout() ──► receipt / "Your cart is empty."                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Admin stock report                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Shopper mistakes never end the session; only console I/O failures do.

use std::io::{BufRead, Write};

use quickmart_core::validation::parse_quantity;
use quickmart_core::{Admin, Catalog, CoreError, Customer, Receipt, BANNER_WIDTH};
use tracing::{debug, info, warn};

use crate::error::CliResult;

/// What a finished session produced.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub customer_name: String,
    /// `None` when the cart was empty at checkout.
    pub receipt: Option<Receipt>,
}

/// Console session over any line reader and writer.
#[derive(Debug)]
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session { input, output }
    }

    /// Hands back the writer, e.g. to inspect what a test session printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the whole flow against `catalog`.
    pub fn run(&mut self, catalog: &mut Catalog) -> CliResult<SessionOutcome> {
        let mut customer = Customer::new();

        self.print_stock(catalog)?;

        let product_name = self.prompt("Enter the product name to add to the cart: ")?;
        self.select_product(catalog, &mut customer, &product_name)?;

        let customer_name = self.prompt("Enter your name for the order: ")?;
        self.print_order_banner(&customer_name)?;

        let receipt = self.checkout(catalog, &mut customer)?;

        self.print_stock(catalog)?;
        self.output.flush()?;

        Ok(SessionOutcome {
            customer_name,
            receipt,
        })
    }

    fn select_product(
        &mut self,
        catalog: &mut Catalog,
        customer: &mut Customer,
        product_name: &str,
    ) -> CliResult<()> {
        let product = match catalog.find(product_name) {
            Ok(product) => product,
            Err(err) => return self.report(&err),
        };

        let quantity_text = self.prompt("Enter quantity: ")?;
        let quantity = match parse_quantity(&quantity_text) {
            Ok(quantity) => quantity,
            Err(err) => return self.report(&err.into()),
        };

        debug!(%product, quantity, "add to cart requested");
        match customer.cart_mut().add_item(catalog, product, quantity) {
            Ok(added) => {
                info!(
                    product = %added.name,
                    quantity = added.quantity,
                    remaining_stock = added.remaining_stock,
                    "added to cart"
                );
                writeln!(self.output, "{added}")?;
                Ok(())
            }
            Err(err) => self.report(&err),
        }
    }

    fn checkout(
        &mut self,
        catalog: &Catalog,
        customer: &mut Customer,
    ) -> CliResult<Option<Receipt>> {
        let cart_opened = customer.cart().created_at();
        match customer.cart_mut().checkout(catalog) {
            Ok(receipt) => {
                info!(
                    receipt_id = %receipt.id(),
                    cart_opened = %cart_opened,
                    issued_at = %receipt.issued_at(),
                    lines = receipt.lines().len(),
                    units = receipt.total_quantity(),
                    total = %receipt.total(),
                    "checkout complete"
                );
                writeln!(self.output, "{receipt}")?;
                Ok(Some(receipt))
            }
            Err(err) => {
                self.report(&err)?;
                Ok(None)
            }
        }
    }

    /// Prints a recoverable error for the shopper and logs it.
    fn report(&mut self, err: &CoreError) -> CliResult<()> {
        match err {
            CoreError::StockLimitExceeded {
                name,
                available,
                requested,
            } => warn!(product = %name, available, requested, "stock limit exceeded"),
            _ if err.is_input_error() => debug!(error = %err, "input rejected"),
            _ => warn!(error = %err, "operation rejected"),
        }
        writeln!(self.output, "{err}")?;
        Ok(())
    }

    fn print_stock(&mut self, catalog: &Catalog) -> CliResult<()> {
        writeln!(self.output, "{}", Admin::new(catalog).stock_report())?;
        Ok(())
    }

    fn print_order_banner(&mut self, customer_name: &str) -> CliResult<()> {
        let stars = "*".repeat(BANNER_WIDTH);
        let message = format!("Order successfully placed by {customer_name}!");

        writeln!(self.output, "{stars}")?;
        writeln!(self.output, "{message:^width$}", width = BANNER_WIDTH)?;
        writeln!(self.output, "{stars}")?;
        Ok(())
    }

    /// Writes `text`, then reads one line. End of input reads as "".
    fn prompt(&mut self, text: &str) -> CliResult<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim_end_matches(|c: char| c == '\n' || c == '\r').to_string())
    }
}
