//! # Customer
//!
//! A shopper. Owns exactly one cart for as long as the customer exists.

use crate::cart::ShoppingCart;

/// A customer and their cart.
#[derive(Debug, Clone, Default)]
pub struct Customer {
    cart: ShoppingCart,
}

impl Customer {
    /// Creates a customer with an empty cart.
    pub fn new() -> Self {
        Customer {
            cart: ShoppingCart::new(),
        }
    }

    pub fn cart(&self) -> &ShoppingCart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut ShoppingCart {
        &mut self.cart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;

    #[test]
    fn test_new_customer_has_empty_cart() {
        assert!(Customer::new().cart().is_empty());
    }

    #[test]
    fn test_cart_persists_across_accessor_calls() {
        let mut catalog = Catalog::standard().unwrap();
        let mut customer = Customer::new();
        let speakers = catalog.lookup("speakers").unwrap();

        customer.cart_mut().add_item(&mut catalog, speakers, 2).unwrap();
        customer.cart_mut().add_item(&mut catalog, speakers, 1).unwrap();

        assert_eq!(customer.cart().quantity_of(speakers), 3);
    }
}
