//! # Catalog
//!
//! The single owning store of every [`Product`].
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Catalog (id: Uuid)                                                    │
//! │   ├── products: SlotMap<ProductKey, Product>  ◄── owns, insertion order│
//! │   └── index: "laptop" ──► 0v1     ◄── lowercased name → ProductKey     │
//! │                                                                         │
//! │   ShoppingCart ── holds (id, 0v1) ┐                                     │
//! │                              ├──► same Product, same stock counter     │
//! │   Admin ── borrows &Catalog ──────┘                                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use quickmart_core::Catalog;
//!
//! let catalog = Catalog::standard().unwrap();
//! assert_eq!(catalog.len(), 10);
//! assert_eq!(catalog.lookup("LAPTOP"), catalog.lookup("laptop"));
//! assert!(catalog.lookup("toaster").is_none());
//! ```

use std::collections::HashMap;

use slotmap::SlotMap;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::product::Product;
use crate::types::{Category, ProductId, ProductKey};
use crate::validation::normalize_product_name;

/// The fixed assortment every session starts with:
/// (name, category, whole-dollar price, stock).
const STANDARD_PRODUCTS: &[(&str, Category, i64, i64)] = &[
    ("Laptop", Category::Electronics, 100_000, 10),
    ("Phone", Category::Electronics, 50_000, 30),
    ("Shoe", Category::Clothing, 1_000, 30),
    ("Watch", Category::Clothing, 10_000, 40),
    ("SmartTV", Category::Electronics, 60_000, 15),
    ("Speakers", Category::Electronics, 15_000, 15),
    ("AC", Category::Electronics, 35_000, 8),
    ("Washing Machine", Category::Electronics, 25_000, 12),
    ("Vacuum Cleaner", Category::Electronics, 8_000, 12),
    ("Earpods", Category::Electronics, 3_000, 25),
];

/// Product store keyed case-insensitively by name.
///
/// Products are never removed, so slot order is insertion order.
#[derive(Debug)]
pub struct Catalog {
    id: Uuid,
    products: SlotMap<ProductKey, Product>,
    index: HashMap<String, ProductKey>,
}

impl Catalog {
    /// Creates an empty catalog with a fresh ownership tag.
    pub fn new() -> Self {
        Catalog {
            id: Uuid::new_v4(),
            products: SlotMap::with_key(),
            index: HashMap::new(),
        }
    }

    /// Builds the standard ten-product catalog.
    pub fn standard() -> CoreResult<Self> {
        Catalog::from_products(STANDARD_PRODUCTS.iter().map(|&(name, category, dollars, stock)| {
            Product::new(name, category, Money::from_major_minor(dollars, 0), stock)
        }))
    }

    /// Builds a catalog from already-validated products, in order.
    ///
    /// ## Errors
    /// The first construction or duplicate-name error encountered.
    pub fn from_products<I>(products: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = CoreResult<Product>>,
    {
        let mut catalog = Catalog::new();
        for product in products {
            catalog.insert(product?)?;
        }
        Ok(catalog)
    }

    /// Adds a product and returns its handle.
    ///
    /// ## Errors
    /// `Duplicate` if a product with the same case-insensitive name exists.
    pub fn insert(&mut self, product: Product) -> CoreResult<ProductId> {
        let key = normalize_product_name(product.name());
        if self.index.contains_key(&key) {
            return Err(ValidationError::Duplicate {
                field: "Product".to_string(),
                value: product.name().to_string(),
            }
            .into());
        }

        let slot = self.products.insert(product);
        self.index.insert(key, slot);
        Ok(ProductId::new(self.id, slot))
    }

    /// Looks a product up by name, ignoring case and surrounding whitespace.
    pub fn lookup(&self, name: &str) -> Option<ProductId> {
        self.index
            .get(&normalize_product_name(name))
            .map(|&slot| ProductId::new(self.id, slot))
    }

    /// Like [`Catalog::lookup`] but reports a miss as `UnknownProduct`.
    pub fn find(&self, name: &str) -> CoreResult<ProductId> {
        self.lookup(name).ok_or_else(|| CoreError::UnknownProduct {
            name: name.trim().to_string(),
        })
    }

    /// Returns the product behind a handle.
    ///
    /// ## Errors
    /// `ProductNotFound` if the handle was issued by another catalog.
    pub fn product(&self, id: ProductId) -> CoreResult<&Product> {
        self.owned_slot(id)
            .and_then(|slot| self.products.get(slot))
            .ok_or(CoreError::ProductNotFound(id))
    }

    /// Mutable access, used by the cart to take stock.
    pub fn product_mut(&mut self, id: ProductId) -> CoreResult<&mut Product> {
        self.owned_slot(id)
            .and_then(|slot| self.products.get_mut(slot))
            .ok_or(CoreError::ProductNotFound(id))
    }

    fn owned_slot(&self, id: ProductId) -> Option<ProductKey> {
        (id.catalog() == self.id).then_some(id.key())
    }

    /// All products with their handles, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ProductId, &Product)> + '_ {
        let id = self.id;
        self.products
            .iter()
            .map(move |(slot, product)| (ProductId::new(id, slot), product))
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Sum of all stock counters.
    pub fn total_stock(&self) -> i64 {
        self.products.values().map(Product::stock_quantity).sum()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = Catalog::standard().unwrap();
        assert_eq!(catalog.len(), 10);
        assert!(!catalog.is_empty());

        let names: Vec<&str> = catalog.iter().map(|(_, p)| p.name()).collect();
        assert_eq!(
            names,
            [
                "Laptop",
                "Phone",
                "Shoe",
                "Watch",
                "SmartTV",
                "Speakers",
                "AC",
                "Washing Machine",
                "Vacuum Cleaner",
                "Earpods"
            ]
        );
        assert_eq!(catalog.total_stock(), 10 + 30 + 30 + 40 + 15 + 15 + 8 + 12 + 12 + 25);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = Catalog::standard().unwrap();
        let lower = catalog.lookup("laptop").unwrap();

        assert_eq!(catalog.lookup("LAPTOP"), Some(lower));
        assert_eq!(catalog.lookup("  LaPtOp \n"), Some(lower));
        assert_eq!(catalog.lookup("washing machine"), catalog.lookup("Washing Machine"));
        assert_eq!(catalog.product(lower).unwrap().name(), "Laptop");
    }

    #[test]
    fn test_find_unknown_product() {
        let catalog = Catalog::standard().unwrap();
        let err = catalog.find(" Toaster ").unwrap_err();
        assert!(matches!(err, CoreError::UnknownProduct { ref name } if name == "Toaster"));
    }

    #[test]
    fn test_insert_rejects_duplicate_names() {
        let mut catalog = Catalog::new();
        catalog
            .insert(Product::electronics("Phone", Money::from_cents(100), 1).unwrap())
            .unwrap();

        let err = catalog
            .insert(Product::clothing("PHONE", Money::from_cents(200), 2).unwrap())
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Duplicate { .. })
        ));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_from_products_propagates_invalid_product() {
        let result = Catalog::from_products([
            Product::electronics("Phone", Money::from_cents(100), 1),
            Product::electronics("Broken", Money::from_cents(100), -1),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_handle() {
        let mut catalog = Catalog::new();
        let foreign = Catalog::standard().unwrap().lookup("earpods").unwrap();

        assert!(matches!(catalog.product(foreign), Err(CoreError::ProductNotFound(_))));
        assert!(catalog.product_mut(foreign).is_err());
    }

    #[test]
    fn test_handle_from_another_catalog_with_same_slot() {
        let standard = Catalog::standard().unwrap();
        let phone = standard.lookup("phone").unwrap();

        let mut small = Catalog::from_products([
            Product::clothing("Hat", Money::from_cents(500), 5),
            Product::clothing("Scarf", Money::from_cents(900), 4),
        ])
        .unwrap();

        let err = small.product(phone).unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(id) if id == phone));
        assert!(small.product_mut(phone).is_err());

        let scarf = small.lookup("scarf").unwrap();
        assert_ne!(scarf, phone);
        assert_eq!(small.product(scarf).unwrap().stock_quantity(), 4);
    }

    #[test]
    fn test_iter_handles_resolve_in_same_catalog() {
        let catalog = Catalog::standard().unwrap();
        for (id, product) in catalog.iter() {
            assert_eq!(catalog.lookup(product.name()), Some(id));
            assert_eq!(catalog.product(id).unwrap().name(), product.name());
        }
    }

    #[test]
    fn test_mutation_is_visible_through_every_lookup() {
        let mut catalog = Catalog::standard().unwrap();
        let id = catalog.lookup("AC").unwrap();

        catalog.product_mut(id).unwrap().reduce_stock(3).unwrap();

        let again = catalog.lookup("ac").unwrap();
        assert_eq!(catalog.product(again).unwrap().stock_quantity(), 5);
    }
}
