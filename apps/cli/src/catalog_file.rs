//! # Catalog Source
//!
//! Picks the catalog a session runs against: the standard assortment, or a
//! JSON file named by `QUICKMART_CATALOG`.
//!
//! ## File Format
//! ```json
//! {
//!   "products": [
//!     { "name": "Laptop", "category": "electronics", "price_cents": 10000000, "stock": 10 },
//!     { "name": "Shoe",   "category": "clothing",    "price_cents": 100000,   "stock": 30 }
//!   ]
//! }
//! ```
//!
//! Records go through [`Product::new`], so the file gets the same name,
//! price and stock rules as the built-in catalog. Order in the file is the
//! order of the stock report.

use std::fs;
use std::path::Path;

use quickmart_core::{Catalog, Category, CoreResult, Money, Product};
use serde::Deserialize;
use tracing::info;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Top-level shape of a catalog file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    pub products: Vec<ProductRecord>,
}

/// One product as written in a catalog file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductRecord {
    pub name: String,
    pub category: Category,
    pub price_cents: i64,
    pub stock: i64,
}

impl CatalogFile {
    /// Parses catalog JSON.
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads and parses a catalog file.
    pub fn read(path: &Path) -> CliResult<Self> {
        let json = fs::read_to_string(path).map_err(|source| CliError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&json).map_err(|source| CliError::CatalogParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validates every record and builds the catalog.
    pub fn into_catalog(self) -> CoreResult<Catalog> {
        Catalog::from_products(self.products.into_iter().map(|record| {
            Product::new(
                record.name,
                record.category,
                Money::from_cents(record.price_cents),
                record.stock,
            )
        }))
    }
}

/// Builds the catalog the configuration asks for.
pub fn load_catalog(config: &CliConfig) -> CliResult<Catalog> {
    let catalog = match &config.catalog_path {
        Some(path) => {
            let catalog = CatalogFile::read(path)?.into_catalog()?;
            info!(path = %path.display(), products = catalog.len(), "catalog loaded from file");
            catalog
        }
        None => {
            let catalog = Catalog::standard()?;
            info!(products = catalog.len(), "standard catalog loaded");
            catalog
        }
    };

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickmart_core::{CoreError, ValidationError};
    use std::path::PathBuf;

    const SAMPLE: &str = r#"{
        "products": [
            { "name": "Kettle", "category": "electronics", "price_cents": 4500, "stock": 6 },
            { "name": "Scarf", "category": "clothing", "price_cents": 1999, "stock": 0 }
        ]
    }"#;

    #[test]
    fn test_parse_and_build() {
        let catalog = CatalogFile::parse(SAMPLE).unwrap().into_catalog().unwrap();

        assert_eq!(catalog.len(), 2);
        let scarf = catalog.product(catalog.lookup("SCARF").unwrap()).unwrap();
        assert_eq!(scarf.category(), Category::Clothing);
        assert_eq!(scarf.price(), Money::from_cents(1999));
        assert_eq!(scarf.stock_quantity(), 0);

        let names: Vec<&str> = catalog.iter().map(|(_, p)| p.name()).collect();
        assert_eq!(names, ["Kettle", "Scarf"]);
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        let json = r#"{ "products": [
            { "name": "Sofa", "category": "furniture", "price_cents": 1, "stock": 1 }
        ] }"#;
        assert!(CatalogFile::parse(json).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_fields() {
        let json = r#"{ "products": [
            { "name": "Sofa", "category": "clothing", "price_cents": 1, "stock": 1, "colour": "red" }
        ] }"#;
        assert!(CatalogFile::parse(json).is_err());
    }

    #[test]
    fn test_invalid_records_are_rejected() {
        let json = r#"{ "products": [
            { "name": "Mug", "category": "clothing", "price_cents": 100, "stock": 1 },
            { "name": "mug", "category": "clothing", "price_cents": 200, "stock": 1 }
        ] }"#;
        assert!(CatalogFile::parse(json).unwrap().into_catalog().is_err());

        let json = r#"{ "products": [
            { "name": "Mug", "category": "clothing", "price_cents": -100, "stock": 1 }
        ] }"#;
        assert!(CatalogFile::parse(json).unwrap().into_catalog().is_err());
    }

    #[test]
    fn test_oversized_price_is_rejected_at_load() {
        let json = r#"{ "products": [
            { "name": "Gold Bar", "category": "electronics", "price_cents": 5000000000000000000, "stock": 3 }
        ] }"#;
        let err = CatalogFile::parse(json).unwrap().into_catalog().unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_load_standard_catalog_by_default() {
        let catalog = load_catalog(&CliConfig::default()).unwrap();
        assert_eq!(catalog.len(), 10);
    }

    #[test]
    fn test_load_missing_file() {
        let config = CliConfig {
            catalog_path: Some(PathBuf::from("/definitely/not/here/catalog.json")),
            ..CliConfig::default()
        };
        let err = load_catalog(&config).unwrap_err();
        assert!(matches!(err, CliError::CatalogRead { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "quickmart-catalog-{}.json",
            std::process::id()
        ));
        fs::write(&path, SAMPLE).unwrap();

        let config = CliConfig {
            catalog_path: Some(path.clone()),
            ..CliConfig::default()
        };
        let catalog = load_catalog(&config);
        fs::remove_file(&path).unwrap();

        assert_eq!(catalog.unwrap().len(), 2);
    }
}
