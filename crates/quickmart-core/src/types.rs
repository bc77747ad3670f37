//! # Domain Types
//!
//! Small value types shared by the catalog and the cart.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │  DiscountRate   │   │   ProductId     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Electronics ───┼──►│  1000 bps (10%) │   │  catalog tag +  │       │
//! │  │  Clothing    ───┼──►│  2000 bps (20%) │   │  ProductKey     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, Key};
use std::fmt;
use uuid::Uuid;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10%, 2000 bps = 20%
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// No discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
    }
}

// =============================================================================
// Category
// =============================================================================

/// The category a product is sold under. Fixed at construction.
///
/// Each category carries exactly one discount rate. A new category is a
/// new variant here plus its arm in [`Category::discount_rate`]; the
/// exhaustive match refuses to compile until the rate exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Laptops, phones, appliances. 10% off.
    Electronics,
    /// Shoes, watches and apparel. 20% off.
    Clothing,
}

impl Category {
    /// Returns the discount applied to every product in this category.
    pub const fn discount_rate(&self) -> DiscountRate {
        match self {
            Category::Electronics => DiscountRate::from_bps(1000),
            Category::Clothing => DiscountRate::from_bps(2000),
        }
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Product Handle
// =============================================================================

new_key_type! {
    /// Slot key of a product inside one catalog's store.
    pub struct ProductKey;
}

/// Stable handle to a product inside the [`Catalog`](crate::Catalog) that
/// issued it.
///
/// Copying a handle never copies the product, so every holder sees the
/// same stock. The handle remembers which catalog issued it; any other
/// catalog answers `ProductNotFound` even when the slot exists there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId {
    catalog: Uuid,
    key: ProductKey,
}

impl ProductId {
    #[inline]
    pub(crate) const fn new(catalog: Uuid, key: ProductKey) -> Self {
        ProductId { catalog, key }
    }

    #[inline]
    pub(crate) const fn catalog(&self) -> Uuid {
        self.catalog
    }

    #[inline]
    pub(crate) const fn key(&self) -> ProductKey {
        self.key
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:?}", self.key.data())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_discount_rates() {
        assert_eq!(Category::Electronics.discount_rate().bps(), 1000);
        assert_eq!(Category::Clothing.discount_rate().bps(), 2000);
    }

    #[test]
    fn test_discount_rate_display() {
        assert_eq!(DiscountRate::from_bps(1000).to_string(), "10.00%");
        assert_eq!(DiscountRate::from_bps(825).to_string(), "8.25%");
        assert_eq!(DiscountRate::default(), DiscountRate::zero());
    }

    #[test]
    fn test_category_serde_names() {
        let json = serde_json::to_string(&Category::Electronics).unwrap();
        assert_eq!(json, "\"electronics\"");

        let parsed: Category = serde_json::from_str("\"clothing\"").unwrap();
        assert_eq!(parsed, Category::Clothing);
        assert_eq!(parsed.to_string(), "Clothing");
    }
}
