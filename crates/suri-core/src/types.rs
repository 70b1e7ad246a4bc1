//! # Domain Types
//!
//! Core domain types shared by the catalog, the cart and checkout.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   add_to_cart   ┌─────────────────┐               │
//! │  │    Product      │ ──────────────► │  CartProduct    │               │
//! │  │  ─────────────  │   (snapshot)    │  ─────────────  │               │
//! │  │  id             │                 │  id             │               │
//! │  │  title          │                 │  title          │               │
//! │  │  price (Money)  │                 │  price (Money)  │               │
//! │  │  description    │                 │  image          │               │
//! │  │  category       │                 └────────┬────────┘               │
//! │  │  image          │                          │                         │
//! │  │  rating?        │                          ▼                         │
//! │  └─────────────────┘                 CartLineItem (cart.rs)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::ALL_CATEGORIES;

// =============================================================================
// Product Id
// =============================================================================

/// Catalog identifier of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct ProductId(u32);

impl ProductId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        ProductId(id)
    }
}

// =============================================================================
// Product
// =============================================================================

/// Customer rating summary published by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rating {
    /// Average score, 0.0 to 5.0.
    pub rate: f64,
    /// Number of ratings.
    pub count: u32,
}

/// A product listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    pub id: ProductId,

    /// Display name, also the target of the search term filter.
    pub title: String,

    /// Current catalog price.
    pub price: Money,

    pub description: String,

    /// Catalog category, e.g. "electronics".
    pub category: String,

    /// Image URL.
    pub image: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl Product {
    /// Snapshot of the fields the cart keeps.
    pub fn to_cart_product(&self) -> CartProduct {
        CartProduct::from(self)
    }
}

// =============================================================================
// Cart Product
// =============================================================================

/// The product data handed to `AddToCart`.
///
/// Title, price and image are frozen at add-time: the cart never re-reads
/// them from the catalog, so a later price change does not touch the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartProduct {
    pub id: ProductId,
    pub title: String,
    pub price: Money,
    pub image: String,
}

impl From<&Product> for CartProduct {
    fn from(product: &Product) -> Self {
        CartProduct {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
        }
    }
}

// =============================================================================
// Categories
// =============================================================================

/// Checks whether a selected category means "no filter".
///
/// The comparison is case-insensitive, matching how the category buttons
/// compare their labels.
pub fn is_all_categories(category: &str) -> bool {
    category.eq_ignore_ascii_case(ALL_CATEGORIES)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn backpack() -> Product {
        Product {
            id: ProductId::new(1),
            title: "Fjallraven - Foldsack No. 1 Backpack".to_string(),
            price: Money::from_cents(10995),
            description: "Your perfect pack for everyday use".to_string(),
            category: "men's clothing".to_string(),
            image: "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg".to_string(),
            rating: Some(Rating {
                rate: 3.9,
                count: 120,
            }),
        }
    }

    #[test]
    fn test_cart_product_snapshot() {
        let product = backpack();
        let snapshot = product.to_cart_product();

        assert_eq!(snapshot.id, product.id);
        assert_eq!(snapshot.title, product.title);
        assert_eq!(snapshot.price, product.price);
        assert_eq!(snapshot.image, product.image);
    }

    #[test]
    fn test_product_id_serializes_as_number() {
        let json = serde_json::to_string(&ProductId::new(7)).unwrap();
        assert_eq!(json, "7");
        assert_eq!(ProductId::new(7).to_string(), "7");
    }

    #[test]
    fn test_product_json_shape() {
        let json = serde_json::to_value(backpack()).unwrap();
        assert_eq!(json["price"], 10995);
        assert_eq!(json["rating"]["count"], 120);

        let mut unrated = backpack();
        unrated.rating = None;
        let json = serde_json::to_value(unrated).unwrap();
        assert!(json.get("rating").is_none());
    }

    #[test]
    fn test_is_all_categories() {
        assert!(is_all_categories("All"));
        assert!(is_all_categories("all"));
        assert!(!is_all_categories("electronics"));
        assert!(!is_all_categories(""));
    }
}
