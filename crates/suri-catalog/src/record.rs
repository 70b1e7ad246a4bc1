//! # Catalog Wire Format
//!
//! The catalog API returns products with the price as a JSON number:
//!
//! ```json
//! {
//!   "id": 1,
//!   "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
//!   "price": 109.95,
//!   "description": "Your perfect pack for everyday use...",
//!   "category": "men's clothing",
//!   "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
//!   "rating": { "rate": 3.9, "count": 120 }
//! }
//! ```
//!
//! `ProductRecord` mirrors that shape; converting it into a
//! [`suri_core::Product`] turns the price into exact cents.

use serde::Deserialize;
use suri_core::{Money, Product, ProductId, Rating};

use crate::error::{CatalogError, CatalogResult};

/// A product exactly as the catalog API sends it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductRecord {
    pub id: u32,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: Option<Rating>,
}

impl ProductRecord {
    /// Converts the wire record into a domain product.
    pub fn into_product(self) -> CatalogResult<Product> {
        let id = ProductId::new(self.id);
        let price = Money::try_from_f64(self.price)
            .map_err(|source| CatalogError::Product { id, source })?;

        Ok(Product {
            id,
            title: self.title,
            price,
            description: self.description,
            category: self.category,
            image: self.image,
            rating: self.rating,
        })
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = CatalogError;

    fn try_from(record: ProductRecord) -> CatalogResult<Self> {
        record.into_product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_JSON: &str = r#"[
        {
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
            "price": 109.95,
            "description": "Your perfect pack for everyday use and walks in the forest.",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": {"rate": 3.9, "count": 120}
        },
        {
            "id": 2,
            "title": "Mens Casual Premium Slim Fit T-Shirts",
            "price": 22.3,
            "description": "Slim-fitting style.",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg"
        }
    ]"#;

    #[test]
    fn test_decode_catalog_records() {
        let records: Vec<ProductRecord> = serde_json::from_str(CATALOG_JSON).unwrap();
        let products: Vec<Product> = records
            .into_iter()
            .map(ProductRecord::into_product)
            .collect::<CatalogResult<_>>()
            .unwrap();

        assert_eq!(products[0].price.cents(), 10995);
        assert_eq!(products[0].rating.map(|r| r.count), Some(120));
        assert_eq!(products[1].price.cents(), 2230);
        assert!(products[1].rating.is_none());
    }

    #[test]
    fn test_invalid_price_names_product() {
        let record = ProductRecord {
            id: 9,
            title: "Broken".to_string(),
            price: 3.999,
            description: String::new(),
            category: String::new(),
            image: String::new(),
            rating: None,
        };

        match record.into_product() {
            Err(CatalogError::Product { id, .. }) => assert_eq!(id, ProductId::new(9)),
            other => panic!("expected product error, got {other:?}"),
        }
    }
}
