//! # In-Memory Catalog
//!
//! A fixed product list behind the `CatalogSource` trait. Used by tests and
//! by offline sessions seeded from a JSON file.

use async_trait::async_trait;
use suri_core::{Product, ProductId};

use crate::error::{CatalogError, CatalogResult};
use crate::record::ProductRecord;
use crate::source::CatalogSource;

/// Catalog backed by a `Vec<Product>`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        InMemoryCatalog { products }
    }

    /// Builds a catalog from a JSON array in the catalog API's wire format.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let records: Vec<ProductRecord> =
            serde_json::from_str(json).map_err(|source| CatalogError::Decode {
                url: "<inline json>".to_string(),
                source,
            })?;
        let products = records
            .into_iter()
            .map(ProductRecord::into_product)
            .collect::<CatalogResult<Vec<_>>>()?;
        Ok(InMemoryCatalog { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    fn source_tag(&self) -> &'static str {
        "memory"
    }

    async fn list_products(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.products.clone())
    }

    async fn get_product(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }

    /// Distinct categories in first-seen order.
    async fn list_categories(&self) -> CatalogResult<Vec<String>> {
        let mut categories: Vec<String> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"[
        {"id": 1, "title": "Backpack", "price": 109.95, "category": "men's clothing"},
        {"id": 5, "title": "Naga Bracelet", "price": 695, "category": "jewelery"},
        {"id": 2, "title": "Slim Fit T-Shirts", "price": 22.3, "category": "men's clothing"}
    ]"#;

    #[tokio::test]
    async fn test_lookup_by_id() {
        let catalog = InMemoryCatalog::from_json(JSON).unwrap();

        let product = catalog.get_product(ProductId::new(5)).await.unwrap().unwrap();
        assert_eq!(product.title, "Naga Bracelet");
        assert_eq!(product.price.cents(), 69500);

        assert!(catalog.get_product(ProductId::new(99)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_categories_first_seen_order() {
        let catalog = InMemoryCatalog::from_json(JSON).unwrap();
        assert_eq!(
            catalog.list_categories().await.unwrap(),
            vec!["men's clothing".to_string(), "jewelery".to_string()]
        );
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            InMemoryCatalog::from_json("{not json"),
            Err(CatalogError::Decode { .. })
        ));
    }
}
