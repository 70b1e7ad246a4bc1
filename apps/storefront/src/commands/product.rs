//! # Product Commands
//!
//! Catalog browsing and the two catalog filters.
//!
//! ## Listing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Listing Flow                                 │
//! │                                                                         │
//! │  User types "shirt" in the header search box                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  {"cmd":"set_search_term","term":"shirt"}                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  dispatch(SetSearchTerm("shirt"))  (stored verbatim)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  {"cmd":"list_products"}                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  1. Fetch the full catalog (async)        │                         │
//! │  │  2. Build ProductFilter from the store    │                         │
//! │  │  3. Keep matches in catalog order         │                         │
//! │  └───────────────────────────────────────────┘                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Return Vec<Product> to the UI                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Instant;

use suri_core::{CartAction, Product, ProductFilter, ProductId, KNOWN_CATEGORIES};
use tracing::{debug, info, warn};

use crate::commands::cart::CartResponse;
use crate::error::ApiError;
use crate::state::{CartStore, CatalogState};

/// Lists catalog products that pass the store's current filters.
pub async fn list_products(
    catalog: &CatalogState,
    cart: &CartStore,
) -> Result<Vec<Product>, ApiError> {
    debug!("list_products command");
    let start = Instant::now();

    let products = catalog.source().list_products().await?;

    // The filter is read after the fetch so a search typed meanwhile applies.
    let filter = cart.with_state(|state| ProductFilter::from(state));
    let total = products.len();
    let matches: Vec<Product> = if filter.is_unfiltered() {
        products
    } else {
        filter.apply(&products).into_iter().cloned().collect()
    };

    info!(
        total,
        matches = matches.len(),
        elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        "Products listed"
    );
    Ok(matches)
}

/// Gets a single product by catalog id.
///
/// ## Errors
/// - `NOT_FOUND` when the catalog has no such product
pub async fn get_product(catalog: &CatalogState, id: ProductId) -> Result<Product, ApiError> {
    debug!(product_id = %id, "get_product command");

    catalog
        .source()
        .get_product(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product", &id.to_string()))
}

/// Lists the catalog categories.
///
/// Falls back to the built-in category list when the catalog cannot be
/// reached, so the category menu still renders.
pub async fn list_categories(catalog: &CatalogState) -> Vec<String> {
    debug!("list_categories command");

    match catalog.source().list_categories().await {
        Ok(categories) => categories,
        Err(e) => {
            warn!(error = %e, "Category list unavailable, using built-in categories");
            KNOWN_CATEGORIES.iter().map(|c| c.to_string()).collect()
        }
    }
}

/// Replaces the search term. An empty term clears the search.
pub fn set_search_term(cart: &CartStore, term: String) -> CartResponse {
    debug!(term = %term, "set_search_term command");
    CartResponse::from(cart.dispatch(CartAction::SetSearchTerm(term)))
}

/// Replaces the selected category. `"All"` clears the category filter.
pub fn set_selected_category(cart: &CartStore, category: String) -> CartResponse {
    debug!(category = %category, "set_selected_category command");
    CartResponse::from(cart.dispatch(CartAction::SetSelectedCategory(category)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_catalog;
    use crate::error::ErrorCode;
    use async_trait::async_trait;
    use suri_catalog::{CatalogError, CatalogResult, CatalogSource};

    /// A catalog that is always down.
    struct OfflineCatalog;

    #[async_trait]
    impl CatalogSource for OfflineCatalog {
        fn source_tag(&self) -> &'static str {
            "offline"
        }

        async fn list_products(&self) -> CatalogResult<Vec<Product>> {
            Err(CatalogError::Status {
                url: "http://offline/products".to_string(),
                status: 503,
            })
        }

        async fn get_product(&self, _id: ProductId) -> CatalogResult<Option<Product>> {
            Err(CatalogError::Status {
                url: "http://offline/products/1".to_string(),
                status: 503,
            })
        }

        async fn list_categories(&self) -> CatalogResult<Vec<String>> {
            Err(CatalogError::Status {
                url: "http://offline/products/categories".to_string(),
                status: 503,
            })
        }
    }

    fn titles(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_list_products_unfiltered() {
        let products = list_products(&test_catalog(), &CartStore::new()).await.unwrap();
        assert_eq!(products.len(), 4);
    }

    #[tokio::test]
    async fn test_list_products_applies_store_filters() {
        let catalog = test_catalog();
        let cart = CartStore::new();

        set_search_term(&cart, "SHIRT".to_string());
        let products = list_products(&catalog, &cart).await.unwrap();
        assert_eq!(
            titles(&products),
            vec!["Mens Casual Premium Slim Fit T-Shirts", "Womens Short Sleeve T-Shirt"]
        );

        set_selected_category(&cart, "Women's Clothing".to_string());
        let products = list_products(&catalog, &cart).await.unwrap();
        assert_eq!(titles(&products), vec!["Womens Short Sleeve T-Shirt"]);

        set_search_term(&cart, String::new());
        set_selected_category(&cart, "All".to_string());
        let products = list_products(&catalog, &cart).await.unwrap();
        assert_eq!(products.len(), 4);
    }

    #[tokio::test]
    async fn test_get_product() {
        let catalog = test_catalog();

        let product = get_product(&catalog, ProductId::new(2)).await.unwrap();
        assert_eq!(product.price.cents(), 2230);

        let err = get_product(&catalog, ProductId::new(42)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 42");
    }

    #[tokio::test]
    async fn test_catalog_failure_is_catalog_error() {
        let catalog = CatalogState::new(OfflineCatalog);
        let err = list_products(&catalog, &CartStore::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogError);
    }

    #[tokio::test]
    async fn test_categories_fall_back_when_offline() {
        let categories = list_categories(&CatalogState::new(OfflineCatalog)).await;
        assert_eq!(categories, KNOWN_CATEGORIES.to_vec());

        let categories = list_categories(&test_catalog()).await;
        assert_eq!(categories, vec!["men's clothing", "jewelery", "women's clothing"]);
    }

    #[test]
    fn test_filter_setters_return_cart() {
        let cart = CartStore::new();
        let response = set_selected_category(&cart, "electronics".to_string());
        assert_eq!(response.selected_category, "electronics");
        assert_eq!(cart.snapshot().selected_category, "electronics");
    }
}
