//! # Catalog Source
//!
//! The seam between the storefront and wherever products come from.

use async_trait::async_trait;
use suri_core::{Product, ProductId};

use crate::error::CatalogResult;

/// Read-only access to the product catalog.
///
/// Implementations must be shareable across tasks; the storefront holds one
/// as `Arc<dyn CatalogSource>`.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Short tag used in logs, e.g. `"http"`.
    fn source_tag(&self) -> &'static str;

    /// All products, in catalog order.
    async fn list_products(&self) -> CatalogResult<Vec<Product>>;

    /// One product, or `None` when the catalog has no such id.
    async fn get_product(&self, id: ProductId) -> CatalogResult<Option<Product>>;

    /// Category names offered by the catalog.
    async fn list_categories(&self) -> CatalogResult<Vec<String>>;
}
