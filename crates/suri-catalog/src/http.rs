//! # HTTP Catalog
//!
//! Client for the public catalog API.
//!
//! ## Endpoints
//! ```text
//! GET {base}/products             → [ProductRecord, ...]
//! GET {base}/products/{id}        → ProductRecord | empty body | 404
//! GET {base}/products/categories  → ["electronics", ...]
//! ```
//!
//! One attempt per call. Failures are logged here and returned to the
//! caller; there is no retry or response caching.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use suri_core::{Product, ProductId};
use tracing::{debug, instrument, warn};

use crate::error::{CatalogError, CatalogResult};
use crate::record::ProductRecord;
use crate::source::CatalogSource;

/// Default public catalog.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Connection settings for [`HttpCatalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Base URL without trailing slash.
    pub base_url: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl CatalogConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url: String = base_url.into();
        CatalogConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig::new(DEFAULT_BASE_URL, Duration::from_secs(15))
    }
}

/// `CatalogSource` backed by the catalog's REST API.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    config: CatalogConfig,
    client: reqwest::Client,
}

impl HttpCatalog {
    /// Creates a client. Fails if the base URL does not parse.
    pub fn new(config: CatalogConfig) -> CatalogResult<Self> {
        reqwest::Url::parse(&config.base_url)
            .map_err(|e| CatalogError::Config(format!("invalid base url {}: {e}", config.base_url)))?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::Config(e.to_string()))?;

        Ok(HttpCatalog { config, client })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path)
    }

    /// Fetches a body. `Ok(None)` on 404.
    #[instrument(name = "catalog_http_get", skip(self))]
    async fn get_body(&self, path: &str) -> CatalogResult<Option<Vec<u8>>> {
        let url = self.url(path);
        let resp = self.client.get(&url).send().await.map_err(|source| {
            warn!(url = %url, error = %source, "Catalog request failed");
            CatalogError::Http {
                url: url.clone(),
                source,
            }
        })?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            debug!(url = %url, "Catalog returned 404");
            return Ok(None);
        }
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Catalog returned error status");
            return Err(CatalogError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|source| CatalogError::Http {
                url: url.clone(),
                source,
            })?;
        Ok(Some(bytes.to_vec()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> CatalogResult<Option<T>> {
        let Some(body) = self.get_body(path).await? else {
            return Ok(None);
        };
        decode_body(&self.url(path), &body)
    }
}

/// Decodes a JSON body. An empty body or `null` decodes to `None`; the
/// catalog answers unknown product ids that way instead of with a 404.
fn decode_body<T: DeserializeOwned>(url: &str, body: &[u8]) -> CatalogResult<Option<T>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<Option<T>>(body).map_err(|source| CatalogError::Decode {
        url: url.to_string(),
        source,
    })
}

/// Converts a listing, dropping records that are not valid products.
///
/// One bad price must not hide the rest of the catalog.
fn valid_products(records: Vec<ProductRecord>) -> Vec<Product> {
    records
        .into_iter()
        .filter_map(|record| {
            let id = record.id;
            match record.into_product() {
                Ok(product) => Some(product),
                Err(e) => {
                    warn!(product_id = id, error = %e, "Skipping invalid catalog product");
                    None
                }
            }
        })
        .collect()
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    fn source_tag(&self) -> &'static str {
        "http"
    }

    async fn list_products(&self) -> CatalogResult<Vec<Product>> {
        let records: Vec<ProductRecord> = self.get_json("products").await?.unwrap_or_default();
        debug!(count = records.len(), "Fetched catalog products");
        Ok(valid_products(records))
    }

    async fn get_product(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        let record: Option<ProductRecord> = self.get_json(&format!("products/{id}")).await?;
        record.map(ProductRecord::into_product).transpose()
    }

    async fn list_categories(&self) -> CatalogResult<Vec<String>> {
        Ok(self
            .get_json("products/categories")
            .await?
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_trims_trailing_slash() {
        let config = CatalogConfig::new("https://fakestoreapi.com/", Duration::from_secs(5));
        assert_eq!(config.base_url, "https://fakestoreapi.com");

        let catalog = HttpCatalog::new(config).unwrap();
        assert_eq!(
            catalog.url("products/3"),
            "https://fakestoreapi.com/products/3"
        );
    }

    #[test]
    fn test_rejects_unparsable_base_url() {
        let config = CatalogConfig::new("not a url", Duration::from_secs(5));
        assert!(matches!(
            HttpCatalog::new(config),
            Err(CatalogError::Config(_))
        ));
    }

    #[test]
    fn test_empty_body_decodes_to_none() {
        let none: Option<ProductRecord> = decode_body("u", b"").unwrap();
        assert!(none.is_none());
        let none: Option<ProductRecord> = decode_body("u", b"  \n").unwrap();
        assert!(none.is_none());
        let none: Option<ProductRecord> = decode_body("u", b"null").unwrap();
        assert!(none.is_none());
    }

    #[test]
    fn test_listing_skips_invalid_records() {
        let body = br#"[
            {"id": 1, "title": "Backpack", "price": 109.95},
            {"id": 2, "title": "Odd Price", "price": 3.999},
            {"id": 3, "title": "Cotton Jacket", "price": 55.99}
        ]"#;
        let records: Vec<ProductRecord> = decode_body("u", body).unwrap().unwrap();

        let products = valid_products(records);
        let ids: Vec<u32> = products.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_body_decodes_record() {
        let body = br#"{"id": 3, "title": "Cotton Jacket", "price": 55.99}"#;
        let record: Option<ProductRecord> = decode_body("u", body).unwrap();
        assert_eq!(record.unwrap().into_product().unwrap().price.cents(), 5599);

        let err = decode_body::<ProductRecord>("u", b"<html>").unwrap_err();
        assert!(matches!(err, CatalogError::Decode { .. }));
    }
}
