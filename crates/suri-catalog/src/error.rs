//! # Catalog Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  reqwest::Error / HTTP status / serde_json::Error / CoreError          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module) ← Adds URL and product context             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in storefront app) ← Serialized for frontend                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use suri_core::{CoreError, ProductId};
use thiserror::Error;

/// Catalog access errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request could not be sent or the body could not be read.
    ///
    /// ## When This Occurs
    /// - DNS failure, refused connection, TLS error
    /// - Request timed out
    #[error("Catalog request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The catalog answered with a non-success status.
    #[error("Catalog request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// The response body was not the expected JSON.
    #[error("Catalog response from {url} could not be decoded: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A product record was well-formed JSON but not a valid product.
    #[error("Catalog product {id} is invalid: {source}")]
    Product {
        id: ProductId,
        #[source]
        source: CoreError,
    },

    /// The client could not be configured (bad base URL, TLS backend).
    #[error("Catalog client configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for catalog results.
pub type CatalogResult<T> = Result<T, CatalogError>;
