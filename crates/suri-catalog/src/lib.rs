//! # suri-catalog: Product Catalog for the Suri Storefront
//!
//! This crate provides read access to the product catalog. Products come
//! from the public catalog API (`https://fakestoreapi.com`) or, for tests and
//! offline sessions, from an in-memory list.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Commands                              │
//! │         list_products, get_product, add_to_cart, ...                   │
//! └───────────────────────────────┬─────────────────────────────────────────┘
//!                                 │ Arc<dyn CatalogSource>
//!                 ┌───────────────┴───────────────┐
//!                 ▼                               ▼
//!   ┌──────────────────────────┐    ┌──────────────────────────┐
//!   │  HttpCatalog             │    │  InMemoryCatalog         │
//!   │  GET /products           │    │  fixed Vec<Product>      │
//!   │  GET /products/{id}      │    │                          │
//!   │  GET /products/categories│    │                          │
//!   └──────────────────────────┘    └──────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`source`] - The `CatalogSource` trait
//! - [`http`] - HTTP client for the catalog API
//! - [`memory`] - In-memory catalog
//! - [`record`] - Wire format of catalog products
//! - [`error`] - Catalog error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use suri_catalog::{CatalogConfig, CatalogSource, HttpCatalog};
//!
//! let catalog = HttpCatalog::new(CatalogConfig::default())?;
//! let products = catalog.list_products().await?;
//! ```

pub mod error;
pub mod http;
pub mod memory;
pub mod record;
pub mod source;

pub use error::{CatalogError, CatalogResult};
pub use http::{CatalogConfig, HttpCatalog};
pub use memory::InMemoryCatalog;
pub use record::ProductRecord;
pub use source::CatalogSource;
