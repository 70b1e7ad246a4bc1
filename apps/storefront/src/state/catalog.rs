//! # Catalog State
//!
//! Wraps the product catalog source for use by commands.

use std::sync::Arc;

use suri_catalog::CatalogSource;

/// Shared catalog handle.
#[derive(Clone)]
pub struct CatalogState {
    source: Arc<dyn CatalogSource>,
}

impl CatalogState {
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        CatalogState {
            source: Arc::new(source),
        }
    }

    pub fn source(&self) -> &dyn CatalogSource {
        self.source.as_ref()
    }
}

impl std::fmt::Debug for CatalogState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogState")
            .field("source", &self.source.source_tag())
            .finish()
    }
}
