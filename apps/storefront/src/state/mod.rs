//! # State Module
//!
//! Manages application state for the storefront.
//!
//! ## Why Multiple State Types?
//! Instead of a single ambient `AppState`, each concern gets its own handle.
//! Handles are created once at startup and passed into command handlers:
//!
//! 1. **No Global Singletons**: The cart is owned by whoever built it
//! 2. **Easier Testing**: Tests inject an in-memory catalog and a fresh cart
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┬──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ CatalogState │  │  CartStore   │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<dyn     │  │  Arc<Mutex<  │  │  store_name      │              │
//! │  │  Catalog     │  │    CartState │  │  catalog url     │              │
//! │  │  Source>     │  │  >>          │  │  currency        │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState: sources are Send + Sync                               │
//! │  • CartStore: one writer at a time, dispatch()/place_order() only     │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;

pub use cart::CartStore;
pub use catalog::CatalogState;
pub use config::{ConfigError, ConfigState};
