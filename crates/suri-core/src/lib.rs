//! # suri-core: Pure Business Logic for the Suri Storefront
//!
//! This crate is the **heart** of the storefront. It contains the cart store,
//! catalog filtering and checkout rules as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Suri Storefront Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (TypeScript)                        │   │
//! │  │   Product List ──► Product Detail ──► Cart ──► Checkout        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON commands                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Storefront Commands                          │   │
//! │  │    list_products, add_to_cart, submit_checkout, etc.           │   │
//! │  └──────────────┬──────────────────────────────┬───────────────────┘   │
//! │                 │                              │                        │
//! │  ┌──────────────▼──────────────────┐  ┌────────▼────────────────────┐  │
//! │  │   ★ suri-core (THIS CRATE) ★    │  │   suri-catalog              │  │
//! │  │                                 │  │   fakestoreapi.com client   │  │
//! │  │  money • types • cart           │  └─────────────────────────────┘  │
//! │  │  filter • checkout • error      │                                   │
//! │  │                                 │                                   │
//! │  │  NO I/O • NO NETWORK            │                                   │
//! │  └─────────────────────────────────┘                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductId, CartProduct)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart store: state, actions and reducers
//! - [`filter`] - Search term / category filtering over the catalog
//! - [`checkout`] - Checkout form model, validation and simulated orders
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use suri_core::cart::{CartAction, CartState};
//! use suri_core::{CartProduct, Money, ProductId};
//!
//! let shirt = CartProduct {
//!     id: ProductId::new(2),
//!     title: "Slim Fit T-Shirt".to_string(),
//!     price: Money::from_cents(2230),
//!     image: "https://fakestoreapi.com/img/shirt.jpg".to_string(),
//! };
//!
//! let state = CartState::default()
//!     .reduce(&CartAction::AddToCart(shirt.clone()))
//!     .reduce(&CartAction::AddToCart(shirt));
//!
//! assert_eq!(state.items.len(), 1);
//! assert_eq!(state.total_quantity(), 2);
//! assert_eq!(state.subtotal().cents(), 4460);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod filter;
pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartAction, CartLineItem, CartState, CartTotals};
pub use error::{CheckoutErrors, CoreError, ValidationError};
pub use filter::ProductFilter;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Category sentinel meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// Categories offered by the public catalog.
///
/// Used as a fallback when the catalog's category endpoint cannot be reached.
pub const KNOWN_CATEGORIES: [&str; 4] = [
    "electronics",
    "jewelery",
    "men's clothing",
    "women's clothing",
];

/// Maximum number of card installments offered at checkout.
pub const MAX_INSTALLMENTS: u8 = 3;
