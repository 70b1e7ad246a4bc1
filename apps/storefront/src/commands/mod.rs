//! # Storefront Commands Module
//!
//! All commands exposed to the UI.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (Command enum + dispatch)
//! ├── product.rs   ◄─── Catalog browsing, search term, category
//! ├── cart.rs      ◄─── Cart manipulation
//! ├── checkout.rs  ◄─── Installment options, order placement
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  UI                                                                     │
//! │  ──                                                                     │
//! │  {"cmd":"add_to_cart","productId":1}                                    │
//! │         │                                                               │
//! │         │ (one JSON object per line)                                    │
//! │         ▼                                                               │
//! │  Rust Shell                                                             │
//! │  ──────────                                                             │
//! │  Command::AddToCart { product_id }      ◄── serde, tag = "cmd"         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  dispatch(&Storefront, command)                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  cart::add_to_cart(&catalog, &cart, id) ◄── only the state it needs    │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  UI receives: {"ok": CartResponse}                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each handler declares only the state it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartStore)
//!
//! // Needs catalog and cart
//! async fn add_to_cart(catalog: &CatalogState, cart: &CartStore, ...)
//!
//! // Only needs config
//! fn get_config(config: &ConfigState)
//! ```

pub mod cart;
pub mod checkout;
pub mod config;
pub mod product;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use suri_core::checkout::CheckoutForm;
use suri_core::ProductId;

use crate::error::ApiError;
use crate::Storefront;

/// A request read from the command channel.
///
/// ## Wire Format
/// ```json
/// {"cmd": "get_product", "id": 3}
/// {"cmd": "increase_quantity", "productId": 3}
/// {"cmd": "set_search_term", "term": "shirt"}
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Command {
    // Product commands
    ListProducts,
    GetProduct { id: ProductId },
    ListCategories,
    SetSearchTerm { term: String },
    SetSelectedCategory { category: String },
    // Cart commands
    GetCart,
    AddToCart { product_id: ProductId },
    RemoveFromCart { product_id: ProductId },
    IncreaseQuantity { product_id: ProductId },
    DecreaseQuantity { product_id: ProductId },
    ClearCart,
    // Checkout commands
    InstallmentOptions,
    SubmitCheckout { form: CheckoutForm },
    // Config commands
    GetConfig,
}

impl Command {
    /// Wire name of the command, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::ListProducts => "list_products",
            Command::GetProduct { .. } => "get_product",
            Command::ListCategories => "list_categories",
            Command::SetSearchTerm { .. } => "set_search_term",
            Command::SetSelectedCategory { .. } => "set_selected_category",
            Command::GetCart => "get_cart",
            Command::AddToCart { .. } => "add_to_cart",
            Command::RemoveFromCart { .. } => "remove_from_cart",
            Command::IncreaseQuantity { .. } => "increase_quantity",
            Command::DecreaseQuantity { .. } => "decrease_quantity",
            Command::ClearCart => "clear_cart",
            Command::InstallmentOptions => "installment_options",
            Command::SubmitCheckout { .. } => "submit_checkout",
            Command::GetConfig => "get_config",
        }
    }
}

/// Routes a command to its handler and serializes the response.
pub async fn dispatch(app: &Storefront, command: Command) -> Result<Value, ApiError> {
    match command {
        Command::ListProducts => respond(product::list_products(&app.catalog, &app.cart).await?),
        Command::GetProduct { id } => respond(product::get_product(&app.catalog, id).await?),
        Command::ListCategories => respond(product::list_categories(&app.catalog).await),
        Command::SetSearchTerm { term } => respond(product::set_search_term(&app.cart, term)),
        Command::SetSelectedCategory { category } => {
            respond(product::set_selected_category(&app.cart, category))
        }
        Command::GetCart => respond(cart::get_cart(&app.cart)),
        Command::AddToCart { product_id } => {
            respond(cart::add_to_cart(&app.catalog, &app.cart, product_id).await?)
        }
        Command::RemoveFromCart { product_id } => {
            respond(cart::remove_from_cart(&app.cart, product_id))
        }
        Command::IncreaseQuantity { product_id } => {
            respond(cart::increase_quantity(&app.cart, product_id))
        }
        Command::DecreaseQuantity { product_id } => {
            respond(cart::decrease_quantity(&app.cart, product_id))
        }
        Command::ClearCart => respond(cart::clear_cart(&app.cart)),
        Command::InstallmentOptions => respond(checkout::installment_options(&app.cart)),
        Command::SubmitCheckout { form } => respond(checkout::submit_checkout(&app.cart, &form)?),
        Command::GetConfig => respond(config::get_config(&app.config)),
    }
}

fn respond<T: Serialize>(response: T) -> Result<Value, ApiError> {
    serde_json::to_value(response)
        .map_err(|e| ApiError::internal(format!("Response could not be serialized: {}", e)))
}

/// Small catalog in the public catalog's wire format, shared by command tests.
#[cfg(test)]
pub(crate) fn test_catalog() -> crate::state::CatalogState {
    const PRODUCTS: &str = r#"[
        {"id": 1, "title": "Fjallraven Backpack", "price": 109.95,
         "description": "Fits 15 inch laptops", "category": "men's clothing",
         "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
         "rating": {"rate": 3.9, "count": 120}},
        {"id": 2, "title": "Mens Casual Premium Slim Fit T-Shirts", "price": 22.3,
         "category": "men's clothing"},
        {"id": 5, "title": "Naga Gold & Silver Dragon Station Chain Bracelet", "price": 695,
         "category": "jewelery"},
        {"id": 20, "title": "Womens Short Sleeve T-Shirt", "price": 12.99,
         "category": "women's clothing"}
    ]"#;

    let catalog = suri_catalog::InMemoryCatalog::from_json(PRODUCTS).unwrap();
    crate::state::CatalogState::new(catalog)
}
