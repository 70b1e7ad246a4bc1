//! # Cart Commands
//!
//! Commands that read or change the cart.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Order   │       │
//! │  │  Cart    │     │          │     │   Form   │     │  Placed  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart     submit_checkout                      │
//! │                   increase_quantity (checkout.rs)                      │
//! │                   decrease_quantity      │                              │
//! │                   remove_from_cart       │                              │
//! │                        │                 │                              │
//! │                        ▼                 ▼                              │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use suri_core::{CartAction, CartLineItem, CartState, CartTotals, ProductId};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartStore, CatalogState};

/// Cart response including items, totals and the active filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLineItem>,
    pub totals: CartTotals,
    pub search_term: String,
    pub selected_category: String,
}

impl From<CartState> for CartResponse {
    fn from(state: CartState) -> Self {
        let totals = state.totals();
        CartResponse {
            items: state.items,
            totals,
            search_term: state.search_term,
            selected_category: state.selected_category,
        }
    }
}

/// Gets the current cart contents.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart Page                                                              │
/// │                                                                         │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  CART                                              2 items     │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  Fjallraven Backpack      [-] 2 [+]   [x]       $219.90      │    │
/// │  │  Mens Casual T-Shirt      [-] 1 [+]   [x]        $22.30      │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  Shipping                                        Free        │    │
/// │  │  TOTAL                                         $242.20       │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// │                                                                         │
/// │  {"cmd":"get_cart"} → { items: [...], totals: {...}, ... }             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(cart: &CartStore) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(cart.snapshot())
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases by one
/// - If product not in cart: added with quantity 1
/// - Title, price and image are frozen at the time of adding
///
/// ## Flow
/// ```text
/// {"cmd":"add_to_cart","productId":1}
///        │
///        ▼
/// 1. Fetch product from the catalog (await, no lock held)
/// 2. Unknown id ──► NOT_FOUND
/// 3. dispatch(AddToCart(product)) ──► updated cart
/// ```
pub async fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartStore,
    product_id: ProductId,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = catalog
        .source()
        .get_product(product_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product", &product_id.to_string()))?;

    let state = cart.dispatch(CartAction::AddToCart(product.to_cart_product()));
    Ok(CartResponse::from(state))
}

/// Removes a line regardless of its quantity. Unknown ids are ignored.
pub fn remove_from_cart(cart: &CartStore, product_id: ProductId) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");
    CartResponse::from(cart.dispatch(CartAction::RemoveFromCart(product_id)))
}

/// Adds one to a line's quantity.
pub fn increase_quantity(cart: &CartStore, product_id: ProductId) -> CartResponse {
    debug!(product_id = %product_id, "increase_quantity command");
    CartResponse::from(cart.dispatch(CartAction::IncreaseQuantity(product_id)))
}

/// Takes one from a line's quantity.
///
/// A line at quantity 1 is removed.
pub fn decrease_quantity(cart: &CartStore, product_id: ProductId) -> CartResponse {
    debug!(product_id = %product_id, "decrease_quantity command");
    CartResponse::from(cart.dispatch(CartAction::DecreaseQuantity(product_id)))
}

/// Clears all items from the cart.
///
/// ## When Used
/// - User empties the cart
/// - After an order is placed
///
/// The search term and selected category survive.
pub fn clear_cart(cart: &CartStore) -> CartResponse {
    debug!("clear_cart command");
    CartResponse::from(cart.dispatch(CartAction::ClearCart))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_catalog;
    use crate::error::ErrorCode;

    #[tokio::test]
    async fn test_add_to_cart_fetches_product() {
        let catalog = test_catalog();
        let cart = CartStore::new();

        let response = add_to_cart(&catalog, &cart, ProductId::new(1)).await.unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].title, "Fjallraven Backpack");
        assert_eq!(response.items[0].price.cents(), 10995);
        assert_eq!(response.items[0].quantity, 1);

        let response = add_to_cart(&catalog, &cart, ProductId::new(1)).await.unwrap();
        assert_eq!(response.items[0].quantity, 2);
        assert_eq!(response.totals.subtotal.cents(), 21990);
    }

    #[tokio::test]
    async fn test_add_unknown_product_is_not_found() {
        let catalog = test_catalog();
        let cart = CartStore::new();

        let err = add_to_cart(&catalog, &cart, ProductId::new(999))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(cart.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_quantity_commands() {
        let catalog = test_catalog();
        let cart = CartStore::new();
        add_to_cart(&catalog, &cart, ProductId::new(1)).await.unwrap();
        add_to_cart(&catalog, &cart, ProductId::new(2)).await.unwrap();

        let response = increase_quantity(&cart, ProductId::new(2));
        assert_eq!(response.items[1].quantity, 2);

        let response = decrease_quantity(&cart, ProductId::new(1));
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].id, ProductId::new(2));

        let response = remove_from_cart(&cart, ProductId::new(2));
        assert!(response.items.is_empty());
        assert_eq!(response.totals.total_quantity, 0);
    }

    #[tokio::test]
    async fn test_clear_cart_keeps_filters() {
        let catalog = test_catalog();
        let cart = CartStore::new();
        add_to_cart(&catalog, &cart, ProductId::new(1)).await.unwrap();
        cart.dispatch(CartAction::SetSearchTerm("bag".to_string()));

        let response = clear_cart(&cart);
        assert!(response.items.is_empty());
        assert_eq!(response.search_term, "bag");
        assert_eq!(response.selected_category, "All");
    }

    #[test]
    fn test_cart_response_shape() {
        let json = serde_json::to_value(get_cart(&CartStore::new())).unwrap();
        assert_eq!(json["items"], serde_json::json!([]));
        assert_eq!(json["totals"]["itemCount"], 0);
        assert_eq!(json["searchTerm"], "");
        assert_eq!(json["selectedCategory"], "All");
    }
}
