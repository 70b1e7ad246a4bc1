//! # Cart Store
//!
//! The shopping cart state and the fixed set of transitions that change it.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  UI Action                 CartAction              State Change         │
//! │  ─────────                 ──────────              ────────────         │
//! │                                                                         │
//! │  "Add to cart" ──────────► AddToCart ────────────► push or qty + 1     │
//! │                                                                         │
//! │  "+" button ─────────────► IncreaseQuantity ─────► qty + 1             │
//! │                                                                         │
//! │  "-" button ─────────────► DecreaseQuantity ─────► qty - 1, or remove  │
//! │                                                    when qty was 1       │
//! │                                                                         │
//! │  Trash icon ─────────────► RemoveFromCart ───────► items.retain(..)    │
//! │                                                                         │
//! │  Order placed ───────────► ClearCart ────────────► items.clear()       │
//! │                                                                         │
//! │  Search box ─────────────► SetSearchTerm ────────► search_term = ..    │
//! │                                                                         │
//! │  Category button ────────► SetSelectedCategory ──► selected_category   │
//! │                                                                         │
//! │  NOTE: Every transition is total. Unknown ids are silent no-ops.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by `id` (adding the same product increases quantity)
//! - Every item has `quantity >= 1` (a decrement from 1 removes the item)
//!
//! Both hold for every reachable state because the fields are only changed
//! by the methods in this module.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{CartProduct, ProductId};
use crate::ALL_CATEGORIES;

// =============================================================================
// Cart Line Item
// =============================================================================

/// One product in the cart with its aggregated quantity.
///
/// `title`, `price` and `image` are the values captured when the product was
/// first added; repeated adds never refresh them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLineItem {
    pub id: ProductId,
    pub title: String,
    /// Unit price at add-time.
    pub price: Money,
    pub image: String,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartLineItem {
    fn from_product(product: &CartProduct) -> Self {
        CartLineItem {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart Action
// =============================================================================

/// A state transition request.
///
/// Serialized with an adjacent `type`/`payload` tag so the frontend can
/// dispatch the same shapes it already uses:
/// `{"type": "removeFromCart", "payload": 3}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
#[ts(export)]
pub enum CartAction {
    AddToCart(CartProduct),
    RemoveFromCart(ProductId),
    IncreaseQuantity(ProductId),
    DecreaseQuantity(ProductId),
    ClearCart,
    SetSearchTerm(String),
    SetSelectedCategory(String),
}

impl CartAction {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            CartAction::AddToCart(_) => "add_to_cart",
            CartAction::RemoveFromCart(_) => "remove_from_cart",
            CartAction::IncreaseQuantity(_) => "increase_quantity",
            CartAction::DecreaseQuantity(_) => "decrease_quantity",
            CartAction::ClearCart => "clear_cart",
            CartAction::SetSearchTerm(_) => "set_search_term",
            CartAction::SetSelectedCategory(_) => "set_selected_category",
        }
    }
}

// =============================================================================
// Cart State
// =============================================================================

/// The whole cart store state: line items plus the two catalog filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartState {
    /// Line items in insertion order, unique by id.
    pub items: Vec<CartLineItem>,

    /// Free-text product title filter. Stored verbatim.
    pub search_term: String,

    /// Active category filter, [`ALL_CATEGORIES`] for none. Stored verbatim.
    pub selected_category: String,
}

impl Default for CartState {
    fn default() -> Self {
        CartState {
            items: Vec::new(),
            search_term: String::new(),
            selected_category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl CartState {
    /// Creates the initial session state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure transition: consumes the current state and returns the next one.
    pub fn reduce(mut self, action: &CartAction) -> Self {
        self.apply(action);
        self
    }

    /// Applies a transition in place.
    pub fn apply(&mut self, action: &CartAction) {
        match action {
            CartAction::AddToCart(product) => self.add_to_cart(product),
            CartAction::RemoveFromCart(id) => self.remove_from_cart(*id),
            CartAction::IncreaseQuantity(id) => self.increase_quantity(*id),
            CartAction::DecreaseQuantity(id) => self.decrease_quantity(*id),
            CartAction::ClearCart => self.clear_cart(),
            CartAction::SetSearchTerm(term) => self.set_search_term(term.clone()),
            CartAction::SetSelectedCategory(category) => {
                self.set_selected_category(category.clone())
            }
        }
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity + 1, other fields untouched
    /// - Product not in cart: appended with quantity 1
    ///
    /// The input is not validated; that is the caller's job.
    pub fn add_to_cart(&mut self, product: &CartProduct) {
        if let Some(item) = self.find_mut(product.id) {
            item.quantity = item.quantity.saturating_add(1);
            return;
        }
        self.items.push(CartLineItem::from_product(product));
    }

    /// Removes the item with `id`. No-op if absent.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.items.retain(|item| item.id != id);
    }

    /// Adds one to the quantity of `id`. No-op if absent.
    pub fn increase_quantity(&mut self, id: ProductId) {
        if let Some(item) = self.find_mut(id) {
            item.quantity = item.quantity.saturating_add(1);
        }
    }

    /// Subtracts one from the quantity of `id`.
    ///
    /// An item at quantity 1 is removed instead of being left at zero.
    /// No-op if absent.
    pub fn decrease_quantity(&mut self, id: ProductId) {
        let Some(item) = self.find_mut(id) else {
            return;
        };
        if item.quantity > 1 {
            item.quantity -= 1;
            return;
        }
        self.remove_from_cart(id);
    }

    /// Empties the cart. Filters are kept.
    pub fn clear_cart(&mut self) {
        self.items.clear();
    }

    pub fn set_search_term(&mut self, term: String) {
        self.search_term = term;
    }

    pub fn set_selected_category(&mut self, category: String) {
        self.selected_category = category;
    }

    // -------------------------------------------------------------------------
    // Read-only views
    // -------------------------------------------------------------------------

    /// Looks up a line item by product id.
    pub fn item(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn find_mut(&mut self, id: ProductId) -> Option<&mut CartLineItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Number of distinct products.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities (the header badge count).
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of `price × quantity` over all items.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self)
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: u64,
    pub subtotal: Money,
}

impl From<&CartState> for CartTotals {
    fn from(state: &CartState) -> Self {
        CartTotals {
            item_count: state.item_count(),
            total_quantity: state.total_quantity(),
            subtotal: state.subtotal(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
