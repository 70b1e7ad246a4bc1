//! # Cart State
//!
//! The session's single cart store handle.
//!
//! ## Ownership
//! The store is built once at startup and cloned into whatever needs it.
//! Every clone points at the same `CartState`:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Access                                    │
//! │                                                                         │
//! │  Command                  CartStore                 CartState           │
//! │  ───────                  ─────────                 ─────────           │
//! │                                                                         │
//! │  add_to_cart ───────────► dispatch(AddToCart) ────► apply, snapshot    │
//! │                                                                         │
//! │  decrease_quantity ─────► dispatch(Decrease..) ───► apply, snapshot    │
//! │                                                                         │
//! │  submit_checkout ───────► place_order(form) ──────► order + clear      │
//! │                                                                         │
//! │  get_cart ──────────────► snapshot() ─────────────► clone (read only)  │
//! │                                                                         │
//! │  list_products ─────────► with_state(filter) ─────► borrow (read only) │
//! │                                                                         │
//! │  NOTE: dispatch() and place_order() are the only ways to change it.    │
//! │        Readers get clones or shared borrows, never `&mut`.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use suri_core::checkout::{self, CheckoutForm, OrderConfirmation};
use suri_core::error::CoreResult;
use suri_core::{CartAction, CartState};
use tracing::debug;

/// Shared handle to the session cart.
///
/// ## Why Mutex?
/// Transitions are tiny and synchronous, so a plain `std::sync::Mutex` is
/// held only for the duration of one reducer call and never across an
/// `.await`.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    state: Arc<Mutex<CartState>>,
}

impl CartStore {
    /// Creates a store holding the initial (empty) state.
    pub fn new() -> Self {
        Self::from_state(CartState::new())
    }

    /// Creates a store seeded with an existing state.
    pub fn from_state(state: CartState) -> Self {
        CartStore {
            state: Arc::new(Mutex::new(state)),
        }
    }

    // A reducer never leaves the state half-updated, so a poisoned lock
    // still guards a consistent value.
    fn lock(&self) -> MutexGuard<'_, CartState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies one transition and returns the resulting snapshot.
    pub fn dispatch(&self, action: CartAction) -> CartState {
        let mut state = self.lock();
        state.apply(&action);
        debug!(
            action = action.name(),
            items = state.item_count(),
            quantity = state.total_quantity(),
            "cart action applied"
        );
        state.clone()
    }

    /// Places an order for the current cart and empties it, under one lock.
    ///
    /// The cart is cleared only when the order succeeds, and the cleared
    /// lines are exactly the ordered ones.
    pub fn place_order(&self, form: &CheckoutForm) -> CoreResult<OrderConfirmation> {
        let mut state = self.lock();
        let order = checkout::place_order(form, &state)?;
        state.apply(&CartAction::ClearCart);
        debug!(
            order_number = %order.order_number,
            items = order.items.len(),
            "cart checked out"
        );
        Ok(order)
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> CartState {
        self.lock().clone()
    }

    /// Runs `f` with read access to the current state.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_store.with_state(|state| state.totals());
    /// ```
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartState) -> R,
    {
        let state = self.lock();
        f(&state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suri_core::checkout::{BillingInfo, DeliveryInfo, PaymentMode};
    use suri_core::{CartProduct, CoreError, Money, ProductId};

    fn backpack() -> CartProduct {
        CartProduct {
            id: ProductId::new(1),
            title: "Backpack".to_string(),
            price: Money::from_cents(10995),
            image: String::new(),
        }
    }

    #[test]
    fn test_clones_share_one_cart() {
        let store = CartStore::new();
        let header_badge = store.clone();

        store.dispatch(CartAction::AddToCart(backpack()));
        store.dispatch(CartAction::AddToCart(backpack()));

        assert_eq!(header_badge.with_state(|s| s.total_quantity()), 2);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = CartStore::new();
        let before = store.snapshot();

        store.dispatch(CartAction::AddToCart(backpack()));

        assert!(before.is_empty());
        assert_eq!(store.snapshot().item_count(), 1);
    }

    #[test]
    fn test_dispatch_returns_new_state() {
        let store = CartStore::new();
        store.dispatch(CartAction::AddToCart(backpack()));

        let after = store.dispatch(CartAction::DecreaseQuantity(ProductId::new(1)));
        assert!(after.is_empty());
        assert_eq!(after, store.snapshot());
    }

    fn bank_slip_form() -> CheckoutForm {
        CheckoutForm {
            billing: BillingInfo {
                full_name: "Maria Silva".to_string(),
                email: "maria@example.com".to_string(),
                cpf: "123.456.789-09".to_string(),
            },
            delivery: DeliveryInfo {
                email: "maria@example.com".to_string(),
                confirm_email: "maria@example.com".to_string(),
            },
            payment: PaymentMode::BankSlip,
        }
    }

    #[test]
    fn test_place_order_clears_ordered_lines() {
        let store = CartStore::new();
        store.dispatch(CartAction::AddToCart(backpack()));
        store.dispatch(CartAction::AddToCart(backpack()));
        let before = store.snapshot();

        let order = store.place_order(&bank_slip_form()).unwrap();
        assert_eq!(order.items, before.items);
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_failed_order_keeps_cart() {
        let store = CartStore::new();
        assert!(matches!(
            store.place_order(&bank_slip_form()),
            Err(CoreError::EmptyCart)
        ));

        store.dispatch(CartAction::AddToCart(backpack()));
        let mut form = bank_slip_form();
        form.billing.email = String::new();
        assert!(store.place_order(&form).is_err());
        assert_eq!(store.snapshot().total_quantity(), 1);
    }

    /// Every unit added while orders are being placed ends up either in an
    /// order or still in the cart.
    #[test]
    fn test_concurrent_checkout_loses_no_lines() {
        let store = CartStore::new();
        let adders: Vec<_> = (0..4)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for _ in 0..250 {
                        store.dispatch(CartAction::AddToCart(backpack()));
                    }
                })
            })
            .collect();

        let checkout = {
            let store = store.clone();
            std::thread::spawn(move || {
                let form = bank_slip_form();
                let mut ordered: u64 = 0;
                for _ in 0..200 {
                    if let Ok(order) = store.place_order(&form) {
                        ordered += order.totals.total_quantity;
                    }
                }
                ordered
            })
        };

        for handle in adders {
            handle.join().unwrap();
        }
        let ordered = checkout.join().unwrap();

        assert_eq!(ordered + store.snapshot().total_quantity(), 1000);
    }

    #[test]
    fn test_concurrent_dispatch_keeps_invariants() {
        let store = CartStore::new();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for _ in 0..250 {
                        store.dispatch(CartAction::AddToCart(backpack()));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let state = store.snapshot();
        assert_eq!(state.item_count(), 1);
        assert_eq!(state.total_quantity(), 1000);
    }
}
