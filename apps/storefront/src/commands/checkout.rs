//! # Checkout Commands
//!
//! Turns the checkout form and the current cart into a placed order.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Flow                                        │
//! │                                                                         │
//! │  {"cmd":"submit_checkout","form":{...}}                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  CartStore::place_order (one lock)        │                         │
//! │  │  1. place_order(form, cart)               │                         │
//! │  │     • invalid fields ──► VALIDATION_ERROR │──► cart untouched       │
//! │  │     • empty cart ──────► CART_ERROR       │                         │
//! │  │  2. ClearCart                             │                         │
//! │  └───────────────────────────────────────────┘                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OrderConfirmation { orderNumber, items, totals, installments, ... }   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No payment is taken; the order exists only in the returned confirmation.

use suri_core::checkout::{CheckoutForm, InstallmentOption, OrderConfirmation};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::CartStore;

/// Validates the form, places the order and empties the cart.
pub fn submit_checkout(
    cart: &CartStore,
    form: &CheckoutForm,
) -> Result<OrderConfirmation, ApiError> {
    debug!(method = ?form.payment.method(), "submit_checkout command");

    let order = cart.place_order(form).map_err(|e| {
        warn!(error = %e, "Checkout rejected");
        ApiError::from(e)
    })?;

    info!(
        order_number = %order.order_number,
        items = order.totals.item_count,
        subtotal = %order.totals.subtotal,
        "Order placed"
    );
    Ok(order)
}

/// Installment choices (`1x` to `3x`) for the current cart subtotal.
///
/// Feeds the installments selector of the card payment form.
pub fn installment_options(cart: &CartStore) -> Vec<InstallmentOption> {
    debug!("installment_options command");
    let subtotal = cart.with_state(|state| state.subtotal());
    suri_core::checkout::installment_options(subtotal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_to_cart;
    use crate::commands::test_catalog;
    use crate::error::ErrorCode;
    use suri_core::checkout::{BillingInfo, CardDetails, DeliveryInfo, PaymentMethod, PaymentMode};
    use suri_core::ProductId;

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

    #[tokio::test]
    async fn test_successful_order_clears_cart() {
        let catalog = test_catalog();
        let cart = CartStore::new();
        add_to_cart(&catalog, &cart, ProductId::new(1)).await.unwrap();
        add_to_cart(&catalog, &cart, ProductId::new(2)).await.unwrap();

        let order = submit_checkout(&cart, &bank_slip_form()).unwrap();
        assert_eq!(order.payment_method, PaymentMethod::BankSlip);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.totals.subtotal.cents(), 10995 + 2230);
        assert!(order.installments.is_empty());
        assert!(cart.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_card_order_splits_installments() {
        let catalog = test_catalog();
        let cart = CartStore::new();
        add_to_cart(&catalog, &cart, ProductId::new(1)).await.unwrap();

        let mut form = bank_slip_form();
        form.payment = PaymentMode::CreditCard(CardDetails {
            owner: "Maria Silva".to_string(),
            owner_cpf: "123.456.789-09".to_string(),
            display_name: "MARIA SILVA".to_string(),
            number: "4111111111111111".to_string(),
            expires_month: "12".to_string(),
            expires_year: "2030".to_string(),
            code: "123".to_string(),
            installments: 3,
        });

        let order = submit_checkout(&cart, &form).unwrap();
        assert_eq!(order.payment_method, PaymentMethod::CreditCard);
        assert_eq!(order.installments.len(), 3);
        let paid: i64 = order.installments.iter().map(|m| m.cents()).sum();
        assert_eq!(paid, 10995);
    }

    #[tokio::test]
    async fn test_invalid_form_keeps_cart() {
        let catalog = test_catalog();
        let cart = CartStore::new();
        add_to_cart(&catalog, &cart, ProductId::new(1)).await.unwrap();

        let mut form = bank_slip_form();
        form.delivery.confirm_email = "other@example.com".to_string();

        let err = submit_checkout(&cart, &form).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        let fields = err.fields.unwrap();
        assert!(fields.iter().any(|f| f.field == "confirmDeliveryEmail"));
        assert_eq!(cart.snapshot().item_count(), 1);
    }

    #[tokio::test]
    async fn test_installment_options_follow_cart() {
        let catalog = test_catalog();
        let cart = CartStore::new();
        add_to_cart(&catalog, &cart, ProductId::new(1)).await.unwrap();
        add_to_cart(&catalog, &cart, ProductId::new(2)).await.unwrap();

        let options = installment_options(&cart);
        let counts: Vec<u8> = options.iter().map(|o| o.count).collect();
        assert_eq!(counts, vec![1, 2, 3]);
        assert_eq!(options[0].amount.cents(), 13225);
        assert_eq!(options[2].amount.cents(), 4409);

        let empty = installment_options(&CartStore::new());
        assert!(empty.iter().all(|o| o.amount.is_zero()));
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        let err = submit_checkout(&CartStore::new(), &bank_slip_form()).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
    }
}
