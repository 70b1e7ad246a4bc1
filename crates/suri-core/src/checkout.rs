//! # Checkout
//!
//! Checkout form model, field validation and the simulated order placement.
//!
//! ## Form Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CheckoutForm                                                           │
//! │  ├── billing:  fullName, email, cpf                                     │
//! │  ├── delivery: email, confirmEmail                                      │
//! │  └── payment:  PaymentMode                                              │
//! │                ├── BankSlip                    (no extra fields)        │
//! │                └── CreditCard(CardDetails)     (owner, cpf, number, …)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Card fields only exist inside the `CreditCard` variant, so a bank slip
//! order can never be rejected for a missing card number.
//!
//! ## Validation Flow
//! ```text
//! submit_checkout(form)
//!      │
//!      ▼
//! validate_checkout(form) ── any field errors? ──► Err(CheckoutErrors)
//!      │                                           (every bad field listed)
//!      ▼
//! cart empty? ───────────────────────────────────► Err(EmptyCart)
//!      │
//!      ▼
//! OrderConfirmation (no payment is actually taken)
//! ```

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::{CartLineItem, CartState, CartTotals};
use crate::error::{CheckoutErrors, CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::MAX_INSTALLMENTS;

/// Minimum length of a customer or cardholder name.
pub const MIN_NAME_LEN: usize = 5;

static CPF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{3}\.\d{3}\.\d{3}-\d{2}$").expect("CPF pattern is valid")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

// =============================================================================
// Form Model
// =============================================================================

/// Billing details of the buyer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BillingInfo {
    pub full_name: String,
    pub email: String,
    /// Brazilian taxpayer id, `000.000.000-00`.
    pub cpf: String,
}

/// Where the digital goods are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DeliveryInfo {
    pub email: String,
    pub confirm_email: String,
}

/// Credit card fields, only present when paying by card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CardDetails {
    pub owner: String,
    pub owner_cpf: String,
    pub display_name: String,
    pub number: String,
    pub expires_month: String,
    pub expires_year: String,
    pub code: String,
    #[serde(default = "default_installments")]
    pub installments: u8,
}

fn default_installments() -> u8 {
    1
}

/// How the order will be paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "method", rename_all = "camelCase")]
#[ts(export)]
pub enum PaymentMode {
    BankSlip,
    CreditCard(CardDetails),
}

impl PaymentMode {
    pub fn method(&self) -> PaymentMethod {
        match self {
            PaymentMode::BankSlip => PaymentMethod::BankSlip,
            PaymentMode::CreditCard(_) => PaymentMethod::CreditCard,
        }
    }
}

impl Default for PaymentMode {
    fn default() -> Self {
        PaymentMode::BankSlip
    }
}

/// The complete checkout form as submitted by the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CheckoutForm {
    pub billing: BillingInfo,
    pub delivery: DeliveryInfo,
    #[serde(default)]
    pub payment: PaymentMode,
}

// =============================================================================
// Validation
// =============================================================================

fn check_min_len(errors: &mut Vec<ValidationError>, field: &str, value: &str, min: usize) {
    if value.trim().is_empty() {
        errors.push(ValidationError::required(field));
    } else if value.chars().count() < min {
        errors.push(ValidationError::too_short(field, min));
    }
}

fn check_required(errors: &mut Vec<ValidationError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(ValidationError::required(field));
    }
}

fn check_email(errors: &mut Vec<ValidationError>, field: &str, value: &str) {
    if !EMAIL_RE.is_match(value) {
        errors.push(ValidationError::invalid_format(field, "invalid email address"));
    }
}

fn check_cpf(errors: &mut Vec<ValidationError>, field: &str, value: &str) {
    if !is_valid_cpf_format(value) {
        errors.push(ValidationError::invalid_format(
            field,
            "expected 000.000.000-00",
        ));
    }
}

/// Checks the `000.000.000-00` layout. Check digits are not verified.
///
/// ## Example
/// ```rust
/// use suri_core::checkout::is_valid_cpf_format;
///
/// assert!(is_valid_cpf_format("123.456.789-09"));
/// assert!(!is_valid_cpf_format("12345678909"));
/// ```
pub fn is_valid_cpf_format(cpf: &str) -> bool {
    CPF_RE.is_match(cpf)
}

fn validate_card(errors: &mut Vec<ValidationError>, card: &CardDetails) {
    check_min_len(errors, "cardOwner", &card.owner, MIN_NAME_LEN);
    check_cpf(errors, "cpfCardOwner", &card.owner_cpf);
    check_required(errors, "cardDisplayName", &card.display_name);
    check_required(errors, "cardNumber", &card.number);
    check_required(errors, "expiresMonth", &card.expires_month);
    check_required(errors, "expiresYear", &card.expires_year);
    check_required(errors, "cardCode", &card.code);

    if card.installments == 0 || card.installments > MAX_INSTALLMENTS {
        errors.push(ValidationError::OutOfRange {
            field: "installments".to_string(),
            min: 1,
            max: i64::from(MAX_INSTALLMENTS),
        });
    }
}

/// Validates every field of the form and reports all failures together.
///
/// Field names in the errors are the form's input names (`fullName`,
/// `confirmDeliveryEmail`, `cardNumber`, ...).
pub fn validate_checkout(form: &CheckoutForm) -> Result<(), CheckoutErrors> {
    let mut errors = Vec::new();

    check_min_len(&mut errors, "fullName", &form.billing.full_name, MIN_NAME_LEN);
    check_email(&mut errors, "email", &form.billing.email);
    check_cpf(&mut errors, "cpf", &form.billing.cpf);

    check_email(&mut errors, "deliveryEmail", &form.delivery.email);
    if form.delivery.confirm_email != form.delivery.email {
        errors.push(ValidationError::Mismatch {
            field: "confirmDeliveryEmail".to_string(),
            other: "deliveryEmail".to_string(),
        });
    }

    if let PaymentMode::CreditCard(card) = &form.payment {
        validate_card(&mut errors, card);
    }

    match CheckoutErrors::from_vec(errors) {
        Some(errors) => Err(errors),
        None => Ok(()),
    }
}

// =============================================================================
// Orders
// =============================================================================

/// Payment method recorded on a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum PaymentMethod {
    BankSlip,
    CreditCard,
}

impl PaymentMethod {
    /// Human-readable label shown on the confirmation page.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::BankSlip => "Bank Slip",
            PaymentMethod::CreditCard => "Credit Card",
        }
    }

    /// What happens next for this payment method.
    pub fn notice(&self) -> &'static str {
        match self {
            PaymentMethod::BankSlip => {
                "Confirmation may take up to 3 business days. The activation code \
                 is emailed after payment approval."
            }
            PaymentMethod::CreditCard => {
                "The activation code is released after the card operator approves \
                 the transaction and sent to the registered email."
            }
        }
    }
}

/// One entry of the installments selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InstallmentOption {
    pub count: u8,
    /// Largest single installment (earlier installments absorb leftover cents).
    pub amount: Money,
}

/// Installment choices for a total, `1x` through [`MAX_INSTALLMENTS`].
///
/// ## Example
/// ```rust
/// use suri_core::checkout::installment_options;
/// use suri_core::Money;
///
/// let options = installment_options(Money::from_cents(16990));
/// assert_eq!(options.len(), 3);
/// assert_eq!(options[2].amount.cents(), 5664);
/// ```
pub fn installment_options(total: Money) -> Vec<InstallmentOption> {
    (1..=MAX_INSTALLMENTS)
        .map(|count| InstallmentOption {
            count,
            amount: total
                .split(u32::from(count))
                .first()
                .copied()
                .unwrap_or_default(),
        })
        .collect()
}

/// A successfully placed (simulated) order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderConfirmation {
    #[ts(as = "String")]
    pub order_id: Uuid,

    /// Short customer-facing reference, e.g. `#1A2B3C4D`.
    pub order_number: String,

    pub payment_method: PaymentMethod,
    pub payment_label: String,
    pub notice: String,

    /// The cart lines that were ordered.
    pub items: Vec<CartLineItem>,
    pub totals: CartTotals,

    /// Installment amounts for card payments; empty for bank slip.
    pub installments: Vec<Money>,

    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
}

/// Validates the form against the current cart and places the order.
///
/// Nothing is charged. The caller is expected to clear the cart afterwards.
pub fn place_order(form: &CheckoutForm, cart: &CartState) -> CoreResult<OrderConfirmation> {
    validate_checkout(form)?;

    if cart.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    let totals = cart.totals();
    let method = form.payment.method();
    let installments = match &form.payment {
        PaymentMode::CreditCard(card) => totals.subtotal.split(u32::from(card.installments)),
        PaymentMode::BankSlip => Vec::new(),
    };

    let order_id = Uuid::new_v4();
    Ok(OrderConfirmation {
        order_id,
        order_number: format!("#{:08X}", order_id.as_fields().0),
        payment_method: method,
        payment_label: method.label().to_string(),
        notice: method.notice().to_string(),
        items: cart.items.clone(),
        totals,
        installments,
        placed_at: Utc::now(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
