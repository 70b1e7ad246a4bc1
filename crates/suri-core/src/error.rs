//! # Error Types
//!
//! Domain-specific error types for suri-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  suri-core errors (this file)                                          │
//! │  ├── CoreError        - General domain errors                          │
//! │  ├── ValidationError  - A single invalid field                         │
//! │  └── CheckoutErrors   - Every invalid field of one checkout form       │
//! │                                                                         │
//! │  suri-catalog errors (separate crate)                                  │
//! │  └── CatalogError     - Catalog fetch/decode failures                  │
//! │                                                                         │
//! │  Storefront errors (in app)                                            │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CheckoutErrors → CoreError → ApiError         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart store itself has no error type: every cart operation is total.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A catalog price could not be represented as whole cents.
    ///
    /// ## When This Occurs
    /// - Price is negative, NaN or infinite
    /// - Price has more than two decimal places
    #[error("Invalid price {value}: {reason}")]
    InvalidPrice { value: String, reason: String },

    /// Checkout was attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// The checkout form was rejected.
    #[error(transparent)]
    Checkout(#[from] CheckoutErrors),
}

impl CoreError {
    /// Creates an InvalidPrice error.
    pub fn invalid_price(value: impl ToString, reason: impl Into<String>) -> Self {
        CoreError::InvalidPrice {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// A single field that failed validation.
///
/// Field names are the camelCase names the frontend form uses, so the UI can
/// show each message next to its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., malformed email or CPF).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Field must repeat another field's value.
    #[error("{field} must match {other}")]
    Mismatch { field: String, other: String },
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    pub fn too_short(field: impl Into<String>, min: usize) -> Self {
        ValidationError::TooShort {
            field: field.into(),
            min,
        }
    }

    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// The name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::Mismatch { field, .. } => field,
        }
    }
}

// =============================================================================
// Checkout Errors
// =============================================================================

/// All field errors found on one checkout form.
///
/// Unlike most validators in this crate, checkout collects every failure so
/// the form can flag all bad inputs at once. Never constructed empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Checkout form has {} invalid field(s)", .0.len())]
pub struct CheckoutErrors(Vec<ValidationError>);

impl CheckoutErrors {
    /// Wraps collected errors, returning `None` when there are none.
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(CheckoutErrors(errors))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the first error reported for `field`, if any.
    pub fn for_field(&self, field: &str) -> Option<&ValidationError> {
        self.0.iter().find(|e| e.field() == field)
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
