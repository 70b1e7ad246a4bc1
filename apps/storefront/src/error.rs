//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  UI                          Rust Shell                                 │
//! │  ──                          ──────────                                 │
//! │                                                                         │
//! │  {"cmd":"add_to_cart","productId":42}                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Catalog Error? ─── CatalogError::Status { .. } ──┐             │  │
//! │  │         │                                         │             │  │
//! │  │         ▼                                         ▼             │  │
//! │  │  Checkout Error? ─── CoreError::Checkout ─────── ApiError ─────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄────────────────────────────────────────────────────────────────────  │
//! │                                                                         │
//! │  {"error":{"code":"NOT_FOUND","message":"Product not found: 42"}}       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! Errors cross the command channel as JSON, so `ApiError` implements
//! `Serialize` with a machine-readable `code`, a human-readable `message`,
//! and per-field messages when a form was rejected.

use serde::Serialize;
use suri_catalog::CatalogError;
use suri_core::{CheckoutErrors, CoreError};

use crate::state::ConfigError;

/// API error returned from storefront commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Checkout form has 1 invalid field(s)",
///   "fields": [{ "field": "email", "message": "email is required" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Field-level messages, present only for rejected forms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldError>>,
}

/// One rejected form input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in Frontend
/// ```typescript
/// const reply = await send({ cmd: 'submit_checkout', form });
/// if (reply.error) {
///   switch (reply.error.code) {
///     case 'VALIDATION_ERROR':
///       markFields(reply.error.fields);
///       break;
///     case 'CART_ERROR':
///       showNotification('Your cart is empty');
///       break;
///     default:
///       showError(reply.error.message);
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product does not exist in the catalog
    NotFound,

    /// Form input validation failed
    ValidationError,

    /// Catalog request failed or returned bad data
    CatalogError,

    /// Cart cannot be used for the requested operation
    CartError,

    /// The command line could not be parsed
    BadRequest,

    /// Anything else
    InternalError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            fields: None,
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BadRequest, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InternalError, message)
    }
}

/// Converts catalog errors to API errors.
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Http { url, source } => {
                tracing::error!(%url, error = %source, "Catalog request failed");
                ApiError::new(ErrorCode::CatalogError, "Catalog is unavailable")
            }
            CatalogError::Status { url, status } => {
                tracing::error!(%url, status, "Catalog returned an error status");
                ApiError::new(
                    ErrorCode::CatalogError,
                    format!("Catalog returned status {}", status),
                )
            }
            CatalogError::Decode { url, source } => {
                tracing::error!(%url, error = %source, "Catalog response could not be decoded");
                ApiError::new(ErrorCode::CatalogError, "Catalog returned malformed data")
            }
            CatalogError::Product { id, source } => {
                tracing::error!(product_id = %id, error = %source, "Catalog product is invalid");
                ApiError::new(
                    ErrorCode::CatalogError,
                    format!("Catalog product {} is invalid", id),
                )
            }
            CatalogError::Config(message) => {
                tracing::error!(%message, "Catalog client misconfigured");
                ApiError::internal("Catalog client is misconfigured")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EmptyCart => ApiError::new(ErrorCode::CartError, "Cart is empty"),
            CoreError::Checkout(errors) => ApiError::from(errors),
            e @ CoreError::InvalidPrice { .. } => {
                ApiError::new(ErrorCode::CatalogError, e.to_string())
            }
        }
    }
}

/// Converts a rejected checkout form, keeping every field message.
impl From<CheckoutErrors> for ApiError {
    fn from(errors: CheckoutErrors) -> Self {
        let fields = errors
            .iter()
            .map(|e| FieldError {
                field: e.field().to_string(),
                message: e.to_string(),
            })
            .collect();
        ApiError {
            code: ErrorCode::ValidationError,
            message: errors.to_string(),
            fields: Some(fields),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::internal(err.to_string())
    }
}

/// Unparsable command lines.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::bad_request(format!("Invalid command: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use suri_core::{ProductId, ValidationError};

    #[test]
    fn test_codes_serialize_screaming_snake() {
        let json = serde_json::to_value(ApiError::not_found("Product", "42")).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: 42");
        assert!(json.get("fields").is_none());

        let json = serde_json::to_value(ErrorCode::InternalError).unwrap();
        assert_eq!(json, "INTERNAL_ERROR");
    }

    #[test]
    fn test_checkout_errors_keep_fields() {
        let errors = CheckoutErrors::from_vec(vec![
            ValidationError::required("email"),
            ValidationError::too_short("fullName", 5),
        ])
        .unwrap();

        let err = ApiError::from(CoreError::Checkout(errors));
        assert_eq!(err.code, ErrorCode::ValidationError);
        let fields = err.fields.unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].field, "email");
        assert_eq!(fields[1].message, "fullName must be at least 5 characters");
    }

    #[test]
    fn test_empty_cart_is_cart_error() {
        assert_eq!(ApiError::from(CoreError::EmptyCart).code, ErrorCode::CartError);
    }

    #[test]
    fn test_catalog_errors_map_to_catalog_code() {
        let err = ApiError::from(CatalogError::Status {
            url: "https://fakestoreapi.com/products".to_string(),
            status: 503,
        });
        assert_eq!(err.code, ErrorCode::CatalogError);
        assert_eq!(err.message, "Catalog returned status 503");

        let err = ApiError::from(CatalogError::Product {
            id: ProductId::new(7),
            source: CoreError::invalid_price("-1", "negative"),
        });
        assert_eq!(err.code, ErrorCode::CatalogError);
    }

    #[test]
    fn test_json_errors_are_bad_requests() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err = ApiError::from(parse.unwrap_err());
        assert_eq!(err.code, ErrorCode::BadRequest);
        assert!(err.message.starts_with("Invalid command"));
    }
}
