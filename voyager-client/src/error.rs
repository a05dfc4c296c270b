//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Local persistence error
///
/// Never surfaced to the shopper: the cart engine logs these and keeps
/// working with in-memory state only.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage encoding: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Checkout validation error, raised before any network call
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// A required form field on the active step is empty
    #[error("{field} is required")]
    MissingField { field: String },

    /// A field is present but malformed
    #[error("{field} is invalid: {reason}")]
    InvalidField { field: String, reason: String },

    /// Submission with nothing to buy
    #[error("cart is empty")]
    EmptyCart,

    /// Checkout processing failed server-side
    #[error(transparent)]
    Api(#[from] ClientError),
}

/// Result type for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;
