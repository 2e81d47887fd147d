//! # Checkout Error Types
//!
//! Typed error handling for the lightning-order checkout pipeline.
//! All checkout operations return `Result<T, CheckoutError>`.

use thiserror::Error;

/// Core error type for all checkout operations
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Draft order has no items
    #[error("Order items are required")]
    ItemsRequired,

    /// An item has a non-positive price or a zero quantity
    #[error("Order items are invalid")]
    ItemsInvalid,

    /// Coupon lookup failed. The cause (network failure, non-success
    /// status, null or malformed body) is discarded; the message is fixed.
    #[error("Failed to fetch coupon")]
    CouponFetchFailed,

    /// Order submission failed. Cause discarded, message fixed.
    #[error("Failed to create order")]
    OrderCreationFailed,

    /// Remote responded with a non-success status
    #[error("Unexpected status: {status}")]
    UnexpectedStatus { status: u16 },

    /// Network-level failure (DNS, connection reset, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration errors (missing env vars, invalid URLs)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CheckoutError {
    /// Returns true if this error was raised by draft-order validation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CheckoutError::ItemsRequired | CheckoutError::ItemsInvalid
        )
    }

    /// Returns true if this error came from the transport layer
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            CheckoutError::UnexpectedStatus { .. } | CheckoutError::Network(_)
        )
    }
}

/// Result type alias for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;
