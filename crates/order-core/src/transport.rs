//! # Transport Trait
//!
//! I/O seam between the order processor and the remote store.

use crate::error::CheckoutResult;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// JSON transport to the remote order/coupon store.
///
/// Implementations resolve with the deserialized response body on a
/// success status, fail with `CheckoutError::UnexpectedStatus` carrying
/// the code on any non-success response, and fail with
/// `CheckoutError::Network` on a network-level failure. No retries, no
/// timeout enforcement beyond the underlying client's own.
///
/// Methods exchange `serde_json::Value` so the trait stays object-safe;
/// callers own the typed decode of the bodies they understand.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `url` and return the response body
    async fn get(&self, url: &str) -> CheckoutResult<Value>;

    /// POST `body` as JSON to `url` and return the response body
    async fn post(&self, url: &str, body: &Value) -> CheckoutResult<Value>;
}

/// Type alias for a shared transport (dynamic dispatch)
pub type BoxedTransport = Arc<dyn Transport>;
