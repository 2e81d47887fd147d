//! # Payment Redirector Trait
//!
//! Seam for the environment-specific payment navigation, so the
//! processor core carries no dependency on any UI or browser runtime.

use crate::error::CheckoutResult;
use crate::order::PersistedOrder;
use async_trait::async_trait;
use std::sync::Arc;

/// Opens the payment link for a persisted order.
#[async_trait]
pub trait PaymentRedirector: Send + Sync {
    /// Hand off a created order to the payment environment.
    ///
    /// Implementations decide what "open" means for their environment
    /// (browser tab, emitted link, deep link). The processor does not
    /// inspect the outcome beyond propagating an implementation error
    /// unchanged.
    async fn pay_via_link(&self, order: &PersistedOrder) -> CheckoutResult<()>;
}

/// Type alias for a shared redirector (dynamic dispatch)
pub type BoxedRedirector = Arc<dyn PaymentRedirector>;
