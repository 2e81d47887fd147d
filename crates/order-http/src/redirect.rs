//! # Payment Link Redirection
//!
//! Builds the hosted payment link for a persisted order and hands it to
//! the navigation environment.

use crate::config::DEFAULT_PAYMENT_LINK_URL;
use async_trait::async_trait;
use order_core::{CheckoutResult, PaymentRedirector, PersistedOrder};
use tracing::info;

/// Builder for hosted payment-link URLs
#[derive(Debug, Clone)]
pub struct PaymentLink {
    base_url: String,
}

impl PaymentLink {
    /// Create a link builder for a payment host
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Payment URL for a persisted order
    pub fn url_for(&self, order: &PersistedOrder) -> String {
        format!("{}/pay?orderId={}", self.base_url, order.id)
    }
}

impl Default for PaymentLink {
    fn default() -> Self {
        Self::new(DEFAULT_PAYMENT_LINK_URL)
    }
}

/// Redirector that surfaces the payment link on the log stream.
///
/// Headless environments have no browser window to navigate; the link is
/// emitted at info level for the embedding environment to open. Always
/// succeeds; a navigation target that goes unopened is the environment's
/// concern, not the checkout flow's.
pub struct LoggingRedirector {
    link: PaymentLink,
}

impl LoggingRedirector {
    /// Create a redirector over a payment-link builder
    pub fn new(link: PaymentLink) -> Self {
        Self { link }
    }
}

impl Default for LoggingRedirector {
    fn default() -> Self {
        Self::new(PaymentLink::default())
    }
}

#[async_trait]
impl PaymentRedirector for LoggingRedirector {
    async fn pay_via_link(&self, order: &PersistedOrder) -> CheckoutResult<()> {
        let url = self.link.url_for(order);
        info!(order_id = %order.id, %url, "opening payment link");
        Ok(())
    }
}
