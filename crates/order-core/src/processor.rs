//! # Order Processor
//!
//! Orchestrates the checkout pipeline: validate the draft, price it,
//! apply an optional coupon, select payment methods, submit the order,
//! and hand the persisted order off for payment.

use crate::endpoints::StoreEndpoints;
use crate::error::{CheckoutError, CheckoutResult};
use crate::methods::build_payment_method;
use crate::order::{Coupon, DraftOrder, OrderPayload, PersistedOrder};
use crate::redirect::BoxedRedirector;
use crate::transport::BoxedTransport;
use tracing::{debug, info, instrument};

/// Drives a draft order through pricing, submission, and payment hand-off.
///
/// The contract is complete-or-error: on any failure the remaining steps
/// are skipped and nothing is returned to the caller. A single failed
/// network call is terminal; nothing is retried.
pub struct OrderProcessor {
    transport: BoxedTransport,
    redirector: BoxedRedirector,
    endpoints: StoreEndpoints,
}

impl OrderProcessor {
    /// Create a processor over the given transport and redirector
    pub fn new(
        transport: BoxedTransport,
        redirector: BoxedRedirector,
        endpoints: StoreEndpoints,
    ) -> Self {
        Self {
            transport,
            redirector,
            endpoints,
        }
    }

    /// Validate, price, submit, and redirect a draft order.
    ///
    /// The coupon fetch (when a coupon ID is set) completes before the
    /// order is submitted; the discount feeds the submitted total.
    /// Redirector errors propagate unchanged.
    #[instrument(skip(self, draft), fields(items = draft.items.len()))]
    pub async fn process(&self, draft: &DraftOrder) -> CheckoutResult<()> {
        let total_price = self.calculate_total_price(draft).await?;
        let payment_method = build_payment_method(total_price);

        debug!(total_price, %payment_method, "draft order priced");

        let payload = OrderPayload {
            items: draft.items.clone(),
            coupon_id: draft.coupon_id.clone(),
            total_price,
            payment_method,
        };

        let created = self.create_order(&payload).await?;

        info!(
            order_id = %created.id,
            total_price = created.total_price,
            "order created"
        );

        self.redirector.pay_via_link(&created).await
    }

    /// Subtotal of the draft, less any coupon discount, clamped at zero
    async fn calculate_total_price(&self, draft: &DraftOrder) -> CheckoutResult<f64> {
        draft.validate()?;

        let subtotal = draft.subtotal();
        let Some(coupon_id) = draft.coupon_id.as_deref() else {
            return Ok(subtotal);
        };

        let coupon = self.fetch_coupon(coupon_id).await?;

        Ok((subtotal - coupon.discount).max(0.0))
    }

    /// Fetch a coupon by ID. Every failure mode (network, non-success
    /// status, null or malformed body) collapses into `CouponFetchFailed`.
    async fn fetch_coupon(&self, coupon_id: &str) -> CheckoutResult<Coupon> {
        let url = self.endpoints.coupon_url(coupon_id);

        let body = self
            .transport
            .get(&url)
            .await
            .map_err(|_| CheckoutError::CouponFetchFailed)?;

        if body.is_null() {
            return Err(CheckoutError::CouponFetchFailed);
        }

        serde_json::from_value(body).map_err(|_| CheckoutError::CouponFetchFailed)
    }

    /// Submit the finalized order. Every transport failure mode collapses
    /// into `OrderCreationFailed`.
    async fn create_order(&self, payload: &OrderPayload) -> CheckoutResult<PersistedOrder> {
        let body = serde_json::to_value(payload)
            .map_err(|e| CheckoutError::Serialization(e.to_string()))?;

        let created = self
            .transport
            .post(&self.endpoints.order_url(), &body)
            .await
            .map_err(|_| CheckoutError::OrderCreationFailed)?;

        serde_json::from_value(created).map_err(|_| CheckoutError::OrderCreationFailed)
    }
}
