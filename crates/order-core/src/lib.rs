//! # order-core
//!
//! Core types and traits for the lightning-order checkout pipeline.
//!
//! This crate provides:
//! - `OrderProcessor` for the validate/price/submit/redirect checkout flow
//! - `DraftOrder`, `OrderItem`, `PersistedOrder`, and `Coupon` order types
//! - `PaymentMethod` with price-tier method selection
//! - `Transport` and `PaymentRedirector` traits for the I/O seams
//! - `CheckoutError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use order_core::{DraftOrder, OrderItem, OrderProcessor, StoreEndpoints};
//!
//! // Assemble a draft order
//! let draft = DraftOrder::new()
//!     .with_item(OrderItem::new("item-1", "prod-9", 1980.0, 2))
//!     .with_coupon("SAVE100");
//!
//! // Wire the processor with a concrete transport and redirector
//! let processor = OrderProcessor::new(
//!     transport,
//!     redirector,
//!     StoreEndpoints::new("https://store.example.com"),
//! );
//!
//! // Validate, price, submit, and hand off for payment
//! processor.process(&draft).await?;
//! ```

pub mod endpoints;
pub mod error;
pub mod methods;
pub mod order;
pub mod processor;
pub mod redirect;
pub mod transport;

// Re-exports for convenience
pub use endpoints::StoreEndpoints;
pub use error::{CheckoutError, CheckoutResult};
pub use methods::{
    build_payment_method, eligible_methods, PaymentMethod, AUPAY_MAX_AMOUNT, PAYPAY_MAX_AMOUNT,
};
pub use order::{Coupon, DraftOrder, OrderItem, OrderPayload, PersistedOrder};
pub use processor::OrderProcessor;
pub use redirect::{BoxedRedirector, PaymentRedirector};
pub use transport::{BoxedTransport, Transport};
