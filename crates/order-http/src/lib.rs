//! # order-http
//!
//! HTTP transport and payment-link redirection for lightning-order-rs.
//!
//! This crate provides:
//! - `HttpTransport` for reqwest-backed access to the remote store
//! - `StoreConfig` for environment-driven store configuration
//! - `PaymentLink` and `LoggingRedirector` for the payment hand-off
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use order_core::{DraftOrder, OrderItem, OrderProcessor};
//! use order_http::{HttpTransport, LoggingRedirector, StoreConfig};
//! use std::sync::Arc;
//!
//! let config = StoreConfig::from_env()?;
//!
//! let processor = OrderProcessor::new(
//!     Arc::new(HttpTransport::new()),
//!     Arc::new(LoggingRedirector::new(config.payment_link())),
//!     config.endpoints(),
//! );
//!
//! let draft = DraftOrder::new().with_item(OrderItem::new("i-1", "p-1", 1980.0, 1));
//! processor.process(&draft).await?;
//! ```

pub mod config;
pub mod redirect;
pub mod transport;

// Re-exports
pub use config::StoreConfig;
pub use redirect::{LoggingRedirector, PaymentLink};
pub use transport::HttpTransport;
