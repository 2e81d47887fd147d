//! # Store Configuration
//!
//! Environment-driven configuration for the remote order/coupon store.

use crate::redirect::PaymentLink;
use order_core::{CheckoutError, CheckoutResult, StoreEndpoints};
use std::env;

/// Default payment-link base when `PAYMENT_LINK_URL` is unset
pub const DEFAULT_PAYMENT_LINK_URL: &str = "https://payment.example.com";

/// Remote store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the order/coupon store
    pub store_url: String,

    /// Base URL for hosted payment links
    pub payment_link_url: String,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `ORDER_STORE_URL`
    ///
    /// Optional:
    /// - `PAYMENT_LINK_URL` (defaults to `https://payment.example.com`)
    pub fn from_env() -> CheckoutResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let store_url = env::var("ORDER_STORE_URL").map_err(|_| {
            CheckoutError::Configuration("ORDER_STORE_URL not set".to_string())
        })?;

        let payment_link_url = env::var("PAYMENT_LINK_URL")
            .unwrap_or_else(|_| DEFAULT_PAYMENT_LINK_URL.to_string());

        if !store_url.starts_with("http://") && !store_url.starts_with("https://") {
            return Err(CheckoutError::Configuration(
                "ORDER_STORE_URL must be an http(s) URL".to_string(),
            ));
        }

        Ok(Self {
            store_url,
            payment_link_url,
        })
    }

    /// Create config with explicit values (for testing)
    pub fn new(store_url: impl Into<String>) -> Self {
        Self {
            store_url: store_url.into(),
            payment_link_url: DEFAULT_PAYMENT_LINK_URL.to_string(),
        }
    }

    /// Builder: set custom payment-link base URL
    pub fn with_payment_link_url(mut self, url: impl Into<String>) -> Self {
        self.payment_link_url = url.into();
        self
    }

    /// Endpoints for the configured store
    pub fn endpoints(&self) -> StoreEndpoints {
        StoreEndpoints::new(self.store_url.clone())
    }

    /// Payment-link builder for the configured base
    pub fn payment_link(&self) -> PaymentLink {
        PaymentLink::new(self.payment_link_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_missing_store_url() {
        env::remove_var("ORDER_STORE_URL");

        let result = StoreConfig::from_env();
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_config() {
        let config = StoreConfig::new("https://store.example.com")
            .with_payment_link_url("https://pay.example.com");

        assert_eq!(
            config.endpoints().coupon_url("SAVE100"),
            "https://store.example.com/coupons/SAVE100"
        );
        assert_eq!(config.payment_link_url, "https://pay.example.com");
    }

    #[test]
    fn test_payment_link_defaults() {
        let config = StoreConfig::new("https://store.example.com");

        assert_eq!(config.payment_link_url, DEFAULT_PAYMENT_LINK_URL);
    }
}
