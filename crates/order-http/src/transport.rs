//! # HTTP Transport
//!
//! reqwest-backed `Transport` adapter for the remote order/coupon store.

use async_trait::async_trait;
use order_core::{CheckoutError, CheckoutResult, Transport};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error};

/// JSON-over-HTTP transport to the remote store
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with a default 30-second-timeout client
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Create a transport over an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn decode(response: reqwest::Response) -> CheckoutResult<Value> {
        let status = response.status();

        if !status.is_success() {
            error!("Store responded with non-success status: {}", status);
            return Err(CheckoutError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| CheckoutError::Serialization(e.to_string()))
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> CheckoutResult<Value> {
        debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CheckoutError::Network(e.to_string()))?;

        Self::decode(response).await
    }

    async fn post(&self, url: &str, body: &Value) -> CheckoutResult<Value> {
        debug!(%url, "POST");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| CheckoutError::Network(e.to_string()))?;

        Self::decode(response).await
    }
}
