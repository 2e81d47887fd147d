//! # Store Endpoints
//!
//! URL building for the remote order/coupon store.

/// Endpoint configuration for the remote store
#[derive(Debug, Clone)]
pub struct StoreEndpoints {
    /// Base URL of the store (e.g., "https://store.example.com")
    pub base_url: String,
    /// Coupon collection path
    pub coupon_path: String,
    /// Order creation path
    pub order_path: String,
}

impl StoreEndpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            coupon_path: "/coupons".to_string(),
            order_path: "/order".to_string(),
        }
    }

    /// Coupon lookup URL for a coupon ID
    pub fn coupon_url(&self, coupon_id: &str) -> String {
        format!("{}{}/{}", self.base_url, self.coupon_path, coupon_id)
    }

    /// Order creation URL
    pub fn order_url(&self) -> String {
        format!("{}{}", self.base_url, self.order_path)
    }
}

impl Default for StoreEndpoints {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_urls() {
        let endpoints = StoreEndpoints::new("https://store.example.com");

        assert_eq!(
            endpoints.coupon_url("SAVE100"),
            "https://store.example.com/coupons/SAVE100"
        );
        assert_eq!(endpoints.order_url(), "https://store.example.com/order");
    }
}
