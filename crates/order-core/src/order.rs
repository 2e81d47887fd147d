//! # Order Types
//!
//! Draft and persisted order types for lightning-order.
//! Wire-facing fields use the store's camelCase JSON dialect.

use crate::error::{CheckoutError, CheckoutResult};
use serde::{Deserialize, Serialize};

/// A single item in an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Item ID
    pub id: String,

    /// Product ID
    pub product_id: String,

    /// Unit price
    pub price: f64,

    /// Quantity
    pub quantity: u32,
}

impl OrderItem {
    /// Create an order item
    pub fn new(
        id: impl Into<String>,
        product_id: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            product_id: product_id.into(),
            price,
            quantity,
        }
    }

    /// Total price for this item
    pub fn total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// A caller-assembled order awaiting pricing and submission
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftOrder {
    /// Items to purchase
    #[serde(default)]
    pub items: Vec<OrderItem>,

    /// Coupon identifier to apply at pricing time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_id: Option<String>,
}

impl DraftOrder {
    /// Create an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item
    pub fn add_item(&mut self, item: OrderItem) {
        self.items.push(item);
    }

    /// Builder: add an item
    pub fn with_item(mut self, item: OrderItem) -> Self {
        self.add_item(item);
        self
    }

    /// Builder: set the coupon ID
    pub fn with_coupon(mut self, coupon_id: impl Into<String>) -> Self {
        self.coupon_id = Some(coupon_id.into());
        self
    }

    /// Check if the draft has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of price × quantity across all items
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(|item| item.total()).sum()
    }

    /// Validate the draft: at least one item, every item with a positive
    /// price and a non-zero quantity.
    pub fn validate(&self) -> CheckoutResult<()> {
        if self.items.is_empty() {
            return Err(CheckoutError::ItemsRequired);
        }

        if self
            .items
            .iter()
            .any(|item| item.price <= 0.0 || item.quantity == 0)
        {
            return Err(CheckoutError::ItemsInvalid);
        }

        Ok(())
    }
}

/// A remotely-stored discount, fetched once per checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coupon {
    /// Amount subtracted from the subtotal
    pub discount: f64,
}

/// The finalized order body submitted to the store
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    /// Items as drafted
    pub items: Vec<OrderItem>,

    /// Coupon applied, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_id: Option<String>,

    /// Computed total after any discount
    pub total_price: f64,

    /// Comma-joined eligible payment methods
    pub payment_method: String,
}

/// A store-persisted order with its assigned ID
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedOrder {
    /// ID assigned by the store
    pub id: String,

    /// Items as submitted
    #[serde(default)]
    pub items: Vec<OrderItem>,

    /// Coupon applied, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_id: Option<String>,

    /// Authoritative total
    pub total_price: f64,

    /// Comma-joined eligible payment methods
    pub payment_method: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_total() {
        let item = OrderItem::new("i-1", "p-1", 1980.0, 3);

        assert_eq!(item.total(), 5940.0);
    }

    #[test]
    fn test_draft_subtotal() {
        let draft = DraftOrder::new()
            .with_item(OrderItem::new("i-1", "p-1", 100.0, 2))
            .with_item(OrderItem::new("i-2", "p-2", 200.0, 1));

        assert_eq!(draft.subtotal(), 400.0);
        assert!(!draft.is_empty());
    }

    #[test]
    fn test_validate_requires_items() {
        let draft = DraftOrder::new();

        assert!(matches!(
            draft.validate(),
            Err(CheckoutError::ItemsRequired)
        ));
    }

    #[test]
    fn test_validate_rejects_bad_items() {
        let zero_price = DraftOrder::new().with_item(OrderItem::new("i-1", "p-1", 0.0, 1));
        assert!(matches!(
            zero_price.validate(),
            Err(CheckoutError::ItemsInvalid)
        ));

        let negative_price = DraftOrder::new().with_item(OrderItem::new("i-1", "p-1", -10.0, 1));
        assert!(matches!(
            negative_price.validate(),
            Err(CheckoutError::ItemsInvalid)
        ));

        let zero_quantity = DraftOrder::new().with_item(OrderItem::new("i-1", "p-1", 100.0, 0));
        assert!(matches!(
            zero_quantity.validate(),
            Err(CheckoutError::ItemsInvalid)
        ));

        // One bad item poisons an otherwise valid draft
        let mixed = DraftOrder::new()
            .with_item(OrderItem::new("i-1", "p-1", 100.0, 1))
            .with_item(OrderItem::new("i-2", "p-2", 100.0, 0));
        assert!(matches!(mixed.validate(), Err(CheckoutError::ItemsInvalid)));
    }

    #[test]
    fn test_draft_without_items_field_deserializes_empty() {
        let draft: DraftOrder = serde_json::from_str("{}").unwrap();

        assert!(draft.is_empty());
        assert!(matches!(
            draft.validate(),
            Err(CheckoutError::ItemsRequired)
        ));
    }

    #[test]
    fn test_valid_draft_passes() {
        let draft = DraftOrder::new()
            .with_item(OrderItem::new("i-1", "p-1", 100.0, 2))
            .with_coupon("SAVE100");

        assert!(draft.validate().is_ok());
        assert_eq!(draft.coupon_id.as_deref(), Some("SAVE100"));
    }

    #[test]
    fn test_payload_wire_dialect() {
        let payload = OrderPayload {
            items: vec![OrderItem::new("i-1", "p-1", 100.0, 2)],
            coupon_id: Some("SAVE100".to_string()),
            total_price: 200.0,
            payment_method: "CREDIT,PAYPAY,AUPAY".to_string(),
        };

        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["totalPrice"], 200.0);
        assert_eq!(value["paymentMethod"], "CREDIT,PAYPAY,AUPAY");
        assert_eq!(value["couponId"], "SAVE100");
        assert_eq!(value["items"][0]["productId"], "p-1");
    }

    #[test]
    fn test_payload_omits_absent_coupon() {
        let payload = OrderPayload {
            items: vec![OrderItem::new("i-1", "p-1", 100.0, 1)],
            coupon_id: None,
            total_price: 100.0,
            payment_method: "CREDIT".to_string(),
        };

        let value = serde_json::to_value(&payload).unwrap();

        assert!(value.get("couponId").is_none());
    }

    #[test]
    fn test_persisted_order_from_store_json() {
        let body = serde_json::json!({
            "id": "ord-42",
            "items": [{"id": "i-1", "productId": "p-1", "price": 100.0, "quantity": 2}],
            "totalPrice": 200.0,
            "paymentMethod": "CREDIT,PAYPAY,AUPAY"
        });

        let order: PersistedOrder = serde_json::from_value(body).unwrap();

        assert_eq!(order.id, "ord-42");
        assert_eq!(order.total_price, 200.0);
        assert_eq!(order.coupon_id, None);
        assert_eq!(order.items[0].product_id, "p-1");
    }
}
