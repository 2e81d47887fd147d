//! # Payment Method Selection
//!
//! Price-tier rules for which payment methods an order may use.
//! Credit has no cap; PayPay and au PAY cap at their tier maximums.

use serde::{Deserialize, Serialize};

/// Maximum total price at which PayPay is accepted
pub const PAYPAY_MAX_AMOUNT: f64 = 500_000.0;

/// Maximum total price at which au PAY is accepted
pub const AUPAY_MAX_AMOUNT: f64 = 300_000.0;

/// Supported payment methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMethod {
    Credit,
    PayPay,
    AuPay,
}

impl PaymentMethod {
    /// All methods, in output order
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Credit,
        PaymentMethod::PayPay,
        PaymentMethod::AuPay,
    ];

    /// Wire name for this method
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Credit => "CREDIT",
            PaymentMethod::PayPay => "PAYPAY",
            PaymentMethod::AuPay => "AUPAY",
        }
    }

    /// Whether this method accepts the given total price
    pub fn is_available(&self, total_price: f64) -> bool {
        match self {
            PaymentMethod::Credit => true,
            PaymentMethod::PayPay => total_price <= PAYPAY_MAX_AMOUNT,
            PaymentMethod::AuPay => total_price <= AUPAY_MAX_AMOUNT,
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Methods accepting the given total price, in enumeration order.
///
/// A NaN total fails every capped comparison and yields the Credit-only
/// set. The processor clamps totals at zero before selection, so capped
/// methods never see a negative total.
pub fn eligible_methods(total_price: f64) -> Vec<PaymentMethod> {
    PaymentMethod::ALL
        .into_iter()
        .filter(|method| method.is_available(total_price))
        .collect()
}

/// Comma-joined wire names of the methods accepting the given total
pub fn build_payment_method(total_price: f64) -> String {
    eligible_methods(total_price)
        .iter()
        .map(|method| method.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
