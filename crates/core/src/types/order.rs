//! Order and payment types.
//!
//! An order is the server-side record of a checkout attempt. Its lifecycle is
//! a single status flip: `pending` (set on creation) to `completed` (set when
//! the stub payment gateway "verifies" the payment). There is no failed state
//! and no transition back from `completed`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::id::{OrderId, PaymentId, UserId};
use crate::types::product::Product;

/// Order payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
}

/// Payment method selected on the checkout page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Debit,
    Upi,
    Wallet,
}

/// Masked payment detail snapshot attached to a completed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    pub method: PaymentMethod,
    /// Last four digits of the card number, for card payments only.
    pub card_last4: Option<String>,
}

/// A server-side record of a checkout attempt and its payment status.
///
/// The `total` is client-computed and trusted as submitted; the server does
/// not recompute it from item prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: OrderId,
    pub user_id: UserId,
    /// Snapshot of the cart at checkout time.
    pub items: Vec<Product>,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    /// Set when the payment is verified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<PaymentId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_details: Option<PaymentDetails>,
}

impl Order {
    /// Create a new pending order from a cart snapshot.
    #[must_use]
    pub fn pending(order_id: OrderId, user_id: UserId, items: Vec<Product>, total: f64) -> Self {
        Self {
            order_id,
            user_id,
            items,
            total,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            payment_id: None,
            completed_at: None,
            payment_details: None,
        }
    }

    /// Mark the order completed, attaching the payment snapshot.
    ///
    /// Always succeeds, including on an already-completed order; the stub
    /// gateway has no failure path and no double-completion guard.
    pub fn complete(&mut self, payment_id: PaymentId, details: PaymentDetails) {
        self.status = OrderStatus::Completed;
        self.payment_id = Some(payment_id);
        self.completed_at = Some(Utc::now());
        self.payment_details = Some(details);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::product;

    fn sample_order() -> Order {
        Order::pending(
            OrderId::new("ORD-1-1"),
            UserId::guest(),
            vec![product::find(1).expect("catalog product").clone()],
            299.0,
        )
    }

    #[test]
    fn test_new_order_is_pending() {
        let order = sample_order();
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.payment_id.is_none());
        assert!(order.completed_at.is_none());
    }

    #[test]
    fn test_complete_sets_payment_snapshot() {
        let mut order = sample_order();
        order.complete(
            PaymentId::new("PAY-1-1"),
            PaymentDetails {
                method: PaymentMethod::Card,
                card_last4: Some("4242".to_owned()),
            },
        );
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.payment_id, Some(PaymentId::new("PAY-1-1")));
        assert!(order.completed_at.is_some());
    }

    #[test]
    fn test_status_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Pending).expect("serialize"),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Completed).expect("serialize"),
            "\"completed\""
        );
    }

    #[test]
    fn test_pending_order_json_omits_payment_fields() {
        let json = serde_json::to_value(sample_order()).expect("serialize");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["orderId"], "ORD-1-1");
        assert_eq!(json["userId"], "guest");
        assert!(json.get("paymentId").is_none());
        assert!(json.get("completedAt").is_none());
        assert!(json.get("paymentDetails").is_none());
    }

    #[test]
    fn test_payment_details_json_shape() {
        let details = PaymentDetails {
            method: PaymentMethod::Upi,
            card_last4: None,
        };
        let json = serde_json::to_value(&details).expect("serialize");
        assert_eq!(json["method"], "upi");
        assert_eq!(json["cardLast4"], serde_json::Value::Null);
    }
}
