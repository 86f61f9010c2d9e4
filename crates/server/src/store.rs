//! In-memory order store.
//!
//! A single shared list of orders, guarded by a mutex so concurrent
//! `create_order`/`verify_payment` requests cannot lose updates. Orders are
//! never deleted and the list grows unbounded for the life of the process;
//! restart loses everything. The store is injected into handlers through
//! `AppState` rather than referenced as ambient state.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use rand::Rng;
use thiserror::Error;

use luxe_core::{Order, OrderId, PaymentDetails, PaymentId, Product, UserId};

/// Errors from order store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// An order cannot be created from an empty cart.
    #[error("Cart items are required")]
    EmptyCart,

    /// No order with the given ID exists.
    #[error("Order not found")]
    NotFound(OrderId),
}

/// Shared in-memory registry of orders.
#[derive(Clone, Default)]
pub struct OrderStore {
    // Vec rather than a map: lookups are linear either way at this scale, and
    // creation order must stay observable through `orders_for_user`.
    orders: Arc<Mutex<Vec<Order>>>,
}

impl OrderStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new `pending` order from a cart snapshot.
    ///
    /// The total is client-computed and stored as submitted. Not idempotent:
    /// identical calls create distinct orders.
    ///
    /// # Errors
    ///
    /// `OrderError::EmptyCart` when the item list is empty; nothing is stored.
    pub fn create_order(
        &self,
        items: Vec<Product>,
        total: f64,
        user_id: UserId,
    ) -> Result<OrderId, OrderError> {
        if items.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let order_id = generate_order_id();
        let order = Order::pending(order_id.clone(), user_id, items, total);

        self.lock().push(order);
        tracing::info!(order_id = %order_id, "Order created");

        Ok(order_id)
    }

    /// Mark an order's payment as verified.
    ///
    /// The stub gateway always succeeds on a known order: the status flips to
    /// `completed`, a payment ID and completion timestamp are attached, and
    /// the supplied (masked) payment details are stored. Re-verifying a
    /// completed order succeeds again and overwrites the payment snapshot;
    /// no caller/owner check ties the request to the order's user.
    ///
    /// # Errors
    ///
    /// `OrderError::NotFound` for an unknown order ID; nothing is mutated.
    pub fn verify_payment(
        &self,
        order_id: &OrderId,
        details: PaymentDetails,
    ) -> Result<Order, OrderError> {
        let mut orders = self.lock();
        let order = orders
            .iter_mut()
            .find(|o| &o.order_id == order_id)
            .ok_or_else(|| OrderError::NotFound(order_id.clone()))?;

        order.complete(generate_payment_id(), details);
        tracing::info!(order_id = %order_id, "Payment verified");

        Ok(order.clone())
    }

    /// All orders owned by `user_id`, in creation order.
    #[must_use]
    pub fn orders_for_user(&self, user_id: &UserId) -> Vec<Order> {
        self.lock()
            .iter()
            .filter(|o| &o.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Look up a single order.
    ///
    /// # Errors
    ///
    /// `OrderError::NotFound` for an unknown order ID.
    pub fn get(&self, order_id: &OrderId) -> Result<Order, OrderError> {
        self.lock()
            .iter()
            .find(|o| &o.order_id == order_id)
            .cloned()
            .ok_or_else(|| OrderError::NotFound(order_id.clone()))
    }

    /// Number of orders in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the store holds no orders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Order>> {
        // A poisoned lock means a handler panicked mid-mutation; the order
        // list has no invariants a partial mutation can break.
        self.orders
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

/// Generate an order ID: `ORD-<unix millis>-<random 0..1000>`.
///
/// Collision-tolerant by design, not cryptographically unique; two orders in
/// the same millisecond with the same suffix would alias each other. The
/// original scheme is reproduced as-is.
fn generate_order_id() -> OrderId {
    OrderId::new(format!(
        "ORD-{}-{}",
        Utc::now().timestamp_millis(),
        rand::rng().random_range(0..1000)
    ))
}

/// Generate a payment ID: `PAY-<unix millis>-<random 0..1000>`.
fn generate_payment_id() -> PaymentId {
    PaymentId::new(format!(
        "PAY-{}-{}",
        Utc::now().timestamp_millis(),
        rand::rng().random_range(0..1000)
    ))
}
