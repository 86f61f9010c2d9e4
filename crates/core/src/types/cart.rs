//! The client-held cart model.
//!
//! A cart is a flat, ordered list of product snapshots. Adding the same
//! product twice yields two entries, not a quantity increment. The cart has no
//! server-side representation until checkout: the sole hand-off between the
//! storefront and checkout views is an explicit JSON snapshot stored in
//! client-local storage.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::product::Product;

/// Errors from cart snapshot serialization.
#[derive(Debug, Error)]
pub enum CartError {
    /// Snapshot could not be serialized or restored.
    #[error("cart snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// An ordered list of selected products awaiting checkout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a product to the cart. No dedup or quantity merge.
    pub fn add(&mut self, product: Product) {
        self.items.push(product);
    }

    /// Remove the entry at `index`.
    ///
    /// A no-op when the index is out of range; callers are responsible for
    /// keeping indices in sync with the last rendered list.
    pub fn remove(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Sum of item prices. Zero for an empty cart.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of entries in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The cart entries, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Consume the cart, yielding the item list for an order snapshot.
    #[must_use]
    pub fn into_items(self) -> Vec<Product> {
        self.items
    }

    /// Serialize the cart to the JSON snapshot stored in client-local storage.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn snapshot(&self) -> Result<String, CartError> {
        Ok(serde_json::to_string(&self.items)?)
    }

    /// Restore a cart from a JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot is not a valid item list.
    pub fn restore(snapshot: &str) -> Result<Self, CartError> {
        let items = serde_json::from_str(snapshot)?;
        Ok(Self { items })
    }
}
