//! Core types for the LUXE demo shop.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod order;
pub mod product;

pub use cart::{Cart, CartError};
pub use id::{OrderId, PaymentId, UserId};
pub use order::{Order, OrderStatus, PaymentDetails, PaymentMethod};
pub use product::{Category, ColorVariant, Product, catalog};
