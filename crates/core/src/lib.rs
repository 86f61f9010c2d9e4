//! LUXE Core - Shared types library.
//!
//! This crate provides the common types used across the LUXE demo shop:
//! - `server` - HTTP API for auth delegation and the fake payment flow
//! - `integration-tests` - end-to-end tests driving the HTTP surface
//!
//! # Architecture
//!
//! The core crate contains only types and static data - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, the product catalog, the cart model, and orders

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
