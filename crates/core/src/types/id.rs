//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_string_id!` macro to create type-safe ID wrappers that
//! prevent accidentally mixing IDs from different entity types. All IDs in
//! this system are opaque strings: order and payment IDs are generated from a
//! timestamp plus a random suffix, user IDs come from the identity backend.

use serde::{Deserialize, Serialize};

/// Macro to define a type-safe string-backed ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<String>`, `From<&str>`, and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use luxe_core::define_string_id;
/// define_string_id!(WarehouseId);
///
/// let id = WarehouseId::new("WH-1");
/// assert_eq!(id.as_str(), "WH-1");
/// ```
#[macro_export]
macro_rules! define_string_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_string_id!(OrderId);
define_string_id!(PaymentId);

/// Owning user of an order.
///
/// Orders created without an authenticated session belong to the shared
/// `"guest"` user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a user ID from an identity-backend principal ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The shared owner of unauthenticated orders.
    #[must_use]
    pub fn guest() -> Self {
        Self("guest".to_owned())
    }

    /// Whether this is the guest user.
    #[must_use]
    pub fn is_guest(&self) -> bool {
        self.0 == "guest"
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_roundtrip() {
        let id = OrderId::new("ORD-1700000000000-42");
        assert_eq!(id.as_str(), "ORD-1700000000000-42");
        assert_eq!(id.to_string(), "ORD-1700000000000-42");
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = PaymentId::new("PAY-1-2");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"PAY-1-2\"");
    }

    #[test]
    fn test_guest_user() {
        assert!(UserId::guest().is_guest());
        assert!(!UserId::new("abc-123").is_guest());
        assert_eq!(UserId::guest().as_str(), "guest");
    }
}
