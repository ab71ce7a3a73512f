//! Newtype IDs for type-safe identifiers.
//!
//! Product, delivery-option and order ids are all plain strings on the wire;
//! the newtypes keep a `DeliveryOptionId` from being passed where a
//! `ProductId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a catalog product.
    ProductId
);
define_id!(
    /// Identifier of a delivery option (`"1"`, `"2"`, ...).
    DeliveryOptionId
);
define_id!(
    /// Server-assigned order identifier.
    OrderId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("prod-123");
        assert_eq!(id.as_str(), "prod-123");
    }

    #[test]
    fn test_id_from_string() {
        let id: DeliveryOptionId = "2".into();
        assert_eq!(id.as_str(), "2");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProductId::new("e43638ce");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"e43638ce\"");

        let back: ProductId = serde_json::from_str("\"e43638ce\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_display() {
        let id = OrderId::new("ord-789");
        assert_eq!(format!("{}", id), "ord-789");
    }
}
