//! Strongly-typed ID wrappers for ledger entities

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Generates a UUID newtype that displays as `<prefix><first 8 hex digits>`
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.simple().to_string()[..8])
            }
        }
    };
}

define_id!(AccountId, "acc-");
define_id!(CategoryId, "cat-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let display = AccountId::new().to_string();
        assert!(display.starts_with("acc-"));
        assert_eq!(display.len(), 12);

        assert!(CategoryId::new().to_string().starts_with("cat-"));
    }

    #[test]
    fn test_ids_are_unique() {
        let id1 = AccountId::new();
        let id2 = id1;
        assert_eq!(id1, id2);
        assert_ne!(id1, AccountId::new());
    }

    #[test]
    fn test_id_serialization() {
        let id = CategoryId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
        assert!(!deserialized.as_uuid().is_nil());
    }
}
