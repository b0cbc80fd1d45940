//! Strongly-typed ID wrappers for ledger entities
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time. IDs are random UUIDs, so they stay unique
//! for the lifetime of the document and are never reused after deletion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
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

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse an ID from a string
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(Uuid::parse_str(s)?))
            }

            /// Check whether a user-entered fragment identifies this ID: either
            /// the full UUID or a leading slice of it, with or without the
            /// display prefix.
            pub fn matches_fragment(&self, fragment: &str) -> bool {
                let fragment = fragment
                    .trim()
                    .strip_prefix($display_prefix)
                    .unwrap_or(fragment.trim());
                !fragment.is_empty()
                    && self.0.to_string().starts_with(&fragment.to_lowercase())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Try to parse the full UUID
                if let Ok(uuid) = Uuid::parse_str(s) {
                    return Ok(Self(uuid));
                }
                // Try stripping the display prefix
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(CategoryId, "cat-");
define_id!(TransactionId, "txn-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = CategoryId::new();
        assert!(!id.as_uuid().is_nil());
    }

    #[test]
    fn test_id_display() {
        let id = TransactionId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("txn-"));
        assert_eq!(display.len(), 12); // "txn-" + 8 chars
    }

    #[test]
    fn test_id_equality() {
        let id1 = CategoryId::new();
        let id2 = id1;
        assert_eq!(id1, id2);

        let id3 = CategoryId::new();
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_id_serialization() {
        let id = CategoryId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_id_parse_roundtrip() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = TransactionId::parse(uuid_str).unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);
    }

    #[test]
    fn test_matches_fragment() {
        let id = TransactionId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert!(id.matches_fragment("550e8400"));
        assert!(id.matches_fragment("txn-550e8400"));
        assert!(id.matches_fragment("550E8400"));
        assert!(id.matches_fragment("550e8400-e29b-41d4-a716-446655440000"));
        assert!(!id.matches_fragment("551"));
        assert!(!id.matches_fragment(""));
        assert!(!id.matches_fragment("txn-"));
    }

    #[test]
    fn test_from_str_strips_prefix() {
        let id: TransactionId = "txn-550e8400-e29b-41d4-a716-446655440000"
            .parse()
            .unwrap();
        assert_eq!(
            id.as_uuid().to_string(),
            "550e8400-e29b-41d4-a716-446655440000"
        );
    }
}
