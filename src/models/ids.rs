//! Strongly-typed ID wrappers for items and categories
//!
//! Newtype wrappers keep item and category ids from being mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
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

            /// Full hyphenated form, used in routes
            pub fn to_full_string(&self) -> String {
                self.0.to_string()
            }

            /// Whether `fragment` (with or without display prefix) is a prefix
            /// of the full UUID
            pub fn matches_prefix(&self, fragment: &str) -> bool {
                let fragment = fragment.strip_prefix($display_prefix).unwrap_or(fragment);
                !fragment.is_empty() && self.0.to_string().starts_with(&fragment.to_lowercase())
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
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(ItemId, "itm-");
define_id!(CategoryId, "cat-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = ItemId::new();
        let display = id.to_string();
        assert!(display.starts_with("itm-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_parse_full_and_prefixed() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: CategoryId = uuid_str.parse().unwrap();
        assert_eq!(id.to_full_string(), uuid_str);

        let prefixed: CategoryId = format!("cat-{}", uuid_str).parse().unwrap();
        assert_eq!(id, prefixed);
    }

    #[test]
    fn test_matches_prefix() {
        let id: ItemId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        assert!(id.matches_prefix("550e84"));
        assert!(id.matches_prefix("itm-550E8400"));
        assert!(!id.matches_prefix("itm-"));
        assert!(!id.matches_prefix("660e"));
    }

    #[test]
    fn test_serializes_as_plain_uuid() {
        let id = ItemId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.to_full_string()));
    }
}
