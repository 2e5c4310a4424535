//! Strongly-typed ID wrappers for all entity types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time.

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

            /// Create an ID from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Short display form, e.g. `txn-1a2b3c4d`
            pub fn short(&self) -> String {
                self.to_string()
            }

            /// Check whether `s` names this id, in short or full form,
            /// with or without the prefix
            pub fn matches(&self, s: &str) -> bool {
                let s = s.trim().to_ascii_lowercase();
                if s == self.short() {
                    return true;
                }
                s.parse::<Self>().is_ok_and(|id| id == *self)
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

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(TransactionId, "txn-");
define_id!(AccountId, "acc-");
define_id!(CategoryId, "cat-");
define_id!(CardId, "crd-");
define_id!(CardTypeId, "cty-");
define_id!(BankTypeId, "bnk-");
define_id!(AccountKindId, "akd-");
define_id!(UserId, "usr-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = AccountId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("acc-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_id_serialization() {
        let id = TransactionId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: TransactionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_id_parse() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: AccountId = uuid_str.parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);

        let prefixed: AccountId = format!("acc-{}", uuid_str).parse().unwrap();
        assert_eq!(prefixed, id);
    }

    #[test]
    fn test_short_form_does_not_parse() {
        let id = CardId::new();
        assert!(id.to_string().parse::<CardId>().is_err());
    }

    #[test]
    fn test_matches_short_and_full_forms() {
        let id = TransactionId::new();
        let full = id.as_uuid().to_string();

        assert!(id.matches(&id.short()));
        assert!(id.matches(&format!(" {} ", id.short().to_uppercase())));
        assert!(id.matches(&full));
        assert!(id.matches(&format!("txn-{}", full)));
        assert!(!id.matches("txn-00000000"));
        assert!(!TransactionId::new().matches(&full));
    }
}
