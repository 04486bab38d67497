//! Strongly-typed ID wrappers for the three entity collections
//!
//! Categories, accounts and transactions each get their own UUID newtype so a
//! transaction's account reference can never be handed a category ID.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Length of the UUID prefix shown after the entity tag (e.g. `acc-1a2b3c4d`)
const SHORT_LEN: usize = 8;

macro_rules! define_id {
    ($name:ident, $tag:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// The tagged short form used in listings, e.g. `acc-1a2b3c4d`
            pub fn short(&self) -> String {
                format!("{}{}", $tag, &self.0.simple().to_string()[..SHORT_LEN])
            }

            /// Whether `s` names this ID, either as a full UUID (optionally
            /// tagged) or as the short form printed by [`Self::short`]
            pub fn matches(&self, s: &str) -> bool {
                let s = s.trim();
                if let Ok(parsed) = s.parse::<Self>() {
                    return parsed == *self;
                }
                let bare = s.strip_prefix($tag).unwrap_or(s).to_lowercase();
                bare.len() >= SHORT_LEN && self.0.simple().to_string().starts_with(&bare)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.short())
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
                let s = s.strip_prefix($tag).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(CategoryId, "cat-");
define_id!(AccountId, "acc-");
define_id!(TransactionId, "txn-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_form() {
        let id = AccountId::new();
        let short = id.short();
        assert!(short.starts_with("acc-"));
        assert_eq!(short.len(), 12);
        assert_eq!(format!("{}", id), short);
    }

    #[test]
    fn test_parse_full_and_tagged() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let plain: CategoryId = uuid_str.parse().unwrap();
        let tagged: CategoryId = format!("cat-{}", uuid_str).parse().unwrap();
        assert_eq!(plain, tagged);
        assert_eq!(plain.as_uuid().to_string(), uuid_str);
    }

    #[test]
    fn test_matches_short_and_full() {
        let id = TransactionId::new();
        assert!(id.matches(&id.short()));
        assert!(id.matches(&id.as_uuid().to_string()));
        assert!(!id.matches("txn-"));
        assert!(!id.matches(&TransactionId::new().short()));
    }

    #[test]
    fn test_serialization_is_bare_uuid() {
        let id = AccountId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
        let back: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
