//! Identifiers for quotes and checkout sessions
//!
//! Both are UUID v7, so ids sort by creation time in logs.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new time-ordered identifier
            pub fn new_v7() -> Self {
                Self(Uuid::now_v7())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }
    };
}

define_id!(QuoteId, "QTE");
define_id!(SessionId, "SES");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_prefix() {
        assert!(QuoteId::new_v7().to_string().starts_with("QTE-"));
        assert!(SessionId::new_v7().to_string().starts_with("SES-"));
    }

    #[test]
    fn test_ids_are_unique_and_time_ordered() {
        let first = QuoteId::new_v7();
        let second = QuoteId::new_v7();
        assert_ne!(first, second);
        assert_eq!(first.0.get_version_num(), 7);
    }

    #[test]
    fn test_serializes_as_bare_uuid() {
        let id = SessionId::new_v7();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.0));

        let back: SessionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
