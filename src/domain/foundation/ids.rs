//! Strongly-typed identifier value objects.
//!
//! Identifiers are opaque strings assigned by the backend (`"demo-event"`,
//! `"101-A-1"`, `"VIP Box 1"`, a UUID for groups). Any non-blank text is
//! accepted; the HTTP adapter percent-encodes ids it puts into paths.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

fn validate(field: &str, raw: &str) -> Result<(), ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    if let Some(c) = raw.chars().find(|c| c.is_control()) {
        return Err(ValidationError::invalid_format(
            field,
            format!("character {:?} is not allowed", c),
        ));
    }
    Ok(())
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates the identifier; blank text and control characters are rejected.
            pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
                let raw = raw.into();
                validate($field, &raw)?;
                Ok(Self(raw))
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of a ticketed event.
    EventId,
    "event_id"
);

string_id!(
    /// Identifier of a queue/checkout group.
    GroupId,
    "group_id"
);

string_id!(
    /// Identifier of a seating section.
    SectionId,
    "section_id"
);

string_id!(
    /// Identifier of a single seat (also used as the ticket id on lock).
    SeatId,
    "seat_id"
);

string_id!(
    /// Identifier of a buyer or watcher.
    BuyerId,
    "buyer_id"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_backend_style_identifiers() {
        assert_eq!(SeatId::new("101-A-1").unwrap().as_str(), "101-A-1");
        assert_eq!(EventId::new("demo-event").unwrap().to_string(), "demo-event");
        assert!(GroupId::new("7f0c0a52-7a2e-4b7e-9a38-1d8c4f0e2b11").is_ok());
    }

    #[test]
    fn rejects_empty_identifier() {
        let err = EventId::new("  ").unwrap_err();
        assert!(matches!(err, ValidationError::EmptyField { .. }));
        assert_eq!(err.field(), "event_id");
    }

    #[test]
    fn accepts_free_form_identifiers() {
        assert_eq!(SeatId::new("VIP Box 1").unwrap().as_str(), "VIP Box 1");
        assert!(SectionId::new("101/balcony").is_ok());
        assert!(GroupId::new("abc?x=1#frag").is_ok());
    }

    #[test]
    fn rejects_control_characters() {
        let err = SeatId::new("101-A\n1").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
        assert_eq!(err.field(), "seat_id");
    }

    #[test]
    fn parses_with_from_str() {
        let id: BuyerId = "demo-user-1".parse().unwrap();
        assert_eq!(id.as_str(), "demo-user-1");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = SeatId::new("201-C-2").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"201-C-2\"");
    }

    #[test]
    fn deserialization_validates() {
        let ok: Result<GroupId, _> = serde_json::from_str("\"g-1\"");
        assert!(ok.is_ok());

        let bad: Result<GroupId, _> = serde_json::from_str("\"\"");
        assert!(bad.is_err());
    }
}
