//! Typed record identifiers
//!
//! Each entity gets its own id newtype over the database BIGSERIAL value so
//! that an employee id cannot be passed where a department id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an id from a string fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseIdError;

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid record id")
    }
}

impl std::error::Error for ParseIdError {}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw database id
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Get the raw i64 value for database binding
            #[must_use]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>().map(Self).map_err(|_| ParseIdError)
            }
        }
    };
}

define_id!(
    /// Identifier for an [`crate::entities::Employee`]
    EmployeeId
);
define_id!(
    /// Identifier for a [`crate::entities::Department`]
    DepartmentId
);
define_id!(
    /// Identifier for a [`crate::entities::StatusChangeRequest`]
    RequestId
);
define_id!(
    /// Identifier for an [`crate::entities::AuditLog`] row
    AuditLogId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse_roundtrip() {
        let id = EmployeeId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!("42".parse::<EmployeeId>().unwrap(), id);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("not-a-number".parse::<DepartmentId>().is_err());
        assert!("".parse::<RequestId>().is_err());
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&EmployeeId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
