//! Actor identity for audit attribution
//!
//! Audit operations take the acting identity as an explicit parameter rather
//! than reading ambient request context, which keeps the recorder pure and
//! testable. Mutations with no authenticated caller (background jobs, data
//! seeding) attribute to the `System` sentinel.

use serde::{Deserialize, Serialize};

/// Literal identity recorded when no authenticated actor is present
pub const SYSTEM_ACTOR: &str = "System";

/// The identity performing a mutation, as recorded in the audit trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub name: String,
}

impl Actor {
    /// Create an actor from an authenticated identity
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// The System sentinel used for unattended mutations
    #[must_use]
    pub fn system() -> Self {
        Self {
            id: SYSTEM_ACTOR.to_string(),
            name: SYSTEM_ACTOR.to_string(),
        }
    }

    /// Check whether this is the System sentinel
    #[must_use]
    pub fn is_system(&self) -> bool {
        self.id == SYSTEM_ACTOR
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::system()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_sentinel() {
        let actor = Actor::system();
        assert_eq!(actor.id, "System");
        assert_eq!(actor.name, "System");
        assert!(actor.is_system());
    }

    #[test]
    fn test_named_actor() {
        let actor = Actor::new("u-123", "Thandi Nkosi");
        assert!(!actor.is_system());
        assert_eq!(actor.name, "Thandi Nkosi");
    }
}
