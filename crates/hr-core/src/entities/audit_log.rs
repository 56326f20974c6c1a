//! Audit log entity - append-only change trail

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use std::fmt;
use std::str::FromStr;

use crate::value_objects::{Actor, AuditLogId};

/// Action recorded against an audit entry
///
/// The three CRUD actions plus the workflow-specific tags emitted by the
/// status-change approval flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    Insert,
    Update,
    Delete,
    StatusChangeRequested,
    StatusChangeApproved,
    StatusChangeRejected,
}

impl AuditAction {
    /// Token stored in the database and shown in listings
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::StatusChangeRequested => "STATUS_CHANGE_REQUESTED",
            Self::StatusChangeApproved => "STATUS_CHANGE_APPROVED",
            Self::StatusChangeRejected => "STATUS_CHANGE_REJECTED",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INSERT" => Ok(Self::Insert),
            "UPDATE" => Ok(Self::Update),
            "DELETE" => Ok(Self::Delete),
            "STATUS_CHANGE_REQUESTED" => Ok(Self::StatusChangeRequested),
            "STATUS_CHANGE_APPROVED" => Ok(Self::StatusChangeApproved),
            "STATUS_CHANGE_REJECTED" => Ok(Self::StatusChangeRejected),
            _ => Err(format!("Invalid audit action: {s}")),
        }
    }
}

/// One append-only audit trail entry
///
/// Rows are only ever inserted by the application; the timestamp is assigned
/// by the recorder at write time so all entity types share one clock source.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditLog {
    pub id: AuditLogId,
    pub table_name: String,
    pub action: AuditAction,
    pub record_id: Option<i64>,
    /// Serialized field-limited snapshot before the mutation
    pub old_values: Option<JsonValue>,
    /// Serialized field-limited snapshot after the mutation
    pub new_values: Option<JsonValue>,
    /// Human-readable change summary
    pub changes: Option<String>,
    pub user_id: String,
    pub user_name: String,
    pub timestamp: DateTime<Utc>,
}

impl AuditLog {
    /// Create a new entry attributed to the given actor, timestamped now
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        table_name: impl Into<String>,
        action: AuditAction,
        record_id: Option<i64>,
        old_values: Option<JsonValue>,
        new_values: Option<JsonValue>,
        changes: Option<String>,
        actor: &Actor,
    ) -> Self {
        Self {
            id: AuditLogId::new(0),
            table_name: table_name.into(),
            action,
            record_id,
            old_values,
            new_values,
            changes,
            user_id: actor.id.clone(),
            user_name: actor.name.clone(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_roundtrip() {
        for action in [
            AuditAction::Insert,
            AuditAction::Update,
            AuditAction::Delete,
            AuditAction::StatusChangeRequested,
            AuditAction::StatusChangeApproved,
            AuditAction::StatusChangeRejected,
        ] {
            assert_eq!(action.as_str().parse::<AuditAction>().unwrap(), action);
        }
    }

    #[test]
    fn test_new_attributes_actor() {
        let entry = AuditLog::new(
            "employees",
            AuditAction::Insert,
            Some(9),
            None,
            None,
            None,
            &Actor::system(),
        );
        assert_eq!(entry.user_id, "System");
        assert_eq!(entry.user_name, "System");
        assert_eq!(entry.table_name, "employees");
    }
}
