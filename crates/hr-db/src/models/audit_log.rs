//! Audit log database model

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::FromRow;

/// Database model for the audit_logs table
#[derive(Debug, Clone, FromRow)]
pub struct AuditLogModel {
    pub id: i64,
    pub table_name: String,
    /// Audit action token, e.g. INSERT or STATUS_CHANGE_APPROVED
    pub action: String,
    pub record_id: Option<i64>,
    /// JSON snapshot before the mutation
    pub old_values: Option<JsonValue>,
    /// JSON snapshot after the mutation
    pub new_values: Option<JsonValue>,
    pub changes: Option<String>,
    pub user_id: String,
    pub user_name: String,
    pub timestamp: DateTime<Utc>,
}
