//! Status-change request database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the status_change_requests table
#[derive(Debug, Clone, FromRow)]
pub struct StatusChangeRequestModel {
    pub id: i64,
    pub employee_id: i64,
    pub from_status: String,
    pub to_status: String,
    pub reason: String,
    pub requested_by: String,
    pub requested_at: DateTime<Utc>,
    pub approved_by: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub status: String,
    pub approval_comments: Option<String>,
}
