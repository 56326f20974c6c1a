//! Department database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the departments table
#[derive(Debug, Clone, FromRow)]
pub struct DepartmentModel {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
