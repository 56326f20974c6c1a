//! Employee database model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for the employees table
///
/// Enum columns (employment_type, status) are stored as their stable text
/// tokens and parsed in the mapper.
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeModel {
    pub id: i64,
    pub employee_number: String,
    pub full_name: String,
    pub email: String,
    pub job_title: Option<String>,
    pub employment_type: String,
    pub date_hired: NaiveDate,
    pub date_of_birth: Option<NaiveDate>,
    pub salary: Decimal,
    pub gender: Option<String>,
    pub status: String,
    pub department_id: i64,
    pub line_manager_id: Option<i64>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub profile_picture_path: Option<String>,
    pub is_deleted: bool,
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
