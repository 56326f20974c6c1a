//! Request DTOs for API endpoints
//!
//! All mutating request DTOs implement `Deserialize` and `Validate` for
//! input validation. Listing parameters are plain `Deserialize` structs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use hr_core::value_objects::{DepartmentId, EmployeeId, EmployeeStatus, EmploymentType};

// ============================================================================
// Employee Requests
// ============================================================================

/// Create employee request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 1, max = 30, message = "Employee number must be 1-30 characters"))]
    pub employee_number: String,

    #[validate(length(min = 1, max = 100, message = "Full name must be 1-100 characters"))]
    pub full_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(max = 100, message = "Job title must be at most 100 characters"))]
    pub job_title: Option<String>,

    pub employment_type: EmploymentType,

    pub date_hired: NaiveDate,

    pub date_of_birth: Option<NaiveDate>,

    /// Annual salary; must not be negative (checked in the service, the
    /// validator crate has no decimal range rule)
    pub salary: Decimal,

    #[validate(length(max = 20, message = "Gender must be at most 20 characters"))]
    pub gender: Option<String>,

    /// Initial status, defaulting to active
    #[serde(default)]
    pub status: Option<EmployeeStatus>,

    pub department_id: DepartmentId,

    pub line_manager_id: Option<EmployeeId>,

    #[validate(length(max = 100, message = "Contact name must be at most 100 characters"))]
    pub emergency_contact_name: Option<String>,

    #[validate(length(max = 30, message = "Contact phone must be at most 30 characters"))]
    pub emergency_contact_phone: Option<String>,

    pub profile_picture_path: Option<String>,
}

/// Update employee request
///
/// A full replacement of the editable fields, mirroring the edit form:
/// optional fields that arrive as null are cleared. The version is the one
/// the caller loaded; a concurrent modification surfaces as a conflict.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateEmployeeRequest {
    #[validate(length(min = 1, max = 30, message = "Employee number must be 1-30 characters"))]
    pub employee_number: String,

    #[validate(length(min = 1, max = 100, message = "Full name must be 1-100 characters"))]
    pub full_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(max = 100, message = "Job title must be at most 100 characters"))]
    pub job_title: Option<String>,

    pub employment_type: EmploymentType,

    pub date_hired: NaiveDate,

    pub date_of_birth: Option<NaiveDate>,

    pub salary: Decimal,

    #[validate(length(max = 20, message = "Gender must be at most 20 characters"))]
    pub gender: Option<String>,

    pub department_id: DepartmentId,

    pub line_manager_id: Option<EmployeeId>,

    #[validate(length(max = 100, message = "Contact name must be at most 100 characters"))]
    pub emergency_contact_name: Option<String>,

    #[validate(length(max = 30, message = "Contact phone must be at most 30 characters"))]
    pub emergency_contact_phone: Option<String>,

    pub profile_picture_path: Option<String>,

    /// Optimistic-concurrency token from the loaded record
    pub version: i64,
}

/// Employee listing query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeListParams {
    /// Substring match against name or email
    pub search: Option<String>,
    pub department_id: Option<DepartmentId>,
    pub status: Option<EmployeeStatus>,
    /// One of: name, name_desc, date, date_desc
    pub sort: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

// ============================================================================
// Department Requests
// ============================================================================

/// Create department request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDepartmentRequest {
    #[validate(length(min = 1, max = 100, message = "Department name must be 1-100 characters"))]
    pub name: String,
}

/// Update department request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateDepartmentRequest {
    #[validate(length(min = 1, max = 100, message = "Department name must be 1-100 characters"))]
    pub name: String,
}

// ============================================================================
// Status Change Requests
// ============================================================================

/// Submit a status-change request for approval
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitStatusChangeRequest {
    pub to_status: EmployeeStatus,

    #[validate(length(min = 10, max = 500, message = "Reason must be 10-500 characters"))]
    pub reason: String,
}

/// Decide a pending status-change request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DecideStatusChangeRequest {
    pub approved: bool,

    #[validate(length(max = 500, message = "Comments must be at most 500 characters"))]
    pub comments: Option<String>,
}

// ============================================================================
// Audit Requests
// ============================================================================

/// Audit trail listing query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditListParams {
    /// Substring match against the actor name
    pub user: Option<String>,
    /// Substring match against the table name
    pub table: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
