//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Request fixtures are
//! local mirror structs so the tests exercise the real wire format.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create department request
#[derive(Debug, Serialize)]
pub struct CreateDepartmentRequest {
    pub name: String,
}

impl CreateDepartmentRequest {
    pub fn unique() -> Self {
        Self {
            name: format!("Test Department {}", unique_suffix()),
        }
    }
}

/// Department response
#[derive(Debug, Deserialize)]
pub struct DepartmentResponse {
    pub id: i64,
    pub name: String,
}

/// Create employee request
#[derive(Debug, Clone, Serialize)]
pub struct CreateEmployeeRequest {
    pub employee_number: String,
    pub full_name: String,
    pub email: String,
    pub job_title: Option<String>,
    pub employment_type: String,
    pub date_hired: String,
    pub date_of_birth: Option<String>,
    pub salary: String,
    pub gender: Option<String>,
    pub department_id: i64,
    pub line_manager_id: Option<i64>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub profile_picture_path: Option<String>,
}

impl CreateEmployeeRequest {
    pub fn unique(department_id: i64) -> Self {
        let suffix = unique_suffix();
        Self {
            employee_number: format!("EMP-{suffix:05}"),
            full_name: format!("Test Employee {suffix}"),
            email: format!("employee{suffix}@example.com"),
            job_title: Some("Engineer".to_string()),
            employment_type: "permanent".to_string(),
            date_hired: "2022-01-10".to_string(),
            date_of_birth: Some("1990-09-12".to_string()),
            salary: "450000".to_string(),
            gender: None,
            department_id,
            line_manager_id: None,
            emergency_contact_name: None,
            emergency_contact_phone: None,
            profile_picture_path: None,
        }
    }

    pub fn with_manager(department_id: i64, manager_id: i64) -> Self {
        Self {
            line_manager_id: Some(manager_id),
            ..Self::unique(department_id)
        }
    }
}

/// Update employee request (full replacement + version token)
#[derive(Debug, Clone, Serialize)]
pub struct UpdateEmployeeRequest {
    pub employee_number: String,
    pub full_name: String,
    pub email: String,
    pub job_title: Option<String>,
    pub employment_type: String,
    pub date_hired: String,
    pub date_of_birth: Option<String>,
    pub salary: String,
    pub gender: Option<String>,
    pub department_id: i64,
    pub line_manager_id: Option<i64>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub profile_picture_path: Option<String>,
    pub version: i64,
}

impl UpdateEmployeeRequest {
    /// Build an update that changes nothing, from a fetched employee
    pub fn from_employee(e: &EmployeeResponse) -> Self {
        Self {
            employee_number: e.employee_number.clone(),
            full_name: e.full_name.clone(),
            email: e.email.clone(),
            job_title: e.job_title.clone(),
            employment_type: e.employment_type.clone(),
            date_hired: e.date_hired.clone(),
            date_of_birth: e.date_of_birth.clone(),
            salary: e.salary.clone(),
            gender: e.gender.clone(),
            department_id: e.department_id,
            line_manager_id: e.line_manager_id,
            emergency_contact_name: e.emergency_contact_name.clone(),
            emergency_contact_phone: e.emergency_contact_phone.clone(),
            profile_picture_path: e.profile_picture_path.clone(),
            version: e.version,
        }
    }
}

/// Employee response
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeResponse {
    pub id: i64,
    pub employee_number: String,
    pub full_name: String,
    pub email: String,
    pub job_title: Option<String>,
    pub employment_type: String,
    pub date_hired: String,
    pub date_of_birth: Option<String>,
    pub salary: String,
    pub gender: Option<String>,
    pub status: String,
    pub department_id: i64,
    pub department_name: String,
    pub line_manager_id: Option<i64>,
    pub line_manager_name: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub profile_picture_path: Option<String>,
    pub version: i64,
}

/// Submit status-change request
#[derive(Debug, Serialize)]
pub struct SubmitStatusChangeRequest {
    pub to_status: String,
    pub reason: String,
}

impl SubmitStatusChangeRequest {
    pub fn to_on_leave() -> Self {
        Self {
            to_status: "on_leave".to_string(),
            reason: "Planned parental leave starting soon".to_string(),
        }
    }
}

/// Decide status-change request
#[derive(Debug, Serialize)]
pub struct DecideStatusChangeRequest {
    pub approved: bool,
    pub comments: Option<String>,
}

/// Status-change request response
#[derive(Debug, Deserialize)]
pub struct StatusChangeRequestResponse {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub from_status: String,
    pub to_status: String,
    pub status: String,
    pub approved_by: Option<String>,
}

/// Paginated response wrapper
#[derive(Debug, Deserialize)]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}

/// Pagination metadata
#[derive(Debug, Deserialize)]
pub struct PageMeta {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
}

/// Audit log entry response
#[derive(Debug, Deserialize)]
pub struct AuditLogResponse {
    pub id: i64,
    pub table_name: String,
    pub action: String,
    pub record_id: Option<i64>,
    pub old_values: Option<JsonValue>,
    pub new_values: Option<JsonValue>,
    pub changes: Option<String>,
    pub user_id: String,
    pub user_name: String,
}
