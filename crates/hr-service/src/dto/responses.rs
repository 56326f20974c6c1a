//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Ids are plain
//! numbers; referenced entities additionally carry their display names.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value as JsonValue;

use hr_core::value_objects::{
    DepartmentId, EmployeeId, EmployeeStatus, EmploymentType, RequestId, RequestStatus,
};

// ============================================================================
// Common Response Types
// ============================================================================

/// Paginated response with page-number pagination
#[derive(Debug, Serialize)]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}

impl<T> PagedResponse<T> {
    pub fn new(data: Vec<T>, page: i64, per_page: i64, total: i64) -> Self {
        let total_pages = if per_page > 0 {
            (total + per_page - 1) / per_page
        } else {
            0
        };
        Self {
            data,
            pagination: PageMeta {
                page,
                per_page,
                total,
                total_pages,
            },
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PageMeta {
    /// 1-based page number
    pub page: i64,
    pub per_page: i64,
    /// Unpaginated total
    pub total: i64,
    pub total_pages: i64,
}

// ============================================================================
// Employee Responses
// ============================================================================

/// Employee record with resolved reference names
#[derive(Debug, Serialize)]
pub struct EmployeeResponse {
    pub id: EmployeeId,
    pub employee_number: String,
    pub full_name: String,
    pub email: String,
    pub job_title: Option<String>,
    pub employment_type: EmploymentType,
    pub date_hired: NaiveDate,
    pub date_of_birth: Option<NaiveDate>,
    pub salary: Decimal,
    pub gender: Option<String>,
    pub status: EmployeeStatus,
    pub department_id: DepartmentId,
    pub department_name: String,
    pub line_manager_id: Option<EmployeeId>,
    pub line_manager_name: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub profile_picture_path: Option<String>,
    /// Optimistic-concurrency token to send back on update
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Department Responses
// ============================================================================

/// Department record
#[derive(Debug, Serialize)]
pub struct DepartmentResponse {
    pub id: DepartmentId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Department record with its headcount
#[derive(Debug, Serialize)]
pub struct DepartmentDetailResponse {
    pub id: DepartmentId,
    pub name: String,
    pub employee_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Audit Responses
// ============================================================================

/// One audit trail entry
#[derive(Debug, Serialize)]
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
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Status Change Responses
// ============================================================================

/// One status-change request with the employee's display name
#[derive(Debug, Serialize)]
pub struct StatusChangeRequestResponse {
    pub id: RequestId,
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub from_status: EmployeeStatus,
    pub to_status: EmployeeStatus,
    pub reason: String,
    pub requested_by: String,
    pub requested_at: DateTime<Utc>,
    pub approved_by: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub status: RequestStatus,
    pub approval_comments: Option<String>,
}

// ============================================================================
// Org Chart Responses
// ============================================================================

/// One org-chart node in the flat projection
#[derive(Debug, Serialize)]
pub struct OrgChartNode {
    pub id: EmployeeId,
    pub name: String,
    pub title: String,
    pub department: String,
    pub manager: Option<EmployeeId>,
    pub employee_number: String,
    pub email: String,
    pub status: EmployeeStatus,
    pub profile_picture: Option<String>,
    pub direct_reports: i64,
}

/// The full org-chart projection
#[derive(Debug, Serialize)]
pub struct OrgChartResponse {
    pub nodes: Vec<OrgChartNode>,
    pub total_employees: i64,
    pub department_count: i64,
}

// ============================================================================
// Dashboard Responses
// ============================================================================

/// Headcount for one department
#[derive(Debug, Serialize)]
pub struct DepartmentCount {
    pub department: String,
    pub count: i64,
}

/// Employee count for one gender value
#[derive(Debug, Serialize)]
pub struct GenderCount {
    pub gender: String,
    pub count: i64,
}

/// Aggregate analytics for the dashboard
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub total_employees: i64,
    pub total_departments: i64,
    pub average_salary: Decimal,
    pub median_salary: Decimal,
    pub departments: Vec<DepartmentCount>,
    pub genders: Vec<GenderCount>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Per-dependency health flags
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: bool,
    pub redis: bool,
}

/// Readiness probe response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub checks: HealthChecks,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database: bool, redis: bool) -> Self {
        Self {
            status: if database && redis { "ready" } else { "degraded" },
            checks: HealthChecks { database, redis },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        let page = PagedResponse::new(vec![1, 2, 3], 1, 20, 41);
        assert_eq!(page.pagination.total_pages, 3);

        let page = PagedResponse::new(vec![1], 1, 20, 40);
        assert_eq!(page.pagination.total_pages, 2);
    }

    #[test]
    fn test_readiness_status() {
        assert_eq!(ReadinessResponse::ready(true, true).status, "ready");
        assert_eq!(ReadinessResponse::ready(true, false).status, "degraded");
    }
}
