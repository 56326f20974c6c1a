//! Entity to DTO mappers
//!
//! Conversions from domain entities to response DTOs, plus listing-parameter
//! conversions. Responses that carry resolved display names take them as
//! explicit arguments.

use hr_core::entities::{AuditLog, Department, Employee, StatusChangeRequest};
use hr_core::traits::{AuditFilter, AuditQuery, EmployeeQuery, EmployeeSort};

use super::requests::{AuditListParams, EmployeeListParams};
use super::responses::{
    AuditLogResponse, DepartmentDetailResponse, DepartmentResponse, EmployeeResponse,
    StatusChangeRequestResponse,
};

/// Smallest allowed page size
const MIN_PER_PAGE: i64 = 1;
/// Largest allowed page size
const MAX_PER_PAGE: i64 = 100;
/// Default page size
const DEFAULT_PER_PAGE: i64 = 20;

fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

fn clamp_per_page(per_page: Option<i64>) -> i64 {
    per_page
        .unwrap_or(DEFAULT_PER_PAGE)
        .clamp(MIN_PER_PAGE, MAX_PER_PAGE)
}

/// Parse the sort token used by the employee listing
fn parse_sort(token: Option<&str>) -> EmployeeSort {
    match token {
        Some("name_desc") => EmployeeSort::NameDesc,
        Some("date") => EmployeeSort::DateHiredAsc,
        Some("date_desc") => EmployeeSort::DateHiredDesc,
        _ => EmployeeSort::NameAsc,
    }
}

impl From<EmployeeListParams> for EmployeeQuery {
    fn from(params: EmployeeListParams) -> Self {
        EmployeeQuery {
            search: params.search.filter(|s| !s.trim().is_empty()),
            department_id: params.department_id,
            status: params.status,
            sort: parse_sort(params.sort.as_deref()),
            page: clamp_page(params.page),
            per_page: clamp_per_page(params.per_page),
        }
    }
}

impl From<&AuditListParams> for AuditFilter {
    fn from(params: &AuditListParams) -> Self {
        AuditFilter {
            user_name: params.user.clone().filter(|s| !s.trim().is_empty()),
            table_name: params.table.clone().filter(|s| !s.trim().is_empty()),
        }
    }
}

impl From<AuditListParams> for AuditQuery {
    fn from(params: AuditListParams) -> Self {
        AuditQuery {
            filter: AuditFilter::from(&params),
            page: clamp_page(params.page),
            per_page: clamp_per_page(params.per_page),
        }
    }
}

impl EmployeeResponse {
    /// Build a response from an entity plus its resolved reference names
    pub fn from_entity(
        employee: &Employee,
        department_name: String,
        line_manager_name: Option<String>,
    ) -> Self {
        Self {
            id: employee.id,
            employee_number: employee.employee_number.clone(),
            full_name: employee.full_name.clone(),
            email: employee.email.clone(),
            job_title: employee.job_title.clone(),
            employment_type: employee.employment_type,
            date_hired: employee.date_hired,
            date_of_birth: employee.date_of_birth,
            salary: employee.salary,
            gender: employee.gender.clone(),
            status: employee.status,
            department_id: employee.department_id,
            department_name,
            line_manager_id: employee.line_manager_id,
            line_manager_name,
            emergency_contact_name: employee.emergency_contact_name.clone(),
            emergency_contact_phone: employee.emergency_contact_phone.clone(),
            profile_picture_path: employee.profile_picture_path.clone(),
            version: employee.version,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}

impl From<&Department> for DepartmentResponse {
    fn from(department: &Department) -> Self {
        Self {
            id: department.id,
            name: department.name.clone(),
            created_at: department.created_at,
            updated_at: department.updated_at,
        }
    }
}

impl DepartmentDetailResponse {
    pub fn from_entity(department: &Department, employee_count: i64) -> Self {
        Self {
            id: department.id,
            name: department.name.clone(),
            employee_count,
            created_at: department.created_at,
            updated_at: department.updated_at,
        }
    }
}

impl From<&AuditLog> for AuditLogResponse {
    fn from(entry: &AuditLog) -> Self {
        Self {
            id: entry.id.into_inner(),
            table_name: entry.table_name.clone(),
            action: entry.action.to_string(),
            record_id: entry.record_id,
            old_values: entry.old_values.clone(),
            new_values: entry.new_values.clone(),
            changes: entry.changes.clone(),
            user_id: entry.user_id.clone(),
            user_name: entry.user_name.clone(),
            timestamp: entry.timestamp,
        }
    }
}

impl StatusChangeRequestResponse {
    /// Build a response from an entity plus the employee's display name
    pub fn from_entity(request: &StatusChangeRequest, employee_name: String) -> Self {
        Self {
            id: request.id,
            employee_id: request.employee_id,
            employee_name,
            from_status: request.from_status,
            to_status: request.to_status,
            reason: request.reason.clone(),
            requested_by: request.requested_by.clone(),
            requested_at: request.requested_at,
            approved_by: request.approved_by.clone(),
            approved_at: request.approved_at,
            status: request.status,
            approval_comments: request.approval_comments.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_token_parsing() {
        assert_eq!(parse_sort(None), EmployeeSort::NameAsc);
        assert_eq!(parse_sort(Some("name_desc")), EmployeeSort::NameDesc);
        assert_eq!(parse_sort(Some("date")), EmployeeSort::DateHiredAsc);
        assert_eq!(parse_sort(Some("date_desc")), EmployeeSort::DateHiredDesc);
        assert_eq!(parse_sort(Some("bogus")), EmployeeSort::NameAsc);
    }

    #[test]
    fn test_page_clamping() {
        let query = EmployeeQuery::from(EmployeeListParams {
            page: Some(0),
            per_page: Some(500),
            ..EmployeeListParams::default()
        });
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 100);

        let query = EmployeeQuery::from(EmployeeListParams::default());
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 20);
    }

    #[test]
    fn test_blank_search_is_dropped() {
        let query = EmployeeQuery::from(EmployeeListParams {
            search: Some("   ".to_string()),
            ..EmployeeListParams::default()
        });
        assert!(query.search.is_none());
    }
}
