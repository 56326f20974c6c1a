//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. All read operations apply the soft-delete
//! standing filter unless documented otherwise.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::entities::{AuditLog, Department, Employee, StatusChangeRequest};
use crate::error::DomainError;
use crate::value_objects::{
    AuditLogId, DepartmentId, EmployeeId, EmployeeStatus, RequestId,
};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// One page of results plus the unpaginated total
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
}

/// Sort order for employee listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmployeeSort {
    #[default]
    NameAsc,
    NameDesc,
    DateHiredAsc,
    DateHiredDesc,
}

/// Filter, sort, and pagination options for employee listings
#[derive(Debug, Clone)]
pub struct EmployeeQuery {
    /// Substring match against full name or email
    pub search: Option<String>,
    pub department_id: Option<DepartmentId>,
    pub status: Option<EmployeeStatus>,
    pub sort: EmployeeSort,
    /// 1-based page number
    pub page: i64,
    pub per_page: i64,
}

impl Default for EmployeeQuery {
    fn default() -> Self {
        Self {
            search: None,
            department_id: None,
            status: None,
            sort: EmployeeSort::default(),
            page: 1,
            per_page: 20,
        }
    }
}

/// Per-department headcount with status breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentHeadcount {
    pub department: String,
    pub total: i64,
    pub active: i64,
    pub on_leave: i64,
    pub inactive: i64,
}

/// Substring filters over the audit trail, combined with AND
#[derive(Debug, Clone, Default)]
pub struct AuditFilter {
    pub user_name: Option<String>,
    pub table_name: Option<String>,
}

/// Filter plus pagination for audit listings
#[derive(Debug, Clone)]
pub struct AuditQuery {
    pub filter: AuditFilter,
    /// 1-based page number
    pub page: i64,
    pub per_page: i64,
}

impl Default for AuditQuery {
    fn default() -> Self {
        Self {
            filter: AuditFilter::default(),
            page: 1,
            per_page: 20,
        }
    }
}

// ============================================================================
// Employee Repository
// ============================================================================

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find a non-deleted employee by ID
    async fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;

    /// Filtered, sorted, paginated listing with the unpaginated total
    async fn list(&self, query: &EmployeeQuery) -> RepoResult<Page<Employee>>;

    /// All non-deleted employees (org chart, analytics, scheduled jobs)
    async fn list_all(&self) -> RepoResult<Vec<Employee>>;

    /// Check if an email is taken, optionally excluding one employee
    async fn email_exists(&self, email: &str, exclude: Option<EmployeeId>) -> RepoResult<bool>;

    /// Check if an employee number is taken, optionally excluding one employee
    async fn employee_number_exists(
        &self,
        number: &str,
        exclude: Option<EmployeeId>,
    ) -> RepoResult<bool>;

    /// (employee, manager) pairs over non-deleted employees, for the
    /// hierarchy guard
    async fn manager_pairs(&self) -> RepoResult<Vec<(EmployeeId, Option<EmployeeId>)>>;

    /// Insert a new employee, returning the assigned id
    async fn create(&self, employee: &Employee) -> RepoResult<EmployeeId>;

    /// Update an employee with an optimistic version check
    ///
    /// The row is matched on `(id, version)` and the version is incremented
    /// in the same statement; a version mismatch on a live row surfaces as
    /// [`DomainError::ConflictingUpdate`].
    async fn update(&self, employee: &Employee) -> RepoResult<()>;

    /// Update only the status field (approval workflow path)
    async fn update_status(&self, id: EmployeeId, status: EmployeeStatus) -> RepoResult<()>;

    /// Soft delete an employee
    async fn soft_delete(&self, id: EmployeeId) -> RepoResult<()>;

    /// Total non-deleted employees
    async fn count(&self) -> RepoResult<i64>;

    /// Headcount with status breakdown per department
    async fn headcount_by_department(&self) -> RepoResult<Vec<DepartmentHeadcount>>;

    /// Employee counts grouped by gender (None for unspecified)
    async fn count_by_gender(&self) -> RepoResult<Vec<(Option<String>, i64)>>;

    /// All salaries of non-deleted employees, for aggregate analytics
    async fn salaries(&self) -> RepoResult<Vec<Decimal>>;
}

// ============================================================================
// Department Repository
// ============================================================================

#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Find a department by ID
    async fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>>;

    /// List all departments ordered by name
    async fn list_all(&self) -> RepoResult<Vec<Department>>;

    /// Check if a department name is taken, optionally excluding one department
    async fn name_exists(&self, name: &str, exclude: Option<DepartmentId>) -> RepoResult<bool>;

    /// Insert a new department, returning the assigned id
    async fn create(&self, department: &Department) -> RepoResult<DepartmentId>;

    /// Update a department
    async fn update(&self, department: &Department) -> RepoResult<()>;

    /// Delete a department; fails with [`DomainError::DepartmentNotEmpty`]
    /// while employees are still assigned (restrict-on-delete)
    async fn delete(&self, id: DepartmentId) -> RepoResult<()>;

    /// Count of non-deleted employees assigned to the department
    async fn employee_count(&self, id: DepartmentId) -> RepoResult<i64>;
}

// ============================================================================
// Audit Log Repository
// ============================================================================

#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Append an entry; the audit trail is insert-only
    async fn create(&self, entry: &AuditLog) -> RepoResult<AuditLogId>;

    /// Find one entry by ID
    async fn find_by_id(&self, id: AuditLogId) -> RepoResult<Option<AuditLog>>;

    /// Filtered, paginated listing, newest first
    async fn list(&self, query: &AuditQuery) -> RepoResult<Page<AuditLog>>;

    /// The full filtered set, newest first, for export
    async fn list_filtered(&self, filter: &AuditFilter) -> RepoResult<Vec<AuditLog>>;
}

// ============================================================================
// Status Change Request Repository
// ============================================================================

#[async_trait]
pub trait StatusChangeRequestRepository: Send + Sync {
    /// Find a request by ID
    async fn find_by_id(&self, id: RequestId) -> RepoResult<Option<StatusChangeRequest>>;

    /// Check if the employee already has a pending request
    async fn has_pending(&self, employee_id: EmployeeId) -> RepoResult<bool>;

    /// Insert a new pending request, returning the assigned id
    ///
    /// The one-pending-per-employee rule is additionally enforced by a
    /// partial unique index; a lost check-then-act race surfaces as
    /// [`DomainError::DuplicatePendingRequest`].
    async fn create(&self, request: &StatusChangeRequest) -> RepoResult<RequestId>;

    /// All pending requests, oldest first
    async fn list_pending(&self) -> RepoResult<Vec<StatusChangeRequest>>;

    /// Full request history for one employee, newest first
    async fn find_by_employee(&self, employee_id: EmployeeId)
        -> RepoResult<Vec<StatusChangeRequest>>;

    /// Persist a decision taken on a pending request
    ///
    /// The row is matched on `(id, status = pending)`; zero rows affected
    /// on a live row surfaces as [`DomainError::RequestAlreadyDecided`].
    async fn record_decision(&self, request: &StatusChangeRequest) -> RepoResult<()>;
}
