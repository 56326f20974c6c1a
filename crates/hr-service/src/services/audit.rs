//! Audit service
//!
//! The audit recorder plus the read side of the trail. Every mutation to
//! employees, departments, and status-change requests passes through here.
//! The recorder assigns the timestamp itself so all entity types share one
//! clock source, and it takes the actor explicitly rather than reading
//! ambient request context.
//!
//! An audit write is a second, non-atomic write after the primary mutation;
//! a failure here propagates as a hard error and is not retried.

use serde_json::Value as JsonValue;
use tracing::instrument;

use hr_core::audit::{DepartmentSnapshot, EmployeeSnapshot};
use hr_core::entities::{AuditAction, AuditLog, Department, Employee};
use hr_core::traits::AuditQuery;
use hr_core::value_objects::{Actor, AuditLogId, DepartmentId, EmployeeId};

use crate::dto::{AuditListParams, AuditLogResponse, PagedResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Audit table name for employee entries
pub const TABLE_EMPLOYEES: &str = "employees";
/// Audit table name for department entries
pub const TABLE_DEPARTMENTS: &str = "departments";
/// Audit table name for workflow entries
pub const TABLE_STATUS_CHANGE_REQUESTS: &str = "status_change_requests";

/// Audit service
pub struct AuditService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuditService<'a> {
    /// Create a new AuditService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Append a generic audit entry
    #[instrument(skip(self, actor, old_values, new_values, changes))]
    #[allow(clippy::too_many_arguments)]
    pub async fn record(
        &self,
        actor: &Actor,
        table_name: &str,
        action: AuditAction,
        record_id: Option<i64>,
        old_values: Option<JsonValue>,
        new_values: Option<JsonValue>,
        changes: Option<String>,
    ) -> ServiceResult<AuditLog> {
        let mut entry = AuditLog::new(
            table_name,
            action,
            record_id,
            old_values,
            new_values,
            changes,
            actor,
        );
        entry.id = self.ctx.audit_repo().create(&entry).await?;
        Ok(entry)
    }

    /// Record a mutation to an employee
    ///
    /// Both snapshots are serialized into the row whether or not anything
    /// differs; the human-readable summary is computed only for UPDATE with
    /// a prior state, and reads "No changes detected" when the states are
    /// field-equal.
    #[instrument(skip(self, actor, new, old))]
    pub async fn record_employee_change(
        &self,
        actor: &Actor,
        action: AuditAction,
        new: &Employee,
        old: Option<&Employee>,
    ) -> ServiceResult<AuditLog> {
        let new_snapshot = self.employee_snapshot(new).await?;
        let old_snapshot = match old {
            Some(old) => Some(self.employee_snapshot(old).await?),
            None => None,
        };

        let changes = match (&old_snapshot, action) {
            (Some(old_snapshot), AuditAction::Update) => {
                Some(old_snapshot.change_summary(&new_snapshot))
            }
            _ => None,
        };

        self.record(
            actor,
            TABLE_EMPLOYEES,
            action,
            Some(new.id.into_inner()),
            old_snapshot.map(serde_json::to_value).transpose()?,
            Some(serde_json::to_value(&new_snapshot)?),
            changes,
        )
        .await
    }

    /// Record a mutation to a department (Name is the only tracked field)
    #[instrument(skip(self, actor, new, old))]
    pub async fn record_department_change(
        &self,
        actor: &Actor,
        action: AuditAction,
        new: &Department,
        old: Option<&Department>,
    ) -> ServiceResult<AuditLog> {
        let new_snapshot = DepartmentSnapshot::of(&new.name);
        let old_snapshot = old.map(|d| DepartmentSnapshot::of(&d.name));

        let changes = match (&old_snapshot, action) {
            (Some(old_snapshot), AuditAction::Update) => {
                Some(old_snapshot.change_summary(&new_snapshot))
            }
            _ => None,
        };

        self.record(
            actor,
            TABLE_DEPARTMENTS,
            action,
            Some(new.id.into_inner()),
            old_snapshot.map(serde_json::to_value).transpose()?,
            Some(serde_json::to_value(&new_snapshot)?),
            changes,
        )
        .await
    }

    /// Filtered, paginated trail listing, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, params: AuditListParams) -> ServiceResult<PagedResponse<AuditLogResponse>> {
        let query = AuditQuery::from(params);
        let page = self.ctx.audit_repo().list(&query).await?;
        let data = page.items.iter().map(AuditLogResponse::from).collect();
        Ok(PagedResponse::new(data, query.page, query.per_page, page.total))
    }

    /// One trail entry by id
    #[instrument(skip(self))]
    pub async fn get(&self, id: AuditLogId) -> ServiceResult<AuditLogResponse> {
        let entry = self
            .ctx
            .audit_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Audit log entry", id.to_string()))?;
        Ok(AuditLogResponse::from(&entry))
    }

    /// Project an employee onto its tracked fields with resolved names
    async fn employee_snapshot(&self, employee: &Employee) -> ServiceResult<EmployeeSnapshot> {
        let department_name = self.department_name(employee.department_id).await?;
        let line_manager_name = match employee.line_manager_id {
            Some(manager_id) => self.manager_name(manager_id).await?,
            None => None,
        };
        Ok(EmployeeSnapshot::of(employee, department_name, line_manager_name))
    }

    async fn department_name(&self, id: DepartmentId) -> ServiceResult<String> {
        Ok(self
            .ctx
            .department_repo()
            .find_by_id(id)
            .await?
            .map_or_else(|| "(unknown)".to_string(), |d| d.name))
    }

    async fn manager_name(&self, id: EmployeeId) -> ServiceResult<Option<String>> {
        Ok(self
            .ctx
            .employee_repo()
            .find_by_id(id)
            .await?
            .map(|e| e.full_name))
    }
}
