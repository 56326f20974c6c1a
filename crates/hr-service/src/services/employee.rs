//! Employee service
//!
//! CRUD and listing over employee records. Every mutation is audit-logged;
//! manager reassignments are validated against the hierarchy guard before
//! anything is persisted.

use std::collections::HashMap;

use tracing::{info, instrument};

use hr_core::entities::{AuditAction, Employee};
use hr_core::error::DomainError;
use hr_core::hierarchy::ManagerGraph;
use hr_core::traits::EmployeeQuery;
use hr_core::value_objects::{Actor, EmployeeId, EmployeeStatus};

use crate::dto::{
    CreateEmployeeRequest, EmployeeListParams, EmployeeResponse, PagedResponse,
    UpdateEmployeeRequest,
};

use super::audit::AuditService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Employee service
pub struct EmployeeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EmployeeService<'a> {
    /// Create a new EmployeeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Filtered, sorted, paginated listing
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        params: EmployeeListParams,
    ) -> ServiceResult<PagedResponse<EmployeeResponse>> {
        let query = EmployeeQuery::from(params);
        let page = self.ctx.employee_repo().list(&query).await?;

        let department_names = self.department_name_map().await?;
        let manager_names = self.manager_name_map(&page.items).await?;

        let data = page
            .items
            .iter()
            .map(|e| {
                EmployeeResponse::from_entity(
                    e,
                    department_names
                        .get(&e.department_id.into_inner())
                        .cloned()
                        .unwrap_or_else(|| "(unknown)".to_string()),
                    e.line_manager_id
                        .and_then(|m| manager_names.get(&m).cloned()),
                )
            })
            .collect();

        Ok(PagedResponse::new(data, query.page, query.per_page, page.total))
    }

    /// One employee by id
    #[instrument(skip(self))]
    pub async fn get(&self, id: EmployeeId) -> ServiceResult<EmployeeResponse> {
        let employee = self.load(id).await?;
        self.respond(&employee).await
    }

    /// Create a new employee
    #[instrument(skip(self, actor, request))]
    pub async fn create(
        &self,
        actor: &Actor,
        request: CreateEmployeeRequest,
    ) -> ServiceResult<EmployeeResponse> {
        if request.salary.is_sign_negative() {
            return Err(DomainError::NegativeSalary.into());
        }

        // Referential checks before anything is written
        self.ensure_department(request.department_id.into_inner())
            .await?;
        if let Some(manager_id) = request.line_manager_id {
            self.load(manager_id).await?;
        }
        if self
            .ctx
            .employee_repo()
            .email_exists(&request.email, None)
            .await?
        {
            return Err(DomainError::EmailAlreadyExists.into());
        }
        if self
            .ctx
            .employee_repo()
            .employee_number_exists(&request.employee_number, None)
            .await?
        {
            return Err(DomainError::EmployeeNumberExists.into());
        }

        let mut employee = Employee::new(
            EmployeeId::new(0),
            request.employee_number,
            request.full_name,
            request.email,
            request.employment_type,
            request.date_hired,
            request.salary,
            request.department_id,
        );
        employee.job_title = request.job_title;
        employee.date_of_birth = request.date_of_birth;
        employee.gender = request.gender;
        employee.status = request.status.unwrap_or(EmployeeStatus::Active);
        employee.line_manager_id = request.line_manager_id;
        employee.emergency_contact_name = request.emergency_contact_name;
        employee.emergency_contact_phone = request.emergency_contact_phone;
        employee.profile_picture_path = request.profile_picture_path;

        employee.id = self.ctx.employee_repo().create(&employee).await?;
        info!(employee_id = %employee.id, "Employee created");

        AuditService::new(self.ctx)
            .record_employee_change(actor, AuditAction::Insert, &employee, None)
            .await?;

        self.respond(&employee).await
    }

    /// Update an employee
    ///
    /// The request carries the version the caller loaded; a concurrent
    /// modification surfaces as a conflict and nothing is re-applied. A
    /// manager change is validated against the current manager graph first
    /// and the whole update is rejected on a cycle.
    #[instrument(skip(self, actor, request))]
    pub async fn update(
        &self,
        actor: &Actor,
        id: EmployeeId,
        request: UpdateEmployeeRequest,
    ) -> ServiceResult<EmployeeResponse> {
        let old = self.load(id).await?;

        if request.salary.is_sign_negative() {
            return Err(DomainError::NegativeSalary.into());
        }
        self.ensure_department(request.department_id.into_inner())
            .await?;

        if request.line_manager_id != old.line_manager_id {
            if let Some(manager_id) = request.line_manager_id {
                self.load(manager_id).await?;
                let graph =
                    ManagerGraph::from_pairs(self.ctx.employee_repo().manager_pairs().await?);
                if graph.would_introduce_cycle(id, Some(manager_id)) {
                    return Err(DomainError::ManagerCycle {
                        employee: id,
                        manager: manager_id,
                    }
                    .into());
                }
            }
        }

        if self
            .ctx
            .employee_repo()
            .email_exists(&request.email, Some(id))
            .await?
        {
            return Err(DomainError::EmailAlreadyExists.into());
        }
        if self
            .ctx
            .employee_repo()
            .employee_number_exists(&request.employee_number, Some(id))
            .await?
        {
            return Err(DomainError::EmployeeNumberExists.into());
        }

        let mut updated = old.clone();
        updated.employee_number = request.employee_number;
        updated.full_name = request.full_name;
        updated.email = request.email;
        updated.job_title = request.job_title;
        updated.employment_type = request.employment_type;
        updated.date_hired = request.date_hired;
        updated.date_of_birth = request.date_of_birth;
        updated.salary = request.salary;
        updated.gender = request.gender;
        updated.department_id = request.department_id;
        updated.line_manager_id = request.line_manager_id;
        updated.emergency_contact_name = request.emergency_contact_name;
        updated.emergency_contact_phone = request.emergency_contact_phone;
        updated.profile_picture_path = request.profile_picture_path;
        // Compare against the version the caller loaded, not the row we
        // just read, so an interleaved write is still detected
        updated.version = request.version;

        self.ctx.employee_repo().update(&updated).await?;
        updated.version += 1;
        info!(employee_id = %id, "Employee updated");

        AuditService::new(self.ctx)
            .record_employee_change(actor, AuditAction::Update, &updated, Some(&old))
            .await?;

        self.respond(&updated).await
    }

    /// Soft delete an employee
    #[instrument(skip(self, actor))]
    pub async fn delete(&self, actor: &Actor, id: EmployeeId) -> ServiceResult<()> {
        let employee = self.load(id).await?;

        self.ctx.employee_repo().soft_delete(id).await?;
        info!(employee_id = %id, "Employee soft-deleted");

        AuditService::new(self.ctx)
            .record_employee_change(actor, AuditAction::Delete, &employee, None)
            .await?;

        Ok(())
    }

    /// Load an employee entity or fail with not-found
    pub(crate) async fn load(&self, id: EmployeeId) -> ServiceResult<Employee> {
        self.ctx
            .employee_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::Domain(DomainError::EmployeeNotFound(id)))
    }

    async fn ensure_department(&self, id: i64) -> ServiceResult<()> {
        let department_id = hr_core::DepartmentId::new(id);
        self.ctx
            .department_repo()
            .find_by_id(department_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::DepartmentNotFound(
                department_id,
            )))?;
        Ok(())
    }

    async fn respond(&self, employee: &Employee) -> ServiceResult<EmployeeResponse> {
        let department_name = self
            .ctx
            .department_repo()
            .find_by_id(employee.department_id)
            .await?
            .map_or_else(|| "(unknown)".to_string(), |d| d.name);
        let line_manager_name = match employee.line_manager_id {
            Some(manager_id) => self
                .ctx
                .employee_repo()
                .find_by_id(manager_id)
                .await?
                .map(|m| m.full_name),
            None => None,
        };
        Ok(EmployeeResponse::from_entity(
            employee,
            department_name,
            line_manager_name,
        ))
    }

    async fn department_name_map(&self) -> ServiceResult<HashMap<i64, String>> {
        Ok(self
            .ctx
            .department_repo()
            .list_all()
            .await?
            .into_iter()
            .map(|d| (d.id.into_inner(), d.name))
            .collect())
    }

    async fn manager_name_map(
        &self,
        employees: &[Employee],
    ) -> ServiceResult<HashMap<EmployeeId, String>> {
        let mut names = HashMap::new();
        for manager_id in employees.iter().filter_map(|e| e.line_manager_id) {
            if names.contains_key(&manager_id) {
                continue;
            }
            if let Some(manager) = self.ctx.employee_repo().find_by_id(manager_id).await? {
                names.insert(manager_id, manager.full_name);
            }
        }
        Ok(names)
    }
}
