//! Department service
//!
//! CRUD over departments with the bounded-staleness read-through cache of
//! the full list. Cache failures only cost a database read; they are logged
//! and never surfaced.

use tracing::{info, instrument, warn};

use hr_core::entities::{AuditAction, Department};
use hr_core::error::DomainError;
use hr_core::value_objects::{Actor, DepartmentId};

use crate::dto::{
    CreateDepartmentRequest, DepartmentDetailResponse, DepartmentResponse,
    UpdateDepartmentRequest,
};

use super::audit::AuditService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Department service
pub struct DepartmentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DepartmentService<'a> {
    /// Create a new DepartmentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all departments, read-through the cache
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<DepartmentResponse>> {
        let departments = self.cached_list().await?;
        Ok(departments.iter().map(DepartmentResponse::from).collect())
    }

    /// One department by id, with its headcount
    #[instrument(skip(self))]
    pub async fn get(&self, id: DepartmentId) -> ServiceResult<DepartmentDetailResponse> {
        let department = self.load(id).await?;
        let employee_count = self.ctx.department_repo().employee_count(id).await?;
        Ok(DepartmentDetailResponse::from_entity(&department, employee_count))
    }

    /// Create a department
    #[instrument(skip(self, actor, request))]
    pub async fn create(
        &self,
        actor: &Actor,
        request: CreateDepartmentRequest,
    ) -> ServiceResult<DepartmentResponse> {
        if self
            .ctx
            .department_repo()
            .name_exists(&request.name, None)
            .await?
        {
            return Err(DomainError::DepartmentNameExists.into());
        }

        let mut department = Department::new(DepartmentId::new(0), request.name);
        department.id = self.ctx.department_repo().create(&department).await?;
        info!(department_id = %department.id, "Department created");

        AuditService::new(self.ctx)
            .record_department_change(actor, AuditAction::Insert, &department, None)
            .await?;
        self.invalidate_cache().await;

        Ok(DepartmentResponse::from(&department))
    }

    /// Rename a department
    #[instrument(skip(self, actor, request))]
    pub async fn update(
        &self,
        actor: &Actor,
        id: DepartmentId,
        request: UpdateDepartmentRequest,
    ) -> ServiceResult<DepartmentResponse> {
        let old = self.load(id).await?;

        if self
            .ctx
            .department_repo()
            .name_exists(&request.name, Some(id))
            .await?
        {
            return Err(DomainError::DepartmentNameExists.into());
        }

        let mut updated = old.clone();
        updated.rename(request.name);
        self.ctx.department_repo().update(&updated).await?;
        info!(department_id = %id, "Department renamed");

        AuditService::new(self.ctx)
            .record_department_change(actor, AuditAction::Update, &updated, Some(&old))
            .await?;
        self.invalidate_cache().await;

        Ok(DepartmentResponse::from(&updated))
    }

    /// Delete a department; rejected while employees are still assigned
    #[instrument(skip(self, actor))]
    pub async fn delete(&self, actor: &Actor, id: DepartmentId) -> ServiceResult<()> {
        let department = self.load(id).await?;

        self.ctx.department_repo().delete(id).await?;
        info!(department_id = %id, "Department deleted");

        AuditService::new(self.ctx)
            .record_department_change(actor, AuditAction::Delete, &department, None)
            .await?;
        self.invalidate_cache().await;

        Ok(())
    }

    /// The department list, served from cache within the staleness window
    pub(crate) async fn cached_list(&self) -> ServiceResult<Vec<Department>> {
        match self.ctx.department_cache().get().await {
            Ok(Some(departments)) => return Ok(departments),
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Department cache read failed; falling back to database"),
        }

        let departments = self.ctx.department_repo().list_all().await?;

        if let Err(e) = self.ctx.department_cache().put(&departments).await {
            warn!(error = %e, "Department cache write failed");
        }

        Ok(departments)
    }

    async fn invalidate_cache(&self) {
        if let Err(e) = self.ctx.department_cache().invalidate().await {
            warn!(error = %e, "Department cache invalidation failed");
        }
    }

    async fn load(&self, id: DepartmentId) -> ServiceResult<Department> {
        self.ctx
            .department_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::Domain(DomainError::DepartmentNotFound(id)))
    }
}
