//! Status-change workflow service
//!
//! The two-step request/approval state machine gating employee status
//! transitions. A request is created Pending and decided exactly once;
//! approval applies the status to the employee and both sides of the
//! decision land in the audit trail.

use tracing::{info, instrument};

use hr_core::entities::{AuditAction, StatusChangeRequest};
use hr_core::error::DomainError;
use hr_core::value_objects::{Actor, EmployeeId, RequestId};

use crate::dto::{
    DecideStatusChangeRequest, StatusChangeRequestResponse, SubmitStatusChangeRequest,
};

use super::audit::{AuditService, TABLE_STATUS_CHANGE_REQUESTS};
use super::context::ServiceContext;
use super::employee::EmployeeService;
use super::error::{ServiceError, ServiceResult};

/// Status-change workflow service
pub struct StatusChangeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatusChangeService<'a> {
    /// Create a new StatusChangeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit a new request for the employee's status to change
    ///
    /// Fails while another request for the same employee is still pending.
    /// The pre-check gives the friendly error; the partial unique index
    /// closes the race for concurrent submissions.
    #[instrument(skip(self, actor, request))]
    pub async fn submit(
        &self,
        actor: &Actor,
        employee_id: EmployeeId,
        request: SubmitStatusChangeRequest,
    ) -> ServiceResult<StatusChangeRequestResponse> {
        let employee = EmployeeService::new(self.ctx).load(employee_id).await?;

        if self.ctx.request_repo().has_pending(employee_id).await? {
            return Err(DomainError::DuplicatePendingRequest.into());
        }

        let mut entity = StatusChangeRequest::new(
            RequestId::new(0),
            employee_id,
            employee.status,
            request.to_status,
            request.reason,
            actor.name.clone(),
        );
        entity.id = self.ctx.request_repo().create(&entity).await?;
        info!(request_id = %entity.id, employee_id = %employee_id, "Status change requested");

        let message = format!(
            "Status change requested for {}: {} to {}. Reason: {}",
            employee.full_name, entity.from_status, entity.to_status, entity.reason
        );
        AuditService::new(self.ctx)
            .record(
                actor,
                TABLE_STATUS_CHANGE_REQUESTS,
                AuditAction::StatusChangeRequested,
                Some(entity.id.into_inner()),
                None,
                None,
                Some(message),
            )
            .await?;

        Ok(StatusChangeRequestResponse::from_entity(
            &entity,
            employee.full_name,
        ))
    }

    /// All requests awaiting a decision, oldest first
    #[instrument(skip(self))]
    pub async fn list_pending(&self) -> ServiceResult<Vec<StatusChangeRequestResponse>> {
        let requests = self.ctx.request_repo().list_pending().await?;
        let mut responses = Vec::with_capacity(requests.len());
        for request in &requests {
            responses.push(StatusChangeRequestResponse::from_entity(
                request,
                self.employee_name(request.employee_id).await?,
            ));
        }
        Ok(responses)
    }

    /// Decide a pending request
    ///
    /// Approval additionally applies the requested status to the employee
    /// and records a STATUS_CHANGE_APPROVED employee entry; rejection only
    /// closes the request. Either way the decision itself is audited. A
    /// request that has already been decided is rejected without touching
    /// anything.
    #[instrument(skip(self, actor, decision))]
    pub async fn decide(
        &self,
        actor: &Actor,
        request_id: RequestId,
        decision: DecideStatusChangeRequest,
    ) -> ServiceResult<StatusChangeRequestResponse> {
        let mut request = self
            .ctx
            .request_repo()
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| ServiceError::Domain(DomainError::RequestNotFound(request_id)))?;

        if !request.is_pending() {
            return Err(DomainError::RequestAlreadyDecided(request_id).into());
        }

        let mut employee = EmployeeService::new(self.ctx).load(request.employee_id).await?;

        if decision.approved {
            request.approve(actor.name.clone(), decision.comments.clone())?;
        } else {
            request.reject(actor.name.clone(), decision.comments.clone())?;
        }

        // The conditional UPDATE re-checks pending, so a concurrent
        // decision loses here rather than double-applying
        self.ctx.request_repo().record_decision(&request).await?;

        if decision.approved {
            let old_employee = employee.clone();
            employee.set_status(request.to_status);
            self.ctx
                .employee_repo()
                .update_status(employee.id, request.to_status)
                .await?;
            info!(
                employee_id = %employee.id,
                status = %request.to_status,
                "Status change applied"
            );

            AuditService::new(self.ctx)
                .record_employee_change(
                    actor,
                    AuditAction::StatusChangeApproved,
                    &employee,
                    Some(&old_employee),
                )
                .await?;
        }

        let (action, verdict) = if decision.approved {
            (AuditAction::StatusChangeApproved, "APPROVED")
        } else {
            (AuditAction::StatusChangeRejected, "REJECTED")
        };
        let mut message = format!(
            "Status change request {} for {}: {} to {}",
            verdict, employee.full_name, request.from_status, request.to_status
        );
        if let Some(comments) = request.approval_comments.as_deref() {
            if !comments.is_empty() {
                message.push_str(&format!(". Admin comments: {comments}"));
            }
        }
        AuditService::new(self.ctx)
            .record(
                actor,
                TABLE_STATUS_CHANGE_REQUESTS,
                action,
                Some(request.id.into_inner()),
                None,
                None,
                Some(message),
            )
            .await?;

        Ok(StatusChangeRequestResponse::from_entity(
            &request,
            employee.full_name,
        ))
    }

    /// Full request history for one employee, newest first
    #[instrument(skip(self))]
    pub async fn history(
        &self,
        employee_id: EmployeeId,
    ) -> ServiceResult<Vec<StatusChangeRequestResponse>> {
        let employee = EmployeeService::new(self.ctx).load(employee_id).await?;
        let requests = self.ctx.request_repo().find_by_employee(employee_id).await?;
        Ok(requests
            .iter()
            .map(|r| StatusChangeRequestResponse::from_entity(r, employee.full_name.clone()))
            .collect())
    }

    async fn employee_name(&self, id: EmployeeId) -> ServiceResult<String> {
        Ok(self
            .ctx
            .employee_repo()
            .find_by_id(id)
            .await?
            .map_or_else(|| "(unknown)".to_string(), |e| e.full_name))
    }
}
