//! Status-change request model -> entity mapper

use hr_core::entities::StatusChangeRequest;
use hr_core::error::DomainError;
use hr_core::value_objects::{EmployeeId, RequestId};

use crate::models::StatusChangeRequestModel;

use super::parse_token;

impl TryFrom<StatusChangeRequestModel> for StatusChangeRequest {
    type Error = DomainError;

    fn try_from(model: StatusChangeRequestModel) -> Result<Self, Self::Error> {
        Ok(StatusChangeRequest {
            id: RequestId::new(model.id),
            employee_id: EmployeeId::new(model.employee_id),
            from_status: parse_token("from_status", &model.from_status)?,
            to_status: parse_token("to_status", &model.to_status)?,
            reason: model.reason,
            requested_by: model.requested_by,
            requested_at: model.requested_at,
            approved_by: model.approved_by,
            approved_at: model.approved_at,
            status: parse_token("status", &model.status)?,
            approval_comments: model.approval_comments,
        })
    }
}
