//! Status-change workflow handlers
//!
//! Submission is open to any authenticated caller; the pending queue and
//! decisions are admin only.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use hr_core::value_objects::{EmployeeId, RequestId};
use hr_service::{
    DecideStatusChangeRequest, StatusChangeRequestResponse, StatusChangeService,
    SubmitStatusChangeRequest,
};

use crate::extractors::{ActorIdentity, AdminActor, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Submit a status-change request for an employee
///
/// POST /employees/{employee_id}/status-changes
pub async fn submit_request(
    State(state): State<AppState>,
    ActorIdentity(actor): ActorIdentity,
    Path(employee_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<SubmitStatusChangeRequest>,
) -> ApiResult<(StatusCode, Json<StatusChangeRequestResponse>)> {
    let service = StatusChangeService::new(state.service_context());
    let response = service
        .submit(&actor, EmployeeId::new(employee_id), request)
        .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Status-change history for an employee, newest first
///
/// GET /employees/{employee_id}/status-changes
pub async fn request_history(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
) -> ApiResult<Json<Vec<StatusChangeRequestResponse>>> {
    let service = StatusChangeService::new(state.service_context());
    let response = service.history(EmployeeId::new(employee_id)).await?;
    Ok(Json(response))
}

/// All pending requests, oldest first (admin only)
///
/// GET /status-changes/pending
pub async fn list_pending(
    State(state): State<AppState>,
    AdminActor(_actor): AdminActor,
) -> ApiResult<Json<Vec<StatusChangeRequestResponse>>> {
    let service = StatusChangeService::new(state.service_context());
    let response = service.list_pending().await?;
    Ok(Json(response))
}

/// Approve or reject a pending request (admin only)
///
/// POST /status-changes/{request_id}/decision
pub async fn decide_request(
    State(state): State<AppState>,
    AdminActor(actor): AdminActor,
    Path(request_id): Path<i64>,
    ValidatedJson(decision): ValidatedJson<DecideStatusChangeRequest>,
) -> ApiResult<Json<StatusChangeRequestResponse>> {
    let service = StatusChangeService::new(state.service_context());
    let response = service
        .decide(&actor, RequestId::new(request_id), decision)
        .await?;
    Ok(Json(response))
}
