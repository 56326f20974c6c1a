//! Department handlers
//!
//! Endpoints for department CRUD.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use hr_core::value_objects::DepartmentId;
use hr_service::{
    CreateDepartmentRequest, DepartmentDetailResponse, DepartmentResponse, DepartmentService,
    UpdateDepartmentRequest,
};

use crate::extractors::{ActorIdentity, AdminActor, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// List all departments
///
/// GET /departments
pub async fn list_departments(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<DepartmentResponse>>> {
    let service = DepartmentService::new(state.service_context());
    let response = service.list().await?;
    Ok(Json(response))
}

/// Get one department with its headcount
///
/// GET /departments/{department_id}
pub async fn get_department(
    State(state): State<AppState>,
    Path(department_id): Path<i64>,
) -> ApiResult<Json<DepartmentDetailResponse>> {
    let service = DepartmentService::new(state.service_context());
    let response = service.get(DepartmentId::new(department_id)).await?;
    Ok(Json(response))
}

/// Create a department
///
/// POST /departments
pub async fn create_department(
    State(state): State<AppState>,
    ActorIdentity(actor): ActorIdentity,
    ValidatedJson(request): ValidatedJson<CreateDepartmentRequest>,
) -> ApiResult<(StatusCode, Json<DepartmentResponse>)> {
    let service = DepartmentService::new(state.service_context());
    let response = service.create(&actor, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Rename a department
///
/// PUT /departments/{department_id}
pub async fn update_department(
    State(state): State<AppState>,
    ActorIdentity(actor): ActorIdentity,
    Path(department_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateDepartmentRequest>,
) -> ApiResult<Json<DepartmentResponse>> {
    let service = DepartmentService::new(state.service_context());
    let response = service
        .update(&actor, DepartmentId::new(department_id), request)
        .await?;
    Ok(Json(response))
}

/// Delete a department (admin only, rejected while employees are assigned)
///
/// DELETE /departments/{department_id}
pub async fn delete_department(
    State(state): State<AppState>,
    AdminActor(actor): AdminActor,
    Path(department_id): Path<i64>,
) -> ApiResult<StatusCode> {
    let service = DepartmentService::new(state.service_context());
    service
        .delete(&actor, DepartmentId::new(department_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
