//! Employee handlers
//!
//! Endpoints for employee CRUD, listing, and the CSV export.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use hr_core::value_objects::EmployeeId;
use hr_service::{
    CreateEmployeeRequest, EmployeeListParams, EmployeeResponse, EmployeeService, PagedResponse,
    ReportService, UpdateEmployeeRequest,
};

use crate::extractors::{ActorIdentity, AdminActor, ValidatedJson};
use crate::response::{ApiResult, CsvDownload};
use crate::state::AppState;

/// List employees with search, filters, sorting, and pagination
///
/// GET /employees
pub async fn list_employees(
    State(state): State<AppState>,
    Query(params): Query<EmployeeListParams>,
) -> ApiResult<Json<PagedResponse<EmployeeResponse>>> {
    let service = EmployeeService::new(state.service_context());
    let response = service.list(params).await?;
    Ok(Json(response))
}

/// Get one employee
///
/// GET /employees/{employee_id}
pub async fn get_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
) -> ApiResult<Json<EmployeeResponse>> {
    let service = EmployeeService::new(state.service_context());
    let response = service.get(EmployeeId::new(employee_id)).await?;
    Ok(Json(response))
}

/// Create an employee
///
/// POST /employees
pub async fn create_employee(
    State(state): State<AppState>,
    ActorIdentity(actor): ActorIdentity,
    ValidatedJson(request): ValidatedJson<CreateEmployeeRequest>,
) -> ApiResult<(StatusCode, Json<EmployeeResponse>)> {
    let service = EmployeeService::new(state.service_context());
    let response = service.create(&actor, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Update an employee
///
/// PUT /employees/{employee_id}
pub async fn update_employee(
    State(state): State<AppState>,
    ActorIdentity(actor): ActorIdentity,
    Path(employee_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateEmployeeRequest>,
) -> ApiResult<Json<EmployeeResponse>> {
    let service = EmployeeService::new(state.service_context());
    let response = service
        .update(&actor, EmployeeId::new(employee_id), request)
        .await?;
    Ok(Json(response))
}

/// Soft delete an employee (admin only)
///
/// DELETE /employees/{employee_id}
pub async fn delete_employee(
    State(state): State<AppState>,
    AdminActor(actor): AdminActor,
    Path(employee_id): Path<i64>,
) -> ApiResult<StatusCode> {
    let service = EmployeeService::new(state.service_context());
    service.delete(&actor, EmployeeId::new(employee_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Download the employee list as CSV
///
/// GET /employees/export
pub async fn export_employees(State(state): State<AppState>) -> ApiResult<CsvDownload> {
    let service = ReportService::new(state.service_context());
    let content = service.employees_csv().await?;
    Ok(CsvDownload::new("employees.csv", content))
}
