//! Org chart handlers

use axum::{
    extract::{Path, State},
    Json,
};
use hr_core::value_objects::DepartmentId;
use hr_service::{OrgChartResponse, OrgChartService};

use crate::response::ApiResult;
use crate::state::AppState;

/// Company-wide org chart projection
///
/// GET /org-chart
pub async fn company_org_chart(
    State(state): State<AppState>,
) -> ApiResult<Json<OrgChartResponse>> {
    let service = OrgChartService::new(state.service_context());
    let response = service.company().await?;
    Ok(Json(response))
}

/// Org chart projection for one department
///
/// GET /org-chart/departments/{department_id}
pub async fn department_org_chart(
    State(state): State<AppState>,
    Path(department_id): Path<i64>,
) -> ApiResult<Json<OrgChartResponse>> {
    let service = OrgChartService::new(state.service_context());
    let response = service.department(DepartmentId::new(department_id)).await?;
    Ok(Json(response))
}
