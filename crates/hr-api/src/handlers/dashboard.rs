//! Dashboard handlers

use axum::{extract::State, Json};
use hr_service::{DashboardResponse, DashboardService};

use crate::response::ApiResult;
use crate::state::AppState;

/// Aggregate analytics summary
///
/// GET /dashboard
pub async fn dashboard_summary(
    State(state): State<AppState>,
) -> ApiResult<Json<DashboardResponse>> {
    let service = DashboardService::new(state.service_context());
    let response = service.summary().await?;
    Ok(Json(response))
}
