//! Audit trail handlers
//!
//! Read-only endpoints over the append-only trail, admin only.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use hr_core::traits::AuditFilter;
use hr_core::value_objects::AuditLogId;
use hr_service::{AuditListParams, AuditLogResponse, AuditService, PagedResponse, ReportService};

use crate::extractors::AdminActor;
use crate::response::{ApiResult, CsvDownload};
use crate::state::AppState;

/// Filtered, paginated audit trail, newest first
///
/// GET /audit
pub async fn list_audit_logs(
    State(state): State<AppState>,
    AdminActor(_actor): AdminActor,
    Query(params): Query<AuditListParams>,
) -> ApiResult<Json<PagedResponse<AuditLogResponse>>> {
    let service = AuditService::new(state.service_context());
    let response = service.list(params).await?;
    Ok(Json(response))
}

/// One audit trail entry
///
/// GET /audit/{audit_log_id}
pub async fn get_audit_log(
    State(state): State<AppState>,
    AdminActor(_actor): AdminActor,
    Path(audit_log_id): Path<i64>,
) -> ApiResult<Json<AuditLogResponse>> {
    let service = AuditService::new(state.service_context());
    let response = service.get(AuditLogId::new(audit_log_id)).await?;
    Ok(Json(response))
}

/// Download the filtered audit trail as CSV
///
/// GET /audit/export
pub async fn export_audit_logs(
    State(state): State<AppState>,
    AdminActor(_actor): AdminActor,
    Query(params): Query<AuditListParams>,
) -> ApiResult<CsvDownload> {
    let filter = AuditFilter::from(&params);
    let service = ReportService::new(state.service_context());
    let content = service.audit_csv(&filter).await?;
    Ok(CsvDownload::new("audit-log.csv", content))
}
