//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{
    audit, dashboard, departments, employees, health, org_chart, status_change,
};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(employee_routes())
        .merge(department_routes())
        .merge(status_change_routes())
        .merge(audit_routes())
        .merge(reporting_routes())
}

/// Employee routes
fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/employees", get(employees::list_employees))
        .route("/employees", post(employees::create_employee))
        .route("/employees/export", get(employees::export_employees))
        .route("/employees/:employee_id", get(employees::get_employee))
        .route("/employees/:employee_id", put(employees::update_employee))
        .route("/employees/:employee_id", delete(employees::delete_employee))
}

/// Department routes
fn department_routes() -> Router<AppState> {
    Router::new()
        .route("/departments", get(departments::list_departments))
        .route("/departments", post(departments::create_department))
        .route("/departments/:department_id", get(departments::get_department))
        .route("/departments/:department_id", put(departments::update_department))
        .route("/departments/:department_id", delete(departments::delete_department))
}

/// Status-change workflow routes
fn status_change_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/employees/:employee_id/status-changes",
            post(status_change::submit_request),
        )
        .route(
            "/employees/:employee_id/status-changes",
            get(status_change::request_history),
        )
        .route("/status-changes/pending", get(status_change::list_pending))
        .route(
            "/status-changes/:request_id/decision",
            post(status_change::decide_request),
        )
}

/// Audit trail routes (admin only)
fn audit_routes() -> Router<AppState> {
    Router::new()
        .route("/audit", get(audit::list_audit_logs))
        .route("/audit/export", get(audit::export_audit_logs))
        .route("/audit/:audit_log_id", get(audit::get_audit_log))
}

/// Org chart and dashboard routes
fn reporting_routes() -> Router<AppState> {
    Router::new()
        .route("/org-chart", get(org_chart::company_org_chart))
        .route(
            "/org-chart/departments/:department_id",
            get(org_chart::department_org_chart),
        )
        .route("/dashboard", get(dashboard::dashboard_summary))
}
