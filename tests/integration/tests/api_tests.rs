//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

async fn create_department(server: &TestServer) -> DepartmentResponse {
    let request = CreateDepartmentRequest::unique();
    let response = server.post("/api/v1/departments", &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn create_employee(server: &TestServer, department_id: i64) -> EmployeeResponse {
    let request = CreateEmployeeRequest::unique(department_id);
    let response = server.post("/api/v1/employees", &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Employee CRUD Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_fetch_employee() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let department = create_department(&server).await;
    let employee = create_employee(&server, department.id).await;

    assert_eq!(employee.department_name, department.name);
    assert_eq!(employee.status, "active");
    assert_eq!(employee.version, 1);

    let response = server
        .get(&format!("/api/v1/employees/{}", employee.id))
        .await
        .unwrap();
    let fetched: EmployeeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.email, employee.email);
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let department = create_department(&server).await;

    let mut request = CreateEmployeeRequest::unique(department.id);
    let first = server.post("/api/v1/employees", &request).await.unwrap();
    assert_status(first, StatusCode::CREATED).await.unwrap();

    // Same email, fresh employee number
    request.employee_number = format!("EMP-{:05}", unique_suffix());
    let second = server.post("/api/v1/employees", &request).await.unwrap();
    assert_status(second, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_stale_version_update_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let department = create_department(&server).await;
    let employee = create_employee(&server, department.id).await;

    // First update succeeds and bumps the version
    let mut update = UpdateEmployeeRequest::from_employee(&employee);
    update.job_title = Some("Senior Engineer".to_string());
    let response = server
        .put(&format!("/api/v1/employees/{}", employee.id), &update)
        .await
        .unwrap();
    let updated: EmployeeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.version, employee.version + 1);

    // Replay with the stale version: surfaced as a conflict, not retried
    let response = server
        .put(&format!("/api/v1/employees/{}", employee.id), &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_delete_requires_admin_and_soft_deletes() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let department = create_department(&server).await;
    let employee = create_employee(&server, department.id).await;
    let path = format!("/api/v1/employees/{}", employee.id);

    // Non-admin delete is forbidden (no roles header on plain client)
    let response = server
        .client
        .delete(format!("{}{}", server.base_url(), path))
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_admin(&path).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Soft-deleted rows vanish from default reads
    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Hierarchy Guard Tests
// ============================================================================

#[tokio::test]
async fn test_direct_manager_cycle_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let department = create_department(&server).await;

    // e1 manages e2; assigning e1.manager = e2 closes the loop
    let e1 = create_employee(&server, department.id).await;
    let request = CreateEmployeeRequest::with_manager(department.id, e1.id);
    let response = server.post("/api/v1/employees", &request).await.unwrap();
    let e2: EmployeeResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(e2.line_manager_id, Some(e1.id));

    // Re-fetch e1 for the current version
    let response = server
        .get(&format!("/api/v1/employees/{}", e1.id))
        .await
        .unwrap();
    let e1: EmployeeResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let mut update = UpdateEmployeeRequest::from_employee(&e1);
    update.line_manager_id = Some(e2.id);
    let response = server
        .put(&format!("/api/v1/employees/{}", e1.id), &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // The rejected update must not have partially applied
    let response = server
        .get(&format!("/api/v1/employees/{}", e1.id))
        .await
        .unwrap();
    let unchanged: EmployeeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(unchanged.line_manager_id, None);
}

#[tokio::test]
async fn test_indirect_manager_cycle_rejected_and_unrelated_allowed() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let department = create_department(&server).await;

    // Chain: e1 reports to e2, e2 reports to e3
    let e3 = create_employee(&server, department.id).await;
    let request = CreateEmployeeRequest::with_manager(department.id, e3.id);
    let response = server.post("/api/v1/employees", &request).await.unwrap();
    let e2: EmployeeResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let request = CreateEmployeeRequest::with_manager(department.id, e2.id);
    let response = server.post("/api/v1/employees", &request).await.unwrap();
    let e1: EmployeeResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // e3.manager = e1 would make e3 its own ancestor
    let mut update = UpdateEmployeeRequest::from_employee(&e3);
    update.line_manager_id = Some(e1.id);
    let response = server
        .put(&format!("/api/v1/employees/{}", e3.id), &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // An unrelated manager is fine
    let e4 = create_employee(&server, department.id).await;
    let mut update = UpdateEmployeeRequest::from_employee(&e3);
    update.line_manager_id = Some(e4.id);
    let response = server
        .put(&format!("/api/v1/employees/{}", e3.id), &update)
        .await
        .unwrap();
    let updated: EmployeeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.line_manager_id, Some(e4.id));
}

// ============================================================================
// Status Change Workflow Tests
// ============================================================================

#[tokio::test]
async fn test_duplicate_pending_request_rejected_until_decided() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let department = create_department(&server).await;
    let employee = create_employee(&server, department.id).await;
    let path = format!("/api/v1/employees/{}/status-changes", employee.id);

    let submit = SubmitStatusChangeRequest::to_on_leave();
    let response = server.post(&path, &submit).await.unwrap();
    let request: StatusChangeRequestResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(request.status, "pending");
    assert_eq!(request.from_status, "active");

    // Second submission while the first is pending
    let response = server.post(&path, &submit).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // Decide the first; a new submission then succeeds
    let decision = DecideStatusChangeRequest {
        approved: false,
        comments: Some("Not this quarter".to_string()),
    };
    let response = server
        .post_admin(
            &format!("/api/v1/status-changes/{}/decision", request.id),
            &decision,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.post(&path, &submit).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_approval_applies_status_and_audits() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let department = create_department(&server).await;
    let employee = create_employee(&server, department.id).await;

    let response = server
        .post(
            &format!("/api/v1/employees/{}/status-changes", employee.id),
            &SubmitStatusChangeRequest::to_on_leave(),
        )
        .await
        .unwrap();
    let request: StatusChangeRequestResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let decision = DecideStatusChangeRequest {
        approved: true,
        comments: None,
    };
    let response = server
        .post_admin(
            &format!("/api/v1/status-changes/{}/decision", request.id),
            &decision,
        )
        .await
        .unwrap();
    let decided: StatusChangeRequestResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(decided.status, "approved");
    assert!(decided.approved_by.is_some());

    // The employee's status followed the approval
    let response = server
        .get(&format!("/api/v1/employees/{}", employee.id))
        .await
        .unwrap();
    let fetched: EmployeeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.status, "on_leave");

    // Exactly one STATUS_CHANGE_APPROVED employee entry landed in the trail
    let response = server
        .get_admin("/api/v1/audit?table=employees&per_page=100")
        .await
        .unwrap();
    let trail: PagedResponse<AuditLogResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    let approvals: Vec<_> = trail
        .data
        .iter()
        .filter(|e| e.action == "STATUS_CHANGE_APPROVED" && e.record_id == Some(employee.id))
        .collect();
    assert_eq!(approvals.len(), 1);

    // A decided request cannot be decided again
    let response = server
        .post_admin(
            &format!("/api/v1/status-changes/{}/decision", request.id),
            &decision,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_rejection_leaves_employee_untouched() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let department = create_department(&server).await;
    let employee = create_employee(&server, department.id).await;

    let response = server
        .post(
            &format!("/api/v1/employees/{}/status-changes", employee.id),
            &SubmitStatusChangeRequest::to_on_leave(),
        )
        .await
        .unwrap();
    let request: StatusChangeRequestResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let decision = DecideStatusChangeRequest {
        approved: false,
        comments: Some("Coverage is too thin".to_string()),
    };
    let response = server
        .post_admin(
            &format!("/api/v1/status-changes/{}/decision", request.id),
            &decision,
        )
        .await
        .unwrap();
    let decided: StatusChangeRequestResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(decided.status, "rejected");

    let response = server
        .get(&format!("/api/v1/employees/{}", employee.id))
        .await
        .unwrap();
    let fetched: EmployeeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.status, "active");

    // The rejection itself is in the trail
    let response = server
        .get_admin("/api/v1/audit?table=status_change_requests&per_page=100")
        .await
        .unwrap();
    let trail: PagedResponse<AuditLogResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    let rejections: Vec<_> = trail
        .data
        .iter()
        .filter(|e| e.action == "STATUS_CHANGE_REJECTED" && e.record_id == Some(request.id))
        .collect();
    assert_eq!(rejections.len(), 1);
}

// ============================================================================
// Audit Trail Tests
// ============================================================================

#[tokio::test]
async fn test_update_audit_entry_has_diff_summary() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let department = create_department(&server).await;
    let employee = create_employee(&server, department.id).await;

    let mut update = UpdateEmployeeRequest::from_employee(&employee);
    let old_name = employee.full_name.clone();
    update.full_name = format!("{old_name} Jr");
    let response = server
        .put(&format!("/api/v1/employees/{}", employee.id), &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_admin("/api/v1/audit?table=employees&per_page=100")
        .await
        .unwrap();
    let trail: PagedResponse<AuditLogResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    let entry = trail
        .data
        .iter()
        .find(|e| e.action == "UPDATE" && e.record_id == Some(employee.id))
        .expect("update entry missing");

    let changes = entry.changes.as_deref().unwrap();
    assert_eq!(changes, format!("Name: '{old_name}' to '{old_name} Jr'"));
    assert!(entry.old_values.is_some());
    assert!(entry.new_values.is_some());
    assert_eq!(entry.user_name, "Integration Admin");
}

#[tokio::test]
async fn test_no_change_update_records_no_changes_detected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let department = create_department(&server).await;
    let employee = create_employee(&server, department.id).await;

    let update = UpdateEmployeeRequest::from_employee(&employee);
    let response = server
        .put(&format!("/api/v1/employees/{}", employee.id), &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_admin("/api/v1/audit?table=employees&per_page=100")
        .await
        .unwrap();
    let trail: PagedResponse<AuditLogResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    let entry = trail
        .data
        .iter()
        .find(|e| e.action == "UPDATE" && e.record_id == Some(employee.id))
        .expect("update entry missing");
    assert_eq!(entry.changes.as_deref(), Some("No changes detected"));
}

#[tokio::test]
async fn test_audit_listing_requires_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/audit").await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Department Tests
// ============================================================================

#[tokio::test]
async fn test_department_restrict_on_delete() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let department = create_department(&server).await;
    let employee = create_employee(&server, department.id).await;
    let path = format!("/api/v1/departments/{}", department.id);

    // Still staffed: delete is rejected
    let response = server.delete_admin(&path).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // Soft-deleting the employee does not release the FK; the row remains
    let response = server
        .delete_admin(&format!("/api/v1/employees/{}", employee.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    let response = server.delete_admin(&path).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_duplicate_department_name_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let department = create_department(&server).await;

    let request = CreateDepartmentRequest {
        name: department.name.clone(),
    };
    let response = server.post("/api/v1/departments", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

// ============================================================================
// Org Chart and Export Tests
// ============================================================================

#[tokio::test]
async fn test_org_chart_counts_direct_reports() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let department = create_department(&server).await;
    let manager = create_employee(&server, department.id).await;
    for _ in 0..2 {
        let request = CreateEmployeeRequest::with_manager(department.id, manager.id);
        let response = server.post("/api/v1/employees", &request).await.unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .get(&format!("/api/v1/org-chart/departments/{}", department.id))
        .await
        .unwrap();
    let chart: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    let nodes = chart["nodes"].as_array().unwrap();
    let manager_node = nodes
        .iter()
        .find(|n| n["id"].as_i64() == Some(manager.id))
        .expect("manager node missing");
    assert_eq!(manager_node["direct_reports"].as_i64(), Some(2));
}

#[tokio::test]
async fn test_employee_csv_export() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let department = create_department(&server).await;
    let employee = create_employee(&server, department.id).await;

    let response = server.get("/api/v1/employees/export").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("text/csv")));
    let body = response.text().await.unwrap();
    assert!(body.starts_with("ID,Employee Number,Full Name"));
    assert!(body.contains(&employee.email));
}
