//! # hr-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    AuditListParams, AuditLogResponse, CreateDepartmentRequest, CreateEmployeeRequest,
    DashboardResponse, DecideStatusChangeRequest, DepartmentCount, DepartmentDetailResponse,
    DepartmentResponse, EmployeeListParams, EmployeeResponse, GenderCount, HealthChecks,
    HealthResponse, OrgChartNode, OrgChartResponse, PageMeta, PagedResponse, ReadinessResponse,
    StatusChangeRequestResponse, SubmitStatusChangeRequest, UpdateDepartmentRequest,
    UpdateEmployeeRequest,
};
pub use services::{
    AuditService, DashboardService, DepartmentService, EmployeeService, OrgChartService,
    ReportService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    StatusChangeService,
};
