//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod audit;
pub mod context;
pub mod dashboard;
pub mod department;
pub mod employee;
pub mod error;
pub mod org_chart;
pub mod reports;
pub mod status_change;

mod csv_util;

// Re-export all services for convenience
pub use audit::AuditService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use dashboard::DashboardService;
pub use department::DepartmentService;
pub use employee::EmployeeService;
pub use error::{ServiceError, ServiceResult};
pub use org_chart::OrgChartService;
pub use reports::ReportService;
pub use status_change::StatusChangeService;
