//! Database models - SQLx-compatible structs for PostgreSQL tables

mod audit_log;
mod department;
mod employee;
mod status_change_request;

pub use audit_log::AuditLogModel;
pub use department::DepartmentModel;
pub use employee::EmployeeModel;
pub use status_change_request::StatusChangeRequestModel;
