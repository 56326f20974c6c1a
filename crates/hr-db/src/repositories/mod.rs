//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in hr-core.
//! Each repository handles database operations for a specific domain entity.

mod audit_log;
mod department;
mod employee;
mod error;
mod status_change_request;

pub use audit_log::PgAuditLogRepository;
pub use department::PgDepartmentRepository;
pub use employee::PgEmployeeRepository;
pub use status_change_request::PgStatusChangeRequestRepository;
