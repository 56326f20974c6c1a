//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AuditFilter, AuditLogRepository, AuditQuery, DepartmentHeadcount, DepartmentRepository,
    EmployeeQuery, EmployeeRepository, EmployeeSort, Page, RepoResult,
    StatusChangeRequestRepository,
};
