//! Value objects - typed ids, domain enums, and actor identity

mod actor;
mod ids;
mod status;

pub use actor::Actor;
pub use ids::{AuditLogId, DepartmentId, EmployeeId, ParseIdError, RequestId};
pub use status::{EmployeeStatus, EmploymentType, RequestStatus};
