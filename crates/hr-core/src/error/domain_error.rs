//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{AuditLogId, DepartmentId, EmployeeId, RequestId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Employee not found: {0}")]
    EmployeeNotFound(EmployeeId),

    #[error("Department not found: {0}")]
    DepartmentNotFound(DepartmentId),

    #[error("Status change request not found: {0}")]
    RequestNotFound(RequestId),

    #[error("Audit log entry not found: {0}")]
    AuditLogNotFound(AuditLogId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Salary must not be negative")]
    NegativeSalary,

    #[error("Assigning this manager would create a cycle in the reporting line")]
    ManagerCycle {
        employee: EmployeeId,
        manager: EmployeeId,
    },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Employee number already in use")]
    EmployeeNumberExists,

    #[error("Department name already in use")]
    DepartmentNameExists,

    #[error("A pending status change request already exists for this employee")]
    DuplicatePendingRequest,

    #[error("The record was modified by another user; reload and try again")]
    ConflictingUpdate,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Cannot delete a department that still has employees")]
    DepartmentNotEmpty,

    #[error("Status change request {0} has already been processed")]
    RequestAlreadyDecided(RequestId),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::EmployeeNotFound(_) => "UNKNOWN_EMPLOYEE",
            Self::DepartmentNotFound(_) => "UNKNOWN_DEPARTMENT",
            Self::RequestNotFound(_) => "UNKNOWN_REQUEST",
            Self::AuditLogNotFound(_) => "UNKNOWN_AUDIT_ENTRY",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::NegativeSalary => "NEGATIVE_SALARY",
            Self::ManagerCycle { .. } => "LINE_MANAGER_CYCLE",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::EmployeeNumberExists => "EMPLOYEE_NUMBER_EXISTS",
            Self::DepartmentNameExists => "DEPARTMENT_NAME_EXISTS",
            Self::DuplicatePendingRequest => "DUPLICATE_PENDING_REQUEST",
            Self::ConflictingUpdate => "CONFLICTING_UPDATE",

            // Business Rules
            Self::DepartmentNotEmpty => "DEPARTMENT_NOT_EMPTY",
            Self::RequestAlreadyDecided(_) => "REQUEST_ALREADY_DECIDED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::EmployeeNotFound(_)
                | Self::DepartmentNotFound(_)
                | Self::RequestNotFound(_)
                | Self::AuditLogNotFound(_)
        )
    }

    /// Check if this is a validation error
    ///
    /// A manager cycle is reported as a field-level validation failure on
    /// the manager field, not a conflict.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::NegativeSalary
                | Self::ManagerCycle { .. }
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists
                | Self::EmployeeNumberExists
                | Self::DepartmentNameExists
                | Self::DuplicatePendingRequest
                | Self::ConflictingUpdate
                | Self::DepartmentNotEmpty
                | Self::RequestAlreadyDecided(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_is_validation_not_conflict() {
        let err = DomainError::ManagerCycle {
            employee: EmployeeId::new(1),
            manager: EmployeeId::new(2),
        };
        assert!(err.is_validation());
        assert!(!err.is_conflict());
        assert_eq!(err.code(), "LINE_MANAGER_CYCLE");
    }

    #[test]
    fn test_classification() {
        assert!(DomainError::EmployeeNotFound(EmployeeId::new(1)).is_not_found());
        assert!(DomainError::ConflictingUpdate.is_conflict());
        assert!(DomainError::DuplicatePendingRequest.is_conflict());
        assert!(DomainError::RequestAlreadyDecided(RequestId::new(3)).is_conflict());
    }
}
