//! Status-change request entity - the approval workflow state machine

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{EmployeeId, EmployeeStatus, RequestId, RequestStatus};

/// Minimum length of the free-text reason
pub const MIN_REASON_LEN: usize = 10;
/// Maximum length of the free-text reason
pub const MAX_REASON_LEN: usize = 500;

/// A proposal to change an employee's status, gated on admin approval
///
/// Lifecycle: created `Pending`, then exactly one transition to `Approved`
/// or `Rejected`. Terminal states permit no further mutation. At most one
/// `Pending` request may exist per employee at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChangeRequest {
    pub id: RequestId,
    pub employee_id: EmployeeId,
    pub from_status: EmployeeStatus,
    pub to_status: EmployeeStatus,
    pub reason: String,
    pub requested_by: String,
    pub requested_at: DateTime<Utc>,
    pub approved_by: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub status: RequestStatus,
    pub approval_comments: Option<String>,
}

impl StatusChangeRequest {
    /// Create a new pending request capturing the employee's current status
    pub fn new(
        id: RequestId,
        employee_id: EmployeeId,
        from_status: EmployeeStatus,
        to_status: EmployeeStatus,
        reason: String,
        requested_by: String,
    ) -> Self {
        Self {
            id,
            employee_id,
            from_status,
            to_status,
            reason,
            requested_by,
            requested_at: Utc::now(),
            approved_by: None,
            approved_at: None,
            status: RequestStatus::Pending,
            approval_comments: None,
        }
    }

    /// Check whether this request is still awaiting a decision
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    /// Record an approval decision
    ///
    /// Fails with [`DomainError::RequestAlreadyDecided`] if the request has
    /// left the `Pending` state (stale-decision guard).
    pub fn approve(
        &mut self,
        approved_by: String,
        comments: Option<String>,
    ) -> Result<(), DomainError> {
        self.decide(RequestStatus::Approved, approved_by, comments)
    }

    /// Record a rejection decision
    ///
    /// Same stale-decision guard as [`Self::approve`]; a rejection never
    /// touches the referenced employee.
    pub fn reject(
        &mut self,
        approved_by: String,
        comments: Option<String>,
    ) -> Result<(), DomainError> {
        self.decide(RequestStatus::Rejected, approved_by, comments)
    }

    fn decide(
        &mut self,
        outcome: RequestStatus,
        approved_by: String,
        comments: Option<String>,
    ) -> Result<(), DomainError> {
        if !self.is_pending() {
            return Err(DomainError::RequestAlreadyDecided(self.id));
        }
        self.status = outcome;
        self.approved_by = Some(approved_by);
        self.approved_at = Some(Utc::now());
        self.approval_comments = comments;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending() -> StatusChangeRequest {
        StatusChangeRequest::new(
            RequestId::new(1),
            EmployeeId::new(7),
            EmployeeStatus::Active,
            EmployeeStatus::OnLeave,
            "Parental leave starting next month".to_string(),
            "lindiwe@example.com".to_string(),
        )
    }

    #[test]
    fn test_new_is_pending() {
        let request = pending();
        assert!(request.is_pending());
        assert_eq!(request.from_status, EmployeeStatus::Active);
        assert!(request.approved_by.is_none());
    }

    #[test]
    fn test_approve_sets_decision_fields() {
        let mut request = pending();
        request
            .approve("admin@example.com".to_string(), Some("ok".to_string()))
            .unwrap();
        assert_eq!(request.status, RequestStatus::Approved);
        assert_eq!(request.approved_by.as_deref(), Some("admin@example.com"));
        assert!(request.approved_at.is_some());
        assert_eq!(request.approval_comments.as_deref(), Some("ok"));
    }

    #[test]
    fn test_reject_sets_decision_fields() {
        let mut request = pending();
        request.reject("admin@example.com".to_string(), None).unwrap();
        assert_eq!(request.status, RequestStatus::Rejected);
        assert!(request.approved_at.is_some());
    }

    #[test]
    fn test_terminal_state_rejects_second_decision() {
        let mut request = pending();
        request.approve("admin@example.com".to_string(), None).unwrap();

        let err = request
            .reject("another-admin@example.com".to_string(), None)
            .unwrap_err();
        assert!(matches!(err, DomainError::RequestAlreadyDecided(_)));
        // The first decision is untouched
        assert_eq!(request.status, RequestStatus::Approved);
        assert_eq!(request.approved_by.as_deref(), Some("admin@example.com"));
    }
}
