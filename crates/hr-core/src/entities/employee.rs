//! Employee entity - an employment record

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::value_objects::{DepartmentId, EmployeeId, EmployeeStatus, EmploymentType};

/// Employee record
///
/// The line-manager reference is self-referencing and must never form a
/// cycle; that invariant is enforced by [`crate::hierarchy::ManagerGraph`]
/// before any manager mutation is persisted. Soft-deleted employees stay in
/// the table flagged `is_deleted` and are excluded from default queries.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: EmployeeId,
    pub employee_number: String,
    pub full_name: String,
    pub email: String,
    pub job_title: Option<String>,
    pub employment_type: EmploymentType,
    pub date_hired: NaiveDate,
    pub date_of_birth: Option<NaiveDate>,
    pub salary: Decimal,
    pub gender: Option<String>,
    pub status: EmployeeStatus,
    pub department_id: DepartmentId,
    pub line_manager_id: Option<EmployeeId>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub profile_picture_path: Option<String>,
    pub is_deleted: bool,
    /// Optimistic-concurrency counter, compared-and-incremented on update
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Create a new active employee with the required fields
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: EmployeeId,
        employee_number: String,
        full_name: String,
        email: String,
        employment_type: EmploymentType,
        date_hired: NaiveDate,
        salary: Decimal,
        department_id: DepartmentId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            employee_number,
            full_name,
            email,
            job_title: None,
            employment_type,
            date_hired,
            date_of_birth: None,
            salary,
            gender: None,
            status: EmployeeStatus::Active,
            department_id,
            line_manager_id: None,
            emergency_contact_name: None,
            emergency_contact_phone: None,
            profile_picture_path: None,
            is_deleted: false,
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the employee is currently active
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active && !self.is_deleted
    }

    /// Completed years of service as of the given date
    pub fn years_of_service(&self, on: NaiveDate) -> i32 {
        on.years_since(self.date_hired).map_or(0, |y| y as i32)
    }

    /// Update the employment status, bumping the modification timestamp
    pub fn set_status(&mut self, status: EmployeeStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn sample() -> Employee {
        Employee::new(
            EmployeeId::new(1),
            "EMP-0001".to_string(),
            "Ayanda Dlamini".to_string(),
            "ayanda@example.com".to_string(),
            EmploymentType::Permanent,
            NaiveDate::from_ymd_opt(2020, 3, 16).unwrap(),
            Decimal::new(450_000, 0),
            DepartmentId::new(1),
        )
    }

    #[test]
    fn test_new_defaults() {
        let employee = sample();
        assert_eq!(employee.status, EmployeeStatus::Active);
        assert!(employee.line_manager_id.is_none());
        assert!(!employee.is_deleted);
        assert_eq!(employee.version, 1);
    }

    #[test]
    fn test_years_of_service() {
        let employee = sample();
        let on = NaiveDate::from_ymd_opt(2024, 3, 16).unwrap();
        assert_eq!(employee.years_of_service(on), 4);

        // Day before the anniversary counts the previous year
        let on = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(employee.years_of_service(on), 3);

        // A date before hiring never goes negative
        let on = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
        assert_eq!(employee.years_of_service(on), 0);
    }

    #[test]
    fn test_set_status_touches_updated_at() {
        let mut employee = sample();
        let before = employee.updated_at;
        employee.set_status(EmployeeStatus::OnLeave);
        assert_eq!(employee.status, EmployeeStatus::OnLeave);
        assert!(employee.updated_at >= before);
        assert!(!employee.is_active());
    }
}
