//! Audit snapshots and field-level diffing
//!
//! Snapshots are field-limited projections of an entity: the tracked fields
//! only, with department and line-manager references already resolved to
//! display names (never raw ids), and navigation collections excluded by
//! construction. Both the before and after snapshot are serialized into the
//! persisted audit row whether or not any field differs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::Employee;
use crate::value_objects::{EmployeeStatus, EmploymentType};

/// Summary recorded when an update changed no tracked field
pub const NO_CHANGES_DETECTED: &str = "No changes detected";

/// Field-limited projection of an [`Employee`] for audit serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSnapshot {
    pub employee_number: String,
    pub full_name: String,
    pub email: String,
    pub job_title: Option<String>,
    pub employment_type: EmploymentType,
    pub salary: Decimal,
    /// Department display name, resolved at comparison time
    pub department: String,
    /// Line-manager display name, resolved at comparison time
    pub line_manager: Option<String>,
    pub status: EmployeeStatus,
    pub date_hired: NaiveDate,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
}

impl EmployeeSnapshot {
    /// Project an employee onto its tracked fields
    ///
    /// The caller resolves the department and line-manager names; the
    /// snapshot never carries raw reference ids.
    pub fn of(
        employee: &Employee,
        department_name: impl Into<String>,
        line_manager_name: Option<String>,
    ) -> Self {
        Self {
            employee_number: employee.employee_number.clone(),
            full_name: employee.full_name.clone(),
            email: employee.email.clone(),
            job_title: employee.job_title.clone(),
            employment_type: employee.employment_type,
            salary: employee.salary,
            department: department_name.into(),
            line_manager: line_manager_name,
            status: employee.status,
            date_hired: employee.date_hired,
            date_of_birth: employee.date_of_birth,
            gender: employee.gender.clone(),
            emergency_contact_name: employee.emergency_contact_name.clone(),
            emergency_contact_phone: employee.emergency_contact_phone.clone(),
        }
    }

    /// Pairwise-compare tracked fields, one fragment per difference
    ///
    /// Email comparison is case-insensitive. Fragment form is
    /// `<Field>: '<old>' to '<new>'`; unset optional fields render as the
    /// empty string inside the quotes.
    #[must_use]
    pub fn diff(&self, new: &Self) -> Vec<String> {
        let mut fragments = Vec::new();

        push_if_changed(
            &mut fragments,
            "Employee Number",
            &self.employee_number,
            &new.employee_number,
        );
        push_if_changed(&mut fragments, "Name", &self.full_name, &new.full_name);
        if !self.email.eq_ignore_ascii_case(&new.email) {
            fragments.push(fragment("Email", &self.email, &new.email));
        }
        push_if_changed_opt(&mut fragments, "Job Title", &self.job_title, &new.job_title);
        push_if_changed(
            &mut fragments,
            "Employment Type",
            &self.employment_type.to_string(),
            &new.employment_type.to_string(),
        );
        if self.salary != new.salary {
            fragments.push(fragment(
                "Salary",
                &self.salary.to_string(),
                &new.salary.to_string(),
            ));
        }
        push_if_changed(&mut fragments, "Department", &self.department, &new.department);
        push_if_changed_opt(
            &mut fragments,
            "Line Manager",
            &self.line_manager,
            &new.line_manager,
        );
        push_if_changed(
            &mut fragments,
            "Status",
            &self.status.to_string(),
            &new.status.to_string(),
        );
        if self.date_hired != new.date_hired {
            fragments.push(fragment(
                "Date Hired",
                &date_text(Some(self.date_hired)),
                &date_text(Some(new.date_hired)),
            ));
        }
        if self.date_of_birth != new.date_of_birth {
            fragments.push(fragment(
                "Date of Birth",
                &date_text(self.date_of_birth),
                &date_text(new.date_of_birth),
            ));
        }
        push_if_changed_opt(&mut fragments, "Gender", &self.gender, &new.gender);
        push_if_changed_opt(
            &mut fragments,
            "Emergency Contact Name",
            &self.emergency_contact_name,
            &new.emergency_contact_name,
        );
        push_if_changed_opt(
            &mut fragments,
            "Emergency Contact Phone",
            &self.emergency_contact_phone,
            &new.emergency_contact_phone,
        );

        fragments
    }

    /// Joined change summary, or the degenerate-diff sentence
    #[must_use]
    pub fn change_summary(&self, new: &Self) -> String {
        let fragments = self.diff(new);
        if fragments.is_empty() {
            NO_CHANGES_DETECTED.to_string()
        } else {
            fragments.join("; ")
        }
    }
}

/// Field-limited projection of a department: the Name field only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSnapshot {
    pub name: String,
}

impl DepartmentSnapshot {
    pub fn of(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Same diff contract as [`EmployeeSnapshot`], restricted to Name
    #[must_use]
    pub fn change_summary(&self, new: &Self) -> String {
        if self.name == new.name {
            NO_CHANGES_DETECTED.to_string()
        } else {
            fragment("Name", &self.name, &new.name)
        }
    }
}

fn fragment(field: &str, old: &str, new: &str) -> String {
    format!("{field}: '{old}' to '{new}'")
}

fn push_if_changed(fragments: &mut Vec<String>, field: &str, old: &str, new: &str) {
    if old != new {
        fragments.push(fragment(field, old, new));
    }
}

fn push_if_changed_opt(
    fragments: &mut Vec<String>,
    field: &str,
    old: &Option<String>,
    new: &Option<String>,
) {
    if old != new {
        fragments.push(fragment(
            field,
            old.as_deref().unwrap_or(""),
            new.as_deref().unwrap_or(""),
        ));
    }
}

fn date_text(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{DepartmentId, EmployeeId};
    use chrono::NaiveDate;

    fn snapshot() -> EmployeeSnapshot {
        let employee = Employee::new(
            EmployeeId::new(1),
            "EMP-0001".to_string(),
            "Ayanda Dlamini".to_string(),
            "ayanda@example.com".to_string(),
            EmploymentType::Permanent,
            NaiveDate::from_ymd_opt(2020, 3, 16).unwrap(),
            Decimal::new(450_000, 0),
            DepartmentId::new(1),
        );
        EmployeeSnapshot::of(&employee, "Engineering", None)
    }

    #[test]
    fn test_identical_snapshots_report_no_changes() {
        let old = snapshot();
        let new = old.clone();
        assert!(old.diff(&new).is_empty());
        assert_eq!(old.change_summary(&new), "No changes detected");
    }

    #[test]
    fn test_email_comparison_is_case_insensitive() {
        let old = snapshot();
        let mut new = old.clone();
        new.email = "AYANDA@Example.COM".to_string();
        assert_eq!(old.change_summary(&new), "No changes detected");
    }

    #[test]
    fn test_each_changed_field_listed_exactly_once() {
        let old = snapshot();
        let mut new = old.clone();
        new.full_name = "Ayanda Zulu".to_string();
        new.salary = Decimal::new(480_000, 0);
        new.status = EmployeeStatus::OnLeave;

        let fragments = old.diff(&new);
        assert_eq!(fragments.len(), 3);
        assert_eq!(fragments[0], "Name: 'Ayanda Dlamini' to 'Ayanda Zulu'");
        assert_eq!(fragments[1], "Salary: '450000' to '480000'");
        assert_eq!(fragments[2], "Status: 'Active' to 'On Leave'");

        assert_eq!(
            old.change_summary(&new),
            "Name: 'Ayanda Dlamini' to 'Ayanda Zulu'; \
             Salary: '450000' to '480000'; \
             Status: 'Active' to 'On Leave'"
        );
    }

    #[test]
    fn test_references_render_as_display_names() {
        let old = snapshot();
        let mut new = old.clone();
        new.department = "Finance".to_string();
        new.line_manager = Some("Sipho Mokoena".to_string());

        let fragments = old.diff(&new);
        assert_eq!(fragments[0], "Department: 'Engineering' to 'Finance'");
        assert_eq!(fragments[1], "Line Manager: '' to 'Sipho Mokoena'");
    }

    #[test]
    fn test_optional_dates_render_empty_when_unset() {
        let old = snapshot();
        let mut new = old.clone();
        new.date_of_birth = NaiveDate::from_ymd_opt(1991, 7, 2);

        let fragments = old.diff(&new);
        assert_eq!(fragments, vec!["Date of Birth: '' to '1991-07-02'"]);
    }

    #[test]
    fn test_department_snapshot_tracks_name_only() {
        let old = DepartmentSnapshot::of("Engineering");
        let renamed = DepartmentSnapshot::of("Product Engineering");
        assert_eq!(
            old.change_summary(&renamed),
            "Name: 'Engineering' to 'Product Engineering'"
        );
        assert_eq!(old.change_summary(&old.clone()), "No changes detected");
    }
}
