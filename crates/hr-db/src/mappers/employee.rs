//! Employee model -> entity mapper

use std::str::FromStr;

use hr_core::entities::Employee;
use hr_core::error::DomainError;
use hr_core::value_objects::{DepartmentId, EmployeeId};

use crate::models::EmployeeModel;

/// Parse a stored enum token, mapping failures onto an internal error
pub(crate) fn parse_token<T>(column: &str, token: &str) -> Result<T, DomainError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    token
        .parse()
        .map_err(|e| DomainError::InternalError(format!("corrupt {column} column: {e}")))
}

impl TryFrom<EmployeeModel> for Employee {
    type Error = DomainError;

    fn try_from(model: EmployeeModel) -> Result<Self, Self::Error> {
        Ok(Employee {
            id: EmployeeId::new(model.id),
            employee_number: model.employee_number,
            full_name: model.full_name,
            email: model.email,
            job_title: model.job_title,
            employment_type: parse_token("employment_type", &model.employment_type)?,
            date_hired: model.date_hired,
            date_of_birth: model.date_of_birth,
            salary: model.salary,
            gender: model.gender,
            status: parse_token("status", &model.status)?,
            department_id: DepartmentId::new(model.department_id),
            line_manager_id: model.line_manager_id.map(EmployeeId::new),
            emergency_contact_name: model.emergency_contact_name,
            emergency_contact_phone: model.emergency_contact_phone,
            profile_picture_path: model.profile_picture_path,
            is_deleted: model.is_deleted,
            version: model.version,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
