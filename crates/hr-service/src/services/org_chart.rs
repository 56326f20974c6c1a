//! Org chart service
//!
//! Flat node projection of the reporting structure for visualization,
//! company-wide or per department. Soft-deleted employees never appear.

use std::collections::HashMap;

use tracing::instrument;

use hr_core::entities::Employee;
use hr_core::error::DomainError;
use hr_core::value_objects::{DepartmentId, EmployeeId};

use crate::dto::{OrgChartNode, OrgChartResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Org chart service
pub struct OrgChartService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> OrgChartService<'a> {
    /// Create a new OrgChartService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The company-wide org chart
    #[instrument(skip(self))]
    pub async fn company(&self) -> ServiceResult<OrgChartResponse> {
        let employees = self.ctx.employee_repo().list_all().await?;
        self.project(employees).await
    }

    /// The org chart restricted to one department
    ///
    /// Direct-report counts still span the whole company, matching how a
    /// manager's reports can sit in other departments.
    #[instrument(skip(self))]
    pub async fn department(&self, id: DepartmentId) -> ServiceResult<OrgChartResponse> {
        self.ctx
            .department_repo()
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::DepartmentNotFound(id)))?;

        let employees = self.ctx.employee_repo().list_all().await?;
        let filtered: Vec<Employee> = employees
            .into_iter()
            .filter(|e| e.department_id == id)
            .collect();
        self.project(filtered).await
    }

    async fn project(&self, employees: Vec<Employee>) -> ServiceResult<OrgChartResponse> {
        let department_names: HashMap<i64, String> = self
            .ctx
            .department_repo()
            .list_all()
            .await?
            .into_iter()
            .map(|d| (d.id.into_inner(), d.name))
            .collect();

        // Direct reports are counted over the full (non-deleted) graph
        let mut report_counts: HashMap<EmployeeId, i64> = HashMap::new();
        for (_, manager) in self.ctx.employee_repo().manager_pairs().await? {
            if let Some(manager) = manager {
                *report_counts.entry(manager).or_insert(0) += 1;
            }
        }

        let department_count = employees
            .iter()
            .map(|e| e.department_id)
            .collect::<std::collections::HashSet<_>>()
            .len() as i64;
        let total_employees = employees.len() as i64;

        let nodes = employees
            .into_iter()
            .map(|e| OrgChartNode {
                title: e
                    .job_title
                    .clone()
                    .unwrap_or_else(|| "No Title".to_string()),
                department: department_names
                    .get(&e.department_id.into_inner())
                    .cloned()
                    .unwrap_or_else(|| "No Department".to_string()),
                manager: e.line_manager_id,
                direct_reports: report_counts.get(&e.id).copied().unwrap_or(0),
                id: e.id,
                name: e.full_name,
                employee_number: e.employee_number,
                email: e.email,
                status: e.status,
                profile_picture: e.profile_picture_path,
            })
            .collect();

        Ok(OrgChartResponse {
            nodes,
            total_employees,
            department_count,
        })
    }
}
