//! Report service
//!
//! Renders CSV projections of employees, the audit trail, and the periodic
//! headcount and salary-band reports. Callers decide whether the output
//! becomes an HTTP download or a file on disk; spreadsheet and PDF
//! rendering are outside this core.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::instrument;

use hr_core::traits::AuditFilter;

use super::context::ServiceContext;
use super::csv_util;
use super::error::ServiceResult;

/// Salary bands for the distribution report: label, inclusive lower bound,
/// inclusive upper bound (open-ended for the top band)
const SALARY_BANDS: [(&str, i64, Option<i64>); 8] = [
    ("R0-R250k", 0, Some(250_000)),
    ("R250k-R400k", 250_000, Some(400_000)),
    ("R400k-R600k", 400_000, Some(600_000)),
    ("R600k-R900k", 600_000, Some(900_000)),
    ("R900k-R1.2m", 900_000, Some(1_200_000)),
    ("R1.2m-R1.8m", 1_200_000, Some(1_800_000)),
    ("R1.8m-R3m", 1_800_000, Some(3_000_000)),
    ("R3m+", 3_000_000, None),
];

/// Report service
pub struct ReportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReportService<'a> {
    /// Create a new ReportService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// CSV projection of all (non-deleted) employees
    #[instrument(skip(self))]
    pub async fn employees_csv(&self) -> ServiceResult<String> {
        let employees = self.ctx.employee_repo().list_all().await?;
        let department_names: HashMap<i64, String> = self
            .ctx
            .department_repo()
            .list_all()
            .await?
            .into_iter()
            .map(|d| (d.id.into_inner(), d.name))
            .collect();
        let employee_names: HashMap<i64, String> = employees
            .iter()
            .map(|e| (e.id.into_inner(), e.full_name.clone()))
            .collect();

        let mut out = String::from(
            "ID,Employee Number,Full Name,Email,Job Title,Employment Type,\
             Department,Line Manager,Status,Annual Salary,Date Hired,Gender\n",
        );
        for e in &employees {
            let department = department_names
                .get(&e.department_id.into_inner())
                .cloned()
                .unwrap_or_default();
            let manager = e
                .line_manager_id
                .and_then(|m| employee_names.get(&m.into_inner()).cloned())
                .unwrap_or_default();
            out.push_str(&csv_util::row(&[
                e.id.to_string(),
                e.employee_number.clone(),
                e.full_name.clone(),
                e.email.clone(),
                e.job_title.clone().unwrap_or_default(),
                e.employment_type.to_string(),
                department,
                manager,
                e.status.to_string(),
                e.salary.to_string(),
                e.date_hired.format("%Y-%m-%d").to_string(),
                e.gender.clone().unwrap_or_default(),
            ]));
            out.push('\n');
        }
        Ok(out)
    }

    /// CSV of the filtered audit trail, newest first
    #[instrument(skip(self))]
    pub async fn audit_csv(&self, filter: &AuditFilter) -> ServiceResult<String> {
        let entries = self.ctx.audit_repo().list_filtered(filter).await?;

        let mut out = String::from("Timestamp,User,Table,Action,Record ID,Changes\n");
        for entry in &entries {
            out.push_str(&csv_util::row(&[
                entry.timestamp.to_rfc3339(),
                entry.user_name.clone(),
                entry.table_name.clone(),
                entry.action.to_string(),
                entry.record_id.map(|id| id.to_string()).unwrap_or_default(),
                entry.changes.clone().unwrap_or_default(),
            ]));
            out.push('\n');
        }
        Ok(out)
    }

    /// Per-department headcount report with status breakdown
    #[instrument(skip(self))]
    pub async fn headcount_csv(&self) -> ServiceResult<String> {
        let rows = self.ctx.employee_repo().headcount_by_department().await?;

        let mut out = String::from("Department,Total,Active,OnLeave,Inactive\n");
        for r in &rows {
            out.push_str(&csv_util::row(&[
                r.department.clone(),
                r.total.to_string(),
                r.active.to_string(),
                r.on_leave.to_string(),
                r.inactive.to_string(),
            ]));
            out.push('\n');
        }
        Ok(out)
    }

    /// Salary distribution report over the configured bands
    #[instrument(skip(self))]
    pub async fn salary_band_csv(&self) -> ServiceResult<String> {
        let salaries = self.ctx.employee_repo().salaries().await?;

        let mut out = String::from("Band,Count\n");
        for (label, min, max) in SALARY_BANDS {
            let count = count_in_band(&salaries, min, max);
            out.push_str(&format!("{label},{count}\n"));
        }
        Ok(out)
    }
}

fn count_in_band(salaries: &[Decimal], min: i64, max: Option<i64>) -> usize {
    let min = Decimal::from(min);
    let max = max.map(Decimal::from);
    salaries
        .iter()
        .filter(|s| **s >= min && max.is_none_or(|m| **s <= m))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    #[test]
    fn test_band_counting() {
        let salaries = vec![dec(100_000), dec(250_000), dec(300_000), dec(5_000_000)];
        // Band edges are inclusive on both sides, so 250k lands in two bands
        assert_eq!(count_in_band(&salaries, 0, Some(250_000)), 2);
        assert_eq!(count_in_band(&salaries, 250_000, Some(400_000)), 2);
        assert_eq!(count_in_band(&salaries, 3_000_000, None), 1);
    }
}
