//! Dashboard service
//!
//! Aggregate analytics over the employee population: headcount and gender
//! breakdowns, average and median salary. The median is computed in-process
//! over the fetched salary list.

use rust_decimal::Decimal;
use tracing::instrument;

use crate::dto::{DashboardResponse, DepartmentCount, GenderCount};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Dashboard service
pub struct DashboardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DashboardService<'a> {
    /// Create a new DashboardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Aggregate summary for the dashboard
    #[instrument(skip(self))]
    pub async fn summary(&self) -> ServiceResult<DashboardResponse> {
        let total_employees = self.ctx.employee_repo().count().await?;
        let total_departments = self.ctx.department_repo().list_all().await?.len() as i64;

        let departments = self
            .ctx
            .employee_repo()
            .headcount_by_department()
            .await?
            .into_iter()
            .map(|h| DepartmentCount {
                department: h.department,
                count: h.total,
            })
            .collect();

        let genders = self
            .ctx
            .employee_repo()
            .count_by_gender()
            .await?
            .into_iter()
            .map(|(gender, count)| GenderCount {
                gender: gender.unwrap_or_else(|| "Unknown".to_string()),
                count,
            })
            .collect();

        let salaries = self.ctx.employee_repo().salaries().await?;
        let average_salary = average(&salaries);
        let median_salary = median(salaries);

        Ok(DashboardResponse {
            total_employees,
            total_departments,
            average_salary,
            median_salary,
            departments,
            genders,
        })
    }
}

fn average(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    let sum: Decimal = values.iter().copied().sum();
    sum / Decimal::from(values.len() as i64)
}

/// Median of the values; the mean of the two middle values for an even count
fn median(mut values: Vec<Decimal>) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    values.sort();
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) / Decimal::TWO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    #[test]
    fn test_median_odd_count() {
        assert_eq!(median(vec![dec(300), dec(100), dec(200)]), dec(200));
    }

    #[test]
    fn test_median_even_count() {
        assert_eq!(
            median(vec![dec(100), dec(400), dec(200), dec(300)]),
            dec(250)
        );
    }

    #[test]
    fn test_median_single_and_empty() {
        assert_eq!(median(vec![dec(42)]), dec(42));
        assert_eq!(median(vec![]), Decimal::ZERO);
    }

    #[test]
    fn test_average() {
        assert_eq!(average(&[dec(100), dec(200)]), dec(150));
        assert_eq!(average(&[]), Decimal::ZERO);
    }
}
