//! PostgreSQL implementation of EmployeeRepository

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use hr_core::entities::Employee;
use hr_core::error::DomainError;
use hr_core::traits::{
    DepartmentHeadcount, EmployeeQuery, EmployeeRepository, EmployeeSort, Page, RepoResult,
};
use hr_core::value_objects::{EmployeeId, EmployeeStatus};

use crate::models::EmployeeModel;

use super::error::{map_db_error, map_unique_constraint};

const COLUMNS: &str = "id, employee_number, full_name, email, job_title, employment_type, \
     date_hired, date_of_birth, salary, gender, status, department_id, line_manager_id, \
     emergency_contact_name, emergency_contact_phone, profile_picture_path, is_deleted, \
     version, created_at, updated_at";

#[derive(Debug, FromRow)]
struct HeadcountRow {
    department: String,
    total: i64,
    active: i64,
    on_leave: i64,
    inactive: i64,
}

/// PostgreSQL implementation of EmployeeRepository
#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    /// Create a new PgEmployeeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn order_clause(sort: EmployeeSort) -> &'static str {
        match sort {
            EmployeeSort::NameAsc => "full_name ASC",
            EmployeeSort::NameDesc => "full_name DESC",
            EmployeeSort::DateHiredAsc => "date_hired ASC",
            EmployeeSort::DateHiredDesc => "date_hired DESC",
        }
    }

    async fn exists(&self, id: EmployeeId) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM employees WHERE id = $1 AND is_deleted = FALSE)
            ",
        )
        .bind(id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }
}

fn unique_violation(constraint: Option<&str>) -> DomainError {
    match constraint {
        Some("uq_employees_email") => DomainError::EmailAlreadyExists,
        Some("uq_employees_employee_number") => DomainError::EmployeeNumberExists,
        other => DomainError::DatabaseError(format!(
            "unique violation on {}",
            other.unwrap_or("unknown constraint")
        )),
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        let sql = format!("SELECT {COLUMNS} FROM employees WHERE id = $1 AND is_deleted = FALSE");
        let result = sqlx::query_as::<_, EmployeeModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Employee::try_from).transpose()
    }

    #[instrument(skip(self, query))]
    async fn list(&self, query: &EmployeeQuery) -> RepoResult<Page<Employee>> {
        let filter = r"
            is_deleted = FALSE
              AND ($1::text IS NULL
                   OR full_name ILIKE '%' || $1 || '%'
                   OR email ILIKE '%' || $1 || '%')
              AND ($2::bigint IS NULL OR department_id = $2)
              AND ($3::text IS NULL OR status = $3)
        ";

        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM employees WHERE {filter}"
        ))
        .bind(query.search.as_deref())
        .bind(query.department_id.map(hr_core::DepartmentId::into_inner))
        .bind(query.status.map(|s| s.as_str()))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let order = Self::order_clause(query.sort);
        let offset = (query.page.max(1) - 1) * query.per_page;
        let sql = format!(
            "SELECT {COLUMNS} FROM employees WHERE {filter} ORDER BY {order} LIMIT $4 OFFSET $5"
        );
        let rows = sqlx::query_as::<_, EmployeeModel>(&sql)
            .bind(query.search.as_deref())
            .bind(query.department_id.map(hr_core::DepartmentId::into_inner))
            .bind(query.status.map(|s| s.as_str()))
            .bind(query.per_page)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let items = rows
            .into_iter()
            .map(Employee::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page { items, total })
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Employee>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM employees WHERE is_deleted = FALSE ORDER BY full_name"
        );
        let rows = sqlx::query_as::<_, EmployeeModel>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter().map(Employee::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str, exclude: Option<EmployeeId>) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM employees
                WHERE LOWER(email) = LOWER($1)
                  AND ($2::bigint IS NULL OR id <> $2)
            )
            ",
        )
        .bind(email)
        .bind(exclude.map(EmployeeId::into_inner))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn employee_number_exists(
        &self,
        number: &str,
        exclude: Option<EmployeeId>,
    ) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM employees
                WHERE employee_number = $1
                  AND ($2::bigint IS NULL OR id <> $2)
            )
            ",
        )
        .bind(number)
        .bind(exclude.map(EmployeeId::into_inner))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn manager_pairs(&self) -> RepoResult<Vec<(EmployeeId, Option<EmployeeId>)>> {
        let rows = sqlx::query_as::<_, (i64, Option<i64>)>(
            r"
            SELECT id, line_manager_id FROM employees WHERE is_deleted = FALSE
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .map(|(id, manager)| (EmployeeId::new(id), manager.map(EmployeeId::new)))
            .collect())
    }

    #[instrument(skip(self, employee))]
    async fn create(&self, employee: &Employee) -> RepoResult<EmployeeId> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO employees (
                employee_number, full_name, email, job_title, employment_type,
                date_hired, date_of_birth, salary, gender, status, department_id,
                line_manager_id, emergency_contact_name, emergency_contact_phone,
                profile_picture_path, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING id
            ",
        )
        .bind(&employee.employee_number)
        .bind(&employee.full_name)
        .bind(&employee.email)
        .bind(&employee.job_title)
        .bind(employee.employment_type.as_str())
        .bind(employee.date_hired)
        .bind(employee.date_of_birth)
        .bind(employee.salary)
        .bind(&employee.gender)
        .bind(employee.status.as_str())
        .bind(employee.department_id.into_inner())
        .bind(employee.line_manager_id.map(EmployeeId::into_inner))
        .bind(&employee.emergency_contact_name)
        .bind(&employee.emergency_contact_phone)
        .bind(&employee.profile_picture_path)
        .bind(employee.created_at)
        .bind(employee.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_constraint(e, unique_violation))?;

        Ok(EmployeeId::new(id))
    }

    #[instrument(skip(self, employee))]
    async fn update(&self, employee: &Employee) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE employees
            SET employee_number = $2, full_name = $3, email = $4, job_title = $5,
                employment_type = $6, date_hired = $7, date_of_birth = $8, salary = $9,
                gender = $10, status = $11, department_id = $12, line_manager_id = $13,
                emergency_contact_name = $14, emergency_contact_phone = $15,
                profile_picture_path = $16,
                version = version + 1, updated_at = NOW()
            WHERE id = $1 AND version = $17 AND is_deleted = FALSE
            ",
        )
        .bind(employee.id.into_inner())
        .bind(&employee.employee_number)
        .bind(&employee.full_name)
        .bind(&employee.email)
        .bind(&employee.job_title)
        .bind(employee.employment_type.as_str())
        .bind(employee.date_hired)
        .bind(employee.date_of_birth)
        .bind(employee.salary)
        .bind(&employee.gender)
        .bind(employee.status.as_str())
        .bind(employee.department_id.into_inner())
        .bind(employee.line_manager_id.map(EmployeeId::into_inner))
        .bind(&employee.emergency_contact_name)
        .bind(&employee.emergency_contact_phone)
        .bind(&employee.profile_picture_path)
        .bind(employee.version)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_constraint(e, unique_violation))?;

        if result.rows_affected() == 0 {
            // Version mismatch on a live row is a concurrent-write conflict
            return if self.exists(employee.id).await? {
                Err(DomainError::ConflictingUpdate)
            } else {
                Err(DomainError::EmployeeNotFound(employee.id))
            };
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: EmployeeId, status: EmployeeStatus) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE employees
            SET status = $2, version = version + 1, updated_at = NOW()
            WHERE id = $1 AND is_deleted = FALSE
            ",
        )
        .bind(id.into_inner())
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::EmployeeNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: EmployeeId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE employees
            SET is_deleted = TRUE, version = version + 1, updated_at = NOW()
            WHERE id = $1 AND is_deleted = FALSE
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::EmployeeNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM employees WHERE is_deleted = FALSE
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn headcount_by_department(&self) -> RepoResult<Vec<DepartmentHeadcount>> {
        let rows = sqlx::query_as::<_, HeadcountRow>(
            r"
            SELECT d.name AS department,
                   COUNT(e.id) AS total,
                   COUNT(e.id) FILTER (WHERE e.status = 'active') AS active,
                   COUNT(e.id) FILTER (WHERE e.status = 'on_leave') AS on_leave,
                   COUNT(e.id) FILTER (WHERE e.status = 'inactive') AS inactive
            FROM departments d
            LEFT JOIN employees e ON e.department_id = d.id AND e.is_deleted = FALSE
            GROUP BY d.name
            ORDER BY d.name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .map(|r| DepartmentHeadcount {
                department: r.department,
                total: r.total,
                active: r.active,
                on_leave: r.on_leave,
                inactive: r.inactive,
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn count_by_gender(&self) -> RepoResult<Vec<(Option<String>, i64)>> {
        sqlx::query_as::<_, (Option<String>, i64)>(
            r"
            SELECT gender, COUNT(*) FROM employees
            WHERE is_deleted = FALSE
            GROUP BY gender
            ORDER BY gender
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn salaries(&self) -> RepoResult<Vec<Decimal>> {
        sqlx::query_scalar::<_, Decimal>(
            r"
            SELECT salary FROM employees WHERE is_deleted = FALSE
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
