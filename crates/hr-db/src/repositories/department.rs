//! PostgreSQL implementation of DepartmentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use hr_core::entities::Department;
use hr_core::error::DomainError;
use hr_core::traits::{DepartmentRepository, RepoResult};
use hr_core::value_objects::DepartmentId;

use crate::models::DepartmentModel;

use super::error::{map_db_error, map_fk_violation, map_unique_violation};

/// PostgreSQL implementation of DepartmentRepository
#[derive(Clone)]
pub struct PgDepartmentRepository {
    pool: PgPool,
}

impl PgDepartmentRepository {
    /// Create a new PgDepartmentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DepartmentRepository for PgDepartmentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>> {
        let result = sqlx::query_as::<_, DepartmentModel>(
            r"
            SELECT id, name, created_at, updated_at FROM departments WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Department::from))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Department>> {
        let rows = sqlx::query_as::<_, DepartmentModel>(
            r"
            SELECT id, name, created_at, updated_at FROM departments ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Department::from).collect())
    }

    #[instrument(skip(self))]
    async fn name_exists(&self, name: &str, exclude: Option<DepartmentId>) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM departments
                WHERE name = $1 AND ($2::bigint IS NULL OR id <> $2)
            )
            ",
        )
        .bind(name)
        .bind(exclude.map(DepartmentId::into_inner))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, department))]
    async fn create(&self, department: &Department) -> RepoResult<DepartmentId> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO departments (name, created_at, updated_at)
            VALUES ($1, $2, $3)
            RETURNING id
            ",
        )
        .bind(&department.name)
        .bind(department.created_at)
        .bind(department.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DepartmentNameExists))?;

        Ok(DepartmentId::new(id))
    }

    #[instrument(skip(self, department))]
    async fn update(&self, department: &Department) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE departments SET name = $2, updated_at = NOW() WHERE id = $1
            ",
        )
        .bind(department.id.into_inner())
        .bind(&department.name)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DepartmentNameExists))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::DepartmentNotFound(department.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: DepartmentId) -> RepoResult<()> {
        // Restrict-on-delete: the FK on employees.department_id raises
        // while any employee row still references this department
        let result = sqlx::query(
            r"
            DELETE FROM departments WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, || DomainError::DepartmentNotEmpty))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::DepartmentNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn employee_count(&self, id: DepartmentId) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM employees WHERE department_id = $1 AND is_deleted = FALSE
            ",
        )
        .bind(id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
