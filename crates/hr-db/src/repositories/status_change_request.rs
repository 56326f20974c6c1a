//! PostgreSQL implementation of StatusChangeRequestRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use hr_core::entities::StatusChangeRequest;
use hr_core::error::DomainError;
use hr_core::traits::{RepoResult, StatusChangeRequestRepository};
use hr_core::value_objects::{EmployeeId, RequestId};

use crate::models::StatusChangeRequestModel;

use super::error::{map_db_error, map_unique_violation};

const COLUMNS: &str = "id, employee_id, from_status, to_status, reason, requested_by, \
     requested_at, approved_by, approved_at, status, approval_comments";

/// PostgreSQL implementation of StatusChangeRequestRepository
#[derive(Clone)]
pub struct PgStatusChangeRequestRepository {
    pool: PgPool,
}

impl PgStatusChangeRequestRepository {
    /// Create a new PgStatusChangeRequestRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatusChangeRequestRepository for PgStatusChangeRequestRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RequestId) -> RepoResult<Option<StatusChangeRequest>> {
        let sql = format!("SELECT {COLUMNS} FROM status_change_requests WHERE id = $1");
        let result = sqlx::query_as::<_, StatusChangeRequestModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(StatusChangeRequest::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn has_pending(&self, employee_id: EmployeeId) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM status_change_requests
                WHERE employee_id = $1 AND status = 'pending'
            )
            ",
        )
        .bind(employee_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, request))]
    async fn create(&self, request: &StatusChangeRequest) -> RepoResult<RequestId> {
        // The partial unique index closes the pre-check/insert race: a
        // concurrent duplicate surfaces here as a unique violation
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO status_change_requests (
                employee_id, from_status, to_status, reason,
                requested_by, requested_at, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            ",
        )
        .bind(request.employee_id.into_inner())
        .bind(request.from_status.as_str())
        .bind(request.to_status.as_str())
        .bind(&request.reason)
        .bind(&request.requested_by)
        .bind(request.requested_at)
        .bind(request.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicatePendingRequest))?;

        Ok(RequestId::new(id))
    }

    #[instrument(skip(self))]
    async fn list_pending(&self) -> RepoResult<Vec<StatusChangeRequest>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM status_change_requests \
             WHERE status = 'pending' ORDER BY requested_at"
        );
        let rows = sqlx::query_as::<_, StatusChangeRequestModel>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter().map(StatusChangeRequest::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_employee(
        &self,
        employee_id: EmployeeId,
    ) -> RepoResult<Vec<StatusChangeRequest>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM status_change_requests \
             WHERE employee_id = $1 ORDER BY requested_at DESC"
        );
        let rows = sqlx::query_as::<_, StatusChangeRequestModel>(&sql)
            .bind(employee_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter().map(StatusChangeRequest::try_from).collect()
    }

    #[instrument(skip(self, request))]
    async fn record_decision(&self, request: &StatusChangeRequest) -> RepoResult<()> {
        // Stale-decision guard: only a row still pending can be decided
        let result = sqlx::query(
            r"
            UPDATE status_change_requests
            SET status = $2, approved_by = $3, approved_at = $4, approval_comments = $5
            WHERE id = $1 AND status = 'pending'
            ",
        )
        .bind(request.id.into_inner())
        .bind(request.status.as_str())
        .bind(&request.approved_by)
        .bind(request.approved_at)
        .bind(&request.approval_comments)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            let exists = sqlx::query_scalar::<_, bool>(
                r"
                SELECT EXISTS(SELECT 1 FROM status_change_requests WHERE id = $1)
                ",
            )
            .bind(request.id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

            return if exists {
                Err(DomainError::RequestAlreadyDecided(request.id))
            } else {
                Err(DomainError::RequestNotFound(request.id))
            };
        }

        Ok(())
    }
}
