//! PostgreSQL implementation of AuditLogRepository
//!
//! The audit trail is insert-only; no update or delete statements exist in
//! this module by design of the schema.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use hr_core::entities::AuditLog;
use hr_core::traits::{AuditFilter, AuditLogRepository, AuditQuery, Page, RepoResult};
use hr_core::value_objects::AuditLogId;

use crate::models::AuditLogModel;

use super::error::map_db_error;

const COLUMNS: &str = r#"id, table_name, action, record_id, old_values, new_values, changes, user_id, user_name, "timestamp""#;

const FILTER: &str = r"
    ($1::text IS NULL OR user_name ILIKE '%' || $1 || '%')
    AND ($2::text IS NULL OR table_name ILIKE '%' || $2 || '%')
";

/// PostgreSQL implementation of AuditLogRepository
#[derive(Clone)]
pub struct PgAuditLogRepository {
    pool: PgPool,
}

impl PgAuditLogRepository {
    /// Create a new PgAuditLogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLogRepository for PgAuditLogRepository {
    #[instrument(skip(self, entry))]
    async fn create(&self, entry: &AuditLog) -> RepoResult<AuditLogId> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO audit_logs (
                table_name, action, record_id, old_values, new_values,
                changes, user_id, user_name, "timestamp"
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(&entry.table_name)
        .bind(entry.action.as_str())
        .bind(entry.record_id)
        .bind(&entry.old_values)
        .bind(&entry.new_values)
        .bind(&entry.changes)
        .bind(&entry.user_id)
        .bind(&entry.user_name)
        .bind(entry.timestamp)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(AuditLogId::new(id))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: AuditLogId) -> RepoResult<Option<AuditLog>> {
        let sql = format!("SELECT {COLUMNS} FROM audit_logs WHERE id = $1");
        let result = sqlx::query_as::<_, AuditLogModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(AuditLog::try_from).transpose()
    }

    #[instrument(skip(self, query))]
    async fn list(&self, query: &AuditQuery) -> RepoResult<Page<AuditLog>> {
        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM audit_logs WHERE {FILTER}"
        ))
        .bind(query.filter.user_name.as_deref())
        .bind(query.filter.table_name.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let offset = (query.page.max(1) - 1) * query.per_page;
        let sql = format!(
            r#"SELECT {COLUMNS} FROM audit_logs WHERE {FILTER}
               ORDER BY "timestamp" DESC LIMIT $3 OFFSET $4"#
        );
        let rows = sqlx::query_as::<_, AuditLogModel>(&sql)
            .bind(query.filter.user_name.as_deref())
            .bind(query.filter.table_name.as_deref())
            .bind(query.per_page)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let items = rows
            .into_iter()
            .map(AuditLog::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page { items, total })
    }

    #[instrument(skip(self, filter))]
    async fn list_filtered(&self, filter: &AuditFilter) -> RepoResult<Vec<AuditLog>> {
        let sql = format!(
            r#"SELECT {COLUMNS} FROM audit_logs WHERE {FILTER} ORDER BY "timestamp" DESC"#
        );
        let rows = sqlx::query_as::<_, AuditLogModel>(&sql)
            .bind(filter.user_name.as_deref())
            .bind(filter.table_name.as_deref())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter().map(AuditLog::try_from).collect()
    }
}
