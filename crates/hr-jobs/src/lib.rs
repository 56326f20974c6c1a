//! # hr-jobs
//!
//! Scheduled worker for reminders and periodic report generation.
//!
//! The worker runs a daily tick at a configured hour: birthday and
//! work-anniversary reminders plus the headcount and salary-band CSV
//! reports. It only reads employee data and writes report files; it is
//! never synchronized with interactive mutations and may observe slightly
//! stale data, which is acceptable because the output is advisory.

pub mod scheduler;
pub mod tasks;

use std::sync::Arc;

use hr_cache::{DepartmentListCache, RedisPool, RedisPoolConfig};
use hr_common::{AppConfig, AppError};
use hr_db::{
    create_pool, PgAuditLogRepository, PgDepartmentRepository, PgEmployeeRepository,
    PgStatusChangeRequestRepository,
};
use hr_service::{ServiceContext, ServiceContextBuilder};
use tracing::info;

/// Build the service context and run the scheduler loop forever
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let ctx = build_context(&config).await?;
    scheduler::run_daily(&ctx, &config).await;
    Ok(())
}

/// Wire the same dependency container the API uses
async fn build_context(config: &AppConfig) -> Result<ServiceContext, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = hr_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let redis_pool = RedisPool::new(RedisPoolConfig::from(&config.redis))
        .map_err(|e| AppError::Cache(e.to_string()))?;
    let department_cache =
        DepartmentListCache::with_ttl(redis_pool.clone(), config.cache.department_ttl_secs);

    ServiceContextBuilder::new()
        .pool(pool.clone())
        .redis_pool(redis_pool)
        .employee_repo(Arc::new(PgEmployeeRepository::new(pool.clone())))
        .department_repo(Arc::new(PgDepartmentRepository::new(pool.clone())))
        .audit_repo(Arc::new(PgAuditLogRepository::new(pool.clone())))
        .request_repo(Arc::new(PgStatusChangeRequestRepository::new(pool)))
        .department_cache(department_cache)
        .build()
        .map_err(AppError::Config)
}
