//! Service context - dependency container for services
//!
//! Holds all repositories, the department cache, and the connection pools
//! needed by services.

use std::sync::Arc;

use hr_cache::{DepartmentListCache, RedisPool};
use hr_core::traits::{
    AuditLogRepository, DepartmentRepository, EmployeeRepository, StatusChangeRequestRepository,
};
use hr_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The Redis department-list cache
/// - The raw connection pools (health checks)
#[derive(Clone)]
pub struct ServiceContext {
    // Pools
    pool: PgPool,
    redis_pool: RedisPool,

    // Repositories
    employee_repo: Arc<dyn EmployeeRepository>,
    department_repo: Arc<dyn DepartmentRepository>,
    audit_repo: Arc<dyn AuditLogRepository>,
    request_repo: Arc<dyn StatusChangeRequestRepository>,

    // Cache stores
    department_cache: DepartmentListCache,
}

impl ServiceContext {
    // === Pools ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the Redis connection pool
    pub fn redis_pool(&self) -> &RedisPool {
        &self.redis_pool
    }

    // === Repositories ===

    /// Get the employee repository
    pub fn employee_repo(&self) -> &dyn EmployeeRepository {
        self.employee_repo.as_ref()
    }

    /// Get the department repository
    pub fn department_repo(&self) -> &dyn DepartmentRepository {
        self.department_repo.as_ref()
    }

    /// Get the audit log repository
    pub fn audit_repo(&self) -> &dyn AuditLogRepository {
        self.audit_repo.as_ref()
    }

    /// Get the status-change request repository
    pub fn request_repo(&self) -> &dyn StatusChangeRequestRepository {
        self.request_repo.as_ref()
    }

    // === Cache Stores ===

    /// Get the department list cache
    pub fn department_cache(&self) -> &DepartmentListCache {
        &self.department_cache
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("redis_pool", &"RedisPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for [`ServiceContext`]
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    redis_pool: Option<RedisPool>,
    employee_repo: Option<Arc<dyn EmployeeRepository>>,
    department_repo: Option<Arc<dyn DepartmentRepository>>,
    audit_repo: Option<Arc<dyn AuditLogRepository>>,
    request_repo: Option<Arc<dyn StatusChangeRequestRepository>>,
    department_cache: Option<DepartmentListCache>,
}

impl ServiceContextBuilder {
    /// Create an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    #[must_use]
    pub fn redis_pool(mut self, redis_pool: RedisPool) -> Self {
        self.redis_pool = Some(redis_pool);
        self
    }

    #[must_use]
    pub fn employee_repo(mut self, repo: Arc<dyn EmployeeRepository>) -> Self {
        self.employee_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn department_repo(mut self, repo: Arc<dyn DepartmentRepository>) -> Self {
        self.department_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn audit_repo(mut self, repo: Arc<dyn AuditLogRepository>) -> Self {
        self.audit_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn request_repo(mut self, repo: Arc<dyn StatusChangeRequestRepository>) -> Self {
        self.request_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn department_cache(mut self, cache: DepartmentListCache) -> Self {
        self.department_cache = Some(cache);
        self
    }

    /// Build the context; fails naming the first missing dependency
    pub fn build(self) -> Result<ServiceContext, String> {
        Ok(ServiceContext {
            pool: self.pool.ok_or("pool is required")?,
            redis_pool: self.redis_pool.ok_or("redis_pool is required")?,
            employee_repo: self.employee_repo.ok_or("employee_repo is required")?,
            department_repo: self.department_repo.ok_or("department_repo is required")?,
            audit_repo: self.audit_repo.ok_or("audit_repo is required")?,
            request_repo: self.request_repo.ok_or("request_repo is required")?,
            department_cache: self.department_cache.ok_or("department_cache is required")?,
        })
    }
}
