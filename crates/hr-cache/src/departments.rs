//! Department list cache
//!
//! Short-lived read-through cache of the full department listing. The list
//! is small and read on almost every employee form, so it is cached as one
//! JSON value under a single key with a bounded staleness window. Mutations
//! to departments invalidate the key; expiry covers everything else.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hr_core::entities::Department;
use hr_core::value_objects::DepartmentId;

use crate::pool::{RedisPool, RedisResult};

/// Key holding the serialized department list
const DEPARTMENT_LIST_KEY: &str = "departments:all";

/// Default staleness window (seconds)
const DEFAULT_TTL: u64 = 60;

/// Cached projection of a department
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedDepartment {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Department> for CachedDepartment {
    fn from(department: &Department) -> Self {
        Self {
            id: department.id.into_inner(),
            name: department.name.clone(),
            created_at: department.created_at,
            updated_at: department.updated_at,
        }
    }
}

impl From<CachedDepartment> for Department {
    fn from(cached: CachedDepartment) -> Self {
        Department {
            id: DepartmentId::new(cached.id),
            name: cached.name,
            created_at: cached.created_at,
            updated_at: cached.updated_at,
        }
    }
}

/// Read-through cache for the department list
#[derive(Clone)]
pub struct DepartmentListCache {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl DepartmentListCache {
    /// Create a cache with the default staleness window
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            ttl_seconds: DEFAULT_TTL,
        }
    }

    /// Create with a custom staleness window
    #[must_use]
    pub fn with_ttl(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    /// Get the cached list, if present and unexpired
    pub async fn get(&self) -> RedisResult<Option<Vec<Department>>> {
        let cached: Option<Vec<CachedDepartment>> =
            self.pool.get_value(DEPARTMENT_LIST_KEY).await?;
        Ok(cached.map(|list| list.into_iter().map(Department::from).collect()))
    }

    /// Store the list with the configured TTL
    pub async fn put(&self, departments: &[Department]) -> RedisResult<()> {
        let cached: Vec<CachedDepartment> =
            departments.iter().map(CachedDepartment::from).collect();
        self.pool
            .set(DEPARTMENT_LIST_KEY, &cached, Some(self.ttl_seconds))
            .await?;

        tracing::debug!(count = cached.len(), ttl = self.ttl_seconds, "Department list cached");
        Ok(())
    }

    /// Drop the cached list (called after any department mutation)
    pub async fn invalidate(&self) -> RedisResult<()> {
        self.pool.delete(DEPARTMENT_LIST_KEY).await?;
        tracing::debug!("Department list cache invalidated");
        Ok(())
    }
}
