//! # hr-cache
//!
//! Redis caching layer for the department-list read-through cache.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Department list**: bounded-staleness cache of the department listing,
//!   invalidated on department mutations
//!
//! The cache is not correctness-critical: a miss or a Redis failure only
//! means a database read.

pub mod departments;
pub mod pool;

// Re-export pool types
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};

// Re-export cache stores
pub use departments::{CachedDepartment, DepartmentListCache};
