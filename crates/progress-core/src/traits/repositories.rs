//! Repository traits (ports) - define the interface for durable counter state
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{CounterKind, UserCounters};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait CounterRepository: Send + Sync {
    /// Atomically increment the named counter by 1 and return the new total.
    ///
    /// Creates the record if absent (counters start at 0 before the
    /// increment). Two concurrent increments for the same user/kind must both
    /// apply, each returning a total consistent with some valid serialization.
    async fn increment_and_get(&self, user_id: Snowflake, kind: CounterKind) -> RepoResult<i64>;

    /// Find a user's counter record; never creates one.
    ///
    /// Callers treat `None` as both counters at zero.
    async fn find(&self, user_id: Snowflake) -> RepoResult<Option<UserCounters>>;
}
