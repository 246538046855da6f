//! PostgreSQL implementation of CounterRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use progress_core::traits::{CounterRepository, RepoResult};
use progress_core::{CounterKind, Snowflake, UserCounters};

use crate::mappers::counters_from_model;
use crate::models::UserCountersModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CounterRepository
///
/// The increment is a single upsert-returning statement, so concurrent
/// increments for the same user serialize at the row lock and no update is
/// ever lost.
#[derive(Clone)]
pub struct PgCounterRepository {
    pool: PgPool,
}

impl PgCounterRepository {
    /// Create a new PgCounterRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CounterRepository for PgCounterRepository {
    #[instrument(skip(self))]
    async fn increment_and_get(&self, user_id: Snowflake, kind: CounterKind) -> RepoResult<i64> {
        let query = match kind {
            CounterKind::Reactions => {
                sqlx::query_scalar::<_, i64>(
                    r#"
                    INSERT INTO user_counters (user_id, reaction_count, post_count, created_at, updated_at)
                    VALUES ($1, 1, 0, NOW(), NOW())
                    ON CONFLICT (user_id)
                    DO UPDATE SET reaction_count = user_counters.reaction_count + 1, updated_at = NOW()
                    RETURNING reaction_count
                    "#,
                )
            }
            CounterKind::Posts => {
                sqlx::query_scalar::<_, i64>(
                    r#"
                    INSERT INTO user_counters (user_id, reaction_count, post_count, created_at, updated_at)
                    VALUES ($1, 0, 1, NOW(), NOW())
                    ON CONFLICT (user_id)
                    DO UPDATE SET post_count = user_counters.post_count + 1, updated_at = NOW()
                    RETURNING post_count
                    "#,
                )
            }
        };

        let total = query
            .bind(user_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(total)
    }

    #[instrument(skip(self))]
    async fn find(&self, user_id: Snowflake) -> RepoResult<Option<UserCounters>> {
        let result = sqlx::query_as::<_, UserCountersModel>(
            r#"
            SELECT user_id, reaction_count, post_count, created_at, updated_at
            FROM user_counters
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(counters_from_model))
    }
}
