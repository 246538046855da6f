//! Counter database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the user_counters table
#[derive(Debug, Clone, FromRow)]
pub struct UserCountersModel {
    pub user_id: i64,
    pub reaction_count: i64,
    pub post_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
