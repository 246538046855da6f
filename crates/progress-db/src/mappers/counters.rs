//! Mapper between UserCountersModel and the UserCounters entity

use progress_core::{Snowflake, UserCounters};

use crate::models::UserCountersModel;

/// Convert a database row into the domain entity
pub fn counters_from_model(model: UserCountersModel) -> UserCounters {
    UserCounters {
        user_id: Snowflake::new(model.user_id),
        reaction_count: model.reaction_count,
        post_count: model.post_count,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
