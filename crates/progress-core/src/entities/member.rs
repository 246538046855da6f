//! Member entity - a read-only snapshot of a user's guild membership
//!
//! The chat platform owns membership; this core only reads role membership
//! from it (the idempotence guard for progression grants) and records grants
//! it has requested.

use crate::value_objects::Snowflake;

/// Guild member snapshot fetched from the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildMember {
    pub guild_id: Snowflake,
    pub user_id: Snowflake,
    pub role_ids: Vec<Snowflake>,
}

impl GuildMember {
    /// Create a new GuildMember snapshot
    pub fn new(guild_id: Snowflake, user_id: Snowflake) -> Self {
        Self {
            guild_id,
            user_id,
            role_ids: Vec::new(),
        }
    }

    /// Snapshot with a preset role list
    pub fn with_roles(guild_id: Snowflake, user_id: Snowflake, role_ids: Vec<Snowflake>) -> Self {
        Self {
            guild_id,
            user_id,
            role_ids,
        }
    }

    /// Check if the member holds a specific role
    #[inline]
    pub fn has_role(&self, role_id: Snowflake) -> bool {
        self.role_ids.contains(&role_id)
    }

    /// Record a role on the snapshot (deduplicated)
    pub fn add_role(&mut self, role_id: Snowflake) {
        if !self.has_role(role_id) {
            self.role_ids.push(role_id);
        }
    }
}
