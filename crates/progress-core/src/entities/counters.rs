//! UserCounters entity - per-user running totals for tracked actions

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Which of the two tracked counters an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterKind {
    /// Distinct qualifying reactions attributed to the user
    Reactions,
    /// Distinct qualifying media posts attributed to the user
    Posts,
}

impl CounterKind {
    /// Human-readable metric name used in announcements and replies
    #[inline]
    pub const fn metric_name(self) -> &'static str {
        match self {
            Self::Reactions => "reactions",
            Self::Posts => "posts",
        }
    }
}

impl std::fmt::Display for CounterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.metric_name())
    }
}

/// Per-user counter record (one per user, keyed by user id)
///
/// Both counters are monotonically non-decreasing over the record's lifetime.
/// Created lazily on the first qualifying event, never deleted by this core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCounters {
    pub user_id: Snowflake,
    pub reaction_count: i64,
    pub post_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserCounters {
    /// Create a fresh record with both counters at zero
    pub fn new(user_id: Snowflake) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            reaction_count: 0,
            post_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Current total for the given counter
    #[inline]
    pub fn count(&self, kind: CounterKind) -> i64 {
        match kind {
            CounterKind::Reactions => self.reaction_count,
            CounterKind::Posts => self.post_count,
        }
    }

    /// Apply one counted occurrence and return the new total
    pub fn increment(&mut self, kind: CounterKind) -> i64 {
        let slot = match kind {
            CounterKind::Reactions => &mut self.reaction_count,
            CounterKind::Posts => &mut self.post_count,
        };
        *slot += 1;
        self.updated_at = Utc::now();
        *slot
    }
}
