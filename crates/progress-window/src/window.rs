//! Cooldown window over concurrent per-key timestamp tables
//!
//! Reactions are keyed by (user, message) so re-reacting to the same message
//! is suppressed; posts are keyed by user alone so rapid-fire posting is
//! throttled regardless of channel.

use chrono::{DateTime, Duration, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::hash::Hash;

use progress_core::Snowflake;

/// Deduplication window for the two tracked action types
///
/// The window is sliding: every check attempt refreshes the key's timestamp,
/// counted or not. Check-and-refresh for one key is atomic (DashMap entry
/// lock), so two concurrent events for the same key cannot both pass.
pub struct CooldownWindow {
    reaction_cooldown: Duration,
    post_cooldown: Duration,
    reactions: DashMap<(Snowflake, Snowflake), DateTime<Utc>>,
    posts: DashMap<Snowflake, DateTime<Utc>>,
}

impl CooldownWindow {
    /// Create a window with explicit cooldown durations
    pub fn new(reaction_cooldown: Duration, post_cooldown: Duration) -> Self {
        Self {
            reaction_cooldown,
            post_cooldown,
            reactions: DashMap::new(),
            posts: DashMap::new(),
        }
    }

    /// Create a window from the application cooldown configuration
    pub fn from_config(config: &progress_common::CooldownConfig) -> Self {
        Self::new(
            Duration::seconds(config.reaction_secs as i64),
            Duration::seconds(config.post_secs as i64),
        )
    }

    /// Whether a reaction by `user_id` on `message_id` should count at `now`
    ///
    /// Returns true iff no entry exists for the key or the entry has aged past
    /// the reaction cooldown. The timestamp is refreshed either way.
    pub fn should_count_reaction(
        &self,
        user_id: Snowflake,
        message_id: Snowflake,
        now: DateTime<Utc>,
    ) -> bool {
        claim(
            &self.reactions,
            (user_id, message_id),
            self.reaction_cooldown,
            now,
        )
    }

    /// Whether a media post by `user_id` should count at `now`
    pub fn should_count_post(&self, user_id: Snowflake, now: DateTime<Utc>) -> bool {
        claim(&self.posts, user_id, self.post_cooldown, now)
    }

    /// Drop entries that have aged past their cooldown
    ///
    /// Expired entries never block a count, so pruning is purely a memory
    /// bound. Returns the number of entries removed.
    pub fn prune(&self, now: DateTime<Utc>) -> usize {
        let before = self.len();
        self.reactions
            .retain(|_, last| now - *last < self.reaction_cooldown);
        self.posts.retain(|_, last| now - *last < self.post_cooldown);
        let removed = before.saturating_sub(self.len());
        if removed > 0 {
            tracing::debug!(removed, remaining = self.len(), "Pruned cooldown window");
        }
        removed
    }

    /// Number of live entries across both tables
    pub fn len(&self) -> usize {
        self.reactions.len() + self.posts.len()
    }

    /// Whether the window holds no entries
    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty() && self.posts.is_empty()
    }
}

/// Atomic check-and-refresh for one key
///
/// The entry guard serializes concurrent callers on the same key; exactly one
/// of them observes an expired (or absent) entry.
fn claim<K: Eq + Hash>(
    map: &DashMap<K, DateTime<Utc>>,
    key: K,
    cooldown: Duration,
    now: DateTime<Utc>,
) -> bool {
    match map.entry(key) {
        Entry::Occupied(mut entry) => {
            let countable = now - *entry.get() >= cooldown;
            // Sliding window: rejected attempts also reset the clock
            entry.insert(now);
            countable
        }
        Entry::Vacant(entry) => {
            entry.insert(now);
            true
        }
    }
}
