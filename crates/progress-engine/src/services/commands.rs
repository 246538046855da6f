//! Stats command service
//!
//! Read-only text commands reporting a user's current totals. Never mutates
//! state; unknown users read as zero rather than failing.

use tracing::{instrument, warn};

use progress_core::{CounterKind, MessageCreated};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Command that reports counted reactions
pub const REACTS_COMMAND: &str = "!reacts";
/// Command that reports counted media posts
pub const POSTS_COMMAND: &str = "!posts";

/// Stats command service
pub struct StatsCommandService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsCommandService<'a> {
    /// Create a new StatsCommandService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Handle the message if it is a stats command
    ///
    /// Returns `Ok(true)` when the message was a recognized command (whether
    /// or not the reply was deliverable), `Ok(false)` otherwise. Commands
    /// work in any guild channel, not just monitored ones.
    #[instrument(skip(self, event), fields(author_id = %event.author_id))]
    pub async fn maybe_handle(&self, event: &MessageCreated) -> ServiceResult<bool> {
        let kind = match event.content.trim() {
            REACTS_COMMAND => CounterKind::Reactions,
            POSTS_COMMAND => CounterKind::Posts,
            _ => return Ok(false),
        };
        if event.guild_id.is_none() || event.author_is_bot {
            return Ok(false);
        }

        let total = self
            .ctx
            .counter_repo()
            .find(event.author_id)
            .await
            .map_err(ServiceError::Persistence)?
            .map_or(0, |counters| counters.count(kind));

        let content = reply_text(event.author_id, kind, total);
        if let Err(e) = self
            .ctx
            .gateway()
            .send_message(event.channel_id, &content)
            .await
        {
            warn!(author_id = %event.author_id, error = %e, "Stats reply delivery failed");
        }

        Ok(true)
    }
}

/// Reply sent back to the channel the command arrived in
pub fn reply_text(user_id: progress_core::Snowflake, kind: CounterKind, total: i64) -> String {
    match kind {
        CounterKind::Reactions => {
            format!("<@{user_id}> You've logged **{total}** counted reactions.")
        }
        CounterKind::Posts => {
            format!("<@{user_id}> You've logged **{total}** counted media posts.")
        }
    }
}
