//! Progression service
//!
//! Orchestrates eligibility checking, the cooldown gate, the atomic counter
//! increment, and the threshold evaluation for both tracked action types.

use chrono::{DateTime, Utc};
use tracing::{info, instrument};

use progress_core::{CounterKind, MessageCreated, MessageInfo, MessageRef, ReactionAdded};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::grant::RoleGrantService;
use super::outcome::{EventOutcome, SkipReason};

/// Progression service
pub struct ProgressionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProgressionService<'a> {
    /// Create a new ProgressionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Handle a message event as a potential media post
    ///
    /// A count commits only when the message is a qualifying post and the
    /// per-user post cooldown admits it. Side-effect failures after the
    /// commit are reflected in the outcome, never as errors.
    #[instrument(skip(self, event), fields(author_id = %event.author_id, channel_id = %event.channel_id))]
    pub async fn handle_message(
        &self,
        event: &MessageCreated,
        now: DateTime<Utc>,
    ) -> ServiceResult<EventOutcome> {
        let Some(guild_id) = event.guild_id else {
            return Ok(EventOutcome::Skipped(SkipReason::OutsideGuild));
        };
        if event.author_is_bot {
            return Ok(EventOutcome::Skipped(SkipReason::AutomatedActor));
        }
        if !self.ctx.tracking().is_monitored(event.channel_id) {
            return Ok(EventOutcome::Skipped(SkipReason::UnmonitoredChannel));
        }
        if !event.has_attachment() {
            return Ok(EventOutcome::Skipped(SkipReason::MissingAttachment));
        }

        if !self.ctx.window().should_count_post(event.author_id, now) {
            return Ok(EventOutcome::Skipped(SkipReason::CooldownActive));
        }

        let total = self
            .ctx
            .counter_repo()
            .increment_and_get(event.author_id, CounterKind::Posts)
            .await
            .map_err(ServiceError::Persistence)?;

        info!(author_id = %event.author_id, total, "Media post counted");

        let grant = RoleGrantService::new(self.ctx)
            .apply(guild_id, event.author_id, CounterKind::Posts, total)
            .await;

        Ok(EventOutcome::Counted {
            kind: CounterKind::Posts,
            total,
            grant,
        })
    }

    /// Handle a reaction event
    ///
    /// A partial message reference is hydrated through the gateway before the
    /// guild/channel checks run; a hydration failure drops the event without
    /// counting.
    #[instrument(skip(self, event), fields(user_id = %event.user_id))]
    pub async fn handle_reaction(
        &self,
        event: &ReactionAdded,
        now: DateTime<Utc>,
    ) -> ServiceResult<EventOutcome> {
        if event.user_is_bot {
            return Ok(EventOutcome::Skipped(SkipReason::AutomatedActor));
        }

        let message = self.resolve_message(&event.message).await?;

        let Some(guild_id) = message.guild_id else {
            return Ok(EventOutcome::Skipped(SkipReason::OutsideGuild));
        };
        if !self.ctx.tracking().is_monitored(message.channel_id) {
            return Ok(EventOutcome::Skipped(SkipReason::UnmonitoredChannel));
        }

        if !self
            .ctx
            .window()
            .should_count_reaction(event.user_id, message.message_id, now)
        {
            return Ok(EventOutcome::Skipped(SkipReason::CooldownActive));
        }

        let total = self
            .ctx
            .counter_repo()
            .increment_and_get(event.user_id, CounterKind::Reactions)
            .await
            .map_err(ServiceError::Persistence)?;

        info!(user_id = %event.user_id, message_id = %message.message_id, total, "Reaction counted");

        let grant = RoleGrantService::new(self.ctx)
            .apply(guild_id, event.user_id, CounterKind::Reactions, total)
            .await;

        Ok(EventOutcome::Counted {
            kind: CounterKind::Reactions,
            total,
            grant,
        })
    }

    /// Resolve a message reference to its full form
    async fn resolve_message(&self, message: &MessageRef) -> ServiceResult<MessageInfo> {
        match message {
            MessageRef::Full(info) => Ok(*info),
            MessageRef::Partial { message_id } => self
                .ctx
                .gateway()
                .fetch_full_message(*message_id)
                .await
                .map_err(ServiceError::Gateway),
        }
    }
}
