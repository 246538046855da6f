//! Role grant service
//!
//! Idempotently elevates a user's standing and notifies once. Every failure
//! past this point is suppressed with a log line: the counter increment has
//! already committed and a missed grant is recoverable on the next
//! qualifying event, whereas a rolled-back count would not be.

use tracing::{debug, info, instrument, warn};

use progress_core::{CounterKind, GuildMember, Snowflake};

use super::context::ServiceContext;
use super::outcome::GrantOutcome;

/// Role grant & announce service
pub struct RoleGrantService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RoleGrantService<'a> {
    /// Create a new RoleGrantService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Run the full side-effect path for a freshly counted action
    ///
    /// Fetches the member once, grants the per-action participant role, then
    /// evaluates the progression threshold.
    #[instrument(skip(self), fields(guild_id = %guild_id, user_id = %user_id))]
    pub async fn apply(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        kind: CounterKind,
        total: i64,
    ) -> GrantOutcome {
        let member = match self.ctx.gateway().fetch_guild_member(guild_id, user_id).await {
            Ok(Some(member)) => member,
            Ok(None) => {
                debug!(user_id = %user_id, "User is not a guild member, skipping grants");
                return GrantOutcome::MemberUnavailable;
            }
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Member fetch failed, skipping grants");
                return GrantOutcome::MemberUnavailable;
            }
        };

        self.ensure_participant_role(&member, kind).await;
        self.try_grant_progression(&member, kind, total).await
    }

    /// Grant the per-action participant role when configured and missing
    ///
    /// Runs on every qualifying action regardless of totals.
    pub async fn ensure_participant_role(&self, member: &GuildMember, kind: CounterKind) {
        let role_id = match kind {
            CounterKind::Reactions => self.ctx.roles().reaction_participant,
            CounterKind::Posts => self.ctx.roles().post_participant,
        };
        let Some(role_id) = role_id else {
            return;
        };
        if member.has_role(role_id) {
            return;
        }

        if let Err(e) = self
            .ctx
            .gateway()
            .grant_role(member.guild_id, member.user_id, role_id)
            .await
        {
            warn!(
                user_id = %member.user_id,
                role_id = %role_id,
                error = %e,
                "Participant role grant failed"
            );
        }
    }

    /// Evaluate the progression threshold and grant + announce on first cross
    ///
    /// The membership read is the idempotence guard: a member already holding
    /// the role is never granted or announced again.
    pub async fn try_grant_progression(
        &self,
        member: &GuildMember,
        kind: CounterKind,
        total: i64,
    ) -> GrantOutcome {
        let role_id = self.ctx.roles().progression;
        if member.has_role(role_id) {
            return GrantOutcome::AlreadyHeld;
        }
        if total < self.ctx.threshold(kind) {
            return GrantOutcome::BelowThreshold;
        }

        if let Err(e) = self
            .ctx
            .gateway()
            .grant_role(member.guild_id, member.user_id, role_id)
            .await
        {
            warn!(
                user_id = %member.user_id,
                role_id = %role_id,
                error = %e,
                "Progression role grant failed"
            );
            return GrantOutcome::GrantFailed;
        }

        info!(
            user_id = %member.user_id,
            metric = %kind,
            total,
            "Progression role granted"
        );

        let content = announcement_text(member.user_id, kind, total);
        if let Err(e) = self
            .ctx
            .gateway()
            .send_message(self.ctx.tracking().broadcast_channel_id, &content)
            .await
        {
            warn!(user_id = %member.user_id, error = %e, "Announcement delivery failed");
        }

        GrantOutcome::Granted
    }
}

/// Announcement posted to the broadcast channel on first threshold cross
pub fn announcement_text(user_id: Snowflake, kind: CounterKind, total: i64) -> String {
    format!(
        "🏆 RANK UP! <@{user_id}> unlocked the inner circle by hitting **{total} {metric}**.",
        metric = kind.metric_name()
    )
}
