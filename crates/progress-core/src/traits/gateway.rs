//! Chat gateway trait (port) - the outbound surface of the platform connection
//!
//! Everything the progression core asks of the chat platform goes through
//! this trait: hydrating partial messages, reading membership, writing roles,
//! and delivering announcements.

use async_trait::async_trait;

use crate::entities::GuildMember;
use crate::error::DomainError;
use crate::events::MessageInfo;
use crate::value_objects::Snowflake;

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Resolve a partial message reference to its full form
    async fn fetch_full_message(&self, message_id: Snowflake) -> GatewayResult<MessageInfo>;

    /// Fetch a member snapshot, `None` if the user is not in the guild
    async fn fetch_guild_member(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
    ) -> GatewayResult<Option<GuildMember>>;

    /// Grant a role to a member
    async fn grant_role(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        role_id: Snowflake,
    ) -> GatewayResult<()>;

    /// Send a text message to a channel
    async fn send_message(&self, channel_id: Snowflake, content: &str) -> GatewayResult<()>;
}
