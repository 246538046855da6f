//! Gateway event payloads
//!
//! The shape of the events the external chat-platform connection delivers.
//! These are the engine's entire view of the platform's inbound surface; the
//! connection itself lives behind the [`crate::traits::ChatGateway`] port.

use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// A message posted in a channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCreated {
    pub message_id: Snowflake,
    pub channel_id: Snowflake,
    /// None for direct messages
    pub guild_id: Option<Snowflake>,
    pub author_id: Snowflake,
    pub author_is_bot: bool,
    pub attachment_count: u32,
    pub content: String,
}

impl MessageCreated {
    /// Whether the message carries any attached media
    #[inline]
    pub fn has_attachment(&self) -> bool {
        self.attachment_count > 0
    }
}

/// Resolved location of a message (guild, channel, id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageInfo {
    pub message_id: Snowflake,
    pub channel_id: Snowflake,
    pub guild_id: Option<Snowflake>,
}

/// A message reference carried by a reaction event
///
/// The platform may deliver reactions on messages it has not hydrated yet;
/// a partial reference must be resolved to its full form before any
/// guild/channel checks are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum MessageRef {
    Partial { message_id: Snowflake },
    Full(MessageInfo),
}

impl MessageRef {
    /// The message id, available in both forms
    #[inline]
    pub fn message_id(&self) -> Snowflake {
        match self {
            Self::Partial { message_id } => *message_id,
            Self::Full(info) => info.message_id,
        }
    }

    /// Whether this reference still needs hydration
    #[inline]
    pub fn is_partial(&self) -> bool {
        matches!(self, Self::Partial { .. })
    }
}

/// A reaction added to a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionAdded {
    pub user_id: Snowflake,
    pub user_is_bot: bool,
    pub message: MessageRef,
}

/// Union of all inbound events the dispatcher routes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GatewayEvent {
    MessageCreated(MessageCreated),
    ReactionAdded(ReactionAdded),
}
