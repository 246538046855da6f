//! Shared test harness: wired-up service context and event constructors

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use progress_common::{RoleConfig, ThresholdConfig, TrackingConfig};
use progress_core::traits::{ChatGateway, CounterRepository};
use progress_core::{MessageCreated, MessageInfo, MessageRef, ReactionAdded, Snowflake};
use progress_engine::ServiceContext;
use progress_window::CooldownWindow;

use crate::fixtures::{MemoryCounterRepository, RecordingGateway};

pub const GUILD: Snowflake = Snowflake::new(1000);
pub const MONITORED_CHANNEL: Snowflake = Snowflake::new(2000);
pub const UNMONITORED_CHANNEL: Snowflake = Snowflake::new(2001);
pub const BROADCAST_CHANNEL: Snowflake = Snowflake::new(2100);
pub const PROGRESSION_ROLE: Snowflake = Snowflake::new(3000);
pub const REACTION_ROLE: Snowflake = Snowflake::new(3001);
pub const POST_ROLE: Snowflake = Snowflake::new(3002);

/// Everything a test needs: the fakes plus the wired service context
pub struct TestContext {
    pub counters: Arc<MemoryCounterRepository>,
    pub gateway: Arc<RecordingGateway>,
    pub window: Arc<CooldownWindow>,
    pub ctx: ServiceContext,
}

/// Build a context with the default thresholds (50/50) and cooldowns (60s/30s)
pub fn test_context() -> TestContext {
    test_context_with_thresholds(50, 50)
}

/// Build a context with custom progression thresholds
pub fn test_context_with_thresholds(reactions: i64, posts: i64) -> TestContext {
    let counters = Arc::new(MemoryCounterRepository::new());
    let gateway = Arc::new(RecordingGateway::new());
    let window = Arc::new(CooldownWindow::new(
        Duration::seconds(60),
        Duration::seconds(30),
    ));

    let ctx = ServiceContext::new(
        Arc::clone(&counters) as Arc<dyn CounterRepository>,
        Arc::clone(&gateway) as Arc<dyn ChatGateway>,
        Arc::clone(&window),
        TrackingConfig {
            monitored_channels: vec![MONITORED_CHANNEL],
            broadcast_channel_id: BROADCAST_CHANNEL,
        },
        RoleConfig {
            reaction_participant: Some(REACTION_ROLE),
            post_participant: Some(POST_ROLE),
            progression: PROGRESSION_ROLE,
        },
        ThresholdConfig {
            reactions,
            posts,
        },
    );

    TestContext {
        counters,
        gateway,
        window,
        ctx,
    }
}

/// Fixed test clock: `at(0)` is an arbitrary instant, offsets are in seconds
pub fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
}

/// A media post in the given channel
pub fn media_post(author_id: Snowflake, channel_id: Snowflake, message_id: i64) -> MessageCreated {
    MessageCreated {
        message_id: Snowflake::new(message_id),
        channel_id,
        guild_id: Some(GUILD),
        author_id,
        author_is_bot: false,
        attachment_count: 1,
        content: String::new(),
    }
}

/// A plain text message (no attachments)
pub fn text_message(author_id: Snowflake, channel_id: Snowflake, content: &str) -> MessageCreated {
    MessageCreated {
        message_id: Snowflake::new(1),
        channel_id,
        guild_id: Some(GUILD),
        author_id,
        author_is_bot: false,
        attachment_count: 0,
        content: content.to_string(),
    }
}

/// A reaction on a fully resolved message
pub fn reaction(user_id: Snowflake, message: MessageRef) -> ReactionAdded {
    ReactionAdded {
        user_id,
        user_is_bot: false,
        message,
    }
}

/// A full message reference in the monitored channel
pub fn full_ref(message_id: i64) -> MessageRef {
    MessageRef::Full(MessageInfo {
        message_id: Snowflake::new(message_id),
        channel_id: MONITORED_CHANNEL,
        guild_id: Some(GUILD),
    })
}
