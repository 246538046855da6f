//! Stats command tests
//!
//! The read-only `!reacts` / `!posts` interface: reports totals, never
//! mutates state, reports zero for unknown users.

use integration_tests::helpers::{
    test_context, text_message, MONITORED_CHANNEL, UNMONITORED_CHANNEL,
};
use progress_core::{CounterKind, Snowflake};
use progress_core::traits::CounterRepository;
use progress_engine::StatsCommandService;

const USER: Snowflake = Snowflake::new(600);

#[tokio::test]
async fn reacts_command_reports_zero_for_unknown_user() {
    let t = test_context();
    let service = StatsCommandService::new(&t.ctx);

    let handled = service
        .maybe_handle(&text_message(USER, MONITORED_CHANNEL, "!reacts"))
        .await
        .unwrap();

    assert!(handled);
    let replies = t.gateway.messages_to(MONITORED_CHANNEL);
    assert_eq!(replies.len(), 1);
    assert!(replies[0].contains("**0** counted reactions"));
    // Reading must never create a record
    assert_eq!(t.counters.total(USER, CounterKind::Reactions), 0);
}

#[tokio::test]
async fn posts_command_reports_the_current_total() {
    let t = test_context();
    for _ in 0..3 {
        t.counters
            .increment_and_get(USER, CounterKind::Posts)
            .await
            .unwrap();
    }
    let service = StatsCommandService::new(&t.ctx);

    let handled = service
        .maybe_handle(&text_message(USER, MONITORED_CHANNEL, "!posts"))
        .await
        .unwrap();

    assert!(handled);
    let replies = t.gateway.messages_to(MONITORED_CHANNEL);
    assert!(replies[0].contains("**3** counted media posts"));
    assert!(replies[0].contains(&format!("<@{USER}>")));
}

#[tokio::test]
async fn commands_work_outside_monitored_channels() {
    let t = test_context();
    let service = StatsCommandService::new(&t.ctx);

    let handled = service
        .maybe_handle(&text_message(USER, UNMONITORED_CHANNEL, "!reacts"))
        .await
        .unwrap();

    assert!(handled);
    assert_eq!(t.gateway.messages_to(UNMONITORED_CHANNEL).len(), 1);
}

#[tokio::test]
async fn non_command_content_is_not_handled() {
    let t = test_context();
    let service = StatsCommandService::new(&t.ctx);

    for content in ["hello", "!reactsX", "!stats", ""] {
        let handled = service
            .maybe_handle(&text_message(USER, MONITORED_CHANNEL, content))
            .await
            .unwrap();
        assert!(!handled, "{content:?} should not be handled");
    }
    assert!(t.gateway.messages_to(MONITORED_CHANNEL).is_empty());
}

#[tokio::test]
async fn commands_from_bots_and_dms_are_ignored() {
    let t = test_context();
    let service = StatsCommandService::new(&t.ctx);

    let mut from_bot = text_message(USER, MONITORED_CHANNEL, "!reacts");
    from_bot.author_is_bot = true;
    assert!(!service.maybe_handle(&from_bot).await.unwrap());

    let mut from_dm = text_message(USER, MONITORED_CHANNEL, "!posts");
    from_dm.guild_id = None;
    assert!(!service.maybe_handle(&from_dm).await.unwrap());

    assert!(t.gateway.messages_to(MONITORED_CHANNEL).is_empty());
}

#[tokio::test]
async fn reply_failure_still_counts_as_handled() {
    let t = test_context();
    t.gateway.set_fail_sends(true);
    let service = StatsCommandService::new(&t.ctx);

    let handled = service
        .maybe_handle(&text_message(USER, MONITORED_CHANNEL, "!reacts"))
        .await
        .unwrap();

    assert!(handled);
}
