//! In-memory implementations of the core ports
//!
//! `MemoryCounterRepository` honors the atomic increment contract under a
//! single mutex; `RecordingGateway` records every outbound call and can be
//! told to fail specific call types to exercise the suppression paths.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use progress_core::traits::{ChatGateway, CounterRepository, GatewayResult, RepoResult};
use progress_core::{CounterKind, DomainError, GuildMember, MessageInfo, Snowflake, UserCounters};

/// In-memory counter store
#[derive(Default)]
pub struct MemoryCounterRepository {
    records: Mutex<HashMap<Snowflake, UserCounters>>,
    failing: AtomicBool,
}

impl MemoryCounterRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with a database error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Read a counter total directly, zero when no record exists
    pub fn total(&self, user_id: Snowflake, kind: CounterKind) -> i64 {
        self.records
            .lock()
            .unwrap()
            .get(&user_id)
            .map_or(0, |c| c.count(kind))
    }
}

#[async_trait]
impl CounterRepository for MemoryCounterRepository {
    async fn increment_and_get(&self, user_id: Snowflake, kind: CounterKind) -> RepoResult<i64> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::Database("injected failure".into()));
        }
        let mut records = self.records.lock().unwrap();
        let entry = records
            .entry(user_id)
            .or_insert_with(|| UserCounters::new(user_id));
        Ok(entry.increment(kind))
    }

    async fn find(&self, user_id: Snowflake) -> RepoResult<Option<UserCounters>> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::Database("injected failure".into()));
        }
        Ok(self.records.lock().unwrap().get(&user_id).cloned())
    }
}

/// Recording chat gateway
///
/// Role grants mutate the stored member snapshot, so the query-before-act
/// idempotence guard behaves exactly as it does against the real platform.
#[derive(Default)]
pub struct RecordingGateway {
    members: Mutex<HashMap<(Snowflake, Snowflake), GuildMember>>,
    full_messages: Mutex<HashMap<Snowflake, MessageInfo>>,
    sent: Mutex<Vec<(Snowflake, String)>>,
    grants: Mutex<Vec<(Snowflake, Snowflake, Snowflake)>>,
    fail_member_fetch: AtomicBool,
    fail_grants: AtomicBool,
    fail_sends: AtomicBool,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a member with no roles
    pub fn add_member(&self, guild_id: Snowflake, user_id: Snowflake) {
        self.members
            .lock()
            .unwrap()
            .insert((guild_id, user_id), GuildMember::new(guild_id, user_id));
    }

    /// Register a member holding the given roles
    pub fn add_member_with_roles(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        role_ids: Vec<Snowflake>,
    ) {
        self.members.lock().unwrap().insert(
            (guild_id, user_id),
            GuildMember::with_roles(guild_id, user_id, role_ids),
        );
    }

    /// Register a message for partial-reference hydration
    pub fn insert_full_message(&self, info: MessageInfo) {
        self.full_messages
            .lock()
            .unwrap()
            .insert(info.message_id, info);
    }

    /// Current member snapshot
    pub fn member(&self, guild_id: Snowflake, user_id: Snowflake) -> Option<GuildMember> {
        self.members
            .lock()
            .unwrap()
            .get(&(guild_id, user_id))
            .cloned()
    }

    /// Messages delivered to a channel, in order
    pub fn messages_to(&self, channel_id: Snowflake) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|(channel, _)| *channel == channel_id)
            .map(|(_, content)| content.clone())
            .collect()
    }

    /// Number of grant calls issued for a role
    pub fn grant_count(&self, role_id: Snowflake) -> usize {
        self.grants
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, _, role)| *role == role_id)
            .count()
    }

    pub fn set_fail_member_fetch(&self, fail: bool) {
        self.fail_member_fetch.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_grants(&self, fail: bool) {
        self.fail_grants.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_sends(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl ChatGateway for RecordingGateway {
    async fn fetch_full_message(&self, message_id: Snowflake) -> GatewayResult<MessageInfo> {
        self.full_messages
            .lock()
            .unwrap()
            .get(&message_id)
            .copied()
            .ok_or_else(|| DomainError::Gateway(format!("unknown message {message_id}")))
    }

    async fn fetch_guild_member(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
    ) -> GatewayResult<Option<GuildMember>> {
        if self.fail_member_fetch.load(Ordering::SeqCst) {
            return Err(DomainError::Gateway("member fetch failed".into()));
        }
        Ok(self
            .members
            .lock()
            .unwrap()
            .get(&(guild_id, user_id))
            .cloned())
    }

    async fn grant_role(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        role_id: Snowflake,
    ) -> GatewayResult<()> {
        if self.fail_grants.load(Ordering::SeqCst) {
            return Err(DomainError::Gateway("role grant failed".into()));
        }
        self.grants
            .lock()
            .unwrap()
            .push((guild_id, user_id, role_id));
        if let Some(member) = self.members.lock().unwrap().get_mut(&(guild_id, user_id)) {
            member.add_role(role_id);
        }
        Ok(())
    }

    async fn send_message(&self, channel_id: Snowflake, content: &str) -> GatewayResult<()> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(DomainError::Gateway("send failed".into()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((channel_id, content.to_string()));
        Ok(())
    }
}
