//! Typed outcomes for handled events
//!
//! Callers and tests can tell "correctly ignored" apart from "counted" and
//! from "counted but a side effect misfired".

use progress_core::CounterKind;

/// Why an event was dropped without counting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Event did not originate inside a recognized guild
    OutsideGuild,
    /// Actor is an automated account
    AutomatedActor,
    /// Channel is not on the monitored whitelist
    UnmonitoredChannel,
    /// Post carries no attached media
    MissingAttachment,
    /// The deduplication window rejected the event
    CooldownActive,
}

/// What happened on the role-grant path after a count committed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantOutcome {
    /// Total is still below the threshold
    BelowThreshold,
    /// The member already holds the progression role (idempotence guard)
    AlreadyHeld,
    /// The role was granted and the announcement attempted
    Granted,
    /// The member could not be fetched; side effects skipped
    MemberUnavailable,
    /// The grant call failed; suppressed, recoverable on a later event
    GrantFailed,
}

/// The result of handling one inbound event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The event did not qualify; nothing changed
    Skipped(SkipReason),
    /// The counter committed; `grant` records the side-effect path taken
    Counted {
        kind: CounterKind,
        total: i64,
        grant: GrantOutcome,
    },
}

impl EventOutcome {
    /// Whether this event resulted in a committed count
    #[inline]
    pub fn is_counted(&self) -> bool {
        matches!(self, Self::Counted { .. })
    }
}
