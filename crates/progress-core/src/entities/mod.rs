//! Domain entities - core business objects

mod counters;
mod member;

pub use counters::{CounterKind, UserCounters};
pub use member::GuildMember;
