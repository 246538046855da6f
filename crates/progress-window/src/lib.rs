//! # progress-window
//!
//! Process-local deduplication window: short-lived, per-(user, event-key)
//! memory of "already counted" state, used to suppress double-counting from
//! duplicate or rapid-fire events. State is never persisted; a restart resets
//! cooldowns only, never counters.

mod window;

pub use window::CooldownWindow;
