//! # progress-engine
//!
//! Application layer: decides whether an incoming event counts, commits the
//! durable increment exactly once per qualifying event, and drives the
//! idempotent role-grant side effects when a threshold is crossed.

pub mod services;

// Re-export commonly used types at crate root
pub use services::{
    EventOutcome, GrantOutcome, ProgressionService, RoleGrantService, ServiceContext,
    ServiceError, ServiceResult, SkipReason, StatsCommandService,
};
