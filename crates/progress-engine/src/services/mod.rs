//! Service layer - progression orchestration and side effects

mod commands;
mod context;
mod error;
mod grant;
mod outcome;
mod progression;

pub use commands::StatsCommandService;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use grant::RoleGrantService;
pub use outcome::{EventOutcome, GrantOutcome, SkipReason};
pub use progression::ProgressionService;
