//! Service layer error types
//!
//! Only failures that prevent an event from being counted surface here.
//! Side-effect failures after the increment commits are reflected in
//! [`super::outcome::GrantOutcome`] instead and never roll the counter back.

use progress_core::DomainError;
use thiserror::Error;

/// Service layer error type
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The counter store failed; the event was not counted
    #[error("Persistence failure: {0}")]
    Persistence(#[source] DomainError),

    /// A gateway call required before counting failed (e.g. hydrating a
    /// partial message)
    #[error("Gateway failure before count: {0}")]
    Gateway(#[source] DomainError),
}

impl ServiceError {
    /// Get the error code for structured logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::Persistence(_) => "PERSISTENCE_FAILURE",
            Self::Gateway(_) => "GATEWAY_FAILURE",
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
