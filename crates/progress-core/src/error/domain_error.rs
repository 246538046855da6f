//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
///
/// The split matters to callers: a `Database` failure on the increment path
/// means the event was not counted, while a `Gateway` failure is a transient
/// side-effect problem that never reverts a committed count.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Gateway error: {0}")]
    Gateway(String),
}

impl DomainError {
    /// Get an error code string for logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::Database(_) => "DATABASE_ERROR",
            Self::Gateway(_) => "GATEWAY_ERROR",
        }
    }

    /// Transient failures are suppressed at the call site; persistent ones
    /// propagate to the handler guard.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Gateway(_))
    }
}
