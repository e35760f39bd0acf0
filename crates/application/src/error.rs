//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Transport failure or non-success HTTP status
    #[error("Network error: {0}")]
    Network(String),

    /// Payload could not be decoded into the domain model
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Lookup produced no result
    #[error("Not found: {0}")]
    NotFound(String),

    /// Device position could not be determined
    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether the failure came from talking to a remote service
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::InvalidResponse(_) | Self::RateLimited
        )
    }
}
