//! Application-level errors (wraps domain and infrastructure errors)

use std::fmt;

use thiserror::Error;

use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// Application errors carry every failure a command can return.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("serialize world: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("config error: {message}")]
    Config { message: String },
}

/// Closed set of remote failure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Transport,
    Api,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotFound => "not found",
            Self::Transport => "transport error",
            Self::Api => "api error",
        };
        f.write_str(label)
    }
}

impl ApplicationError {
    /// Remote failure kind, if this is one.
    ///
    /// Cancellation and local failures (I/O, serialization, config, invalid input) have no kind.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Domain(DomainError::WorldNotFound(_)) => Some(ErrorKind::NotFound),
            Self::Infra(InfraError::NotFound(_)) => Some(ErrorKind::NotFound),
            Self::Infra(InfraError::Transport { .. }) => Some(ErrorKind::Transport),
            Self::Infra(InfraError::Api { .. }) => Some(ErrorKind::Api),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Infra(InfraError::Cancelled))
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
