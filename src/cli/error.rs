//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::{ApplicationError, ErrorKind};
use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use crate::exitcode;

        let e = match self {
            CliError::InvalidArgs(_) | CliError::Usage(_) => return exitcode::USAGE,
            CliError::Application(e) => e,
        };
        if e.is_cancelled() {
            return exitcode::INTERRUPTED;
        }
        match e.kind() {
            Some(ErrorKind::NotFound) => exitcode::NOINPUT,
            Some(ErrorKind::Transport) => exitcode::UNAVAILABLE,
            Some(ErrorKind::Api) => exitcode::PROTOCOL,
            None => match e {
                ApplicationError::Config { .. }
                | ApplicationError::Infra(InfraError::InvalidBaseUrl(_)) => exitcode::CONFIG,
                ApplicationError::Serialize(_) => exitcode::SOFTWARE,
                ApplicationError::Domain(DomainError::InvalidSelector(_)) => exitcode::USAGE,
                ApplicationError::Infra(InfraError::Io { .. }) => exitcode::IOERR,
                _ => exitcode::SOFTWARE,
            },
        }
    }
}
