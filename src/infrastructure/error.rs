//! Infrastructure-level errors (remote host and output sink)

use thiserror::Error;

/// Failures raised while talking to the host or writing output.
#[derive(Error, Debug)]
pub enum InfraError {
    /// The host reported that the requested world does not exist.
    #[error("{0}")]
    NotFound(String),

    #[error("cannot reach host: {context}")]
    Transport {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("host returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The base URL cannot carry a path, so no endpoint can be built from it.
    #[error("host URL cannot take a path: {0}")]
    InvalidBaseUrl(String),

    #[error("operation cancelled")]
    Cancelled,

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl InfraError {
    /// Create a transport error with context.
    pub fn transport(context: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            context: context.into(),
            source,
        }
    }

    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type for infrastructure layer operations.
pub type InfraResult<T> = Result<T, InfraError>;
