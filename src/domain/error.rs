//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent lookup and input rule violations.
/// These are independent of transport concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{0}")]
    WorldNotFound(String),

    #[error("invalid world selector: {0}")]
    InvalidSelector(String),
}

impl DomainError {
    /// Name lookup found no matching world.
    pub fn no_world_named(name: &str) -> Self {
        Self::WorldNotFound(format!("No world named \"{name}\" found"))
    }
}
