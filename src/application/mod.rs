//! Application layer: commands and services
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod commands;
pub mod error;
pub mod services;

pub use commands::{Command, ListWorlds, ShowWorld, WorldCommand};
pub use error::{ApplicationError, ApplicationResult, ErrorKind};
