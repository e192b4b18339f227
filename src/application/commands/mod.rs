//! Command dispatch contract
//!
//! Every subcommand is a value built once from validated input and executed
//! against the shared `ServiceContainer`. Failures are returned untouched so the
//! top-level runner maps them to messages and exit codes in one place.

mod list_worlds;
mod show_world;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::application::ApplicationResult;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub use list_worlds::ListWorlds;
pub use show_world::ShowWorld;

/// Shared execution contract for all commands.
#[async_trait]
pub trait Command: Send + Sync {
    async fn execute(
        &self,
        services: &ServiceContainer,
        cancel: &CancellationToken,
    ) -> ApplicationResult<()>;
}

/// Closed set of world commands.
#[derive(Debug, Clone)]
pub enum WorldCommand {
    Show(ShowWorld),
    List(ListWorlds),
}

#[async_trait]
impl Command for WorldCommand {
    async fn execute(
        &self,
        services: &ServiceContainer,
        cancel: &CancellationToken,
    ) -> ApplicationResult<()> {
        match self {
            Self::Show(cmd) => cmd.execute(services, cancel).await,
            Self::List(cmd) => cmd.execute(services, cancel).await,
        }
    }
}

/// Fail with `Cancelled` if the token has fired; called before any output is written.
fn ensure_not_cancelled(cancel: &CancellationToken) -> ApplicationResult<()> {
    if cancel.is_cancelled() {
        return Err(InfraError::Cancelled.into());
    }
    Ok(())
}
