//! `list-worlds`: describe every running world.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use super::{ensure_not_cancelled, Command};
use crate::application::services::write_world;
use crate::application::ApplicationResult;
use crate::domain::OutputMode;
use crate::infrastructure::di::ServiceContainer;

/// Lists all running worlds in host order, one entry per world.
#[derive(Debug, Clone)]
pub struct ListWorlds {
    mode: OutputMode,
}

impl ListWorlds {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

#[async_trait]
impl Command for ListWorlds {
    #[instrument(level = "debug", skip_all)]
    async fn execute(
        &self,
        services: &ServiceContainer,
        cancel: &CancellationToken,
    ) -> ApplicationResult<()> {
        let worlds = services.api.list_worlds(cancel).await?;
        debug!("list-worlds: {} worlds", worlds.len());

        ensure_not_cancelled(cancel)?;
        let style = services.json_style();
        for world in &worlds {
            write_world(services.output.as_ref(), world, self.mode, style)?;
        }
        Ok(())
    }
}
