//! `show-world`: describe one running world.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use super::{ensure_not_cancelled, Command};
use crate::application::services::{resolve_world, write_world};
use crate::application::ApplicationResult;
use crate::domain::{OutputMode, WorldSelector};
use crate::infrastructure::di::ServiceContainer;

/// Shows a specific running world, selected by id or by name.
#[derive(Debug, Clone)]
pub struct ShowWorld {
    selector: WorldSelector,
    mode: OutputMode,
}

impl ShowWorld {
    pub fn new(selector: WorldSelector, mode: OutputMode) -> Self {
        Self { selector, mode }
    }
}

#[async_trait]
impl Command for ShowWorld {
    #[instrument(level = "debug", skip_all)]
    async fn execute(
        &self,
        services: &ServiceContainer,
        cancel: &CancellationToken,
    ) -> ApplicationResult<()> {
        let world = resolve_world(&self.selector, services.api.as_ref(), cancel).await?;
        debug!("show-world: resolved {} to {}", self.selector, world.id);

        ensure_not_cancelled(cancel)?;
        write_world(
            services.output.as_ref(),
            &world,
            self.mode,
            services.json_style(),
        )
    }
}
