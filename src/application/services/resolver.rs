//! World resolution service
//!
//! Turns a `WorldSelector` into exactly one world using the remote API.

use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use crate::application::ApplicationResult;
use crate::domain::{names_match, DomainError, World, WorldSelector};
use crate::infrastructure::traits::WorldApi;

/// Resolve `selector` to a single world.
///
/// - `ById`: one `get_world` call, its outcome returned as-is.
/// - `ByName`: one `list_worlds` call, then the first world (in host order) whose
///   name matches case-insensitively. Host order is not guaranteed stable between calls.
#[instrument(level = "debug", skip(api, cancel))]
pub async fn resolve_world(
    selector: &WorldSelector,
    api: &dyn WorldApi,
    cancel: &CancellationToken,
) -> ApplicationResult<World> {
    match selector {
        WorldSelector::ById(id) => Ok(api.get_world(id, cancel).await?),
        WorldSelector::ByName(name) => {
            let worlds = api.list_worlds(cancel).await?;
            debug!("resolve: scanning {} worlds for {:?}", worlds.len(), name);
            worlds
                .into_iter()
                .find(|w| names_match(&w.name, name))
                .ok_or_else(|| DomainError::no_world_named(name).into())
        }
    }
}
