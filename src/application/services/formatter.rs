//! Output formatting for resolved worlds

use crate::application::ApplicationResult;
use crate::config::JsonStyle;
use crate::domain::{OutputMode, World};
use crate::infrastructure::traits::OutputSink;
use crate::infrastructure::InfraError;

/// Render a world without a trailing newline.
///
/// Summary: `name<TAB>id`, plus `<TAB>description` whenever a description is present,
/// even if empty. Verbose: JSON in the configured style.
pub fn render_world(world: &World, mode: OutputMode, style: JsonStyle) -> ApplicationResult<String> {
    match mode {
        OutputMode::Summary => Ok(summary_line(world)),
        OutputMode::Verbose => Ok(match style {
            JsonStyle::Compact => serde_json::to_string(world)?,
            JsonStyle::Pretty => serde_json::to_string_pretty(world)?,
        }),
    }
}

fn summary_line(world: &World) -> String {
    match &world.description {
        Some(description) => format!("{}\t{}\t{}", world.name, world.id, description),
        None => format!("{}\t{}", world.name, world.id),
    }
}

/// Render `world` and emit it as one write to `sink`.
pub fn write_world(
    sink: &dyn OutputSink,
    world: &World,
    mode: OutputMode,
    style: JsonStyle,
) -> ApplicationResult<()> {
    let text = render_world(world, mode, style)?;
    sink.write_line(&text)
        .map_err(|e| InfraError::io(format!("write world {}", world.id), e))?;
    Ok(())
}
