//! Application services
//!
//! Resolution and formatting shared by every command.
//! Services depend on I/O boundary traits (WorldApi, OutputSink)
//! but are themselves plain functions, not traits.

mod formatter;
mod resolver;

pub use formatter::{render_world, write_world};
pub use resolver::resolve_world;
