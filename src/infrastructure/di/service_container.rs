//! Service container for dependency injection
//!
//! Wires up the collaborators every command reads from.

use std::sync::Arc;

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::{JsonStyle, Settings};
use crate::infrastructure::http::HttpWorldApi;
use crate::infrastructure::traits::{OutputSink, StdoutSink, WorldApi};

/// Container holding the process-wide collaborators.
///
/// Built once at startup and shared read-only by every command.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Remote host API
    pub api: Arc<dyn WorldApi>,

    /// Destination for command output
    pub output: Arc<dyn OutputSink>,
}

impl ServiceContainer {
    /// Create a service container talking to the configured host over HTTP.
    pub fn new(settings: Settings) -> ApplicationResult<Self> {
        let base_url = settings.base_url()?;
        let api = HttpWorldApi::new(base_url, settings.timeout()).map_err(|e| {
            ApplicationError::Config {
                message: format!("build HTTP client: {e}"),
            }
        })?;
        Ok(Self::with_deps(settings, Arc::new(api), Arc::new(StdoutSink)))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        api: Arc<dyn WorldApi>,
        output: Arc<dyn OutputSink>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            api,
            output,
        }
    }

    /// Serialization policy for verbose output.
    pub fn json_style(&self) -> JsonStyle {
        self.settings.json_style
    }
}
