//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/worldctl/worldctl.toml`
//! 3. Explicit config file (`--config <file>`)
//! 4. Environment variables: `WORLDCTL_*` prefix
//! 5. Command-line connection flags (`--server`, `--port`)

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// JSON layout used for verbose output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum JsonStyle {
    /// Single line
    #[default]
    Compact,
    /// Indented, multi-line
    Pretty,
}

/// Unified configuration for worldctl.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Host address, scheme optional (default: http://localhost)
    pub server: String,
    /// Host API port (default: 5000)
    pub port: u16,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Verbose output layout
    pub json_style: JsonStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: "http://localhost".into(),
            port: 5000,
            timeout_secs: 30,
            json_style: JsonStyle::Compact,
        }
    }
}

/// Raw settings for intermediate parsing (Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub server: Option<String>,
    pub port: Option<u16>,
    pub timeout_secs: Option<u64>,
    pub json_style: Option<JsonStyle>,
}

/// Get the XDG config directory for worldctl.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "worldctl").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("worldctl.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Merge overlay config onto self: overlay wins where specified.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            server: overlay.server.clone().unwrap_or_else(|| self.server.clone()),
            port: overlay.port.unwrap_or(self.port),
            timeout_secs: overlay.timeout_secs.unwrap_or(self.timeout_secs),
            json_style: overlay.json_style.unwrap_or(self.json_style),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; must exist if given
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(path) = config_file {
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        Self::apply_env_overrides(current)
    }

    /// Apply WORLDCTL_* environment variables as explicit overrides.
    fn apply_env_overrides(settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("WORLDCTL")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        let raw = RawSettings {
            server: optional(&config, "server")?,
            port: optional(&config, "port")?,
            timeout_secs: optional(&config, "timeout_secs")?,
            json_style: optional(&config, "json_style")?,
        };
        Ok(settings.merge_with(&raw))
    }

    /// Apply command-line connection flags.
    pub fn with_overrides(mut self, server: Option<String>, port: Option<u16>) -> Self {
        if let Some(server) = server {
            self.server = server;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// Base URL of the host API.
    ///
    /// `server` without a scheme is treated as `http://`. The configured port
    /// replaces any port given in `server`.
    pub fn base_url(&self) -> Result<Url, ApplicationError> {
        let server = self.server.trim();
        let with_scheme = if server.contains("://") {
            server.to_string()
        } else {
            format!("http://{server}")
        };

        let mut url = Url::parse(&with_scheme).map_err(|e| ApplicationError::Config {
            message: format!("invalid server address {:?}: {e}", self.server),
        })?;
        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(ApplicationError::Config {
                message: format!("invalid server address {:?}: no host", self.server),
            });
        }
        url.set_port(Some(self.port))
            .map_err(|_| ApplicationError::Config {
                message: format!("cannot set port {} on {:?}", self.port, self.server),
            })?;
        Ok(url)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# worldctl configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/worldctl/worldctl.toml
#   File:   --config <file>
#   Env:    WORLDCTL_* environment variables (e.g. WORLDCTL_PORT=5001)
#   Flags:  --server / --port

# Host address; scheme defaults to http
# server = "http://localhost"

# Host API port
# port = 5000

# Per-request timeout in seconds
# timeout_secs = 30

# Verbose output layout: "compact" or "pretty"
# json_style = "compact"
"#
        .to_string()
    }
}

/// Read `key` if present; a present but malformed value is an error.
fn optional<T: DeserializeOwned>(config: &Config, key: &str) -> Result<Option<T>, ApplicationError> {
    match config.get::<T>(key) {
        Ok(value) => Ok(Some(value)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
