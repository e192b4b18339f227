//! Integration tests for Settings loading and service wiring.
//!
//! These tests run without a global config (temp directories only) and assume
//! no `WORLDCTL_*` variables are set.

use std::fs;

use tempfile::TempDir;

use worldctl::application::ApplicationError;
use worldctl::config::{JsonStyle, Settings};
use worldctl::infrastructure::di::ServiceContainer;

#[test]
fn given_explicit_config_file_when_load_then_overrides_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("worldctl.toml");
    fs::write(
        &path,
        r#"
port = 5123
json_style = "pretty"
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(&path)).expect("load settings");

    // Assert - specified fields replaced, others keep defaults
    assert_eq!(settings.port, 5123);
    assert_eq!(settings.json_style, JsonStyle::Pretty);
    assert_eq!(settings.server, "http://localhost");
    assert_eq!(settings.timeout_secs, 30);
}

#[test]
fn given_config_file_and_flags_when_overriding_then_flags_win() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("worldctl.toml");
    fs::write(&path, "server = \"http://world-host\"\nport = 6000\n").unwrap();

    // Act
    let settings = Settings::load(Some(&path))
        .unwrap()
        .with_overrides(None, Some(7000));

    // Assert
    assert_eq!(settings.server, "http://world-host");
    assert_eq!(settings.port, 7000);
    assert_eq!(
        settings.base_url().unwrap().as_str(),
        "http://world-host:7000/"
    );
}

#[test]
fn given_missing_config_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let result = Settings::load(Some(&path));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_malformed_config_file_when_load_then_config_error_names_file() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "port = \"not a number\"\n").unwrap();

    // Act
    let err = Settings::load(Some(&path)).unwrap_err();

    // Assert
    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn given_template_written_to_file_when_load_then_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("worldctl.toml");
    fs::write(&path, Settings::template()).unwrap();

    let settings = Settings::load(Some(&path)).unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_invalid_server_when_building_services_then_config_error() {
    let settings = Settings::default().with_overrides(Some("http://".into()), None);

    let result = ServiceContainer::new(settings);

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_valid_settings_when_building_services_then_exposes_json_style() {
    let settings = Settings {
        json_style: JsonStyle::Pretty,
        ..Settings::default()
    };

    let services = ServiceContainer::new(settings).expect("build services");

    assert_eq!(services.json_style(), JsonStyle::Pretty);
    assert_eq!(services.settings.port, 5000);
}
