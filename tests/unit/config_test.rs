//! Unit tests for config module

use color_console::config::PROGRESS_MODE_VAR;
use color_console::{ConsoleConfig, ProgressStyle};

/// A host config file that embeds the console section.
#[derive(Debug, serde::Deserialize)]
struct HostConfig {
    #[serde(default)]
    console: ConsoleConfig,
}

#[test]
fn default_config_uses_blocks() {
    assert_eq!(ConsoleConfig::default().progress, ProgressStyle::Blocks);
}

#[test]
fn env_lookup_selects_pacman() {
    let config = ConsoleConfig::from_lookup(|key| {
        (key == PROGRESS_MODE_VAR).then(|| "PacMan".to_string())
    });
    assert_eq!(config.progress, ProgressStyle::Pacman);
}

#[test]
fn unknown_env_value_falls_back_to_blocks() {
    let config = ConsoleConfig::from_lookup(|_| Some("snake".to_string()));
    assert_eq!(config.progress, ProgressStyle::Blocks);
}

#[test]
fn config_parses_from_toml() {
    let toml_str = r#"
[console]
progress = "pacman"
"#;
    let config: HostConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.console.progress, ProgressStyle::Pacman);
}

#[test]
fn console_config_defaults_when_missing() {
    let config: HostConfig = toml::from_str("").unwrap();
    assert_eq!(config.console, ConsoleConfig::default());

    let config: HostConfig = toml::from_str("[console]\n").unwrap();
    assert_eq!(config.console.progress, ProgressStyle::Blocks);
}

#[test]
fn unknown_style_in_toml_is_an_error() {
    let toml_str = r#"
[console]
progress = "snake"
"#;
    assert!(toml::from_str::<HostConfig>(toml_str).is_err());
}

#[test]
fn config_serialization_roundtrip() {
    let config = ConsoleConfig::default().with_progress(ProgressStyle::Pacman);
    let toml_str = toml::to_string(&config).unwrap();
    assert_eq!(toml_str.trim(), r#"progress = "pacman""#);
    let parsed: ConsoleConfig = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}
