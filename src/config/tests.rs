//! Configuration tests
//!
//! Round-trips guard the template: every field written by `to_toml` must
//! parse back into `FileConfig` with the same value.

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
}

#[test]
fn test_config_roundtrip_preserves_values() {
    let mut config = Config::default();
    config.start_route = "/demo/fragments".to_string();
    config.dark_mode = true;
    config.copy_feedback_ms = 1500;
    config.tick_rate_ms = 50;
    config.show_logs = true;
    config.logging.level = "debug".to_string();
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;
    config.logging.file_prefix = "demo".to_string();

    let file: FileConfig = toml::from_str(&config.to_toml()).expect("template parses");
    let back = Config::resolve(file, no_env);

    assert_eq!(back.start_route, "/demo/fragments");
    assert!(back.dark_mode);
    assert_eq!(back.copy_feedback_ms, 1500);
    assert_eq!(back.tick_rate_ms, 50);
    assert!(back.show_logs);
    assert_eq!(back.logging.level, "debug");
    assert!(back.logging.file_enabled);
    assert_eq!(back.logging.file_rotation, LogRotation::Hourly);
    assert_eq!(back.logging.file_prefix, "demo");
}

#[test]
fn test_default_template_documents_every_key() {
    let toml_str = Config::default().to_toml();
    for key in [
        "start_route",
        "dark_mode",
        "copy_feedback_ms",
        "tick_rate_ms",
        "show_logs",
        "[logging]",
        "file_rotation",
    ] {
        assert!(toml_str.contains(key), "template is missing {}", key);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_gives_defaults() {
    let config = Config::resolve(FileConfig::default(), no_env);
    assert_eq!(config.start_route, "/");
    assert!(!config.dark_mode);
    assert_eq!(config.copy_feedback(), Duration::from_millis(2000));
    assert_eq!(config.tick_rate(), Duration::from_millis(100));
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str(
        r#"
start_route = "/demo/form"
dark_mode = false
"#,
    )
    .expect("valid toml");

    let config = Config::resolve(
        file,
        env_from(&[("SHOWCASE_ROUTE", "/demo/sidebar"), ("SHOWCASE_DARK", "TRUE")]),
    );

    assert_eq!(config.start_route, "/demo/sidebar");
    assert!(config.dark_mode);
}

#[test]
fn test_env_dark_flag_values() {
    for (value, expected) in [("1", true), ("true", true), ("0", false), ("no", false)] {
        let config = Config::resolve(FileConfig::default(), env_from(&[("SHOWCASE_DARK", value)]));
        assert_eq!(config.dark_mode, expected, "SHOWCASE_DARK={}", value);
    }
}

#[test]
fn test_zero_durations_fall_back_to_defaults() {
    let file: FileConfig = toml::from_str(
        r#"
copy_feedback_ms = 0
tick_rate_ms = 0
"#,
    )
    .expect("valid toml");

    let config = Config::resolve(file, no_env);
    assert_eq!(config.copy_feedback_ms, 2000);
    assert_eq!(config.tick_rate_ms, 100);
}

#[test]
fn test_partial_logging_section() {
    let file: FileConfig = toml::from_str(
        r#"
[logging]
file_rotation = "NEVER"
"#,
    )
    .expect("valid toml");

    let config = Config::resolve(file, no_env);
    assert_eq!(config.logging.file_rotation, LogRotation::Never);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file_prefix, "showcase");
}

#[test]
fn test_unknown_rotation_is_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("Hourly"), LogRotation::Hourly);
}

#[test]
fn test_bad_types_are_rejected() {
    let parsed: Result<FileConfig, _> = toml::from_str(r#"dark_mode = "yes""#);
    assert!(parsed.is_err());
}
