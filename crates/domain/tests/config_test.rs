use sourcewatch_domain::{CliOverrides, Config, ConfigError, LogFormat};
use std::io::Write;

#[test]
fn test_defaults_are_valid() {
    let config = Config::default();

    assert!(config.validate().is_ok());
    assert_eq!(config.health.interval_secs, 30);
    assert_eq!(config.health.slow_threshold_ms, 5000);
    assert_eq!(config.health.cache_ttl_secs, 300);
    assert_eq!(config.sources.endpoints.len(), 4);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = Config::from_toml(
        r#"
        [health]
        interval_secs = 10

        [sources]
        base_url = "https://maps.example"

        [[sources.endpoints]]
        id = "paavo"
        name = "Paavo"
        url = "/paavo"
        "#,
    )
    .unwrap();

    assert_eq!(config.health.interval_secs, 10);
    assert_eq!(config.health.timeout_ms, 15000);
    assert_eq!(config.sources.endpoints.len(), 1);
    assert_eq!(
        config.sources.resolve().unwrap()[0].url,
        "https://maps.example/paavo"
    );
}

#[test]
fn test_log_format_defaults_to_text() {
    let config = Config::from_toml("[logging]\nlevel = \"debug\"").unwrap();

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Text);
}

#[test]
fn test_json_log_format_parsed() {
    let config = Config::from_toml("[logging]\nformat = \"json\"").unwrap();

    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_unknown_log_format_is_parse_error() {
    let result = Config::from_toml("[logging]\nformat = \"xml\"");

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_duplicate_source_ids_rejected() {
    let config = Config::from_toml(
        r#"
        [[sources.endpoints]]
        id = "paavo"
        name = "A"
        url = "/a"

        [[sources.endpoints]]
        id = "paavo"
        name = "B"
        url = "/b"
        "#,
    )
    .unwrap();

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::Validation(msg) if msg.contains("duplicate")));
}

#[test]
fn test_timeout_must_exceed_slow_threshold() {
    let mut config = Config::default();
    config.health.timeout_ms = 5000;

    assert!(config.validate().is_err());
}

#[test]
fn test_zero_interval_rejected() {
    let mut config = Config::default();
    config.health.interval_secs = 0;

    assert!(config.validate().is_err());
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let result = Config::from_toml("[health\ninterval_secs = ");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_load_from_file_applies_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server]\nport = 9000\n\n[logging]\nlevel = \"debug\"").unwrap();

    let config = Config::load(
        file.path().to_str(),
        CliOverrides {
            port: Some(9100),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(config.server.port, 9100);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_missing_file_is_read_error() {
    let result = Config::load(Some("/nonexistent/sourcewatch.toml"), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::FileRead { .. })));
}
