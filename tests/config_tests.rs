//! Configuration tests

use dictionary_cli::infrastructure::config::{
    load_config_from, parse_config, write_config_sample, Logging, DEFAULT_API_BASE,
};
use dictionary_cli::Config;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "dictionary-cli-test-{}-{}",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.api_base, DEFAULT_API_BASE);
    assert_eq!(
        config.api_base,
        "https://api.dictionaryapi.dev/api/v2/entries/en"
    );
    assert_eq!(config.timeout_secs, None);
    assert_eq!(config.http_proxy, None);
    assert!(config.user_agent.starts_with("dictionary-cli/"));
    assert_eq!(config.theme, "plain");
    assert!(!config.strict_exit);
}

#[test]
fn test_logging_defaults() {
    let logging = Logging::default();

    assert!(logging.enable);
    assert_eq!(logging.path, None);
    assert_eq!(logging.level, "WARN");
    assert_eq!(logging.filter_directive(), "warn");
}

#[test]
fn test_empty_file_gives_defaults() {
    assert_eq!(parse_config("").unwrap(), Config::default());
}

#[test]
fn test_config_toml_format() {
    let toml_content = r#"
api_base = "http://localhost:8080/entries/en"
timeout_secs = 10
http_proxy = "http://proxy.local:3128"
theme = "wudao"
strict_exit = true

[logging]
enable = true
path = "/tmp/test.log"
level = "DEBUG"
"#;

    let config = parse_config(toml_content).unwrap();
    assert_eq!(config.api_base, "http://localhost:8080/entries/en");
    assert_eq!(config.timeout_secs, Some(10));
    assert_eq!(config.http_proxy.as_deref(), Some("http://proxy.local:3128"));
    assert_eq!(config.theme, "wudao");
    assert!(config.strict_exit);
    assert_eq!(config.logging.path.as_deref(), Some("/tmp/test.log"));
    assert_eq!(config.logging.filter_directive(), "debug");
}

#[test]
fn test_log_level_parsing() {
    let cases = [
        ("DEBUG", "debug"),
        ("INFO", "info"),
        ("WARN", "warn"),
        ("ERROR", "error"),
        ("info", "info"),
        ("TRACE", "warn"),
        ("", "warn"),
    ];

    for (level, expected) in cases {
        let logging = Logging {
            level: level.to_string(),
            ..Logging::default()
        };
        assert_eq!(logging.filter_directive(), expected, "level {level:?}");
    }
}

#[test]
fn test_invalid_toml_is_error() {
    assert!(parse_config("theme = [").is_err());
    assert!(parse_config("strict_exit = \"yes\"").is_err());
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = scratch_dir("missing");
    let config = load_config_from(&dir.join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_malformed_file_gives_defaults() {
    let dir = scratch_dir("malformed");
    let path = dir.join("config.toml");
    std::fs::write(&path, "theme = [").unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_sample_round_trip() {
    let dir = scratch_dir("sample");
    let path = dir.join("nested").join("config.toml");

    assert!(write_config_sample(&path).unwrap());
    assert!(!write_config_sample(&path).unwrap());

    let config = load_config_from(&path).unwrap();
    assert_eq!(config, Config::default());
}
