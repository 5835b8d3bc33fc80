use crate::domain::error::DictionaryError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_BASE: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    pub timeout_secs: Option<u64>,
    pub http_proxy: Option<String>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub strict_exit: bool,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Logging {
    /// Filter directive for the configured level; unknown levels fall back to `warn`.
    pub fn filter_directive(&self) -> &'static str {
        match self.level.to_ascii_uppercase().as_str() {
            "DEBUG" => "debug",
            "INFO" => "info",
            "WARN" => "warn",
            "ERROR" => "error",
            _ => "warn",
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            timeout_secs: None,
            http_proxy: None,
            user_agent: default_user_agent(),
            theme: default_theme(),
            strict_exit: false,
            logging: Logging::default(),
        }
    }
}

// Defaults
fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}
fn default_user_agent() -> String {
    concat!("dictionary-cli/", env!("CARGO_PKG_VERSION")).to_string()
}
fn default_theme() -> String {
    "plain".to_string()
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("dictionary-cli").join("config.toml"))
}

pub fn parse_config(content: &str) -> Result<Config, DictionaryError> {
    Ok(toml::from_str::<Config>(content)?)
}

/// Load the config at `path`. A missing file yields defaults; so does a file
/// that fails to parse, after a warning on stderr.
pub fn load_config_from(path: &Path) -> Result<Config, DictionaryError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    match parse_config(&content) {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!(
                "Warning: Failed to parse config file: {}. Using defaults.",
                e
            );
            Ok(Config::default())
        }
    }
}

pub fn load_config() -> Result<Config, DictionaryError> {
    match get_config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(Config::default()),
    }
}

/// Write a sample config to `path` unless one is already there.
/// Returns whether a file was written.
pub fn write_config_sample(path: &Path) -> Result<bool, DictionaryError> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let sample = Config::default();
    let toml_content = toml::to_string_pretty(&sample)
        .map_err(|e| DictionaryError::Config(format!("Failed to serialize config: {}", e)))?;
    fs::write(path, toml_content)
        .map_err(|e| DictionaryError::Config(format!("Failed to write config file: {}", e)))?;
    Ok(true)
}

pub fn generate_config_sample() -> Result<(), DictionaryError> {
    let path = get_config_path().ok_or_else(|| {
        DictionaryError::Config("Cannot determine config directory".to_string())
    })?;

    if write_config_sample(&path)? {
        println!("Generated config file at: {}", path.display());
    } else {
        eprintln!("Config file already exists at: {}", path.display());
    }

    Ok(())
}
