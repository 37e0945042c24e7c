//! Configuration loading with precedence handling.
//!
//! Precedence, lowest to highest: defaults → config file → environment →
//! CLI flags. Missing config files are not errors; a file that exists but
//! cannot be read or parsed is.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::view::nodes::DEFAULT_PLACEHOLDER;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read a config file that exists.
    #[error("failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML.
    #[error("invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; anything not specified falls back to the
/// defaults. Corresponds to `~/.config/chipbox/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Placeholder text for the empty input control.
    #[serde(default)]
    pub placeholder: Option<String>,

    /// Disable colors in the projection.
    #[serde(default)]
    pub no_color: Option<bool>,

    /// Path to the log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Fully resolved configuration after the whole precedence chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub placeholder: String,
    pub no_color: bool,
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            no_color: false,
            log_file_path: default_log_path(),
        }
    }
}

/// Default log file location: the platform state directory, falling back
/// to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("chipbox").join("chipbox.log")
    } else {
        PathBuf::from("chipbox.log")
    }
}

/// Default config file location. `None` when the platform config
/// directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("chipbox").join("config.toml"))
}

/// Load a config file from a specific path.
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
///
/// Returns an error when the file exists but cannot be read or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration, resolving which file to read.
///
/// Precedence: explicit `config_path` (CLI `--config`), then the
/// `CHIPBOX_CONFIG` environment variable, then the default path.
///
/// # Errors
///
/// Returns an error only when a chosen file exists but cannot be read or
/// parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("CHIPBOX_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge a config file over the defaults.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let mut config = ResolvedConfig::default();
    if let Some(file) = config_file {
        if let Some(placeholder) = file.placeholder {
            config.placeholder = placeholder;
        }
        if let Some(no_color) = file.no_color {
            config.no_color = no_color;
        }
        if let Some(log_file_path) = file.log_file_path {
            config.log_file_path = log_file_path;
        }
    }
    config
}

/// Apply environment variable overrides.
///
/// `NO_COLOR` (any value) disables colors; `CHIPBOX_PLACEHOLDER` replaces
/// the placeholder text.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if std::env::var("NO_COLOR").is_ok() {
        config.no_color = true;
    }
    if let Ok(placeholder) = std::env::var("CHIPBOX_PLACEHOLDER") {
        config.placeholder = placeholder;
    }
    config
}

/// Apply CLI argument overrides. Each `Some` wins over everything below it.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    placeholder: Option<String>,
    no_color: Option<bool>,
    log_file_path: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(placeholder) = placeholder {
        config.placeholder = placeholder;
    }
    if let Some(no_color) = no_color {
        config.no_color = no_color;
    }
    if let Some(log_file_path) = log_file_path {
        config.log_file_path = log_file_path;
    }
    config
}

// ===== Tests =====
