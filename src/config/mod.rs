mod log_level;
mod paths;

pub use log_level::LogLevel;
pub use paths::ConfigPaths;

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::{Result, SpotctlError};

/// Bus-name fragments that identify the Spotify client by default.
pub const DEFAULT_NAME_FRAGMENTS: [&str; 2] = ["mpris", "spotify"];

/// Main configuration structure for spotctl.
///
/// Every section is optional in the file; missing sections and fields fall
/// back to their defaults. Command-line flags take precedence over the
/// values here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Player discovery and bus call settings.
    pub player: PlayerConfig,

    /// Log sink settings.
    pub logging: LoggingConfig,
}

/// Player discovery and bus call settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Substrings a bus name must contain, in this order, to be picked.
    pub name_fragments: Vec<String>,

    /// Upper bound for a single bus round-trip. Unbounded when unset.
    pub call_timeout_ms: Option<u64>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            name_fragments: DEFAULT_NAME_FRAGMENTS
                .iter()
                .map(|fragment| fragment.to_string())
                .collect(),
            call_timeout_ms: None,
        }
    }
}

impl PlayerConfig {
    /// Per-call timeout as a `Duration`, if configured.
    pub fn call_timeout(&self) -> Option<Duration> {
        self.call_timeout_ms.map(Duration::from_millis)
    }
}

/// Log sink settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file used when `--log` is not given.
    pub file: Option<PathBuf>,

    /// Disable the console sink.
    pub quiet: bool,
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined or the
    /// file exists but cannot be read or parsed.
    pub fn load_default() -> Result<Config> {
        let path = ConfigPaths::main_config()?;
        Self::load(&path)
    }

    /// Loads a configuration file, returning defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SpotctlError::io(e, path))?;
        Self::from_toml(&content, Some(path))
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `SpotctlError::TomlParseError` if the content is not valid.
    pub fn from_toml(content: &str, path: Option<&Path>) -> Result<Config> {
        toml::from_str(content).map_err(|e| SpotctlError::toml_parse(e, path))
    }
}
