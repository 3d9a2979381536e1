use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error types for the spotctl application.
///
/// Covers everything outside of the player connection itself: locating,
/// reading and parsing the optional configuration file.
#[derive(Error, Debug)]
pub enum SpotctlError {
    /// Neither `XDG_CONFIG_HOME` nor `HOME` is set
    #[error("cannot locate config directory: {0}")]
    ConfigDir(String),

    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },
}

/// A specialized `Result` type for spotctl operations.
pub type Result<T> = std::result::Result<T, SpotctlError>;

impl SpotctlError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl std::fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => p.to_string_lossy().to_string(),
            None => "string".to_string(),
        };

        SpotctlError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates an I/O error with file path context.
    pub fn io(error: impl std::fmt::Display, path: &Path) -> Self {
        SpotctlError::IoError {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }
}
