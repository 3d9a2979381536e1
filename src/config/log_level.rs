use std::fmt;

use tracing_subscriber::filter::LevelFilter;

/// Logging level for the application.
///
/// Selected by repeating `-v` on the command line, starting from errors only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Only show errors.
    #[default]
    Error,

    /// Show warnings and errors, such as actions the player refused.
    Warn,

    /// Show informational messages, warnings, and errors.
    Info,

    /// Show bus-level detail useful for troubleshooting.
    Debug,
}

impl LogLevel {
    /// Maps a `-v` count to a level; counts above 3 clamp to `Debug`.
    pub fn from_verbosity(count: u8) -> Self {
        match count {
            0 => LogLevel::Error,
            1 => LogLevel::Warn,
            2 => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
        }
    }
}
