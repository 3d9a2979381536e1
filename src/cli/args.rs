use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::{
    config::{LogLevel, LoggingConfig},
    tracing_config::LogOptions,
};

/// Command-line arguments for spotctl.
#[derive(Parser, Debug)]
#[command(name = "spotctl", version)]
#[command(about = "Control Spotify, or another MPRIS player, over D-Bus")]
pub struct Cli {
    /// Action or query to run
    #[command(subcommand)]
    pub command: Command,

    /// Enables logging to the logfile/-path specified
    #[arg(short, long, value_name = "PATH", global = true)]
    pub log: Option<PathBuf>,

    /// Don't print log messages to stdout
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbosity of the logging module (-v warn, -vv info, -vvv debug)
    #[arg(short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// One player action or query.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Toggle between playing and paused
    Toggle,
    /// Skip to the next track
    Next,
    /// Go back to the previous track
    Prev,
    /// Stop playback
    Stop,
    /// Start playback
    Play,
    /// Move the playback position by a number of seconds
    Seek {
        /// Offset in seconds; negative values seek backwards
        #[arg(allow_negative_numbers = true)]
        seconds: i64,
    },
    /// Print the current track, or one detail of it
    Get {
        /// Detail to print; prints "artist - title (length)" when omitted
        #[arg(value_enum)]
        field: Option<GetField>,
    },
}

/// Sub-selector for `get`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GetField {
    /// Track title
    Title,
    /// First track artist
    Artist,
    /// Track length as `{m}m{s}s ({seconds})`
    Length,
    /// Playing, Paused or Stopped
    Status,
    /// Every player property and metadata entry
    All,
}

impl Cli {
    /// Effective logging setup; flags win over the config file.
    pub fn log_options(&self, config: &LoggingConfig) -> LogOptions {
        LogOptions {
            level: LogLevel::from_verbosity(self.verbose),
            quiet: self.quiet || config.quiet,
            file: self.log.clone().or_else(|| config.file.clone()),
        }
    }
}
