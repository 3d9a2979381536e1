//! spotctl - command-line remote for MPRIS media players.
//!
//! Finds a player on the D-Bus session bus (Spotify by default), then runs a
//! single playback action or metadata query against it. Every action first
//! checks the matching `Can*` capability property, and a missing or
//! uncooperative player only ever results in log messages.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use spotctl::{
//!     cli::{Command, CommandDispatcher},
//!     config::PlayerConfig,
//!     services::mpris::PlayerClient,
//! };
//!
//! # async fn run() -> Result<(), spotctl::services::mpris::MediaError> {
//! let client = PlayerClient::connect(&PlayerConfig::default()).await?;
//! let dispatcher = CommandDispatcher::new(&client);
//!
//! if let Some(line) = dispatcher.dispatch(&Command::Get { field: None }).await {
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```

/// Configuration file schema and log level selection.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Command-line interface and command dispatch.
pub mod cli;

/// Media player services.
pub mod services;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{Result, SpotctlError};
