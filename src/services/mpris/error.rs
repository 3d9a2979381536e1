use std::time::Duration;

use thiserror::Error;

/// Errors raised while talking to an MPRIS player.
///
/// Only `Connection` is fatal to the process. Everything else is logged by
/// `PlayerClient` and turned into an inert result.
#[derive(Error, Debug)]
pub enum MediaError {
    /// The session bus could not be reached
    #[error("cannot connect to session bus: {0}")]
    Connection(String),

    /// No bus name matched the configured player fragments
    #[error("no matching player found on the bus")]
    PlayerUnavailable,

    /// Listing registered bus names failed
    #[error("cannot list bus names: {0}")]
    Discovery(String),

    /// A property read or write failed, or returned an unexpected shape
    #[error("property '{property}' unavailable: {details}")]
    PropertyAccess {
        /// Property being accessed
        property: String,
        /// Failure details
        details: String,
    },

    /// A player method invocation failed
    #[error("{method} failed: {details}")]
    ControlFailed {
        /// Method that was invoked
        method: &'static str,
        /// Failure details
        details: String,
    },

    /// A bus call did not finish within the configured limit
    #[error("bus call timed out after {0:?}")]
    Timeout(Duration),
}

impl MediaError {
    pub(crate) fn property(property: &str, details: impl std::fmt::Display) -> Self {
        MediaError::PropertyAccess {
            property: property.to_string(),
            details: details.to_string(),
        }
    }
}
