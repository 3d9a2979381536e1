//! Command-line interface.
//!
//! Arguments are parsed with clap into a single `Command`, which the
//! `CommandDispatcher` maps onto one `PlayerClient` call.

mod args;
mod dispatcher;
pub mod formatting;

pub use args::{Cli, Command, GetField};
pub use dispatcher::CommandDispatcher;

#[cfg(test)]
mod tests;
