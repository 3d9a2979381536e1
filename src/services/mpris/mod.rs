/// Bus operations behind a trait seam
pub mod bus;
/// Capability-checked player access
pub mod client;
/// Bus-name matching
pub mod discovery;
/// Media player error types
pub mod error;
/// Track metadata types
pub mod metadata;
/// D-Bus proxy trait definitions
pub mod proxy;
/// Property dump formatting
pub mod report;
/// Player identifiers, property keys and playback state
pub mod types;
/// Dynamically typed property values
pub mod value;


#[cfg(test)]
mod tests;

pub use bus::*;
pub use client::*;
pub use error::*;
pub use metadata::*;
pub use proxy::*;
pub use types::*;
pub use value::*;
