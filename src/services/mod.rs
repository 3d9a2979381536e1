/// MPRIS player discovery, control and metadata
pub mod mpris;
