//! Where the network comes from and what can be read out of it.

pub mod analysis;
pub mod loader;
pub mod roster;

pub use analysis::NetworkSummary;
pub use loader::{LoadError, load_network_data};
pub use roster::sample_network;
