//! Force-directed player network drawn on a canvas.
//!
//! The component owns a [`NetworkController`](controller::NetworkController)
//! that holds the full dataset, the active [`Criterion`] and the running
//! simulation. Page controls and pointer gestures reach it as [`Intent`]s.

mod component;
pub mod controller;
pub mod filter;
mod render;
pub mod state;
pub mod style;
pub mod types;

pub use component::NetworkGraph;
pub use controller::{Intent, NetworkController, Outcome};
pub use filter::{Criterion, filter_network};
pub use types::{Endpoint, NetworkData, PlayerLink, PlayerNode, Role};
