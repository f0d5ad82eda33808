//! Owns everything a render needs and applies user intents to it.

use log::{debug, info};

use super::filter::{Criterion, filter_network};
use super::state::{NetworkState, SimulationConfig};
use super::types::{NetworkData, Role};
use crate::data::analysis::{self, NetworkSummary};

/// Everything the page or the canvas can ask of the network.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
	/// One of the role buttons was pressed.
	RoleFilterSelected(Role),
	/// The search box changed; an empty term clears the filter.
	SearchChanged(String),
	ClearFilter,
	/// Pointer went down on a node, in canvas coordinates.
	DragStarted { id: String, x: f64, y: f64 },
	DragMoved { id: String, x: f64, y: f64 },
	DragEnded { id: String },
	/// One animation frame, with the elapsed seconds.
	Tick(f32),
	Resize { width: f64, height: f64 },
}

/// What dispatching an intent did to the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
	/// The subgraph was recomputed and a fresh simulation built.
	Rebuilt,
	/// Positions or simulation energy changed.
	Updated,
	Unchanged,
}

/// Holds the full dataset and the scene derived from it.
pub struct NetworkController {
	data: NetworkData,
	criterion: Criterion,
	view: NetworkData,
	state: NetworkState,
	config: SimulationConfig,
}

impl NetworkController {
	pub fn new(data: NetworkData, config: SimulationConfig, width: f64, height: f64) -> Self {
		info!(
			"network loaded: {} players, {} links",
			data.nodes.len(),
			data.links.len()
		);
		let state = NetworkState::new(&data, config.clone(), width, height);
		Self {
			view: data.clone(),
			data,
			criterion: Criterion::All,
			state,
			config,
		}
	}

	pub fn criterion(&self) -> &Criterion {
		&self.criterion
	}

	/// The subgraph currently on screen.
	pub fn view(&self) -> &NetworkData {
		&self.view
	}

	pub fn state(&self) -> &NetworkState {
		&self.state
	}

	pub fn state_mut(&mut self) -> &mut NetworkState {
		&mut self.state
	}

	pub fn summary(&self) -> NetworkSummary {
		analysis::summarize(&self.view)
	}

	/// Applies one intent and reports what changed.
	pub fn dispatch(&mut self, intent: Intent) -> Outcome {
		match intent {
			Intent::RoleFilterSelected(role) => self.apply(Criterion::Role(role)),
			Intent::SearchChanged(term) if term.is_empty() => self.apply(Criterion::All),
			Intent::SearchChanged(term) => self.apply(Criterion::Search(term)),
			Intent::ClearFilter => self.apply(Criterion::All),
			Intent::DragStarted { id, x, y } => updated(self.state.begin_drag(&id, x, y)),
			Intent::DragMoved { id, x, y } => updated(self.state.drag_to(&id, x, y)),
			Intent::DragEnded { id } => updated(self.state.end_drag(&id)),
			Intent::Tick(dt) => updated(self.state.tick(dt)),
			Intent::Resize { width, height } => {
				self.state.resize(width, height);
				self.state.restart();
				Outcome::Updated
			}
		}
	}

	/// Tears down the current scene and lays out the subgraph selected by
	/// `criterion` from scratch.
	fn apply(&mut self, criterion: Criterion) -> Outcome {
		let view = filter_network(&self.data, &criterion).into_owned();
		debug!(
			"filter {:?}: {} of {} players",
			criterion,
			view.nodes.len(),
			self.data.nodes.len()
		);
		self.state = NetworkState::new(&view, self.config.clone(), self.state.width, self.state.height);
		self.view = view;
		self.criterion = criterion;
		Outcome::Rebuilt
	}
}

fn updated(changed: bool) -> Outcome {
	if changed {
		Outcome::Updated
	} else {
		Outcome::Unchanged
	}
}
