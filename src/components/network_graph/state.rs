use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::debug;

use super::style;
use super::types::{NetworkData, PlayerNode};
use crate::data::analysis::Adjacency;

/// Tunables for the physics and the energy model layered on top of it.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
	/// Repulsion between every pair of nodes.
	pub charge: f32,
	/// Attraction along each link.
	pub link_spring: f32,
	pub force_max: f32,
	pub node_speed: f32,
	pub damping: f32,
	pub node_mass: f32,
	/// Radius of the circle nodes are placed on before the first tick.
	pub seed_radius: f64,
	/// Below this energy the simulation stops ticking.
	pub alpha_min: f64,
	/// Fraction of the distance to `alpha_target` covered per tick.
	pub alpha_decay: f64,
	/// Energy the simulation is held at while a node is dragged.
	pub drag_alpha_target: f64,
}

impl Default for SimulationConfig {
	fn default() -> Self {
		let alpha_min = 0.001;
		Self {
			charge: 50.0,
			link_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping: 0.9,
			node_mass: 10.0,
			seed_radius: 100.0,
			alpha_min,
			// Cools from 1.0 to alpha_min in roughly 300 ticks.
			alpha_decay: 1.0 - alpha_min.powf(1.0 / 300.0),
			drag_alpha_target: 0.3,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: String,
	pub radius: f64,
	pub color: String,
	pub tooltip: String,
	/// Fixed position while the node is held by a drag.
	pub pin: Option<(f32, f32)>,
}

#[derive(Clone, Debug)]
pub struct DragState {
	pub id: String,
	pub node_idx: DefaultNodeIdx,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

/// A running layout of one subgraph.
pub struct NetworkState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub width: f64,
	pub height: f64,
	pub hover: Option<DefaultNodeIdx>,
	config: SimulationConfig,
	index: HashMap<String, DefaultNodeIdx>,
	drag: Option<DragState>,
	alpha: f64,
	alpha_target: f64,
	running: bool,
	edge_count: usize,
}

impl NetworkState {
	pub fn new(data: &NetworkData, config: SimulationConfig, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: config.charge,
			force_spring: config.link_spring,
			force_max: config.force_max,
			node_speed: config.node_speed,
			damping_factor: config.damping,
		});
		let mut index = HashMap::new();
		let adjacency = Adjacency::new(data);

		for (i, node) in data.nodes.iter().enumerate() {
			let Entry::Vacant(slot) = index.entry(node.id.clone()) else {
				debug!("skipping duplicate player id {:?}", node.id);
				continue;
			};
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let (x, y) = (
				(width / 2.0 + config.seed_radius * angle.cos()) as f32,
				(height / 2.0 + config.seed_radius * angle.sin()) as f32,
			);

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: config.node_mass,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					radius: style::node_radius(node),
					color: style::node_color(node).to_string(),
					tooltip: tooltip(node, &adjacency),
					pin: None,
				},
			});
			slot.insert(idx);
		}

		let mut edge_count = 0;
		for link in &data.links {
			let (source, target) = (link.source.id(), link.target.id());
			match (index.get(source), index.get(target)) {
				(Some(&src), Some(&tgt)) => {
					graph.add_edge(src, tgt, EdgeData::default());
					edge_count += 1;
				}
				_ => debug!("link {source:?} -> {target:?} has no visible endpoint, not simulated"),
			}
		}

		Self {
			graph,
			width,
			height,
			hover: None,
			config,
			index,
			drag: None,
			alpha: 1.0,
			alpha_target: 0.0,
			running: true,
			edge_count,
		}
	}

	pub fn node_count(&self) -> usize {
		self.index.len()
	}

	/// Links that made it into the simulation.
	pub fn edge_count(&self) -> usize {
		self.edge_count
	}

	pub fn alpha(&self) -> f64 {
		self.alpha
	}

	pub fn alpha_target(&self) -> f64 {
		self.alpha_target
	}

	pub fn is_running(&self) -> bool {
		self.running
	}

	pub fn dragging(&self) -> Option<&str> {
		self.drag.as_ref().map(|d| d.id.as_str())
	}

	pub fn position(&self, id: &str) -> Option<(f32, f32)> {
		let idx = *self.index.get(id)?;
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some((node.x(), node.y()));
			}
		});
		found
	}

	pub fn pin(&self, id: &str) -> Option<(f32, f32)> {
		let idx = *self.index.get(id)?;
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = node.data.user_data.pin;
			}
		});
		found
	}

	/// Topmost node whose circle contains the point.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<(DefaultNodeIdx, String)> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - x, node.y() as f64 - y);
			if (dx * dx + dy * dy).sqrt() < node.data.user_data.radius {
				found = Some((node.index(), node.data.user_data.id.clone()));
			}
		});
		found
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		self.hover = node;
	}

	/// Tooltip of the hovered node and where to anchor it.
	pub fn hover_tooltip(&self) -> Option<(f64, f64, f64, String)> {
		let idx = self.hover?;
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				let info = &node.data.user_data;
				found = Some((node.x() as f64, node.y() as f64, info.radius, info.tooltip.clone()));
			}
		});
		found
	}

	/// Reheats a stopped simulation without touching its energy.
	pub fn restart(&mut self) {
		self.running = true;
	}

	/// Advances the layout by one step. Returns false once the simulation
	/// has cooled down and stopped.
	pub fn tick(&mut self, dt: f32) -> bool {
		if !self.running {
			return false;
		}
		self.alpha += (self.alpha_target - self.alpha) * self.config.alpha_decay;
		self.graph.update(dt * self.alpha as f32);
		self.center();
		if self.alpha < self.config.alpha_min {
			debug!("simulation settled");
			self.running = false;
		}
		true
	}

	/// Shifts the free nodes so the layout's centroid sits on the canvas
	/// center.
	fn center(&mut self) {
		let (mut sx, mut sy, mut n) = (0.0, 0.0, 0usize);
		self.graph.visit_nodes(|node| {
			sx += node.x() as f64;
			sy += node.y() as f64;
			n += 1;
		});
		if n == 0 {
			return;
		}
		let (dx, dy) = (
			(self.width / 2.0 - sx / n as f64) as f32,
			(self.height / 2.0 - sy / n as f64) as f32,
		);
		self.graph.visit_nodes_mut(|node| {
			if !node.data.is_anchor {
				node.data.x += dx;
				node.data.y += dy;
			}
		});
	}

	/// Grabs a node: raises the energy target if nothing else is being
	/// dragged and pins the node where it currently is.
	pub fn begin_drag(&mut self, id: &str, pointer_x: f64, pointer_y: f64) -> bool {
		let Some(&idx) = self.index.get(id) else {
			return false;
		};
		if self.drag.is_none() {
			self.alpha_target = self.config.drag_alpha_target;
			self.restart();
		}

		let mut start = (0.0, 0.0);
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				start = (node.data.x, node.data.y);
				node.data.is_anchor = true;
				node.data.user_data.pin = Some(start);
			}
		});
		self.drag = Some(DragState {
			id: id.to_string(),
			node_idx: idx,
			start_x: pointer_x,
			start_y: pointer_y,
			node_start_x: start.0,
			node_start_y: start.1,
		});
		true
	}

	/// Moves the pin of the dragged node along with the pointer.
	pub fn drag_to(&mut self, id: &str, pointer_x: f64, pointer_y: f64) -> bool {
		let Some(drag) = self.drag.as_ref().filter(|d| d.id == id) else {
			return false;
		};
		let idx = drag.node_idx;
		let (nx, ny) = (
			drag.node_start_x + (pointer_x - drag.start_x) as f32,
			drag.node_start_y + (pointer_y - drag.start_y) as f32,
		);
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = nx;
				node.data.y = ny;
				node.data.user_data.pin = Some((nx, ny));
			}
		});
		true
	}

	/// Releases the dragged node back to the physics.
	pub fn end_drag(&mut self, id: &str) -> bool {
		let Some(drag) = self.drag.take_if(|d| d.id == id) else {
			return false;
		};
		self.alpha_target = 0.0;
		self.graph.visit_nodes_mut(|node| {
			if node.index() == drag.node_idx {
				node.data.is_anchor = false;
				node.data.user_data.pin = None;
			}
		});
		true
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

/// Styled tooltip plus the closest match among the player's neighbors.
fn tooltip(node: &PlayerNode, adjacency: &Adjacency<'_>) -> String {
	let mut text = style::tooltip(node);
	let closest = adjacency
		.most_similar(&node.id, 1)
		.and_then(|ranked| ranked.into_iter().next());
	if let Some((other, score)) = closest {
		text.push_str(&format!("\nMost similar: {other} ({score:.2})"));
	}
	text
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::network_graph::types::{PlayerLink, PlayerNode, Role};

	fn data() -> NetworkData {
		NetworkData {
			nodes: vec![
				PlayerNode::new("A", Role::Scorer),
				PlayerNode::new("B", Role::Defender),
				PlayerNode::new("C", Role::Assister),
			],
			links: vec![PlayerLink::new("A", "B"), PlayerLink::new("B", "C")],
		}
	}

	fn state(data: &NetworkData) -> NetworkState {
		NetworkState::new(data, SimulationConfig::default(), 800.0, 600.0)
	}

	#[test]
	fn links_without_visible_endpoints_are_skipped() {
		let mut data = data();
		data.links.push(PlayerLink::new("A", "Z"));
		let s = state(&data);
		assert_eq!(s.node_count(), 3);
		assert_eq!(s.edge_count(), 2);
	}

	#[test]
	fn duplicate_ids_are_placed_once() {
		let mut data = data();
		data.nodes.push(PlayerNode::new("A", Role::Defender));
		assert_eq!(state(&data).node_count(), 3);
	}

	#[test]
	fn drag_pins_and_heats_then_release_unpins() {
		let data = data();
		let mut s = state(&data);
		let start = s.position("A").unwrap();

		assert!(s.begin_drag("A", 10.0, 10.0));
		assert_eq!(s.pin("A"), Some(start));
		assert_eq!(s.alpha_target(), 0.3);
		assert!(s.is_running());

		assert!(s.drag_to("A", 15.0, 7.0));
		let pinned = (start.0 + 5.0, start.1 - 3.0);
		assert_eq!(s.pin("A"), Some(pinned));
		s.tick(0.016);
		assert_eq!(s.position("A"), Some(pinned));

		assert!(s.end_drag("A"));
		assert_eq!(s.pin("A"), None);
		assert_eq!(s.alpha_target(), 0.0);
		assert_eq!(s.dragging(), None);
	}

	#[test]
	fn drag_of_unknown_or_other_node_is_ignored() {
		let data = data();
		let mut s = state(&data);
		assert!(!s.begin_drag("Z", 0.0, 0.0));
		assert!(s.begin_drag("A", 0.0, 0.0));
		assert!(!s.drag_to("B", 5.0, 5.0));
		assert!(!s.end_drag("B"));
		assert_eq!(s.dragging(), Some("A"));
	}

	#[test]
	fn simulation_cools_down_and_stops() {
		let data = data();
		let mut s = state(&data);
		let mut ticks = 0;
		while s.tick(0.016) {
			ticks += 1;
			assert!(ticks < 1000);
		}
		assert!(s.alpha() < 0.001);
		assert!(!s.tick(0.016));

		s.begin_drag("A", 0.0, 0.0);
		assert!(s.tick(0.016));
		assert!(s.alpha() > 0.001);
	}

	#[test]
	fn tooltip_names_the_most_similar_neighbor() {
		let data = data();
		let mut s = state(&data);
		let (idx, _) = {
			let (x, y) = s.position("C").unwrap();
			s.node_at_position(x as f64, y as f64).unwrap()
		};
		s.set_hover(Some(idx));
		let (_, _, radius, text) = s.hover_tooltip().unwrap();
		assert_eq!(radius, 8.0);
		assert!(text.starts_with("C\nType: Assister"));
		assert!(text.ends_with("Most similar: B (1.00)"));
	}

	#[test]
	fn hit_test_uses_node_radius() {
		let data = data();
		let s = state(&data);
		let (x, y) = s.position("A").unwrap();
		let hit = s.node_at_position(x as f64 + 5.0, y as f64);
		assert_eq!(hit.map(|(_, id)| id), Some("A".to_string()));
		assert!(s.node_at_position(x as f64 + 40.0, y as f64 + 40.0).is_none());
	}
}
