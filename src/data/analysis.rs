//! Structure of the visible network: who is connected to whom, and who
//! resembles whom.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet, VecDeque};

use crate::components::network_graph::{NetworkData, PlayerNode};

/// Headline numbers for the visible network.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NetworkSummary {
	pub players: usize,
	/// Links with both endpoints on screen.
	pub links: usize,
	pub components: usize,
	/// Top scorers of the largest component, best first.
	pub leaders: Vec<(String, f64)>,
}

/// Similarity of two players' attacking output, 1.0 for identical goal and
/// assist counts and approaching 0 as they diverge.
pub fn similarity(a: &PlayerNode, b: &PlayerNode) -> f64 {
	1.0 / (1.0 + (a.goals - b.goals).abs() + (a.assists - b.assists).abs())
}

/// Undirected adjacency over the links whose endpoints are both present.
pub struct Adjacency<'a> {
	order: Vec<&'a PlayerNode>,
	nodes: HashMap<&'a str, &'a PlayerNode>,
	neighbors: HashMap<&'a str, Vec<&'a str>>,
	links: usize,
}

impl<'a> Adjacency<'a> {
	pub fn new(data: &'a NetworkData) -> Self {
		let mut order = Vec::with_capacity(data.nodes.len());
		let mut nodes = HashMap::with_capacity(data.nodes.len());
		for node in &data.nodes {
			if nodes.insert(node.id.as_str(), node).is_none() {
				order.push(node);
			}
		}

		let mut neighbors: HashMap<&str, Vec<&str>> = HashMap::new();
		let mut links = 0;
		for link in &data.links {
			let (source, target) = (link.source.id(), link.target.id());
			let (Some(&src), Some(&tgt)) = (nodes.get(source), nodes.get(target)) else {
				continue;
			};
			neighbors.entry(src.id.as_str()).or_default().push(tgt.id.as_str());
			neighbors.entry(tgt.id.as_str()).or_default().push(src.id.as_str());
			links += 1;
		}

		Self {
			order,
			nodes,
			neighbors,
			links,
		}
	}

	pub fn link_count(&self) -> usize {
		self.links
	}

	pub fn neighbors(&self, id: &str) -> &[&'a str] {
		self.neighbors.get(id).map(Vec::as_slice).unwrap_or_default()
	}

	/// Neighbors of `id` ranked by [`similarity`], most similar first.
	/// `None` when `id` is not in the network.
	pub fn most_similar(&self, id: &str, n: usize) -> Option<Vec<(&'a str, f64)>> {
		let player = self.nodes.get(id)?;
		let mut seen = HashSet::new();
		let mut ranked: Vec<(&'a str, f64)> = self
			.neighbors(id)
			.iter()
			.filter(|other| **other != id && seen.insert(**other))
			.filter_map(|other| self.nodes.get(other).copied())
			.map(|other| (other.id.as_str(), similarity(player, other)))
			.collect();
		ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
		ranked.truncate(n);
		Some(ranked)
	}

	/// Connected components, largest first. Members keep input order.
	pub fn components(&self) -> Vec<Vec<&'a str>> {
		let mut visited = HashSet::new();
		let mut components = Vec::new();

		for &start in &self.order {
			let start = start.id.as_str();
			if !visited.insert(start) {
				continue;
			}
			let mut members = HashSet::from([start]);
			let mut queue = VecDeque::from([start]);
			while let Some(id) = queue.pop_front() {
				for &next in self.neighbors(id) {
					if visited.insert(next) {
						members.insert(next);
						queue.push_back(next);
					}
				}
			}
			components.push(
				self.order
					.iter()
					.map(|&n| n.id.as_str())
					.filter(|id| members.contains(id))
					.collect::<Vec<_>>(),
			);
		}

		components.sort_by_key(|c| Reverse(c.len()));
		components
	}

	/// The `n` members with most goals.
	pub fn top_scorers(&self, members: &[&str], n: usize) -> Vec<(String, f64)> {
		let mut scorers: Vec<&PlayerNode> =
			members.iter().filter_map(|id| self.nodes.get(id).copied()).collect();
		scorers.sort_by(|a, b| b.goals.total_cmp(&a.goals));
		scorers
			.into_iter()
			.take(n)
			.map(|p| (p.id.clone(), p.goals))
			.collect()
	}
}

/// Counts and leaders of the visible network, shown after every rebuild.
pub fn summarize(data: &NetworkData) -> NetworkSummary {
	let adjacency = Adjacency::new(data);
	let components = adjacency.components();
	let leaders = components
		.first()
		.map(|largest| adjacency.top_scorers(largest, 3))
		.unwrap_or_default();

	NetworkSummary {
		players: adjacency.order.len(),
		links: adjacency.link_count(),
		components: components.len(),
		leaders,
	}
}
