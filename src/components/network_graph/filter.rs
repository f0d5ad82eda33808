//! Subgraph selection for the active filter.

use std::borrow::Cow;
use std::collections::HashSet;

use super::types::{NetworkData, PlayerLink, PlayerNode, Role};

/// The active filter selector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Criterion {
	#[default]
	All,
	Role(Role),
	Search(String),
}

impl Role {
	/// Whether a player stands out in this role. Unrecognized roles admit
	/// every player.
	pub fn qualifies(&self, node: &PlayerNode) -> bool {
		match self {
			Role::Scorer => node.goals > 10.0,
			Role::Defender => node.tackles > 20.0,
			Role::Assister => node.assists > 8.0,
			Role::Other(_) => true,
		}
	}
}

/// Applies `criterion` to the full dataset. No criterion, or an empty search,
/// borrows the input as is.
pub fn filter_network<'a>(data: &'a NetworkData, criterion: &Criterion) -> Cow<'a, NetworkData> {
	match criterion {
		Criterion::All => Cow::Borrowed(data),
		Criterion::Role(role) => Cow::Owned(filter_by_role(data, role)),
		Criterion::Search(term) if term.is_empty() => Cow::Borrowed(data),
		Criterion::Search(term) => Cow::Owned(search_by_id(data, term)),
	}
}

/// Keeps the players that qualify for `role` and the links between them.
pub fn filter_by_role(data: &NetworkData, role: &Role) -> NetworkData {
	let nodes: Vec<PlayerNode> = data
		.nodes
		.iter()
		.filter(|n| role.qualifies(n))
		.cloned()
		.collect();
	let links = links_within(&data.links, &nodes);
	NetworkData { nodes, links }
}

/// Keeps the players whose id contains `term`, ignoring case.
///
/// Links are passed through untouched, so some may point at players that are
/// no longer present.
pub fn search_by_id(data: &NetworkData, term: &str) -> NetworkData {
	let term = term.to_lowercase();
	NetworkData {
		nodes: data
			.nodes
			.iter()
			.filter(|n| n.id.to_lowercase().contains(&term))
			.cloned()
			.collect(),
		links: data.links.clone(),
	}
}

/// Links whose endpoints are both among `nodes`.
pub fn links_within(links: &[PlayerLink], nodes: &[PlayerNode]) -> Vec<PlayerLink> {
	let ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
	links
		.iter()
		.filter(|l| ids.contains(l.source.id()) && ids.contains(l.target.id()))
		.cloned()
		.collect()
}
