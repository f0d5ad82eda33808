use std::collections::BTreeMap;

use crate::components::network_graph::{NetworkData, PlayerLink, PlayerNode, Role};

const FIRST_NAMES: &[&str] = &[
	"Alice", "Bruno", "Carla", "Diego", "Elena", "Felix", "Greta", "Hugo", "Ines", "Jonas", "Kaia",
	"Luca", "Marta", "Nico", "Olga", "Pablo",
];
const LAST_NAMES: &[&str] = &[
	"Almeida", "Berger", "Costa", "Dubois", "Eriksen", "Fischer", "Garcia", "Hansen", "Ivanov",
	"Jansen", "Keller", "Lopez", "Moreau", "Novak", "Ortega", "Petit",
];
const TEAMS: &[&str] = &["Lyon", "Porto", "Ajax", "Celtic", "Sevilla", "Napoli"];

/// Links every pair of teammates, in input order. Players without a team
/// stay unconnected.
pub fn team_links(nodes: &[PlayerNode]) -> Vec<PlayerLink> {
	let mut teams: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
	for node in nodes {
		if let Some(team) = &node.team {
			teams.entry(team.as_str()).or_default().push(node.id.as_str());
		}
	}

	let mut links = Vec::new();
	for players in teams.values() {
		for (i, source) in players.iter().enumerate() {
			for target in &players[i + 1..] {
				links.push(PlayerLink::new(*source, *target));
			}
		}
	}
	links
}

/// A deterministic roster of `n` players spread over six teams, linked by
/// team.
pub fn sample_network(n: usize) -> NetworkData {
	let nodes: Vec<PlayerNode> = (0..n).map(sample_player).collect();
	let links = team_links(&nodes);
	NetworkData { nodes, links }
}

fn sample_player(i: usize) -> PlayerNode {
	let (first, last) = (
		FIRST_NAMES[i % FIRST_NAMES.len()],
		LAST_NAMES[(i / FIRST_NAMES.len() + 7 * i) % LAST_NAMES.len()],
	);
	let cycle = FIRST_NAMES.len() * LAST_NAMES.len();
	let id = if i < cycle {
		format!("{first} {last}")
	} else {
		format!("{first} {last} {}", i / cycle + 1)
	};

	// Scale a pseudo-random draw to `0..max`.
	let draw = |salt: usize, max: f64| (rand_simple(i * 7 + salt) * max).floor();
	let (role, goals, assists, tackles) = match i % 7 {
		0 | 1 => (Role::Scorer, 2.0 + draw(1, 24.0), draw(2, 10.0), draw(3, 15.0)),
		2 | 3 => (Role::Assister, draw(1, 8.0), 2.0 + draw(2, 14.0), draw(3, 20.0)),
		4 | 5 => (Role::Defender, draw(1, 3.0), draw(2, 5.0), 8.0 + draw(3, 30.0)),
		_ => (Role::from_name("Midfielder"), draw(1, 6.0), draw(2, 9.0), draw(3, 25.0)),
	};

	PlayerNode {
		goals,
		assists,
		tackles,
		interceptions: draw(4, 40.0),
		team: Some(TEAMS[i % TEAMS.len()].to_string()),
		..PlayerNode::new(id, role)
	}
}

/// Simple pseudo-random number generator (deterministic for consistency).
fn rand_simple(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	fn on(team: &str, id: &str) -> PlayerNode {
		PlayerNode {
			team: Some(team.into()),
			..PlayerNode::new(id, Role::default())
		}
	}

	#[test]
	fn teammates_form_a_clique() {
		let nodes = vec![
			on("Lyon", "a"),
			on("Porto", "x"),
			on("Lyon", "b"),
			PlayerNode::new("free", Role::Scorer),
			on("Lyon", "c"),
		];
		let links = team_links(&nodes);
		assert_eq!(
			links,
			vec![
				PlayerLink::new("a", "b"),
				PlayerLink::new("a", "c"),
				PlayerLink::new("b", "c"),
			]
		);
	}

	#[test]
	fn sample_is_deterministic_with_unique_ids() {
		let a = sample_network(300);
		let b = sample_network(300);
		let ids: HashSet<&str> = a.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids.len(), 300);
		assert_eq!(a.links, b.links);
		assert_eq!(
			a.nodes.iter().map(|n| n.goals).collect::<Vec<_>>(),
			b.nodes.iter().map(|n| n.goals).collect::<Vec<_>>()
		);
	}

	#[test]
	fn sample_has_players_on_both_sides_of_each_threshold() {
		let data = sample_network(80);
		for role in [Role::Scorer, Role::Assister, Role::Defender] {
			let qualifying = data.nodes.iter().filter(|n| role.qualifies(n)).count();
			assert!(qualifying > 0, "{role} has no qualifying player");
			assert!(qualifying < data.nodes.len(), "{role} admits everyone");
		}
	}
}
