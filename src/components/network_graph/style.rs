use super::types::{PlayerNode, Role};

pub const BASE_RADIUS: f64 = 8.0;
pub const DEFAULT_COLOR: &str = "#999";

pub const LINK_COLOR: &str = "rgba(153, 153, 153, 0.6)";
pub const LINK_WIDTH: f64 = 1.0;
pub const LABEL_FONT: &str = "8px sans-serif";
pub const LABEL_OFFSET: (f64, f64) = (12.0, 4.0);

/// Circle radius, growing with the counter that matches the player's role.
pub fn node_radius(node: &PlayerNode) -> f64 {
	match node.role {
		Role::Scorer => BASE_RADIUS + node.goals * 0.5,
		Role::Assister => BASE_RADIUS + node.assists * 0.5,
		Role::Defender => BASE_RADIUS + node.tackles * 0.2,
		Role::Other(_) => BASE_RADIUS,
	}
}

/// Fill color for the player's role.
pub fn node_color(node: &PlayerNode) -> &'static str {
	match node.role {
		Role::Scorer => "#ff1493",
		Role::Assister => "#9c27b0",
		Role::Defender => "#4caf50",
		Role::Other(_) => DEFAULT_COLOR,
	}
}

/// Hover text: identity first, then one counter per line.
pub fn tooltip(node: &PlayerNode) -> String {
	let mut text = format!(
		"{}\nType: {}\nGoals: {}\nAssists: {}\nTackles: {}",
		node.id, node.role, node.goals, node.assists, node.tackles
	);
	if let Some(team) = &node.team {
		text.push_str("\nTeam: ");
		text.push_str(team);
	}
	text
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(role: Role) -> PlayerNode {
		PlayerNode {
			goals: 20.0,
			assists: 10.0,
			tackles: 30.0,
			..PlayerNode::new("P", role)
		}
	}

	#[test]
	fn radius_scales_with_role_counter() {
		assert_eq!(node_radius(&node(Role::Scorer)), 18.0);
		assert_eq!(node_radius(&node(Role::Assister)), 13.0);
		assert_eq!(node_radius(&node(Role::Defender)), 14.0);

		let half = PlayerNode {
			goals: 10.5,
			..PlayerNode::new("H", Role::Scorer)
		};
		assert_eq!(node_radius(&half), 13.25);
	}

	#[test]
	fn unknown_role_uses_defaults() {
		let n = node(Role::from_name("Goalkeeper"));
		assert_eq!(node_radius(&n), 8.0);
		assert_eq!(node_color(&n), "#999");
		assert_eq!(node_color(&PlayerNode::default()), "#999");
	}

	#[test]
	fn styling_is_deterministic() {
		for role in [Role::Scorer, Role::Assister, Role::Defender, Role::default()] {
			let n = node(role);
			assert_eq!(node_radius(&n), node_radius(&n.clone()));
			assert_eq!(node_color(&n), node_color(&n.clone()));
		}
		assert_eq!(node_color(&node(Role::Scorer)), "#ff1493");
		assert_eq!(node_color(&node(Role::Assister)), "#9c27b0");
		assert_eq!(node_color(&node(Role::Defender)), "#4caf50");
	}

	#[test]
	fn tooltip_lists_counters_and_team() {
		let mut n = node(Role::Defender);
		assert_eq!(tooltip(&n), "P\nType: Defender\nGoals: 20\nAssists: 10\nTackles: 30");

		n.team = Some("Lyon".into());
		assert!(tooltip(&n).ends_with("\nTeam: Lyon"));
	}
}
