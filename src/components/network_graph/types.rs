//! Player network records as supplied by the page.
//!
//! Decoding is forgiving: counters that are missing or not
//! numeric read as zero, an unknown `type` maps to [`Role::Other`] and a link
//! endpoint without a usable id reads as the empty id.

use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Role category of a player. Anything outside the three known roles is
/// kept verbatim in [`Role::Other`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "Value")]
pub enum Role {
	Scorer,
	Assister,
	Defender,
	Other(String),
}

impl Role {
	/// Maps a `type` field to a role, keeping unknown names.
	pub fn from_name(name: &str) -> Self {
		match name {
			"Scorer" => Role::Scorer,
			"Assister" => Role::Assister,
			"Defender" => Role::Defender,
			other => Role::Other(other.to_string()),
		}
	}

	pub fn as_str(&self) -> &str {
		match self {
			Role::Scorer => "Scorer",
			Role::Assister => "Assister",
			Role::Defender => "Defender",
			Role::Other(name) => name,
		}
	}
}

impl Default for Role {
	fn default() -> Self {
		Role::Other(String::new())
	}
}

impl From<Value> for Role {
	fn from(value: Value) -> Self {
		match value {
			Value::String(name) => Role::from_name(&name),
			_ => Role::default(),
		}
	}
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Role::Other(name) if name.is_empty() => f.write_str("Unknown"),
			role => f.write_str(role.as_str()),
		}
	}
}

/// A player in the network.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PlayerNode {
	/// Unique identifier, also used as the visible label.
	#[serde(default, deserialize_with = "lenient_id")]
	pub id: String,
	#[serde(rename = "type", default)]
	pub role: Role,
	#[serde(default, deserialize_with = "lenient_count")]
	pub goals: f64,
	#[serde(default, deserialize_with = "lenient_count")]
	pub assists: f64,
	#[serde(default, deserialize_with = "lenient_count")]
	pub tackles: f64,
	#[serde(default, deserialize_with = "lenient_count")]
	pub interceptions: f64,
	#[serde(default)]
	pub team: Option<String>,
}

impl PlayerNode {
	pub fn new(id: impl Into<String>, role: Role) -> Self {
		Self {
			id: id.into(),
			role,
			..Default::default()
		}
	}
}

/// One end of a link: a bare node id, or a node object that has already been
/// resolved and carries its own `id`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum Endpoint {
	Id(String),
	Resolved { id: String },
}

impl Default for Endpoint {
	fn default() -> Self {
		Endpoint::Id(String::new())
	}
}

impl Endpoint {
	pub fn id(&self) -> &str {
		match self {
			Endpoint::Id(id) | Endpoint::Resolved { id } => id,
		}
	}
}

impl From<Value> for Endpoint {
	fn from(value: Value) -> Self {
		match value {
			Value::Object(mut fields) => Endpoint::Resolved {
				id: fields.remove("id").map(id_text).unwrap_or_default(),
			},
			other => Endpoint::Id(id_text(other)),
		}
	}
}

impl From<&str> for Endpoint {
	fn from(id: &str) -> Self {
		Endpoint::Id(id.to_string())
	}
}

impl From<String> for Endpoint {
	fn from(id: String) -> Self {
		Endpoint::Id(id)
	}
}

/// A relationship between two players.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PlayerLink {
	#[serde(default)]
	pub source: Endpoint,
	#[serde(default)]
	pub target: Endpoint,
}

impl PlayerLink {
	pub fn new(source: impl Into<Endpoint>, target: impl Into<Endpoint>) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
		}
	}
}

/// A complete dataset: players and the links between them.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NetworkData {
	#[serde(default)]
	pub nodes: Vec<PlayerNode>,
	#[serde(default)]
	pub links: Vec<PlayerLink>,
}

fn lenient_count<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Option::<Value>::deserialize(deserializer)?;
	let count = match value {
		Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
		Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
		_ => 0.0,
	};
	Ok(if count.is_finite() { count } else { 0.0 })
}

fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<Value>::deserialize(deserializer)?
		.map(id_text)
		.unwrap_or_default())
}

/// Strings and numbers name a node; anything else names none.
fn id_text(value: Value) -> String {
	match value {
		Value::String(s) => s,
		Value::Number(n) => n.to_string(),
		_ => String::new(),
	}
}
