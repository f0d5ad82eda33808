use log::info;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use super::roster::team_links;
use crate::components::network_graph::NetworkData;

/// Id of the `<script type="application/json">` element the page embeds its
/// dataset in.
pub const DATA_ELEMENT_ID: &str = "network-data";

#[derive(Debug, Error)]
pub enum LoadError {
	#[error("no browser document available")]
	NoDocument,
	#[error("no element with id {0:?}")]
	MissingElement(String),
	#[error("element {0:?} is not a script")]
	NotAScript(String),
	#[error("could not read the text of {0:?}")]
	Unreadable(String),
	#[error("invalid network data: {0}")]
	Parse(#[from] serde_json::Error),
}

/// Decodes a `{ nodes, links }` document. A dataset that carries no links is
/// connected by team instead.
pub fn parse_network(json: &str) -> Result<NetworkData, LoadError> {
	let mut data: NetworkData = serde_json::from_str(json)?;
	if data.links.is_empty() {
		data.links = team_links(&data.nodes);
		if !data.links.is_empty() {
			info!("no links supplied, derived {} from teams", data.links.len());
		}
	}
	Ok(data)
}

/// Reads the dataset embedded in the page's `#network-data` script.
pub fn load_network_data() -> Result<NetworkData, LoadError> {
	load_from_element(DATA_ELEMENT_ID)
}

pub fn load_from_element(id: &str) -> Result<NetworkData, LoadError> {
	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or(LoadError::NoDocument)?;
	let script: HtmlScriptElement = document
		.get_element_by_id(id)
		.ok_or_else(|| LoadError::MissingElement(id.to_string()))?
		.dyn_into()
		.map_err(|_| LoadError::NotAScript(id.to_string()))?;
	let text = script
		.text()
		.map_err(|_| LoadError::Unreadable(id.to_string()))?;

	let data = parse_network(&text)?;
	info!(
		"loaded {} players and {} links from #{id}",
		data.nodes.len(),
		data.links.len()
	);
	Ok(data)
}
