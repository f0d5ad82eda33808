//! Browser tests for reading the dataset out of the page and for the filter
//! bar's DOM hooks.
#![cfg(target_arch = "wasm32")]

use football_network::components::filter_bar::FilterBar;
use football_network::components::network_graph::{Intent, Role};
use football_network::data::loader::{LoadError, load_from_element};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn embed(id: &str, tag: &str, text: &str) {
	let document = web_sys::window().unwrap().document().unwrap();
	let element = document.create_element(tag).unwrap();
	element.set_id(id);
	// Keeps the browser from running the payload as JavaScript.
	element.set_attribute("type", "application/json").unwrap();
	element.set_text_content(Some(text));
	document.body().unwrap().append_child(&element).unwrap();
}

#[wasm_bindgen_test]
fn loads_embedded_dataset() {
	embed(
		"players-ok",
		"script",
		r#"{"nodes":[{"id":"Alice","type":"Scorer","goals":15},{"id":"Bob"}],
		"links":[{"source":"Alice","target":"Bob"}]}"#,
	);
	let data = load_from_element("players-ok").unwrap();
	assert_eq!(data.nodes.len(), 2);
	assert_eq!(data.nodes[0].goals, 15.0);
	assert_eq!(data.links.len(), 1);
}

#[wasm_bindgen_test]
fn reports_missing_and_wrong_elements() {
	assert!(matches!(
		load_from_element("no-such-element"),
		Err(LoadError::MissingElement(_))
	));

	embed("players-div", "div", "{}");
	assert!(matches!(
		load_from_element("players-div"),
		Err(LoadError::NotAScript(_))
	));
}

#[wasm_bindgen_test]
fn reports_invalid_json() {
	embed("players-bad", "script", "not json");
	assert!(matches!(
		load_from_element("players-bad"),
		Err(LoadError::Parse(_))
	));
}

fn click(selector: &str) {
	web_sys::window()
		.unwrap()
		.document()
		.unwrap()
		.query_selector(selector)
		.unwrap()
		.unwrap()
		.dyn_into::<HtmlElement>()
		.unwrap()
		.click();
}

fn type_into_search(text: &str) {
	let input = web_sys::window()
		.unwrap()
		.document()
		.unwrap()
		.get_element_by_id("searchFilter")
		.unwrap()
		.dyn_into::<HtmlInputElement>()
		.unwrap();
	input.set_value(text);
	let init = EventInit::new();
	init.set_bubbles(true);
	let event = Event::new_with_event_init_dict("input", &init).unwrap();
	input.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn filter_bar_turns_clicks_and_keystrokes_into_intents() {
	let document = web_sys::window().unwrap().document().unwrap();
	let parent = document.create_element("div").unwrap().dyn_into::<HtmlElement>().unwrap();
	document.body().unwrap().append_child(&parent).unwrap();

	let intent = RwSignal::new(None::<Intent>);
	let _mounted = leptos::mount::mount_to(parent, move || view! { <FilterBar intent=intent /> });

	for (id, role) in [
		("#topScorers", Role::Scorer),
		("#topDefenders", Role::Defender),
		("#topAssisters", Role::Assister),
	] {
		click(id);
		assert_eq!(intent.get_untracked(), Some(Intent::RoleFilterSelected(role)));
	}

	// Clicks inside the bar that miss a clear button leave the filter alone.
	click(".filters");
	assert_eq!(
		intent.get_untracked(),
		Some(Intent::RoleFilterSelected(Role::Assister))
	);

	type_into_search("ali");
	assert_eq!(intent.get_untracked(), Some(Intent::SearchChanged("ali".into())));

	click(".filters .clear-filter");
	assert_eq!(intent.get_untracked(), Some(Intent::ClearFilter));
}
