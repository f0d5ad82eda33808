use leptos::prelude::*;
use log::warn;

use crate::components::filter_bar::FilterBar;
use crate::components::network_graph::{Intent, NetworkData, NetworkGraph};
use crate::data::{NetworkSummary, load_network_data, sample_network};

const SAMPLE_PLAYERS: usize = 60;

/// The embedded dataset, or a sample roster when the page has none.
fn initial_data() -> NetworkData {
	load_network_data().unwrap_or_else(|e| {
		warn!("{e}; showing a sample roster instead");
		sample_network(SAMPLE_PLAYERS)
	})
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let graph_data = initial_data();
	let graph_data = Signal::derive(move || graph_data.clone());
	let intent = RwSignal::new(None::<Intent>);
	let summary = RwSignal::new(NetworkSummary::default());

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="network-page">
				<h1>"Player Network"</h1>
				<FilterBar intent=intent />
				<div id="network">
					<NetworkGraph
						data=graph_data
						intent=intent
						on_render=Callback::new(move |s: NetworkSummary| summary.set(s))
					/>
				</div>
				<NetworkStats summary=summary />
			</div>
		</ErrorBoundary>
	}
}

#[component]
fn NetworkStats(summary: RwSignal<NetworkSummary>) -> impl IntoView {
	view! {
		<div class="network-stats">
			<p>
				{move || {
					let s = summary.get();
					format!(
						"{} players · {} links · {} groups",
						s.players,
						s.links,
						s.components,
					)
				}}
			</p>
			<ol class="leaders">
				{move || {
					summary
						.get()
						.leaders
						.into_iter()
						.map(|(name, goals)| view! { <li>{format!("{name} ({goals} goals)")}</li> })
						.collect_view()
				}}
			</ol>
		</div>
	}
}
