use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use super::network_graph::{Intent, Role};

/// Role buttons, the search box and the clear button. Every interaction is
/// written to `intent` for the network to pick up.
#[component]
pub fn FilterBar(intent: RwSignal<Option<Intent>>) -> impl IntoView {
	let select = move |role: Role| {
		move |_: MouseEvent| intent.set(Some(Intent::RoleFilterSelected(role.clone())))
	};

	// Clear buttons are matched by class so any number of them can sit in the
	// bar.
	let on_bar_click = move |ev: MouseEvent| {
		let is_clear = ev
			.target()
			.and_then(|t| t.dyn_into::<Element>().ok())
			.is_some_and(|el| el.class_list().contains("clear-filter"));
		if is_clear {
			intent.set(Some(Intent::ClearFilter));
		}
	};

	view! {
		<div class="filters" on:click=on_bar_click>
			<button id="topScorers" on:click=select(Role::Scorer)>"Top Scorers"</button>
			<button id="topDefenders" on:click=select(Role::Defender)>"Top Defenders"</button>
			<button id="topAssisters" on:click=select(Role::Assister)>"Top Assisters"</button>
			<input
				id="searchFilter"
				type="text"
				placeholder="Search players..."
				on:input=move |ev| intent.set(Some(Intent::SearchChanged(event_target_value(&ev))))
			/>
			<button class="clear-filter">"Clear filter"</button>
		</div>
	}
}
