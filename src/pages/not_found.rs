use leptos::prelude::*;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="network-page">
			<h1>"Page not found"</h1>
			<p><a href="/">"Back to the player network"</a></p>
		</div>
	}
}
