use leptos::prelude::*;

/// Shown for any route other than the explorer.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"Page not found"</h1>
			<a href="/">"Back to the explorer"</a>
		</div>
	}
}
