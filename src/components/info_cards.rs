use leptos::prelude::*;

use crate::model::{Category, Shell, StructureDescriptor};

fn active_descriptor() -> Memo<&'static StructureDescriptor> {
	let shell = expect_context::<RwSignal<Shell>>();
	Memo::new(move |_| shell.with(|s| s.active()))
}

/// Category badge, structure name and the reset action.
#[component]
pub fn Header() -> impl IntoView {
	let shell = expect_context::<RwSignal<Shell>>();
	let desc = active_descriptor();
	let badge_class = move || match desc.get().category {
		Category::Linear => "badge badge-linear",
		Category::NonLinear => "badge badge-non-linear",
	};

	view! {
		<header class="header">
			<div class="header-title">
				<span class=badge_class>{move || desc.get().category.label()}</span>
				<h2>{move || desc.get().name}</h2>
			</div>
			<button class="icon-button" title="Reset" on:click=move |_| shell.update(Shell::reset)>
				"↺"
			</button>
		</header>
	}
}

/// Prose definition of the active structure.
#[component]
pub fn DefinitionCard() -> impl IntoView {
	let desc = active_descriptor();
	view! {
		<div class="card">
			<h3 class="card-heading">"Definition"</h3>
			<p class="definition">{move || desc.get().description}</p>
		</div>
	}
}

#[component]
fn ComplexityBadge(label: &'static str, value: &'static str) -> impl IntoView {
	view! {
		<div class="complexity-badge">
			<span class="complexity-label">{label}</span>
			<span class="complexity-value">{value}</span>
		</div>
	}
}

/// The four authored complexity classes.
#[component]
pub fn ComplexityCard() -> impl IntoView {
	let desc = active_descriptor();
	view! {
		<div class="card card-dark">
			<h3 class="card-heading">"Time Complexity"</h3>
			<div class="complexity-grid">
				{move || {
					desc.get()
						.complexity
						.entries()
						.into_iter()
						.map(|(label, value)| view! { <ComplexityBadge label=label value=value /> })
						.collect_view()
				}}
			</div>
		</div>
	}
}

/// Bullet list of key properties.
#[component]
pub fn PropertiesCard() -> impl IntoView {
	let desc = active_descriptor();
	view! {
		<div class="card">
			<h3 class="card-heading">"Key Properties"</h3>
			<ul class="properties">
				{move || {
					desc.get()
						.properties
						.iter()
						.map(|prop| view! { <li>{*prop}</li> })
						.collect_view()
				}}
			</ul>
		</div>
	}
}
