use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, warn};

use crate::api::{HttpFacade, PersistenceFacade, structures_or_empty};
use crate::model::{Shell, StructureDescriptor, StructureKind};

fn icon(kind: StructureKind) -> &'static str {
	match kind {
		StructureKind::Array => "▦",
		StructureKind::Stack => "☰",
		StructureKind::Queue => "⇄",
		StructureKind::LinkedList => "⛓",
		StructureKind::Tree | StructureKind::Graph => "⋔",
	}
}

#[component]
fn SidebarItem(desc: &'static StructureDescriptor) -> impl IntoView {
	let shell = expect_context::<RwSignal<Shell>>();
	let is_active = move || shell.with(|s| s.is_active(desc.id));
	let select = move |_| {
		shell.update(|s| {
			if let Err(err) = s.select(desc.id) {
				error!("{err}");
			}
		})
	};

	view! {
		<button class="sidebar-item" class:active=is_active on:click=select>
			<span class="sidebar-icon">{icon(desc.kind)}</span>
			<span class="sidebar-label">{desc.name}</span>
			<Show when=is_active>
				<span class="sidebar-chevron">"›"</span>
			</Show>
		</button>
	}
}

/// Reports whether the backend answers and how many catalog rows it holds.
#[component]
fn BackendStatus() -> impl IntoView {
	let facade = expect_context::<HttpFacade>();
	let status = RwSignal::new(String::from("Checking backend…"));

	spawn_local(async move {
		let line = match facade.check_health().await {
			Ok(health) => {
				let records = structures_or_empty(&facade).await;
				format!("Backend {} · {} stored structures", health.status, records.len())
			}
			Err(err) => {
				warn!("health check failed: {err}");
				String::from("Backend offline · quiz results will not be saved")
			}
		};
		let _ = status.try_set(line);
	});

	view! { <p class="backend-status">{move || status.get()}</p> }
}

/// Navigation grouped by category, with the active structure highlighted.
#[component]
pub fn Sidebar() -> impl IntoView {
	let shell = expect_context::<RwSignal<Shell>>();
	let sections = Shell::sections()
		.into_iter()
		.map(|(heading, items)| {
			let entries = items
				.into_iter()
				.map(|desc| view! { <SidebarItem desc=desc /> })
				.collect_view();
			view! {
				<div class="sidebar-section">
					<h2 class="sidebar-heading">{heading}</h2>
					<div class="sidebar-items">{entries}</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<aside class="sidebar">
			<div class="brand">
				<div class="brand-mark">"▦"</div>
				<div>
					<h1 class="brand-title">"DataStruct"</h1>
					<p class="brand-subtitle">"Explorer v1.0"</p>
				</div>
			</div>

			<nav class="sidebar-nav">{sections}</nav>

			<div class="learning-tip">
				<span class="learning-tip-heading">"Learning Tip"</span>
				<p>{move || shell.with(|s| s.learning_tip())}</p>
			</div>
			<BackendStatus />
		</aside>
	}
}
