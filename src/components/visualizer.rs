use leptos::prelude::*;

use super::force_graph::{ForceGraphCanvas, GraphData};
use super::linear_view::LinearView;
use super::tree_view::TreeView;
use crate::model::controller::{graph_fixture, tree_fixture};
use crate::model::{LinearKind, Shell, StructureKind, VisualizationState};

/// Mounts the visualizer for the active structure. A structure switch or a
/// reset remounts it with fresh state.
#[component]
pub fn Visualizer() -> impl IntoView {
	let shell = expect_context::<RwSignal<Shell>>();
	let mount = Memo::new(move |_| shell.with(|s| (s.active_kind(), s.epoch())));

	move || {
		let (kind, _) = mount.get();
		match kind {
			StructureKind::Array => view! { <LinearView kind=LinearKind::Array /> }.into_any(),
			StructureKind::Stack => view! { <LinearView kind=LinearKind::Stack /> }.into_any(),
			StructureKind::Queue => view! { <LinearView kind=LinearKind::Queue /> }.into_any(),
			StructureKind::LinkedList => {
				view! { <LinearView kind=LinearKind::LinkedList /> }.into_any()
			}
			StructureKind::Tree => {
				let root = shell.with_untracked(|s| match s.state() {
					VisualizationState::Tree(root) => root.clone(),
					_ => tree_fixture(),
				});
				view! { <TreeView root=root /> }.into_any()
			}
			StructureKind::Graph => {
				let data = shell.with_untracked(|s| match s.state() {
					VisualizationState::Graph(fixture) => GraphData::from(fixture),
					_ => GraphData::from(&graph_fixture()),
				});
				view! {
					<div class="visualizer graph-visualizer">
						<ForceGraphCanvas data=data />
						<p class="caption">"Interactive Force-Directed Graph"</p>
					</div>
				}
				.into_any()
			}
		}
	}
}
