mod layout;

use leptos::prelude::*;

use crate::model::controller::TreeNode;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 300.0;
const MARGIN: f64 = 50.0;
const NODE_RADIUS: f64 = 20.0;

/// Static SVG drawing of a hierarchy.
#[component]
pub fn TreeView(root: TreeNode) -> impl IntoView {
	let layout = layout::layout(&root, WIDTH - 2.0 * MARGIN, HEIGHT - 2.0 * MARGIN);

	let links = layout
		.links
		.iter()
		.map(|link| {
			view! { <path class="tree-link" d=link.vertical_path() fill="none" stroke="#000" stroke-width="2" /> }
		})
		.collect_view();

	let nodes = layout
		.nodes
		.into_iter()
		.map(|node| {
			view! {
				<g class="tree-node" transform=format!("translate({},{})", node.x, node.y)>
					<circle r=NODE_RADIUS.to_string() fill="#fff" stroke="#000" stroke-width="2" />
					<text dy=".35em" text-anchor="middle" font-size="10px" font-weight="bold">
						{node.name}
					</text>
				</g>
			}
		})
		.collect_view();

	view! {
		<div class="visualizer tree-visualizer">
			<svg width=WIDTH.to_string() height=HEIGHT.to_string() class="tree-svg">
				<g transform=format!("translate({MARGIN}, {MARGIN})")>{links} {nodes}</g>
			</svg>
			<p class="caption">"Static representation of a Binary Tree"</p>
		</div>
	}
}
