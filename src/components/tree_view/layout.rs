//! Tidy hierarchical placement: parents centered over their children,
//! leaves spread left to right, one row per depth.

use crate::model::controller::TreeNode;

// Gap, in leaf units, between adjacent leaves.
const SIBLING_GAP: f64 = 1.0;
const COUSIN_GAP: f64 = 2.0;

#[derive(Clone, Debug, PartialEq)]
pub struct PositionedNode {
	pub name: &'static str,
	pub depth: usize,
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TreeLink {
	pub source: (f64, f64),
	pub target: (f64, f64),
}

impl TreeLink {
	/// Cubic curve leaving the parent downward and entering the child from above.
	pub fn vertical_path(&self) -> String {
		let ((sx, sy), (tx, ty)) = (self.source, self.target);
		let mid = (sy + ty) / 2.0;
		format!("M{sx},{sy}C{sx},{mid} {tx},{mid} {tx},{ty}")
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TreeLayout {
	/// Pre-order.
	pub nodes: Vec<PositionedNode>,
	pub links: Vec<TreeLink>,
}

struct Walk {
	units: Vec<f64>,
	depths: Vec<usize>,
	names: Vec<&'static str>,
	edges: Vec<(usize, usize)>,
	last_leaf_parent: Option<Option<usize>>,
	cursor: f64,
}

impl Walk {
	fn visit(&mut self, node: &TreeNode, depth: usize, parent: Option<usize>) -> f64 {
		let idx = self.units.len();
		self.units.push(0.0);
		self.depths.push(depth);
		self.names.push(node.name);
		if let Some(parent) = parent {
			self.edges.push((parent, idx));
		}

		let unit = if node.children.is_empty() {
			if let Some(prev_parent) = self.last_leaf_parent {
				self.cursor += if prev_parent == parent {
					SIBLING_GAP
				} else {
					COUSIN_GAP
				};
			}
			self.last_leaf_parent = Some(parent);
			self.cursor
		} else {
			let xs: Vec<f64> = node
				.children
				.iter()
				.map(|child| self.visit(child, depth + 1, Some(idx)))
				.collect();
			(xs[0] + xs[xs.len() - 1]) / 2.0
		};
		self.units[idx] = unit;
		unit
	}
}

/// Places `root` inside a `width` x `height` box with the root at the top edge
/// and the deepest leaves at the bottom edge.
pub fn layout(root: &TreeNode, width: f64, height: f64) -> TreeLayout {
	let mut walk = Walk {
		units: Vec::new(),
		depths: Vec::new(),
		names: Vec::new(),
		edges: Vec::new(),
		last_leaf_parent: None,
		cursor: 0.0,
	};
	walk.visit(root, 0, None);

	let (min, max) = walk
		.units
		.iter()
		.fold((f64::MAX, f64::MIN), |(lo, hi), &u| (lo.min(u), hi.max(u)));
	let max_depth = walk.depths.iter().copied().max().unwrap_or(0);

	let nodes: Vec<PositionedNode> = walk
		.units
		.iter()
		.zip(&walk.depths)
		.zip(&walk.names)
		.map(|((&unit, &depth), &name)| PositionedNode {
			name,
			depth,
			x: if max > min {
				(unit - min) / (max - min) * width
			} else {
				width / 2.0
			},
			y: if max_depth > 0 {
				depth as f64 / max_depth as f64 * height
			} else {
				0.0
			},
		})
		.collect();

	let links = walk
		.edges
		.iter()
		.map(|&(parent, child)| TreeLink {
			source: (nodes[parent].x, nodes[parent].y),
			target: (nodes[child].x, nodes[child].y),
		})
		.collect();

	TreeLayout { nodes, links }
}
