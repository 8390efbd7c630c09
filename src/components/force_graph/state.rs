use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::debug;

use super::types::GraphData;

pub const NODE_RADIUS: f64 = 20.0;
pub const HIT_RADIUS: f64 = 22.0;

// Simulation stops after this many ticks even if nodes still drift.
pub const MAX_STEPS: u32 = 600;
// Largest per-tick displacement, in pixels, considered at rest.
const REST_THRESHOLD: f64 = 0.05;
// Ticks always simulated after a (re)start; velocities begin near zero.
pub const MIN_STEPS: u32 = 30;
// Consecutive ticks under REST_THRESHOLD needed to call the layout settled.
const CALM_TICKS: u32 = 10;
const INITIAL_SPREAD: f64 = 100.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub label: String,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub node_idx: Option<DefaultNodeIdx>,
	pub offset_x: f64,
	pub offset_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
}

pub struct GraphLayoutState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub drag: DragState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	steps: u32,
	calm: u32,
	settled: bool,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
	ids: HashMap<String, DefaultNodeIdx>,
}

impl GraphLayoutState {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 500.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut ids = HashMap::new();
		let mut edges = Vec::new();

		for (i, node) in data.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let idx = graph.add_node(NodeData {
				x: (width / 2.0 + INITIAL_SPREAD * angle.cos()) as f32,
				y: (height / 2.0 + INITIAL_SPREAD * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					label: node.label.clone(),
				},
			});
			ids.insert(node.id.clone(), idx);
		}

		for link in &data.links {
			if let (Some(&src), Some(&tgt)) = (ids.get(&link.source), ids.get(&link.target)) {
				graph.add_edge(src, tgt, EdgeData::default());
				edges.push((src, tgt));
			}
		}

		Self {
			graph,
			drag: DragState::default(),
			hover: HoverState::default(),
			width,
			height,
			steps: 0,
			calm: 0,
			settled: false,
			edges,
			ids,
		}
	}

	#[cfg(test)]
	pub fn index_of(&self, id: &str) -> Option<DefaultNodeIdx> {
		self.ids.get(id).copied()
	}

	pub fn position(&self, idx: DefaultNodeIdx) -> Option<(f64, f64)> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some((node.x() as f64, node.y() as f64));
			}
		});
		found
	}

	pub fn is_running(&self) -> bool {
		!self.settled
	}

	#[cfg(test)]
	pub fn steps(&self) -> u32 {
		self.steps
	}

	pub fn node_at_position(&self, x: f64, y: f64) -> Option<DefaultNodeIdx> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - x, node.y() as f64 - y);
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		self.hover.node = node;
		self.hover.neighbors.clear();
		if let Some(idx) = node {
			for &(src, tgt) in &self.edges {
				if src == idx {
					self.hover.neighbors.insert(tgt);
				} else if tgt == idx {
					self.hover.neighbors.insert(src);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.neighbors.contains(&idx)
	}

	pub fn begin_drag(&mut self, x: f64, y: f64) -> bool {
		let Some(idx) = self.node_at_position(x, y) else {
			return false;
		};
		let Some((nx, ny)) = self.position(idx) else {
			return false;
		};
		self.drag = DragState {
			node_idx: Some(idx),
			offset_x: nx - x,
			offset_y: ny - y,
		};
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.is_anchor = true;
			}
		});
		self.wake();
		true
	}

	pub fn drag_to(&mut self, x: f64, y: f64) {
		let Some(idx) = self.drag.node_idx else {
			return;
		};
		let (nx, ny) = (
			(x + self.drag.offset_x).clamp(NODE_RADIUS, self.width - NODE_RADIUS) as f32,
			(y + self.drag.offset_y).clamp(NODE_RADIUS, self.height - NODE_RADIUS) as f32,
		);
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = nx;
				node.data.y = ny;
			}
		});
		self.wake();
	}

	/// Lets a dragged node rejoin the simulation.
	pub fn end_drag(&mut self) {
		let Some(idx) = self.drag.node_idx.take() else {
			return;
		};
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.is_anchor = false;
			}
		});
		self.wake();
	}

	fn wake(&mut self) {
		self.steps = 0;
		self.calm = 0;
		self.settled = false;
	}

	/// Advances the layout one step. Returns whether it is still moving.
	pub fn tick(&mut self, dt: f32) -> bool {
		self.fade_highlight(dt as f64);
		if self.settled {
			return false;
		}

		let before = self.positions();
		self.graph.update(dt);
		self.pull_to_center();
		let moved = self
			.positions()
			.iter()
			.zip(&before)
			.map(|((x1, y1), (x0, y0))| (x1 - x0).hypot(y1 - y0))
			.fold(0.0, f64::max);

		self.steps += 1;
		self.calm = if moved < REST_THRESHOLD { self.calm + 1 } else { 0 };
		let at_rest = self.steps >= MIN_STEPS && self.calm >= CALM_TICKS;
		if self.drag.node_idx.is_none() && (at_rest || self.steps >= MAX_STEPS) {
			debug!("graph layout at rest after {} steps", self.steps);
			self.settled = true;
		}
		!self.settled
	}

	#[cfg(test)]
	pub fn run_to_rest(&mut self, dt: f32) {
		while self.tick(dt) {}
	}

	// Shifts free nodes so their centroid sits in the middle of the canvas.
	fn pull_to_center(&mut self) {
		let (mut sx, mut sy, mut n) = (0.0, 0.0, 0usize);
		self.graph.visit_nodes(|node| {
			if !node.data.is_anchor {
				sx += node.x() as f64;
				sy += node.y() as f64;
				n += 1;
			}
		});
		if n == 0 {
			return;
		}
		let (dx, dy) = (
			(self.width / 2.0 - sx / n as f64) as f32,
			(self.height / 2.0 - sy / n as f64) as f32,
		);
		self.graph.visit_nodes_mut(|node| {
			if !node.data.is_anchor {
				node.data.x += dx;
				node.data.y += dy;
			}
		});
	}

	fn positions(&self) -> Vec<(f64, f64)> {
		let mut out = Vec::new();
		self.graph
			.visit_nodes(|node| out.push((node.x() as f64, node.y() as f64)));
		out
	}

	fn fade_highlight(&mut self, dt: f64) {
		let target = if self.hover.node.is_some() { 1.0 } else { 0.0 };
		self.hover.highlight_t += (target - self.hover.highlight_t) * (4.0 * dt).min(1.0);
		if self.hover.highlight_t < 0.01 {
			self.hover.highlight_t = 0.0;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::types::GraphData;
	use crate::model::controller::graph_fixture;

	fn fixture_state() -> GraphLayoutState {
		GraphLayoutState::new(&GraphData::from(&graph_fixture()), 600.0, 300.0)
	}

	#[test]
	fn settles_within_step_budget() {
		let mut state = fixture_state();
		assert!(state.is_running());
		state.run_to_rest(0.016);
		assert!(!state.is_running());
		assert!(state.steps() <= MAX_STEPS);
		assert!(!state.tick(0.016));
	}

	#[test]
	fn keeps_iterating_past_the_slow_first_ticks() {
		let mut state = fixture_state();
		let seed = state.positions();
		state.run_to_rest(0.016);
		assert!(state.steps() >= MIN_STEPS, "stopped after {} steps", state.steps());

		let travelled = state
			.positions()
			.iter()
			.zip(&seed)
			.map(|((x1, y1), (x0, y0))| (x1 - x0).hypot(y1 - y0))
			.fold(0.0, f64::max);
		assert!(travelled > 1.0, "nodes only moved {travelled}px");
	}

	#[test]
	fn release_after_drag_restarts_full_iteration() {
		let mut state = fixture_state();
		state.run_to_rest(0.016);
		let c = state.index_of("C").unwrap();
		let (cx, cy) = state.position(c).unwrap();
		assert!(state.begin_drag(cx, cy));
		state.drag_to(cx + 60.0, cy);
		state.end_drag();
		state.run_to_rest(0.016);
		assert!(state.steps() >= MIN_STEPS);
	}

	#[test]
	fn free_nodes_stay_centered() {
		let mut state = fixture_state();
		for _ in 0..50 {
			state.tick(0.016);
		}
		let points = state.positions();
		let n = points.len() as f64;
		let cx = points.iter().map(|p| p.0).sum::<f64>() / n;
		let cy = points.iter().map(|p| p.1).sum::<f64>() / n;
		assert!((cx - 300.0).abs() < 0.5, "cx = {cx}");
		assert!((cy - 150.0).abs() < 0.5, "cy = {cy}");
	}

	#[test]
	fn nodes_do_not_collapse() {
		let mut state = fixture_state();
		state.run_to_rest(0.016);
		let points = state.positions();
		for (i, a) in points.iter().enumerate() {
			for b in &points[i + 1..] {
				assert!((a.0 - b.0).hypot(a.1 - b.1) > 1.0);
			}
		}
	}

	#[test]
	fn hover_marks_adjacent_vertices() {
		let mut state = fixture_state();
		let a = state.index_of("A").unwrap();
		state.set_hover(Some(a));
		let expected: HashSet<_> = ["B", "E", "C"]
			.into_iter()
			.map(|id| state.index_of(id).unwrap())
			.collect();
		assert_eq!(state.hover.neighbors, expected);
		assert!(state.is_highlighted(a));
		assert!(!state.is_highlighted(state.index_of("D").unwrap()));

		state.set_hover(None);
		assert!(state.hover.neighbors.is_empty());
	}

	#[test]
	fn dragging_pins_then_releases_node() {
		let mut state = fixture_state();
		state.run_to_rest(0.016);
		let b = state.index_of("B").unwrap();
		let (bx, by) = state.position(b).unwrap();

		assert!(state.begin_drag(bx + 3.0, by));
		assert!(state.is_running());
		state.drag_to(103.0, 100.0);
		assert_eq!(state.position(b), Some((100.0, 100.0)));
		state.tick(0.016);
		assert_eq!(state.position(b), Some((100.0, 100.0)));

		state.end_drag();
		assert!(state.drag.node_idx.is_none());
		assert!(!state.begin_drag(-500.0, -500.0));
	}
}
