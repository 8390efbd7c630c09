//! Per-kind visualization state and the transitions each visualizer exposes.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::registry::StructureKind;

/// Upper bound (exclusive) for generated demo values.
pub const DEMO_VALUE_CEILING: i64 = 100;

/// Supplies values for pushes the user did not spell out.
pub trait ValueSource {
	/// Next value, expected in `0..DEMO_VALUE_CEILING`.
	fn next_value(&mut self) -> i64;
}

/// Pseudo-random demo values.
#[derive(Debug, Clone)]
pub struct RandomValues {
	rng: SmallRng,
}

impl RandomValues {
	/// Seeds from the platform entropy source.
	pub fn from_entropy() -> Self {
		Self {
			rng: SmallRng::from_entropy(),
		}
	}

	/// Reproducible sequence for a given seed.
	pub fn seeded(seed: u64) -> Self {
		Self {
			rng: SmallRng::seed_from_u64(seed),
		}
	}
}

impl ValueSource for RandomValues {
	fn next_value(&mut self) -> i64 {
		self.rng.gen_range(0..DEMO_VALUE_CEILING)
	}
}

/// Which end `pop` removes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalEnd {
	/// Last element (array, stack, linked list).
	Back,
	/// First element (queue).
	Front,
}

/// Linear kinds that carry an editable sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinearKind {
	/// See [`StructureKind::Array`].
	Array,
	/// See [`StructureKind::Stack`].
	Stack,
	/// See [`StructureKind::Queue`].
	Queue,
	/// See [`StructureKind::LinkedList`].
	LinkedList,
}

impl LinearKind {
	/// Values present right after the visualizer mounts.
	pub fn seed(self) -> &'static [i64] {
		match self {
			LinearKind::Array => &[10, 20, 30, 40, 50],
			LinearKind::Stack | LinearKind::Queue | LinearKind::LinkedList => &[10, 20, 30],
		}
	}

	/// End removed by `pop`.
	pub fn removal_end(self) -> RemovalEnd {
		match self {
			LinearKind::Queue => RemovalEnd::Front,
			_ => RemovalEnd::Back,
		}
	}

	/// Button captions for the insert and remove actions.
	pub fn action_labels(self) -> (&'static str, &'static str) {
		match self {
			LinearKind::Array | LinearKind::Stack => ("Push", "Pop"),
			LinearKind::Queue => ("Enqueue", "Dequeue"),
			LinearKind::LinkedList => ("Add Node", "Remove Node"),
		}
	}

	/// The catalog kind this sequence renders.
	pub fn structure_kind(self) -> StructureKind {
		match self {
			LinearKind::Array => StructureKind::Array,
			LinearKind::Stack => StructureKind::Stack,
			LinearKind::Queue => StructureKind::Queue,
			LinearKind::LinkedList => StructureKind::LinkedList,
		}
	}
}

/// Editable integer sequence behind a linear visualizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearState {
	kind: LinearKind,
	elements: Vec<i64>,
}

impl LinearState {
	/// Fresh state holding the kind's seed values.
	pub fn seeded(kind: LinearKind) -> Self {
		Self::with_elements(kind, kind.seed().to_vec())
	}

	/// State holding arbitrary elements, logical order front to back.
	pub fn with_elements(kind: LinearKind, elements: Vec<i64>) -> Self {
		Self { kind, elements }
	}

	/// Which linear kind this is.
	pub fn kind(&self) -> LinearKind {
		self.kind
	}

	/// Elements in insertion order.
	pub fn elements(&self) -> &[i64] {
		&self.elements
	}

	/// Number of elements held.
	pub fn len(&self) -> usize {
		self.elements.len()
	}

	/// Whether nothing is held.
	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}

	/// Appends at the end (the rear, for a queue).
	pub fn push(&mut self, value: i64) {
		self.elements.push(value);
	}

	/// Appends a value drawn from `source`, returning it.
	pub fn push_generated<S: ValueSource + ?Sized>(&mut self, source: &mut S) -> i64 {
		let value = source.next_value();
		self.push(value);
		value
	}

	/// Removes from the kind's removal end. Empty state stays empty.
	pub fn pop(&mut self) -> Option<i64> {
		match self.kind.removal_end() {
			RemovalEnd::Back => self.elements.pop(),
			RemovalEnd::Front if self.elements.is_empty() => None,
			RemovalEnd::Front => Some(self.elements.remove(0)),
		}
	}

	/// Elements in on-screen order: a stack lists its top first.
	pub fn display_order(&self) -> Vec<i64> {
		self.indexed_display_order()
			.into_iter()
			.map(|(_, value)| value)
			.collect()
	}

	/// [`LinearState::display_order`] paired with each element's logical
	/// position (0 = first inserted still present).
	pub fn indexed_display_order(&self) -> Vec<(usize, i64)> {
		let mut cells: Vec<(usize, i64)> = self.elements.iter().copied().enumerate().collect();
		if self.kind == LinearKind::Stack {
			cells.reverse();
		}
		cells
	}
}

/// Node of the illustrative tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
	/// Label drawn inside the node.
	pub name: &'static str,
	/// Ordered children.
	pub children: Vec<TreeNode>,
}

impl TreeNode {
	/// Node without children.
	pub fn leaf(name: &'static str) -> Self {
		Self {
			name,
			children: Vec::new(),
		}
	}

	/// Node with the given children.
	pub fn branch(name: &'static str, children: Vec<TreeNode>) -> Self {
		Self { name, children }
	}

	/// Total number of nodes in this subtree.
	pub fn size(&self) -> usize {
		1 + self.children.iter().map(TreeNode::size).sum::<usize>()
	}
}

/// The binary tree shown by the tree visualizer.
pub fn tree_fixture() -> TreeNode {
	TreeNode::branch(
		"Root",
		vec![
			TreeNode::branch("L1", vec![TreeNode::leaf("L1.1"), TreeNode::leaf("L1.2")]),
			TreeNode::branch("R1", vec![TreeNode::leaf("R1.1"), TreeNode::leaf("R1.2")]),
		],
	)
}

/// Vertex and edge set shown by the graph visualizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphFixture {
	/// Vertex ids.
	pub vertices: Vec<&'static str>,
	/// Undirected edges between vertex ids.
	pub edges: Vec<(&'static str, &'static str)>,
}

/// The five-vertex cycle with one chord.
pub fn graph_fixture() -> GraphFixture {
	GraphFixture {
		vertices: vec!["A", "B", "C", "D", "E"],
		edges: vec![
			("A", "B"),
			("B", "C"),
			("C", "D"),
			("D", "E"),
			("E", "A"),
			("A", "C"),
		],
	}
}

/// Render state for whichever structure is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisualizationState {
	/// Editable sequence.
	Linear(LinearState),
	/// Read-only hierarchy.
	Tree(TreeNode),
	/// Read-only vertex/edge set.
	Graph(GraphFixture),
}

impl VisualizationState {
	/// Default state for a freshly mounted visualizer.
	pub fn fresh(kind: StructureKind) -> Self {
		let linear = |kind| VisualizationState::Linear(LinearState::seeded(kind));
		match kind {
			StructureKind::Array => linear(LinearKind::Array),
			StructureKind::Stack => linear(LinearKind::Stack),
			StructureKind::Queue => linear(LinearKind::Queue),
			StructureKind::LinkedList => linear(LinearKind::LinkedList),
			StructureKind::Tree => VisualizationState::Tree(tree_fixture()),
			StructureKind::Graph => VisualizationState::Graph(graph_fixture()),
		}
	}

	/// Mutable access to the sequence, if this kind has one.
	pub fn linear_mut(&mut self) -> Option<&mut LinearState> {
		match self {
			VisualizationState::Linear(state) => Some(state),
			_ => None,
		}
	}

	/// The sequence, if this kind has one.
	pub fn linear(&self) -> Option<&LinearState> {
		match self {
			VisualizationState::Linear(state) => Some(state),
			_ => None,
		}
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;

	/// Replays a fixed list of values, cycling when exhausted.
	pub(crate) struct ScriptedValues {
		values: Vec<i64>,
		next: usize,
	}

	impl ScriptedValues {
		pub(crate) fn new(values: &[i64]) -> Self {
			Self {
				values: values.to_vec(),
				next: 0,
			}
		}
	}

	impl ValueSource for ScriptedValues {
		fn next_value(&mut self) -> i64 {
			let value = self.values[self.next % self.values.len()];
			self.next += 1;
			value
		}
	}

	const LINEAR: [LinearKind; 4] = [
		LinearKind::Array,
		LinearKind::Stack,
		LinearKind::Queue,
		LinearKind::LinkedList,
	];

	#[test]
	fn seeded_length_matches_seed() {
		for kind in LINEAR {
			assert_eq!(LinearState::seeded(kind).len(), kind.seed().len());
		}
	}

	#[test]
	fn push_then_pop_restores_end_removal_kinds() {
		for kind in [LinearKind::Array, LinearKind::Stack, LinearKind::LinkedList] {
			let before = LinearState::seeded(kind);
			let mut state = before.clone();
			state.push(42);
			assert_eq!(state.pop(), Some(42));
			assert_eq!(state, before);
		}
	}

	#[test]
	fn queue_pushes_rear_and_pops_front() {
		let mut state = LinearState::with_elements(LinearKind::Queue, vec![1, 2]);
		state.push(3);
		state.push(4);
		assert_eq!(state.pop(), Some(1));
		assert_eq!(state.elements(), &[2, 3, 4]);
	}

	#[test]
	fn pop_on_empty_is_a_no_op() {
		for kind in LINEAR {
			let mut state = LinearState::with_elements(kind, Vec::new());
			assert_eq!(state.pop(), None);
			assert!(state.is_empty());
			assert_eq!(state.pop(), None);
			assert_eq!(state.len(), 0);
		}
	}

	#[test]
	fn array_scenario() {
		let mut state = LinearState::seeded(LinearKind::Array);
		assert_eq!(state.elements(), &[10, 20, 30, 40, 50]);
		state.push(7);
		assert_eq!(state.elements(), &[10, 20, 30, 40, 50, 7]);
		state.pop();
		assert_eq!(state.elements(), &[10, 20, 30, 40, 50]);
	}

	#[test]
	fn queue_scenario() {
		let mut state = LinearState::seeded(LinearKind::Queue);
		state.push(99);
		assert_eq!(state.elements(), &[10, 20, 30, 99]);
		assert_eq!(state.pop(), Some(10));
		assert_eq!(state.elements(), &[20, 30, 99]);
	}

	#[test]
	fn stack_displays_top_first() {
		let mut state = LinearState::seeded(LinearKind::Stack);
		state.push(5);
		assert_eq!(state.display_order(), vec![5, 30, 20, 10]);
		assert_eq!(
			state.indexed_display_order(),
			vec![(3, 5), (2, 30), (1, 20), (0, 10)]
		);
		let queue = LinearState::seeded(LinearKind::Queue);
		assert_eq!(queue.display_order(), queue.elements());
		assert_eq!(
			queue.indexed_display_order(),
			vec![(0, 10), (1, 20), (2, 30)]
		);
	}

	#[test]
	fn generated_push_uses_injected_source() {
		let mut source = ScriptedValues::new(&[3, 8]);
		let mut state = LinearState::seeded(LinearKind::LinkedList);
		assert_eq!(state.push_generated(&mut source), 3);
		assert_eq!(state.push_generated(&mut source), 8);
		assert_eq!(state.elements(), &[10, 20, 30, 3, 8]);
	}

	#[test]
	fn random_values_stay_in_range() {
		let mut source = RandomValues::seeded(7);
		for _ in 0..1_000 {
			let value = source.next_value();
			assert!((0..DEMO_VALUE_CEILING).contains(&value));
		}
	}

	#[test]
	fn fresh_state_matches_kind() {
		assert!(VisualizationState::fresh(StructureKind::Tree).linear().is_none());
		assert_eq!(
			VisualizationState::fresh(StructureKind::Graph),
			VisualizationState::Graph(graph_fixture())
		);
		for kind in LINEAR {
			let state = VisualizationState::fresh(kind.structure_kind());
			assert_eq!(state.linear().map(LinearState::kind), Some(kind));
		}
		assert_eq!(tree_fixture().size(), 7);
	}
}
