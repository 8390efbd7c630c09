//! Selection state: which structure is active and its live visualization.

use log::{debug, info};

use super::controller::{LinearState, ValueSource, VisualizationState};
use super::registry::{self, Category, StructureDescriptor, StructureKind};
use crate::error::RegistryError;

const LINEAR_TIP: &str =
	"Linear structures store data sequentially. Each element has a unique predecessor and successor.";
const NON_LINEAR_TIP: &str = "Non-linear structures represent complex relationships where one element can connect to many others.";

/// Owns the active structure and its visualization state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
	active: &'static StructureDescriptor,
	state: VisualizationState,
	epoch: u64,
}

impl Default for Shell {
	fn default() -> Self {
		Self::new(StructureKind::Array)
	}
}

impl Shell {
	/// Starts on `initial` with its seed state.
	pub fn new(initial: StructureKind) -> Self {
		Self {
			active: registry::descriptor(initial),
			state: VisualizationState::fresh(initial),
			epoch: 0,
		}
	}

	/// Starts on the structure registered under `id`.
	pub fn starting_at(id: &str) -> Result<Self, RegistryError> {
		let desc = registry::get(id)?;
		Ok(Self::new(desc.kind))
	}

	/// Descriptor of the active structure.
	pub fn active(&self) -> &'static StructureDescriptor {
		self.active
	}

	/// Slug of the active structure.
	pub fn active_id(&self) -> &'static str {
		self.active.id
	}

	/// Kind of the active structure.
	pub fn active_kind(&self) -> StructureKind {
		self.active.kind
	}

	/// Whether `id` is the active structure.
	pub fn is_active(&self, id: &str) -> bool {
		self.active.id == id
	}

	/// Bumped whenever the visualization state is recreated, so views can
	/// remount on reset as well as on a switch.
	pub fn epoch(&self) -> u64 {
		self.epoch
	}

	/// Live visualization state.
	pub fn state(&self) -> &VisualizationState {
		&self.state
	}

	/// Makes `id` active. Switching structures discards the previous state
	/// and seeds a fresh one; reselecting the active id keeps it.
	pub fn select(&mut self, id: &str) -> Result<(), RegistryError> {
		let desc = registry::get(id)?;
		if desc.id == self.active.id {
			return Ok(());
		}
		info!("switching visualizer {} -> {}", self.active.id, desc.id);
		self.active = desc;
		self.state = VisualizationState::fresh(desc.kind);
		self.epoch += 1;
		Ok(())
	}

	/// Restores the active structure's seed state.
	pub fn reset(&mut self) {
		debug!("resetting {}", self.active.id);
		self.state = VisualizationState::fresh(self.active.kind);
		self.epoch += 1;
	}

	/// Inserts `value` into the active sequence. Returns false for
	/// non-linear structures, which have no insert action.
	pub fn push(&mut self, value: i64) -> bool {
		match self.state.linear_mut() {
			Some(state) => {
				state.push(value);
				true
			}
			None => false,
		}
	}

	/// Inserts a generated value, returning it.
	pub fn push_generated<S: ValueSource + ?Sized>(&mut self, source: &mut S) -> Option<i64> {
		self.state
			.linear_mut()
			.map(|state| state.push_generated(source))
	}

	/// Removes from the active sequence's removal end.
	pub fn pop(&mut self) -> Option<i64> {
		self.state.linear_mut().and_then(LinearState::pop)
	}

	/// Short explanation of the active structure's category.
	pub fn learning_tip(&self) -> &'static str {
		match self.active.category {
			Category::Linear => LINEAR_TIP,
			Category::NonLinear => NON_LINEAR_TIP,
		}
	}

	/// Sidebar sections: heading and entries, in catalog order.
	pub fn sections() -> [(&'static str, Vec<&'static StructureDescriptor>); 2] {
		[
			(
				"Linear Structures",
				registry::by_category(Category::Linear).collect(),
			),
			(
				"Non-Linear Structures",
				registry::by_category(Category::NonLinear).collect(),
			),
		]
	}
}
