//! Compiled-in catalog of data structure descriptors.

use std::fmt;

use crate::error::RegistryError;

/// Broad family a structure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
	/// Elements form a single sequence.
	Linear,
	/// Elements can relate to many others.
	NonLinear,
}

impl Category {
	/// Label used for badges and sidebar headings.
	pub fn label(self) -> &'static str {
		match self {
			Category::Linear => "linear",
			Category::NonLinear => "non-linear",
		}
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// One variant per visualizer the app knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureKind {
	/// Indexed contiguous sequence.
	Array,
	/// LIFO sequence.
	Stack,
	/// FIFO sequence.
	Queue,
	/// Singly linked chain of nodes.
	LinkedList,
	/// Fixed binary hierarchy.
	Tree,
	/// Fixed vertex/edge set.
	Graph,
}

impl StructureKind {
	/// Every kind, in catalog order.
	pub const ALL: [StructureKind; 6] = [
		StructureKind::Array,
		StructureKind::Stack,
		StructureKind::Queue,
		StructureKind::LinkedList,
		StructureKind::Tree,
		StructureKind::Graph,
	];

	/// Stable slug used as the descriptor id.
	pub fn id(self) -> &'static str {
		match self {
			StructureKind::Array => "array",
			StructureKind::Stack => "stack",
			StructureKind::Queue => "queue",
			StructureKind::LinkedList => "linked-list",
			StructureKind::Tree => "tree",
			StructureKind::Graph => "graph",
		}
	}

	/// Inverse of [`StructureKind::id`].
	pub fn from_id(id: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.id() == id)
	}
}

/// Authored asymptotic costs, shown verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complexity {
	/// Cost of reaching an element by position.
	pub access: &'static str,
	/// Cost of finding an element by value.
	pub search: &'static str,
	/// Cost of adding an element.
	pub insertion: &'static str,
	/// Cost of removing an element.
	pub deletion: &'static str,
}

impl Complexity {
	/// `(label, value)` pairs in display order.
	pub fn entries(&self) -> [(&'static str, &'static str); 4] {
		[
			("Access", self.access),
			("Search", self.search),
			("Insertion", self.insertion),
			("Deletion", self.deletion),
		]
	}
}

/// Static metadata describing one structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureDescriptor {
	/// Stable slug, unique within the catalog.
	pub id: &'static str,
	/// Visualizer that renders this structure.
	pub kind: StructureKind,
	/// Display label.
	pub name: &'static str,
	/// Linear or non-linear.
	pub category: Category,
	/// Prose definition.
	pub description: &'static str,
	/// Short facts, in display order.
	pub properties: &'static [&'static str],
	/// Authored complexity table.
	pub complexity: Complexity,
}

static CATALOG: [StructureDescriptor; 6] = [
	StructureDescriptor {
		id: "array",
		kind: StructureKind::Array,
		name: "Array",
		category: Category::Linear,
		description: "A collection of elements identified by index or key. Elements are stored in contiguous memory locations.",
		properties: &["Fixed size (usually)", "Fast access by index", "Contiguous memory"],
		complexity: Complexity {
			access: "O(1)",
			search: "O(n)",
			insertion: "O(n)",
			deletion: "O(n)",
		},
	},
	StructureDescriptor {
		id: "stack",
		kind: StructureKind::Stack,
		name: "Stack",
		category: Category::Linear,
		description: "A collection of elements that follows the LIFO (Last-In-First-Out) principle.",
		properties: &["Push/Pop operations", "Top element access", "LIFO"],
		complexity: Complexity {
			access: "O(n)",
			search: "O(n)",
			insertion: "O(1)",
			deletion: "O(1)",
		},
	},
	StructureDescriptor {
		id: "queue",
		kind: StructureKind::Queue,
		name: "Queue",
		category: Category::Linear,
		description: "A collection of elements that follows the FIFO (First-In-First-Out) principle.",
		properties: &["Enqueue/Dequeue operations", "Front/Rear access", "FIFO"],
		complexity: Complexity {
			access: "O(n)",
			search: "O(n)",
			insertion: "O(1)",
			deletion: "O(1)",
		},
	},
	StructureDescriptor {
		id: "linked-list",
		kind: StructureKind::LinkedList,
		name: "Linked List",
		category: Category::Linear,
		description: "A linear collection of data elements called nodes, where each node points to the next.",
		properties: &["Dynamic size", "Efficient insertion/deletion", "Non-contiguous memory"],
		complexity: Complexity {
			access: "O(n)",
			search: "O(n)",
			insertion: "O(1)",
			deletion: "O(1)",
		},
	},
	StructureDescriptor {
		id: "tree",
		kind: StructureKind::Tree,
		name: "Tree",
		category: Category::NonLinear,
		description: "A hierarchical structure with a root value and subtrees of children with a parent node.",
		properties: &["Hierarchical", "Root node", "Parent-Child relationship"],
		complexity: Complexity {
			access: "O(log n)",
			search: "O(log n)",
			insertion: "O(log n)",
			deletion: "O(log n)",
		},
	},
	StructureDescriptor {
		id: "graph",
		kind: StructureKind::Graph,
		name: "Graph",
		category: Category::NonLinear,
		description: "A set of vertices (nodes) and edges that connect pairs of vertices.",
		properties: &["Vertices and Edges", "Directed or Undirected", "Weighted or Unweighted"],
		complexity: Complexity {
			access: "N/A",
			search: "O(V + E)",
			insertion: "O(1)",
			deletion: "O(1)",
		},
	},
];

/// All descriptors in catalog order.
pub fn list() -> &'static [StructureDescriptor] {
	&CATALOG
}

/// Looks up a descriptor by its slug.
pub fn get(id: &str) -> Result<&'static StructureDescriptor, RegistryError> {
	CATALOG
		.iter()
		.find(|desc| desc.id == id)
		.ok_or_else(|| RegistryError::NotFound(id.to_owned()))
}

/// Looks up the descriptor rendered by `kind`. Every kind is catalogued.
pub fn descriptor(kind: StructureKind) -> &'static StructureDescriptor {
	// CATALOG is declared in StructureKind::ALL order
	&CATALOG[kind as usize]
}

/// Descriptors of one category, in catalog order.
pub fn by_category(category: Category) -> impl Iterator<Item = &'static StructureDescriptor> {
	CATALOG.iter().filter(move |desc| desc.category == category)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn get_round_trips_every_listed_id() {
		for desc in list() {
			assert_eq!(get(desc.id).unwrap().id, desc.id);
		}
	}

	#[test]
	fn unknown_id_is_not_found() {
		assert_eq!(
			get("heap"),
			Err(RegistryError::NotFound("heap".to_owned()))
		);
	}

	#[test]
	fn descriptor_matches_kind_for_every_kind() {
		for kind in StructureKind::ALL {
			let desc = descriptor(kind);
			assert_eq!(desc.kind, kind);
			assert_eq!(desc.id, kind.id());
			assert_eq!(StructureKind::from_id(desc.id), Some(kind));
		}
		assert_eq!(list().len(), StructureKind::ALL.len());
	}

	#[test]
	fn category_partitions_preserve_order_and_cover_catalog() {
		let linear: Vec<_> = by_category(Category::Linear).map(|d| d.id).collect();
		let non_linear: Vec<_> = by_category(Category::NonLinear).map(|d| d.id).collect();
		assert_eq!(linear, ["array", "stack", "queue", "linked-list"]);
		assert_eq!(non_linear, ["tree", "graph"]);

		let positions = |ids: &[&str]| -> Vec<usize> {
			ids.iter()
				.map(|id| list().iter().position(|d| d.id == *id).unwrap())
				.collect()
		};
		assert!(positions(&linear).is_sorted());
		assert!(positions(&non_linear).is_sorted());

		for desc in list() {
			let hits = linear.contains(&desc.id) as usize + non_linear.contains(&desc.id) as usize;
			assert_eq!(hits, 1, "{} must sit in exactly one partition", desc.id);
		}
	}

	#[test]
	fn tree_search_is_logarithmic() {
		assert_eq!(get("tree").unwrap().complexity.search, "O(log n)");
	}

	#[test]
	fn ids_are_unique() {
		let mut ids: Vec<_> = list().iter().map(|d| d.id).collect();
		ids.sort_unstable();
		ids.dedup();
		assert_eq!(ids.len(), list().len());
	}
}
