use crate::model::controller::GraphFixture;

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	pub source: String,
	pub target: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

impl From<&GraphFixture> for GraphData {
	fn from(fixture: &GraphFixture) -> Self {
		Self {
			nodes: fixture
				.vertices
				.iter()
				.map(|id| GraphNode {
					id: (*id).to_owned(),
					label: (*id).to_owned(),
				})
				.collect(),
			links: fixture
				.edges
				.iter()
				.map(|(source, target)| GraphLink {
					source: (*source).to_owned(),
					target: (*target).to_owned(),
				})
				.collect(),
		}
	}
}
