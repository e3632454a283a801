use std::collections::HashSet;

use crate::components::metadata_slider::NodeRecord;

/// Number of color groups cycled through by [`GraphData::from_records`].
const GROUPS: u32 = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub label: Option<String>,
	pub color: Option<String>,
	pub group: Option<u32>,
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

impl GraphData {
	/// One node per record keyed by its wiki `link`, one edge per connected pair
	/// of records. The edge points the way the pair was first seen; a mutual
	/// connection, duplicate records and repeated edges add nothing.
	pub fn from_records(records: &[NodeRecord]) -> Self {
		let mut ids = HashSet::new();
		let mut nodes = Vec::with_capacity(records.len());
		for record in records {
			if !ids.insert(record.link.as_str()) {
				continue;
			}
			nodes.push(GraphNode {
				id: record.link.clone(),
				label: Some(record.label.clone()).filter(|l| !l.is_empty()),
				color: None,
				group: Some(nodes.len() as u32 % GROUPS),
			});
		}

		let mut seen = HashSet::new();
		let mut links = Vec::new();
		for record in records {
			for (_, target) in record.connections() {
				if !ids.contains(target) || target == record.link {
					continue;
				}
				let source = record.link.as_str();
				let pair = if source < target {
					(source, target)
				} else {
					(target, source)
				};
				if seen.insert(pair) {
					links.push(GraphLink {
						source: record.link.clone(),
						target: target.to_string(),
					});
				}
			}
		}

		Self { nodes, links }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builds_edges_between_known_records() {
		let records = vec![
			NodeRecord::new("Harry Potter", "Harry_Potter", "")
				.with_connection("Ron Weasley", "Ron_Weasley")
				.with_connection("Voldemort", "Lord_Voldemort"),
			NodeRecord::new("Ron Weasley", "Ron_Weasley", "")
				.with_connection("Hermione Granger", "Hermione_Granger"),
			NodeRecord::new("Hermione Granger", "Hermione_Granger", ""),
		];

		let data = GraphData::from_records(&records);
		assert_eq!(data.nodes.len(), 3);
		assert_eq!(
			data.links,
			vec![
				GraphLink {
					source: "Harry_Potter".into(),
					target: "Ron_Weasley".into()
				},
				GraphLink {
					source: "Ron_Weasley".into(),
					target: "Hermione_Granger".into()
				},
			]
		);
	}

	#[test]
	fn mutual_connection_yields_one_edge() {
		let records = vec![
			NodeRecord::new("Ron Weasley", "Ron_Weasley", "")
				.with_connection("Harry Potter", "Harry_Potter"),
			NodeRecord::new("Harry Potter", "Harry_Potter", "")
				.with_connection("Ron Weasley", "Ron_Weasley")
				.with_connection("Ron Weasley", "Ron_Weasley"),
		];

		let data = GraphData::from_records(&records);
		assert_eq!(
			data.links,
			vec![GraphLink {
				source: "Ron_Weasley".into(),
				target: "Harry_Potter".into()
			}]
		);
	}

	#[test]
	fn skips_duplicate_records_and_self_links() {
		let records = vec![
			NodeRecord::new("A", "A", "").with_connection("A", "A"),
			NodeRecord::new("A again", "A", ""),
		];

		let data = GraphData::from_records(&records);
		assert_eq!(data.nodes.len(), 1);
		assert_eq!(data.nodes[0].label.as_deref(), Some("A"));
		assert!(data.links.is_empty());
	}
}
