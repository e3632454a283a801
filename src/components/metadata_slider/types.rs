use serde::{Deserialize, Serialize};

/// Metadata for one entity in the graph, as it appears in the metadata file.
///
/// `connection_labels` and `connection_links` are parallel: position `i` in one
/// describes the same related node as position `i` in the other.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeRecord {
	/// Display name.
	pub label: String,
	/// Path segment of the node's wiki page.
	pub link: String,
	/// URL or path of the node's image.
	pub link_image: String,
	/// Display names of related nodes.
	#[serde(rename = "connection_label")]
	pub connection_labels: Vec<String>,
	/// Wiki path segments of related nodes.
	#[serde(rename = "connection_link")]
	pub connection_links: Vec<String>,
}

impl NodeRecord {
	/// A record with no connections.
	pub fn new(
		label: impl Into<String>,
		link: impl Into<String>,
		link_image: impl Into<String>,
	) -> Self {
		Self {
			label: label.into(),
			link: link.into(),
			link_image: link_image.into(),
			..Self::default()
		}
	}

	/// Appends a connection to both parallel sequences.
	pub fn with_connection(mut self, label: impl Into<String>, link: impl Into<String>) -> Self {
		self.connection_labels.push(label.into());
		self.connection_links.push(link.into());
		self
	}

	/// `(label, link)` pairs in input order.
	///
	/// Iterates to the length of `connection_labels`; a label without a matching
	/// link pairs with `""`, and surplus links are ignored.
	pub fn connections(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
		self.connection_labels.iter().enumerate().map(|(i, label)| {
			let link = self.connection_links.get(i).map(String::as_str).unwrap_or("");
			(label.as_str(), link)
		})
	}
}
