use log::debug;

use super::config::SliderConfig;
use super::markup::{self, Element};
use super::region::OutputRegion;
use super::types::NodeRecord;

const IMAGE_ALT: &str = "Stuff";
const IMAGE_STYLE: &str = "width: 40%; height: 40%";
const LINK_CLASS: &str = "iframe";
const CONNECTIONS_HEADING: &str = "Connections:";

/// Formats node records into the slider fragment.
#[derive(Clone, Debug, Default)]
pub struct MetadataRenderer {
	config: SliderConfig,
}

impl MetadataRenderer {
	/// A renderer linking into `config.wiki_base`.
	pub fn new(config: SliderConfig) -> Self {
		Self { config }
	}

	/// Active settings.
	pub fn config(&self) -> &SliderConfig {
		&self.config
	}

	/// Image paragraph, title heading, connections heading, then one paragraph per
	/// connection in input order.
	pub fn markup(&self, node: &NodeRecord) -> Vec<Element> {
		let image = Element::new("p").attr("align", "center").child(
			Element::new("img")
				.attr("src", node.link_image.as_str())
				.attr("alt", IMAGE_ALT)
				.attr("style", IMAGE_STYLE),
		);
		let title = Element::new("h1").child(self.wiki_link(&node.link, &node.label));
		let heading = Element::new("h2").text(CONNECTIONS_HEADING);

		let mut out = Vec::with_capacity(3 + node.connection_labels.len());
		out.extend([image, title, heading]);
		out.extend(node.connections().map(|(label, link)| {
			Element::new("p")
				.attr("align", "center")
				.child(self.wiki_link(link, label))
		}));
		out
	}

	/// The fragment serialized to HTML.
	pub fn to_html(&self, node: &NodeRecord) -> String {
		markup::to_html(&self.markup(node))
	}

	/// Replaces `region`'s content with the fragment for `node`.
	pub fn render<R: OutputRegion + ?Sized>(&self, node: &NodeRecord, region: &mut R) {
		debug!(
			"Rendering slider for {:?} ({} connections)",
			node.label,
			node.connection_labels.len()
		);
		region.replace_content(&self.to_html(node));
	}

	/// Renders the selected node, or empties `region` when nothing is selected.
	pub fn render_selection<R: OutputRegion + ?Sized>(
		&self,
		node: Option<&NodeRecord>,
		region: &mut R,
	) {
		match node {
			Some(node) => self.render(node, region),
			None => region.replace_content(""),
		}
	}

	fn wiki_link(&self, link: &str, label: &str) -> Element {
		Element::new("a")
			.attr("class", LINK_CLASS)
			.attr("href", self.config.wiki_url(link))
			.text(label)
	}
}
