use serde::{Deserialize, Serialize};

/// Wiki the slider links point at.
pub const DEFAULT_WIKI_BASE: &str = "http://harrypotter.wikia.com";

/// Id of the element the slider renders into.
pub const DEFAULT_REGION_ID: &str = "slider";

/// Settings shared by the renderer and the slider component.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
	/// Site root; `/wiki/{link}` is appended to it.
	pub wiki_base: String,
	/// DOM id of the output region.
	pub region_id: String,
}

impl Default for SliderConfig {
	fn default() -> Self {
		Self {
			wiki_base: DEFAULT_WIKI_BASE.into(),
			region_id: DEFAULT_REGION_ID.into(),
		}
	}
}

impl SliderConfig {
	/// Overrides the wiki root.
	pub fn wiki_base(mut self, base: impl Into<String>) -> Self {
		self.wiki_base = base.into();
		self
	}

	/// Overrides the output region id.
	pub fn region_id(mut self, id: impl Into<String>) -> Self {
		self.region_id = id.into();
		self
	}

	/// Full page URL for a wiki path segment.
	pub fn wiki_url(&self, link: &str) -> String {
		format!("{}/wiki/{}", self.wiki_base.trim_end_matches('/'), link)
	}
}
