use web_sys::{Document, Element};

use super::error::SliderError;

/// A mutable rendering target the slider writes into.
pub trait OutputRegion {
	/// Replaces the whole content of the region.
	fn replace_content(&mut self, html: &str);

	/// Current content.
	fn content(&self) -> String;
}

/// A region backed by a DOM element's `innerHTML`.
#[derive(Clone, Debug)]
pub struct DomRegion {
	element: Element,
}

impl DomRegion {
	/// Wraps an element the caller already holds.
	pub fn new(element: Element) -> Self {
		Self { element }
	}

	/// Looks the region up by id in `document`.
	pub fn by_id(document: &Document, id: &str) -> Result<Self, SliderError> {
		document
			.get_element_by_id(id)
			.map(Self::new)
			.ok_or_else(|| SliderError::RegionNotFound(id.to_string()))
	}

	/// Looks the region up by id in the current window's document.
	pub fn from_window(id: &str) -> Result<Self, SliderError> {
		let window = web_sys::window().ok_or(SliderError::NoWindow)?;
		let document = window.document().ok_or(SliderError::NoDocument)?;
		Self::by_id(&document, id)
	}
}

impl OutputRegion for DomRegion {
	fn replace_content(&mut self, html: &str) {
		self.element.set_inner_html(html);
	}

	fn content(&self) -> String {
		self.element.inner_html()
	}
}

/// A region held in memory, for hosts without a DOM.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryRegion {
	html: String,
	writes: usize,
}

impl MemoryRegion {
	/// An empty region.
	pub fn new() -> Self {
		Self::default()
	}

	/// A region pre-filled with `html`.
	pub fn with_content(html: impl Into<String>) -> Self {
		Self {
			html: html.into(),
			writes: 0,
		}
	}

	/// Number of `replace_content` calls so far.
	pub fn writes(&self) -> usize {
		self.writes
	}
}

impl OutputRegion for MemoryRegion {
	fn replace_content(&mut self, html: &str) {
		self.html.clear();
		self.html.push_str(html);
		self.writes += 1;
	}

	fn content(&self) -> String {
		self.html.clone()
	}
}
