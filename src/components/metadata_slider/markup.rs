//! A minimal element tree for the slider's HTML fragment.
//!
//! Text and attribute values are escaped on serialization, and every non-void
//! element is closed.

use std::fmt;

/// Elements serialized without children or a closing tag.
const VOID_TAGS: &[&str] = &["img", "br", "hr"];

/// A node in the markup tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Markup {
	/// A nested element.
	Element(Element),
	/// Escaped character data.
	Text(String),
}

/// A single HTML element with ordered attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
	/// Tag name, e.g. `"p"`.
	pub tag: &'static str,
	/// Attributes in output order.
	pub attrs: Vec<(&'static str, String)>,
	/// Child nodes in output order.
	pub children: Vec<Markup>,
}

impl Element {
	/// An element with no attributes or children.
	pub fn new(tag: &'static str) -> Self {
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Adds an attribute.
	pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
		self.attrs.push((name, value.into()));
		self
	}

	/// Adds a child element.
	pub fn child(mut self, child: Element) -> Self {
		self.children.push(Markup::Element(child));
		self
	}

	/// Adds a text child.
	pub fn text(mut self, text: impl Into<String>) -> Self {
		self.children.push(Markup::Text(text.into()));
		self
	}

	/// Value of the first attribute called `name`.
	pub fn get_attr(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| *n == name)
			.map(|(_, v)| v.as_str())
	}

	/// Child elements, skipping text.
	pub fn elements(&self) -> impl Iterator<Item = &Element> {
		self.children.iter().filter_map(|c| match c {
			Markup::Element(e) => Some(e),
			Markup::Text(_) => None,
		})
	}

	/// Concatenated text of this element and its descendants, unescaped.
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		self.collect_text(&mut out);
		out
	}

	fn collect_text(&self, out: &mut String) {
		for child in &self.children {
			match child {
				Markup::Element(e) => e.collect_text(out),
				Markup::Text(t) => out.push_str(t),
			}
		}
	}

	fn is_void(&self) -> bool {
		VOID_TAGS.contains(&self.tag)
	}
}

impl fmt::Display for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "<{}", self.tag)?;
		for (name, value) in &self.attrs {
			write!(f, " {}=\"{}\"", name, htmlize::escape_attribute(value.as_str()))?;
		}
		f.write_str(">")?;
		if self.is_void() {
			return Ok(());
		}
		for child in &self.children {
			write!(f, "{}", child)?;
		}
		write!(f, "</{}>", self.tag)
	}
}

impl fmt::Display for Markup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Markup::Element(e) => write!(f, "{}", e),
			Markup::Text(t) => write!(f, "{}", htmlize::escape_text(t.as_str())),
		}
	}
}

/// Serializes a sequence of sibling elements.
pub fn to_html(elements: &[Element]) -> String {
	elements.iter().map(ToString::to_string).collect()
}
