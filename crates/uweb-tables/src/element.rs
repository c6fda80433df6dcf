//! Minimal HTML element tree
//!
//! Elements are built fresh on every render pass and serialized straight to
//! a string. Text values and attribute values are always escaped; markup
//! produced by the embedded templates is inserted as-is.

use std::borrow::Cow;

/// Escapes HTML special characters in a string.
///
/// Returns a borrowed reference if no escaping is needed.
pub fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

/// A child of an [`Element`]
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
	/// A nested element
	Element(Element),
	/// Already rendered markup, inserted without escaping
	Markup(String),
}

/// An HTML element with an optional text value, attributes and children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
	tag: String,
	value: Option<String>,
	attrs: Vec<(String, String)>,
	children: Vec<Node>,
}

impl Element {
	/// Creates an empty element with the given tag name
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			tag: tag.into(),
			value: None,
			attrs: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Sets the text value rendered before any children
	pub fn value(mut self, value: impl Into<String>) -> Self {
		self.value = Some(value.into());
		self
	}

	/// Adds an attribute; attributes render in insertion order
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Appends a child element
	pub fn child(mut self, child: Element) -> Self {
		self.children.push(Node::Element(child));
		self
	}

	/// Appends several child elements
	pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
		self.children
			.extend(children.into_iter().map(Node::Element));
		self
	}

	/// Appends pre-rendered markup
	pub fn markup(mut self, markup: impl Into<String>) -> Self {
		self.children.push(Node::Markup(markup.into()));
		self
	}

	/// Returns the tag name
	pub fn tag(&self) -> &str {
		&self.tag
	}

	/// Returns the text value, if any
	pub fn text(&self) -> Option<&str> {
		self.value.as_deref()
	}

	/// Returns the value of an attribute
	pub fn get_attr(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value.as_str())
	}

	/// Returns the child nodes
	pub fn child_nodes(&self) -> &[Node] {
		&self.children
	}

	/// Serializes the element tree to HTML
	pub fn render(&self) -> String {
		let mut output = String::new();
		self.render_into(&mut output);
		output
	}

	fn render_into(&self, output: &mut String) {
		output.push('<');
		output.push_str(&self.tag);
		for (name, value) in &self.attrs {
			output.push(' ');
			output.push_str(name);
			output.push_str("=\"");
			output.push_str(&html_escape(value));
			output.push('"');
		}
		output.push('>');

		if let Some(value) = &self.value {
			output.push_str(&html_escape(value));
		}
		for child in &self.children {
			match child {
				Node::Element(element) => element.render_into(output),
				Node::Markup(markup) => output.push_str(markup),
			}
		}

		output.push_str("</");
		output.push_str(&self.tag);
		output.push('>');
	}
}
