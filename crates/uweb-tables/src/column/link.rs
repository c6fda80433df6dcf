//! Link column type implementation

use crate::attr::{self, Attributes, display_value};
use crate::column::{Column, ColumnAttr};
use crate::element::Element;
use crate::error::{Result, TableError};

/// Column that renders values as hyperlinks
///
/// The href template can include placeholders like `{ID}` or
/// `{client.ID}`; each placeholder is resolved against the row being
/// rendered. `{{` and `}}` produce literal braces. A template without
/// placeholders is used verbatim.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use uweb_tables::column::{Column, LinkColumn};
///
/// let column = LinkColumn::new("Client", "client.name", "/client/{client.ID}");
/// let row = json!({"client": {"ID": 7, "name": "Acme"}});
/// assert_eq!(
///     column.render(&row).unwrap().render(),
///     r#"<td><a href="/client/7">Acme</a></td>"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct LinkColumn {
	name: String,
	attr: ColumnAttr,
	href: String,
	sortable: bool,
	enabled: bool,
}

impl LinkColumn {
	/// Creates a new link column
	///
	/// # Arguments
	///
	/// * `name` - The header label
	/// * `attr` - Dotted attribute path or constant shown as the link text
	/// * `href` - URL template with placeholders (e.g., "/invoices/{ID}")
	pub fn new(
		name: impl Into<String>,
		attr: impl Into<ColumnAttr>,
		href: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			attr: attr.into(),
			href: href.into(),
			sortable: false,
			enabled: true,
		}
	}

	/// Sets whether this column is sortable
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	/// Sets whether this column is rendered at all
	pub fn enabled(mut self, enabled: bool) -> Self {
		self.enabled = enabled;
		self
	}

	/// Returns the href template
	pub fn href(&self) -> &str {
		&self.href
	}

	/// Fills in the href template for a row
	pub fn url_for(&self, item: &dyn Attributes) -> Result<String> {
		let mut url = String::with_capacity(self.href.len());
		for segment in parse_template(&self.href)? {
			match segment {
				Segment::Literal(text) => url.push_str(&text),
				Segment::Field(path) => {
					let value = attr::resolve(item, path)?;
					let text = value.as_ref().map(display_value).unwrap_or_default();
					url.push_str(&urlencoding::encode(&text));
				}
			}
		}
		Ok(url)
	}
}

impl Column for LinkColumn {
	fn name(&self) -> &str {
		&self.name
	}

	fn attr(&self) -> &ColumnAttr {
		&self.attr
	}

	fn sortable(&self) -> bool {
		self.sortable
	}

	fn enabled(&self) -> bool {
		self.enabled
	}

	fn render(&self, item: &dyn Attributes) -> Result<Element> {
		let url = self.url_for(item)?;
		let value = self.attr.resolve(item)?;
		let text = value.as_ref().map(display_value).unwrap_or_default();
		let link = Element::new("a").attr("href", url).value(text);
		Ok(Element::new("td").child(link))
	}
}

#[derive(Debug, PartialEq)]
enum Segment<'a> {
	Literal(String),
	Field(&'a str),
}

fn parse_template(template: &str) -> Result<Vec<Segment<'_>>> {
	let invalid = |reason: &str| TableError::InvalidHrefTemplate {
		template: template.to_string(),
		reason: reason.to_string(),
	};

	let mut segments = Vec::new();
	let mut literal = String::new();
	let mut rest = template;

	while let Some(c) = rest.chars().next() {
		match c {
			'{' if rest.starts_with("{{") => {
				literal.push('{');
				rest = &rest[2..];
			}
			'}' if rest.starts_with("}}") => {
				literal.push('}');
				rest = &rest[2..];
			}
			'{' => {
				let end = rest.find('}').ok_or_else(|| invalid("unclosed placeholder"))?;
				let field = &rest[1..end];
				if field.is_empty() {
					return Err(invalid("empty placeholder"));
				}
				if field.contains('{') {
					return Err(invalid("nested placeholder"));
				}
				if !literal.is_empty() {
					segments.push(Segment::Literal(std::mem::take(&mut literal)));
				}
				segments.push(Segment::Field(field));
				rest = &rest[end + 1..];
			}
			'}' => return Err(invalid("single '}' encountered")),
			_ => {
				literal.push(c);
				rest = &rest[c.len_utf8()..];
			}
		}
	}

	if !literal.is_empty() {
		segments.push(Segment::Literal(literal));
	}
	Ok(segments)
}
