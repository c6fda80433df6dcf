//! Plain column type implementation

use crate::attr::{Attributes, display_value};
use crate::column::{Column, ColumnAttr};
use crate::element::Element;
use crate::error::Result;

/// Column that renders the resolved value as cell text
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use uweb_tables::column::{Column, PlainColumn};
///
/// let column = PlainColumn::new("Name", "client.name").sortable(true);
/// let cell = column.render(&json!({"client": {"name": "Acme"}})).unwrap();
/// assert_eq!(cell.render(), "<td>Acme</td>");
/// ```
#[derive(Debug, Clone)]
pub struct PlainColumn {
	name: String,
	attr: ColumnAttr,
	sortable: bool,
	enabled: bool,
}

impl PlainColumn {
	/// Creates a new column
	///
	/// # Arguments
	///
	/// * `name` - The header label
	/// * `attr` - Dotted attribute path or constant value
	pub fn new(name: impl Into<String>, attr: impl Into<ColumnAttr>) -> Self {
		Self {
			name: name.into(),
			attr: attr.into(),
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
}

impl Column for PlainColumn {
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
		let value = self.attr.resolve(item)?;
		let text = value.as_ref().map(display_value).unwrap_or_default();
		Ok(Element::new("td").value(text))
	}
}
