//! Column descriptors
//!
//! This module provides the column types a table can be declared with:
//! - [`PlainColumn`]: renders the resolved attribute inside a `<td>`
//! - [`LinkColumn`]: renders the resolved attribute as an anchor whose href
//!   is filled in from the same row

pub mod link;
pub mod plain;

pub use link::LinkColumn;
pub use plain::PlainColumn;

use crate::attr::{self, Attributes};
use crate::element::Element;
use crate::error::Result;
use serde_json::Value;
use std::fmt::Debug;

/// Where a column takes its value from
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnAttr {
	/// A dotted attribute path resolved against every row
	Path(String),
	/// The same value for every row
	Constant(Value),
}

impl ColumnAttr {
	/// Resolves the column value for a row
	pub fn resolve(&self, item: &dyn Attributes) -> Result<Option<Value>> {
		match self {
			ColumnAttr::Path(path) => attr::resolve(item, path),
			ColumnAttr::Constant(value) => Ok(Some(value.clone())),
		}
	}

	/// The attribute path, used as the sort key in header links
	pub fn path(&self) -> Option<&str> {
		match self {
			ColumnAttr::Path(path) => Some(path),
			ColumnAttr::Constant(_) => None,
		}
	}
}

impl From<&str> for ColumnAttr {
	fn from(path: &str) -> Self {
		ColumnAttr::Path(path.to_string())
	}
}

impl From<String> for ColumnAttr {
	fn from(path: String) -> Self {
		ColumnAttr::Path(path)
	}
}

/// Trait for table column definitions
pub trait Column: Debug + Send + Sync {
	/// The header label
	fn name(&self) -> &str;

	/// Where the cell value comes from
	fn attr(&self) -> &ColumnAttr;

	/// Whether the header offers a sort link
	///
	/// Default: false
	fn sortable(&self) -> bool {
		false
	}

	/// Disabled columns are left out of both header and body
	///
	/// Default: true
	fn enabled(&self) -> bool {
		true
	}

	/// The value sent as `sort_by` when this column's header is clicked
	fn sort_key(&self) -> Option<&str> {
		self.attr().path()
	}

	/// Renders the `<td>` cell for a row
	fn render(&self, item: &dyn Attributes) -> Result<Element>;
}
