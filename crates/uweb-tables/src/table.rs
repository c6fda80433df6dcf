//! Table definitions and per-request table instances

use crate::attr::Attributes;
use crate::column::Column;
use crate::components::{SimpleTableRenderer, TableRenderer};
use crate::error::Result;
use crate::pagination::{self, Pagination};
use crate::request::RequestData;
use crate::sorting::SortDirection;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Ordered column registrations plus the renderer used for them
///
/// Built once and shared across requests.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use uweb_tables::column::{LinkColumn, PlainColumn};
/// use uweb_tables::table::{Table, TableDefinition};
///
/// let definition = TableDefinition::builder()
///     .column(PlainColumn::new("ID", "ID").sortable(true))
///     .column(LinkColumn::new("Client", "client.name", "/client/{client.ID}"))
///     .build();
///
/// let rows = vec![json!({"ID": 1, "client": {"ID": 7, "name": "Acme"}})];
/// let html = Table::new(&definition, &rows).render().unwrap();
/// assert!(html.contains(r#"<a href="/client/7">Acme</a>"#));
/// ```
pub struct TableDefinition {
	columns: Vec<Box<dyn Column>>,
	renderer: Arc<dyn TableRenderer>,
}

impl TableDefinition {
	/// Starts a new definition
	pub fn builder() -> TableDefinitionBuilder {
		TableDefinitionBuilder::default()
	}

	/// Enabled columns in registration order
	pub fn columns(&self) -> impl Iterator<Item = &dyn Column> {
		self.all_columns().filter(|column| column.enabled())
	}

	/// All registered columns, including disabled ones
	pub fn all_columns(&self) -> impl Iterator<Item = &dyn Column> {
		self.columns.iter().map(|column| column.as_ref())
	}

	/// The renderer used by [`Table::render`]
	pub fn renderer(&self) -> &dyn TableRenderer {
		self.renderer.as_ref()
	}
}

impl fmt::Debug for TableDefinition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TableDefinition")
			.field("columns", &self.columns)
			.finish_non_exhaustive()
	}
}

/// Builder for [`TableDefinition`]
#[derive(Default)]
pub struct TableDefinitionBuilder {
	columns: Vec<Box<dyn Column>>,
	renderer: Option<Arc<dyn TableRenderer>>,
}

impl TableDefinitionBuilder {
	/// Registers a column; registration order is render order
	pub fn column<C: Column + 'static>(mut self, column: C) -> Self {
		self.columns.push(Box::new(column));
		self
	}

	/// Sets the renderer; defaults to [`SimpleTableRenderer`]
	pub fn renderer<R: TableRenderer + 'static>(mut self, renderer: R) -> Self {
		self.renderer = Some(Arc::new(renderer));
		self
	}

	/// Finishes the definition
	pub fn build(self) -> TableDefinition {
		TableDefinition {
			columns: self.columns,
			renderer: self
				.renderer
				.unwrap_or_else(|| Arc::new(SimpleTableRenderer::new())),
		}
	}
}

/// A table constructed for a single request
pub struct Table<'a> {
	definition: &'a TableDefinition,
	items: Vec<&'a dyn Attributes>,
	sort_by: Option<String>,
	sort_direction: Option<SortDirection>,
	page: u32,
	total_pages: u32,
	query: Option<String>,
	search_url: Option<String>,
}

impl<'a> Table<'a> {
	/// Creates a table over a slice of rows
	pub fn new<R: Attributes>(definition: &'a TableDefinition, items: &'a [R]) -> Self {
		Self::from_items(
			definition,
			items.iter().map(|item| item as &dyn Attributes).collect(),
		)
	}

	/// Creates a table over already type-erased rows
	pub fn from_items(definition: &'a TableDefinition, items: Vec<&'a dyn Attributes>) -> Self {
		Self {
			definition,
			items,
			sort_by: None,
			sort_direction: None,
			page: 1,
			total_pages: 0,
			query: None,
			search_url: None,
		}
	}

	/// Creates a table configured from the request's `sort_by`,
	/// `sort_direction`, `page` and `query` parameters
	pub fn from_request<R: Attributes>(
		definition: &'a TableDefinition,
		items: &'a [R],
		request: &dyn RequestData,
		total_pages: u32,
	) -> Self {
		let sort_by = request
			.get_first("sort_by")
			.filter(|value| !value.is_empty())
			.map(str::to_string);
		let sort_direction = request
			.get_first("sort_direction")
			.and_then(SortDirection::parse);
		let query = request
			.get_first("query")
			.filter(|value| !value.is_empty())
			.map(str::to_string);

		let table = Self::new(definition, items)
			.sort(sort_by, sort_direction)
			.page(pagination::current_page(request))
			.total_pages(total_pages);
		match query {
			Some(query) => table.query(query),
			None => table,
		}
	}

	/// Sets the sort column and direction
	///
	/// A sort column without a direction sorts ascending.
	pub fn sort(mut self, sort_by: Option<String>, sort_direction: Option<SortDirection>) -> Self {
		self.sort_direction = match (&sort_by, sort_direction) {
			(Some(column), None) => {
				warn!(sort_by = %column, "no sort direction given, defaulting to ASC");
				Some(SortDirection::Ascending)
			}
			(_, direction) => direction,
		};
		self.sort_by = sort_by;
		self
	}

	/// Sets the current page; `0` is treated as `1`
	pub fn page(mut self, page: u32) -> Self {
		self.page = page.max(1);
		self
	}

	/// Sets the total number of pages
	pub fn total_pages(mut self, total_pages: u32) -> Self {
		self.total_pages = total_pages;
		self
	}

	/// Sets the current search query
	pub fn query(mut self, query: impl Into<String>) -> Self {
		self.query = Some(query.into());
		self
	}

	/// Sets the URL the search form submits to
	pub fn search_url(mut self, search_url: impl Into<String>) -> Self {
		self.search_url = Some(search_url.into());
		self
	}

	/// The definition this table renders
	pub fn definition(&self) -> &TableDefinition {
		self.definition
	}

	/// Enabled columns in render order
	pub fn columns(&self) -> impl Iterator<Item = &dyn Column> {
		self.definition.columns()
	}

	/// The rows
	pub fn items(&self) -> &[&'a dyn Attributes] {
		&self.items
	}

	/// The column currently sorted on
	pub fn sort_by(&self) -> Option<&str> {
		self.sort_by.as_deref()
	}

	/// The current sort direction
	pub fn sort_direction(&self) -> Option<SortDirection> {
		self.sort_direction
	}

	/// The current page
	pub fn current_page(&self) -> u32 {
		self.page
	}

	/// The current search query
	pub fn search_query(&self) -> Option<&str> {
		self.query.as_deref()
	}

	/// The search form target; the current path when unset
	pub fn search_target(&self) -> &str {
		self.search_url.as_deref().unwrap_or("")
	}

	/// Pagination state for this table
	pub fn pagination(&self) -> Pagination {
		Pagination::new(self.page, self.total_pages)
	}

	/// Query string for a header link of a sortable column
	///
	/// The page resets to 1. The currently sorted column flips its
	/// direction, any other column starts ascending. The search query is
	/// kept.
	pub fn sort_link(&self, sort_key: &str) -> Result<String> {
		let direction = match (self.sort_by(), self.sort_direction) {
			(Some(current), Some(direction)) if current == sort_key => direction.toggle(),
			_ => SortDirection::Ascending,
		};
		let mut params = vec![
			("page", "1".to_string()),
			("sort_by", sort_key.to_string()),
			("sort_direction", direction.to_string()),
		];
		if let Some(query) = &self.query {
			params.push(("query", query.clone()));
		}
		Ok(format!("?{}", serde_urlencoded::to_string(params)?))
	}

	/// Query string for a pagination link, keeping sort and search
	pub fn page_link(&self, page: u32) -> Result<String> {
		let mut params = vec![("page", page.to_string())];
		if let (Some(sort_by), Some(direction)) = (&self.sort_by, self.sort_direction) {
			params.push(("sort_by", sort_by.clone()));
			params.push(("sort_direction", direction.to_string()));
		}
		if let Some(query) = &self.query {
			params.push(("query", query.clone()));
		}
		Ok(format!("?{}", serde_urlencoded::to_string(params)?))
	}

	/// Renders the table with the definition's renderer
	pub fn render(&self) -> Result<String> {
		self.definition.renderer().render(self)
	}

	/// Renders the table with another renderer
	pub fn render_with(&self, renderer: &dyn TableRenderer) -> Result<String> {
		renderer.render(self)
	}
}

impl fmt::Debug for Table<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Table")
			.field("items", &self.items.len())
			.field("sort_by", &self.sort_by)
			.field("sort_direction", &self.sort_direction)
			.field("page", &self.page)
			.field("total_pages", &self.total_pages)
			.field("query", &self.query)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::column::PlainColumn;
	use rstest::{fixture, rstest};
	use serde_json::{Value, json};
	use std::collections::HashMap;

	#[fixture]
	fn definition() -> TableDefinition {
		TableDefinition::builder()
			.column(PlainColumn::new("ID", "ID").sortable(true))
			.column(PlainColumn::new("Name", "name").sortable(true))
			.column(PlainColumn::new("Secret", "secret").enabled(false))
			.build()
	}

	#[fixture]
	fn rows() -> Vec<Value> {
		vec![json!({"ID": 1, "name": "one", "secret": "x"})]
	}

	#[rstest]
	fn test_columns_skip_disabled(definition: TableDefinition) {
		let names: Vec<_> = definition.columns().map(|c| c.name().to_string()).collect();
		assert_eq!(names, vec!["ID", "Name"]);
		assert_eq!(definition.all_columns().count(), 3);
	}

	#[rstest]
	fn test_sort_without_direction_defaults_to_asc(definition: TableDefinition, rows: Vec<Value>) {
		let table = Table::new(&definition, &rows).sort(Some("name".into()), None);
		assert_eq!(table.sort_direction(), Some(SortDirection::Ascending));
	}

	#[rstest]
	fn test_sort_link_toggles_current_column(definition: TableDefinition, rows: Vec<Value>) {
		let table = Table::new(&definition, &rows)
			.sort(Some("name".into()), Some(SortDirection::Descending))
			.page(3)
			.query("acme");
		assert_eq!(
			table.sort_link("name").unwrap(),
			"?page=1&sort_by=name&sort_direction=ASC&query=acme"
		);
		assert_eq!(
			table.sort_link("ID").unwrap(),
			"?page=1&sort_by=ID&sort_direction=ASC&query=acme"
		);
	}

	#[rstest]
	fn test_page_link_keeps_sort_and_query(definition: TableDefinition, rows: Vec<Value>) {
		let table = Table::new(&definition, &rows)
			.sort(Some("name".into()), Some(SortDirection::Descending))
			.query("a b");
		assert_eq!(
			table.page_link(2).unwrap(),
			"?page=2&sort_by=name&sort_direction=DESC&query=a+b"
		);
	}

	#[rstest]
	fn test_from_request(definition: TableDefinition, rows: Vec<Value>) {
		let request: HashMap<String, String> = [
			("sort_by", "name"),
			("sort_direction", "desc"),
			("page", "2"),
			("query", "foo"),
		]
		.into_iter()
		.map(|(k, v)| (k.to_string(), v.to_string()))
		.collect();

		let table = Table::from_request(&definition, &rows, &request, 5);
		assert_eq!(table.sort_by(), Some("name"));
		assert_eq!(table.sort_direction(), Some(SortDirection::Descending));
		assert_eq!(table.current_page(), 2);
		assert_eq!(table.search_query(), Some("foo"));
		assert_eq!(table.pagination().total_pages(), 5);
	}
}
