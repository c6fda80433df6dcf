//! Renderable table components and the renderers assembled from them
//!
//! A renderer is an ordered [`TableComponents`] list; each component is
//! rendered against the table and the results are concatenated.
//! [`SimpleTableRenderer`] emits only the `<table>`, [`CompleteTableRenderer`]
//! adds a search field before it and a pagination bar after it.

use crate::element::Element;
use crate::error::Result;
use crate::table::Table;
use crate::templates;
use serde::Serialize;

/// A piece of table markup
pub trait Component: Send + Sync {
	/// Renders this component for the given table
	fn render(&self, table: &Table<'_>) -> Result<String>;
}

/// Turns a table into HTML
pub trait TableRenderer: Send + Sync {
	/// Renders the complete markup for the table
	fn render(&self, table: &Table<'_>) -> Result<String>;
}

#[derive(Serialize)]
struct SortableHead<'a> {
	label: &'a str,
	url: String,
	active: bool,
	direction: Option<&'static str>,
}

/// The `<thead>`; sortable columns get a sort link
#[derive(Debug, Clone, Copy, Default)]
pub struct TableHeader;

impl Component for TableHeader {
	fn render(&self, table: &Table<'_>) -> Result<String> {
		let mut row = Element::new("tr");
		for column in table.columns() {
			let sort_key = column.sort_key().filter(|_| column.sortable());
			row = match sort_key {
				Some(key) => {
					let active = table.sort_by() == Some(key);
					let head = SortableHead {
						label: column.name(),
						url: table.sort_link(key)?,
						active,
						direction: table
							.sort_direction()
							.filter(|_| active)
							.map(|direction| direction.as_str()),
					};
					row.markup(templates::render(templates::SORTABLE_HEAD, &head)?)
				}
				None => row.child(Element::new("th").value(column.name())),
			};
		}
		Ok(Element::new("thead").child(row).render())
	}
}

/// The `<tbody>`, one row per item
#[derive(Debug, Clone, Copy, Default)]
pub struct TableBody;

impl Component for TableBody {
	fn render(&self, table: &Table<'_>) -> Result<String> {
		let mut rows = Vec::with_capacity(table.items().len());
		for item in table.items() {
			let cells = table
				.columns()
				.map(|column| column.render(*item))
				.collect::<Result<Vec<_>>>()?;
			rows.push(Element::new("tr").children(cells));
		}
		Ok(Element::new("tbody").children(rows).render())
	}
}

/// A `<table>` element wrapping other components
pub struct HtmlTable {
	children: Vec<Box<dyn Component>>,
}

impl HtmlTable {
	/// An empty `<table>`
	pub fn new() -> Self {
		Self {
			children: Vec::new(),
		}
	}

	/// A `<table>` with a header and a body
	pub fn standard() -> Self {
		Self::new().with(TableHeader).with(TableBody)
	}

	/// Appends a child component
	pub fn with<C: Component + 'static>(mut self, component: C) -> Self {
		self.children.push(Box::new(component));
		self
	}
}

impl Default for HtmlTable {
	fn default() -> Self {
		Self::standard()
	}
}

impl Component for HtmlTable {
	fn render(&self, table: &Table<'_>) -> Result<String> {
		let mut element = Element::new("table");
		for child in &self.children {
			element = element.markup(child.render(table)?);
		}
		Ok(element.render())
	}
}

#[derive(Serialize)]
struct SearchForm<'a> {
	search_url: &'a str,
	query: &'a str,
	sort_by: Option<&'a str>,
	sort_direction: Option<&'static str>,
}

/// A GET form submitting `query`, carrying the current sort along
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchField;

impl Component for SearchField {
	fn render(&self, table: &Table<'_>) -> Result<String> {
		let form = SearchForm {
			search_url: table.search_target(),
			query: table.search_query().unwrap_or_default(),
			sort_by: table.sort_by(),
			sort_direction: table.sort_direction().map(|direction| direction.as_str()),
		};
		templates::render(templates::SEARCH_FIELD, &form)
	}
}

#[derive(Serialize)]
struct PageLink {
	number: u32,
	url: String,
	current: bool,
}

#[derive(Serialize)]
struct PaginationContext {
	previous_url: Option<String>,
	next_url: Option<String>,
	pages: Vec<PageLink>,
}

/// The page navigation bar; renders nothing when there are no pages
#[derive(Debug, Clone, Copy, Default)]
pub struct PaginationBar;

impl Component for PaginationBar {
	fn render(&self, table: &Table<'_>) -> Result<String> {
		let pagination = table.pagination();
		if pagination.total_pages() == 0 {
			return Ok(String::new());
		}

		// Past the end, « leads back to the last page
		let previous_url = if pagination.has_previous() {
			let previous = pagination.previous_page().min(pagination.total_pages());
			Some(table.page_link(previous)?)
		} else {
			None
		};
		let next_url = if pagination.has_next() {
			Some(table.page_link(pagination.next_page())?)
		} else {
			None
		};
		let pages = pagination
			.sliding_range()
			.map(|number| -> Result<PageLink> {
				Ok(PageLink {
					number,
					url: table.page_link(number)?,
					current: number == pagination.current_page(),
				})
			})
			.collect::<Result<Vec<_>>>()?;

		templates::render(
			templates::PAGINATION,
			&PaginationContext {
				previous_url,
				next_url,
				pages,
			},
		)
	}
}

/// An ordered list of components rendered one after another
#[derive(Default)]
pub struct TableComponents {
	components: Vec<Box<dyn Component>>,
}

impl TableComponents {
	/// An empty list
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a component
	pub fn add_component<C: Component + 'static>(&mut self, component: C) {
		self.components.push(Box::new(component));
	}

	/// Appends a component, builder style
	pub fn with<C: Component + 'static>(mut self, component: C) -> Self {
		self.add_component(component);
		self
	}

	/// Number of components
	pub fn len(&self) -> usize {
		self.components.len()
	}

	/// Whether no component was added
	pub fn is_empty(&self) -> bool {
		self.components.is_empty()
	}
}

impl TableRenderer for TableComponents {
	fn render(&self, table: &Table<'_>) -> Result<String> {
		let mut output = String::new();
		for component in &self.components {
			output.push_str(&component.render(table)?);
		}
		Ok(output)
	}
}

/// Header and body inside a `<table>`
pub struct SimpleTableRenderer {
	components: TableComponents,
}

impl SimpleTableRenderer {
	/// Creates the renderer
	pub fn new() -> Self {
		Self {
			components: TableComponents::new().with(HtmlTable::standard()),
		}
	}
}

impl Default for SimpleTableRenderer {
	fn default() -> Self {
		Self::new()
	}
}

impl TableRenderer for SimpleTableRenderer {
	fn render(&self, table: &Table<'_>) -> Result<String> {
		self.components.render(table)
	}
}

/// Search field, table and pagination bar, in that order
pub struct CompleteTableRenderer {
	components: TableComponents,
}

impl CompleteTableRenderer {
	/// Creates the renderer
	pub fn new() -> Self {
		Self {
			components: TableComponents::new()
				.with(SearchField)
				.with(HtmlTable::standard())
				.with(PaginationBar),
		}
	}
}

impl Default for CompleteTableRenderer {
	fn default() -> Self {
		Self::new()
	}
}

impl TableRenderer for CompleteTableRenderer {
	fn render(&self, table: &Table<'_>) -> Result<String> {
		self.components.render(table)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::column::PlainColumn;
	use crate::sorting::SortDirection;
	use crate::table::TableDefinition;
	use rstest::{fixture, rstest};
	use serde_json::{Value, json};

	#[fixture]
	fn definition() -> TableDefinition {
		TableDefinition::builder()
			.column(PlainColumn::new("ID", "ID"))
			.column(PlainColumn::new("Name", "name").sortable(true))
			.build()
	}

	#[rstest]
	fn test_header_plain_and_sortable(definition: TableDefinition) {
		let rows: Vec<Value> = Vec::new();
		let table = Table::new(&definition, &rows);
		assert_eq!(
			TableHeader.render(&table).unwrap(),
			concat!(
				"<thead><tr><th>ID</th>",
				r#"<th class="sortable"><a href="?page=1&amp;sort_by=name&amp;sort_direction=ASC">Name</a></th>"#,
				"</tr></thead>"
			)
		);
	}

	#[rstest]
	fn test_body_rows(definition: TableDefinition) {
		let rows = vec![json!({"ID": 1, "name": "a"}), json!({"ID": 2, "name": "b"})];
		let table = Table::new(&definition, &rows);
		assert_eq!(
			TableBody.render(&table).unwrap(),
			"<tbody><tr><td>1</td><td>a</td></tr><tr><td>2</td><td>b</td></tr></tbody>"
		);
	}

	#[rstest]
	fn test_pagination_bar_empty_without_pages(definition: TableDefinition) {
		let rows: Vec<Value> = Vec::new();
		let table = Table::new(&definition, &rows).total_pages(0);
		assert_eq!(PaginationBar.render(&table).unwrap(), "");
	}

	#[rstest]
	fn test_pagination_bar_edges(definition: TableDefinition) {
		let rows: Vec<Value> = Vec::new();

		let first = Table::new(&definition, &rows).total_pages(3);
		let html = PaginationBar.render(&first).unwrap();
		assert!(!html.contains(r#"rel="prev""#));
		assert!(html.contains(r#"<a href="?page=2" rel="next">"#));
		assert!(html.contains(r#"<li class="active"><a href="?page=1">1</a></li>"#));

		let last = Table::new(&definition, &rows).page(3).total_pages(3);
		let html = PaginationBar.render(&last).unwrap();
		assert!(html.contains(r#"<a href="?page=2" rel="prev">"#));
		assert!(!html.contains(r#"rel="next""#));
	}

	#[rstest]
	#[case(50, 10, "?page=10")]
	#[case(11, 10, "?page=10")]
	#[case(2, 1, "?page=1")]
	fn test_pagination_bar_past_the_end(
		definition: TableDefinition,
		#[case] page: u32,
		#[case] total_pages: u32,
		#[case] expected: &str,
	) {
		let rows: Vec<Value> = Vec::new();
		let table = Table::new(&definition, &rows).page(page).total_pages(total_pages);
		let html = PaginationBar.render(&table).unwrap();
		assert!(html.contains(&format!(r#"<a href="{expected}" rel="prev">"#)));
		assert!(!html.contains(r#"rel="next""#));
	}

	#[rstest]
	fn test_search_field_carries_sort(definition: TableDefinition) {
		let rows: Vec<Value> = Vec::new();
		let table = Table::new(&definition, &rows)
			.sort(Some("name".into()), Some(SortDirection::Descending))
			.query("o'neil")
			.search_url("/clients");
		let html = SearchField.render(&table).unwrap();
		assert!(html.contains(r#"action="/clients""#));
		assert!(html.contains(r#"value="o&#x27;neil""#));
		assert!(html.contains(r#"<input type="hidden" name="sort_by" value="name">"#));
		assert!(html.contains(r#"<input type="hidden" name="sort_direction" value="DESC">"#));
	}

	#[rstest]
	fn test_custom_components_render_in_order(definition: TableDefinition) {
		let rows = vec![json!({"ID": 1, "name": "a"})];
		let table = Table::new(&definition, &rows).total_pages(1);
		let renderer = TableComponents::new()
			.with(PaginationBar)
			.with(HtmlTable::new().with(TableBody));
		let html = table.render_with(&renderer).unwrap();
		let nav = html.find("<nav").unwrap();
		let body = html.find("<table><tbody>").unwrap();
		assert!(nav < body);
		assert!(!html.contains("<thead>"));
	}
}
