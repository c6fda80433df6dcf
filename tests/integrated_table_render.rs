//! Listing a model page and rendering it as an HTML table

use rstest::*;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::cell::RefCell;
use std::collections::VecDeque;
use uweb_plugins::model::model::decode_row;
use uweb_plugins::model::{
	Cursor, DbError, Dialect, Relation, ResultSet, Row, TableMeta, Value,
};
use uweb_plugins::prelude::*;

/// Connection answering each statement with the next queued result
struct QueuedConnection {
	results: RefCell<VecDeque<ResultSet>>,
	statements: RefCell<Vec<String>>,
}

impl QueuedConnection {
	fn new(results: Vec<serde_json::Value>) -> Self {
		let results = results
			.into_iter()
			.map(|rows| {
				let rows = rows
					.as_array()
					.into_iter()
					.flatten()
					.filter_map(|row| row.as_object().cloned())
					.collect::<Vec<Row>>();
				ResultSet::new(rows)
			})
			.collect();
		Self {
			results: RefCell::new(results),
			statements: RefCell::new(Vec::new()),
		}
	}
}

impl Connection for QueuedConnection {
	fn dialect(&self) -> Dialect {
		Dialect::MySql
	}

	fn cursor(&self) -> Result<Box<dyn Cursor + '_>, DbError> {
		Ok(Box::new(QueuedCursor { connection: self }))
	}
}

struct QueuedCursor<'a> {
	connection: &'a QueuedConnection,
}

impl Cursor for QueuedCursor<'_> {
	fn execute(&mut self, sql: &str, _values: &[Value]) -> Result<ResultSet, DbError> {
		self.connection.statements.borrow_mut().push(sql.to_string());
		Ok(self
			.connection
			.results
			.borrow_mut()
			.pop_front()
			.unwrap_or_default())
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Invoice {
	#[serde(rename = "ID")]
	id: i64,
	title: String,
	client: i64,
}

impl FromRow for Invoice {
	fn from_row(row: Row) -> uweb_plugins::model::Result<Self> {
		decode_row(row)
	}
}

impl Model for Invoice {
	const META: TableMeta = TableMeta::new("invoice");
	const RELATIONS: &'static [Relation] =
		&[Relation::new("client", TableMeta::new("client"))];

	fn key(&self) -> Value {
		self.id.into()
	}
}

impl RichModel for Invoice {}

impl SearchableTable for Invoice {
	fn list_page(
		connection: &dyn Connection,
		options: ListOptions,
	) -> uweb_plugins::model::Result<Listing<Self>> {
		<Self as RichModel>::list(connection, options)
	}
}

#[fixture]
fn definition() -> TableDefinition {
	TableDefinition::builder()
		.column(PlainColumn::new("Title", "title").sortable(true))
		.column(LinkColumn::new("Client", "client.name", "/client/{client.ID}"))
		.renderer(CompleteTableRenderer::new())
		.build()
}

/// Test: a listed page renders with related records reached by dotted paths
///
/// Category: Integration
#[rstest]
fn test_listed_page_renders(definition: TableDefinition) {
	let connection = QueuedConnection::new(vec![
		json!([
			{"ID": 11, "title": "March", "client": 7},
			{"ID": 12, "title": "April", "client": 7},
		]),
		json!([{"FOUND_ROWS()": 12}]),
	]);
	let request = QueryParams::parse("?sort_by=title&sort_direction=DESC&page=2").unwrap();

	let page = Invoice::integrated_table(&connection, &request, 10, TableOptions::new()).unwrap();
	let acme = json!({"ID": 7, "name": "Acme"});
	let rows = page
		.rows()
		.unwrap()
		.into_iter()
		.map(|row| row.with_related("client", &acme))
		.collect::<uweb_plugins::model::Result<Vec<_>>>()
		.unwrap();
	let html = Table::from_request(&definition, &rows, &request, page.total_pages(10).unwrap())
		.search_url("/invoices")
		.render()
		.unwrap();

	assert_eq!(page.total_items, 12);
	assert!(html.contains("March"));
	assert!(html.contains("April"));
	assert_eq!(html.matches(r#"<a href="/client/7">Acme</a>"#).count(), 2);
	assert!(html.contains("sorted desc"));
	let statements = connection.statements.borrow();
	assert_eq!(
		statements[0],
		"SELECT SQL_CALC_FOUND_ROWS `invoice`.* FROM `invoice` ORDER BY `title` DESC LIMIT 10 OFFSET 10"
	);
	assert_eq!(statements[1], "SELECT FOUND_ROWS()");
}
