//! Table rendering integration tests
//!
//! Renders complete tables over struct rows and JSON rows.

use rstest::*;
use serde_json::{Value, json};
use std::collections::HashMap;
use uweb_tables::{
	Attr, Attributes, CompleteTableRenderer, LinkColumn, PlainColumn, QueryParams, Table,
	TableDefinition,
};

struct Client {
	id: i64,
	name: String,
}

struct Invoice {
	id: i64,
	title: String,
	secret: String,
	client: Option<Client>,
}

impl Attributes for Client {
	fn get_item(&self, _key: &str) -> Option<Attr<'_>> {
		None
	}

	fn get_attr(&self, name: &str) -> Option<Attr<'_>> {
		match name {
			"ID" => Some(Attr::value(self.id)),
			"name" => Some(Attr::value(self.name.as_str())),
			_ => None,
		}
	}
}

impl Attributes for Invoice {
	fn get_item(&self, key: &str) -> Option<Attr<'_>> {
		match key {
			"ID" => Some(Attr::value(self.id)),
			"title" => Some(Attr::value(self.title.as_str())),
			"secret" => Some(Attr::value(self.secret.as_str())),
			"client" => Some(match &self.client {
				Some(client) => Attr::Ref(client),
				None => Attr::Value(Value::Null),
			}),
			_ => None,
		}
	}
}

#[fixture]
fn invoices() -> Vec<Invoice> {
	vec![
		Invoice {
			id: 1,
			title: "March".to_string(),
			secret: "hidden-one".to_string(),
			client: Some(Client {
				id: 7,
				name: "Acme".to_string(),
			}),
		},
		Invoice {
			id: 2,
			title: "April".to_string(),
			secret: "hidden-two".to_string(),
			client: None,
		},
	]
}

#[fixture]
fn definition() -> TableDefinition {
	TableDefinition::builder()
		.column(PlainColumn::new("ID", "ID").sortable(true))
		.column(PlainColumn::new("Title", "title").sortable(true))
		.column(PlainColumn::new("Secret", "secret").enabled(false))
		.column(LinkColumn::new("Client", "client.name", "/client/{client.ID}"))
		.build()
}

/// Test: disabled columns are left out of header and body
///
/// Category: Rendering
#[rstest]
fn test_disabled_column_is_never_rendered(definition: TableDefinition, invoices: Vec<Invoice>) {
	let html = Table::new(&definition, &invoices).render().unwrap();

	assert!(!html.contains("Secret"));
	assert!(!html.contains("hidden-one"));
	assert!(!html.contains("hidden-two"));
	assert_eq!(html.matches("</th>").count(), 3);
	assert_eq!(html.matches("<td>").count(), 6);
}

/// Test: link column fills its href from the row
///
/// Category: Rendering
#[rstest]
fn test_link_column_href(definition: TableDefinition, invoices: Vec<Invoice>) {
	let html = Table::new(&definition, &invoices).render().unwrap();

	assert!(html.contains(r#"<td><a href="/client/7">Acme</a></td>"#));
	// the second invoice has no client
	assert!(html.contains(r#"<td><a href="/client/"></a></td>"#));
}

/// Test: header links reset the page and keep the search query
///
/// Category: Sorting
#[rstest]
fn test_sort_links_reset_page_and_keep_query(definition: TableDefinition, invoices: Vec<Invoice>) {
	let request = QueryParams::parse("?sort_by=title&sort_direction=DESC&page=3&query=foo").unwrap();
	let html = Table::from_request(&definition, &invoices, &request, 4)
		.render()
		.unwrap();

	assert!(html.contains(
		r#"<th class="sortable sorted desc"><a href="?page=1&amp;sort_by=title&amp;sort_direction=ASC&amp;query=foo">Title</a></th>"#
	));
	assert!(html.contains(
		r#"<th class="sortable"><a href="?page=1&amp;sort_by=ID&amp;sort_direction=ASC&amp;query=foo">ID</a></th>"#
	));
	assert!(!html.contains("page=3&amp;sort_by"));
}

/// Test: the complete renderer orders search, table and pagination
///
/// Category: Rendering
#[rstest]
fn test_complete_renderer(invoices: Vec<Invoice>) {
	let definition = TableDefinition::builder()
		.column(PlainColumn::new("Title", "title").sortable(true))
		.renderer(CompleteTableRenderer::new())
		.build();
	let mut request = HashMap::new();
	request.insert("page".to_string(), "2".to_string());
	request.insert("sort_by".to_string(), "title".to_string());

	let html = Table::from_request(&definition, &invoices, &request, 3)
		.search_url("/invoices")
		.render()
		.unwrap();

	let form = html.find("<form").unwrap();
	let table = html.find("<table>").unwrap();
	let nav = html.find("<nav").unwrap();
	assert!(form < table && table < nav);

	// missing direction defaults to ascending and is carried by every link
	assert!(html.contains(r#"<a href="?page=1&amp;sort_by=title&amp;sort_direction=ASC" rel="prev">"#));
	assert!(html.contains(r#"<a href="?page=3&amp;sort_by=title&amp;sort_direction=ASC" rel="next">"#));
	assert!(html.contains(r#"<li class="active"><a href="?page=2&amp;sort_by=title&amp;sort_direction=ASC">2</a></li>"#));
}

/// Test: JSON rows render without any trait implementation
///
/// Category: Rendering
#[rstest]
fn test_json_rows() {
	let definition = TableDefinition::builder()
		.column(PlainColumn::new("Amount", "lines.0.amount"))
		.build();
	let rows = vec![json!({"lines": [{"amount": 12.5}]}), json!({"lines": []})];

	let html = Table::new(&definition, &rows).render().unwrap();
	assert_eq!(
		html,
		"<table><thead><tr><th>Amount</th></tr></thead><tbody><tr><td>12.5</td></tr><tr><td></td></tr></tbody></table>"
	);
}

/// Test: a misconfigured column surfaces as an error
///
/// Category: Error
#[rstest]
fn test_misconfigured_column_errors(invoices: Vec<Invoice>) {
	let definition = TableDefinition::builder()
		.column(PlainColumn::new("Total", "total"))
		.build();
	assert!(Table::new(&definition, &invoices).render().is_err());
}
