//! Smoke tests for the facade re-exports

use rstest::rstest;
use serde_json::json;
use uweb_plugins::prelude::*;

/// Test: A table declared through the prelude renders from request parameters
///
/// Category: Facade
#[rstest]
fn test_table_from_prelude() {
	let definition = TableDefinition::builder()
		.column(PlainColumn::new("Title", "title").sortable(true))
		.column(LinkColumn::new("Client", "client.name", "/client/{client.ID}"))
		.renderer(CompleteTableRenderer::new())
		.build();
	let rows = vec![json!({"title": "March", "client": {"ID": 7, "name": "Acme"}})];
	let request = QueryParams::parse("?sort_by=title&sort_direction=DESC&page=1").unwrap();

	let html = Table::from_request(&definition, &rows, &request, 1)
		.search_url("/invoices")
		.render()
		.unwrap();
	assert!(html.contains(r#"<a href="/client/7">Acme</a>"#));
	assert!(html.contains(r#"action="/invoices""#));
	assert!(html.contains("sorted desc"));
}

/// Test: Debugging and API types are reachable through the prelude
///
/// Category: Facade
#[rstest]
fn test_policy_and_client_from_prelude() {
	let policy = RestrictedDebugging::new(
		DebuggingSettings::from_toml_str("[general]\ndevelopment = true\n").unwrap(),
	);
	assert!(policy.should_show_exception_page(&RequestEnv::new("198.51.100.4")));

	let client = ApiClient::new(ApiClientConfig::new().with_base_url("http://localhost:8000/")).unwrap();
	assert_eq!(client.url("/health"), "http://localhost:8000/health");
}
