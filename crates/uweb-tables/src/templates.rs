//! Embedded Tera templates for the sortable header cell, the pagination bar
//! and the search field.

use crate::element::html_escape;
use crate::error::{Result, TableError};
use once_cell::sync::Lazy;
use serde::Serialize;
use tera::{Context, Tera};

pub(crate) const SORTABLE_HEAD: &str = "sortable_head.html";
pub(crate) const PAGINATION: &str = "pagination.html";
pub(crate) const SEARCH_FIELD: &str = "search_field.html";

static TEMPLATES: Lazy<std::result::Result<Tera, String>> = Lazy::new(|| {
	let mut tera = Tera::default();
	tera.add_raw_templates(vec![
		(SORTABLE_HEAD, include_str!("../templates/sortable_head.html")),
		(PAGINATION, include_str!("../templates/pagination.html")),
		(SEARCH_FIELD, include_str!("../templates/search_field.html")),
	])
	.map_err(|e| e.to_string())?;
	// Tera's default escaper also rewrites '/', which breaks hrefs
	tera.set_escape_fn(escape);
	Ok(tera)
});

fn escape(input: &str) -> String {
	html_escape(input).into_owned()
}

/// Renders one of the embedded templates with a serializable context
pub(crate) fn render<T: Serialize>(name: &str, context: &T) -> Result<String> {
	let tera = TEMPLATES
		.as_ref()
		.map_err(|reason| TableError::TemplateInit(reason.clone()))?;
	let context = Context::from_serialize(context)?;
	let rendered = tera.render(name, &context)?;
	Ok(rendered.trim().to_string())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_templates_load() {
		assert!(TEMPLATES.is_ok());
	}

	#[rstest]
	fn test_sortable_head_escapes_without_touching_slashes() {
		let html = render(
			SORTABLE_HEAD,
			&json!({
				"label": "Name <b>",
				"url": "/clients?page=1&sort_by=name",
				"active": false,
				"direction": "ASC",
			}),
		)
		.unwrap();
		assert_eq!(
			html,
			r#"<th class="sortable"><a href="/clients?page=1&amp;sort_by=name">Name &lt;b&gt;</a></th>"#
		);
	}

	#[rstest]
	fn test_sortable_head_marks_active_column() {
		let html = render(
			SORTABLE_HEAD,
			&json!({"label": "ID", "url": "?", "active": true, "direction": "DESC"}),
		)
		.unwrap();
		assert!(html.starts_with(r#"<th class="sortable sorted desc">"#));
	}
}
