//! SQL dialects

/// The SQL flavour statements are generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
	/// MySQL / MariaDB: backtick identifiers, `?` placeholders
	#[default]
	MySql,
	/// PostgreSQL: double-quoted identifiers, `$n` placeholders
	Postgres,
	/// SQLite: double-quoted identifiers, `?` placeholders
	Sqlite,
}

impl Dialect {
	/// Quotes an identifier, doubling embedded quote characters
	///
	/// # Examples
	///
	/// ```rust
	/// use uweb_model::query::Dialect;
	///
	/// assert_eq!(Dialect::MySql.quote_identifier("client"), "`client`");
	/// assert_eq!(Dialect::Postgres.quote_identifier("a\"b"), "\"a\"\"b\"");
	/// ```
	pub fn quote_identifier(&self, ident: &str) -> String {
		match self {
			Dialect::MySql => format!("`{}`", ident.replace('`', "``")),
			Dialect::Postgres | Dialect::Sqlite => format!("\"{}\"", ident.replace('"', "\"\"")),
		}
	}

	/// Placeholder for the 1-based parameter `index`
	pub fn placeholder(&self, index: usize) -> String {
		match self {
			Dialect::Postgres => format!("${index}"),
			Dialect::MySql | Dialect::Sqlite => "?".to_string(),
		}
	}

	/// Whether unlimited totals come from `SQL_CALC_FOUND_ROWS`
	pub fn supports_found_rows(&self) -> bool {
		matches!(self, Dialect::MySql)
	}
}
