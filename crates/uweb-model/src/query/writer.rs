//! SQL Writer helper for constructing SQL strings
//!
//! Tracks the placeholder index so that PostgreSQL statements get
//! consecutive `$n` numbers no matter where a value is pushed.

use super::dialect::Dialect;
use crate::error::{ModelError, Result};
use crate::value::Value;

/// SQL Writer for constructing SQL strings
///
/// # Examples
///
/// ```rust
/// use uweb_model::query::{Dialect, SqlWriter};
///
/// let mut writer = SqlWriter::new(Dialect::Postgres);
/// writer.push("SELECT * FROM");
/// writer.push_space();
/// writer.push_identifier("client");
/// writer.push_keyword("WHERE");
/// writer.push_space();
/// writer.push_identifier("ID");
/// writer.push(" = ");
/// writer.push_value(7.into());
///
/// let (sql, values) = writer.finish();
/// assert_eq!(sql, r#"SELECT * FROM "client" WHERE "ID" = $1"#);
/// assert_eq!(values.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SqlWriter {
	dialect: Dialect,
	sql: String,
	values: Vec<Value>,
	/// Next parameter index (1-based)
	param_index: usize,
}

impl SqlWriter {
	/// Create a new SQL writer for a dialect
	pub fn new(dialect: Dialect) -> Self {
		Self {
			dialect,
			sql: String::new(),
			values: Vec::new(),
			param_index: 1,
		}
	}

	/// The dialect being written
	pub fn dialect(&self) -> Dialect {
		self.dialect
	}

	/// Push a string to SQL
	pub fn push(&mut self, s: &str) {
		self.sql.push_str(s);
	}

	/// Push a space unless the SQL already ends with one
	pub fn push_space(&mut self) {
		if !self.sql.is_empty() && !self.sql.ends_with(' ') {
			self.sql.push(' ');
		}
	}

	/// Push a keyword (with automatic spacing)
	pub fn push_keyword(&mut self, keyword: &str) {
		self.push_space();
		self.sql.push_str(keyword);
	}

	/// Push a quoted identifier
	pub fn push_identifier(&mut self, ident: &str) {
		let quoted = self.dialect.quote_identifier(ident);
		self.sql.push_str(&quoted);
	}

	/// Push an identifier, quoted only when `escape` is set
	pub fn push_name(&mut self, ident: &str, escape: bool) {
		if escape {
			self.push_identifier(ident);
		} else {
			self.sql.push_str(ident);
		}
	}

	/// Push a value placeholder and collect the value
	///
	/// `NULL` is written inline and consumes no parameter; `None` is
	/// returned in that case.
	pub fn push_value(&mut self, value: Value) -> Option<usize> {
		if value.is_null() {
			self.sql.push_str("NULL");
			return None;
		}
		Some(self.push_param(value))
	}

	/// Push a placeholder for any value, `NULL` included
	pub fn push_param(&mut self, value: Value) -> usize {
		let index = self.param_index;
		let placeholder = self.dialect.placeholder(index);
		self.sql.push_str(&placeholder);
		self.values.push(value);
		self.param_index += 1;
		index
	}

	/// Push a caller-written fragment using `?` placeholders
	///
	/// Each `?` outside a quoted literal is replaced by the dialect's
	/// placeholder and bound to the next value. Inside `'...'` and `"..."`
	/// literals a backslash escapes the next character.
	pub fn push_raw(&mut self, sql: &str, values: &[Value]) -> Result<()> {
		let found = count_placeholders(sql);
		if found != values.len() {
			return Err(ModelError::PlaceholderMismatch {
				sql: sql.to_string(),
				expected: values.len(),
				found,
			});
		}

		let mut values = values.iter();
		for token in scan_raw(sql) {
			match token {
				Some(c) => self.sql.push(c),
				None => {
					if let Some(value) = values.next() {
						self.push_param(value.clone());
					}
				}
			}
		}
		Ok(())
	}

	/// Push a list of items with a separator
	pub fn push_list<I, T, F>(&mut self, items: I, separator: &str, mut f: F) -> Result<()>
	where
		I: IntoIterator<Item = T>,
		F: FnMut(&mut Self, T) -> Result<()>,
	{
		let mut first = true;
		for item in items {
			if !first {
				self.sql.push_str(separator);
			}
			f(self, item)?;
			first = false;
		}
		Ok(())
	}

	/// Get current SQL string
	pub fn sql(&self) -> &str {
		&self.sql
	}

	/// Get collected values
	pub fn values(&self) -> &[Value] {
		&self.values
	}

	/// Consume writer and return (SQL, Values)
	pub fn finish(self) -> (String, Vec<Value>) {
		(self.sql, self.values)
	}
}

fn count_placeholders(sql: &str) -> usize {
	scan_raw(sql).into_iter().filter(Option::is_none).count()
}

/// Splits a raw fragment into its characters, with `None` for each `?`
/// placeholder outside quoted literals
fn scan_raw(sql: &str) -> Vec<Option<char>> {
	let mut tokens = Vec::with_capacity(sql.len());
	let mut quote: Option<char> = None;
	let mut escaped = false;
	for c in sql.chars() {
		match quote {
			None if c == '?' => {
				tokens.push(None);
				continue;
			}
			None if matches!(c, '\'' | '"' | '`') => quote = Some(c),
			None => {}
			Some(_) if escaped => escaped = false,
			Some(open) if c == '\\' && open != '`' => escaped = true,
			Some(open) if c == open => quote = None,
			Some(_) => {}
		}
		tokens.push(Some(c));
	}
	tokens
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_push_value_inlines_null() {
		let mut writer = SqlWriter::new(Dialect::Postgres);
		assert_eq!(writer.push_value(Value::Null), None);
		writer.push(", ");
		assert_eq!(writer.push_value(Value::Int(1)), Some(1));
		assert_eq!(writer.sql(), "NULL, $1");
	}

	#[rstest]
	fn test_push_raw_renumbers_for_postgres() {
		let mut writer = SqlWriter::new(Dialect::Postgres);
		writer.push_param(Value::Int(1));
		writer.push(" ");
		writer
			.push_raw("status = ? AND note <> '?' AND owner = ?", &["open".into(), 5.into()])
			.unwrap();
		let (sql, values) = writer.finish();
		assert_eq!(sql, "$1 status = $2 AND note <> '?' AND owner = $3");
		assert_eq!(values.len(), 3);
	}

	#[rstest]
	fn test_push_raw_keeps_question_marks_for_mysql() {
		let mut writer = SqlWriter::new(Dialect::MySql);
		writer.push_raw("a = ?", &[1.into()]).unwrap();
		assert_eq!(writer.sql(), "a = ?");
	}

	#[rstest]
	#[case(r"note = 'it\'s ?' AND a = ?", r"note = 'it\'s ?' AND a = $1")]
	#[case(r#"note = "say \"?\"" AND a = ?"#, r#"note = "say \"?\"" AND a = $1"#)]
	#[case(r"path = 'C:\\' AND a = ?", r"path = 'C:\\' AND a = $1")]
	#[case("note = 'it''s ?' AND a = ?", "note = 'it''s ?' AND a = $1")]
	fn test_push_raw_skips_escaped_quotes(#[case] sql: &str, #[case] expected: &str) {
		let mut writer = SqlWriter::new(Dialect::Postgres);
		writer.push_raw(sql, &[Value::Int(1)]).unwrap();
		assert_eq!(writer.sql(), expected);
		assert_eq!(writer.values(), &[Value::Int(1)]);
	}

	#[rstest]
	#[case("a = ?", 0)]
	#[case("a = 1", 1)]
	#[case("a = ? AND b = ?", 1)]
	fn test_push_raw_mismatch(#[case] sql: &str, #[case] values: usize) {
		let mut writer = SqlWriter::new(Dialect::MySql);
		let values = vec![Value::Int(1); values];
		assert!(matches!(
			writer.push_raw(sql, &values),
			Err(ModelError::PlaceholderMismatch { .. })
		));
	}

	#[rstest]
	fn test_push_name_without_escaping() {
		let mut writer = SqlWriter::new(Dialect::MySql);
		writer.push_name("client", false);
		writer.push(".");
		writer.push_name("name", true);
		assert_eq!(writer.sql(), "client.`name`");
	}
}
