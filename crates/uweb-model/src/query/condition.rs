//! WHERE clause conditions

use super::writer::SqlWriter;
use crate::error::Result;
use crate::value::Value;

/// A possibly table-qualified column reference
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnRef {
	table: Option<String>,
	column: String,
}

impl ColumnRef {
	/// An unqualified column
	pub fn new(column: impl Into<String>) -> Self {
		Self {
			table: None,
			column: column.into(),
		}
	}

	/// A `table.column` reference
	pub fn qualified(table: impl Into<String>, column: impl Into<String>) -> Self {
		Self {
			table: Some(table.into()),
			column: column.into(),
		}
	}

	/// Parses `column` or `table.column`
	///
	/// # Examples
	///
	/// ```rust
	/// use uweb_model::query::ColumnRef;
	///
	/// assert_eq!(ColumnRef::parse("client.name"), ColumnRef::qualified("client", "name"));
	/// assert_eq!(ColumnRef::parse("name"), ColumnRef::new("name"));
	/// ```
	pub fn parse(reference: &str) -> Self {
		match reference.split_once('.') {
			Some((table, column)) => Self::qualified(table, column),
			None => Self::new(reference),
		}
	}

	/// The table qualifier
	pub fn table(&self) -> Option<&str> {
		self.table.as_deref()
	}

	/// The column name
	pub fn column(&self) -> &str {
		&self.column
	}

	pub(crate) fn write(&self, writer: &mut SqlWriter, escape: bool) {
		if let Some(table) = &self.table {
			writer.push_name(table, escape);
			writer.push(".");
		}
		if self.column == "*" {
			writer.push("*");
		} else {
			writer.push_name(&self.column, escape);
		}
	}
}

/// Escapes `LIKE` wildcards with `!` and wraps the term in `%`
///
/// # Examples
///
/// ```rust
/// use uweb_model::query::like_pattern;
///
/// assert_eq!(like_pattern("50%_off!"), "%50!%!_off!!%");
/// ```
pub fn like_pattern(term: &str) -> String {
	let mut pattern = String::with_capacity(term.len() + 2);
	pattern.push('%');
	for c in term.chars() {
		if matches!(c, '!' | '%' | '_') {
			pattern.push('!');
		}
		pattern.push(c);
	}
	pattern.push('%');
	pattern
}

/// A single WHERE condition; top-level conditions are AND'ed
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
	/// A caller-written fragment using `?` placeholders
	Raw {
		/// SQL text
		sql: String,
		/// Values for the placeholders, in order
		values: Vec<Value>,
	},
	/// `column = value`, or `column IS NULL`
	Eq(ColumnRef, Value),
	/// `left = right` between two columns
	ColumnEq(ColumnRef, ColumnRef),
	/// `column LIKE pattern ESCAPE '!'`
	Like {
		/// The column matched
		column: ColumnRef,
		/// A pattern already escaped for `!`
		pattern: String,
	},
	/// Parenthesized OR of the inner conditions
	Any(Vec<Condition>),
	/// Parenthesized AND of the inner conditions
	All(Vec<Condition>),
}

impl Condition {
	/// A raw fragment with `?` placeholders
	pub fn raw(sql: impl Into<String>, values: Vec<Value>) -> Self {
		Condition::Raw {
			sql: sql.into(),
			values,
		}
	}

	/// `column = value`
	pub fn eq(column: ColumnRef, value: impl Into<Value>) -> Self {
		Condition::Eq(column, value.into())
	}

	/// `left = right`
	pub fn column_eq(left: ColumnRef, right: ColumnRef) -> Self {
		Condition::ColumnEq(left, right)
	}

	/// `column` contains `term` anywhere
	pub fn contains(column: ColumnRef, term: &str) -> Self {
		Condition::Like {
			column,
			pattern: like_pattern(term),
		}
	}

	/// OR of the given conditions
	pub fn any(conditions: impl IntoIterator<Item = Condition>) -> Self {
		Condition::Any(conditions.into_iter().collect())
	}

	/// AND of the given conditions
	pub fn all(conditions: impl IntoIterator<Item = Condition>) -> Self {
		Condition::All(conditions.into_iter().collect())
	}

	pub(crate) fn write(&self, writer: &mut SqlWriter, escape: bool) -> Result<()> {
		match self {
			Condition::Raw { sql, values } => {
				writer.push("(");
				writer.push_raw(sql, values)?;
				writer.push(")");
			}
			Condition::Eq(column, Value::Null) => {
				column.write(writer, escape);
				writer.push(" IS NULL");
			}
			Condition::Eq(column, value) => {
				column.write(writer, escape);
				writer.push(" = ");
				writer.push_value(value.clone());
			}
			Condition::ColumnEq(left, right) => {
				left.write(writer, escape);
				writer.push(" = ");
				right.write(writer, escape);
			}
			Condition::Like { column, pattern } => {
				column.write(writer, escape);
				writer.push(" LIKE ");
				writer.push_param(Value::String(pattern.clone()));
				writer.push(" ESCAPE '!'");
			}
			Condition::Any(conditions) => write_group(writer, conditions, " OR ", "1 = 0", escape)?,
			Condition::All(conditions) => write_group(writer, conditions, " AND ", "1 = 1", escape)?,
		}
		Ok(())
	}
}

fn write_group(
	writer: &mut SqlWriter,
	conditions: &[Condition],
	separator: &str,
	empty: &str,
	escape: bool,
) -> Result<()> {
	writer.push("(");
	if conditions.is_empty() {
		writer.push(empty);
	} else {
		writer.push_list(conditions, separator, |w, condition| {
			condition.write(w, escape)
		})?;
	}
	writer.push(")");
	Ok(())
}
