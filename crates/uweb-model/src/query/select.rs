//! SELECT statement used by the listing helpers

use super::condition::{ColumnRef, Condition};
use super::dialect::Dialect;
use super::writer::SqlWriter;
use crate::error::Result;
use crate::value::Value;
use uweb_tables::SortDirection;

/// The select list
#[derive(Debug, Clone, PartialEq)]
pub enum Fields {
	/// `*`
	All,
	/// `table.*`
	TableAll(String),
	/// An explicit column list
	Columns(Vec<ColumnRef>),
}

/// One ORDER BY entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
	/// The column sorted on
	pub column: ColumnRef,
	/// The sort direction
	pub direction: SortDirection,
}

impl OrderBy {
	/// Creates an entry
	pub fn new(column: ColumnRef, direction: SortDirection) -> Self {
		Self { column, direction }
	}

	/// Ascending on `column` (`table.column` allowed)
	pub fn asc(column: &str) -> Self {
		Self::new(ColumnRef::parse(column), SortDirection::Ascending)
	}

	/// Descending on `column` (`table.column` allowed)
	pub fn desc(column: &str) -> Self {
		Self::new(ColumnRef::parse(column), SortDirection::Descending)
	}
}

/// Join restricting a versioned table to the newest revision per record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionsJoin {
	/// The versioned table
	pub table: String,
	/// Primary key; the newest revision has the highest value
	pub primary_key: String,
	/// Column shared by all revisions of one record
	pub record_key: String,
}

/// A SELECT over one or more tables
#[derive(Debug, Clone, PartialEq)]
pub struct SelectQuery {
	/// Select list
	pub fields: Fields,
	/// Tables; the first one is the base table
	pub from: Vec<String>,
	/// Newest-revision join applied to the base table
	pub versions: Option<VersionsJoin>,
	/// Conditions, AND'ed together
	pub conditions: Vec<Condition>,
	/// GROUP BY column
	pub group_by: Option<ColumnRef>,
	/// ORDER BY entries
	pub order: Vec<OrderBy>,
	/// LIMIT
	pub limit: Option<u64>,
	/// OFFSET
	pub offset: Option<u64>,
	/// Prefix `SQL_CALC_FOUND_ROWS` (MySQL only)
	pub calc_found_rows: bool,
	/// Quote identifiers
	pub escape: bool,
}

impl SelectQuery {
	/// `SELECT table.* FROM table`
	pub fn new(table: impl Into<String>) -> Self {
		let table = table.into();
		Self {
			fields: Fields::TableAll(table.clone()),
			from: vec![table],
			versions: None,
			conditions: Vec::new(),
			group_by: None,
			order: Vec::new(),
			limit: None,
			offset: None,
			calc_found_rows: false,
			escape: true,
		}
	}

	/// Renders the statement and its bound values
	///
	/// # Examples
	///
	/// ```rust
	/// use uweb_model::query::{ColumnRef, Condition, Dialect, OrderBy, SelectQuery};
	///
	/// let mut query = SelectQuery::new("invoice");
	/// query.conditions.push(Condition::eq(ColumnRef::new("status"), "open"));
	/// query.order.push(OrderBy::desc("ID"));
	/// query.limit = Some(10);
	///
	/// let (sql, values) = query.build(Dialect::MySql).unwrap();
	/// assert_eq!(
	///     sql,
	///     "SELECT `invoice`.* FROM `invoice` WHERE `status` = ? ORDER BY `ID` DESC LIMIT 10"
	/// );
	/// assert_eq!(values.len(), 1);
	/// ```
	pub fn build(&self, dialect: Dialect) -> Result<(String, Vec<Value>)> {
		let mut writer = SqlWriter::new(dialect);
		self.write(&mut writer)?;
		Ok(writer.finish())
	}

	/// Renders `SELECT COUNT(*)` over this query without order or paging
	pub fn build_count(&self, dialect: Dialect) -> Result<(String, Vec<Value>)> {
		let unlimited = Self {
			order: Vec::new(),
			limit: None,
			offset: None,
			calc_found_rows: false,
			..self.clone()
		};
		let mut writer = SqlWriter::new(dialect);
		writer.push("SELECT COUNT(*) AS ");
		writer.push_identifier("total");
		writer.push(" FROM (");
		unlimited.write(&mut writer)?;
		writer.push(") AS ");
		writer.push_identifier("counted");
		Ok(writer.finish())
	}

	fn write(&self, writer: &mut SqlWriter) -> Result<()> {
		let escape = self.escape;
		writer.push("SELECT");
		if self.calc_found_rows && writer.dialect().supports_found_rows() {
			writer.push_keyword("SQL_CALC_FOUND_ROWS");
		}
		writer.push_space();
		match &self.fields {
			Fields::All => writer.push("*"),
			Fields::TableAll(table) => {
				writer.push_name(table, escape);
				writer.push(".*");
			}
			Fields::Columns(columns) => {
				writer.push_list(columns, ", ", |w, column| {
					column.write(w, escape);
					Ok(())
				})?;
			}
		}

		writer.push_keyword("FROM");
		writer.push_space();
		let mut tables = self.from.iter();
		if let Some(base) = tables.next() {
			writer.push_name(base, escape);
		}
		if let Some(versions) = &self.versions {
			write_versions_join(writer, versions);
		}
		for table in tables {
			writer.push(", ");
			writer.push_name(table, escape);
		}

		if !self.conditions.is_empty() {
			writer.push_keyword("WHERE");
			writer.push_space();
			writer.push_list(&self.conditions, " AND ", |w, condition| {
				condition.write(w, escape)
			})?;
		}

		if let Some(group) = &self.group_by {
			writer.push_keyword("GROUP BY");
			writer.push_space();
			group.write(writer, escape);
		}

		if !self.order.is_empty() {
			writer.push_keyword("ORDER BY");
			writer.push_space();
			writer.push_list(&self.order, ", ", |w, order| {
				order.column.write(w, escape);
				w.push(" ");
				w.push(order.direction.as_str());
				Ok(())
			})?;
		}

		self.write_limit(writer);
		Ok(())
	}

	fn write_limit(&self, writer: &mut SqlWriter) {
		match (self.limit, self.offset) {
			(Some(limit), offset) => {
				writer.push_keyword(&format!("LIMIT {limit}"));
				if let Some(offset) = offset.filter(|offset| *offset > 0) {
					writer.push_keyword(&format!("OFFSET {offset}"));
				}
			}
			(None, Some(offset)) if offset > 0 => {
				// an OFFSET needs a LIMIT outside PostgreSQL
				match writer.dialect() {
					Dialect::MySql => writer.push_keyword("LIMIT 18446744073709551615"),
					Dialect::Sqlite => writer.push_keyword("LIMIT -1"),
					Dialect::Postgres => {}
				}
				writer.push_keyword(&format!("OFFSET {offset}"));
			}
			(None, _) => {}
		}
	}
}

fn write_versions_join(writer: &mut SqlWriter, versions: &VersionsJoin) {
	writer.push(" JOIN (SELECT MAX(");
	writer.push_identifier(&versions.primary_key);
	writer.push(") AS ");
	writer.push_identifier("max");
	writer.push(" FROM ");
	writer.push_identifier(&versions.table);
	writer.push(" GROUP BY ");
	writer.push_identifier(&versions.record_key);
	writer.push(") AS ");
	writer.push_identifier("versions");
	writer.push(" ON (");
	writer.push_identifier(&versions.table);
	writer.push(".");
	writer.push_identifier(&versions.primary_key);
	writer.push(" = ");
	writer.push_identifier("versions");
	writer.push(".");
	writer.push_identifier("max");
	writer.push(")");
}
