//! Database collaborator traits
//!
//! The host framework owns the driver and the pool. Listing code only needs
//! a [`Connection`] that lends out a scoped [`Cursor`]; the cursor is
//! dropped, and thereby released, when the listing call returns.

use crate::cache::ModelCache;
use crate::error::DbError;
use crate::query::Dialect;
use crate::value::Value;

/// A result row keyed by column name
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Rows returned by a statement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
	/// The returned rows
	pub rows: Vec<Row>,
	/// Rows affected, as reported by the driver
	pub affected: u64,
}

impl ResultSet {
	/// A result holding `rows`
	pub fn new(rows: Vec<Row>) -> Self {
		let affected = rows.len() as u64;
		Self { rows, affected }
	}

	/// The first column of the first row as a count
	pub fn first_count(&self) -> Option<u64> {
		let value = self.rows.first()?.values().next()?;
		match value {
			serde_json::Value::Number(n) => n.as_u64(),
			serde_json::Value::String(s) => s.trim().parse().ok(),
			_ => None,
		}
	}
}

/// Executes parameterized statements
pub trait Cursor {
	/// Runs `sql` with `values` bound to its placeholders
	fn execute(&mut self, sql: &str, values: &[Value]) -> Result<ResultSet, DbError>;
}

/// A database connection that hands out cursors
pub trait Connection {
	/// The SQL dialect spoken by this connection
	fn dialect(&self) -> Dialect {
		Dialect::MySql
	}

	/// Checks out a cursor for the duration of one listing call
	fn cursor(&self) -> Result<Box<dyn Cursor + '_>, DbError>;

	/// The per-connection model cache, when the host keeps one
	fn model_cache(&self) -> Option<&ModelCache> {
		None
	}
}
