//! Model metadata and listing options

use crate::connection::Row;
use crate::error::{ModelError, Result};
use crate::query::{Condition, Fields, OrderBy};
use crate::value::Value;
use serde::de::DeserializeOwned;

/// Table metadata of a model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableMeta {
	/// Table name
	pub table_name: &'static str,
	/// Primary key column
	pub primary_key: &'static str,
	/// Column identifying a record across revisions, if any
	pub record_key: Option<&'static str>,
}

impl TableMeta {
	/// Metadata for `table_name` with primary key `ID`
	pub const fn new(table_name: &'static str) -> Self {
		Self {
			table_name,
			primary_key: "ID",
			record_key: None,
		}
	}

	/// Sets the primary key column
	pub const fn with_primary_key(mut self, primary_key: &'static str) -> Self {
		self.primary_key = primary_key;
		self
	}

	/// Sets the record key column
	pub const fn with_record_key(mut self, record_key: &'static str) -> Self {
		self.record_key = Some(record_key);
		self
	}

	/// The record key if set, otherwise the primary key
	pub const fn key_column(&self) -> &'static str {
		match self.record_key {
			Some(key) => key,
			None => self.primary_key,
		}
	}
}

/// A foreign table reachable from a model
///
/// The model's table holds a column named after the foreign table that
/// points at [`Relation::join_key`] in the foreign table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
	/// Prefix used in searchable columns (`client` in `client.email`)
	pub name: &'static str,
	/// The foreign table
	pub table: TableMeta,
	/// Foreign column to join on instead of its key
	pub lookup_key: Option<&'static str>,
}

impl Relation {
	/// A relation joined on the foreign table's key
	pub const fn new(name: &'static str, table: TableMeta) -> Self {
		Self {
			name,
			table,
			lookup_key: None,
		}
	}

	/// Joins on `lookup_key` instead
	pub const fn with_lookup_key(mut self, lookup_key: &'static str) -> Self {
		self.lookup_key = Some(lookup_key);
		self
	}

	/// Lookup key, else the foreign record key, else its primary key
	pub const fn join_key(&self) -> &'static str {
		match self.lookup_key {
			Some(key) => key,
			None => self.table.key_column(),
		}
	}
}

/// Construction from a result row
pub trait FromRow: Sized {
	/// Builds the value from a row
	fn from_row(row: Row) -> Result<Self>;
}

/// Deserializes a row with serde, for use in [`FromRow`] implementations
pub fn decode_row<T: DeserializeOwned>(row: Row) -> Result<T> {
	serde_json::from_value(serde_json::Value::Object(row))
		.map_err(|e| ModelError::Decode(e.to_string()))
}

/// A database-backed record type
pub trait Model: FromRow {
	/// Table metadata
	const META: TableMeta;

	/// Columns searched by free-text listing; `relation.column` reaches
	/// into a declared relation
	const SEARCHABLE_COLUMNS: &'static [&'static str] = &[];

	/// Foreign tables reachable from this model
	const RELATIONS: &'static [Relation] = &[];

	/// Value of the primary key
	fn key(&self) -> Value;

	/// Finds a declared relation by name
	fn relation(name: &str) -> Option<&'static Relation> {
		Self::RELATIONS.iter().find(|relation| relation.name == name)
	}
}

/// Options accepted by the listing helpers
#[derive(Debug, Clone, PartialEq)]
pub struct ListOptions {
	/// Extra conditions, AND'ed with generated ones
	pub conditions: Vec<Condition>,
	/// Maximum number of records
	pub limit: Option<u64>,
	/// Number of records to skip
	pub offset: Option<u64>,
	/// Sort order
	pub order: Vec<OrderBy>,
	/// Also report the total without limit
	pub yield_unlimited_total_first: bool,
	/// Free-text search over the searchable columns
	pub search: Option<String>,
	/// Tables to select from; defaults to the model's table
	pub tables: Vec<String>,
	/// Quote identifiers
	pub escape: bool,
	/// Select list; defaults to every column of the model's table
	pub fields: Option<Fields>,
}

impl Default for ListOptions {
	fn default() -> Self {
		Self {
			conditions: Vec::new(),
			limit: None,
			offset: None,
			order: Vec::new(),
			yield_unlimited_total_first: false,
			search: None,
			tables: Vec::new(),
			escape: true,
			fields: None,
		}
	}
}

impl ListOptions {
	/// Default options
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a condition
	pub fn condition(mut self, condition: Condition) -> Self {
		self.conditions.push(condition);
		self
	}

	/// Sets the limit
	pub fn limit(mut self, limit: u64) -> Self {
		self.limit = Some(limit);
		self
	}

	/// Sets the offset
	pub fn offset(mut self, offset: u64) -> Self {
		self.offset = Some(offset);
		self
	}

	/// Adds an ORDER BY entry
	pub fn order(mut self, order: OrderBy) -> Self {
		self.order.push(order);
		self
	}

	/// Requests the unlimited total
	pub fn with_total(mut self) -> Self {
		self.yield_unlimited_total_first = true;
		self
	}

	/// Sets the search term
	pub fn search(mut self, search: impl Into<String>) -> Self {
		self.search = Some(search.into());
		self
	}

	/// Adds a table to select from
	pub fn table(mut self, table: impl Into<String>) -> Self {
		self.tables.push(table.into());
		self
	}

	/// Sets identifier quoting
	pub fn escape(mut self, escape: bool) -> Self {
		self.escape = escape;
		self
	}

	/// Sets the select list
	pub fn fields(mut self, fields: Fields) -> Self {
		self.fields = Some(fields);
		self
	}

	/// The trimmed search term, if not blank
	pub fn search_term(&self) -> Option<&str> {
		self.search
			.as_deref()
			.map(str::trim)
			.filter(|term| !term.is_empty())
	}
}

/// Records returned by a listing call
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<M> {
	/// Total without limit, when requested
	pub total: Option<u64>,
	/// The records, in query order
	pub records: Vec<M>,
}

impl<M> Listing<M> {
	/// Number of records returned
	pub fn len(&self) -> usize {
		self.records.len()
	}

	/// Whether no records were returned
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Iterates over the records
	pub fn iter(&self) -> std::slice::Iter<'_, M> {
		self.records.iter()
	}

	/// Splits into total and records
	pub fn into_parts(self) -> (Option<u64>, Vec<M>) {
		(self.total, self.records)
	}
}

impl<M> IntoIterator for Listing<M> {
	type Item = M;
	type IntoIter = std::vec::IntoIter<M>;

	fn into_iter(self) -> Self::IntoIter {
		self.records.into_iter()
	}
}

impl<'a, M> IntoIterator for &'a Listing<M> {
	type Item = &'a M;
	type IntoIter = std::slice::Iter<'a, M>;

	fn into_iter(self) -> Self::IntoIter {
		self.records.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	const CLIENT: TableMeta = TableMeta::new("client");
	const CONTRACT: TableMeta = TableMeta::new("contract")
		.with_primary_key("contractID")
		.with_record_key("contractNumber");

	#[rstest]
	fn test_key_column() {
		assert_eq!(CLIENT.key_column(), "ID");
		assert_eq!(CONTRACT.key_column(), "contractNumber");
	}

	#[rstest]
	#[case(Relation::new("client", CLIENT), "ID")]
	#[case(Relation::new("contract", CONTRACT), "contractNumber")]
	#[case(Relation::new("contract", CONTRACT).with_lookup_key("contractID"), "contractID")]
	fn test_join_key(#[case] relation: Relation, #[case] expected: &str) {
		assert_eq!(relation.join_key(), expected);
	}

	#[rstest]
	#[case(None, None)]
	#[case(Some("   "), None)]
	#[case(Some(" acme "), Some("acme"))]
	fn test_search_term(#[case] search: Option<&str>, #[case] expected: Option<&str>) {
		let options = ListOptions {
			search: search.map(str::to_string),
			..ListOptions::default()
		};
		assert_eq!(options.search_term(), expected);
	}

	#[rstest]
	fn test_escape_defaults_on() {
		assert!(ListOptions::new().escape);
	}
}
