//! Shared listing engine behind `RichModel::list` and
//! `RichVersionedRecord::list`

use crate::connection::Connection;
use crate::error::{ModelError, Result};
use crate::model::{ListOptions, Listing, Model};
use crate::query::{ColumnRef, Fields, SelectQuery};
use crate::search::search_clause;
use tracing::debug;

pub(crate) struct Prepared {
	pub(crate) query: SelectQuery,
	pub(crate) with_total: bool,
	/// Full rows of the base table are selected
	pub(crate) full_rows: bool,
}

/// Turns listing options into a query over `M`'s table
///
/// With `group_search` set, searched listings are grouped on the model's
/// key column so that joined rows do not duplicate records.
pub(crate) fn prepare<M: Model>(
	connection: &dyn Connection,
	options: ListOptions,
	group_search: bool,
) -> Result<Prepared> {
	let base = M::META.table_name;
	let term = options.search_term().map(str::to_string);
	let ListOptions {
		mut conditions,
		limit,
		offset,
		order,
		yield_unlimited_total_first: with_total,
		mut tables,
		escape,
		fields,
		..
	} = options;

	if tables.is_empty() {
		tables.push(base.to_string());
	}
	let full_rows = fields.is_none();

	let mut group_by = None;
	if let Some(term) = term {
		let clause = search_clause::<M>(tables, &term)?;
		tables = clause.tables;
		conditions.extend(clause.conditions);
		if group_search {
			group_by = Some(ColumnRef::qualified(base, M::META.key_column()));
		}
	}

	let query = SelectQuery {
		fields: fields.unwrap_or_else(|| Fields::TableAll(base.to_string())),
		from: tables,
		versions: None,
		conditions,
		group_by,
		order,
		limit,
		offset,
		calc_found_rows: with_total
			&& !returns_every_row(limit, offset)
			&& connection.dialect().supports_found_rows(),
		escape,
	};
	Ok(Prepared {
		query,
		with_total,
		full_rows,
	})
}

/// Whether the statement returns every matching row, so that the row count
/// is the unlimited total
fn returns_every_row(limit: Option<u64>, offset: Option<u64>) -> bool {
	limit.is_none() && offset.unwrap_or(0) == 0
}

/// Runs a prepared listing and builds the records
///
/// The cursor is checked out for the statement and, when requested, the
/// total, and released before any record is constructed.
pub(crate) fn run<M: Model>(
	connection: &dyn Connection,
	query: &SelectQuery,
	with_total: bool,
	label: &str,
	cacheable: bool,
) -> Result<Listing<M>> {
	let dialect = connection.dialect();
	let (sql, values) = query.build(dialect)?;
	debug!(query = label, %sql, params = values.len(), "Listing records");

	let cache = connection.model_cache();
	if let Some(cache) = cache {
		cache.record_query(label);
	}

	let (rows, total) = {
		let mut cursor = connection.cursor()?;
		let result = cursor.execute(&sql, &values)?;
		let total = if !with_total {
			None
		} else if returns_every_row(query.limit, query.offset) {
			Some(result.rows.len() as u64)
		} else if query.calc_found_rows && dialect.supports_found_rows() {
			let found = cursor.execute("SELECT FOUND_ROWS()", &[])?;
			Some(found.first_count().ok_or_else(|| {
				ModelError::Decode("FOUND_ROWS() returned no count".to_string())
			})?)
		} else {
			let (count_sql, count_values) = query.build_count(dialect)?;
			debug!(query = label, sql = %count_sql, "Counting unlimited total");
			let counted = cursor.execute(&count_sql, &count_values)?;
			Some(counted.first_count().ok_or_else(|| {
				ModelError::Decode("COUNT(*) returned no count".to_string())
			})?)
		};
		(result.rows, total)
	};

	let cache = cache.filter(|_| cacheable);
	let mut records = Vec::with_capacity(rows.len());
	for row in rows {
		let record = match cache {
			Some(cache) => {
				let record = M::from_row(row.clone())?;
				cache.preseed(M::META.table_name, &record.key(), row);
				record
			}
			None => M::from_row(row)?,
		};
		records.push(record);
	}

	Ok(Listing { total, records })
}
