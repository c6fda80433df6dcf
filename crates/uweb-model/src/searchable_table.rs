//! One-call listing for paginated, sortable, searchable HTML tables

use crate::connection::Connection;
use crate::error::{ModelError, Result};
use crate::model::{ListOptions, Listing, Model};
use crate::query::{ColumnRef, Condition, OrderBy};
use crate::record_row::RecordRow;
use serde::Serialize;
use tracing::warn;
use uweb_tables::{RequestData, SortDirection, current_page, total_pages};

/// What [`SearchableTable::integrated_table`] lists
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableOptions {
	/// Conditions applied before the search
	pub conditions: Vec<Condition>,
	/// Columns (`column` or `table.column`) matched against `query`
	pub searchable: Vec<String>,
	/// Order used when the request has no `sort_by`
	pub default_sort: Vec<OrderBy>,
}

impl TableOptions {
	/// Empty options
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a condition
	pub fn condition(mut self, condition: Condition) -> Self {
		self.conditions.push(condition);
		self
	}

	/// Adds a searchable column
	pub fn searchable(mut self, column: impl Into<String>) -> Self {
		self.searchable.push(column.into());
		self
	}

	/// Adds a default ORDER BY entry
	pub fn default_sort(mut self, order: OrderBy) -> Self {
		self.default_sort.push(order);
		self
	}
}

/// One page of records plus what the table needs to paginate
#[derive(Debug, Clone, PartialEq)]
pub struct TablePage<M> {
	/// Records on this page
	pub records: Vec<M>,
	/// Matching records over all pages
	pub total_items: u64,
	/// The page that was requested
	pub page: u32,
}

impl<M> TablePage<M> {
	/// Splits into `(records, total_items, page)`
	pub fn into_parts(self) -> (Vec<M>, u64, u32) {
		(self.records, self.total_items, self.page)
	}

	/// Serializes every record into a row the table columns can read
	///
	/// Nest related records with [`RecordRow::with_related`] to make paths
	/// such as `client.name` resolve.
	pub fn rows(&self) -> Result<Vec<RecordRow>>
	where
		M: Serialize,
	{
		self.records.iter().map(RecordRow::from_record).collect()
	}

	/// Number of pages at `page_size` records per page
	pub fn total_pages(&self, page_size: u32) -> Result<u32> {
		Ok(total_pages(self.total_items, page_size)?)
	}
}

/// Models that can back an HTML table
///
/// `list_page` forwards to the model's listing helper:
///
/// ```rust,ignore
/// impl SearchableTable for Invoice {
///     fn list_page(connection: &dyn Connection, options: ListOptions) -> Result<Listing<Self>> {
///         <Self as RichModel>::list(connection, options)
///     }
/// }
/// ```
pub trait SearchableTable: Model {
	/// Lists one page of records
	fn list_page(connection: &dyn Connection, options: ListOptions) -> Result<Listing<Self>>;

	/// Lists the page the request asks for
	///
	/// Reads `sort_by`, `sort_direction` (ascending unless `DESC`), `page`
	/// and `query` from the request. A query is matched with `LIKE` against
	/// every column in the `searchable` list of [`TableOptions`]. A database error about
	/// an unknown column, typically from a stale `sort_by`, is logged and
	/// yields an empty page.
	fn integrated_table(
		connection: &dyn Connection,
		request: &dyn RequestData,
		page_size: u32,
		options: TableOptions,
	) -> Result<TablePage<Self>> {
		if page_size == 0 {
			return Err(uweb_tables::TableError::InvalidPageSize(page_size).into());
		}

		let sort_by = request.get_first("sort_by").filter(|value| !value.is_empty());
		let direction = request
			.get_first("sort_direction")
			.and_then(SortDirection::parse)
			.unwrap_or_default();
		let page = current_page(request);
		let query = request
			.get_first("query")
			.map(str::trim)
			.filter(|value| !value.is_empty());

		let TableOptions {
			mut conditions,
			searchable,
			default_sort,
		} = options;
		if let Some(query) = query
			&& !searchable.is_empty()
		{
			conditions.push(Condition::any(
				searchable
					.iter()
					.map(|column| Condition::contains(ColumnRef::parse(column), query)),
			));
		}

		let order = match sort_by {
			Some(sort_by) => vec![OrderBy::new(ColumnRef::parse(sort_by), direction)],
			None => default_sort,
		};
		let list_options = ListOptions {
			conditions,
			limit: Some(u64::from(page_size)),
			offset: Some(u64::from(page_size) * u64::from(page - 1)),
			order,
			yield_unlimited_total_first: true,
			..ListOptions::default()
		};

		match Self::list_page(connection, list_options) {
			Ok(listing) => Ok(TablePage {
				total_items: listing.total.unwrap_or(0),
				records: listing.records,
				page,
			}),
			Err(ModelError::Database(err)) if err.is_unknown_column() => {
				warn!(
					table = Self::META.table_name,
					error = %err,
					"Unknown column while listing table, returning an empty page"
				);
				Ok(TablePage {
					records: Vec::new(),
					total_items: 0,
					page,
				})
			}
			Err(err) => Err(err),
		}
	}
}
