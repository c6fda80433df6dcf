//! Per-connection model cache
//!
//! Listing calls record a label for every query they run and preseed the
//! cache with the full rows they fetched, so later single-record lookups on
//! the same connection can be answered without a round trip.

use crate::connection::Row;
use crate::value::Value;
use parking_lot::Mutex;
use std::collections::HashMap;

#[derive(Debug, Default)]
struct CacheState {
	queries: Vec<String>,
	records: HashMap<(String, String), Row>,
}

/// Query statistics and preseeded rows for one connection
#[derive(Debug, Default)]
pub struct ModelCache {
	state: Mutex<CacheState>,
}

impl ModelCache {
	/// An empty cache
	pub fn new() -> Self {
		Self::default()
	}

	/// Records the label of a query that was run
	pub fn record_query(&self, label: impl Into<String>) {
		self.state.lock().queries.push(label.into());
	}

	/// Labels of all queries run so far, oldest first
	pub fn queries(&self) -> Vec<String> {
		self.state.lock().queries.clone()
	}

	/// Stores the full row of a record
	pub fn preseed(&self, table: &str, key: &Value, row: Row) {
		self.state
			.lock()
			.records
			.insert((table.to_string(), key.to_string()), row);
	}

	/// Returns the cached row of a record
	pub fn get(&self, table: &str, key: &Value) -> Option<Row> {
		self.state
			.lock()
			.records
			.get(&(table.to_string(), key.to_string()))
			.cloned()
	}

	/// Number of cached rows
	pub fn len(&self) -> usize {
		self.state.lock().records.len()
	}

	/// Whether no row is cached
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Drops all cached rows and query labels
	pub fn clear(&self) {
		let mut state = self.state.lock();
		state.queries.clear();
		state.records.clear();
	}
}
