//! Listing helpers for versioned records
//!
//! A versioned table stores every revision of a record as its own row.
//! Revisions share the record key; the newest one has the highest primary
//! key.

use crate::connection::Connection;
use crate::error::Result;
use crate::listing;
use crate::model::{ListOptions, Listing, Model};
use crate::query::VersionsJoin;

/// Listing of the newest revision of every record
pub trait RichVersionedRecord: Model {
	/// Lists the newest revision of each record
	///
	/// Search works as in [`RichModel::list`](crate::RichModel::list)
	/// without grouping; the versions join already yields one row per
	/// record. Rows are cached only when full rows of a single table were
	/// selected.
	fn list(connection: &dyn Connection, options: ListOptions) -> Result<Listing<Self>> {
		let meta = Self::META;
		let mut prepared = listing::prepare::<Self>(connection, options, false)?;
		prepared.query.versions = Some(VersionsJoin {
			table: meta.table_name.to_string(),
			primary_key: meta.primary_key.to_string(),
			record_key: meta.key_column().to_string(),
		});

		let cacheable = prepared.full_rows && prepared.query.from.len() == 1;
		let label = format!("{} VersionedRecord.List", meta.table_name);
		listing::run(
			connection,
			&prepared.query,
			prepared.with_total,
			&label,
			cacheable,
		)
	}
}
