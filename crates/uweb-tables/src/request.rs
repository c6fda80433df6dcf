//! Access to request parameters
//!
//! Tables read `page`, `sort_by`, `sort_direction` and `query` from the
//! incoming request. The host framework's request type only needs to
//! implement [`RequestData`].

use crate::error::Result;
use std::collections::{BTreeMap, HashMap};

/// Read access to form/query-string parameters
pub trait RequestData {
	/// Returns the first value submitted for `key`
	fn get_first(&self, key: &str) -> Option<&str>;
}

impl RequestData for HashMap<String, String> {
	fn get_first(&self, key: &str) -> Option<&str> {
		self.get(key).map(String::as_str)
	}
}

impl RequestData for BTreeMap<String, String> {
	fn get_first(&self, key: &str) -> Option<&str> {
		self.get(key).map(String::as_str)
	}
}

impl<T: RequestData + ?Sized> RequestData for &T {
	fn get_first(&self, key: &str) -> Option<&str> {
		(**self).get_first(key)
	}
}

/// Parsed query-string parameters, keeping repeated keys in order
///
/// # Example
///
/// ```rust
/// use uweb_tables::request::{QueryParams, RequestData};
///
/// let params = QueryParams::parse("?page=2&query=acme%20corp").unwrap();
/// assert_eq!(params.get_first("page"), Some("2"));
/// assert_eq!(params.get_first("query"), Some("acme corp"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
	pairs: Vec<(String, String)>,
}

impl QueryParams {
	/// Parses a URL-encoded query string; a leading `?` is ignored
	pub fn parse(query: &str) -> Result<Self> {
		let query = query.strip_prefix('?').unwrap_or(query);
		let pairs = serde_urlencoded::from_str::<Vec<(String, String)>>(query)?;
		Ok(Self { pairs })
	}

	/// Adds a parameter
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.pairs.push((key.into(), value.into()));
	}

	/// Returns all values submitted for `key`
	pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
		self.pairs
			.iter()
			.filter(move |(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}
}

impl RequestData for QueryParams {
	fn get_first(&self, key: &str) -> Option<&str> {
		self.pairs
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			pairs: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}
