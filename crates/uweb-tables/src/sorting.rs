//! Sorting functionality for tables

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
	/// Ascending order (`ASC`)
	#[default]
	#[serde(rename = "ASC")]
	Ascending,
	/// Descending order (`DESC`)
	#[serde(rename = "DESC")]
	Descending,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// The SQL keyword and query-string value for this direction
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Ascending => "ASC",
			Self::Descending => "DESC",
		}
	}

	/// Parses `ASC`/`DESC` case-insensitively
	pub fn parse(s: &str) -> Option<Self> {
		if s.trim().eq_ignore_ascii_case("ASC") {
			Some(Self::Ascending)
		} else if s.trim().eq_ignore_ascii_case("DESC") {
			Some(Self::Descending)
		} else {
			None
		}
	}
}

impl fmt::Display for SortDirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned when a sort direction cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid sort direction: {0}")]
pub struct ParseSortDirectionError(pub String);

impl FromStr for SortDirection {
	type Err = ParseSortDirectionError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s).ok_or_else(|| ParseSortDirectionError(s.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("ASC", Some(SortDirection::Ascending))]
	#[case("desc", Some(SortDirection::Descending))]
	#[case(" Desc ", Some(SortDirection::Descending))]
	#[case("sideways", None)]
	fn test_parse(#[case] input: &str, #[case] expected: Option<SortDirection>) {
		assert_eq!(SortDirection::parse(input), expected);
	}

	#[rstest]
	fn test_toggle_round_trips() {
		assert_eq!(SortDirection::Ascending.toggle(), SortDirection::Descending);
		assert_eq!(SortDirection::Descending.toggle(), SortDirection::Ascending);
	}

	#[rstest]
	fn test_from_str_error() {
		let err = "up".parse::<SortDirection>().unwrap_err();
		assert_eq!(err.to_string(), "invalid sort direction: up");
	}

	#[rstest]
	fn test_from_str_error_boxes() {
		let result: Result<SortDirection, Box<dyn std::error::Error + Send + Sync>> =
			"sideways".parse::<SortDirection>().map_err(Into::into);
		let err = result.unwrap_err();
		assert!(err.downcast_ref::<ParseSortDirectionError>().is_some());
	}
}
