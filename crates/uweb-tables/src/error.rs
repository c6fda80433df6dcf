//! Error types for table rendering

use thiserror::Error;

/// Errors that can occur while resolving row attributes or rendering tables
#[derive(Debug, Error)]
pub enum TableError {
	/// The final segment of an attribute path could not be found on the row
	///
	/// This usually means a column was declared with an attribute path that
	/// does not match the rows handed to the table.
	#[error("Attribute '{segment}' not found while resolving '{path}'")]
	MissingAttribute {
		/// The full dotted path that was being resolved
		path: String,
		/// The segment that failed to resolve
		segment: String,
	},

	/// Page size must be a positive number
	#[error("Invalid page size: {0}")]
	InvalidPageSize(u32),

	/// A link column carried a malformed href template
	#[error("Invalid href template '{template}': {reason}")]
	InvalidHrefTemplate {
		/// The offending template
		template: String,
		/// Why parsing failed
		reason: String,
	},

	/// The embedded templates failed to load
	#[error("Template initialization failed: {0}")]
	TemplateInit(String),

	/// Rendering one of the embedded templates failed
	#[error("Template rendering error: {0}")]
	Template(#[from] tera::Error),

	/// A query string could not be encoded
	#[error("Query string encoding error: {0}")]
	QueryEncode(#[from] serde_urlencoded::ser::Error),

	/// A query string could not be decoded
	#[error("Query string decoding error: {0}")]
	QueryDecode(#[from] serde_urlencoded::de::Error),
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;
