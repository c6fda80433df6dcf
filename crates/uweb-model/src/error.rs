//! Error types for model listing

use thiserror::Error;
use uweb_tables::TableError;

/// Errors reported by the database collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DbError {
	/// A query referenced a column the table does not have
	#[error("Unknown column '{0}'")]
	UnknownColumn(String),

	/// Any other error raised while executing a statement
	#[error("Operational error ({code}): {message}")]
	Operational {
		/// Driver error code
		code: u16,
		/// Driver error message
		message: String,
	},

	/// The connection could not lend out a cursor
	#[error("Connection error: {0}")]
	Connection(String),
}

impl DbError {
	/// MySQL's `ER_BAD_FIELD_ERROR`
	pub const UNKNOWN_COLUMN_CODE: u16 = 1054;

	/// Whether this error reports an unknown column
	pub fn is_unknown_column(&self) -> bool {
		match self {
			DbError::UnknownColumn(_) => true,
			DbError::Operational { code, .. } => *code == Self::UNKNOWN_COLUMN_CODE,
			DbError::Connection(_) => false,
		}
	}
}

/// Errors that can occur while building or running a listing
#[derive(Debug, Error)]
pub enum ModelError {
	/// The database rejected a statement
	#[error(transparent)]
	Database(#[from] DbError),

	/// A searchable column named a relation the model does not declare
	#[error("Unknown relation '{relation}' on model '{model}'")]
	UnknownRelation {
		/// The relation prefix of the searchable column
		relation: String,
		/// The table of the model being listed
		model: String,
	},

	/// A searchable column is not `column` or `relation.column`
	#[error("Invalid searchable column '{0}'")]
	InvalidSearchColumn(String),

	/// A raw condition's placeholders do not match its values
	#[error("Condition '{sql}' has {found} placeholder(s) but {expected} value(s)")]
	PlaceholderMismatch {
		/// The raw SQL fragment
		sql: String,
		/// Number of bound values
		expected: usize,
		/// Number of `?` placeholders found
		found: usize,
	},

	/// A row could not be turned into a model
	#[error("Row decoding error: {0}")]
	Decode(String),

	/// A record could not be serialized into a table row
	#[error("Row encoding error: {0}")]
	Encode(String),

	/// Pagination or request handling failed
	#[error(transparent)]
	Table(#[from] TableError),
}

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;
