//! Error types for debugging settings

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or interpreting debugging settings
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DebuggingError {
	/// The settings file could not be read
	#[error("Failed to read {path}: {source}")]
	Io {
		/// Path of the settings file
		path: PathBuf,
		/// Underlying IO error
		#[source]
		source: std::io::Error,
	},

	/// The settings are not valid TOML
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// A flag holds something that is not a boolean
	#[error("Invalid boolean for {key}: {value}")]
	InvalidBoolean {
		/// Dotted settings key
		key: String,
		/// The offending value as written
		value: String,
	},
}

/// Result type for debugging operations
pub type Result<T> = std::result::Result<T, DebuggingError>;
