//! Error types for the API client

use thiserror::Error;

/// Errors returned by [`ApiClient`](crate::ApiClient)
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ApiError {
	/// Transport, timeout, or decoding failure reported by reqwest
	#[error("HTTP error: {0}")]
	Http(#[from] reqwest::Error),

	/// The server kept answering with a retryable status
	#[error("{method} {url} still returned {status} after {retries} retries")]
	RetriesExhausted {
		/// Request method
		method: String,
		/// Request URL
		url: String,
		/// Last status received
		status: u16,
		/// Number of retries made
		retries: u32,
	},

	/// The client configuration cannot be used
	#[error("Invalid client configuration: {0}")]
	InvalidConfig(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
