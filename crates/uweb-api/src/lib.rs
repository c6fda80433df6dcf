//! HTTP client for models backed by a remote API
//!
//! Models that proxy a JSON API share a single [`ApiClient`] so the
//! underlying connection pool is reused across requests. The client is
//! created explicitly from an [`ApiClientConfig`] and passed to whoever
//! needs it.
//!
//! # Features
//!
//! - **Timeouts**: every request is bounded, 9 seconds by default
//! - **Retries**: idempotent requests answered with 500, 502, 503 or 504
//!   are retried twice, as are requests that failed to connect
//! - **Backoff**: the first retry is immediate, the n-th waits
//!   `backoff_factor * 2^(n-1)` seconds
//!
//! # Example
//!
//! ```no_run
//! use uweb_api::{ApiClient, ApiClientConfig};
//!
//! let client = ApiClient::new(ApiClientConfig::new().with_base_url("http://localhost:8000")).unwrap();
//! let status = client.get("/health").unwrap().status();
//! assert!(status.is_success());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod client;
pub mod config;
pub mod error;
pub mod retry;

// Re-exports for convenience
pub use client::ApiClient;
pub use config::ApiClientConfig;
pub use error::{ApiError, Result};
pub use retry::{BACKOFF_MAX, RetryPolicy};
