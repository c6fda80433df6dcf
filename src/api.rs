//! API client module.
//!
//! The shared retrying HTTP client for API backed models.

#[cfg(feature = "api")]
pub use uweb_api::*;
