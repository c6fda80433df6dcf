//! API client configuration

use crate::error::{ApiError, Result};
use serde::Deserialize;
use std::time::Duration;

/// Settings for [`ApiClient`](crate::ApiClient)
///
/// Every field has a default, so an empty table deserializes to
/// [`ApiClientConfig::default`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use uweb_api::ApiClientConfig;
///
/// let config = ApiClientConfig::new()
///     .with_base_url("https://api.example.com/v1")
///     .with_retries(4);
///
/// assert_eq!(config.timeout(), Duration::from_secs(9));
/// assert_eq!(config.retries, 4);
/// assert_eq!(config.status_forcelist, vec![500, 502, 503, 504]);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiClientConfig {
	/// Prefix for relative request paths
	pub base_url: Option<String>,
	/// Per request timeout in seconds
	pub timeout_secs: f64,
	/// Retries after the first attempt
	pub retries: u32,
	/// Seconds; the n-th retry waits `backoff_factor * 2^(n-1)`, the first
	/// retry is immediate
	pub backoff_factor: f64,
	/// Statuses that trigger a retry of idempotent requests
	pub status_forcelist: Vec<u16>,
}

impl ApiClientConfig {
	/// Configuration with the defaults: 9 s timeout, 2 retries, 0.3 backoff
	/// factor, retrying on 500, 502, 503 and 504
	pub fn new() -> Self {
		Self {
			base_url: None,
			timeout_secs: 9.0,
			retries: 2,
			backoff_factor: 0.3,
			status_forcelist: vec![500, 502, 503, 504],
		}
	}

	/// Set the base URL
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = Some(base_url.into());
		self
	}

	/// Set the timeout
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout_secs = timeout.as_secs_f64();
		self
	}

	/// Set the number of retries
	pub fn with_retries(mut self, retries: u32) -> Self {
		self.retries = retries;
		self
	}

	/// Set the backoff factor in seconds
	pub fn with_backoff_factor(mut self, backoff_factor: f64) -> Self {
		self.backoff_factor = backoff_factor;
		self
	}

	/// Set the statuses that are retried
	pub fn with_status_forcelist(mut self, statuses: impl Into<Vec<u16>>) -> Self {
		self.status_forcelist = statuses.into();
		self
	}

	/// The timeout as a [`Duration`]
	pub fn timeout(&self) -> Duration {
		Duration::try_from_secs_f64(self.timeout_secs).unwrap_or(Duration::ZERO)
	}

	/// Rejects negative or non-finite durations
	pub fn validate(&self) -> Result<()> {
		if !self.timeout_secs.is_finite() || self.timeout_secs <= 0.0 {
			return Err(ApiError::InvalidConfig(format!(
				"timeout_secs must be positive, got {}",
				self.timeout_secs
			)));
		}
		if !self.backoff_factor.is_finite() || self.backoff_factor < 0.0 {
			return Err(ApiError::InvalidConfig(format!(
				"backoff_factor must not be negative, got {}",
				self.backoff_factor
			)));
		}
		Ok(())
	}
}

impl Default for ApiClientConfig {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_empty_table_uses_defaults() {
		let config: ApiClientConfig = toml::from_str("").unwrap();
		assert_eq!(config, ApiClientConfig::default());
	}

	#[rstest]
	fn test_partial_table() {
		let config: ApiClientConfig =
			toml::from_str("base_url = \"http://localhost:8000\"\nretries = 0\n").unwrap();
		assert_eq!(config.base_url.as_deref(), Some("http://localhost:8000"));
		assert_eq!(config.retries, 0);
		assert_eq!(config.backoff_factor, 0.3);
	}

	#[rstest]
	#[case(0.0, 0.3)]
	#[case(-1.0, 0.3)]
	#[case(f64::NAN, 0.3)]
	#[case(9.0, -0.1)]
	fn test_validate_rejects(#[case] timeout: f64, #[case] backoff: f64) {
		let config = ApiClientConfig {
			timeout_secs: timeout,
			backoff_factor: backoff,
			..ApiClientConfig::default()
		};
		assert!(matches!(config.validate(), Err(ApiError::InvalidConfig(_))));
	}

	#[rstest]
	fn test_with_timeout() {
		let config = ApiClientConfig::new().with_timeout(Duration::from_millis(1500));
		assert_eq!(config.timeout(), Duration::from_millis(1500));
		assert!(config.validate().is_ok());
	}
}
