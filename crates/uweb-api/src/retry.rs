//! Retry decisions and backoff delays

use crate::config::ApiClientConfig;
use reqwest::{Method, StatusCode};
use std::time::Duration;

/// Upper bound for a single backoff sleep
pub const BACKOFF_MAX: Duration = Duration::from_secs(120);

/// Which failed attempts are retried and how long to wait in between
///
/// # Examples
///
/// ```
/// use reqwest::{Method, StatusCode};
/// use std::time::Duration;
/// use uweb_api::RetryPolicy;
///
/// let policy = RetryPolicy::default();
/// assert_eq!(policy.backoff(1), Duration::ZERO);
/// assert!((policy.backoff(2).as_secs_f64() - 0.6).abs() < 1e-6);
/// assert!(policy.retries_status(&Method::GET, StatusCode::BAD_GATEWAY));
/// assert!(!policy.retries_status(&Method::POST, StatusCode::BAD_GATEWAY));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
	total: u32,
	backoff_factor: f64,
	status_forcelist: Vec<u16>,
}

impl RetryPolicy {
	/// Creates a policy
	pub fn new(total: u32, backoff_factor: f64, status_forcelist: impl Into<Vec<u16>>) -> Self {
		Self {
			total,
			backoff_factor,
			status_forcelist: status_forcelist.into(),
		}
	}

	/// A policy that never retries
	pub fn never() -> Self {
		Self::new(0, 0.0, Vec::new())
	}

	/// Maximum number of retries
	pub fn total(&self) -> u32 {
		self.total
	}

	/// Whether `method` may be sent twice without changing the outcome
	pub fn is_idempotent(method: &Method) -> bool {
		matches!(
			method.as_str(),
			"GET" | "HEAD" | "PUT" | "DELETE" | "OPTIONS" | "TRACE"
		)
	}

	/// Whether a response with `status` is retried
	pub fn retries_status(&self, method: &Method, status: StatusCode) -> bool {
		Self::is_idempotent(method) && self.status_forcelist.contains(&status.as_u16())
	}

	/// Whether a transport error is retried
	///
	/// Failing to connect means the request never reached the server, so it
	/// is retried for every method. Other failures such as read timeouts
	/// are only retried for idempotent methods.
	pub fn retries_error(&self, method: &Method, error: &reqwest::Error) -> bool {
		if error.is_connect() {
			return true;
		}
		Self::is_idempotent(method) && (error.is_timeout() || error.is_request())
	}

	/// Delay before retry number `retry`, counting from 1
	pub fn backoff(&self, retry: u32) -> Duration {
		if retry <= 1 {
			return Duration::ZERO;
		}
		let exponent = i32::try_from(retry - 1).unwrap_or(i32::MAX);
		let seconds = self.backoff_factor * 2_f64.powi(exponent);
		Duration::try_from_secs_f64(seconds)
			.unwrap_or(BACKOFF_MAX)
			.min(BACKOFF_MAX)
	}
}

impl Default for RetryPolicy {
	fn default() -> Self {
		Self::from(&ApiClientConfig::default())
	}
}

impl From<&ApiClientConfig> for RetryPolicy {
	fn from(config: &ApiClientConfig) -> Self {
		Self::new(
			config.retries,
			config.backoff_factor,
			config.status_forcelist.clone(),
		)
	}
}
