//! The shared HTTP client
//!
//! One [`ApiClient`] is built at startup and handed to every model that
//! talks to the API, so connections are pooled across requests.

use crate::config::ApiClientConfig;
use crate::error::{ApiError, Result};
use crate::retry::RetryPolicy;
use reqwest::Method;
use reqwest::blocking::{Client, Request, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::thread;
use tracing::{debug, warn};

/// A pooled blocking HTTP client that retries failed idempotent requests
///
/// # Examples
///
/// ```no_run
/// use serde::Deserialize;
/// use uweb_api::{ApiClient, ApiClientConfig};
///
/// #[derive(Deserialize)]
/// struct Invoice {
///     title: String,
/// }
///
/// let client = ApiClient::new(
///     ApiClientConfig::new().with_base_url("https://api.example.com/v1"),
/// )
/// .unwrap();
/// let invoice: Invoice = client.get_json("/invoices/1").unwrap();
/// println!("{}", invoice.title);
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
	client: Client,
	policy: RetryPolicy,
	base_url: Option<String>,
}

impl ApiClient {
	/// Builds the client from configuration
	pub fn new(config: ApiClientConfig) -> Result<Self> {
		config.validate()?;
		let client = Client::builder().timeout(config.timeout()).build()?;
		Ok(Self {
			policy: RetryPolicy::from(&config),
			base_url: config.base_url,
			client,
		})
	}

	/// Wraps an already configured reqwest client
	pub fn with_client(client: Client, policy: RetryPolicy) -> Self {
		Self {
			client,
			policy,
			base_url: None,
		}
	}

	/// Sets the prefix for relative paths
	pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = Some(base_url.into());
		self
	}

	/// The retry policy in use
	pub fn policy(&self) -> &RetryPolicy {
		&self.policy
	}

	/// Resolves `path` against the base URL
	///
	/// Absolute `http://` and `https://` URLs are returned unchanged.
	pub fn url(&self, path: &str) -> String {
		if path.starts_with("http://") || path.starts_with("https://") {
			return path.to_string();
		}
		match &self.base_url {
			Some(base) => format!(
				"{}/{}",
				base.trim_end_matches('/'),
				path.trim_start_matches('/')
			),
			None => path.to_string(),
		}
	}

	/// Starts a request; send it with [`ApiClient::send`]
	pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
		self.client.request(method, self.url(path))
	}

	/// Builds and sends a request with retries
	pub fn send(&self, builder: RequestBuilder) -> Result<Response> {
		self.execute(builder.build()?)
	}

	/// Sends a request with retries
	///
	/// Requests whose body cannot be cloned are sent once.
	pub fn execute(&self, request: Request) -> Result<Response> {
		let method = request.method().clone();
		let url = request.url().to_string();
		let mut pending = request;
		let mut retry = 0;

		loop {
			let next = if retry < self.policy.total() {
				pending.try_clone()
			} else {
				None
			};
			debug!(%method, %url, retry, "sending API request");

			match self.client.execute(pending) {
				Ok(response) if self.policy.retries_status(&method, response.status()) => {
					let status = response.status().as_u16();
					match next {
						Some(request) => {
							retry += 1;
							warn!(%method, %url, status, retry, "retrying API request");
							pending = request;
						}
						// Body could not be cloned
						None if retry < self.policy.total() => return Ok(response),
						None => {
							return Err(ApiError::RetriesExhausted {
								method: method.to_string(),
								url,
								status,
								retries: retry,
							});
						}
					}
				}
				Ok(response) => return Ok(response),
				Err(e) => match next {
					Some(request) if self.policy.retries_error(&method, &e) => {
						retry += 1;
						warn!(%method, %url, error = %e, retry, "retrying API request");
						pending = request;
					}
					_ => return Err(e.into()),
				},
			}
			thread::sleep(self.policy.backoff(retry));
		}
	}

	/// `GET` a path
	pub fn get(&self, path: &str) -> Result<Response> {
		self.send(self.request(Method::GET, path))
	}

	/// `DELETE` a path
	pub fn delete(&self, path: &str) -> Result<Response> {
		self.send(self.request(Method::DELETE, path))
	}

	/// `GET` a path and decode the JSON body; error statuses become errors
	pub fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
		Ok(self.get(path)?.error_for_status()?.json()?)
	}

	/// `POST` a JSON body and decode the JSON reply
	pub fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
	where
		B: Serialize + ?Sized,
		T: DeserializeOwned,
	{
		let response = self.send(self.request(Method::POST, path).json(body))?;
		Ok(response.error_for_status()?.json()?)
	}

	/// `PUT` a JSON body and decode the JSON reply
	pub fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T>
	where
		B: Serialize + ?Sized,
		T: DeserializeOwned,
	{
		let response = self.send(self.request(Method::PUT, path).json(body))?;
		Ok(response.error_for_status()?.json()?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Some("https://api.example.com/v1"), "/invoices", "https://api.example.com/v1/invoices")]
	#[case(Some("https://api.example.com/v1/"), "invoices", "https://api.example.com/v1/invoices")]
	#[case(Some("https://api.example.com"), "http://other.example.com/x", "http://other.example.com/x")]
	#[case(None, "http://localhost/x", "http://localhost/x")]
	fn test_url(#[case] base: Option<&str>, #[case] path: &str, #[case] expected: &str) {
		let mut config = ApiClientConfig::new();
		config.base_url = base.map(str::to_string);
		let client = ApiClient::new(config).unwrap();
		assert_eq!(client.url(path), expected);
	}

	#[rstest]
	fn test_invalid_config_is_rejected() {
		let config = ApiClientConfig::new().with_backoff_factor(-1.0);
		assert!(matches!(
			ApiClient::new(config),
			Err(ApiError::InvalidConfig(_))
		));
	}
}
