//! Deciding who gets to see detailed exception pages

use crate::config::DebuggingSettings;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use tracing::{error, warn};

/// Body of the page shown to clients that may not see exception details
pub const GENERIC_ERROR_MESSAGE: &str = "A server error occurred.";

/// Client addressing information of a request
pub trait ClientAddress {
	/// Address of the connecting peer (`REMOTE_ADDR`)
	fn remote_addr(&self) -> Option<&str>;

	/// The `X-Forwarded-For` header (`HTTP_X_FORWARDED_FOR`)
	fn forwarded_for(&self) -> Option<&str>;
}

/// Addresses of a single request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestEnv {
	remote_addr: Option<String>,
	forwarded_for: Option<String>,
}

impl RequestEnv {
	/// A request from `remote_addr`
	pub fn new(remote_addr: impl Into<String>) -> Self {
		Self {
			remote_addr: Some(remote_addr.into()),
			forwarded_for: None,
		}
	}

	/// Sets the `X-Forwarded-For` value
	pub fn with_forwarded_for(mut self, forwarded_for: impl Into<String>) -> Self {
		self.forwarded_for = Some(forwarded_for.into());
		self
	}
}

impl ClientAddress for RequestEnv {
	fn remote_addr(&self) -> Option<&str> {
		self.remote_addr.as_deref()
	}

	fn forwarded_for(&self) -> Option<&str> {
		self.forwarded_for.as_deref()
	}
}

// WSGI-style environment maps
impl ClientAddress for HashMap<String, String> {
	fn remote_addr(&self) -> Option<&str> {
		self.get("REMOTE_ADDR").map(String::as_str)
	}

	fn forwarded_for(&self) -> Option<&str> {
		self.get("HTTP_X_FORWARDED_FOR").map(String::as_str)
	}
}

impl ClientAddress for BTreeMap<String, String> {
	fn remote_addr(&self) -> Option<&str> {
		self.get("REMOTE_ADDR").map(String::as_str)
	}

	fn forwarded_for(&self) -> Option<&str> {
		self.get("HTTP_X_FORWARDED_FOR").map(String::as_str)
	}
}

/// A rendered error response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPage {
	/// HTTP status code
	pub status: u16,
	/// Response body
	pub body: String,
	/// Whether the body carries exception details
	pub detailed: bool,
}

impl ErrorPage {
	/// The generic 500 page
	pub fn generic() -> Self {
		Self {
			status: 500,
			body: GENERIC_ERROR_MESSAGE.to_string(),
			detailed: false,
		}
	}

	/// A 500 page with exception details
	pub fn detailed(body: impl Into<String>) -> Self {
		Self {
			status: 500,
			body: body.into(),
			detailed: true,
		}
	}
}

/// Shows detailed exception pages only to whitelisted clients
///
/// In development mode everyone sees them. Otherwise the client's address,
/// or with `debugging.useforwardedip` enabled its `X-Forwarded-For`
/// address, must be listed in `debugging.whitelist`.
///
/// # Examples
///
/// ```rust
/// use uweb_debugging::{DebuggingSettings, RequestEnv, RestrictedDebugging};
///
/// let settings = DebuggingSettings::from_toml_str(
///     "[debugging]\nwhitelist = \"10.0.0.5\"\nuseforwardedip = true\n",
/// )
/// .unwrap();
/// let policy = RestrictedDebugging::new(settings);
///
/// assert!(policy.should_show_exception_page(&RequestEnv::new("10.0.0.5")));
/// assert!(policy.should_show_exception_page(
///     &RequestEnv::new("172.16.0.1").with_forwarded_for("10.0.0.5")
/// ));
/// assert!(!policy.should_show_exception_page(&RequestEnv::new("192.168.1.1")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RestrictedDebugging {
	settings: DebuggingSettings,
}

impl RestrictedDebugging {
	/// Creates the policy from loaded settings
	pub fn new(settings: DebuggingSettings) -> Self {
		Self { settings }
	}

	/// The settings in use
	pub fn settings(&self) -> &DebuggingSettings {
		&self.settings
	}

	/// Whether the detailed exception page may be shown to this client
	pub fn should_show_exception_page(&self, client: &dyn ClientAddress) -> bool {
		if self.settings.is_development() {
			return true;
		}

		let whitelist = self.settings.whitelist();
		if whitelist.is_empty() {
			return false;
		}

		if client
			.remote_addr()
			.is_some_and(|address| whitelist.iter().any(|allowed| *allowed == address))
		{
			return true;
		}

		let use_forwarded_ip = match self.settings.use_forwarded_ip() {
			Ok(Some(flag)) => flag,
			Ok(None) => return false,
			Err(e) => {
				warn!(error = %e, "Invalid useforwardedip setting found, assuming false");
				return false;
			}
		};

		let Some(forwarded_for) = client.forwarded_for() else {
			return false;
		};

		use_forwarded_ip && whitelist.iter().any(|allowed| *allowed == forwarded_for)
	}

	/// Logs an unhandled error and picks the page to send
	///
	/// `detailed` renders the exception page and is only called when the
	/// client may see it.
	pub fn internal_server_error<E, F>(
		&self,
		err: &E,
		client: &dyn ClientAddress,
		detailed: F,
	) -> ErrorPage
	where
		E: fmt::Display + ?Sized,
		F: FnOnce() -> String,
	{
		error!(
			error = %err,
			remote_addr = client.remote_addr().unwrap_or("-"),
			"Internal server error occurred"
		);
		if self.should_show_exception_page(client) {
			ErrorPage::detailed(detailed())
		} else {
			ErrorPage::generic()
		}
	}
}
