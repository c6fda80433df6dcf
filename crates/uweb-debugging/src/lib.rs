//! Restricted access to detailed exception pages
//!
//! Production deployments should not leak stack traces, but operators still
//! want them when debugging from a known address. [`RestrictedDebugging`]
//! decides per request whether the detailed page is shown, based on the
//! `[general]` and `[debugging]` settings.
//!
//! # Features
//!
//! - **Development mode**: `general.development = true` shows every page
//! - **Whitelist**: `debugging.whitelist` lists addresses, comma separated
//! - **Proxies**: `debugging.useforwardedip` also checks `X-Forwarded-For`
//! - **Fail closed**: a malformed forwarding flag is logged and denies access
//!
//! # Example
//!
//! ```rust
//! use uweb_debugging::{DebuggingSettings, RequestEnv, RestrictedDebugging};
//!
//! let policy = RestrictedDebugging::new(
//!     DebuggingSettings::from_toml_str("[debugging]\nwhitelist = \"127.0.0.1\"\n").unwrap(),
//! );
//!
//! let page = policy.internal_server_error(
//!     "division by zero",
//!     &RequestEnv::new("203.0.113.9"),
//!     || "<pre>traceback</pre>".to_string(),
//! );
//! assert_eq!(page.status, 500);
//! assert_eq!(page.body, "A server error occurred.");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod policy;

// Re-exports for convenience
pub use config::{DebuggingSection, DebuggingSettings, GeneralSettings};
pub use error::{DebuggingError, Result};
pub use policy::{ClientAddress, ErrorPage, GENERIC_ERROR_MESSAGE, RequestEnv, RestrictedDebugging};
