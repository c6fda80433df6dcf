//! Debugging settings
//!
//! Read from the application's TOML settings:
//!
//! ```toml
//! [general]
//! development = false
//!
//! [debugging]
//! whitelist = "127.0.0.1,10.0.0.5"
//! useforwardedip = true
//! ```

use crate::error::{DebuggingError, Result};
use serde::Deserialize;
use std::path::Path;

/// The `[general]` table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralSettings {
	/// Development mode shows every exception page
	#[serde(default)]
	pub development: bool,
}

/// The `[debugging]` table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DebuggingSection {
	/// Comma separated list of addresses allowed to see exception pages
	#[serde(default)]
	pub whitelist: Option<String>,

	/// Whether `X-Forwarded-For` is checked against the whitelist
	///
	/// Kept as a raw value so that a malformed flag can be reported instead
	/// of failing the whole settings file.
	#[serde(default)]
	pub useforwardedip: Option<toml::Value>,
}

/// Settings consulted by [`RestrictedDebugging`](crate::RestrictedDebugging)
///
/// # Examples
///
/// ```rust
/// use uweb_debugging::DebuggingSettings;
///
/// let settings = DebuggingSettings::from_toml_str(
///     "[debugging]\nwhitelist = \"127.0.0.1,,10.0.0.5\"\n",
/// )
/// .unwrap();
/// assert!(!settings.is_development());
/// assert_eq!(settings.whitelist(), vec!["127.0.0.1", "10.0.0.5"]);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DebuggingSettings {
	/// The `[general]` table
	#[serde(default)]
	pub general: GeneralSettings,

	/// The `[debugging]` table, absent when the application has none
	#[serde(default)]
	pub debugging: Option<DebuggingSection>,
}

impl DebuggingSettings {
	/// Parses settings from TOML text; unrelated tables are ignored
	pub fn from_toml_str(contents: &str) -> Result<Self> {
		Ok(toml::from_str(contents)?)
	}

	/// Reads and parses a TOML settings file
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let contents = std::fs::read_to_string(path).map_err(|source| DebuggingError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&contents)
	}

	/// Whether `general.development` is set
	pub fn is_development(&self) -> bool {
		self.general.development
	}

	/// Whitelisted addresses with empty entries dropped
	pub fn whitelist(&self) -> Vec<&str> {
		self.debugging
			.as_ref()
			.and_then(|section| section.whitelist.as_deref())
			.map(|whitelist| {
				whitelist
					.split(',')
					.map(str::trim)
					.filter(|address| !address.is_empty())
					.collect()
			})
			.unwrap_or_default()
	}

	/// The `debugging.useforwardedip` flag
	///
	/// `Ok(None)` when unset. Accepts TOML booleans, `0`/`1`, and the
	/// strings `true`/`false`, `yes`/`no`, `on`/`off`, `1`/`0` in any case.
	pub fn use_forwarded_ip(&self) -> Result<Option<bool>> {
		let Some(value) = self
			.debugging
			.as_ref()
			.and_then(|section| section.useforwardedip.as_ref())
		else {
			return Ok(None);
		};
		parse_flag(value)
			.map(Some)
			.ok_or_else(|| DebuggingError::InvalidBoolean {
				key: "debugging.useforwardedip".to_string(),
				value: value.to_string(),
			})
	}
}

fn parse_flag(value: &toml::Value) -> Option<bool> {
	match value {
		toml::Value::Boolean(flag) => Some(*flag),
		toml::Value::Integer(1) => Some(true),
		toml::Value::Integer(0) => Some(false),
		toml::Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
			"1" | "yes" | "true" | "on" => Some(true),
			"0" | "no" | "false" | "off" => Some(false),
			_ => None,
		},
		_ => None,
	}
}
