//! Attribute path resolution
//!
//! Columns point at row data through dotted paths such as `"client.name"`.
//! A row exposes its data through the [`Attributes`] trait; each path
//! segment is looked up mapping-style first ([`Attributes::get_item`]) and
//! attribute-style second ([`Attributes::get_attr`]). Lookups may return a
//! deferred [`Attr::Call`], which is invoked with no arguments before the
//! walk continues.
//!
//! ```rust
//! use serde_json::json;
//! use uweb_tables::attr::resolve;
//!
//! let invoice = json!({"title": "March", "client": {"ID": 7, "name": "Acme"}});
//! assert_eq!(resolve(&invoice, "client.ID").unwrap(), Some(json!(7)));
//! assert_eq!(resolve(&invoice, "title").unwrap(), Some(json!("March")));
//! ```

use crate::error::{Result, TableError};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// The outcome of looking up a single path segment
pub enum Attr<'a> {
	/// A plain value
	Value(Value),
	/// A nested object borrowed from the parent
	Ref(&'a dyn Attributes),
	/// A nested object computed during the lookup
	Owned(Box<dyn Attributes + 'a>),
	/// A deferred value, invoked with no arguments when reached
	Call(Box<dyn FnOnce() -> Attr<'a> + 'a>),
}

impl<'a> Attr<'a> {
	/// Wraps anything convertible into a JSON value
	pub fn value(value: impl Into<Value>) -> Self {
		Attr::Value(value.into())
	}

	/// Wraps a closure that is called when the walk reaches it
	pub fn call<F>(f: F) -> Self
	where
		F: FnOnce() -> Attr<'a> + 'a,
	{
		Attr::Call(Box::new(f))
	}

	/// Collapses the attribute into a plain value, invoking deferred calls
	pub fn into_value(self) -> Value {
		match self {
			Attr::Value(value) => value,
			Attr::Ref(target) => target.to_value(),
			Attr::Owned(target) => target.to_value(),
			Attr::Call(f) => f().into_value(),
		}
	}
}

impl fmt::Debug for Attr<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Attr::Value(value) => f.debug_tuple("Value").field(value).finish(),
			Attr::Ref(target) => f.debug_tuple("Ref").field(&target.to_value()).finish(),
			Attr::Owned(target) => f.debug_tuple("Owned").field(&target.to_value()).finish(),
			Attr::Call(_) => f.write_str("Call(..)"),
		}
	}
}

/// Row-like objects whose fields can be reached by name
pub trait Attributes {
	/// Mapping-style lookup, tried first for every segment
	fn get_item(&self, key: &str) -> Option<Attr<'_>>;

	/// Attribute-style lookup, tried when [`get_item`](Self::get_item) finds nothing
	fn get_attr(&self, _name: &str) -> Option<Attr<'_>> {
		None
	}

	/// Plain representation used when a path ends on this object
	fn to_value(&self) -> Value {
		Value::Null
	}

	/// Whether this object stands for a missing value
	fn is_null(&self) -> bool {
		false
	}
}

/// Resolves a dotted attribute path against a row
///
/// Returns `Ok(None)` when an intermediate segment is `null` or missing, or
/// when the final value is `null`. A missing final segment is an error.
pub fn resolve(item: &dyn Attributes, path: &str) -> Result<Option<Value>> {
	let segments: Vec<&str> = path.split('.').collect();
	walk(Attr::Ref(item), &segments, path)
}

fn walk(current: Attr<'_>, segments: &[&str], path: &str) -> Result<Option<Value>> {
	let Some((segment, rest)) = segments.split_first() else {
		return Ok(match current.into_value() {
			Value::Null => None,
			value => Some(value),
		});
	};

	match current {
		Attr::Call(f) => walk(f(), segments, path),
		Attr::Value(Value::Null) => Ok(None),
		Attr::Ref(target) if target.is_null() => Ok(None),
		Attr::Owned(target) if target.is_null() => Ok(None),
		Attr::Value(value) => step(&value, segment, rest, path),
		Attr::Ref(target) => step(target, segment, rest, path),
		Attr::Owned(target) => step(&*target, segment, rest, path),
	}
}

fn step(target: &dyn Attributes, segment: &str, rest: &[&str], path: &str) -> Result<Option<Value>> {
	match target.get_item(segment).or_else(|| target.get_attr(segment)) {
		Some(next) => walk(next, rest, path),
		None if rest.is_empty() => Err(TableError::MissingAttribute {
			path: path.to_string(),
			segment: segment.to_string(),
		}),
		None => Ok(None),
	}
}

/// Formats a resolved value for display inside a cell
///
/// Strings are shown as-is, `null` as an empty string and compound values
/// as JSON.
pub fn display_value(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(s) => s.clone(),
		Value::Bool(b) => b.to_string(),
		Value::Number(n) => n.to_string(),
		other => other.to_string(),
	}
}

impl Attributes for Value {
	fn get_item(&self, key: &str) -> Option<Attr<'_>> {
		let found = match self {
			Value::Object(map) => map.get(key)?,
			Value::Array(items) => items.get(key.parse::<usize>().ok()?)?,
			_ => return None,
		};
		Some(Attr::Ref(found))
	}

	fn to_value(&self) -> Value {
		self.clone()
	}

	fn is_null(&self) -> bool {
		Value::is_null(self)
	}
}

impl Attributes for Map<String, Value> {
	fn get_item(&self, key: &str) -> Option<Attr<'_>> {
		self.get(key).map(|value| Attr::Ref(value as &dyn Attributes))
	}

	fn to_value(&self) -> Value {
		Value::Object(self.clone())
	}
}

impl Attributes for HashMap<String, Value> {
	fn get_item(&self, key: &str) -> Option<Attr<'_>> {
		self.get(key).map(|value| Attr::Ref(value as &dyn Attributes))
	}

	fn to_value(&self) -> Value {
		Value::Object(self.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
	}
}

impl Attributes for BTreeMap<String, Value> {
	fn get_item(&self, key: &str) -> Option<Attr<'_>> {
		self.get(key).map(|value| Attr::Ref(value as &dyn Attributes))
	}

	fn to_value(&self) -> Value {
		Value::Object(self.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
	}
}

impl<T: Attributes + ?Sized> Attributes for &T {
	fn get_item(&self, key: &str) -> Option<Attr<'_>> {
		(**self).get_item(key)
	}

	fn get_attr(&self, name: &str) -> Option<Attr<'_>> {
		(**self).get_attr(name)
	}

	fn to_value(&self) -> Value {
		(**self).to_value()
	}

	fn is_null(&self) -> bool {
		(**self).is_null()
	}
}

impl<T: Attributes + ?Sized> Attributes for Box<T> {
	fn get_item(&self, key: &str) -> Option<Attr<'_>> {
		(**self).get_item(key)
	}

	fn get_attr(&self, name: &str) -> Option<Attr<'_>> {
		(**self).get_attr(name)
	}

	fn to_value(&self) -> Value {
		(**self).to_value()
	}

	fn is_null(&self) -> bool {
		(**self).is_null()
	}
}
