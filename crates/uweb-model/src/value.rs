//! Bound query parameter values

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value bound to a query placeholder
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
	/// SQL `NULL`
	#[default]
	Null,
	/// Boolean
	Bool(bool),
	/// Signed integer
	Int(i64),
	/// Unsigned integer
	UInt(u64),
	/// Floating point number
	Double(f64),
	/// Text
	String(String),
}

impl Value {
	/// Whether this is SQL `NULL`
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// Reads a JSON column value, as returned in a row
	pub fn from_json(value: &serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Value::Null,
			serde_json::Value::Bool(b) => Value::Bool(*b),
			serde_json::Value::Number(n) => {
				if let Some(i) = n.as_i64() {
					Value::Int(i)
				} else if let Some(u) = n.as_u64() {
					Value::UInt(u)
				} else {
					Value::Double(n.as_f64().unwrap_or_default())
				}
			}
			serde_json::Value::String(s) => Value::String(s.clone()),
			other => Value::String(other.to_string()),
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Null => f.write_str("NULL"),
			Value::Bool(b) => write!(f, "{b}"),
			Value::Int(i) => write!(f, "{i}"),
			Value::UInt(u) => write!(f, "{u}"),
			Value::Double(d) => write!(f, "{d}"),
			Value::String(s) => f.write_str(s),
		}
	}
}

macro_rules! impl_from {
	($($ty:ty => $variant:ident as $target:ty),* $(,)?) => {
		$(
			impl From<$ty> for Value {
				fn from(value: $ty) -> Self {
					Value::$variant(<$target>::from(value))
				}
			}
		)*
	};
}

impl_from! {
	bool => Bool as bool,
	i32 => Int as i64,
	i64 => Int as i64,
	u32 => UInt as u64,
	u64 => UInt as u64,
	f64 => Double as f64,
	String => String as String,
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::String(value.to_string())
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Value::Null, Into::into)
	}
}
