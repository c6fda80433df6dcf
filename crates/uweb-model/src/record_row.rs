//! Model records as table rows
//!
//! Table columns look values up by dotted paths such as `client.name`.
//! [`RecordRow`] serializes a record once and lets related records be
//! nested under their foreign key column, so those paths resolve.

use crate::error::{ModelError, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use uweb_tables::{Attr, Attributes};

/// A serialized record whose fields are reachable by column paths
///
/// # Examples
///
/// ```
/// use serde::Serialize;
/// use serde_json::json;
/// use uweb_model::RecordRow;
/// use uweb_tables::attr::resolve;
///
/// #[derive(Serialize)]
/// struct Invoice {
///     title: String,
///     client: i64,
/// }
///
/// let row = RecordRow::from_record(&Invoice { title: "March".into(), client: 7 })
///     .unwrap()
///     .with_related("client", &json!({"ID": 7, "name": "Acme"}))
///     .unwrap();
///
/// assert_eq!(resolve(&row, "client.name").unwrap(), Some(json!("Acme")));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RecordRow(Map<String, Value>);

impl RecordRow {
	/// Serializes `record`, which must serialize to a map
	pub fn from_record<M: Serialize + ?Sized>(record: &M) -> Result<Self> {
		match encode(record)? {
			Value::Object(fields) => Ok(Self(fields)),
			other => Err(ModelError::Encode(format!(
				"record serialized to {}, expected a map",
				kind(&other)
			))),
		}
	}

	/// Nests `related` under `name`, replacing the plain key stored there
	pub fn with_related<R: Serialize + ?Sized>(mut self, name: &str, related: &R) -> Result<Self> {
		self.0.insert(name.to_string(), encode(related)?);
		Ok(self)
	}

	/// The serialized fields
	pub fn fields(&self) -> &Map<String, Value> {
		&self.0
	}

	/// Consumes the row, returning its fields
	pub fn into_fields(self) -> Map<String, Value> {
		self.0
	}
}

fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
	serde_json::to_value(value).map_err(|e| ModelError::Encode(e.to_string()))
}

fn kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "a map",
	}
}

impl Attributes for RecordRow {
	fn get_item(&self, key: &str) -> Option<Attr<'_>> {
		self.0.get_item(key)
	}

	fn to_value(&self) -> Value {
		Value::Object(self.0.clone())
	}
}

impl From<Map<String, Value>> for RecordRow {
	fn from(fields: Map<String, Value>) -> Self {
		Self(fields)
	}
}
