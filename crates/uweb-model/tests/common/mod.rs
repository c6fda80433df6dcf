//! Recording fakes for the database collaborator traits

#![allow(dead_code)]

use serde::Deserialize;
use serde_json::json;
use std::cell::RefCell;
use std::collections::VecDeque;
use uweb_model::model::decode_row;
use uweb_model::{
	Connection, Cursor, DbError, Dialect, FromRow, Model, ModelCache, Relation, ResultSet,
	RichModel, RichVersionedRecord, Row, SearchableTable, TableMeta, Value,
};

/// A statement as it reached the cursor
#[derive(Debug, Clone, PartialEq)]
pub struct Executed {
	pub sql: String,
	pub values: Vec<Value>,
}

/// Connection answering statements from a queue and recording them
pub struct RecordingConnection {
	dialect: Dialect,
	responses: RefCell<VecDeque<Result<ResultSet, DbError>>>,
	executed: RefCell<Vec<Executed>>,
	cache: Option<ModelCache>,
	checkouts: RefCell<usize>,
}

impl RecordingConnection {
	pub fn new(dialect: Dialect) -> Self {
		Self {
			dialect,
			responses: RefCell::new(VecDeque::new()),
			executed: RefCell::new(Vec::new()),
			cache: None,
			checkouts: RefCell::new(0),
		}
	}

	pub fn with_cache(mut self) -> Self {
		self.cache = Some(ModelCache::new());
		self
	}

	pub fn respond(self, response: Result<ResultSet, DbError>) -> Self {
		self.responses.borrow_mut().push_back(response);
		self
	}

	pub fn respond_rows(self, rows: Vec<serde_json::Value>) -> Self {
		self.respond(Ok(ResultSet::new(rows.into_iter().map(to_row).collect())))
	}

	pub fn respond_count(self, column: &str, count: u64) -> Self {
		self.respond_rows(vec![json!({ column: count })])
	}

	pub fn executed(&self) -> Vec<Executed> {
		self.executed.borrow().clone()
	}

	pub fn model_cache_ref(&self) -> &ModelCache {
		self.cache.as_ref().expect("connection created without a cache")
	}

	pub fn checkouts(&self) -> usize {
		*self.checkouts.borrow()
	}
}

impl Connection for RecordingConnection {
	fn dialect(&self) -> Dialect {
		self.dialect
	}

	fn cursor(&self) -> Result<Box<dyn Cursor + '_>, DbError> {
		*self.checkouts.borrow_mut() += 1;
		Ok(Box::new(RecordingCursor { connection: self }))
	}

	fn model_cache(&self) -> Option<&ModelCache> {
		self.cache.as_ref()
	}
}

struct RecordingCursor<'a> {
	connection: &'a RecordingConnection,
}

impl Cursor for RecordingCursor<'_> {
	fn execute(&mut self, sql: &str, values: &[Value]) -> Result<ResultSet, DbError> {
		self.connection.executed.borrow_mut().push(Executed {
			sql: sql.to_string(),
			values: values.to_vec(),
		});
		self.connection
			.responses
			.borrow_mut()
			.pop_front()
			.unwrap_or_else(|| Ok(ResultSet::default()))
	}
}

pub fn to_row(value: serde_json::Value) -> Row {
	match value {
		serde_json::Value::Object(map) => map,
		other => panic!("row must be an object, got {other}"),
	}
}

pub const CLIENT: TableMeta = TableMeta::new("client");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Client {
	#[serde(rename = "ID")]
	pub id: i64,
	pub name: String,
}

impl FromRow for Client {
	fn from_row(row: Row) -> uweb_model::Result<Self> {
		decode_row(row)
	}
}

impl Model for Client {
	const META: TableMeta = CLIENT;
	const SEARCHABLE_COLUMNS: &'static [&'static str] = &["name"];

	fn key(&self) -> Value {
		self.id.into()
	}
}

impl RichModel for Client {}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Invoice {
	#[serde(rename = "ID")]
	pub id: i64,
	pub name: String,
	pub client: i64,
}

impl FromRow for Invoice {
	fn from_row(row: Row) -> uweb_model::Result<Self> {
		decode_row(row)
	}
}

impl Model for Invoice {
	const META: TableMeta = TableMeta::new("invoice");
	const SEARCHABLE_COLUMNS: &'static [&'static str] = &["name", "client.email"];
	const RELATIONS: &'static [Relation] = &[Relation::new("client", CLIENT)];

	fn key(&self) -> Value {
		self.id.into()
	}
}

impl RichModel for Invoice {}

impl SearchableTable for Invoice {
	fn list_page(
		connection: &dyn Connection,
		options: uweb_model::ListOptions,
	) -> uweb_model::Result<uweb_model::Listing<Self>> {
		<Self as RichModel>::list(connection, options)
	}
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Contract {
	#[serde(rename = "ID")]
	pub id: i64,
	#[serde(rename = "contractNumber")]
	pub contract_number: i64,
	pub client: i64,
}

impl FromRow for Contract {
	fn from_row(row: Row) -> uweb_model::Result<Self> {
		decode_row(row)
	}
}

impl Model for Contract {
	const META: TableMeta = TableMeta::new("contract").with_record_key("contractNumber");
	const SEARCHABLE_COLUMNS: &'static [&'static str] = &["client.name"];
	const RELATIONS: &'static [Relation] = &[Relation::new("client", CLIENT)];

	fn key(&self) -> Value {
		self.id.into()
	}
}

impl RichVersionedRecord for Contract {}

impl SearchableTable for Contract {
	fn list_page(
		connection: &dyn Connection,
		options: uweb_model::ListOptions,
	) -> uweb_model::Result<uweb_model::Listing<Self>> {
		<Self as RichVersionedRecord>::list(connection, options)
	}
}
