//! Listing helpers for plain records

use crate::connection::Connection;
use crate::error::Result;
use crate::listing;
use crate::model::{ListOptions, Listing, Model};
use crate::query::{ColumnRef, Condition};

/// Searchable, paginated listing for a [`Model`]
///
/// Implement it with an empty `impl` block to opt a model in.
///
/// # Example
///
/// ```rust
/// use uweb_model::{FromRow, ListOptions, Model, Relation, RichModel, Row, TableMeta, Value};
/// use uweb_model::model::decode_row;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Invoice {
///     #[serde(rename = "ID")]
///     id: i64,
///     title: String,
/// }
///
/// impl FromRow for Invoice {
///     fn from_row(row: Row) -> uweb_model::Result<Self> {
///         decode_row(row)
///     }
/// }
///
/// impl Model for Invoice {
///     const META: TableMeta = TableMeta::new("invoice");
///     const SEARCHABLE_COLUMNS: &'static [&'static str] = &["title", "client.name"];
///     const RELATIONS: &'static [Relation] = &[Relation::new("client", TableMeta::new("client"))];
///
///     fn key(&self) -> Value {
///         self.id.into()
///     }
/// }
///
/// impl RichModel for Invoice {}
///
/// let options = ListOptions::new().search("acme").limit(10).with_total();
/// # let _ = options;
/// ```
pub trait RichModel: Model {
	/// Lists records of this model
	///
	/// A non-blank search adds an OR'ed `LIKE` over
	/// [`Model::SEARCHABLE_COLUMNS`], joins the relations they name and
	/// groups on the key column. The total is only set when
	/// [`ListOptions::with_total`] was requested.
	fn list(connection: &dyn Connection, options: ListOptions) -> Result<Listing<Self>> {
		let prepared = listing::prepare::<Self>(connection, options, true)?;
		let label = format!("{} Record.List", Self::META.table_name);
		listing::run(
			connection,
			&prepared.query,
			prepared.with_total,
			&label,
			prepared.full_rows,
		)
	}

	/// Lists the children of this record
	///
	/// Children reference their parent through a column named after the
	/// parent's table.
	fn paged_children<C: RichModel>(
		&self,
		connection: &dyn Connection,
		options: ListOptions,
	) -> Result<Listing<C>> {
		let parent = ColumnRef::qualified(C::META.table_name, Self::META.table_name);
		C::list(connection, options.condition(Condition::eq(parent, self.key())))
	}
}
