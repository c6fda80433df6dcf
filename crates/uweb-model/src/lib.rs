//! Listing helpers for uweb Record and VersionedRecord models
//!
//! This crate adds a single listing entry point to database-backed models:
//! filtering, ordering, limit/offset paging, an optional unlimited total and
//! free-text search across declared searchable columns, including columns
//! of one level of related tables. All SQL is generated with bound
//! parameters.
//!
//! The host framework provides the database through the [`Connection`] and
//! [`Cursor`] traits; models describe their table with [`Model`].
//!
//! # Features
//!
//! - **RichModel**: listing of plain records, children of a record
//! - **RichVersionedRecord**: listing of the newest revision per record
//! - **SearchableTable**: one-call listing driven by request parameters,
//!   ready for [`uweb_tables::Table`]
//! - **RecordRow**: serialized records with related records nested in,
//!   resolvable by dotted column paths
//! - **Model cache**: query labels and preseeded rows per connection
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[ListOptions] --> B[listing::prepare]
//!     B --> C[search_clause]
//!     B --> D[SelectQuery]
//!     D --> E[SqlWriter]
//!     E --> F[Cursor]
//!     F --> G[Listing]
//!     G --> H[ModelCache]
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod cache;
pub mod connection;
pub mod error;
mod listing;
pub mod model;
pub mod query;
pub mod record_row;
pub mod rich;
pub mod search;
pub mod searchable_table;
pub mod value;
pub mod versioned;

// Re-exports for convenience
pub use cache::ModelCache;
pub use connection::{Connection, Cursor, ResultSet, Row};
pub use error::{DbError, ModelError, Result};
pub use model::{FromRow, ListOptions, Listing, Model, Relation, TableMeta};
pub use query::{ColumnRef, Condition, Dialect, Fields, OrderBy};
pub use record_row::RecordRow;
pub use rich::RichModel;
pub use search::{SearchClause, search_clause};
pub use searchable_table::{SearchableTable, TableOptions, TablePage};
pub use value::Value;
pub use versioned::RichVersionedRecord;
