//! # uweb-plugins
//!
//! Reusable building blocks for uweb-style web applications: listing
//! helpers for database models, declarative HTML tables, access control for
//! detailed exception pages, and a shared HTTP client for API backed models.
//!
//! ## Feature Flags
//!
//! - `tables` - HTML table rendering ([`tables`])
//! - `model` - Searchable, paginated model listings ([`model`]), implies `tables`
//! - `debugging` - Whitelist based exception pages ([`debugging`])
//! - `api` - Retrying HTTP client ([`api`])
//! - `full` (default) - All of the above
//!
//! ## Quick Example
//!
//! ```rust
//! use serde::Serialize;
//! use uweb_plugins::prelude::*;
//!
//! fn invoice_table<M: SearchableTable + Serialize>(
//!     conn: &dyn Connection,
//!     request: &QueryParams,
//! ) -> Result<String, Box<dyn std::error::Error>> {
//!     // Usually declared once, next to the page handler
//!     let definition = TableDefinition::builder()
//!         .column(PlainColumn::new("Title", "title").sortable(true))
//!         .column(LinkColumn::new("Client", "client.name", "/client/{client.ID}"))
//!         .renderer(CompleteTableRenderer::new())
//!         .build();
//!
//!     let page = M::integrated_table(conn, request, 25, TableOptions::new())?;
//!     let rows = page.rows()?;
//!     let html = Table::from_request(&definition, &rows, request, page.total_pages(25)?)
//!         .search_url("/invoices")
//!         .render()?;
//!     Ok(html)
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

#[cfg(feature = "api")]
pub mod api;
#[cfg(feature = "debugging")]
pub mod debugging;
#[cfg(feature = "model")]
pub mod model;
#[cfg(feature = "tables")]
pub mod tables;

/// Commonly used types
pub mod prelude {
	#[cfg(feature = "tables")]
	pub use crate::tables::{
		Attributes, Column, CompleteTableRenderer, LinkColumn, PlainColumn, QueryParams,
		RequestData, SimpleTableRenderer, SortDirection, Table, TableDefinition, TableRenderer,
	};

	#[cfg(feature = "model")]
	pub use crate::model::{
		Connection, FromRow, ListOptions, Listing, Model, RichModel, RichVersionedRecord,
		RecordRow, SearchableTable, TableOptions, TablePage,
	};

	#[cfg(feature = "debugging")]
	pub use crate::debugging::{DebuggingSettings, RequestEnv, RestrictedDebugging};

	#[cfg(feature = "api")]
	pub use crate::api::{ApiClient, ApiClientConfig};
}
