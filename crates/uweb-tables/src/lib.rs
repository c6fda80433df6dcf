//! Declarative HTML table rendering for uweb pages
//!
//! Tables are declared once as an ordered list of columns and rendered per
//! request against whatever rows the page handler fetched. Header cells of
//! sortable columns link to the same page with the sort toggled, and the
//! complete renderer adds a search form and a pagination bar.
//!
//! # Features
//!
//! - **Attribute paths**: columns point at row data through dotted paths
//!   (`client.name`) resolved with the [`Attributes`] trait
//! - **Column types**: [`PlainColumn`] and [`LinkColumn`] with href templates
//! - **Sorting**: `?sort_by=<attr>&sort_direction=ASC|DESC`
//! - **Pagination**: `?page=N` with a sliding window of page links
//! - **Search**: a GET form submitting `?query=...`
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[TableDefinition] --> B[Columns]
//!     A --> C[TableRenderer]
//!     D[Table] --> A
//!     D --> E[Rows]
//!     C --> F[TableComponents]
//!     F --> G[SearchField]
//!     F --> H[HtmlTable]
//!     F --> I[PaginationBar]
//!     H --> J[TableHeader]
//!     H --> K[TableBody]
//! ```
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use uweb_tables::{CompleteTableRenderer, LinkColumn, PlainColumn, Table, TableDefinition};
//!
//! let definition = TableDefinition::builder()
//!     .column(PlainColumn::new("Title", "title").sortable(true))
//!     .column(LinkColumn::new("Client", "client.name", "/client/{client.ID}"))
//!     .renderer(CompleteTableRenderer::new())
//!     .build();
//!
//! let invoices = vec![
//!     json!({"title": "March", "client": {"ID": 7, "name": "Acme"}}),
//! ];
//! let html = Table::new(&definition, &invoices)
//!     .total_pages(1)
//!     .render()
//!     .unwrap();
//! assert!(html.contains("<td>March</td>"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod attr;
pub mod column;
pub mod components;
pub mod element;
pub mod error;
pub mod pagination;
pub mod request;
pub mod sorting;
pub mod table;
mod templates;

// Re-exports for convenience
pub use attr::{Attr, Attributes};
pub use column::{Column, ColumnAttr, LinkColumn, PlainColumn};
pub use components::{
	CompleteTableRenderer, Component, HtmlTable, PaginationBar, SearchField, SimpleTableRenderer,
	TableBody, TableComponents, TableHeader, TableRenderer,
};
pub use element::Element;
pub use error::{Result, TableError};
pub use pagination::{Pagination, current_page, total_pages};
pub use request::{QueryParams, RequestData};
pub use sorting::SortDirection;
pub use table::{Table, TableDefinition, TableDefinitionBuilder};
