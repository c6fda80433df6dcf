//! Declarative HTML tables module.
//!
//! Columns, renderers, sorting, searching and pagination links.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "tables")]
//! use uweb_plugins::tables::{CompleteTableRenderer, PlainColumn, TableDefinition};
//! ```

#[cfg(feature = "tables")]
pub use uweb_tables::*;
