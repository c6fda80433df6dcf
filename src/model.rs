//! Listing helpers module.
//!
//! Searchable, paginated listings for `Record` and `VersionedRecord` style
//! models, and the request-driven `integrated_table` helper.

#[cfg(feature = "model")]
pub use uweb_model::*;
