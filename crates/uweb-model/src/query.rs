//! Parameterized SQL generation
//!
//! Listings are described by a [`SelectQuery`] and turned into SQL text plus
//! bound values for one of the supported [`Dialect`]s. Values never end up
//! in the SQL text; identifiers are quoted unless escaping is switched off.

mod condition;
mod dialect;
mod select;
mod writer;

pub use condition::{ColumnRef, Condition, like_pattern};
pub use dialect::Dialect;
pub use select::{Fields, OrderBy, SelectQuery, VersionsJoin};
pub use writer::SqlWriter;
