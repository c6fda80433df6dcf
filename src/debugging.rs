//! Restricted debugging module.

#[cfg(feature = "debugging")]
pub use uweb_debugging::*;
