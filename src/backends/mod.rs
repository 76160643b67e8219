//! Database driver bindings
//!
//! This module contains conversions between the nullable types and concrete
//! database driver crates.

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "sqlite")]
pub use sqlite::{database_value_to_sql, value_ref_to_database_value};
