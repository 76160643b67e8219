//! # nulltype
//!
//! Nullable scalar types that keep SQL `NULL` and JSON `null` distinct from
//! zero while a value travels between a database driver, Rust code and a JSON
//! payload.
//!
//! ## Features
//!
//! - **Driver scanning**: read a [`DatabaseValue`] (null, text, bytes, or any
//!   signed integer width) into a [`NullInt64`]
//! - **Driver parameters**: produce `Option<i64>` or a [`DatabaseValue`] for binding
//! - **JSON**: encode to `null` or an integer literal, decode either back
//! - **serde**: use [`NullInt64`] as a field in serde-derived structs
//! - **SQLite**: `rusqlite` `FromSql`/`ToSql` implementations (feature `sqlite`, on by default)
//! - **Tracing**: rejected inputs emit `trace!` events (feature `tracing`, on by default)
//!
//! ## Quick Start
//!
//! ```rust
//! use nulltype::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut id = NullInt64::null();
//!
//!     // Scan a driver value
//!     id.scan(&DatabaseValue::from("123"))?;
//!     assert_eq!(id.as_option(), Some(123));
//!
//!     // Hand it back to a driver
//!     assert_eq!(id.to_database_value()?, Some(123));
//!
//!     // JSON round trip
//!     let decoded = NullInt64::from_json(&id.to_json())?;
//!     assert_eq!(decoded, id);
//!
//!     id.scan(&DatabaseValue::Null)?;
//!     assert_eq!(id.to_json(), b"null");
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Reading from SQLite
//!
//! ```rust
//! # #[cfg(feature = "sqlite")]
//! # fn main() -> rusqlite::Result<()> {
//! use nulltype::NullInt64;
//! use rusqlite::Connection;
//!
//! let conn = Connection::open_in_memory()?;
//! conn.execute("CREATE TABLE items (id INTEGER PRIMARY KEY, parent INTEGER)", [])?;
//! conn.execute(
//!     "INSERT INTO items (id, parent) VALUES (?1, ?2)",
//!     rusqlite::params![1, NullInt64::null()],
//! )?;
//!
//! let parent: NullInt64 =
//!     conn.query_row("SELECT parent FROM items WHERE id = 1", [], |row| row.get(0))?;
//! assert!(parent.is_null());
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "sqlite"))]
//! # fn main() {}
//! ```

/// Core nullable types and traits
pub mod core;

/// Database driver bindings
pub mod backends;

/// Prelude for convenient imports
///
/// ```rust
/// use nulltype::prelude::*;
///
/// let n = NullInt64::new(5, true);
/// assert!(!n.is_zero_or_null());
/// ```
pub mod prelude {
    pub use crate::core::{DatabaseValue, NullInt64, NullTypeError, Result, Scanner, Valuer};
}

// Re-export at root level for convenience
pub use crate::core::{DatabaseValue, NullInt64, NullTypeError, Result, Scanner, Valuer};
