//! Core nullable types and driver traits
//!
//! This module provides the fundamental building blocks of the crate: the
//! driver value enum, the scan/value traits, error types, and the nullable
//! types themselves.

pub mod driver;
pub mod error;
pub mod null_int64;
pub mod value;

// Re-export commonly used types
pub use driver::{Scanner, Valuer};
pub use error::{NullTypeError, Result};
pub use null_int64::NullInt64;
pub use value::DatabaseValue;
