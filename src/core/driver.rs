//! Driver conversion traits
//!
//! This module defines the two conversions every nullable type provides at the
//! database driver boundary: reading a driver value in, and producing one out.

use super::error::Result;
use super::value::DatabaseValue;

/// Types that can be populated from a driver-supplied value
pub trait Scanner {
    /// Replace the contents of `self` with the value read from `raw`
    ///
    /// Implementations must leave `self` untouched when an error is returned.
    fn scan(&mut self, raw: &DatabaseValue) -> Result<()>;
}

/// Types that can produce a value acceptable to a database driver
pub trait Valuer {
    /// Convert `self` into a driver parameter, `DatabaseValue::Null` for absent values
    fn to_value(&self) -> Result<DatabaseValue>;
}
