//! Database value types
//!
//! This module defines the closed set of values a database driver can hand to
//! a nullable type when scanning, and that a nullable type hands back when
//! producing a parameter.

use serde::{Deserialize, Serialize};

/// Database value as delivered by (or passed to) a driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DatabaseValue {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// 16-bit integer
    Short(i16),
    /// 32-bit integer
    Int(i32),
    /// 64-bit integer
    Long(i64),
    /// Platform-width integer
    Native(isize),
    /// 32-bit floating point
    Float(f32),
    /// 64-bit floating point
    Double(f64),
    /// String value
    String(String),
    /// Binary data
    Bytes(Vec<u8>),
    /// Timestamp (Unix timestamp in microseconds)
    Timestamp(i64),
}

impl DatabaseValue {
    /// Get the value as an i64, widening smaller integers
    ///
    /// Only integer variants convert. `Native` values outside the i64 range
    /// return `None`. Text, floats and timestamps return `None`
    /// even when they hold something numeric.
    pub fn as_long(&self) -> Option<i64> {
        match self {
            DatabaseValue::Short(v) => Some(i64::from(*v)),
            DatabaseValue::Int(v) => Some(i64::from(*v)),
            DatabaseValue::Long(v) => Some(*v),
            DatabaseValue::Native(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Get the text of a String or Bytes value (zero-copy)
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            DatabaseValue::Bytes(b) => Some(b),
            DatabaseValue::String(s) => Some(s.as_bytes()),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, DatabaseValue::Null)
    }

    /// Get the type name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            DatabaseValue::Null => "null",
            DatabaseValue::Bool(_) => "bool",
            DatabaseValue::Short(_) => "short",
            DatabaseValue::Int(_) => "int",
            DatabaseValue::Long(_) => "long",
            DatabaseValue::Native(_) => "native",
            DatabaseValue::Float(_) => "float",
            DatabaseValue::Double(_) => "double",
            DatabaseValue::String(_) => "string",
            DatabaseValue::Bytes(_) => "bytes",
            DatabaseValue::Timestamp(_) => "timestamp",
        }
    }
}

impl From<bool> for DatabaseValue {
    fn from(v: bool) -> Self {
        DatabaseValue::Bool(v)
    }
}

impl From<i16> for DatabaseValue {
    fn from(v: i16) -> Self {
        DatabaseValue::Short(v)
    }
}

impl From<i32> for DatabaseValue {
    fn from(v: i32) -> Self {
        DatabaseValue::Int(v)
    }
}

impl From<i64> for DatabaseValue {
    fn from(v: i64) -> Self {
        DatabaseValue::Long(v)
    }
}

impl From<isize> for DatabaseValue {
    fn from(v: isize) -> Self {
        DatabaseValue::Native(v)
    }
}

impl From<f32> for DatabaseValue {
    fn from(v: f32) -> Self {
        DatabaseValue::Float(v)
    }
}

impl From<f64> for DatabaseValue {
    fn from(v: f64) -> Self {
        DatabaseValue::Double(v)
    }
}

impl From<String> for DatabaseValue {
    fn from(v: String) -> Self {
        DatabaseValue::String(v)
    }
}

impl From<&str> for DatabaseValue {
    fn from(v: &str) -> Self {
        DatabaseValue::String(v.to_string())
    }
}

impl From<Vec<u8>> for DatabaseValue {
    fn from(v: Vec<u8>) -> Self {
        DatabaseValue::Bytes(v)
    }
}

impl From<&[u8]> for DatabaseValue {
    fn from(v: &[u8]) -> Self {
        DatabaseValue::Bytes(v.to_vec())
    }
}

impl<T: Into<DatabaseValue>> From<Option<T>> for DatabaseValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(val) => val.into(),
            None => DatabaseValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_widening() {
        assert_eq!(DatabaseValue::Short(-7).as_long(), Some(-7));
        assert_eq!(DatabaseValue::Int(i32::MAX).as_long(), Some(i64::from(i32::MAX)));
        assert_eq!(DatabaseValue::Long(i64::MIN).as_long(), Some(i64::MIN));
        assert_eq!(DatabaseValue::Native(42).as_long(), Some(42));
    }

    #[test]
    fn test_non_integers_do_not_widen() {
        assert_eq!(DatabaseValue::from("123").as_long(), None);
        assert_eq!(DatabaseValue::Double(1.0).as_long(), None);
        assert_eq!(DatabaseValue::Bool(true).as_long(), None);
        assert_eq!(DatabaseValue::Timestamp(1).as_long(), None);
        assert_eq!(DatabaseValue::Null.as_long(), None);
    }

    #[test]
    fn test_value_from_types() {
        let val: DatabaseValue = 42i32.into();
        assert_eq!(val, DatabaseValue::Int(42));

        let val: DatabaseValue = 42i16.into();
        assert_eq!(val, DatabaseValue::Short(42));

        let val: DatabaseValue = "hello".into();
        assert_eq!(val, DatabaseValue::String("hello".to_string()));

        let val: DatabaseValue = b"12".as_slice().into();
        assert_eq!(val, DatabaseValue::Bytes(vec![b'1', b'2']));

        let val: DatabaseValue = Some(42i64).into();
        assert_eq!(val, DatabaseValue::Long(42));

        let val: DatabaseValue = Option::<i64>::None.into();
        assert_eq!(val, DatabaseValue::Null);
    }

    #[test]
    fn test_text_accessors() {
        let val = DatabaseValue::from("99");
        assert_eq!(val.as_bytes(), Some(b"99".as_slice()));

        let val = DatabaseValue::from(vec![0xffu8]);
        assert_eq!(val.as_bytes(), Some([0xffu8].as_slice()));

        assert_eq!(DatabaseValue::Long(99).as_bytes(), None);
        assert_eq!(DatabaseValue::Null.as_bytes(), None);
    }

    #[test]
    fn test_value_type_name() {
        assert_eq!(DatabaseValue::Null.type_name(), "null");
        assert_eq!(DatabaseValue::Bool(true).type_name(), "bool");
        assert_eq!(DatabaseValue::Short(1).type_name(), "short");
        assert_eq!(DatabaseValue::Int(42).type_name(), "int");
        assert_eq!(DatabaseValue::Long(42).type_name(), "long");
        assert_eq!(DatabaseValue::Native(42).type_name(), "native");
        assert_eq!(DatabaseValue::Double(2.5).type_name(), "double");
        assert_eq!(
            DatabaseValue::String("test".to_string()).type_name(),
            "string"
        );
        assert_eq!(DatabaseValue::Timestamp(0).type_name(), "timestamp");
    }
}
