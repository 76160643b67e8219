//! SQLite driver binding
//!
//! This module lets nullable types be read from and bound to `rusqlite`
//! statements by routing driver values through [`DatabaseValue`].

use crate::core::{
    driver::Valuer, error::NullTypeError, null_int64::NullInt64, value::DatabaseValue,
};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef};

/// Convert a rusqlite column value to a DatabaseValue
///
/// Text columns are decoded lossily, so invalid UTF-8 reaches the scanner as
/// U+FFFD rather than failing here.
pub fn value_ref_to_database_value(value: ValueRef<'_>) -> DatabaseValue {
    match value {
        ValueRef::Null => DatabaseValue::Null,
        ValueRef::Integer(v) => DatabaseValue::Long(v),
        ValueRef::Real(v) => DatabaseValue::Double(v),
        ValueRef::Text(v) => DatabaseValue::String(String::from_utf8_lossy(v).to_string()),
        ValueRef::Blob(v) => DatabaseValue::Bytes(v.to_vec()),
    }
}

/// Convert a DatabaseValue to an owned rusqlite parameter
pub fn database_value_to_sql(value: &DatabaseValue) -> ToSqlOutput<'static> {
    let value = match value {
        DatabaseValue::Null => Value::Null,
        DatabaseValue::Bool(v) => Value::Integer(i64::from(*v)),
        DatabaseValue::Short(v) => Value::Integer(i64::from(*v)),
        DatabaseValue::Int(v) => Value::Integer(i64::from(*v)),
        DatabaseValue::Long(v) => Value::Integer(*v),
        DatabaseValue::Native(v) => Value::Integer(*v as i64),
        DatabaseValue::Float(v) => Value::Real(f64::from(*v)),
        DatabaseValue::Double(v) => Value::Real(*v),
        DatabaseValue::String(v) => Value::Text(v.clone()),
        DatabaseValue::Bytes(v) => Value::Blob(v.clone()),
        DatabaseValue::Timestamp(v) => Value::Integer(*v),
    };
    ToSqlOutput::Owned(value)
}

fn to_sql_error(err: NullTypeError) -> rusqlite::Error {
    rusqlite::Error::ToSqlConversionFailure(Box::new(err))
}

impl FromSql for NullInt64 {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        NullInt64::try_from(value_ref_to_database_value(value))
            .map_err(|err| FromSqlError::Other(Box::new(err)))
    }
}

impl ToSql for NullInt64 {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let value = self.to_value().map_err(to_sql_error)?;
        Ok(database_value_to_sql(&value))
    }
}
