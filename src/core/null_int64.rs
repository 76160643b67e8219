//! Nullable 64-bit integer
//!
//! [`NullInt64`] pairs an `i64` with a validity flag so that SQL `NULL` and
//! JSON `null` stay distinguishable from zero as a value moves between a
//! database driver, Rust code and a JSON payload.

use std::fmt;

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::driver::{Scanner, Valuer};
use super::error::{NullTypeError, Result};
use super::value::DatabaseValue;

/// An `i64` that may be null
///
/// When `valid` is false the payload carries no meaning. Every path that
/// produces a null through this API stores zero in it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NullInt64 {
    /// Payload, meaningful only when `valid` is true
    pub value: i64,
    /// True when the value is present (not NULL)
    pub valid: bool,
}

impl NullInt64 {
    /// Create a value with both fields set verbatim
    pub const fn new(value: i64, valid: bool) -> Self {
        Self { value, valid }
    }

    /// The null value
    pub const fn null() -> Self {
        Self::new(0, false)
    }

    /// Get the payload regardless of validity
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Check if the value is present
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        !self.valid
    }

    /// Get the value as an `Option`, `None` when null
    pub fn as_option(&self) -> Option<i64> {
        self.valid.then_some(self.value)
    }

    /// True when the payload is zero or the value is null
    ///
    /// A present zero also returns true, so this is not a null check.
    /// Use [`NullInt64::is_null`] for that.
    pub fn is_zero_or_null(&self) -> bool {
        self.value == 0 || !self.valid
    }

    /// Replace `self` with the value read from a driver-supplied `raw`
    ///
    /// Accepts `Null`, base-10 text in `String` or `Bytes`, and the `Short`,
    /// `Int`, `Long` and `Native` integer variants. On error `self` is left
    /// unchanged.
    pub fn scan(&mut self, raw: &DatabaseValue) -> Result<()> {
        *self = Self::try_from(raw)?;
        Ok(())
    }

    /// Produce the value handed to a database driver, `None` for NULL
    pub fn to_database_value(&self) -> Result<Option<i64>> {
        Ok(self.as_option())
    }

    /// Encode as JSON: `null`, or the integer literal
    pub fn to_json(&self) -> Vec<u8> {
        if self.valid {
            serde_json::Number::from(self.value).to_string().into_bytes()
        } else {
            b"null".to_vec()
        }
    }

    /// Replace `self` with the value decoded from JSON `data`
    ///
    /// `data` must be `null` or an integer that fits in an `i64`; `-0` reads
    /// as zero. On error `self` is left unchanged.
    pub fn decode_json(&mut self, data: &[u8]) -> Result<()> {
        *self = serde_json::from_slice(data).map_err(|err| {
            #[cfg(feature = "tracing")]
            tracing::trace!(error = %err, len = data.len(), "rejected JSON for NullInt64");
            NullTypeError::from(err)
        })?;
        Ok(())
    }

    /// Decode a new value from JSON `data`
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let mut out = Self::null();
        out.decode_json(data)?;
        Ok(out)
    }
}

fn parse_int64(text: &str) -> Result<i64> {
    text.parse::<i64>().map_err(|source| {
        #[cfg(feature = "tracing")]
        tracing::trace!(input = text, error = %source, "invalid int64 text");
        NullTypeError::invalid_format(text, source)
    })
}

fn unsupported(raw: &DatabaseValue) -> NullTypeError {
    #[cfg(feature = "tracing")]
    tracing::trace!(type_name = raw.type_name(), "unsupported driver value for NullInt64");
    NullTypeError::unsupported_type(raw.type_name())
}

impl TryFrom<&DatabaseValue> for NullInt64 {
    type Error = NullTypeError;

    fn try_from(raw: &DatabaseValue) -> Result<Self> {
        if raw.is_null() {
            return Ok(Self::null());
        }
        if let Some(value) = raw.as_long() {
            return Ok(Self::new(value, true));
        }
        match raw.as_bytes() {
            // Lossy conversion turns invalid UTF-8 into U+FFFD, which the parser rejects.
            Some(text) => Ok(Self::new(parse_int64(&String::from_utf8_lossy(text))?, true)),
            None => Err(unsupported(raw)),
        }
    }
}

impl TryFrom<DatabaseValue> for NullInt64 {
    type Error = NullTypeError;

    fn try_from(raw: DatabaseValue) -> Result<Self> {
        Self::try_from(&raw)
    }
}

impl Scanner for NullInt64 {
    fn scan(&mut self, raw: &DatabaseValue) -> Result<()> {
        NullInt64::scan(self, raw)
    }
}

impl Valuer for NullInt64 {
    fn to_value(&self) -> Result<DatabaseValue> {
        Ok(DatabaseValue::from(*self))
    }
}

impl From<i64> for NullInt64 {
    fn from(v: i64) -> Self {
        Self::new(v, true)
    }
}

impl From<Option<i64>> for NullInt64 {
    fn from(v: Option<i64>) -> Self {
        match v {
            Some(value) => Self::new(value, true),
            None => Self::null(),
        }
    }
}

impl From<NullInt64> for Option<i64> {
    fn from(v: NullInt64) -> Self {
        v.as_option()
    }
}

impl From<NullInt64> for DatabaseValue {
    fn from(v: NullInt64) -> Self {
        match v.as_option() {
            Some(value) => DatabaseValue::Long(value),
            None => DatabaseValue::Null,
        }
    }
}

impl fmt::Display for NullInt64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            write!(f, "{}", serde_json::Number::from(self.value))
        } else {
            f.write_str("null")
        }
    }
}

impl Serialize for NullInt64 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.valid {
            serializer.serialize_some(&self.value)
        } else {
            serializer.serialize_none()
        }
    }
}

/// Reads an `i64`, also accepting the negative zero a JSON `-0` parses to
struct Int64Visitor;

impl<'de> Visitor<'de> for Int64Visitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an i64")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<i64, E> {
        i64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<i64, E> {
        if v == 0.0 && v.is_sign_negative() {
            Ok(0)
        } else {
            Err(E::invalid_type(Unexpected::Float(v), &self))
        }
    }
}

struct NullInt64Visitor;

impl<'de> Visitor<'de> for NullInt64Visitor {
    type Value = NullInt64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null or an i64")
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<NullInt64, E> {
        Ok(NullInt64::null())
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<NullInt64, E> {
        Ok(NullInt64::null())
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<NullInt64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_i64(Int64Visitor).map(NullInt64::from)
    }
}

impl<'de> Deserialize<'de> for NullInt64 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(NullInt64Visitor)
    }
}
