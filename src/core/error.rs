//! Error types for nullable value conversions
//!
//! This module defines all error types that can occur while scanning driver
//! values or decoding JSON into a nullable type.

use std::num::ParseIntError;

/// Result type alias for nullable value conversions
pub type Result<T> = std::result::Result<T, NullTypeError>;

/// Error types for nullable value conversions
#[derive(Debug, thiserror::Error)]
pub enum NullTypeError {
    /// Textual driver value is not a base-10 integer
    #[error("Invalid format: cannot parse {input:?} as int64 - {source}")]
    InvalidFormat {
        input: String,
        #[source]
        source: ParseIntError,
    },

    /// Driver value of a type the target cannot be scanned from
    #[error("Unsupported type: got data of type {type_name}")]
    UnsupportedType { type_name: &'static str },

    /// JSON input is malformed, not an integer, or out of range
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl NullTypeError {
    /// Create an invalid format error from the rejected text and its parse error
    pub fn invalid_format(input: impl Into<String>, source: ParseIntError) -> Self {
        NullTypeError::InvalidFormat {
            input: input.into(),
            source,
        }
    }

    /// Create an unsupported type error
    pub fn unsupported_type(type_name: &'static str) -> Self {
        NullTypeError::UnsupportedType { type_name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let parse_err = "abc".parse::<i64>().unwrap_err();
        let err = NullTypeError::invalid_format("abc", parse_err);
        assert!(matches!(err, NullTypeError::InvalidFormat { .. }));

        let err = NullTypeError::unsupported_type("double");
        assert!(matches!(
            err,
            NullTypeError::UnsupportedType {
                type_name: "double"
            }
        ));

        let json_err = serde_json::from_str::<i64>("nope").unwrap_err();
        let err = NullTypeError::from(json_err);
        assert!(matches!(err, NullTypeError::Decode(_)));
    }

    #[test]
    fn test_error_display() {
        let err = NullTypeError::unsupported_type("double");
        assert_eq!(err.to_string(), "Unsupported type: got data of type double");

        let parse_err = "12x".parse::<i64>().unwrap_err();
        let err = NullTypeError::invalid_format("12x", parse_err);
        assert_eq!(
            err.to_string(),
            "Invalid format: cannot parse \"12x\" as int64 - invalid digit found in string"
        );
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;

        let parse_err = "".parse::<i64>().unwrap_err();
        let err = NullTypeError::invalid_format("", parse_err);
        assert!(err.source().is_some());

        let err = NullTypeError::unsupported_type("bool");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<NullTypeError>();
    }
}
