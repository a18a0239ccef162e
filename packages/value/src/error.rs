//! Error types for the value layer.

/// Errors raised when converting between [`crate::Value`] and Rust types.
///
/// Navigation itself never fails; these only come out of the typed serde
/// conversions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A Value could not be decoded into the requested type.
    #[error("decode error: {message}")]
    Decode { message: String },

    /// A Rust value could not be encoded as a Value.
    #[error("encode error: {message}")]
    Encode { message: String },
}

impl Error {
    pub fn decode(message: impl Into<String>) -> Self {
        Error::Decode {
            message: message.into(),
        }
    }

    pub fn encode(message: impl Into<String>) -> Self {
        Error::Encode {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn decode_error_display() {
        let e = Error::decode("unexpected token");
        let display = format!("{}", e);
        assert!(display.contains("decode error"));
        assert!(display.contains("unexpected token"));
    }

    #[test]
    fn encode_error_display() {
        let e = Error::encode("key must be a string");
        assert_eq!(format!("{}", e), "encode error: key must be a string");
    }

    #[test]
    fn error_source_is_none() {
        assert!(StdError::source(&Error::decode("x")).is_none());
    }
}
