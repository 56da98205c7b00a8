//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! malformed stamps, invalid color schemes, mismatched output buffers, and registry misses.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid stamp: {0}")]
    InvalidStamp(String),

    #[error("invalid color scheme: {0}")]
    InvalidColorScheme(String),

    #[error("output buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("unknown palette '{name}'")]
    UnknownPalette { name: String },

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string_uses_other_variant() {
        let err: Error = String::from("boom").into();
        assert!(matches!(err, Error::Other(_)));
    }

    #[test]
    fn buffer_size_message_names_both_lengths() {
        let err = Error::BufferSize {
            expected: 36,
            actual: 12,
        };
        assert_eq!(err.to_string(), "output buffer holds 12 bytes, expected 36");
    }
}
