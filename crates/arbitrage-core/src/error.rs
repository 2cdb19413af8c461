use thiserror::Error;

use crate::schema::DataType;

/// Canonical result for arbitrage.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Two sequences (or a key and its target) that must line up do not.
    #[error("{op}: Incompatible lengths (expected {expected}, got {actual})")]
    Length {
        op: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{op}: type mismatch, expected {expected}, got {actual}")]
    Type {
        op: &'static str,
        expected: &'static str,
        actual: DataType,
    },

    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("{op}: index {index} out of bounds for length {len}")]
    Index {
        op: &'static str,
        index: usize,
        len: usize,
    },

    #[error("{op}: {message}")]
    Invalid { op: &'static str, message: String },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn length(op: &'static str, expected: usize, actual: usize) -> Self {
        Error::Length {
            op,
            expected,
            actual,
        }
    }

    pub fn invalid(op: &'static str, message: impl Into<String>) -> Self {
        Error::Invalid {
            op,
            message: message.into(),
        }
    }

    pub fn is_length(&self) -> bool {
        matches!(self, Error::Length { .. })
    }
}
