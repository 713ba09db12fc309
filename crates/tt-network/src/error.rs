//! Network-subsystem error type.

use thiserror::Error;

use tt_core::{FormatError, Station};

/// Errors produced by `tt-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("no segment between {from} and {to}")]
    MissingSegment { from: Station, to: Station },

    #[error("segments row {row}: {source}")]
    Row {
        row:    usize,
        #[source]
        source: FormatError,
    },

    #[error("segments parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
