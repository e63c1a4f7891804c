//! Error types for table loading, queries and configuration.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown month '{month}': not present in the sun table")]
    UnknownMonth { month: String },

    #[error("sun table source contains no usable samples")]
    EmptySource,

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}

/// A data line that was skipped while loading. Collected, never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {reason}")]
pub struct ParseWarning {
    /// 1-based, counting the header line if present.
    pub line: usize,
    pub reason: String,
}
