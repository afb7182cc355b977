//! Error types for bit-vector operations

use thiserror::Error;

/// Error type for bit-vector operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("index out of range: {index} >= {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
