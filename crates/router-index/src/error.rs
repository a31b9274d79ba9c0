//! Index error types.

use thiserror::Error;

/// Errors that can occur during index operations.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Query or delete on an index with no entries
    #[error("Index is not populated")]
    NotPopulated,

    /// Vector length disagrees with the established dimension
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
