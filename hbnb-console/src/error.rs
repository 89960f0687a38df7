//! Error types for the console.

use thiserror::Error;

/// Result type for console operations.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Faults that end a console session.
///
/// User input mistakes are not represented here; see [`Rejection`](crate::Rejection).
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The registry could not be flushed.
    #[error("storage error: {0}")]
    Storage(#[from] hbnb_storage::StorageError),

    /// Writing to the output sink failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}
