//! Core type definitions for the HBnB console.
//!
//! This crate defines the small, closed vocabulary every other crate shares:
//! - [`ClassName`], the fixed set of record classes the console accepts
//! - [`RecordKey`], the `ClassName.id` composite key used by the registry
//! - [`new_record_id`], the id generator for freshly constructed records
//!
//! Record fields and persistence live in `hbnb-model` and `hbnb-storage`.

mod class;
mod key;

pub use class::ClassName;
pub use key::{RecordKey, new_record_id};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown class: {0}")]
    UnknownClass(String),

    #[error("malformed record key: {0}")]
    MalformedKey(String),
}
