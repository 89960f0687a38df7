//! Storage layer for the HBnB console.
//!
//! Provides the registry of live records and its durable flush.
//!
//! # Architecture
//!
//! - [`Storage`] is the collaborator interface the console talks to
//! - [`FileStorage`] keeps records in an insertion-ordered map and writes the
//!   whole registry to a single JSON file on every flush
//! - The file maps `ClassName.id` keys to each record's dictionary form

mod error;
mod file_store;
mod traits;

pub use error::{StorageError, StorageResult};
pub use file_store::{DEFAULT_FILE_PATH, FileStorage};
pub use traits::{Registry, Storage};
