//! Record model for the HBnB console.
//!
//! Defines the types the console and storage layers exchange:
//! - [`Record`], one instance of a known class (id, timestamps, attributes)
//! - the dictionary form used on disk, which is `Record`'s serde form
//! - the class factory ([`construct`], [`constructor`]) that maps each
//!   [`ClassName`](hbnb_types::ClassName) to the function building a fresh record

mod factory;
mod record;

pub use factory::{Constructor, construct, constructor};
pub use record::{RESERVED_ATTRIBUTES, Record, TIMESTAMP_FORMAT};
