//! Registry keys and record identifiers.

use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::{ClassName, Error};

/// Generates the id for a newly constructed record (random UUID v4).
#[must_use]
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

/// Composite registry key, rendered as `ClassName.id`.
///
/// Ids are opaque strings: records loaded from disk or addressed from the
/// shell are not required to be UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    class: ClassName,
    id: String,
}

impl RecordKey {
    /// Creates a key from its parts.
    #[must_use]
    pub fn new(class: ClassName, id: impl Into<String>) -> Self {
        Self {
            class,
            id: id.into(),
        }
    }

    /// Returns the class part.
    #[must_use]
    pub const fn class(&self) -> ClassName {
        self.class
    }

    /// Returns the id part.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Parses a key of the form `ClassName.id`.
    ///
    /// The split happens on the first `.`, so ids may themselves contain dots.
    pub fn parse(s: &str) -> crate::Result<Self> {
        let (class, id) = s
            .split_once('.')
            .ok_or_else(|| Error::MalformedKey(s.to_string()))?;
        if id.is_empty() {
            return Err(Error::MalformedKey(s.to_string()));
        }
        let class = ClassName::lookup(class).ok_or_else(|| Error::MalformedKey(s.to_string()))?;
        Ok(Self::new(class, id))
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.class, self.id)
    }
}

impl FromStr for RecordKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
