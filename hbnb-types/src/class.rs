//! The Known Class Set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// One of the record classes the console knows how to construct.
///
/// The set is closed: any other name is rejected before the registry is
/// consulted. Matching is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ClassName {
    BaseModel,
    User,
    Amenity,
    City,
    Review,
    Place,
    State,
}

impl ClassName {
    /// Every known class, in declaration order.
    pub const ALL: [ClassName; 7] = [
        Self::BaseModel,
        Self::User,
        Self::Amenity,
        Self::City,
        Self::Review,
        Self::Place,
        Self::State,
    ];

    /// Returns the canonical spelling of the class name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BaseModel => "BaseModel",
            Self::User => "User",
            Self::Amenity => "Amenity",
            Self::City => "City",
            Self::Review => "Review",
            Self::Place => "Place",
            Self::State => "State",
        }
    }

    /// Looks up a class by its exact name.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.as_str() == name)
    }

    /// Returns the registry key prefix shared by every record of this class,
    /// e.g. `"User."`.
    #[must_use]
    pub fn key_prefix(&self) -> String {
        format!("{}.", self.as_str())
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| Error::UnknownClass(s.to_string()))
    }
}

impl TryFrom<String> for ClassName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClassName> for String {
    fn from(class: ClassName) -> Self {
        class.as_str().to_string()
    }
}
