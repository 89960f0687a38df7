use chrono::{NaiveDateTime, SubsecRound, Utc};
use hbnb_types::{ClassName, RecordKey, new_record_id};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Format of `created_at` / `updated_at` in the dictionary form.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Field names `Record::set` refuses to overwrite.
pub const RESERVED_ATTRIBUTES: [&str; 4] = ["id", "created_at", "updated_at", "__class__"];

/// One persisted instance of a known class.
///
/// Besides the fixed identity and timestamps, a record carries free-form
/// attributes in insertion order. Attributes set from the console are always
/// strings; values loaded from disk keep whatever JSON type they had.
///
/// The serde form is the dictionary form stored on disk: `__class__`, `id`,
/// both timestamps, then the attributes as sibling keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "__class__")]
    class: ClassName,
    id: String,
    #[serde(with = "timestamp")]
    created_at: NaiveDateTime,
    #[serde(with = "timestamp")]
    updated_at: NaiveDateTime,
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

/// The fields `show` and `all` print: the dictionary form without `__class__`.
#[derive(Serialize)]
struct Fields<'a> {
    id: &'a str,
    #[serde(with = "timestamp")]
    created_at: NaiveDateTime,
    #[serde(with = "timestamp")]
    updated_at: NaiveDateTime,
    #[serde(flatten)]
    attributes: &'a Map<String, Value>,
}

impl Record {
    /// Creates a fresh record with a new id, stamped with the current time.
    #[must_use]
    pub fn new(class: ClassName) -> Self {
        let stamp = now();
        Self {
            class,
            id: new_record_id(),
            created_at: stamp,
            updated_at: stamp,
            attributes: Map::new(),
        }
    }

    /// Creates a record with an explicit id and timestamps.
    #[must_use]
    pub fn with_id(class: ClassName, id: impl Into<String>, created_at: NaiveDateTime) -> Self {
        Self {
            class,
            id: id.into(),
            created_at,
            updated_at: created_at,
            attributes: Map::new(),
        }
    }

    pub fn class(&self) -> ClassName {
        self.class
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The registry key this record is stored under.
    pub fn key(&self) -> RecordKey {
        RecordKey::new(self.class, self.id.clone())
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn updated_at(&self) -> NaiveDateTime {
        self.updated_at
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Returns an attribute's value if it is a string.
    pub fn get_str(&self, attr: &str) -> Option<&str> {
        self.attributes.get(attr).and_then(Value::as_str)
    }

    /// Sets a string attribute, replacing any previous value in place.
    ///
    /// Returns `false` without touching the record when `attr` is reserved.
    pub fn set(&mut self, attr: &str, value: impl Into<String>) -> bool {
        if RESERVED_ATTRIBUTES.contains(&attr) {
            return false;
        }
        self.attributes
            .insert(attr.to_string(), Value::String(value.into()));
        true
    }

    /// Refreshes `updated_at` to the current time.
    pub fn touch(&mut self) {
        self.updated_at = now();
    }
}

/// `[ClassName] (id) {fields}`, the form `show` and `all` print.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = Fields {
            id: &self.id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            attributes: &self.attributes,
        };
        let fields = serde_json::to_string(&fields).map_err(|_| fmt::Error)?;
        write!(f, "[{}] ({}) {}", self.class, self.id, fields)
    }
}

/// Current UTC time at the precision the dictionary form keeps.
fn now() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(6)
}

mod timestamp {
    use chrono::NaiveDateTime;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&text, TIMESTAMP_FORMAT)
            .map_err(|e| D::Error::custom(format!("invalid timestamp {text:?}: {e}")))
    }
}
