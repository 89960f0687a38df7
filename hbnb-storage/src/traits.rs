use hbnb_model::Record;
use hbnb_types::RecordKey;
use indexmap::IndexMap;

use crate::StorageResult;

/// Live records keyed by `ClassName.id`, in insertion order.
pub type Registry = IndexMap<RecordKey, Record>;

/// The registry and durability operations the console depends on.
///
/// Mutations only touch memory; nothing is durable until [`Storage::save`]
/// (or [`Storage::save_record`]) returns.
pub trait Storage {
    /// Every live record, in insertion order.
    fn all(&self) -> &Registry;

    /// Registers a new record under its own key.
    fn insert(&mut self, record: Record);

    /// Removes a record, returning it if it existed.
    fn delete(&mut self, key: &RecordKey) -> Option<Record>;

    /// Sets a string attribute on an existing record.
    ///
    /// Reserved fields (`id`, timestamps) are left as they are.
    fn update(&mut self, key: &RecordKey, attr: &str, value: &str) -> StorageResult<()>;

    /// Flushes the whole registry to durable storage.
    fn save(&mut self) -> StorageResult<()>;

    /// Refreshes a record's `updated_at` and flushes.
    fn save_record(&mut self, key: &RecordKey) -> StorageResult<()>;

    fn get(&self, key: &RecordKey) -> Option<&Record> {
        self.all().get(key)
    }

    fn contains(&self, key: &RecordKey) -> bool {
        self.all().contains_key(key)
    }
}
