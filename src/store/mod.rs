pub mod json;

use anyhow::Result;

pub use json::JsonStore;

/// Key-value record repository. Keeps the storage medium swappable without
/// touching anything that computes on the records.
///
/// Not concurrency-safe: implementations do whole-document read-modify-write
/// with last-write-wins, so callers that persist concurrently need external
/// synchronization (single writer at a time).
pub trait Repository<T> {
    fn get(&self, key: &str) -> Result<Option<T>>;
    fn upsert(&mut self, key: &str, value: T) -> Result<()>;
    fn delete(&mut self, key: &str) -> Result<bool>;
    fn list(&self) -> Result<Vec<String>>;
}
