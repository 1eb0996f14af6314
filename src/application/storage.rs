// src/application/storage.rs
use crate::domain::DomainError;

/// Durable key-value slot store, one JSON document per key.
///
/// This mirrors the storage model the app was built against: a handful of
/// fixed keys, whole-value reads and writes, no partial updates and no
/// cross-writer coordination (last writer wins).
pub trait StorageSlot {
    /// Raw contents of `key`, or `None` when the slot was never written.
    fn read(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Replace the contents of `key` with `value`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), DomainError>;
}

impl<S: StorageSlot + ?Sized> StorageSlot for &mut S {
    fn read(&self, key: &str) -> Result<Option<String>, DomainError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        (**self).write(key, value)
    }
}
