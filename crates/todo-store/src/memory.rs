use std::collections::BTreeMap;
use std::convert::Infallible;
use std::sync::Mutex;

use crate::KeyValueStore;
use crate::error::StoreError;

#[derive(Debug, Default)]
struct Entry {
    value: String,
    writes: usize,
}

/// Volatile store keeping values in a map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, Entry>>,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with raw values (write counters start at zero).
    #[must_use]
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = values
            .into_iter()
            .map(|(key, value)| {
                (
                    key.into(),
                    Entry {
                        value: value.into(),
                        writes: 0,
                    },
                )
            })
            .collect();
        Self {
            entries: Mutex::new(entries),
        }
    }

    /// Number of successful writes to `key` since creation.
    ///
    /// # Errors
    /// Returns [`StoreError::Poisoned`] if the lock is poisoned.
    pub fn write_count(&self, key: &str) -> Result<usize, StoreError> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).map_or(0, |entry| entry.writes))
    }

    /// Raw value currently stored under `key`.
    ///
    /// # Errors
    /// Returns [`StoreError::Poisoned`] if the lock is poisoned.
    pub fn raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.load(key)
    }
}

impl KeyValueStore for MemoryStore {
    type Error = StoreError;

    fn load(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).map(|entry| entry.value.clone()))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        let entry = entries.entry(key.to_owned()).or_default();
        value.clone_into(&mut entry.value);
        entry.writes += 1;
        Ok(())
    }
}

/// Store that persists nothing and always reports absent values.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl KeyValueStore for NullStore {
    type Error = Infallible;

    fn load(&self, _key: &str) -> Result<Option<String>, Self::Error> {
        Ok(None)
    }

    fn save(&self, _key: &str, _value: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}
