//! Hydrate-or-default values that snapshot themselves on every commit.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::KeyValueStore;
use crate::error::StoreError;

/// How a [`Persisted`] value obtained its initial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Decoded from an existing snapshot.
    Restored,
    /// No snapshot existed; the default was used.
    Defaulted,
    /// A snapshot existed but could not be read or decoded; the default was used.
    Recovered,
}

/// A value mirrored to a single key of a [`KeyValueStore`].
///
/// Every committed value is written immediately and in commit order. Write
/// failures are logged and counted but never undo the in-memory value.
#[derive(Debug)]
pub struct Persisted<T> {
    key: String,
    value: T,
    origin: Origin,
    failed_writes: usize,
}

impl<T> Persisted<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Load `key` from `store`, falling back to `default` when the snapshot
    /// is absent or unreadable.
    ///
    /// A defaulted value is written back right away so the next session
    /// restores the same state (including any generated identifiers).
    pub fn hydrate<S, F>(store: &S, key: impl Into<String>, default: F) -> Self
    where
        S: KeyValueStore + ?Sized,
        F: FnOnce() -> T,
    {
        let key = key.into();
        let (value, origin) = match read_snapshot(store, &key) {
            Ok(Some(value)) => (value, Origin::Restored),
            Ok(None) => (default(), Origin::Defaulted),
            Err(err) => {
                warn!(key = %key, error = %err, "Discarding unreadable snapshot");
                (default(), Origin::Recovered)
            }
        };

        let mut persisted = Self {
            key,
            value,
            origin,
            failed_writes: 0,
        };
        if origin != Origin::Restored {
            persisted.snapshot(store);
        }
        persisted
    }

    /// Commit a new value and snapshot it.
    pub fn set<S>(&mut self, store: &S, value: T)
    where
        S: KeyValueStore + ?Sized,
    {
        self.value = value;
        self.snapshot(store);
    }

    /// Commit `f(current)` and snapshot it.
    pub fn replace<S, F>(&mut self, store: &S, f: F)
    where
        S: KeyValueStore + ?Sized,
        F: FnOnce(T) -> T,
        T: Default,
    {
        let current = std::mem::take(&mut self.value);
        self.set(store, f(current));
    }

    /// Write the current value. Returns whether the write succeeded.
    pub fn snapshot<S>(&mut self, store: &S) -> bool
    where
        S: KeyValueStore + ?Sized,
    {
        let result = serde_json::to_string(&self.value)
            .map_err(|source| {
                anyhow::Error::from(StoreError::Serialize {
                    key: self.key.clone(),
                    source,
                })
            })
            .and_then(|encoded| {
                store
                    .save(&self.key, &encoded)
                    .map_err(Into::<anyhow::Error>::into)
            });

        match result {
            Ok(()) => {
                debug!(key = %self.key, "Snapshot committed");
                true
            }
            Err(err) => {
                self.failed_writes += 1;
                warn!(
                    key = %self.key,
                    failed_writes = self.failed_writes,
                    error = %format!("{err:#}"),
                    "Snapshot write failed; keeping in-memory state"
                );
                false
            }
        }
    }
}

impl<T> Persisted<T> {
    /// Current value.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Store key this value is mirrored to.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Where the initial value came from.
    #[must_use]
    pub const fn origin(&self) -> Origin {
        self.origin
    }

    /// Number of snapshot writes that failed so far.
    #[must_use]
    pub const fn failed_writes(&self) -> usize {
        self.failed_writes
    }
}

/// Read and decode the snapshot stored under `key`.
///
/// # Errors
/// Returns the backend error, or [`StoreError::Deserialize`] when the stored
/// text is not a valid encoding of `T`.
pub fn read_snapshot<S, T>(store: &S, key: &str) -> anyhow::Result<Option<T>>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let Some(raw) = store.load(key).map_err(Into::<anyhow::Error>::into)? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|source| StoreError::Deserialize {
        key: key.to_owned(),
        source,
    })?;
    Ok(Some(value))
}
