//! Key-value snapshot storage for todo list state.
//!
//! Values are stored whole, as JSON text, one key per namespace. The
//! [`Persisted`] adapter loads a key once at startup (falling back to a
//! default) and writes a fresh snapshot after every commit.

mod error;
mod file;
mod memory;
pub mod persisted;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::{MemoryStore, NullStore};
pub use persisted::{Origin, Persisted, read_snapshot};

/// Key holding the serialized task list.
pub const TODO_LIST_KEY: &str = "todo-list";
/// Key holding the dark theme flag.
pub const DARK_THEME_KEY: &str = "dark-theme";

/// Minimal string key-value store used for snapshots.
pub trait KeyValueStore {
    /// Error type bubbled up from the backing store.
    type Error: Into<anyhow::Error>;

    /// Read the raw value stored under `key`, if any.
    ///
    /// # Errors
    /// Returns a store-specific error when the value cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    /// Returns a store-specific error when the value cannot be written.
    fn save(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    type Error = S::Error;

    fn load(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        (**self).save(key, value)
    }
}
