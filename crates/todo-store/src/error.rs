//! Error types for snapshot storage.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing snapshots.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Key cannot be mapped onto the backing store.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// I/O operation failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// Stored value is not a valid snapshot.
    #[error("Failed to parse snapshot for key {key}: {source}")]
    Deserialize {
        /// Key the value was read from.
        key: String,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// Value could not be encoded.
    #[error("Failed to serialize snapshot for key {key}: {source}")]
    Serialize {
        /// Key the value was meant for.
        key: String,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// A previous holder of the store lock panicked.
    #[error("Store lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
