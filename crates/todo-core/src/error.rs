//! Error types for core operations.

use std::fmt;

use thiserror::Error;

use crate::id::TaskId;

/// Which side of a move an out-of-range index belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexRole {
    /// Index of the item being moved.
    Source,
    /// Index the item should end up at.
    Destination,
}

impl fmt::Display for IndexRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Source => "source",
            Self::Destination => "destination",
        })
    }
}

/// Caller contract violations. State is never modified on this path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A reorder index does not address an item of the list.
    #[error("{which} index {index} is out of range for a list of {len} items")]
    IndexOutOfRange {
        /// Offending side of the move.
        which: IndexRole,
        /// Index supplied by the caller.
        index: usize,
        /// Length of the list the index was checked against.
        len: usize,
    },

    /// Item content was empty after trimming.
    #[error("task content must not be empty")]
    EmptyContent,

    /// Two items of a decoded list share an identifier.
    #[error("task id {id} appears more than once")]
    DuplicateId {
        /// The repeated identifier.
        id: TaskId,
    },
}

/// Result alias for fallible core operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

impl ValidationError {
    pub(crate) const fn out_of_range(which: IndexRole, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { which, index, len }
    }
}
