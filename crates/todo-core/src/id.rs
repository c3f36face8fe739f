use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use thiserror::Error;
use uuid::Uuid;

/// Opaque identifier of a task item.
///
/// Identifiers produced by [`UuidGenerator`] are UUID strings, but snapshots
/// written by other clients may carry any non-empty string, so the value is
/// kept verbatim.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct TaskId(String);

impl TaskId {
    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Returned when parsing an empty identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("task id must not be empty")]
pub struct EmptyTaskId;

impl FromStr for TaskId {
    type Err = EmptyTaskId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(EmptyTaskId);
        }
        Ok(Self(s.to_owned()))
    }
}

impl Serialize for TaskId {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Source of fresh task identifiers.
pub trait IdGenerator {
    /// Produce an identifier that does not collide with any identifier
    /// handed out before.
    fn new_id(&mut self) -> TaskId;
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn new_id(&mut self) -> TaskId {
        (**self).new_id()
    }
}

/// Default generator backed by UUID v7.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&mut self) -> TaskId {
        TaskId(Uuid::now_v7().to_string())
    }
}

/// Deterministic generator yielding `"1"`, `"2"`, ...
///
/// Only unique within its own sequence; callers hydrating a list written by
/// another generator should use [`UuidGenerator`].
#[derive(Debug, Clone)]
pub struct SequentialGenerator {
    next: u64,
}

impl SequentialGenerator {
    /// Start counting at `first`.
    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialGenerator {
    fn new_id(&mut self) -> TaskId {
        let id = TaskId(self.next.to_string());
        self.next += 1;
        id
    }
}
