use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::TaskId;

/// A single entry of the task list.
///
/// Items are values: completing an item yields a new record through
/// [`TaskItem::with_complete`] rather than mutating the stored one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskItem {
    /// Identifier assigned at creation.
    pub id: TaskId,
    /// Display text.
    pub content: String,
    /// Completion flag.
    pub complete: bool,
}

impl TaskItem {
    /// Create an item with the given fields.
    #[must_use]
    pub fn new(id: TaskId, content: impl Into<String>, complete: bool) -> Self {
        Self {
            id,
            content: content.into(),
            complete,
        }
    }

    /// Copy of this item with only the completion flag replaced.
    #[must_use]
    pub fn with_complete(&self, complete: bool) -> Self {
        Self {
            id: self.id.clone(),
            content: self.content.clone(),
            complete,
        }
    }
}

/// Upper-case the first character and leave the rest untouched.
#[must_use]
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Trim and capitalise user input for an `Add` action.
///
/// # Errors
/// Returns [`ValidationError::EmptyContent`] when nothing is left after trimming.
pub fn normalize_content(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyContent);
    }
    Ok(capitalize_first(trimmed))
}
