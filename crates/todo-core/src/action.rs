use serde::{Deserialize, Serialize};

use crate::id::TaskId;
use crate::item::TaskItem;
use crate::list::TaskList;

/// Discrete transitions accepted by [`TaskList::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    /// Append a new incomplete item.
    #[serde(rename = "ADD_TODO")]
    Add {
        /// Display text, already normalised by the caller.
        content: String,
    },
    /// Drop the item with this id.
    #[serde(rename = "REMOVE_TODO")]
    Remove {
        /// Target item.
        id: TaskId,
    },
    /// Mark the item complete.
    #[serde(rename = "DO_TODO")]
    Do {
        /// Target item.
        id: TaskId,
    },
    /// Mark the item incomplete.
    #[serde(rename = "UNDO_TODO")]
    Undo {
        /// Target item.
        id: TaskId,
    },
    /// Drop every complete item.
    #[serde(rename = "CLEAR_COMPLETED")]
    ClearCompleted,
    /// Swap in a recomputed ordering of the list.
    #[serde(rename = "CHANGE_TODO_LIST")]
    Replace {
        /// The new canonical list.
        list: TaskList,
    },
}

impl Action {
    /// Wire tag of this action, used as a structured log field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Add { .. } => "ADD_TODO",
            Self::Remove { .. } => "REMOVE_TODO",
            Self::Do { .. } => "DO_TODO",
            Self::Undo { .. } => "UNDO_TODO",
            Self::ClearCompleted => "CLEAR_COMPLETED",
            Self::Replace { .. } => "CHANGE_TODO_LIST",
        }
    }

    /// `Add` with the given content.
    #[must_use]
    pub fn add(content: impl Into<String>) -> Self {
        Self::Add {
            content: content.into(),
        }
    }

    /// Flip the completion state of `item` as a checkbox would.
    #[must_use]
    pub fn toggle(item: &TaskItem) -> Self {
        let id = item.id.clone();
        if item.complete {
            Self::Undo { id }
        } else {
            Self::Do { id }
        }
    }
}
