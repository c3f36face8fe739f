use std::collections::HashSet;

use serde::{Deserialize, Serialize, Serializer};

use crate::action::Action;
use crate::error::ValidationError;
use crate::id::{IdGenerator, TaskId};
use crate::item::TaskItem;

/// Canonical ordered collection of task items.
///
/// Order is significant: it is the persisted and rendered order. Item ids are
/// unique within the list; decoding rejects arrays that repeat an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<TaskItem>")]
pub struct TaskList {
    items: Vec<TaskItem>,
}

impl TaskList {
    /// Empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Apply one transition and return the resulting list.
    ///
    /// The function is total: actions naming an unknown id leave the list
    /// unchanged. `ids` is consulted only by [`Action::Add`], which skips
    /// identifiers already present in the list.
    #[must_use]
    pub fn apply<G>(self, action: Action, ids: &mut G) -> Self
    where
        G: IdGenerator + ?Sized,
    {
        match action {
            Action::Add { content } => {
                let id = self.fresh_id(ids);
                self.push(TaskItem::new(id, content, false))
            }
            Action::Remove { id } => self.retain(|item| item.id != id),
            Action::Do { id } => self.set_complete(&id, true),
            Action::Undo { id } => self.set_complete(&id, false),
            Action::ClearCompleted => self.retain(|item| !item.complete),
            Action::Replace { list } => list,
        }
    }

    fn fresh_id<G>(&self, ids: &mut G) -> TaskId
    where
        G: IdGenerator + ?Sized,
    {
        loop {
            let id = ids.new_id();
            if !self.contains(&id) {
                return id;
            }
        }
    }

    fn push(mut self, item: TaskItem) -> Self {
        self.items.push(item);
        self
    }

    fn retain(mut self, keep: impl FnMut(&TaskItem) -> bool) -> Self {
        self.items.retain(keep);
        self
    }

    fn set_complete(mut self, id: &TaskId, complete: bool) -> Self {
        if let Some(slot) = self.items.iter_mut().find(|item| &item.id == id) {
            *slot = slot.with_complete(complete);
        }
        self
    }

    /// Number of items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the list has no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over items in canonical order.
    pub fn iter(&self) -> std::slice::Iter<'_, TaskItem> {
        self.items.iter()
    }

    /// Items as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[TaskItem] {
        &self.items
    }

    /// Item at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TaskItem> {
        self.items.get(index)
    }

    /// Item with the given id, if any.
    #[must_use]
    pub fn find(&self, id: &TaskId) -> Option<&TaskItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Canonical index of the item with the given id.
    #[must_use]
    pub fn position(&self, id: &TaskId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    /// Whether an item with the given id exists.
    #[must_use]
    pub fn contains(&self, id: &TaskId) -> bool {
        self.position(id).is_some()
    }

    /// Number of incomplete items.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|item| !item.complete).count()
    }

    /// Number of complete items.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.len() - self.active_count()
    }

    /// Check that no two items share an id.
    #[must_use]
    pub fn has_unique_ids(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.items.len());
        self.items.iter().all(|item| seen.insert(&item.id))
    }

}

impl Serialize for TaskList {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.items.serialize(s)
    }
}

impl TryFrom<Vec<TaskItem>> for TaskList {
    type Error = ValidationError;

    fn try_from(items: Vec<TaskItem>) -> Result<Self, Self::Error> {
        let duplicate = {
            let mut seen = HashSet::with_capacity(items.len());
            items
                .iter()
                .find(|item| !seen.insert(&item.id))
                .map(|item| item.id.clone())
        };
        if let Some(id) = duplicate {
            return Err(ValidationError::DuplicateId { id });
        }
        Ok(Self { items })
    }
}

impl From<Vec<TaskItem>> for TaskList {
    fn from(items: Vec<TaskItem>) -> Self {
        Self { items }
    }
}

impl FromIterator<TaskItem> for TaskList {
    fn from_iter<I: IntoIterator<Item = TaskItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TaskList {
    type Item = TaskItem;
    type IntoIter = std::vec::IntoIter<TaskItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a TaskItem;
    type IntoIter = std::slice::Iter<'a, TaskItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Footer label for the item counter.
#[must_use]
pub fn items_left_label(count: usize) -> String {
    if count == 1 {
        "1 item left".to_owned()
    } else {
        format!("{count} items left")
    }
}
