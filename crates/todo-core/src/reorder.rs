//! Single-element move used to commit drag-and-drop reordering.

use crate::error::{IndexRole, Result, ValidationError};
use crate::list::TaskList;

/// Move the item at `source` so that it ends up at index `destination`.
///
/// This is a move, not a swap: items between the two positions shift by one.
/// Equal indices return an identical list.
///
/// # Errors
/// Returns [`ValidationError::IndexOutOfRange`] when either index does not
/// address an item; `list` is left untouched.
pub fn reorder(list: &TaskList, source: usize, destination: usize) -> Result<TaskList> {
    let len = list.len();
    if source >= len {
        return Err(ValidationError::out_of_range(IndexRole::Source, source, len));
    }
    if destination >= len {
        return Err(ValidationError::out_of_range(
            IndexRole::Destination,
            destination,
            len,
        ));
    }

    let mut items = list.as_slice().to_vec();
    if source != destination {
        let moved = items.remove(source);
        items.insert(destination, moved);
    }
    Ok(TaskList::from(items))
}
