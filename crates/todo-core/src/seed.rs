use crate::id::IdGenerator;
use crate::item::TaskItem;
use crate::list::TaskList;

/// Starter entries shown before anything has been persisted.
const SEED: [(&str, bool); 6] = [
    ("Complete online JavaScript Course", true),
    ("Jog around the park 3x", false),
    ("10 minutes meditation", false),
    ("Read for 1 hour", false),
    ("Pick up groceries", false),
    ("Complete Todo App on Frontend Mentor", false),
];

/// Build the starter list with fresh identifiers.
#[must_use]
pub fn seed_list<G>(ids: &mut G) -> TaskList
where
    G: IdGenerator + ?Sized,
{
    SEED.iter()
        .map(|&(content, complete)| TaskItem::new(ids.new_id(), content, complete))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::UuidGenerator;

    #[test]
    fn seed_has_one_completed_item_first() {
        let list = seed_list(&mut UuidGenerator);
        assert_eq!(list.len(), 6);
        assert_eq!(list.completed_count(), 1);
        assert!(list.get(0).is_some_and(|item| item.complete));
        assert!(list.has_unique_ids());
    }
}
