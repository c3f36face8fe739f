//! Property checks for the list transition, filter and reorder functions.

#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]

use std::collections::HashSet;

use proptest::prelude::*;
use todo_core::{
    Action, FilterMode, SequentialGenerator, TaskId, TaskItem, TaskList, UuidGenerator, filter,
    normalize_content, reorder,
};

fn id(raw: &str) -> TaskId {
    raw.parse().unwrap()
}

fn list_strategy() -> impl Strategy<Value = TaskList> {
    prop::collection::vec(("[a-z ]{1,12}", any::<bool>()), 0..24).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(idx, (content, complete))| {
                TaskItem::new(id(&format!("item-{idx}")), content, complete)
            })
            .collect()
    })
}

fn list_with_indices() -> impl Strategy<Value = (TaskList, usize, usize)> {
    list_strategy()
        .prop_filter("reorder needs at least one item", |list| !list.is_empty())
        .prop_flat_map(|list| {
            let len = list.len();
            (Just(list), 0..len, 0..len)
        })
}

fn id_set(items: &[&TaskItem]) -> HashSet<TaskId> {
    items.iter().map(|item| item.id.clone()).collect()
}

proptest! {
    #[test]
    fn added_ids_are_pairwise_distinct(contents in prop::collection::vec("[a-z]{1,8}", 0..64)) {
        let mut ids = UuidGenerator;
        let list = contents
            .into_iter()
            .fold(TaskList::new(), |list, content| list.apply(Action::add(content), &mut ids));
        prop_assert!(list.has_unique_ids());
    }

    #[test]
    fn restarted_sequential_ids_never_collide(
        existing in 0usize..16,
        added in prop::collection::vec("[a-z]{1,8}", 1..16),
    ) {
        let mut first_run = SequentialGenerator::default();
        let list = (0..existing).fold(TaskList::new(), |list, idx| {
            list.apply(Action::add(format!("old {idx}")), &mut first_run)
        });

        let count = added.len();
        let mut restarted = SequentialGenerator::default();
        let list = added
            .into_iter()
            .fold(list, |list, content| list.apply(Action::add(content), &mut restarted));
        prop_assert!(list.has_unique_ids());
        prop_assert_eq!(list.len(), existing + count);
    }

    #[test]
    fn unknown_ids_leave_state_unchanged(list in list_strategy()) {
        let missing = id("not-in-list");
        let mut ids = SequentialGenerator::default();
        for action in [
            Action::Remove { id: missing.clone() },
            Action::Do { id: missing.clone() },
            Action::Undo { id: missing },
        ] {
            prop_assert_eq!(list.clone().apply(action, &mut ids), list.clone());
        }
    }

    #[test]
    fn active_and_completed_partition_the_list(list in list_strategy()) {
        let all = filter(&list, FilterMode::All);
        let active = filter(&list, FilterMode::Active);
        let completed = filter(&list, FilterMode::Completed);

        prop_assert!(all.iter().copied().eq(list.iter()));
        prop_assert_eq!(active.len() + completed.len(), list.len());

        let active_ids = id_set(&active);
        let completed_ids = id_set(&completed);
        prop_assert!(active_ids.is_disjoint(&completed_ids));
        let union: HashSet<TaskId> = active_ids.union(&completed_ids).cloned().collect();
        prop_assert_eq!(union, id_set(&all));
    }

    #[test]
    fn reorder_is_a_permutation((list, source, destination) in list_with_indices()) {
        let moved = reorder(&list, source, destination).unwrap();
        prop_assert_eq!(moved.len(), list.len());

        let mut before: Vec<_> = list.iter().cloned().collect();
        let mut after: Vec<_> = moved.iter().cloned().collect();
        before.sort_by(|a, b| a.id.cmp(&b.id));
        after.sort_by(|a, b| a.id.cmp(&b.id));
        prop_assert_eq!(before, after);
        prop_assert_eq!(moved.get(destination), list.get(source));
    }

    #[test]
    fn reorder_to_same_index_is_identity((list, source, _) in list_with_indices()) {
        prop_assert_eq!(reorder(&list, source, source).unwrap(), list);
    }

    #[test]
    fn clear_completed_is_idempotent(list in list_strategy()) {
        let mut ids = SequentialGenerator::default();
        let once = list.apply(Action::ClearCompleted, &mut ids);
        let twice = once.clone().apply(Action::ClearCompleted, &mut ids);
        prop_assert_eq!(once.completed_count(), 0);
        prop_assert_eq!(twice, once);
    }
}

#[test]
fn scenario_add_capitalises_content() {
    let mut ids = UuidGenerator;
    let content = normalize_content("buy milk").unwrap();
    let list = TaskList::new().apply(Action::add(content), &mut ids);

    assert_eq!(list.len(), 1);
    let item = list.get(0).unwrap();
    assert_eq!(item.content, "Buy milk");
    assert!(!item.complete);
}

#[test]
fn scenario_do_then_filter_active() {
    let mut ids = SequentialGenerator::starting_at(3);
    let list = TaskList::from(vec![
        TaskItem::new(id("1"), "X", false),
        TaskItem::new(id("2"), "Y", false),
    ]);

    let list = list.apply(Action::Do { id: id("1") }, &mut ids);
    assert_eq!(
        list,
        TaskList::from(vec![
            TaskItem::new(id("1"), "X", true),
            TaskItem::new(id("2"), "Y", false),
        ])
    );

    let active = filter(&list, FilterMode::Active);
    assert_eq!(active, vec![&TaskItem::new(id("2"), "Y", false)]);
}

#[test]
fn scenario_reorder_first_to_last() {
    let list: TaskList = ["a", "b", "c"]
        .into_iter()
        .map(|name| TaskItem::new(id(name), name, false))
        .collect();

    let moved = reorder(&list, 0, 2).unwrap();
    let order: Vec<&str> = moved.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(order, ["b", "c", "a"]);
}

#[test]
fn scenario_clear_completed_keeps_open_item() {
    let mut ids = SequentialGenerator::default();
    let list = TaskList::from(vec![
        TaskItem::new(id("1"), "done", true),
        TaskItem::new(id("2"), "open", false),
        TaskItem::new(id("3"), "done too", true),
    ]);

    let cleared = list.apply(Action::ClearCompleted, &mut ids);
    assert_eq!(cleared, TaskList::from(vec![TaskItem::new(id("2"), "open", false)]));
}
