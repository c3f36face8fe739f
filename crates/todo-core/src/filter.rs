//! Derived views over the canonical list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::item::TaskItem;
use crate::list::TaskList;

/// Which subset of the list is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Every item.
    #[default]
    All,
    /// Incomplete items only.
    Active,
    /// Complete items only.
    Completed,
}

impl FilterMode {
    /// All modes in display order.
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    /// Whether `item` belongs to this view.
    #[must_use]
    pub const fn matches(self, item: &TaskItem) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.complete,
            Self::Completed => item.complete,
        }
    }

    /// Lower-case name used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned for an unrecognised filter name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter mode: {0} (expected all, active or completed)")]
pub struct UnknownFilterMode(pub String);

impl FromStr for FilterMode {
    type Err = UnknownFilterMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownFilterMode(s.to_owned()))
    }
}

/// Items of `list` visible under `mode`, in canonical order.
#[must_use]
pub fn filter(list: &TaskList, mode: FilterMode) -> Vec<&TaskItem> {
    list.iter().filter(|item| mode.matches(item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::TaskId;

    fn item(raw_id: &str, complete: bool) -> TaskItem {
        let id: TaskId = raw_id.parse().unwrap_or_else(|err| panic!("{err}"));
        TaskItem::new(id, raw_id.to_uppercase(), complete)
    }

    fn ids(view: &[&TaskItem]) -> Vec<String> {
        view.iter().map(|item| item.id.to_string()).collect()
    }

    fn mixed() -> TaskList {
        TaskList::from(vec![
            item("a", true),
            item("b", false),
            item("c", true),
            item("d", false),
        ])
    }

    #[test]
    fn all_keeps_everything_in_order() {
        let list = mixed();
        assert_eq!(ids(&filter(&list, FilterMode::All)), ["a", "b", "c", "d"]);
    }

    #[test]
    fn active_and_completed_preserve_relative_order() {
        let list = mixed();
        assert_eq!(ids(&filter(&list, FilterMode::Active)), ["b", "d"]);
        assert_eq!(ids(&filter(&list, FilterMode::Completed)), ["a", "c"]);
    }

    #[test]
    fn view_borrows_canonical_items() {
        let list = mixed();
        let view = filter(&list, FilterMode::Active);
        let Some(first) = view.first() else {
            panic!("active view must not be empty");
        };
        assert!(std::ptr::eq(*first, &list.as_slice()[1]));
    }

    #[test]
    fn empty_list_yields_empty_views() {
        let list = TaskList::new();
        for mode in FilterMode::ALL {
            assert!(filter(&list, mode).is_empty());
        }
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Active".parse::<FilterMode>(), Ok(FilterMode::Active));
        assert_eq!(" completed ".parse::<FilterMode>(), Ok(FilterMode::Completed));
        assert_eq!(
            "done".parse::<FilterMode>(),
            Err(UnknownFilterMode("done".to_owned()))
        );
        assert_eq!(FilterMode::Completed.to_string(), "completed");
    }
}
