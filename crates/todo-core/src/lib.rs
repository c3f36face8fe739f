//! Domain types and transition logic for the todo list.
//!
//! The canonical [`TaskList`] only changes through [`TaskList::apply`]; every
//! displayed subset is derived with [`filter`], and drag-and-drop moves are
//! computed with [`reorder`] and committed as [`Action::Replace`].

/// Action definitions.
pub mod action;
pub mod error;
pub mod filter;
/// Identifier types and generators.
pub mod id;
/// Task item records and content normalisation.
pub mod item;
/// The canonical list and its transition function.
pub mod list;
pub mod reorder;
/// Starter list.
pub mod seed;

pub use action::Action;
pub use error::{IndexRole, ValidationError};
pub use filter::{FilterMode, UnknownFilterMode, filter};
pub use id::{IdGenerator, SequentialGenerator, TaskId, UuidGenerator};
pub use item::{TaskItem, capitalize_first, normalize_content};
pub use list::{TaskList, items_left_label};
pub use reorder::reorder;
pub use seed::seed_list;
