//! The handle the presentation layer drives.

use todo_core::{
    Action, FilterMode, IdGenerator, IndexRole, TaskId, TaskItem, TaskList, UuidGenerator,
    ValidationError, filter, items_left_label, normalize_content, reorder, seed_list,
};
use todo_store::{DARK_THEME_KEY, KeyValueStore, Persisted, TODO_LIST_KEY};
use tracing::{debug, info};

use crate::config::AppConfig;

/// Settings needed to open a [`TodoSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Key for the task list snapshot.
    pub list_key: String,
    /// Key for the theme flag snapshot.
    pub theme_key: String,
    /// Seed the starter list when no snapshot exists.
    pub seed: bool,
    /// Filter applied on open.
    pub default_filter: FilterMode,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            list_key: TODO_LIST_KEY.to_owned(),
            theme_key: DARK_THEME_KEY.to_owned(),
            seed: true,
            default_filter: FilterMode::All,
        }
    }
}

impl From<&AppConfig> for SessionOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            list_key: config.storage.list_key.clone(),
            theme_key: config.storage.theme_key.clone(),
            seed: config.view.seed,
            default_filter: config.view.default_filter,
        }
    }
}

/// Canonical list, theme flag and current filter, mirrored to a store.
///
/// Every state change goes through [`dispatch`](Self::dispatch), which commits
/// the new list and snapshots it before returning.
pub struct TodoSession<S, G = UuidGenerator> {
    store: S,
    ids: G,
    list: Persisted<TaskList>,
    dark_theme: Persisted<bool>,
    filter_mode: FilterMode,
}

impl<S> TodoSession<S>
where
    S: KeyValueStore,
{
    /// Open a session with default options and UUID identifiers.
    #[must_use]
    pub fn open_default(store: S) -> Self {
        Self::open(store, &SessionOptions::default(), UuidGenerator)
    }
}

impl<S, G> TodoSession<S, G>
where
    S: KeyValueStore,
    G: IdGenerator,
{
    /// Hydrate both namespaces from `store`, falling back to defaults.
    #[must_use]
    pub fn open(store: S, options: &SessionOptions, mut ids: G) -> Self {
        let seed = options.seed;
        let list = Persisted::hydrate(&store, options.list_key.as_str(), || {
            if seed {
                seed_list(&mut ids)
            } else {
                TaskList::new()
            }
        });
        let dark_theme = Persisted::hydrate(&store, options.theme_key.as_str(), || false);

        info!(
            list_key = list.key(),
            items = list.value().len(),
            list_origin = ?list.origin(),
            dark_theme = *dark_theme.value(),
            filter = %options.default_filter,
            "Opened todo session"
        );

        Self {
            store,
            ids,
            list,
            dark_theme,
            filter_mode: options.default_filter,
        }
    }

    /// Apply `action` to the canonical list and snapshot the result.
    pub fn dispatch(&mut self, action: Action) {
        let kind = action.kind();
        let ids = &mut self.ids;
        self.list
            .replace(&self.store, |list| list.apply(action, ids));
        debug!(action = kind, items = self.list.value().len(), "Dispatched action");
    }

    /// Normalise `raw` and append it as a new item.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyContent`] for blank input; nothing is dispatched.
    pub fn create(&mut self, raw: &str) -> Result<(), ValidationError> {
        let content = normalize_content(raw)?;
        self.dispatch(Action::add(content));
        Ok(())
    }

    /// Flip the completion flag of the item with `id`. Unknown ids are ignored.
    pub fn toggle(&mut self, id: &TaskId) {
        let Some(action) = self.list.value().find(id).map(Action::toggle) else {
            debug!(id = %id, "Ignoring toggle for unknown item");
            return;
        };
        self.dispatch(action);
    }

    /// Remove the item with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: TaskId) {
        self.dispatch(Action::Remove { id });
    }

    /// Remove every complete item.
    pub fn clear_completed(&mut self) {
        self.dispatch(Action::ClearCompleted);
    }

    /// Move the item at canonical index `source` to `destination`.
    ///
    /// Equal indices dispatch nothing.
    ///
    /// # Errors
    /// Returns [`ValidationError::IndexOutOfRange`] if either index is outside
    /// the list; state and store are left untouched.
    pub fn move_item(&mut self, source: usize, destination: usize) -> Result<(), ValidationError> {
        let reordered = reorder(self.list.value(), source, destination)?;
        if source == destination {
            return Ok(());
        }
        self.dispatch(Action::Replace { list: reordered });
        Ok(())
    }

    /// Move an item using indices into the currently visible view.
    ///
    /// The dragged item takes the canonical position of the item it was
    /// dropped on; hidden items keep their relative order.
    ///
    /// # Errors
    /// Returns [`ValidationError::IndexOutOfRange`] if either index is outside
    /// the visible view.
    pub fn move_visible(&mut self, source: usize, destination: usize) -> Result<(), ValidationError> {
        let (from, to) = {
            let view = self.visible();
            let canonical = |index: usize, which: IndexRole| {
                view.get(index)
                    .and_then(|item| self.list.value().position(&item.id))
                    .ok_or(ValidationError::IndexOutOfRange {
                        which,
                        index,
                        len: view.len(),
                    })
            };
            (
                canonical(source, IndexRole::Source)?,
                canonical(destination, IndexRole::Destination)?,
            )
        };
        self.move_item(from, to)
    }

    /// Items visible under `mode`.
    #[must_use]
    pub fn view(&self, mode: FilterMode) -> Vec<&TaskItem> {
        filter(self.list.value(), mode)
    }

    /// Items visible under the current filter mode.
    #[must_use]
    pub fn visible(&self) -> Vec<&TaskItem> {
        self.view(self.filter_mode)
    }

    /// Footer counter text.
    #[must_use]
    pub fn items_left(&self) -> String {
        items_left_label(self.list.value().len())
    }

    /// Flip the theme flag and snapshot it. Returns the new value.
    pub fn toggle_theme(&mut self) -> bool {
        self.dark_theme.replace(&self.store, |dark| !dark);
        let dark = *self.dark_theme.value();
        debug!(dark_theme = dark, "Toggled theme");
        dark
    }
}

impl<S, G> TodoSession<S, G> {
    /// Change the displayed subset. Not persisted.
    pub const fn set_filter_mode(&mut self, mode: FilterMode) {
        self.filter_mode = mode;
    }

    /// Currently displayed subset.
    #[must_use]
    pub const fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    /// Canonical list.
    #[must_use]
    pub const fn list(&self) -> &TaskList {
        self.list.value()
    }

    /// Whether the dark theme is on.
    #[must_use]
    pub const fn dark_theme(&self) -> bool {
        *self.dark_theme.value()
    }

    /// Snapshot writes that failed across both namespaces.
    #[must_use]
    pub const fn failed_writes(&self) -> usize {
        self.list.failed_writes() + self.dark_theme.failed_writes()
    }

    /// Backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}
