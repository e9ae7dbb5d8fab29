//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The todo list here
//! is a read-only snapshot pushed in by the `TodoStore` subscriber; mutations
//! go through `AppContext`.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{FilterMode, Theme, TodoList, TodoRecord};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Latest todo list snapshot
    pub todos: TodoList,
    /// Footer filter tab (not persisted)
    pub filter: FilterMode,
    /// Current colour theme
    pub theme: Theme,
}

impl AppState {
    pub fn new(todos: TodoList, theme: Theme) -> Self {
        Self {
            todos,
            theme,
            ..Default::default()
        }
    }

    /// Records shown under the current filter, in list order
    pub fn visible_todos(&self) -> Vec<TodoRecord> {
        self.todos.filtered(self.filter).cloned().collect()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the todo snapshot
pub fn store_sync_todos(store: &AppStore, list: &TodoList) {
    *store.todos().write() = list.clone();
}

pub fn store_set_theme(store: &AppStore, theme: Theme) {
    *store.theme().write() = theme;
}

pub fn store_set_filter(store: &AppStore, filter: FilterMode) {
    *store.filter().write() = filter;
}
