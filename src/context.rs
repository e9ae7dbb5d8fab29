//! Application Context
//!
//! Owns the persisted stores and exposes the mutations the view may request.

use leptos::prelude::*;
use todo_core::{ThemeStore, TodoId, TodoStore};

use crate::storage::BrowserStorage;
use crate::store::{store_set_theme, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    todos: StoredValue<TodoStore<BrowserStorage>, LocalStorage>,
    theme: StoredValue<ThemeStore<BrowserStorage>, LocalStorage>,
    store: AppStore,
}

impl AppContext {
    pub fn new(todos: TodoStore<BrowserStorage>, theme: ThemeStore<BrowserStorage>, store: AppStore) -> Self {
        Self {
            todos: StoredValue::new_local(todos),
            theme: StoredValue::new_local(theme),
            store,
        }
    }

    /// Add a todo at the top of the list
    pub fn add(&self, text: &str) {
        self.todos.update_value(|todos| {
            let id = todos.add(text);
            log::debug!("[APP] Added {}", id);
        });
    }

    pub fn delete(&self, id: TodoId) {
        self.todos.update_value(|todos| {
            todos.delete(id);
        });
    }

    pub fn set_completed(&self, id: TodoId, completed: bool) {
        self.todos.update_value(|todos| {
            todos.set_completed(id, completed);
        });
    }

    /// "Clear Completed": un-complete every todo
    pub fn reset_completed(&self) {
        self.todos.update_value(|todos| todos.reset_completed());
    }

    /// Swap `dragged` with the row it was dropped on
    pub fn swap(&self, dragged: TodoId, target: TodoId) {
        self.todos.update_value(|todos| {
            todos.swap(dragged, target);
        });
    }

    pub fn toggle_theme(&self) {
        self.theme.update_value(|theme| {
            theme.toggle();
        });
        let theme = self.theme.with_value(|theme| theme.theme());
        log::debug!("[APP] Theme is now {}", theme.as_str());
        store_set_theme(&self.store, theme);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
