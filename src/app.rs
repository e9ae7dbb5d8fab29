//! Todo App
//!
//! Composition root: opens the persisted stores, wires the todo store's
//! change notifications into the reactive app store, and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{StoreConfig, ThemeStore, TodoStore};

use crate::components::{Header, TodoListView};
use crate::context::AppContext;
use crate::storage::BrowserStorage;
use crate::store::{store_sync_todos, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = StoreConfig::default();
    let storage = BrowserStorage::local();

    let mut todos = TodoStore::open(storage.clone(), &config);
    let theme = ThemeStore::open(storage, &config);
    log::info!("[APP] Starting with {} todos, {} theme", todos.list().len(), theme.theme().as_str());

    let store = Store::new(AppState::new(todos.list().clone(), theme.theme()));
    todos.subscribe(move |list| store_sync_todos(&store, list));

    provide_context(store);
    provide_context(AppContext::new(todos, theme, store));

    view! {
        <div class=move || format!("app {}", store.theme().get().class("body")) data-cy="body-bg">
            <Header />
            <TodoListView />
        </div>
    }
}
