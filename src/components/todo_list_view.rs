//! Todo List View Component
//!
//! Renders the filtered list with drag-to-swap support.
//! Uses leptos-dragdrop; a drop swaps the dragged row with the row under the pointer.

use leptos::prelude::*;
use leptos_dragdrop::*;
use todo_core::TodoId;

use crate::components::{FilterBar, NewTodoForm, TodoItem};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |dragged, target| {
        log::debug!("[DND] Drop: dragged={}, target={}", dragged, target);
        ctx.swap(TodoId(dragged), TodoId(target));
    });

    let visible = move || store.with(|state| state.visible_todos());

    view! {
        <div class="todo-list">
            <NewTodoForm />

            <div class=move || format!("todo-list__items {}", store.theme().get().class("box-shadow"))>
                <For
                    each=visible
                    key=|todo| (todo.id, todo.completed)
                    children=move |todo| view! { <TodoItem todo=todo dnd=dnd /> }
                />
            </div>

            <FilterBar />

            <div class="todo-list__drag-and-drop">"Drag and drop to reorder list"</div>
        </div>
    }
}
