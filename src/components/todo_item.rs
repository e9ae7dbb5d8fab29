//! Todo Item Component
//!
//! One row: completion bullet, text and delete cross.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_item_mouseenter, make_on_mousedown, make_on_mouseleave, DndSignals};
use todo_core::{Theme, TodoRecord};

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// CSS classes for a row in the given state
fn row_class(theme: Theme, completed: bool, dragging: bool, drop_target: bool) -> String {
    let mut c = format!("todo-item {}", theme.class("card"));
    if completed { c.push_str(" completed"); }
    if dragging { c.push_str(" dragging"); }
    if drop_target { c.push_str(" dragover"); }
    c
}

#[component]
pub fn TodoItem(todo: TodoRecord, dnd: DndSignals) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = todo.id;
    let completed = todo.completed;

    let on_mousedown = make_on_mousedown(dnd, id.0);
    let on_mouseenter = make_on_item_mouseenter(dnd, id.0);
    let on_mouseleave = make_on_mouseleave(dnd);

    let item_class = move || {
        row_class(store.theme().get(), completed, dnd.is_dragging(id.0), dnd.is_drop_target(id.0))
    };

    view! {
        <div
            class=item_class
            data-cy="todo-item"
            data-completed=completed.to_string()
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <div class="todo-item__text">
                <button
                    class=if completed { "todo-item__bullet checked" } else { "todo-item__bullet" }
                    data-cy="todo-item-bullet"
                    on:click=move |_| {
                        // Releasing a drag over a bullet must not toggle it
                        if dnd.suppresses_click() { return; }
                        ctx.set_completed(id, !completed);
                    }
                />
                <span class="todo-item__label" data-cy="todo-item-text">{todo.text}</span>
            </div>

            <button
                class="todo-item__delete"
                data-cy="delete-btn"
                on:click=move |_| {
                    if dnd.suppresses_click() { return; }
                    ctx.delete(id);
                }
            >
                "✕"
            </button>
        </div>
    }
}
