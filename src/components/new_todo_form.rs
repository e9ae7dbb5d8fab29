//! New Todo Form Component
//!
//! Text input and Add button. Submitted text goes to the store as typed;
//! the store capitalizes it.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.add(&new_text.get_untracked());
        set_new_text.set(String::new());
    };

    let card = move || store.theme().get().class("card");

    view! {
        <form class=move || format!("todo-list__create {}", card()) on:submit=create_todo>
            <div class="todo-list__create-bullet"></div>
            <input
                type="text"
                class=card
                placeholder="Create a new todo..."
                data-cy="create-new-todo"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button
                type="submit"
                class=move || store.theme().get().class("button")
                data-cy="add-btn"
            >
                "Add"
            </button>
        </form>
    }
}
