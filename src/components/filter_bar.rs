//! Filter Bar Component
//!
//! Items-left counter, filter tabs and the Clear Completed control.

use leptos::prelude::*;
use todo_core::{items_left_label, FilterMode};

use crate::context::use_app_context;
use crate::store::{store_set_filter, use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let items_left = move || store.todos().with(|todos| items_left_label(todos.items_left()));

    view! {
        <div class=move || format!("todo-list__filters {}", store.theme().get().class("card"))>
            <div data-cy="items-left">{items_left}</div>

            <div class="todo-list__filters-modes">
                {FilterMode::ALL.into_iter().map(|mode| {
                    let is_active = move || store.filter().get() == mode;
                    view! {
                        <button
                            class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                            data-cy=format!("{}-filter", mode.as_str())
                            on:click=move |_| store_set_filter(&store, mode)
                        >
                            {mode.label()}
                        </button>
                    }
                }).collect_view()}
            </div>

            <button
                class="filter-btn"
                data-cy="clear-completed"
                on:click=move |_| ctx.reset_completed()
            >
                "Clear Completed"
            </button>
        </div>
    }
}
