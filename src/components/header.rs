//! Header Component
//!
//! Title and the light/dark theme switch.

use leptos::prelude::*;
use todo_core::Theme;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let is_dark = move || store.theme().get() == Theme::Dark;

    view! {
        <div class=move || format!("header {}", store.theme().get().class("header"))>
            <div class="header__title">
                "TODO"
                <button
                    class="theme-switch"
                    title=move || if is_dark() { "Switch to light theme" } else { "Switch to dark theme" }
                    data-cy="color-theme-switch"
                    on:click=move |_| ctx.toggle_theme()
                >
                    // Sun while dark, moon while light
                    {move || if is_dark() { "☀" } else { "☾" }}
                </button>
            </div>
        </div>
    }
}
