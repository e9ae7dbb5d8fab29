//! UI Components
//!
//! Leptos components for the todo page.

mod filter_bar;
mod header;
mod new_todo_form;
mod todo_item;
mod todo_list_view;

pub use filter_bar::FilterBar;
pub use header::Header;
pub use new_todo_form::NewTodoForm;
pub use todo_item::TodoItem;
pub use todo_list_view::TodoListView;
