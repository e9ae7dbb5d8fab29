//! Domain Layer
//!
//! Todo entities, the list and its mutations, and the display preferences.
//! Nothing here touches storage.

mod error;
mod filter;
mod theme;
mod todo;
mod todo_list;

pub use error::{StoreError, StoreResult};
pub use filter::FilterMode;
pub use theme::Theme;
pub use todo::{capitalize_first, Target, TodoId, TodoRecord};
pub use todo_list::{items_left_label, TodoList, SEED_TODOS};
