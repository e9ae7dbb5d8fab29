//! Todo Core
//!
//! Layered architecture:
//! - domain: todo records, the list and its mutations, filters, theme
//! - repository: key-value storage abstraction and the persisted stores
//! - config: storage key names

pub mod config;
pub mod domain;
pub mod repository;

pub use config::StoreConfig;
pub use domain::{
    capitalize_first, items_left_label, FilterMode, StoreError, StoreResult, Target, Theme, TodoId,
    TodoList, TodoRecord, SEED_TODOS,
};
pub use repository::{KeyValueStore, MemoryStorage, ThemeStore, TodoStore};
