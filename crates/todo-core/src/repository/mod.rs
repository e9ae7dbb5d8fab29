//! Repository Layer
//!
//! Storage abstraction and the stores persisted through it.

mod memory;
mod theme_store;
mod todo_store;
mod traits;

#[cfg(test)]
mod tests;

pub use memory::MemoryStorage;
pub use theme_store::ThemeStore;
pub use todo_store::TodoStore;
pub use traits::KeyValueStore;
