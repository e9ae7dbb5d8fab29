//! Todo Store
//!
//! The single authoritative todo list. Applies mutations, writes the whole
//! list back to storage after each change and notifies subscribers.

use std::fmt;

use log::{debug, warn};
use serde::Deserialize;

use super::traits::KeyValueStore;
use crate::config::StoreConfig;
use crate::domain::{StoreError, StoreResult, Target, TodoId, TodoList, TodoRecord};

type Subscriber = Box<dyn Fn(&TodoList)>;

/// Persisted todo list with change notification
///
/// Not `Send`: mutations are expected from one UI thread, in issue order.
pub struct TodoStore<S: KeyValueStore> {
    list: TodoList,
    storage: S,
    key: String,
    subscribers: Vec<Subscriber>,
}

impl<S: KeyValueStore> TodoStore<S> {
    /// Load the persisted list, or seed and persist the sample list when
    /// nothing usable is stored.
    pub fn open(storage: S, config: &StoreConfig) -> Self {
        let key = config.todos_key.clone();
        let (list, rewrite) = match load_list(&storage, &key) {
            Ok(Some(Loaded::Current(list))) => {
                debug!("[STORE] Loaded {} todos from `{}`", list.len(), key);
                (list, false)
            }
            Ok(Some(Loaded::Envelope(list))) => {
                debug!("[STORE] Migrated {} todos from redux-persist layout under `{}`", list.len(), key);
                (list, true)
            }
            Ok(None) => {
                debug!("[STORE] Nothing stored under `{}`, seeding", key);
                (TodoList::seeded(), true)
            }
            Err(e) => {
                warn!("[STORE] {}, seeding", e);
                (TodoList::seeded(), true)
            }
        };

        let store = Self {
            list,
            storage,
            key,
            subscribers: Vec::new(),
        };
        if rewrite {
            store.persist();
        }
        store
    }

    /// Current list snapshot
    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Call `subscriber` with the new list after every applied mutation
    pub fn subscribe(&mut self, subscriber: impl Fn(&TodoList) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    // ========================
    // Mutations
    // ========================

    /// See [`TodoList::add`]
    pub fn add(&mut self, raw_text: &str) -> TodoId {
        let id = self.list.add(raw_text);
        self.commit();
        id
    }

    /// See [`TodoList::delete`]
    pub fn delete<'a>(&mut self, target: impl Into<Target<'a>>) -> Option<TodoRecord> {
        let removed = self.list.delete(target);
        if removed.is_some() {
            self.commit();
        }
        removed
    }

    /// See [`TodoList::set_completed`]
    pub fn set_completed<'a>(&mut self, target: impl Into<Target<'a>>, completed: bool) -> bool {
        let changed = self.list.set_completed(target, completed);
        if changed {
            self.commit();
        }
        changed
    }

    /// See [`TodoList::reset_completed`]
    #[doc(alias = "clear_completed")]
    pub fn reset_completed(&mut self) {
        self.list.reset_completed();
        self.commit();
    }

    /// See [`TodoList::reorder`]. Swaps, never shifts.
    pub fn reorder<'a>(&mut self, dragged: impl Into<Target<'a>>, target_index: usize) -> bool {
        let changed = self.list.reorder(dragged, target_index);
        if changed {
            self.commit();
        }
        changed
    }

    /// See [`TodoList::swap`]. This is the drop handler for drag-to-reorder.
    pub fn swap<'a, 'b>(&mut self, dragged: impl Into<Target<'a>>, target: impl Into<Target<'b>>) -> bool {
        let changed = self.list.swap(dragged, target);
        if changed {
            self.commit();
        }
        changed
    }

    // ========================
    // Persistence
    // ========================

    /// Write the current list, reporting failure to the caller
    pub fn flush(&self) -> StoreResult<()> {
        let json = serde_json::to_string(&self.list)?;
        self.storage.set(&self.key, &json)
    }

    fn persist(&self) {
        if let Err(e) = self.flush() {
            warn!("[STORE] {}", e);
        }
    }

    fn commit(&self) {
        self.persist();
        for subscriber in &self.subscribers {
            subscriber(&self.list);
        }
    }
}

/// A payload read back from storage
enum Loaded {
    /// Plain `[{text, completed}]` array
    Current(TodoList),
    /// Older redux-persist layout, rewritten as an array on open
    Envelope(TodoList),
}

/// redux-persist root: each slice is stored as its own JSON string
#[derive(Deserialize)]
struct PersistEnvelope {
    todos: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TodosSlice {
    all_todos: TodoBucket,
}

#[derive(Deserialize)]
struct TodoBucket {
    todos: Vec<TodoRecord>,
}

fn load_list<S: KeyValueStore>(storage: &S, key: &str) -> StoreResult<Option<Loaded>> {
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_str::<TodoList>(&raw) {
        Ok(list) => Ok(Some(Loaded::Current(list))),
        Err(source) => match decode_envelope(&raw) {
            Some(list) => Ok(Some(Loaded::Envelope(list))),
            None => Err(StoreError::Decode { key: key.to_string(), source }),
        },
    }
}

fn decode_envelope(raw: &str) -> Option<TodoList> {
    let envelope: PersistEnvelope = serde_json::from_str(raw).ok()?;
    let slice: TodosSlice = serde_json::from_str(&envelope.todos).ok()?;
    Some(TodoList::from_records(slice.all_todos.todos))
}

impl<S: KeyValueStore + fmt::Debug> fmt::Debug for TodoStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoStore")
            .field("list", &self.list)
            .field("storage", &self.storage)
            .field("key", &self.key)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
