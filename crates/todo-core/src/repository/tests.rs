//! Repository Integration Tests
//!
//! Stores over in-memory storage, including reopening to observe persisted state.

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::config::StoreConfig;
    use crate::domain::{FilterMode, StoreError, StoreResult, Theme, TodoId, TodoList, SEED_TODOS};
    use crate::repository::{KeyValueStore, MemoryStorage, ThemeStore, TodoStore};

    fn open_seeded() -> (TodoStore<MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::new();
        let store = TodoStore::open(storage.clone(), &StoreConfig::default());
        (store, storage)
    }

    fn texts(list: &TodoList) -> Vec<String> {
        list.iter().map(|r| r.text.clone()).collect()
    }

    /// Storage whose writes always fail
    #[derive(Default)]
    struct ReadOnlyStorage {
        inner: MemoryStorage,
        attempts: Cell<usize>,
    }

    impl KeyValueStore for ReadOnlyStorage {
        fn get(&self, key: &str) -> StoreResult<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, _value: &str) -> StoreResult<()> {
            self.attempts.set(self.attempts.get() + 1);
            Err(StoreError::Write { key: key.to_string(), reason: "quota exceeded".to_string() })
        }
    }

    /// Storage that cannot be read at all
    struct UnavailableStorage;

    impl KeyValueStore for UnavailableStorage {
        fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Err(StoreError::Unavailable("no window".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Unavailable("no window".to_string()))
        }
    }

    #[test]
    fn test_first_open_seeds_and_persists() {
        let (store, storage) = open_seeded();
        assert_eq!(texts(store.list()), SEED_TODOS);

        let raw = storage.get("persist:primary").unwrap().expect("seed should be persisted");
        let stored: TodoList = serde_json::from_str(&raw).unwrap();
        assert_eq!(texts(&stored), SEED_TODOS);
    }

    #[test]
    fn test_scenario_add() {
        let (mut store, _) = open_seeded();
        store.add("do laundry");
        assert_eq!(store.list().len(), 7);
        assert_eq!(store.list().get(0).unwrap().text, "Do laundry");
    }

    #[test]
    fn test_scenario_delete() {
        let (mut store, _) = open_seeded();
        store.delete("Complete Todo App");
        assert_eq!(store.list().len(), 5);
        assert!(store.list().find("Complete Todo App").is_none());
    }

    #[test]
    fn test_scenario_toggle() {
        let (mut store, _) = open_seeded();
        store.set_completed("Jog around the park 3x", true);
        store.set_completed("Jog around the park 3x", false);
        assert!(!store.list().find("Jog around the park 3x").unwrap().completed);
        assert_eq!(store.list().len(), 6);
    }

    #[test]
    fn test_scenario_reorder() {
        let (mut store, _) = open_seeded();
        store.reorder("Complete online JavaScript course", 2);
        assert_eq!(store.list().get(2).unwrap().text, "Complete online JavaScript course");
        assert_eq!(store.list().get(0).unwrap().text, "10 minutes meditation");
    }

    #[test]
    fn test_reopen_observes_latest_state() {
        let (mut store, storage) = open_seeded();
        store.add("pick up mail");
        store.set_completed("Read for 1 hour", true);
        store.delete("Jog around the park 3x");
        store.reorder("Pick up mail", 1);
        let expected = texts(store.list());
        drop(store);

        let reopened = TodoStore::open(storage, &StoreConfig::default());
        assert_eq!(texts(reopened.list()), expected);
        assert!(reopened.list().find("Read for 1 hour").unwrap().completed);
        assert_eq!(reopened.list().items_left(), expected.len() - 1);
    }

    #[test]
    fn test_reopen_does_not_reseed_empty_list() {
        let (mut store, storage) = open_seeded();
        for text in SEED_TODOS {
            store.delete(text);
        }
        assert!(store.list().is_empty());

        let reopened = TodoStore::open(storage, &StoreConfig::default());
        assert!(reopened.list().is_empty());
    }

    #[test]
    fn test_loads_legacy_payload() {
        let storage = MemoryStorage::new();
        storage
            .set("persist:primary", r#"[{"todo":"Old entry","completed":true},{"todo":"Another"}]"#)
            .unwrap();
        let store = TodoStore::open(storage, &StoreConfig::default());
        assert_eq!(texts(store.list()), vec!["Old entry", "Another"]);
        assert!(store.list().get(0).unwrap().completed);
        assert!(!store.list().get(1).unwrap().completed);
    }

    #[test]
    fn test_loads_redux_persist_envelope() {
        let storage = MemoryStorage::new();
        let envelope = serde_json::json!({
            "todos": r#"{"allTodos":{"todos":[{"todo":"Buy milk","completed":true}]}}"#,
            "_persist": r#"{"version":-1,"rehydrated":true}"#,
        });
        storage.set("persist:primary", &envelope.to_string()).unwrap();

        let mut store = TodoStore::open(storage.clone(), &StoreConfig::default());
        assert_eq!(texts(store.list()), vec!["Buy milk"]);
        assert!(store.list().get(0).unwrap().completed);

        // Rewritten as a plain array straight away
        let raw = storage.get("persist:primary").unwrap().unwrap();
        let stored: TodoList = serde_json::from_str(&raw).unwrap();
        assert_eq!(texts(&stored), vec!["Buy milk"]);

        store.add("eggs");
        let reopened = TodoStore::open(storage, &StoreConfig::default());
        assert_eq!(texts(reopened.list()), vec!["Eggs", "Buy milk"]);
    }

    #[test]
    fn test_envelope_without_todo_slice_falls_back_to_seed() {
        let storage = MemoryStorage::new();
        storage.set("persist:primary", r#"{"_persist":"{\"version\":-1}"}"#).unwrap();
        let store = TodoStore::open(storage, &StoreConfig::default());
        assert_eq!(texts(store.list()), SEED_TODOS);
    }

    #[test]
    fn test_swap_under_filter_persists() {
        let (mut store, storage) = open_seeded();
        store.set_completed("Complete online JavaScript course", true);
        store.set_completed("10 minutes meditation", true);
        let active: Vec<TodoId> = store.list().filtered(FilterMode::Active).map(|r| r.id).collect();
        // Jog(1), Read(3), Groceries(4), Todo App(5)
        assert_eq!(active.len(), 4);

        assert!(store.swap(active[0], active[3]));
        let expected = vec![
            "Complete online JavaScript course",
            "Complete Todo App",
            "10 minutes meditation",
            "Read for 1 hour",
            "Pick up groceries",
            "Jog around the park 3x",
        ];
        assert_eq!(texts(store.list()), expected);
        assert_eq!(texts(TodoStore::open(storage, &StoreConfig::default()).list()), expected);

        assert!(!store.swap(active[0], TodoId(999)));
    }

    #[test]
    fn test_corrupt_payload_falls_back_to_seed() {
        let storage = MemoryStorage::new();
        storage.set("persist:primary", "{not json").unwrap();
        let store = TodoStore::open(storage.clone(), &StoreConfig::default());
        assert_eq!(texts(store.list()), SEED_TODOS);
        // The seed replaces the unreadable payload
        assert!(storage.get("persist:primary").unwrap().unwrap().starts_with('['));
    }

    #[test]
    fn test_unavailable_storage_still_works_in_memory() {
        let mut store = TodoStore::open(UnavailableStorage, &StoreConfig::default());
        assert_eq!(store.list().len(), 6);
        store.add("offline");
        assert_eq!(store.list().get(0).unwrap().text, "Offline");
        assert!(matches!(store.flush(), Err(StoreError::Unavailable(_))));
    }

    #[test]
    fn test_failed_writes_are_absorbed() {
        let mut store = TodoStore::open(ReadOnlyStorage::default(), &StoreConfig::default());
        let after_open = store.storage().attempts.get();
        store.add("still works");
        store.reset_completed();
        assert_eq!(store.list().len(), 7);
        assert_eq!(store.storage().attempts.get(), after_open + 2);
        assert!(matches!(store.flush(), Err(StoreError::Write { .. })));
    }

    #[test]
    fn test_subscribers_see_every_applied_mutation() {
        let (mut store, _) = open_seeded();
        let seen: Rc<RefCell<Vec<usize>>> = Rc::default();
        let sink = seen.clone();
        store.subscribe(move |list| sink.borrow_mut().push(list.len()));

        store.add("one");
        store.delete("One");
        store.reset_completed();
        assert_eq!(*seen.borrow(), vec![7, 6, 6]);
    }

    #[test]
    fn test_noops_neither_write_nor_notify() {
        let (mut store, storage) = open_seeded();
        let before = storage.get("persist:primary").unwrap();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        store.subscribe(move |_| counter.set(counter.get() + 1));

        // Mutate storage behind the store's back to detect any rewrite
        storage.set("persist:primary", "sentinel").unwrap();

        assert!(store.delete("missing").is_none());
        assert!(!store.set_completed("missing", true));
        assert!(!store.reorder("Read for 1 hour", 42));
        assert!(!store.reorder("missing", 0));

        assert_eq!(calls.get(), 0);
        assert_eq!(storage.get("persist:primary").unwrap().as_deref(), Some("sentinel"));
        assert!(before.is_some());
    }

    #[test]
    fn test_custom_keys_keep_stores_apart() {
        let keyed = |prefix: &str| StoreConfig {
            todos_key: format!("{}:persist:primary", prefix),
            ..StoreConfig::default()
        };
        let storage = MemoryStorage::new();
        let mut first = TodoStore::open(storage.clone(), &keyed("a"));
        let second = TodoStore::open(storage.clone(), &keyed("b"));
        first.add("only in a");
        assert_eq!(first.list().len(), 7);
        assert_eq!(second.list().len(), 6);
        assert!(storage.get("a:persist:primary").unwrap().is_some());
        assert!(storage.get("b:persist:primary").unwrap().is_some());
    }

    #[test]
    fn test_theme_defaults_to_dark() {
        let store = ThemeStore::open(MemoryStorage::new(), &StoreConfig::default());
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn test_theme_toggle_persists() {
        let storage = MemoryStorage::new();
        let mut store = ThemeStore::open(storage.clone(), &StoreConfig::default());
        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("light"));

        let reopened = ThemeStore::open(storage.clone(), &StoreConfig::default());
        assert_eq!(reopened.theme(), Theme::Light);

        let mut reopened = reopened;
        reopened.set_theme(Theme::Dark);
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_theme_is_independent_of_todos() {
        let storage = MemoryStorage::new();
        let config = StoreConfig::default();
        let mut todos = TodoStore::open(storage.clone(), &config);
        let mut theme = ThemeStore::open(storage.clone(), &config);

        theme.toggle();
        todos.reset_completed();
        assert_eq!(todos.list().len(), 6);
        assert_eq!(ThemeStore::open(storage, &config).theme(), Theme::Light);
    }

    #[test]
    fn test_theme_unknown_or_unreadable_value() {
        let storage = MemoryStorage::new();
        storage.set("theme", "sepia").unwrap();
        assert_eq!(ThemeStore::open(storage, &StoreConfig::default()).theme(), Theme::Dark);

        let mut store = ThemeStore::open(UnavailableStorage, &StoreConfig::default());
        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(store.toggle(), Theme::Light);
    }
}
