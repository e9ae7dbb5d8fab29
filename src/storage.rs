//! Browser Storage
//!
//! `localStorage`-backed `KeyValueStore`. When the browser refuses access
//! (private mode, disabled storage) reads report nothing stored and writes
//! fail, so the app keeps working in memory for the session.

use todo_core::{KeyValueStore, StoreError, StoreResult};
use wasm_bindgen::JsValue;

#[derive(Clone, Debug)]
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    /// The window's `localStorage`
    pub fn local() -> Self {
        let storage = web_sys::window().and_then(|win| match win.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("[STORAGE] localStorage unavailable: {}", js_error(&e));
                None
            }
        });
        if storage.is_none() {
            log::warn!("[STORAGE] Running without persistence");
        }
        Self { storage }
    }

    fn area(&self) -> StoreResult<&web_sys::Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("localStorage is not accessible".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let Some(area) = self.storage.as_ref() else {
            return Ok(None);
        };
        area.get_item(key).map_err(|e| StoreError::Read {
            key: key.to_string(),
            reason: js_error(&e),
        })
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.area()?.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: js_error(&e),
        })
    }
}

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
