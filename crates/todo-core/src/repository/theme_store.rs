//! Theme Store
//!
//! Persists the light/dark preference under its own key.

use log::{debug, warn};

use super::traits::KeyValueStore;
use crate::config::StoreConfig;
use crate::domain::Theme;

#[derive(Debug)]
pub struct ThemeStore<S: KeyValueStore> {
    theme: Theme,
    storage: S,
    key: String,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Read the stored theme; absent or unreadable falls back to dark
    pub fn open(storage: S, config: &StoreConfig) -> Self {
        let key = config.theme_key.clone();
        let theme = match storage.get(&key) {
            Ok(Some(raw)) => Theme::from_str(&raw),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!("[THEME] {}", e);
                Theme::default()
            }
        };
        debug!("[THEME] Starting in {} mode", theme.as_str());
        Self { theme, storage, key }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = self.storage.set(&self.key, theme.as_str()) {
            warn!("[THEME] {}", e);
        }
    }

    /// Flip light/dark and return the new value
    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.set_theme(next);
        next
    }
}
