//! Store Configuration
//!
//! Durable key names shared by the todo and theme stores.

/// Key holding the serialized todo list
pub const DEFAULT_TODOS_KEY: &str = "persist:primary";
/// Key holding the theme string
pub const DEFAULT_THEME_KEY: &str = "theme";

/// Where the stores keep their state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub todos_key: String,
    pub theme_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            todos_key: DEFAULT_TODOS_KEY.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys_are_distinct() {
        let config = StoreConfig::default();
        assert_eq!(config.todos_key, "persist:primary");
        assert_eq!(config.theme_key, "theme");
        assert_ne!(config.todos_key, config.theme_key);
    }
}
