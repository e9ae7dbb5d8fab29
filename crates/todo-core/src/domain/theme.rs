//! Theme Setting
//!
//! Light/dark display preference, persisted separately from the todos.

use serde::{Deserialize, Serialize};

/// Visual theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything unrecognised falls back to dark.
    pub fn from_str(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Themed CSS class, e.g. `card-dark`
    pub fn class(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_defaults_to_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::from_str("purple"), Theme::Dark);
        assert_eq!(Theme::from_str(""), Theme::Dark);
    }

    #[test]
    fn test_theme_round_trip() {
        assert_eq!(Theme::from_str(Theme::Light.as_str()), Theme::Light);
        assert_eq!(Theme::from_str(Theme::Dark.as_str()), Theme::Dark);
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), r#""light""#);
    }

    #[test]
    fn test_toggle_and_class() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Dark.class("body"), "body-dark");
        assert_eq!(Theme::Light.class("card"), "card-light");
    }
}
