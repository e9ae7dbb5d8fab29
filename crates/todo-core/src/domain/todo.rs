//! Todo Entity
//!
//! A single task entry with display text and a completion flag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier handed out by the owning [`TodoList`](super::TodoList).
///
/// Ids are not persisted; a list assigns fresh ones in display order when it
/// is loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(pub u32);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A todo record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    /// Session-local identity
    #[serde(skip)]
    pub id: TodoId,
    /// Display text (`todo` is accepted for data written by older builds)
    #[serde(alias = "todo")]
    pub text: String,
    /// Completion status
    #[serde(default)]
    pub completed: bool,
}

impl TodoRecord {
    /// Create an incomplete record
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Whether this record is addressed by `target` (exact text match for text targets)
    pub fn matches(&self, target: Target<'_>) -> bool {
        match target {
            Target::Id(id) => self.id == id,
            Target::Text(text) => self.text == text,
        }
    }
}

/// How a mutation addresses a record.
///
/// Text targets compare the full display text exactly and resolve to the
/// first match, so duplicate texts are indistinguishable. Prefer ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    Id(TodoId),
    Text(&'a str),
}

impl From<TodoId> for Target<'_> {
    fn from(id: TodoId) -> Self {
        Target::Id(id)
    }
}

impl<'a> From<&'a str> for Target<'a> {
    fn from(text: &'a str) -> Self {
        Target::Text(text)
    }
}

impl<'a> From<&'a String> for Target<'a> {
    fn from(text: &'a String) -> Self {
        Target::Text(text.as_str())
    }
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
