//! Filter Mode
//!
//! Read-only projection selector for the list footer tabs.

use super::todo::TodoRecord;

/// Which records the list view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Active, FilterMode::Completed];

    pub fn accepts(self, record: &TodoRecord) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !record.completed,
            FilterMode::Completed => record.completed,
        }
    }

    /// Tab caption
    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Active => "Active",
            FilterMode::Completed => "Completed",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Active => "active",
            FilterMode::Completed => "completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TodoId;

    #[test]
    fn test_accepts() {
        let mut record = TodoRecord::new(TodoId(0), "x");
        assert!(FilterMode::All.accepts(&record));
        assert!(FilterMode::Active.accepts(&record));
        assert!(!FilterMode::Completed.accepts(&record));

        record.completed = true;
        assert!(FilterMode::All.accepts(&record));
        assert!(!FilterMode::Active.accepts(&record));
        assert!(FilterMode::Completed.accepts(&record));
    }

    #[test]
    fn test_default_and_labels() {
        assert_eq!(FilterMode::default(), FilterMode::All);
        let labels: Vec<_> = FilterMode::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels, vec!["All", "Active", "Completed"]);
        assert_eq!(FilterMode::Completed.as_str(), "completed");
    }
}
