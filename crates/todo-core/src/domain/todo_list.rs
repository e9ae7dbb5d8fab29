//! Todo List
//!
//! Ordered sequence of todo records and the mutations applied to it.
//! Every mutation is a silent no-op when its target cannot be resolved;
//! return values only report whether anything changed.

use serde::{Deserialize, Serialize};

use super::filter::FilterMode;
use super::todo::{capitalize_first, Target, TodoId, TodoRecord};

/// Default list used when nothing has been persisted yet
pub const SEED_TODOS: [&str; 6] = [
    "Complete online JavaScript course",
    "Jog around the park 3x",
    "10 minutes meditation",
    "Read for 1 hour",
    "Pick up groceries",
    "Complete Todo App",
];

/// Ordered todo records. Index 0 is the top of the list.
///
/// Serializes as a plain JSON array of `{text, completed}` objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<TodoRecord>", into = "Vec<TodoRecord>")]
pub struct TodoList {
    items: Vec<TodoRecord>,
    next_id: u32,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The six sample todos, all incomplete
    pub fn seeded() -> Self {
        Self::from_texts(SEED_TODOS)
    }

    /// Build a list from texts in display order
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let records = texts
            .into_iter()
            .map(|text| TodoRecord::new(TodoId::default(), text))
            .collect();
        Self::from_records(records)
    }

    /// Adopt records verbatim, assigning fresh ids in display order
    pub fn from_records(records: Vec<TodoRecord>) -> Self {
        let mut list = Self {
            items: Vec::with_capacity(records.len()),
            next_id: 0,
        };
        for mut record in records {
            record.id = list.allocate_id();
            list.items.push(record);
        }
        list
    }

    fn allocate_id(&mut self) -> TodoId {
        let id = TodoId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn items(&self) -> &[TodoRecord] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TodoRecord> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TodoRecord> {
        self.items.get(index)
    }

    /// Index of the first record addressed by `target`
    pub fn position<'a>(&self, target: impl Into<Target<'a>>) -> Option<usize> {
        let target = target.into();
        self.items.iter().position(|record| record.matches(target))
    }

    pub fn find<'a>(&self, target: impl Into<Target<'a>>) -> Option<&TodoRecord> {
        self.position(target).map(|index| &self.items[index])
    }

    // ========================
    // Mutations
    // ========================

    /// Insert a new incomplete record at the top.
    ///
    /// Only the first character is capitalized. Empty text is accepted.
    pub fn add(&mut self, raw_text: &str) -> TodoId {
        let id = self.allocate_id();
        self.items.insert(0, TodoRecord::new(id, capitalize_first(raw_text)));
        id
    }

    /// Remove the first matching record, keeping the order of the rest
    pub fn delete<'a>(&mut self, target: impl Into<Target<'a>>) -> Option<TodoRecord> {
        let index = self.position(target)?;
        Some(self.items.remove(index))
    }

    /// Set the completion flag of the first matching record.
    ///
    /// Returns `false` when nothing matched.
    pub fn set_completed<'a>(&mut self, target: impl Into<Target<'a>>, completed: bool) -> bool {
        let target = target.into();
        match self.items.iter_mut().find(|record| record.matches(target)) {
            Some(record) => {
                record.completed = completed;
                true
            }
            None => false,
        }
    }

    /// Mark every record incomplete. Nothing is removed.
    ///
    /// This is what the "Clear Completed" control does.
    #[doc(alias = "clear_completed")]
    pub fn reset_completed(&mut self) {
        for record in &mut self.items {
            record.completed = false;
        }
    }

    /// Swap the first record matching `dragged` with the record at `target_index`.
    ///
    /// This is a two-element swap, not a move: records between the two
    /// positions stay where they are. Dragging the record at 0 onto index 2
    /// exchanges 0 and 2 and leaves 1 alone. Swapping the same pair of
    /// positions again restores the original order.
    ///
    /// No-op when `dragged` is not found or `target_index` is out of bounds.
    pub fn reorder<'a>(&mut self, dragged: impl Into<Target<'a>>, target_index: usize) -> bool {
        if target_index >= self.items.len() {
            return false;
        }
        match self.position(dragged) {
            Some(source_index) => {
                self.items.swap(source_index, target_index);
                true
            }
            None => false,
        }
    }

    /// Swap `dragged` with the record it was dropped on.
    ///
    /// `target` is looked up in the full list, so a drop made in a filtered
    /// view lands on the same record it was made over. Hidden records keep
    /// their positions.
    pub fn swap<'a, 'b>(&mut self, dragged: impl Into<Target<'a>>, target: impl Into<Target<'b>>) -> bool {
        match self.position(target) {
            Some(target_index) => self.reorder(dragged, target_index),
            None => false,
        }
    }

    // ========================
    // Derived views
    // ========================

    /// Records visible under `mode`, in list order
    pub fn filtered(&self, mode: FilterMode) -> impl Iterator<Item = &TodoRecord> + '_ {
        self.items.iter().filter(move |record| mode.accepts(record))
    }

    /// Number of incomplete records
    pub fn items_left(&self) -> usize {
        self.items.iter().filter(|record| !record.completed).count()
    }
}

impl From<Vec<TodoRecord>> for TodoList {
    fn from(records: Vec<TodoRecord>) -> Self {
        Self::from_records(records)
    }
}

impl From<TodoList> for Vec<TodoRecord> {
    fn from(list: TodoList) -> Self {
        list.items
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a TodoRecord;
    type IntoIter = std::slice::Iter<'a, TodoRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Footer text for the items-left counter
pub fn items_left_label(count: usize) -> String {
    if count == 1 {
        "1 item left".to_string()
    } else {
        format!("{} items left", count)
    }
}
