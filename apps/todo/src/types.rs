//! Domain types for the todo list.
//!
//! A todo list is an ordered collection of items, newest first. Items can be
//! added, toggled, deleted one at a time, or cleared all at once.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tickbox_macros::Action;

/// Unique identifier for a todo item
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Wraps an identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TodoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// What needs doing
    pub text: String,
    /// Whether the todo is done
    pub completed: bool,
    /// When the todo was added
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    /// Creates a new, not yet completed todo item
    #[must_use]
    pub const fn new(id: TodoId, text: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at,
        }
    }

    /// Flips the completed flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// State of the todo list
///
/// Items are ordered newest first. Statistics are always computed from the
/// items, never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// All todos, newest first
    pub todos: Vec<TodoItem>,
}

impl TodoState {
    /// Creates a new empty todo state
    #[must_use]
    pub const fn new() -> Self {
        Self { todos: Vec::new() }
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|todo| &todo.id == id)
    }

    /// Returns a mutable todo by ID
    pub fn get_mut(&mut self, id: &TodoId) -> Option<&mut TodoItem> {
        self.todos.iter_mut().find(|todo| &todo.id == id)
    }

    /// Checks if a todo exists
    #[must_use]
    pub fn exists(&self, id: &TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the number of todos
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Returns true if there are no todos
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Counts of all, completed, and active todos
    #[must_use]
    pub fn stats(&self) -> TodoStats {
        let total = self.todos.len();
        let completed = self.todos.iter().filter(|todo| todo.completed).count();
        TodoStats {
            total,
            completed,
            active: total - completed,
        }
    }
}

/// Derived counts over the todo list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoStats {
    /// Number of todos
    pub total: usize,
    /// Number of completed todos
    pub completed: usize,
    /// Number of todos not yet completed
    pub active: usize,
}

impl TodoStats {
    /// Progress line such as `"1 of 3 completed"`, or `None` for an empty list
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        (self.total > 0).then(|| format!("{} of {} completed", self.completed, self.total))
    }

    /// Item count with the noun agreeing: `"1 todo"`, `"3 todos"`
    #[must_use]
    pub fn count_label(&self) -> String {
        if self.total == 1 {
            "1 todo".to_string()
        } else {
            format!("{} todos", self.total)
        }
    }

    /// Whether a "clear all" control is worth offering
    #[must_use]
    pub const fn can_clear_all(&self) -> bool {
        self.total > 1
    }
}

/// Changes to the todo list
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Add a todo at the front of the list
    Add {
        /// Identifier for the new todo
        id: TodoId,
        /// Text of the todo
        text: String,
    },

    /// Flip a todo between active and completed
    Toggle {
        /// Todo to toggle
        id: TodoId,
    },

    /// Remove a todo
    Delete {
        /// Todo to delete
        id: TodoId,
    },

    /// Remove every todo
    Clear,
}
