//! The todo screen's behaviour: validated input and confirmed deletes.
//!
//! [`TodoFeature`] joins a [`TodoStore`] and a [`DialogManager`]. Destructive
//! requests do not touch the list directly; they show a confirmation whose
//! confirm callback performs the change.

use crate::store::TodoStore;
use crate::types::{TodoId, TodoItem, TodoStats};
use crate::validation::{ValidationError, ValidationRules};
use thiserror::Error;
use tickbox_dialogs::{DialogConfig, DialogManager};
use tickbox_runtime::StoreError;

/// Errors from todo feature operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// The text did not pass validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store or dialog manager has been shut down
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Todo list plus the confirmations around it
///
/// # Example
///
/// ```
/// use tickbox_dialogs::DialogManager;
/// use tickbox_todo::{TodoFeature, TodoStore};
///
/// # fn main() -> Result<(), tickbox_todo::TodoError> {
/// let dialogs = DialogManager::new();
/// let feature = TodoFeature::new(TodoStore::default(), dialogs.clone());
///
/// let id = feature.add("  Buy milk ")?;
/// assert_eq!(feature.todos()[0].text, "Buy milk");
///
/// feature.request_delete(&id)?;
/// dialogs.confirm("delete-todo")?;
/// assert!(feature.todos().is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct TodoFeature {
    store: TodoStore,
    dialogs: DialogManager,
    rules: ValidationRules,
}

impl TodoFeature {
    /// Wires a store to a dialog manager with default validation rules
    #[must_use]
    pub fn new(store: TodoStore, dialogs: DialogManager) -> Self {
        Self::with_rules(store, dialogs, ValidationRules::default())
    }

    /// Wires a store to a dialog manager with custom validation rules
    #[must_use]
    pub const fn with_rules(store: TodoStore, dialogs: DialogManager, rules: ValidationRules) -> Self {
        Self {
            store,
            dialogs,
            rules,
        }
    }

    /// Validates and adds a todo
    ///
    /// # Errors
    ///
    /// - [`TodoError::Validation`] if the trimmed text breaks the rules; the
    ///   list is unchanged
    /// - [`TodoError::Store`] after shutdown
    pub fn add(&self, raw: &str) -> Result<TodoId, TodoError> {
        let text = match self.rules.validate(raw) {
            Ok(text) => text,
            Err(error) => {
                tracing::debug!(%error, "Rejected todo text");
                return Err(error.into());
            },
        };

        let id = self.store.add(text)?;
        tracing::info!(todo = %id, "Added todo");
        Ok(id)
    }

    /// Flips a todo between active and completed
    ///
    /// # Errors
    ///
    /// [`TodoError::Store`] after shutdown.
    pub fn toggle(&self, id: &TodoId) -> Result<(), TodoError> {
        Ok(self.store.toggle(id)?)
    }

    /// Asks for confirmation before deleting a todo
    ///
    /// Returns `false` without showing anything if the todo does not exist.
    ///
    /// # Errors
    ///
    /// [`TodoError::Store`] after shutdown.
    pub fn request_delete(&self, id: &TodoId) -> Result<bool, TodoError> {
        let Some(todo) = self.store.get(id) else {
            return Ok(false);
        };

        let store = self.store.clone();
        let target = id.clone();
        self.dialogs
            .show_dialog(DialogConfig::delete_todo(&todo.text, move || {
                match store.delete(&target) {
                    Ok(()) => tracing::info!(todo = %target, "Deleted todo"),
                    Err(error) => tracing::warn!(todo = %target, %error, "Failed to delete todo"),
                }
            }))?;

        Ok(true)
    }

    /// Asks for confirmation before deleting every todo
    ///
    /// Returns `false` without showing anything if the list is empty.
    ///
    /// # Errors
    ///
    /// [`TodoError::Store`] after shutdown.
    pub fn request_clear_all(&self) -> Result<bool, TodoError> {
        let count = self.store.stats().total;
        if count == 0 {
            return Ok(false);
        }

        let store = self.store.clone();
        self.dialogs
            .show_dialog(DialogConfig::clear_all_todos(count, move || {
                match store.clear() {
                    Ok(()) => tracing::info!(count, "Cleared all todos"),
                    Err(error) => tracing::warn!(%error, "Failed to clear todos"),
                }
            }))?;

        Ok(true)
    }

    /// Counts computed from the current list
    #[must_use]
    pub fn stats(&self) -> TodoStats {
        self.store.stats()
    }

    /// All todos, newest first
    #[must_use]
    pub fn todos(&self) -> Vec<TodoItem> {
        self.store.todos()
    }

    /// The underlying store
    #[must_use]
    pub const fn store(&self) -> &TodoStore {
        &self.store
    }

    /// The dialog manager confirmations are shown on
    #[must_use]
    pub const fn dialogs(&self) -> &DialogManager {
        &self.dialogs
    }

    /// Shut down the store and the dialog manager
    pub fn shutdown(&self) {
        self.dialogs.shutdown();
        self.store.shutdown();
    }
}
