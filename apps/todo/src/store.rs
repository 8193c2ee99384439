//! The todo store: owns the list and hands out derived views.

use crate::reducer::{TodoEnvironment, TodoReducer};
use crate::types::{TodoAction, TodoId, TodoItem, TodoState, TodoStats};
use std::sync::Arc;
use tickbox_core::environment::{Clock, IdGenerator, SystemClock, UuidGenerator};
use tickbox_runtime::{Snapshot, Store, StoreConfig, StoreError, Subscription};

/// Snapshot of the todo list, handed to subscribers
pub type TodoSnapshot = Snapshot<TodoState>;

/// Owner of the todo list
///
/// Cloning yields another handle to the same list. The store accepts any
/// text; validate user input with
/// [`ValidationRules`](crate::validation::ValidationRules) first, or go
/// through [`TodoFeature`](crate::feature::TodoFeature).
///
/// # Example
///
/// ```
/// use tickbox_todo::TodoStore;
///
/// # fn main() -> Result<(), tickbox_runtime::StoreError> {
/// let store = TodoStore::default();
/// let id = store.add("Buy milk")?;
/// store.toggle(&id)?;
///
/// let stats = store.stats();
/// assert_eq!((stats.total, stats.completed, stats.active), (1, 1, 0));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TodoStore {
    store: Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>,
    ids: Arc<dyn IdGenerator>,
}

impl TodoStore {
    /// Creates an empty store with the given time and id sources
    #[must_use]
    pub fn new(clock: impl Clock + 'static, ids: impl IdGenerator + 'static) -> Self {
        Self::with_state(TodoState::new(), clock, ids)
    }

    /// Creates a store starting from existing todos
    #[must_use]
    pub fn with_state(
        state: TodoState,
        clock: impl Clock + 'static,
        ids: impl IdGenerator + 'static,
    ) -> Self {
        Self {
            store: Store::with_config(
                state,
                TodoReducer::new(),
                TodoEnvironment::new(Arc::new(clock)),
                StoreConfig::default().with_name("todos"),
            ),
            ids: Arc::new(ids),
        }
    }

    /// Adds a todo at the front of the list and returns its id
    ///
    /// # Errors
    ///
    /// [`StoreError::ShutdownInProgress`] after [`TodoStore::shutdown`].
    pub fn add(&self, text: impl Into<String>) -> Result<TodoId, StoreError> {
        let id = TodoId::new(self.ids.next_id());
        self.store.send(TodoAction::Add {
            id: id.clone(),
            text: text.into(),
        })?;
        tracing::debug!(todo = %id, "Todo added");
        Ok(id)
    }

    /// Flips a todo between active and completed; unknown ids are ignored
    ///
    /// # Errors
    ///
    /// [`StoreError::ShutdownInProgress`] after [`TodoStore::shutdown`].
    pub fn toggle(&self, id: &TodoId) -> Result<(), StoreError> {
        self.store
            .send(TodoAction::Toggle { id: id.clone() })
            .map(|_| ())
    }

    /// Removes a todo; unknown ids are ignored
    ///
    /// # Errors
    ///
    /// [`StoreError::ShutdownInProgress`] after [`TodoStore::shutdown`].
    pub fn delete(&self, id: &TodoId) -> Result<(), StoreError> {
        self.store
            .send(TodoAction::Delete { id: id.clone() })
            .map(|_| ())
    }

    /// Removes every todo
    ///
    /// # Errors
    ///
    /// [`StoreError::ShutdownInProgress`] after [`TodoStore::shutdown`].
    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.send(TodoAction::Clear).map(|_| ())
    }

    /// Counts computed from the current list
    #[must_use]
    pub fn stats(&self) -> TodoStats {
        self.store.state(TodoState::stats)
    }

    /// All todos, newest first
    #[must_use]
    pub fn todos(&self) -> Vec<TodoItem> {
        self.store.state(|state| state.todos.clone())
    }

    /// One todo by id
    #[must_use]
    pub fn get(&self, id: &TodoId) -> Option<TodoItem> {
        self.store.state(|state| state.get(id).cloned())
    }

    /// The whole list as an immutable snapshot
    #[must_use]
    pub fn snapshot(&self) -> TodoSnapshot {
        self.store.snapshot()
    }

    /// Register a listener called with a snapshot after every change
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&TodoSnapshot) + Send + Sync + 'static,
    {
        self.store.subscribe(listener)
    }

    /// Stop accepting changes; the list stays readable
    pub fn shutdown(&self) {
        self.store.shutdown();
    }
}

impl Default for TodoStore {
    /// Wall-clock time and random UUID ids
    fn default() -> Self {
        Self::new(SystemClock, UuidGenerator)
    }
}

impl std::fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoStore")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
