//! Reducer logic for the todo list.
//!
//! The reducer never rejects: text validation happens before an `Add` is
//! built, and actions naming an unknown todo are silent no-ops.

use crate::types::{TodoAction, TodoItem, TodoState};
use std::sync::Arc;
use tickbox_core::{environment::Clock, reducer::Reducer};

/// Environment dependencies for the todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Clock for stamping new todos
    pub clock: Arc<dyn Clock>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl std::fmt::Debug for TodoEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoEnvironment").finish_non_exhaustive()
    }
}

/// Reducer for the todo list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        match action {
            TodoAction::Add { id, text } => {
                if state.exists(&id) {
                    tracing::warn!(todo = %id, "Ignoring todo with duplicate id");
                    return;
                }

                state.todos.insert(0, TodoItem::new(id, text, env.clock.now()));
            },

            TodoAction::Toggle { id } => {
                if let Some(todo) = state.get_mut(&id) {
                    todo.toggle();
                }
            },

            TodoAction::Delete { id } => {
                state.todos.retain(|todo| todo.id != id);
            },

            TodoAction::Clear => {
                state.todos.clear();
            },
        }
    }
}
