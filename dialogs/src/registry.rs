//! Dialog visibility state and the reducer that maintains it.
//!
//! Entries are kept in the order their id was first shown. Hiding never
//! removes an entry, so the last configuration shown under an id stays
//! inspectable.
//!
//! Every show carries a generation, and an entry only ever moves to a newer
//! one. When two shows of the same id race, the later-issued one wins no
//! matter which is reduced first.

use crate::config::{DialogId, DialogView};
use serde::{Deserialize, Serialize};
use tickbox_core::reducer::Reducer;
use tickbox_macros::Action;

/// Visibility of one dialog plus its resolved configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogState {
    /// Whether the dialog is currently on screen
    pub visible: bool,
    /// Show that produced this entry; increases every time the id is shown
    pub generation: u64,
    /// What was last shown under this id
    pub config: DialogView,
}

/// Every dialog ever shown, in first-shown order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogRegistry {
    entries: Vec<DialogState>,
}

impl DialogRegistry {
    /// Creates an empty registry
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Looks up a dialog by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&DialogState> {
        self.entries
            .iter()
            .find(|entry| entry.config.id.as_str() == id)
    }

    /// Checks if a dialog with this id has ever been shown
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Checks if a dialog with this id is on screen
    #[must_use]
    pub fn is_visible(&self, id: &str) -> bool {
        self.get(id).is_some_and(|entry| entry.visible)
    }

    /// All entries, visible or not
    pub fn iter(&self) -> impl Iterator<Item = &DialogState> {
        self.entries.iter()
    }

    /// Entries currently on screen
    pub fn visible(&self) -> impl Iterator<Item = &DialogState> {
        self.entries.iter().filter(|entry| entry.visible)
    }

    /// Number of entries, visible or not
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was ever shown
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn get_mut(&mut self, id: &DialogId) -> Option<&mut DialogState> {
        self.entries.iter_mut().find(|entry| &entry.config.id == id)
    }
}

/// Changes to the dialog registry
#[derive(Action, Clone, Debug, PartialEq, Eq)]
pub enum DialogAction {
    /// Show a dialog, replacing any older entry with the same id in place
    Show {
        /// Resolved configuration
        view: DialogView,
        /// Ignored if the entry already holds a newer show
        generation: u64,
    },

    /// Mark one dialog hidden
    Hide {
        /// Dialog to hide
        id: DialogId,
        /// Only hide this show; `None` hides whatever is there
        generation: Option<u64>,
    },

    /// Mark every dialog hidden
    HideAll,
}

/// Reducer for the dialog registry
#[derive(Clone, Copy, Debug, Default)]
pub struct DialogReducer;

impl DialogReducer {
    /// Creates a new `DialogReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for DialogReducer {
    type State = DialogRegistry;
    type Action = DialogAction;
    type Environment = ();

    fn reduce(&self, state: &mut Self::State, action: Self::Action, _env: &Self::Environment) {
        match action {
            DialogAction::Show { view, generation } => {
                if let Some(entry) = state.get_mut(&view.id) {
                    if entry.generation > generation {
                        tracing::debug!(
                            dialog = %view.id,
                            generation,
                            current = entry.generation,
                            "Ignoring superseded show"
                        );
                        return;
                    }
                    entry.visible = true;
                    entry.generation = generation;
                    entry.config = view;
                } else {
                    state.entries.push(DialogState {
                        visible: true,
                        generation,
                        config: view,
                    });
                }
            },
            DialogAction::Hide { id, generation } => {
                if let Some(entry) = state.get_mut(&id) {
                    if generation.is_none_or(|generation| generation == entry.generation) {
                        entry.visible = false;
                    }
                }
            },
            DialogAction::HideAll => {
                for entry in &mut state.entries {
                    entry.visible = false;
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DialogConfig;
    use tickbox_testing::ReducerTest;

    fn view(id: &str, title: &str) -> DialogView {
        DialogConfig::new(id, title, "message", || {}).view()
    }

    fn show(id: &str, title: &str, generation: u64) -> DialogAction {
        DialogAction::Show {
            view: view(id, title),
            generation,
        }
    }

    fn hide(id: &str) -> DialogAction {
        DialogAction::Hide {
            id: id.into(),
            generation: None,
        }
    }

    #[test]
    fn test_show_adds_visible_entry() {
        ReducerTest::new(DialogReducer::new())
            .with_env(())
            .given_state(DialogRegistry::new())
            .when_action(show("a", "A", 1))
            .then_state(|state| {
                assert_eq!(state.len(), 1);
                assert!(state.is_visible("a"));
                assert_eq!(state.get("a").unwrap().generation, 1);
            })
            .run();
    }

    #[test]
    fn test_show_same_id_overwrites_in_place() {
        ReducerTest::new(DialogReducer::new())
            .with_env(())
            .given_state(DialogRegistry::new())
            .when_action(show("a", "first", 1))
            .when_action(show("b", "other", 2))
            .when_action(show("a", "second", 3))
            .then_state(|state| {
                assert_eq!(state.len(), 2);
                let ids: Vec<_> = state.iter().map(|e| e.config.id.as_str()).collect();
                assert_eq!(ids, vec!["a", "b"]);
                assert_eq!(state.get("a").unwrap().config.title, "second");
            })
            .run();
    }

    #[test]
    fn test_hide_keeps_config() {
        ReducerTest::new(DialogReducer::new())
            .with_env(())
            .given_state(DialogRegistry::new())
            .when_action(show("a", "A", 1))
            .when_action(hide("a"))
            .then_state(|state| {
                let entry = state.get("a").unwrap();
                assert!(!entry.visible);
                assert_eq!(entry.config.title, "A");
            })
            .run();
    }

    #[test]
    fn test_hide_unknown_is_noop() {
        ReducerTest::new(DialogReducer::new())
            .with_env(())
            .given_state(DialogRegistry::new())
            .when_action(hide("missing"))
            .then_state(|state| assert!(state.is_empty()))
            .run();
    }

    #[test]
    fn test_hide_all() {
        ReducerTest::new(DialogReducer::new())
            .with_env(())
            .given_state(DialogRegistry::new())
            .when_action(show("a", "A", 1))
            .when_action(show("b", "B", 2))
            .when_action(DialogAction::HideAll)
            .then_state(|state| {
                assert_eq!(state.len(), 2);
                assert_eq!(state.visible().count(), 0);
            })
            .run();
    }

    #[test]
    fn test_reshow_after_hide() {
        ReducerTest::new(DialogReducer::new())
            .with_env(())
            .given_state(DialogRegistry::new())
            .when_action(show("a", "A", 1))
            .when_action(hide("a"))
            .when_action(show("a", "A again", 2))
            .then_state(|state| {
                assert_eq!(state.len(), 1);
                assert!(state.is_visible("a"));
                assert_eq!(state.get("a").unwrap().config.title, "A again");
            })
            .run();
    }

    #[test]
    fn test_older_show_reduced_late_is_ignored() {
        ReducerTest::new(DialogReducer::new())
            .with_env(())
            .given_state(DialogRegistry::new())
            .when_action(show("a", "newer", 2))
            .when_action(show("a", "older", 1))
            .then_state(|state| {
                let entry = state.get("a").unwrap();
                assert!(entry.visible);
                assert_eq!(entry.generation, 2);
                assert_eq!(entry.config.title, "newer");
            })
            .run();
    }

    #[test]
    fn test_hide_of_replaced_generation_is_ignored() {
        ReducerTest::new(DialogReducer::new())
            .with_env(())
            .given_state(DialogRegistry::new())
            .when_action(show("a", "first", 1))
            .when_action(show("a", "second", 2))
            .when_action(DialogAction::Hide {
                id: "a".into(),
                generation: Some(1),
            })
            .then_state(|state| {
                assert!(state.is_visible("a"));
                assert_eq!(state.get("a").unwrap().config.title, "second");
            })
            .run();
    }

    #[test]
    fn test_hide_of_current_generation() {
        ReducerTest::new(DialogReducer::new())
            .with_env(())
            .given_state(DialogRegistry::new())
            .when_action(show("a", "first", 1))
            .when_action(DialogAction::Hide {
                id: "a".into(),
                generation: Some(1),
            })
            .then_state(|state| assert!(!state.is_visible("a")))
            .run();
    }
}
