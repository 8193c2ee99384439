//! Ready-made configurations for common confirmations.
//!
//! Presets are plain constructors: they never touch a manager. The delete
//! and clear-all presets use fixed ids, so showing one while another
//! instance is visible replaces it. Generic confirmations get a fresh id per
//! call and can be shown side by side.

use crate::config::{DialogConfig, DialogId};
use crate::constants::{
    CANCEL_COLOR, CLEAR_ALL_TODOS_DIALOG_ID, CONFIRM_ACTION_ID_PREFIX, DEFAULT_CANCEL_TEXT,
    DEFAULT_CONFIRM_TEXT, DELETE_TODO_DIALOG_ID, DESTRUCTIVE_COLOR, PRIMARY_COLOR,
};

/// Optional settings for [`DialogConfig::confirm_action`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfirmOptions {
    /// Confirm label, `"Confirm"` when `None`
    pub confirm_text: Option<String>,
    /// Cancel label, `"Cancel"` when `None`
    pub cancel_text: Option<String>,
    /// Red confirm button when true, blue otherwise
    pub destructive: bool,
}

impl ConfirmOptions {
    /// Set the confirm label
    #[must_use]
    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    /// Set the cancel label
    #[must_use]
    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    /// Mark the action as destructive
    #[must_use]
    pub const fn destructive(mut self, destructive: bool) -> Self {
        self.destructive = destructive;
        self
    }
}

impl DialogConfig {
    /// Confirmation for deleting one todo
    ///
    /// # Example
    ///
    /// ```
    /// use tickbox_dialogs::DialogConfig;
    ///
    /// let view = DialogConfig::delete_todo("Buy milk", || {}).view();
    /// assert_eq!(view.id.as_str(), "delete-todo");
    /// assert_eq!(
    ///     view.message,
    ///     "Are you sure you want to delete \"Buy milk\"? This action cannot be undone."
    /// );
    /// ```
    #[must_use]
    pub fn delete_todo<F>(todo_text: &str, on_confirm: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::new(
            DELETE_TODO_DIALOG_ID,
            "Delete Todo",
            format!("Are you sure you want to delete \"{todo_text}\"? This action cannot be undone."),
            on_confirm,
        )
        .with_confirm_text("Delete")
        .with_cancel_text(DEFAULT_CANCEL_TEXT)
        .with_confirm_button_color(DESTRUCTIVE_COLOR)
        .with_cancel_button_color(CANCEL_COLOR)
        .with_destructive(true)
    }

    /// Confirmation for deleting every todo
    #[must_use]
    pub fn clear_all_todos<F>(todo_count: usize, on_confirm: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::new(
            CLEAR_ALL_TODOS_DIALOG_ID,
            "Clear All Todos",
            format!("Are you sure you want to delete all {todo_count} todos? This action cannot be undone."),
            on_confirm,
        )
        .with_confirm_text("Clear All")
        .with_cancel_text(DEFAULT_CANCEL_TEXT)
        .with_confirm_button_color(DESTRUCTIVE_COLOR)
        .with_cancel_button_color(CANCEL_COLOR)
        .with_destructive(true)
    }

    /// Generic confirmation with a unique id
    #[must_use]
    pub fn confirm_action<F>(
        title: impl Into<String>,
        message: impl Into<String>,
        on_confirm: F,
        options: ConfirmOptions,
    ) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let id = DialogId::new(format!("{CONFIRM_ACTION_ID_PREFIX}{}", uuid::Uuid::new_v4()));
        let confirm_color = if options.destructive {
            DESTRUCTIVE_COLOR
        } else {
            PRIMARY_COLOR
        };

        Self::new(id, title, message, on_confirm)
            .with_confirm_text(
                options
                    .confirm_text
                    .unwrap_or_else(|| DEFAULT_CONFIRM_TEXT.to_string()),
            )
            .with_cancel_text(
                options
                    .cancel_text
                    .unwrap_or_else(|| DEFAULT_CANCEL_TEXT.to_string()),
            )
            .with_confirm_button_color(confirm_color)
            .with_cancel_button_color(CANCEL_COLOR)
            .with_destructive(options.destructive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_todo_preset() {
        let view = DialogConfig::delete_todo("Walk dog", || {}).view();

        assert_eq!(view.id.as_str(), DELETE_TODO_DIALOG_ID);
        assert_eq!(view.title, "Delete Todo");
        assert!(view.message.contains("\"Walk dog\""));
        assert_eq!(view.confirm_text, "Delete");
        assert_eq!(view.cancel_text, "Cancel");
        assert_eq!(view.confirm_button_color, DESTRUCTIVE_COLOR);
        assert_eq!(view.cancel_button_color, CANCEL_COLOR);
        assert!(view.destructive);
    }

    #[test]
    fn clear_all_preset() {
        let view = DialogConfig::clear_all_todos(7, || {}).view();

        assert_eq!(view.id.as_str(), CLEAR_ALL_TODOS_DIALOG_ID);
        assert_eq!(view.title, "Clear All Todos");
        assert_eq!(
            view.message,
            "Are you sure you want to delete all 7 todos? This action cannot be undone."
        );
        assert_eq!(view.confirm_text, "Clear All");
        assert!(view.destructive);
    }

    #[test]
    fn confirm_action_defaults() {
        let view = DialogConfig::confirm_action("Sync", "Sync now?", || {}, ConfirmOptions::default()).view();

        assert!(view.id.as_str().starts_with(CONFIRM_ACTION_ID_PREFIX));
        assert_eq!(view.title, "Sync");
        assert_eq!(view.message, "Sync now?");
        assert_eq!(view.confirm_text, "Confirm");
        assert_eq!(view.cancel_text, "Cancel");
        assert_eq!(view.confirm_button_color, PRIMARY_COLOR);
        assert!(!view.destructive);
    }

    #[test]
    fn confirm_action_options() {
        let options = ConfirmOptions::default()
            .confirm_text("Erase")
            .cancel_text("Keep")
            .destructive(true);
        let view = DialogConfig::confirm_action("Erase", "Erase all?", || {}, options).view();

        assert_eq!(view.confirm_text, "Erase");
        assert_eq!(view.cancel_text, "Keep");
        assert_eq!(view.confirm_button_color, DESTRUCTIVE_COLOR);
        assert!(view.destructive);
    }

    #[test]
    fn confirm_action_ids_are_unique() {
        let a = DialogConfig::confirm_action("a", "a", || {}, ConfirmOptions::default());
        let b = DialogConfig::confirm_action("b", "b", || {}, ConfirmOptions::default());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn presets_leave_cancel_unset() {
        assert!(!DialogConfig::delete_todo("x", || {}).has_on_cancel());
        assert!(!DialogConfig::clear_all_todos(2, || {}).has_on_cancel());
    }
}
