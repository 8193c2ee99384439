//! Fixed identifiers, labels, and colors used by dialogs.

/// Id of the single-todo delete confirmation
pub const DELETE_TODO_DIALOG_ID: &str = "delete-todo";

/// Id of the clear-all confirmation
pub const CLEAR_ALL_TODOS_DIALOG_ID: &str = "clear-all-todos";

/// Prefix of generic confirmation ids; a UUID is appended per call
pub const CONFIRM_ACTION_ID_PREFIX: &str = "confirm-action-";

/// Confirm label used when none is given
pub const DEFAULT_CONFIRM_TEXT: &str = "Confirm";

/// Cancel label used when none is given
pub const DEFAULT_CANCEL_TEXT: &str = "Cancel";

/// Confirm button color for destructive actions
pub const DESTRUCTIVE_COLOR: &str = "#FF3B30";

/// Confirm button color for everything else
pub const PRIMARY_COLOR: &str = "#007AFF";

/// Cancel button color
pub const CANCEL_COLOR: &str = "#8E8E93";
