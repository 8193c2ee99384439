//! Dialog configuration: what a caller asks to confirm.
//!
//! A [`DialogConfig`] carries both presentation and behaviour. When the
//! manager registers it, the presentation half becomes a [`DialogView`] with
//! every default resolved, and the callbacks are kept aside until the dialog
//! is resolved.

use crate::constants::{
    CANCEL_COLOR, DEFAULT_CANCEL_TEXT, DEFAULT_CONFIRM_TEXT, DESTRUCTIVE_COLOR, PRIMARY_COLOR,
};
use serde::{Deserialize, Serialize};

/// A confirm or cancel callback
///
/// `FnOnce` because a dialog resolves at most once.
pub type DialogCallback = Box<dyn FnOnce() + Send + 'static>;

/// Key of a dialog in the registry
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DialogId(String);

impl DialogId {
    /// Wrap an id
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DialogId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for DialogId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DialogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Presentation of a dialog with every default resolved
///
/// This is what listeners see; it holds no callbacks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogView {
    /// Registry key
    pub id: DialogId,
    /// Heading
    pub title: String,
    /// Body text
    pub message: String,
    /// Confirm button label
    pub confirm_text: String,
    /// Cancel button label
    pub cancel_text: String,
    /// Confirm button color
    pub confirm_button_color: String,
    /// Cancel button color
    pub cancel_button_color: String,
    /// Whether confirming destroys data
    pub destructive: bool,
}

/// A request for user confirmation
///
/// # Example
///
/// ```
/// use tickbox_dialogs::DialogConfig;
///
/// let config = DialogConfig::new("archive", "Archive", "Archive 3 items?", || {})
///     .with_confirm_text("Archive")
///     .with_destructive(true);
///
/// let view = config.view();
/// assert_eq!(view.cancel_text, "Cancel");
/// assert_eq!(view.confirm_button_color, "#FF3B30");
/// ```
pub struct DialogConfig {
    /// Registry key; reusing a key replaces the earlier dialog
    pub id: DialogId,
    /// Heading
    pub title: String,
    /// Body text
    pub message: String,
    /// Confirm label, `"Confirm"` when `None`
    pub confirm_text: Option<String>,
    /// Cancel label, `"Cancel"` when `None`
    pub cancel_text: Option<String>,
    /// Confirm color, red or blue depending on `destructive` when `None`
    pub confirm_button_color: Option<String>,
    /// Cancel color, gray when `None`
    pub cancel_button_color: Option<String>,
    /// Whether confirming destroys data
    pub destructive: bool,
    on_confirm: DialogCallback,
    on_cancel: Option<DialogCallback>,
}

impl DialogConfig {
    /// Create a configuration with the required parts
    #[must_use]
    pub fn new<F>(
        id: impl Into<DialogId>,
        title: impl Into<String>,
        message: impl Into<String>,
        on_confirm: F,
    ) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            id: id.into(),
            title: title.into(),
            message: message.into(),
            confirm_text: None,
            cancel_text: None,
            confirm_button_color: None,
            cancel_button_color: None,
            destructive: false,
            on_confirm: Box::new(on_confirm),
            on_cancel: None,
        }
    }

    /// Set the confirm label
    #[must_use]
    pub fn with_confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    /// Set the cancel label
    #[must_use]
    pub fn with_cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    /// Set the confirm button color
    #[must_use]
    pub fn with_confirm_button_color(mut self, color: impl Into<String>) -> Self {
        self.confirm_button_color = Some(color.into());
        self
    }

    /// Set the cancel button color
    #[must_use]
    pub fn with_cancel_button_color(mut self, color: impl Into<String>) -> Self {
        self.cancel_button_color = Some(color.into());
        self
    }

    /// Mark the action as destructive
    #[must_use]
    pub const fn with_destructive(mut self, destructive: bool) -> Self {
        self.destructive = destructive;
        self
    }

    /// Run `on_cancel` when the user cancels
    ///
    /// Without one, cancelling just dismisses the dialog.
    #[must_use]
    pub fn with_on_cancel<F>(mut self, on_cancel: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.on_cancel = Some(Box::new(on_cancel));
        self
    }

    /// Returns true if a cancel callback was supplied
    #[must_use]
    pub const fn has_on_cancel(&self) -> bool {
        self.on_cancel.is_some()
    }

    /// The presentation this configuration resolves to
    #[must_use]
    pub fn view(&self) -> DialogView {
        let default_confirm_color = if self.destructive {
            DESTRUCTIVE_COLOR
        } else {
            PRIMARY_COLOR
        };

        DialogView {
            id: self.id.clone(),
            title: self.title.clone(),
            message: self.message.clone(),
            confirm_text: self
                .confirm_text
                .clone()
                .unwrap_or_else(|| DEFAULT_CONFIRM_TEXT.to_string()),
            cancel_text: self
                .cancel_text
                .clone()
                .unwrap_or_else(|| DEFAULT_CANCEL_TEXT.to_string()),
            confirm_button_color: self
                .confirm_button_color
                .clone()
                .unwrap_or_else(|| default_confirm_color.to_string()),
            cancel_button_color: self
                .cancel_button_color
                .clone()
                .unwrap_or_else(|| CANCEL_COLOR.to_string()),
            destructive: self.destructive,
        }
    }

    /// Split into the resolved view and the callbacks
    pub(crate) fn into_parts(self) -> (DialogView, DialogCallback, Option<DialogCallback>) {
        let view = self.view();
        (view, self.on_confirm, self.on_cancel)
    }
}

impl std::fmt::Debug for DialogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogConfig")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("confirm_text", &self.confirm_text)
            .field("cancel_text", &self.cancel_text)
            .field("confirm_button_color", &self.confirm_button_color)
            .field("cancel_button_color", &self.cancel_button_color)
            .field("destructive", &self.destructive)
            .field("on_cancel", &self.on_cancel.as_ref().map(|_| "<callback>"))
            .finish_non_exhaustive()
    }
}
