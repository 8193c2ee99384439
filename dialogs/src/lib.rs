//! # Tickbox Dialogs
//!
//! Confirmation dialogs decoupled from whoever renders them.
//!
//! Code that needs a confirmation builds a [`DialogConfig`] (usually through a
//! preset) and hands it to a [`DialogManager`]. A rendering layer subscribes
//! to the manager, draws the visible dialogs, and reports the user's answer
//! back through [`DialogManager::confirm`] or [`DialogManager::cancel`].
//!
//! ## Example
//!
//! ```
//! use tickbox_dialogs::{DialogConfig, DialogManager};
//!
//! # fn main() -> Result<(), tickbox_runtime::StoreError> {
//! let manager = DialogManager::new();
//! let _subscription = manager.subscribe(|snapshot| {
//!     for dialog in snapshot.visible() {
//!         println!("{}: {}", dialog.config.title, dialog.config.message);
//!     }
//! });
//!
//! manager.show_dialog(DialogConfig::clear_all_todos(3, || println!("cleared")))?;
//! manager.cancel("clear-all-todos")?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod manager;
pub mod presets;
pub mod registry;

pub use config::{DialogCallback, DialogConfig, DialogId, DialogView};
pub use manager::{DialogManager, DialogSnapshot};
pub use presets::ConfirmOptions;
pub use registry::{DialogAction, DialogReducer, DialogRegistry, DialogState};
