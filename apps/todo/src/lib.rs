//! Todo list application built on the Tickbox state layer.
//!
//! - [`TodoReducer`] owns the list transitions (add, toggle, delete, clear)
//! - [`TodoStore`] runs the reducer and hands out derived views
//! - [`ValidationRules`] checks user input before it reaches the store
//! - [`TodoFeature`] routes deletes through confirmation dialogs
//! - [`AppConfig`] reads the settings from the environment
//!
//! # Quick Start
//!
//! ```
//! use tickbox_dialogs::DialogManager;
//! use tickbox_todo::{TodoFeature, TodoStore};
//!
//! # fn main() -> Result<(), tickbox_todo::TodoError> {
//! let dialogs = DialogManager::new();
//! let feature = TodoFeature::new(TodoStore::default(), dialogs.clone());
//!
//! let milk = feature.add("Buy milk")?;
//! feature.add("Walk dog")?;
//! feature.toggle(&milk)?;
//!
//! let stats = feature.stats();
//! assert_eq!(stats.summary().as_deref(), Some("1 of 2 completed"));
//!
//! // Clearing needs confirmation
//! feature.request_clear_all()?;
//! dialogs.confirm("clear-all-todos")?;
//! assert_eq!(feature.stats().count_label(), "0 todos");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod feature;
pub mod reducer;
pub mod store;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use config::{AppConfig, ConfigError};
pub use feature::{TodoError, TodoFeature};
pub use reducer::{TodoEnvironment, TodoReducer};
pub use store::{TodoSnapshot, TodoStore};
pub use types::{TodoAction, TodoId, TodoItem, TodoState, TodoStats};
pub use validation::{ValidationError, ValidationRules};
