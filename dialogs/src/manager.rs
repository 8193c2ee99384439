//! The dialog manager: one registry of confirmations per session.
//!
//! Presentation state lives in a [`Store`] driven by [`DialogReducer`], so
//! every change reaches subscribers as a versioned snapshot. Callbacks are
//! not part of that state: they sit in a side table until the dialog is
//! confirmed, cancelled, hidden, or replaced.
//!
//! The side table is keyed by id and generation, the same generation the
//! registry entry records for the show. Confirming runs the callbacks of the
//! show that is on screen, even when other handles show the same id at the
//! same time.

use crate::config::{DialogCallback, DialogConfig, DialogId};
use crate::registry::{DialogAction, DialogReducer, DialogRegistry, DialogState};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tickbox_runtime::{Snapshot, Store, StoreConfig, StoreError, Subscription};

/// Snapshot of every dialog, handed to subscribers
pub type DialogSnapshot = Snapshot<DialogRegistry>;

type DialogStore = Store<DialogRegistry, DialogAction, (), DialogReducer>;

/// One show of one dialog
type PendingKey = (DialogId, u64);

struct PendingDialog {
    on_confirm: DialogCallback,
    on_cancel: DialogCallback,
}

/// Which callback to run when resolving a dialog
#[derive(Clone, Copy, Debug)]
enum Resolution {
    Confirm,
    Cancel,
}

impl Resolution {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Confirm => "confirm",
            Self::Cancel => "cancel",
        }
    }
}

/// Registry of confirmation dialogs
///
/// Cloning yields another handle to the same registry. Create one per
/// session and call [`DialogManager::shutdown`] when it ends.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use tickbox_dialogs::{DialogConfig, DialogManager};
///
/// # fn main() -> Result<(), tickbox_runtime::StoreError> {
/// let manager = DialogManager::new();
/// let deleted = Arc::new(AtomicBool::new(false));
///
/// let flag = Arc::clone(&deleted);
/// manager.show_dialog(DialogConfig::delete_todo("Buy milk", move || {
///     flag.store(true, Ordering::SeqCst);
/// }))?;
///
/// assert!(manager.confirm("delete-todo")?);
/// assert!(deleted.load(Ordering::SeqCst));
/// assert!(!manager.get_dialog("delete-todo").unwrap().visible);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DialogManager {
    store: DialogStore,
    pending: Arc<Mutex<HashMap<PendingKey, PendingDialog>>>,
    generations: Arc<AtomicU64>,
}

impl DialogManager {
    /// Create an empty manager
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: Store::with_config(
                DialogRegistry::new(),
                DialogReducer::new(),
                (),
                StoreConfig::default().with_name("dialogs"),
            ),
            pending: Arc::new(Mutex::new(HashMap::new())),
            generations: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Show a dialog
    ///
    /// Any entry under the same id is replaced in place, along with its
    /// pending callbacks. Without an `on_cancel`, cancelling just dismisses
    /// the dialog. Listeners are notified once.
    ///
    /// # Errors
    ///
    /// [`StoreError::ShutdownInProgress`] after [`DialogManager::shutdown`].
    pub fn show_dialog(&self, config: DialogConfig) -> Result<DialogSnapshot, StoreError> {
        if self.store.is_shutdown() {
            return Err(StoreError::ShutdownInProgress);
        }

        let (view, on_confirm, on_cancel) = config.into_parts();
        let id = view.id.clone();
        let on_cancel = on_cancel.unwrap_or_else(|| default_cancel_handler(id.clone()));
        let generation = self.generations.fetch_add(1, Ordering::Relaxed) + 1;

        // Callbacks go in first so the entry is never visible without them
        self.lock_pending()
            .insert((id.clone(), generation), PendingDialog { on_confirm, on_cancel });

        tracing::info!(dialog = %id, title = %view.title, generation, "Showing dialog");
        let snapshot = match self.store.send(DialogAction::Show { view, generation }) {
            Ok(snapshot) => snapshot,
            Err(error) => {
                self.lock_pending().remove(&(id, generation));
                return Err(error);
            },
        };

        // Older shows can no longer reach the screen
        let current = snapshot
            .get(id.as_str())
            .map_or(generation, |entry| entry.generation);
        let replaced = self.drop_pending(&id, |pending| pending < current);
        if replaced > 0 {
            tracing::debug!(dialog = %id, replaced, "Dropped callbacks of replaced dialog");
        }

        Ok(snapshot)
    }

    /// Hide a dialog without running any callback
    ///
    /// The entry and its configuration stay in the registry. Hiding an id
    /// that was never shown changes nothing and notifies no one.
    ///
    /// # Errors
    ///
    /// [`StoreError::ShutdownInProgress`] after [`DialogManager::shutdown`],
    /// whether or not the id was ever shown.
    pub fn hide_dialog(&self, id: &str) -> Result<(), StoreError> {
        if self.store.is_shutdown() {
            return Err(StoreError::ShutdownInProgress);
        }

        if !self.store.state(|registry| registry.contains(id)) {
            return Ok(());
        }

        let id = DialogId::from(id);
        tracing::info!(dialog = %id, "Hiding dialog");
        let snapshot = self.store.send(DialogAction::Hide {
            id: id.clone(),
            generation: None,
        })?;

        // Shows issued after this hide keep their callbacks
        if let Some(hidden) = snapshot.get(id.as_str()).map(|entry| entry.generation) {
            self.drop_pending(&id, |pending| pending <= hidden);
        }
        Ok(())
    }

    /// Hide every dialog without running any callback
    ///
    /// Listeners are notified once, even if nothing was visible.
    ///
    /// # Errors
    ///
    /// [`StoreError::ShutdownInProgress`] after [`DialogManager::shutdown`].
    pub fn hide_all_dialogs(&self) -> Result<(), StoreError> {
        if self.store.is_shutdown() {
            return Err(StoreError::ShutdownInProgress);
        }

        tracing::info!("Hiding all dialogs");
        let snapshot = self.store.send(DialogAction::HideAll)?;

        self.lock_pending().retain(|(id, generation), _| {
            snapshot
                .get(id.as_str())
                .is_none_or(|entry| *generation > entry.generation)
        });
        Ok(())
    }

    /// Look up one dialog, visible or not
    #[must_use]
    pub fn get_dialog(&self, id: &str) -> Option<DialogState> {
        self.store.state(|registry| registry.get(id).cloned())
    }

    /// Every dialog ever shown
    #[must_use]
    pub fn dialogs(&self) -> DialogSnapshot {
        self.store.snapshot()
    }

    /// Dialogs currently on screen, in first-shown order
    #[must_use]
    pub fn visible_dialogs(&self) -> Vec<DialogState> {
        self.store
            .state(|registry| registry.visible().cloned().collect())
    }

    /// Register a listener called with a snapshot after every change
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&DialogSnapshot) + Send + Sync + 'static,
    {
        self.store.subscribe(listener)
    }

    /// Confirm a visible dialog
    ///
    /// Hides the dialog, then runs its `on_confirm`. Returns `false` without
    /// doing anything if the dialog is not visible or was already resolved.
    ///
    /// # Errors
    ///
    /// [`StoreError::ShutdownInProgress`] after [`DialogManager::shutdown`].
    pub fn confirm(&self, id: &str) -> Result<bool, StoreError> {
        self.resolve(id, Resolution::Confirm)
    }

    /// Cancel a visible dialog
    ///
    /// Hides the dialog, then runs its `on_cancel`, or the default handler
    /// if none was given. Returns `false` without doing anything if the
    /// dialog is not visible or was already resolved.
    ///
    /// # Errors
    ///
    /// [`StoreError::ShutdownInProgress`] after [`DialogManager::shutdown`].
    pub fn cancel(&self, id: &str) -> Result<bool, StoreError> {
        self.resolve(id, Resolution::Cancel)
    }

    /// Returns true if a dialog is on screen and waiting for confirm or cancel
    #[must_use]
    pub fn has_pending(&self, id: &str) -> bool {
        self.visible_generation(id).is_some_and(|generation| {
            self.lock_pending()
                .contains_key(&(DialogId::from(id), generation))
        })
    }

    /// Number of registered listeners
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.store.listener_count()
    }

    /// Drop every pending callback and listener, and reject further changes
    ///
    /// The registry stays readable. Calling this more than once is harmless.
    pub fn shutdown(&self) {
        self.lock_pending().clear();
        self.store.shutdown();
    }

    fn resolve(&self, id: &str, resolution: Resolution) -> Result<bool, StoreError> {
        if self.store.is_shutdown() {
            return Err(StoreError::ShutdownInProgress);
        }

        let Some(generation) = self.visible_generation(id) else {
            tracing::debug!(dialog = id, resolution = resolution.as_str(), "Dialog not visible");
            return Ok(false);
        };

        // Removing the callbacks decides which caller resolves this show
        let key = (DialogId::from(id), generation);
        let Some(pending) = self.lock_pending().remove(&key) else {
            return Ok(false);
        };
        let (id, generation) = key;

        tracing::info!(dialog = %id, resolution = resolution.as_str(), generation, "Resolving dialog");
        self.store.send(DialogAction::Hide {
            id,
            generation: Some(generation),
        })?;

        // Lock released and entry hidden, so the callback may show dialogs again
        match resolution {
            Resolution::Confirm => (pending.on_confirm)(),
            Resolution::Cancel => (pending.on_cancel)(),
        }

        Ok(true)
    }

    fn visible_generation(&self, id: &str) -> Option<u64> {
        self.store.state(|registry| {
            registry
                .get(id)
                .filter(|entry| entry.visible)
                .map(|entry| entry.generation)
        })
    }

    fn drop_pending(&self, id: &DialogId, superseded: impl Fn(u64) -> bool) -> usize {
        let mut pending = self.lock_pending();
        let before = pending.len();
        pending.retain(|(pending_id, generation), _| pending_id != id || !superseded(*generation));
        before - pending.len()
    }

    fn lock_pending(&self) -> MutexGuard<'_, HashMap<PendingKey, PendingDialog>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for DialogManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DialogManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogManager")
            .field("store", &self.store)
            .field("pending", &self.lock_pending().len())
            .finish()
    }
}

/// Dismiss-only handler installed when a dialog has no `on_cancel`
///
/// Hiding is done by the manager before any cancel handler runs, so there is
/// nothing left to do but record it.
fn default_cancel_handler(id: DialogId) -> DialogCallback {
    Box::new(move || {
        tracing::debug!(dialog = %id, "Default cancel handler for dialog");
    })
}
