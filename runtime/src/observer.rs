//! Observer list with synchronous, ordered notification.
//!
//! [`Listeners`] keeps callbacks in registration order. [`Listeners::notify`]
//! copies the current list before calling anyone, so a listener may subscribe
//! or unsubscribe (itself or others) while being notified: changes take
//! effect from the next notification round on.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use tickbox_runtime::observer::Listeners;
//!
//! let listeners = Listeners::<u32>::new();
//! let seen = Arc::new(AtomicUsize::new(0));
//!
//! let counter = Arc::clone(&seen);
//! let subscription = listeners.subscribe(move |value| {
//!     counter.fetch_add(*value as usize, Ordering::SeqCst);
//! });
//!
//! listeners.notify(&2);
//! subscription.unsubscribe();
//! listeners.notify(&5);
//!
//! assert_eq!(seen.load(Ordering::SeqCst), 2);
//! ```

use std::sync::{Arc, Mutex, PoisonError, Weak};
use std::sync::atomic::{AtomicBool, Ordering};

/// A registered callback
pub type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Registry<T> {
    next_id: u64,
    entries: Vec<(u64, Listener<T>)>,
}

/// Removal half of a registry, object-safe so [`Subscription`] need not be generic
trait Detach: Send + Sync {
    fn detach(&self, id: u64) -> bool;
}

impl<T: 'static> Detach for Mutex<Registry<T>> {
    fn detach(&self, id: u64) -> bool {
        let mut registry = self.lock().unwrap_or_else(PoisonError::into_inner);
        let before = registry.entries.len();
        registry.entries.retain(|(entry_id, _)| *entry_id != id);
        registry.entries.len() != before
    }
}

/// Ordered list of listeners for values of type `T`
pub struct Listeners<T> {
    registry: Arc<Mutex<Registry<T>>>,
}

impl<T: 'static> Listeners<T> {
    /// Create an empty listener list
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Register a listener
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// unsubscribed or dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = {
            let mut registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
            let id = registry.next_id;
            registry.next_id += 1;
            registry.entries.push((id, Arc::new(listener)));
            id
        };

        let registry: Arc<dyn Detach> = self.registry.clone();
        Subscription {
            id,
            registry: Arc::downgrade(&registry),
            active: AtomicBool::new(true),
        }
    }

    /// Call every listener with `value`, in registration order
    ///
    /// Returns the number of listeners called.
    pub fn notify(&self, value: &T) -> usize {
        let snapshot: Vec<Listener<T>> = self
            .registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in &snapshot {
            listener(value);
        }

        snapshot.len()
    }

    /// Number of registered listeners
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }

    /// Returns true if nobody is listening
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every listener
    ///
    /// Outstanding [`Subscription`]s become inert.
    pub fn clear(&self) {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .clear();
    }
}

impl<T: 'static> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let len = self
            .registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len();
        f.debug_struct("Listeners").field("len", &len).finish()
    }
}

/// Handle to a registered listener
///
/// Dropping the handle unsubscribes. Unsubscribing is idempotent and never
/// affects other listeners.
#[must_use = "dropping a Subscription immediately unsubscribes the listener"]
pub struct Subscription {
    id: u64,
    registry: Weak<dyn Detach>,
    active: AtomicBool,
}

impl Subscription {
    /// Stop receiving notifications
    ///
    /// Returns true only for the call that actually removed the listener.
    pub fn unsubscribe(&self) -> bool {
        if !self.active.swap(false, Ordering::AcqRel) {
            return false;
        }

        self.registry
            .upgrade()
            .is_some_and(|registry| registry.detach(self.id))
    }

    /// Returns true until [`Subscription::unsubscribe`] has been called
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
