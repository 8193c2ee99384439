//! # Tickbox Runtime
//!
//! Runtime implementation for the Tickbox state layer.
//!
//! This crate provides the [`Store`] that owns a feature's state, runs its
//! reducer, and notifies observers, all synchronously on the caller's thread.
//!
//! ## Core Components
//!
//! - **Store**: Owns state, runs the reducer, notifies observers
//! - **Snapshot**: Immutable, versioned view of state handed to observers
//! - **Listeners**: Ordered observer list (see [`observer`])
//!
//! ## Processing an action
//!
//! 1. Reject if the store has been shut down
//! 2. Run the reducer under the write lock (copy-on-write if a snapshot is still held elsewhere)
//! 3. Release the lock and notify listeners in registration order
//!
//! Because the lock is released before listeners run, a listener may read
//! from or send to the same store.
//!
//! ## Example
//!
//! ```ignore
//! use tickbox_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething)?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

use std::sync::Arc;

/// Ordered observer list with idempotent unsubscribe
pub mod observer;

/// Prometheus metrics for observability
pub mod metrics;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Store is shut down and not accepting new actions
        ///
        /// Returned when `send()` is called after `shutdown()`.
        #[error("Store is shutting down")]
        ShutdownInProgress,
    }
}

pub use error::StoreError;
pub use observer::{Listeners, Subscription};

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use tickbox_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_name("todos");
///
/// assert_eq!(config.name, "todos");
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Name used in tracing spans and as the `store` metrics label
    pub name: &'static str,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Set the store name
    #[must_use]
    pub const fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { name: "store" }
    }
}

/// Immutable view of a store's state after a given action
///
/// Snapshots are cheap to clone and never change. `version` increases by one
/// for every action the store reduces, so observers can tell which of two
/// snapshots is newer.
#[derive(Debug)]
pub struct Snapshot<S> {
    version: u64,
    state: Arc<S>,
}

impl<S> Snapshot<S> {
    /// Number of actions reduced before this snapshot was taken
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// The captured state
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }
}

impl<S> Clone for Snapshot<S> {
    fn clone(&self) -> Self {
        Self {
            version: self.version,
            state: Arc::clone(&self.state),
        }
    }
}

impl<S> std::ops::Deref for Snapshot<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.state
    }
}

/// Store module - the synchronous runtime
pub mod store {
    use super::{Arc, Listeners, Snapshot, StoreConfig, StoreError, Subscription};
    use crate::metrics::StoreMetrics;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{PoisonError, RwLock};
    use tickbox_core::{action::Action, reducer::Reducer};

    struct Versioned<S> {
        version: u64,
        state: Arc<S>,
    }

    struct Inner<S, E, R> {
        state: RwLock<Versioned<S>>,
        reducer: R,
        environment: E,
        listeners: Listeners<Snapshot<S>>,
        shutdown: AtomicBool,
        config: StoreConfig,
    }

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`, shared with snapshots copy-on-write)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Listeners (notified with a [`Snapshot`] after every action)
    ///
    /// Cloning a `Store` yields another handle to the same state.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        inner: Arc<Inner<S, E, R>>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        S: Clone + 'static,
        A: Action,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        #[must_use]
        pub fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            Self {
                inner: Arc::new(Inner {
                    state: RwLock::new(Versioned {
                        version: 0,
                        state: Arc::new(initial_state),
                    }),
                    reducer,
                    environment,
                    listeners: Listeners::new(),
                    shutdown: AtomicBool::new(false),
                    config,
                }),
            }
        }

        /// Send an action to the store
        ///
        /// Runs the reducer, then notifies listeners. Returns the snapshot
        /// taken right after this action was reduced; actions sent by
        /// listeners produce later snapshots.
        ///
        /// # Errors
        ///
        /// [`StoreError::ShutdownInProgress`] if the store has been shut down.
        pub fn send(&self, action: A) -> Result<Snapshot<S>, StoreError> {
            let name = self.inner.config.name;

            if self.inner.shutdown.load(Ordering::Acquire) {
                tracing::warn!(store = name, action = action.name(), "Rejected action: store is shut down");
                StoreMetrics::record_rejection(name);
                return Err(StoreError::ShutdownInProgress);
            }

            let action_name = action.name();
            let span = tracing::debug_span!("store_send", store = name, action = action_name);
            let _enter = span.enter();

            let snapshot = self.reduce(action, action_name);

            let notified = self.inner.listeners.notify(&snapshot);
            StoreMetrics::record_notification(name, notified);
            tracing::debug!(version = snapshot.version, listeners = notified, "Action processed");

            Ok(snapshot)
        }

        /// Read state through a closure
        ///
        /// The read lock is held while `f` runs, so `f` must not send to this store.
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let guard = self
                .inner
                .state
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            f(&guard.state)
        }

        /// Current state as a snapshot
        #[must_use]
        pub fn snapshot(&self) -> Snapshot<S> {
            let guard = self
                .inner
                .state
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            Snapshot {
                version: guard.version,
                state: Arc::clone(&guard.state),
            }
        }

        /// Number of actions reduced so far
        #[must_use]
        pub fn version(&self) -> u64 {
            self.inner
                .state
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .version
        }

        /// Register a listener called with a snapshot after every action
        ///
        /// The listener is not called for the current state, only for changes
        /// from now on.
        pub fn subscribe<F>(&self, listener: F) -> Subscription
        where
            F: Fn(&Snapshot<S>) + Send + Sync + 'static,
        {
            self.inner.listeners.subscribe(listener)
        }

        /// Number of registered listeners
        #[must_use]
        pub fn listener_count(&self) -> usize {
            self.inner.listeners.len()
        }

        /// Stop accepting actions and drop every listener
        ///
        /// State stays readable. Calling this more than once is harmless.
        pub fn shutdown(&self) {
            if !self.inner.shutdown.swap(true, Ordering::AcqRel) {
                tracing::info!(store = self.inner.config.name, "Store shut down");
                self.inner.listeners.clear();
            }
        }

        /// Returns true once [`Store::shutdown`] has been called
        #[must_use]
        pub fn is_shutdown(&self) -> bool {
            self.inner.shutdown.load(Ordering::Acquire)
        }

        /// The configuration this store was built with
        #[must_use]
        pub fn config(&self) -> &StoreConfig {
            &self.inner.config
        }

        fn reduce(&self, action: A, action_name: &'static str) -> Snapshot<S> {
            let mut guard = self
                .inner
                .state
                .write()
                .unwrap_or_else(PoisonError::into_inner);

            let start = std::time::Instant::now();
            let state = Arc::make_mut(&mut guard.state);
            self.inner
                .reducer
                .reduce(state, action, &self.inner.environment);
            StoreMetrics::record_action(self.inner.config.name, action_name, start.elapsed());

            guard.version += 1;
            tracing::trace!(version = guard.version, "Reducer completed");

            Snapshot {
                version: guard.version,
                state: Arc::clone(&guard.state),
            }
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn clone(&self) -> Self {
            Self {
                inner: Arc::clone(&self.inner),
            }
        }
    }

    impl<S, A, E, R> std::fmt::Debug for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("name", &self.inner.config.name)
                .field("listeners", &self.inner.listeners)
                .field("shutdown", &self.inner.shutdown.load(Ordering::Acquire))
                .finish_non_exhaustive()
        }
    }
}

pub use store::Store;

// Test module
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tickbox_core::{action::Action, reducer::Reducer};

    // Test state
    #[derive(Debug, Clone)]
    struct TestState {
        value: i32,
    }

    // Test action
    #[derive(Debug, Clone)]
    enum TestAction {
        Increment,
        Decrement,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                Self::Increment => "increment",
                Self::Decrement => "decrement",
            }
        }
    }

    // Test reducer
    #[derive(Debug, Clone)]
    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = ();

        fn reduce(&self, state: &mut Self::State, action: Self::Action, _env: &Self::Environment) {
            match action {
                TestAction::Increment => state.value += 1,
                TestAction::Decrement => state.value -= 1,
            }
        }
    }

    type TestStore = Store<TestState, TestAction, (), TestReducer>;

    fn test_store() -> TestStore {
        Store::new(TestState { value: 0 }, TestReducer, ())
    }

    #[test]
    fn test_send_updates_state_and_version() {
        let store = test_store();

        let snapshot = store.send(TestAction::Increment).unwrap();
        assert_eq!(snapshot.value, 1);
        assert_eq!(snapshot.version(), 1);

        store.send(TestAction::Increment).unwrap();
        assert_eq!(store.state(|s| s.value), 2);
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn test_snapshots_are_immutable() {
        let store = test_store();
        let before = store.send(TestAction::Increment).unwrap();
        store.send(TestAction::Increment).unwrap();

        assert_eq!(before.value, 1);
        assert_eq!(store.snapshot().value, 2);
    }

    #[test]
    fn test_clone_shares_state() {
        let store = test_store();
        let other = store.clone();
        other.send(TestAction::Increment).unwrap();
        assert_eq!(store.state(|s| s.value), 1);
    }

    #[test]
    fn test_listeners_see_every_version_in_order() {
        let store = test_store();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _subscription = store.subscribe(move |snapshot| {
            sink.lock().unwrap().push((snapshot.version(), snapshot.value));
        });

        store.send(TestAction::Increment).unwrap();
        store.send(TestAction::Increment).unwrap();
        store.send(TestAction::Decrement).unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![(1, 1), (2, 2), (3, 1)]);
    }

    #[test]
    fn test_config_names_store() {
        let store = Store::with_config(
            TestState { value: 0 },
            TestReducer,
            (),
            StoreConfig::new("counter"),
        );
        assert_eq!(store.config().name, "counter");
        assert_eq!(StoreConfig::default().name, "store");
    }

    #[test]
    fn test_listener_notified_once_per_action() {
        let store = test_store();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let subscription = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.send(TestAction::Increment).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        subscription.unsubscribe();
        store.send(TestAction::Increment).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_listener_may_send_to_same_store() {
        let store = test_store();
        let handle = store.clone();
        let _subscription = store.subscribe(move |snapshot| {
            if snapshot.value == 1 {
                handle.send(TestAction::Increment).unwrap();
            }
        });

        store.send(TestAction::Increment).unwrap();
        assert_eq!(store.state(|s| s.value), 2);
    }

    #[test]
    fn test_shutdown_rejects_actions() {
        let store = test_store();
        let _subscription = store.subscribe(|_| {});
        store.send(TestAction::Increment).unwrap();

        store.shutdown();
        store.shutdown();

        assert!(store.is_shutdown());
        assert_eq!(store.listener_count(), 0);
        assert_eq!(
            store.send(TestAction::Increment).unwrap_err(),
            StoreError::ShutdownInProgress
        );
        assert_eq!(store.state(|s| s.value), 1);
    }
}
