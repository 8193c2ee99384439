//! # Tickbox Testing
//!
//! Testing utilities and helpers for the Tickbox state layer.
//!
//! This crate provides:
//! - Deterministic implementations of Environment traits
//! - A Given-When-Then harness for reducers ([`ReducerTest`])
//! - A listener that records every value it is called with
//! - proptest strategies shared by feature crates
//!
//! ## Example
//!
//! ```ignore
//! use tickbox_testing::{test_clock, SequentialIdGenerator};
//!
//! #[test]
//! fn adds_newest_first() {
//!     let store = TodoStore::new(test_clock(), SequentialIdGenerator::new("todo"));
//!     store.add("Buy milk")?;
//!     store.add("Walk dog")?;
//!     assert_eq!(store.todos()[0].text, "Walk dog");
//! }
//! ```

use chrono::{DateTime, Utc};
use tickbox_core::environment::{Clock, IdGenerator};

/// Fluent reducer testing
pub mod reducer_test;

/// Deterministic implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, IdGenerator, Utc};
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use tickbox_testing::mocks::FixedClock;
    /// use tickbox_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }

    /// Predictable identifiers: `prefix-1`, `prefix-2`, ...
    ///
    /// # Example
    ///
    /// ```
    /// use tickbox_testing::mocks::SequentialIdGenerator;
    /// use tickbox_core::environment::IdGenerator;
    ///
    /// let ids = SequentialIdGenerator::new("todo");
    /// assert_eq!(ids.next_id(), "todo-1");
    /// assert_eq!(ids.next_id(), "todo-2");
    /// ```
    #[derive(Debug)]
    pub struct SequentialIdGenerator {
        prefix: &'static str,
        next: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Start counting at 1 with the given prefix
        #[must_use]
        pub const fn new(prefix: &'static str) -> Self {
            Self {
                prefix,
                next: AtomicU64::new(1),
            }
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> String {
            let n = self.next.fetch_add(1, Ordering::Relaxed);
            format!("{}-{n}", self.prefix)
        }
    }
}

/// Test helpers and utilities
pub mod helpers {
    use std::sync::{Arc, Mutex, PoisonError};

    /// Records every value it is called with, for asserting on notifications
    ///
    /// # Example
    ///
    /// ```
    /// use tickbox_testing::RecordingListener;
    ///
    /// let recorder = RecordingListener::<u32>::new();
    /// let listener = recorder.listener();
    /// listener(&1);
    /// listener(&2);
    /// assert_eq!(recorder.values(), vec![1, 2]);
    /// ```
    #[derive(Debug)]
    pub struct RecordingListener<T> {
        values: Arc<Mutex<Vec<T>>>,
    }

    impl<T: Clone + Send + 'static> RecordingListener<T> {
        /// Create an empty recorder
        #[must_use]
        pub fn new() -> Self {
            Self {
                values: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// A callback that appends a clone of each value to this recorder
        #[must_use]
        pub fn listener(&self) -> impl Fn(&T) + Send + Sync + 'static {
            let values = Arc::clone(&self.values);
            move |value: &T| {
                values
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(value.clone());
            }
        }

        /// Everything recorded so far, oldest first
        #[must_use]
        pub fn values(&self) -> Vec<T> {
            self.values
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Number of recorded calls
        #[must_use]
        pub fn count(&self) -> usize {
            self.values
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .len()
        }

        /// Most recent value, if any
        #[must_use]
        pub fn last(&self) -> Option<T> {
            self.values
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .last()
                .cloned()
        }
    }

    impl<T: Clone + Send + 'static> Default for RecordingListener<T> {
        fn default() -> Self {
            Self::new()
        }
    }

    /// Route `tracing` output through the test harness
    ///
    /// Honours `RUST_LOG`. Safe to call from every test; only the first call
    /// installs the subscriber.
    pub fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}

/// Property-based testing utilities using proptest
pub mod properties {
    use proptest::prelude::*;

    /// Non-blank text whose trimmed length is within `1..=max_chars`
    ///
    /// Values may carry surrounding whitespace, as raw user input would.
    pub fn raw_text(max_chars: usize) -> impl Strategy<Value = String> {
        (
            "[ \t]{0,2}",
            proptest::collection::vec(proptest::char::range('a', 'z'), 1..=max_chars.max(1)),
            "[ \t]{0,2}",
        )
            .prop_map(|(lead, body, trail)| {
                let body: String = body.into_iter().collect();
                format!("{lead}{body}{trail}")
            })
    }
}

// Re-export commonly used items
pub use helpers::{init_test_tracing, RecordingListener};
pub use mocks::{test_clock, FixedClock, SequentialIdGenerator};
pub use reducer_test::ReducerTest;
