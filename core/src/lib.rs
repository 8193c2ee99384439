//! # Tickbox Core
//!
//! Core traits and types for the Tickbox state layer.
//!
//! This crate provides the abstractions shared by every feature: state is
//! changed only by a [`Reducer`](reducer::Reducer) processing an action, and
//! anything impure (time, identifiers) is injected through the environment.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature, owned by a store
//! - **Action**: All possible inputs to a reducer
//! - **Reducer**: Pure function `(State, Action, Environment) → State`
//! - **Environment**: Injected dependencies (`Clock`, `IdGenerator`)
//!
//! ## Example
//!
//! ```
//! use tickbox_core::{action::Action, reducer::Reducer};
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! impl Action for CounterAction {
//!     fn name(&self) -> &'static str {
//!         "increment"
//!     }
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         _env: &(),
//!     ) {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!         }
//!     }
//! }
//!
//! let mut state = CounterState::default();
//! CounterReducer.reduce(&mut state, CounterAction::Increment, &());
//! assert_eq!(state.count, 1);
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};

/// Action module - the unified input type for reducers
///
/// Actions describe every state transition a feature supports. The
/// `#[derive(Action)]` macro in `tickbox-macros` implements [`Action`]
/// for plain enums.
///
/// [`Action`]: action::Action
pub mod action {
    /// Common behaviour of reducer actions
    ///
    /// The store uses [`Action::name`] as a tracing field and a metrics label,
    /// so names should be short, stable, and low-cardinality.
    pub trait Action {
        /// Stable `snake_case` name of this action's variant
        fn name(&self) -> &'static str;
    }
}

/// Reducer module - the core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → State`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes
        ///
        /// This is a pure function that:
        /// 1. Inspects the action
        /// 2. Updates state in place
        ///
        /// Reducers run under the store's write lock. Anything that must
        /// happen after the change (callbacks, I/O) belongs to the caller of
        /// `send`, once it returns.
        fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment);
    }
}

/// Environment module - Dependency injection traits
///
/// Everything non-deterministic a reducer or feature needs is abstracted
/// behind a trait here, with a production implementation alongside. Test
/// implementations live in `tickbox-testing`.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Wall-clock time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// Source of opaque identifiers
    ///
    /// Implementations must never return the same value twice for the
    /// lifetime of the generator.
    pub trait IdGenerator: Send + Sync {
        /// Produce the next identifier
        fn next_id(&self) -> String;
    }

    /// Random UUID v4 identifiers
    #[derive(Debug, Clone, Copy, Default)]
    pub struct UuidGenerator;

    impl IdGenerator for UuidGenerator {
        fn next_id(&self) -> String {
            uuid::Uuid::new_v4().to_string()
        }
    }
}
