//! Builder API for ergonomic reducer construction.
//!
//! This module provides a fluent builder and macros for creating reducers
//! with minimal boilerplate while maintaining type safety.

pub mod error;
pub mod macros;
pub mod reducer;

pub use error::BuildError;
pub use reducer::ReducerBuilder;

use crate::core::{Action, Draft, Reducer};

/// Create a reducer with no case handlers.
///
/// Every action passes the state through unchanged; useful as a placeholder
/// slot in a container and as the zero case when composing reducers.
///
/// # Example
///
/// ```
/// use redraft::builder::identity_reducer;
/// use std::sync::Arc;
///
/// let reducer = identity_reducer::<i64, &str>(0);
///
/// let state = Arc::new(7i64);
/// let next = reducer.reduce(Some(Arc::clone(&state)), &"anything");
/// assert!(Arc::ptr_eq(&next, &state));
/// ```
pub fn identity_reducer<S, A>(initial: S) -> Reducer<S, A>
where
    S: Clone,
    A: Action,
{
    ReducerBuilder::new()
        .initial(initial)
        .build()
        .expect("Identity reducer should always build")
}

/// Create a reducer with a single case handler.
///
/// # Example
///
/// ```
/// use redraft::builder::single_case;
///
/// let reducer = single_case(0i64, "Increment", |draft, _: &&str| {
///     **draft += 1;
///     None
/// });
///
/// assert_eq!(*reducer.reduce(None, &"Increment"), 1);
/// assert_eq!(*reducer.reduce(None, &"Other"), 0);
/// ```
pub fn single_case<S, A, K, F>(initial: S, kind: K, case: F) -> Reducer<S, A>
where
    S: Clone,
    A: Action,
    K: Into<String>,
    F: Fn(&mut Draft<S>, &A) -> Option<S> + Send + Sync + 'static,
{
    ReducerBuilder::new()
        .initial(initial)
        .on(kind, case)
        .build()
        .expect("Single-case reducer should always build")
}
