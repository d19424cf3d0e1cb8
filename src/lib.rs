//! Redraft: a reducer builder with draft-based copy-on-write updates
//!
//! Redraft turns a mapping of "action kind → case handler" into a single
//! state-transition function for a unidirectional state container. Handlers
//! write update code that looks like direct mutation against a draft of the
//! current state; the transition function stays pure and returns a new
//! immutable snapshot on every call, never touching the previous one.
//!
//! # Core Concepts
//!
//! - **Action**: a dispatched value identified by its `kind` discriminator
//! - **Draft**: a mutation-capable, copy-on-write view over a state snapshot
//! - **Producer**: the structural-sharing seam that reconciles drafts
//! - **Reducer**: the built transition function, one handler per kind
//!
//! # Example
//!
//! ```rust
//! use redraft::builder::ReducerBuilder;
//! use std::sync::Arc;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Counter {
//!     count: i64,
//! }
//!
//! let reducer = ReducerBuilder::new()
//!     .initial(Counter { count: 0 })
//!     .mutate("Increment", |draft, _: &&str| draft.count += 1)
//!     .replace("Reset", |_, _| Counter { count: 0 })
//!     .build()
//!     .unwrap();
//!
//! // First call in a container's lifecycle supplies no prior state.
//! let state = reducer.reduce(None, &"Increment");
//! assert_eq!(state.count, 1);
//!
//! // Unknown kinds pass the snapshot through unchanged.
//! let same = reducer.reduce(Some(Arc::clone(&state)), &"Unknown");
//! assert!(Arc::ptr_eq(&same, &state));
//!
//! // Earlier snapshots are never mutated by later transitions.
//! let next = reducer.reduce(Some(Arc::clone(&state)), &"Increment");
//! assert_eq!(next.count, 2);
//! assert_eq!(state.count, 1);
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use builder::{BuildError, ReducerBuilder};
pub use core::{Action, CowProducer, Draft, Produce, Reducer, TransitionFn};
