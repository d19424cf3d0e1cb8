//! Core reducer types and logic.
//!
//! This module contains the pure functional core of the library:
//! - Action discrimination via the `Action` trait
//! - Copy-on-write drafts via `Draft`
//! - The structural-sharing producer seam via `Produce`
//! - Handler dispatch via `Reducer`
//! - Immutable transition records via `ReduceTrace`
//!
//! All logic in this module is pure (no side effects beyond allocating the
//! next state); the only state is what callers thread through explicitly.

mod action;
mod draft;
mod produce;
mod reducer;
mod trace;

pub use action::Action;
pub use draft::Draft;
pub use produce::{CowProducer, Produce};
pub use reducer::{Reducer, TransitionFn};
pub(crate) use reducer::CaseMap;
pub use trace::{ReduceRecord, ReduceTrace};
