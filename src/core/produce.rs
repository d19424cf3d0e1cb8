//! The structural-sharing producer seam.
//!
//! A producer takes a base snapshot and a recipe, runs the recipe against a
//! draft of the snapshot, and reconciles the outcome into the next snapshot.
//! The reducer depends only on the [`Produce`] trait, so containers can
//! substitute their own producer (instrumented, frozen, persistent-backed)
//! without touching dispatch.

use super::draft::Draft;
use std::sync::Arc;

/// Produce the next state snapshot from a base snapshot and a recipe.
///
/// The recipe receives a mutable [`Draft`] of the base and may edit it in
/// place, return a replacement state, or both. The contract every producer
/// must honor:
///
/// - `Some(replacement)` — the returned value is the next state; any edits
///   already applied to the draft are discarded. The return value wins.
/// - `None` with an edited draft — the edits are reconciled into a new
///   snapshot; untouched substructure is shared with the base.
/// - `None` with an untouched draft — the base snapshot itself is returned,
///   pointer-equal, so reference-based change detection sees "no change".
/// - The base value is never altered, whatever the recipe does.
pub trait Produce<S: Clone> {
    /// Run `recipe` against a draft of `base` and reconcile the result.
    fn produce<F>(&self, base: Arc<S>, recipe: F) -> Arc<S>
    where
        F: FnOnce(&mut Draft<S>) -> Option<S>;
}

/// The bundled clone-on-write producer.
///
/// Copies the base at most once (on the draft's first write) and relies on
/// the state's `Clone` for structural sharing of untouched substructure.
///
/// # Example
///
/// ```rust
/// use redraft::core::{CowProducer, Produce};
/// use std::sync::Arc;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Counter {
///     count: i64,
/// }
///
/// let base = Arc::new(Counter { count: 3 });
///
/// // In-place edit, reconciled into a new snapshot.
/// let next = CowProducer.produce(Arc::clone(&base), |draft| {
///     draft.count += 1;
///     None
/// });
/// assert_eq!(next.count, 4);
/// assert_eq!(base.count, 3);
///
/// // Explicit return replaces the draft entirely.
/// let reset = CowProducer.produce(Arc::clone(&base), |_draft| {
///     Some(Counter { count: 0 })
/// });
/// assert_eq!(reset.count, 0);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct CowProducer;

impl<S: Clone> Produce<S> for CowProducer {
    fn produce<F>(&self, base: Arc<S>, recipe: F) -> Arc<S>
    where
        F: FnOnce(&mut Draft<S>) -> Option<S>,
    {
        let mut draft = Draft::new(base);
        match recipe(&mut draft) {
            // The returned value is authoritative; draft edits are dropped.
            Some(replacement) => Arc::new(replacement),
            None => draft.finish(),
        }
    }
}
