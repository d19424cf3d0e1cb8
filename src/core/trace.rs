//! Transition records for reducer observability.
//!
//! Records are plain values the container threads explicitly, keeping the
//! reducer itself stateless between calls. Recording follows functional
//! principles: `record` returns a new trace, the old one is unchanged.

use super::action::Action;
use super::produce::Produce;
use super::reducer::Reducer;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Record of a single reduce call.
///
/// `changed` is pointer-level: `false` means the call returned the previous
/// snapshot itself (dispatch miss or untouched draft), which is exactly what
/// reference-based change detection in a container would observe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReduceRecord {
    /// The dispatched action's kind, if it had one
    pub kind: Option<String>,
    /// Whether a handler was registered for the kind
    pub handled: bool,
    /// Whether the call produced a new snapshot
    pub changed: bool,
    /// When the reduce call completed
    pub timestamp: DateTime<Utc>,
}

/// Ordered, immutable trace of reduce calls.
///
/// # Example
///
/// ```rust
/// use redraft::builder::ReducerBuilder;
/// use redraft::core::ReduceTrace;
///
/// let reducer = ReducerBuilder::new()
///     .initial(0i64)
///     .mutate("Increment", |draft, _| **draft += 1)
///     .build()
///     .unwrap();
///
/// let mut trace = ReduceTrace::new();
/// let mut state = None;
///
/// for action in ["Increment", "Unknown", "Increment"] {
///     let (next, record) = reducer.reduce_traced(state, &action);
///     trace = trace.record(record);
///     state = Some(next);
/// }
///
/// assert_eq!(*state.unwrap(), 2);
/// assert_eq!(trace.handled_count(), 2);
/// assert_eq!(trace.changed_count(), 2);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ReduceTrace {
    records: Vec<ReduceRecord>,
}

impl ReduceTrace {
    /// Create a new empty trace.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a reduce call, returning a new trace.
    ///
    /// The existing trace is not mutated.
    pub fn record(&self, record: ReduceRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// All records in call order.
    pub fn records(&self) -> &[ReduceRecord] {
        &self.records
    }

    /// Number of calls that dispatched to a handler.
    pub fn handled_count(&self) -> usize {
        self.records.iter().filter(|r| r.handled).count()
    }

    /// Number of calls that produced a new snapshot.
    pub fn changed_count(&self) -> usize {
        self.records.iter().filter(|r| r.changed).count()
    }

    /// Duration between the first and last recorded call.
    ///
    /// Returns `None` for an empty trace.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}

impl<S: Clone, A: Action, P: Produce<S>> Reducer<S, A, P> {
    /// Like [`reduce`](Reducer::reduce), additionally reporting what the
    /// call did as a [`ReduceRecord`].
    pub fn reduce_traced(&self, state: Option<Arc<S>>, action: &A) -> (Arc<S>, ReduceRecord) {
        let prev = state.unwrap_or_else(|| Arc::clone(self.initial_state()));
        let kind = action.kind().map(str::to_string);
        let handled = kind.as_deref().is_some_and(|k| self.handles(k));

        let next = self.reduce(Some(Arc::clone(&prev)), action);
        let record = ReduceRecord {
            kind,
            handled,
            changed: !Arc::ptr_eq(&next, &prev),
            timestamp: Utc::now(),
        };

        (next, record)
    }
}
