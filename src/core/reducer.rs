//! Reducer dispatch: selecting a handler by action kind and applying it
//! through the producer.

use super::action::Action;
use super::draft::Draft;
use super::produce::{CowProducer, Produce};
use std::collections::HashMap;
use std::sync::Arc;

/// A registered case handler. Handlers may edit the draft in place, return
/// a replacement state, or do both; an explicit return wins over edits.
pub(crate) type CaseFn<S, A> = Box<dyn Fn(&mut Draft<S>, &A) -> Option<S> + Send + Sync>;

pub(crate) type CaseMap<S, A> = HashMap<String, CaseFn<S, A>>;

/// The boxed standard transition-function shape.
///
/// `(state | none, action) -> state`, with absent state selecting the
/// reducer's initial state. Obtained from [`Reducer::into_transition_fn`] so
/// a reducer can be registered directly with any conforming state container.
pub type TransitionFn<S, A> = Box<dyn Fn(Option<Arc<S>>, &A) -> Arc<S> + Send + Sync>;

/// A state-transition function built from a map of case handlers.
///
/// Constructed via [`ReducerBuilder`](crate::builder::ReducerBuilder). The
/// case map is fixed at build time; the reducer itself holds no mutable
/// state, so a single instance may serve any number of concurrent
/// [`reduce`](Reducer::reduce) calls as long as each call threads its own
/// state snapshot.
///
/// # Example
///
/// ```rust
/// use redraft::builder::ReducerBuilder;
/// use std::sync::Arc;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Counter {
///     count: i64,
/// }
///
/// let reducer = ReducerBuilder::new()
///     .initial(Counter { count: 0 })
///     .mutate("Increment", |draft, _: &&str| draft.count += 1)
///     .replace("Reset", |_, _| Counter { count: 0 })
///     .build()
///     .unwrap();
///
/// let state = Arc::new(Counter { count: 3 });
/// let next = reducer.reduce(Some(Arc::clone(&state)), &"Increment");
///
/// assert_eq!(next.count, 4);
/// assert_eq!(state.count, 3); // previous snapshot untouched
/// ```
pub struct Reducer<S: Clone, A: Action, P: Produce<S> = CowProducer> {
    initial: Arc<S>,
    cases: CaseMap<S, A>,
    producer: P,
}

impl<S: Clone, A: Action, P: Produce<S>> Reducer<S, A, P> {
    pub(crate) fn new(initial: Arc<S>, cases: CaseMap<S, A>, producer: P) -> Self {
        Reducer {
            initial,
            cases,
            producer,
        }
    }

    /// Compute the next state for an incoming action.
    ///
    /// Absent state (`None`) selects the initial state supplied at build
    /// time — the container's initialization convention. An action whose
    /// kind has no registered handler (or no kind at all) passes the state
    /// through unchanged, pointer-equal, so reference-based change detection
    /// sees "no change".
    ///
    /// A matched handler runs against a draft of the current state through
    /// the producer; its edits or returned value become the next state. The
    /// previous snapshot is never mutated. A panicking handler unwinds out
    /// of this call untranslated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use redraft::builder::ReducerBuilder;
    /// use std::sync::Arc;
    ///
    /// let reducer = ReducerBuilder::new()
    ///     .initial(0i64)
    ///     .mutate("Increment", |draft, _: &&str| **draft += 1)
    ///     .build()
    ///     .unwrap();
    ///
    /// // First call in a container's lifecycle supplies no prior state.
    /// let state = reducer.reduce(None, &"Increment");
    /// assert_eq!(*state, 1);
    ///
    /// // Unknown kinds are identity, same snapshot back.
    /// let same = reducer.reduce(Some(Arc::clone(&state)), &"Unknown");
    /// assert!(Arc::ptr_eq(&same, &state));
    /// ```
    pub fn reduce(&self, state: Option<Arc<S>>, action: &A) -> Arc<S> {
        let state = state.unwrap_or_else(|| Arc::clone(&self.initial));

        // Exact-key lookup only; a missing discriminator is a miss.
        let case = action.kind().and_then(|kind| self.cases.get(kind));

        match case {
            None => state,
            Some(case) => self.producer.produce(state, |draft| case(draft, action)),
        }
    }

    /// The initial state this reducer substitutes for absent state.
    pub fn initial_state(&self) -> &Arc<S> {
        &self.initial
    }

    /// Whether a handler is registered for `kind`.
    pub fn handles(&self, kind: &str) -> bool {
        self.cases.contains_key(kind)
    }

    /// Number of registered case handlers.
    pub fn case_count(&self) -> usize {
        self.cases.len()
    }

    /// Erase the reducer into the boxed standard transition-function shape.
    ///
    /// # Example
    ///
    /// ```rust
    /// use redraft::builder::ReducerBuilder;
    /// use redraft::core::TransitionFn;
    ///
    /// let transition: TransitionFn<i64, &str> = ReducerBuilder::new()
    ///     .initial(0i64)
    ///     .mutate("Increment", |draft, _| **draft += 1)
    ///     .build()
    ///     .unwrap()
    ///     .into_transition_fn();
    ///
    /// assert_eq!(*transition(None, &"Increment"), 1);
    /// ```
    pub fn into_transition_fn(self) -> TransitionFn<S, A>
    where
        S: Send + Sync + 'static,
        A: 'static,
        P: Send + Sync + 'static,
    {
        Box::new(move |state, action| self.reduce(state, action))
    }
}
