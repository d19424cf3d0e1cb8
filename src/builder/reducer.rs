//! Builder for constructing reducers.

use crate::builder::error::BuildError;
use crate::core::{Action, CaseMap, CowProducer, Draft, Produce, Reducer};
use std::sync::Arc;

/// Builder for constructing reducers with a fluent API.
///
/// Register one case handler per action kind, supply the initial state, and
/// `build()`. The resulting case map is immutable; registering the same kind
/// twice is reported at build time.
pub struct ReducerBuilder<S: Clone, A: Action, P: Produce<S> = CowProducer> {
    initial: Option<S>,
    cases: CaseMap<S, A>,
    duplicates: Vec<String>,
    producer: P,
}

impl<S: Clone, A: Action> ReducerBuilder<S, A> {
    /// Create a new builder with the bundled clone-on-write producer.
    pub fn new() -> Self {
        Self {
            initial: None,
            cases: CaseMap::new(),
            duplicates: Vec::new(),
            producer: CowProducer,
        }
    }
}

impl<S: Clone, A: Action, P: Produce<S>> ReducerBuilder<S, A, P> {
    /// Set the initial state (required).
    ///
    /// The built reducer substitutes this state when called without prior
    /// state. It is stored behind `Arc` and never edited in place.
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Register a case handler with the full contract.
    ///
    /// The handler may edit the draft in place, return a replacement state,
    /// or both; an explicit `Some` return always wins over draft edits.
    pub fn on<K, F>(mut self, kind: K, case: F) -> Self
    where
        K: Into<String>,
        F: Fn(&mut Draft<S>, &A) -> Option<S> + Send + Sync + 'static,
    {
        let kind = kind.into();
        if self.cases.insert(kind.clone(), Box::new(case)).is_some() {
            self.duplicates.push(kind);
        }
        self
    }

    /// Register an edit-only case handler.
    ///
    /// Sugar for the common case of a handler that only mutates the draft.
    pub fn mutate<K, F>(self, kind: K, case: F) -> Self
    where
        K: Into<String>,
        F: Fn(&mut Draft<S>, &A) + Send + Sync + 'static,
    {
        self.on(kind, move |draft, action| {
            case(draft, action);
            None
        })
    }

    /// Register a pure-replacement case handler.
    ///
    /// The handler reads the current state and returns the full next state.
    pub fn replace<K, F>(self, kind: K, case: F) -> Self
    where
        K: Into<String>,
        F: Fn(&S, &A) -> S + Send + Sync + 'static,
    {
        self.on(kind, move |draft, action| Some(case(&**draft, action)))
    }

    /// Swap in a different structural-sharing producer.
    pub fn with_producer<P2: Produce<S>>(self, producer: P2) -> ReducerBuilder<S, A, P2> {
        ReducerBuilder {
            initial: self.initial,
            cases: self.cases,
            duplicates: self.duplicates,
            producer,
        }
    }

    /// Build the reducer.
    /// Returns an error if the initial state is missing or a kind was
    /// registered more than once.
    pub fn build(self) -> Result<Reducer<S, A, P>, BuildError> {
        let ReducerBuilder {
            initial,
            cases,
            mut duplicates,
            producer,
        } = self;

        if !duplicates.is_empty() {
            return Err(BuildError::DuplicateKind(duplicates.remove(0)));
        }

        let initial = initial.ok_or(BuildError::MissingInitialState)?;
        Ok(Reducer::new(Arc::new(initial), cases, producer))
    }
}

impl<S: Clone, A: Action> Default for ReducerBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
