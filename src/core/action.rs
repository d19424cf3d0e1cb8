//! Core Action trait for dispatched actions.
//!
//! Actions are the inputs to a reducer. The reducer reads nothing from an
//! action except its kind; the payload is opaque and belongs to the handlers.

/// Trait for values that can be dispatched to a reducer.
///
/// The only thing the dispatch layer inspects is the action's *kind*, the
/// discriminator used to select a handler. Everything else about the action
/// is payload, visible only to the handler it dispatches to.
///
/// `kind` returns `Option<&str>` so that actions without a usable
/// discriminator can exist: such actions dispatch to no handler and the
/// reducer passes the state through unchanged rather than raising an error.
/// Most implementations simply return `Some` of a static name per variant;
/// the [`action_enum!`](crate::action_enum) macro generates exactly that.
///
/// # Example
///
/// ```rust
/// use redraft::core::Action;
///
/// #[derive(Clone, Debug)]
/// enum CounterAction {
///     Increment,
///     Add(i64),
/// }
///
/// impl Action for CounterAction {
///     fn kind(&self) -> Option<&str> {
///         match self {
///             Self::Increment => Some("Increment"),
///             Self::Add(_) => Some("Add"),
///         }
///     }
/// }
///
/// assert_eq!(CounterAction::Increment.kind(), Some("Increment"));
/// assert_eq!(CounterAction::Add(3).kind(), Some("Add"));
/// ```
pub trait Action {
    /// The discriminator used to select this action's handler.
    ///
    /// Returning `None` means the action carries no discriminator; the
    /// reducer treats it as an unknown kind.
    fn kind(&self) -> Option<&str>;
}

/// A bare string is its own kind. Handy for payload-free actions in tests
/// and simple containers.
impl Action for &str {
    fn kind(&self) -> Option<&str> {
        Some(*self)
    }
}

impl Action for String {
    fn kind(&self) -> Option<&str> {
        Some(self.as_str())
    }
}
