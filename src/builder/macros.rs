//! Macros for ergonomic action declaration.

/// Generate an action enum with an `Action` implementation.
///
/// Each variant's name becomes its kind. Unit and tuple-payload variants are
/// supported; payload types need `Clone` and `Debug` for the derives.
///
/// # Example
///
/// ```
/// use redraft::action_enum;
/// use redraft::core::Action;
///
/// action_enum! {
///     pub enum CounterAction {
///         Increment,
///         Add(i64),
///         Reset,
///     }
/// }
///
/// assert_eq!(CounterAction::Increment.kind(), Some("Increment"));
/// assert_eq!(CounterAction::Add(5).kind(), Some("Add"));
/// ```
#[macro_export]
macro_rules! action_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( ( $($field:ty),* $(,)? ) )?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant $( ( $($field),* ) )?
            ),*
        }

        impl $crate::core::Action for $name {
            fn kind(&self) -> Option<&str> {
                match self {
                    $(Self::$variant { .. } => Some(stringify!($variant))),*
                }
            }
        }
    };
}
