//! Mutation-capable draft views over immutable state.
//!
//! A draft lets a handler write update code that looks like direct mutation
//! while the underlying snapshot stays untouched. The copy-on-write
//! bookkeeping lives entirely here; handlers just read and assign.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// A mutation-capable view over an immutable state snapshot.
///
/// Reads go to the base snapshot until the first write. The first mutable
/// access clones the base once, and all subsequent reads and writes use that
/// private copy. The base snapshot is never altered, so references to it held
/// elsewhere remain valid indefinitely.
///
/// Structural sharing is inherited from the state's `Clone`: a state whose
/// fields are `Arc`s or persistent collections shares all untouched
/// substructure between the base and the copy.
///
/// # Example
///
/// ```rust
/// use redraft::core::Draft;
/// use std::sync::Arc;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Counter {
///     count: i64,
/// }
///
/// let base = Arc::new(Counter { count: 3 });
/// let mut draft = Draft::new(Arc::clone(&base));
///
/// assert_eq!(draft.count, 3);
/// assert!(!draft.is_modified());
///
/// draft.count += 1;
/// assert!(draft.is_modified());
/// assert_eq!(draft.count, 4);
/// assert_eq!(base.count, 3); // base untouched
/// ```
pub struct Draft<S: Clone> {
    base: Arc<S>,
    edit: Option<S>,
}

impl<S: Clone> Draft<S> {
    /// Create a draft over a base snapshot.
    pub fn new(base: Arc<S>) -> Self {
        Draft { base, edit: None }
    }

    /// Whether any mutable access has occurred.
    ///
    /// An unmodified draft finalizes back to the base snapshot itself, so
    /// containers comparing by pointer identity see "no change".
    pub fn is_modified(&self) -> bool {
        self.edit.is_some()
    }

    /// The snapshot this draft was created over.
    pub fn base(&self) -> &Arc<S> {
        &self.base
    }

    /// Consume the draft, producing the resulting snapshot.
    ///
    /// Returns the base `Arc` pointer-equal when no write occurred, otherwise
    /// a fresh `Arc` around the edited copy.
    ///
    /// # Example
    ///
    /// ```rust
    /// use redraft::core::Draft;
    /// use std::sync::Arc;
    ///
    /// let base = Arc::new(vec![1, 2, 3]);
    ///
    /// let untouched = Draft::new(Arc::clone(&base)).finish();
    /// assert!(Arc::ptr_eq(&untouched, &base));
    ///
    /// let mut draft = Draft::new(Arc::clone(&base));
    /// draft.push(4);
    /// let edited = draft.finish();
    /// assert!(!Arc::ptr_eq(&edited, &base));
    /// assert_eq!(*edited, vec![1, 2, 3, 4]);
    /// assert_eq!(*base, vec![1, 2, 3]);
    /// ```
    pub fn finish(self) -> Arc<S> {
        match self.edit {
            Some(edited) => Arc::new(edited),
            None => self.base,
        }
    }
}

impl<S: Clone> Deref for Draft<S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.edit.as_ref().unwrap_or(&self.base)
    }
}

impl<S: Clone> DerefMut for Draft<S> {
    fn deref_mut(&mut self) -> &mut S {
        // Clone-on-write: the base is copied exactly once, on first write.
        self.edit.get_or_insert_with(|| S::clone(&self.base))
    }
}
