//! Pluggable equality and size functions over snapshots.
//!
//! Both wrap pure functions. The engine consults a [`Comparator`] to decide
//! whether a set is redundant, and a [`Sizer`] to derive the timeline's
//! cached `count`. When neither is supplied, `PartialEq` and
//! [`Snapshot::length`] are used.

use super::snapshot::Snapshot;
use std::fmt;

/// Pure equality predicate between two snapshots.
///
/// Use this when structural equality is too strict or too loose for a
/// snapshot type, for example to ignore a cursor position or to compare
/// floats with a tolerance.
///
/// # Example
///
/// ```rust
/// use undoable::core::Comparator;
///
/// let same_len = Comparator::new(|a: &Vec<u8>, b: &Vec<u8>| a.len() == b.len());
///
/// assert!(same_len.check(&vec![1, 2], &vec![3, 4]));
/// assert!(!same_len.check(&vec![1], &vec![1, 1]));
/// ```
pub struct Comparator<S: Snapshot> {
    predicate: Box<dyn Fn(&S, &S) -> bool + Send + Sync>,
}

impl<S: Snapshot> Comparator<S> {
    /// Create a comparator from a pure predicate.
    ///
    /// The predicate should be symmetric and deterministic.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S, &S) -> bool + Send + Sync + 'static,
    {
        Comparator {
            predicate: Box::new(predicate),
        }
    }

    /// Structural equality via `PartialEq`.
    ///
    /// Floats follow IEEE rules: `NaN != NaN` and `0.0 == -0.0`. Snapshots
    /// holding floats that need `NaN` to match itself, or signed zeros to
    /// differ, should use a custom comparator such as one built on
    /// `f64::to_bits`.
    pub fn structural() -> Self {
        Self::new(|a: &S, b: &S| a == b)
    }

    /// Check whether two snapshots count as equal.
    pub fn check(&self, a: &S, b: &S) -> bool {
        (self.predicate)(a, b)
    }
}

impl<S: Snapshot> Default for Comparator<S> {
    fn default() -> Self {
        Self::structural()
    }
}

impl<S: Snapshot> fmt::Debug for Comparator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Comparator")
    }
}

/// Pure size function over snapshots.
///
/// # Example
///
/// ```rust
/// use undoable::core::Sizer;
///
/// let chars = Sizer::new(|s: &String| s.chars().count());
/// assert_eq!(chars.measure(&"héllo".to_string()), 5);
/// ```
pub struct Sizer<S: Snapshot> {
    measure: Box<dyn Fn(&S) -> usize + Send + Sync>,
}

impl<S: Snapshot> Sizer<S> {
    /// Create a sizer from a pure function.
    pub fn new<F>(measure: F) -> Self
    where
        F: Fn(&S) -> usize + Send + Sync + 'static,
    {
        Sizer {
            measure: Box::new(measure),
        }
    }

    /// Sequence length, `0` for anything else.
    pub fn length() -> Self {
        Self::new(|s: &S| s.length())
    }

    /// Size of `snapshot`, used as the timeline's `count`.
    pub fn measure(&self, snapshot: &S) -> usize {
        (self.measure)(snapshot)
    }
}

impl<S: Snapshot> Default for Sizer<S> {
    fn default() -> Self {
        Self::length()
    }
}

impl<S: Snapshot> fmt::Debug for Sizer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Sizer")
    }
}
