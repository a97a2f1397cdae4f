//! Immutable past / present / future timeline.
//!
//! A [`Timeline`] is never mutated after construction. Every transition
//! builds a fresh one, so a timeline handed out earlier stays a valid
//! picture of history for as long as the caller holds it.

use super::snapshot::Snapshot;
use serde::Serialize;
use std::iter;
use std::sync::Arc;

/// One point in an undo/redo history.
///
/// - `past` is ordered oldest first.
/// - `future` is ordered nearest redo first.
/// - `count` caches the size of `present`.
///
/// Snapshots are shared behind `Arc`, so cloning a timeline or moving an
/// entry between `past`, `present` and `future` never copies the snapshot
/// itself.
///
/// # Example
///
/// ```rust
/// use undoable::core::Timeline;
///
/// let timeline = Timeline::new(vec![1, 2, 3]);
///
/// assert_eq!(timeline.present(), &vec![1, 2, 3]);
/// assert_eq!(timeline.count(), 3);
/// assert!(!timeline.can_undo());
/// assert!(!timeline.can_redo());
/// ```
///
/// Timelines serialize as a read-only view. They cannot be deserialized:
/// the only way to obtain one is from an engine or [`Timeline::new`], which
/// keeps `count` in step with `present`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(bound(serialize = "S: Serialize"))]
pub struct Timeline<S: Snapshot> {
    past: Vec<Arc<S>>,
    present: Arc<S>,
    future: Vec<Arc<S>>,
    count: usize,
}

impl<S: Snapshot> Timeline<S> {
    /// Seed a timeline with an initial present and empty history.
    ///
    /// `count` is derived with [`Snapshot::length`]. Engines with a custom
    /// [`Sizer`](super::Sizer) should be seeded with
    /// [`TransitionEngine::initial`](super::TransitionEngine::initial) instead.
    pub fn new(initial: S) -> Self {
        let count = initial.length();
        Self::with_count(Arc::new(initial), count)
    }

    /// Seed a timeline with a present already measured by the engine's sizer.
    pub(crate) fn with_count(initial: Arc<S>, count: usize) -> Self {
        Self::from_parts(Vec::new(), initial, Vec::new(), count)
    }

    pub(crate) fn from_parts(
        past: Vec<Arc<S>>,
        present: Arc<S>,
        future: Vec<Arc<S>>,
        count: usize,
    ) -> Self {
        Self {
            past,
            present,
            future,
            count,
        }
    }

    /// Snapshots that can be restored by undo, oldest first.
    pub fn past(&self) -> &[Arc<S>] {
        &self.past
    }

    /// The current snapshot.
    pub fn present(&self) -> &S {
        &self.present
    }

    /// The current snapshot as a shared handle.
    ///
    /// Passing this handle back to a set is recognised as a no-op without
    /// running the comparator.
    pub fn present_shared(&self) -> &Arc<S> {
        &self.present
    }

    /// Snapshots that can be restored by redo, nearest first.
    pub fn future(&self) -> &[Arc<S>] {
        &self.future
    }

    /// Cached size of the present snapshot.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of snapshots in the whole timeline, present included.
    pub fn total_entries(&self) -> usize {
        self.past.len() + 1 + self.future.len()
    }

    /// Index of the present snapshot within [`Timeline::iter`].
    pub fn position(&self) -> usize {
        self.past.len()
    }

    /// Every snapshot from oldest to newest.
    ///
    /// The future is already stored nearest first, so it follows the
    /// present unchanged.
    ///
    /// ```rust
    /// use undoable::core::Timeline;
    ///
    /// let timeline = Timeline::new("only");
    /// let entries: Vec<_> = timeline.iter().collect();
    /// assert_eq!(entries, vec![&"only"]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = &S> + '_ {
        self.past
            .iter()
            .chain(iter::once(&self.present))
            .chain(self.future.iter())
            .map(Arc::as_ref)
    }
}
