//! The transition engine: a pure reducer over timelines.
//!
//! [`TransitionEngine::transition`] takes the current timeline and an
//! [`Action`] and returns the next timeline. It never mutates its input and
//! never fails. When an action changes nothing, the very same `Arc` is
//! returned, so hosts can skip work with `Arc::ptr_eq`.

use super::compare::{Comparator, Sizer};
use super::snapshot::Snapshot;
use super::timeline::Timeline;
use crate::options::HistoryOptions;
use std::iter;
use std::sync::Arc;
use tracing::{debug, trace};

/// A request to move through or rewrite a timeline.
#[derive(Clone, Debug, PartialEq)]
pub enum Action<S: Snapshot> {
    /// Step back to the most recent past snapshot.
    Undo,

    /// Step forward to the nearest future snapshot.
    Redo,

    /// Commit a new present, unless it equals the current one.
    Set {
        snapshot: Arc<S>,
        /// Only consulted when checkpoints are enabled.
        checkpoint: bool,
    },

    /// Replace the present and drop all history.
    Reset(Arc<S>),
}

impl<S: Snapshot> Action<S> {
    /// An unmarked set.
    pub fn set(snapshot: impl Into<Arc<S>>) -> Self {
        Action::Set {
            snapshot: snapshot.into(),
            checkpoint: false,
        }
    }

    /// A set marked as a checkpoint.
    pub fn checkpoint(snapshot: impl Into<Arc<S>>) -> Self {
        Action::Set {
            snapshot: snapshot.into(),
            checkpoint: true,
        }
    }

    /// A reset, applied even when the snapshot equals the present.
    pub fn reset(snapshot: impl Into<Arc<S>>) -> Self {
        Action::Reset(snapshot.into())
    }

    /// Short name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::Set { .. } => "set",
            Self::Reset(_) => "reset",
        }
    }
}

/// Pure transition function configured with options, equality and size.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use undoable::core::{Action, TransitionEngine};
///
/// let engine = TransitionEngine::<Vec<i32>>::default();
/// let start = engine.initial(vec![1, 2, 3]);
///
/// let edited = engine.transition(&start, Action::set(vec![1, 2, 3, 4]));
/// assert_eq!(edited.count(), 4);
/// assert_eq!(edited.past().len(), 1);
///
/// let undone = engine.transition(&edited, Action::Undo);
/// assert_eq!(undone.present(), &vec![1, 2, 3]);
///
/// // Nothing to undo: the same timeline comes back.
/// let same = engine.transition(&start, Action::Undo);
/// assert!(Arc::ptr_eq(&same, &start));
/// ```
#[derive(Debug)]
pub struct TransitionEngine<S: Snapshot> {
    options: HistoryOptions,
    comparator: Comparator<S>,
    sizer: Sizer<S>,
}

impl<S: Snapshot> TransitionEngine<S> {
    /// Create an engine with structural equality and sequence-length sizing.
    pub fn new(options: HistoryOptions) -> Self {
        Self {
            options,
            comparator: Comparator::default(),
            sizer: Sizer::default(),
        }
    }

    /// Replace the equality used to suppress redundant sets.
    pub fn with_comparator(mut self, comparator: Comparator<S>) -> Self {
        self.comparator = comparator;
        self
    }

    /// Replace the size function used for `count`.
    pub fn with_sizer(mut self, sizer: Sizer<S>) -> Self {
        self.sizer = sizer;
        self
    }

    pub fn options(&self) -> &HistoryOptions {
        &self.options
    }

    /// Size of a snapshot as this engine measures it.
    pub fn measure(&self, snapshot: &S) -> usize {
        self.sizer.measure(snapshot)
    }

    /// Seed a timeline, measuring the initial present with this engine's sizer.
    pub fn initial(&self, snapshot: impl Into<Arc<S>>) -> Arc<Timeline<S>> {
        let snapshot = snapshot.into();
        let count = self.measure(&snapshot);
        Arc::new(Timeline::with_count(snapshot, count))
    }

    /// Compute the timeline that follows `state` under `action`.
    ///
    /// Returns a clone of `state` itself (same allocation) when the action
    /// is a no-op: undo with no past, redo with no future, or a set whose
    /// snapshot equals the present.
    pub fn transition(&self, state: &Arc<Timeline<S>>, action: Action<S>) -> Arc<Timeline<S>> {
        let kind = action.kind();
        let next = match action {
            Action::Undo => self.undo(state),
            Action::Redo => self.redo(state),
            Action::Set {
                snapshot,
                checkpoint,
            } => self.set(state, snapshot, checkpoint),
            Action::Reset(snapshot) => Some(self.reset(snapshot)),
        };

        match next {
            Some(next) => {
                trace!(
                    action = kind,
                    past = next.past().len(),
                    future = next.future().len(),
                    count = next.count(),
                    "applied transition"
                );
                Arc::new(next)
            }
            None => {
                trace!(action = kind, "transition was a no-op");
                Arc::clone(state)
            }
        }
    }

    fn undo(&self, state: &Timeline<S>) -> Option<Timeline<S>> {
        let (previous, rest) = state.past().split_last()?;

        let future = iter::once(Arc::clone(state.present_shared()))
            .chain(state.future().iter().cloned())
            .collect();

        Some(Timeline::from_parts(
            rest.to_vec(),
            Arc::clone(previous),
            future,
            self.measure(previous),
        ))
    }

    fn redo(&self, state: &Timeline<S>) -> Option<Timeline<S>> {
        let (next, rest) = state.future().split_first()?;

        let mut past = state.past().to_vec();
        past.push(Arc::clone(state.present_shared()));

        Some(Timeline::from_parts(
            past,
            Arc::clone(next),
            rest.to_vec(),
            self.measure(next),
        ))
    }

    fn set(&self, state: &Timeline<S>, snapshot: Arc<S>, checkpoint: bool) -> Option<Timeline<S>> {
        let present = state.present_shared();
        if Arc::ptr_eq(&snapshot, present) || self.comparator.check(&snapshot, present) {
            return None;
        }

        // Without checkpoints every distinct set is its own undo step.
        let record = !self.options.use_checkpoints || checkpoint;

        let mut past = state.past().to_vec();
        if record {
            past.push(Arc::clone(present));
        }
        self.trim(&mut past);

        let count = self.measure(&snapshot);
        Some(Timeline::from_parts(past, snapshot, Vec::new(), count))
    }

    fn reset(&self, snapshot: Arc<S>) -> Timeline<S> {
        let count = self.measure(&snapshot);
        Timeline::with_count(snapshot, count)
    }

    /// Drop the oldest entries until `past` fits the configured capacity.
    fn trim(&self, past: &mut Vec<Arc<S>>) {
        let Some(capacity) = self.options.capacity() else {
            return;
        };
        if past.len() > capacity {
            let excess = past.len() - capacity;
            past.drain(..excess);
            debug!(evicted = excess, capacity, "trimmed past to capacity");
        }
    }
}

impl<S: Snapshot> Default for TransitionEngine<S> {
    fn default() -> Self {
        Self::new(HistoryOptions::default())
    }
}

/// Apply `action` with default options: always-checkpoint, unbounded,
/// structural equality and sequence-length sizing.
pub fn transition<S: Snapshot>(state: &Arc<Timeline<S>>, action: Action<S>) -> Arc<Timeline<S>> {
    TransitionEngine::default().transition(state, action)
}
