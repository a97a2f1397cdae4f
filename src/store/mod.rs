//! Mutable cell around the pure transition engine.
//!
//! [`HistoryStore`] is the "imperative shell": it owns the current
//! timeline, routes calls to [`TransitionEngine`], and swaps in whatever
//! timeline comes back. It carries no history logic of its own.

use crate::core::{Action, Snapshot, Timeline, TransitionEngine};
use crate::options::HistoryOptions;
use std::sync::Arc;
use tracing::{debug, trace};
use uuid::Uuid;

/// Owner of one undo/redo timeline.
///
/// Every mutating call returns `true` when the stored timeline was
/// replaced and `false` when the call was a no-op. Hosts that re-render on
/// change can use that flag, or compare [`HistoryStore::state`] handles
/// with `Arc::ptr_eq`.
///
/// The store is single-writer. Hosts that share it across threads must
/// serialise calls themselves, for example behind a `Mutex`.
///
/// # Example
///
/// ```rust
/// use undoable::store::HistoryStore;
///
/// let mut store = HistoryStore::new(vec![1, 2, 3]);
///
/// assert!(store.set(vec![1, 2, 3, 4]));
/// assert_eq!(store.count(), 4);
///
/// assert!(store.undo());
/// assert_eq!(store.present(), &vec![1, 2, 3]);
/// assert!(store.can_redo());
///
/// assert!(store.redo());
/// assert_eq!(store.count(), 4);
/// assert!(!store.redo());
/// ```
#[derive(Debug)]
pub struct HistoryStore<S: Snapshot> {
    id: Uuid,
    engine: TransitionEngine<S>,
    state: Arc<Timeline<S>>,
}

impl<S: Snapshot> HistoryStore<S> {
    /// Create a store with default options.
    pub fn new(initial: S) -> Self {
        Self::with_engine(initial, TransitionEngine::default())
    }

    pub fn with_options(initial: S, options: HistoryOptions) -> Self {
        Self::with_engine(initial, TransitionEngine::new(options))
    }

    /// Create a store around a pre-configured engine, e.g. one with a
    /// custom comparator or sizer.
    pub fn with_engine(initial: S, engine: TransitionEngine<S>) -> Self {
        let state = engine.initial(initial);
        let id = Uuid::new_v4();
        debug!(store = %id, count = state.count(), "created history store");
        Self { id, engine, state }
    }

    /// Identifier of this history instance, used in log fields.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn options(&self) -> &HistoryOptions {
        self.engine.options()
    }

    /// Current timeline.
    pub fn state(&self) -> &Arc<Timeline<S>> {
        &self.state
    }

    pub fn present(&self) -> &S {
        self.state.present()
    }

    /// Cached size of the present snapshot.
    pub fn count(&self) -> usize {
        self.state.count()
    }

    pub fn can_undo(&self) -> bool {
        self.state.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.state.can_redo()
    }

    /// Run an action through the engine and keep the result.
    ///
    /// Returns `false` when the engine handed back the current timeline.
    pub fn dispatch(&mut self, action: Action<S>) -> bool {
        let kind = action.kind();
        let next = self.engine.transition(&self.state, action);
        if Arc::ptr_eq(&next, &self.state) {
            trace!(store = %self.id, action = kind, "action left timeline unchanged");
            return false;
        }

        self.state = next;
        trace!(store = %self.id, action = kind, count = self.state.count(), "timeline replaced");
        true
    }

    /// Commit a new present without marking a checkpoint.
    pub fn set(&mut self, snapshot: impl Into<Arc<S>>) -> bool {
        self.dispatch(Action::set(snapshot))
    }

    /// Commit a new present marked as a checkpoint.
    pub fn set_checkpoint(&mut self, snapshot: impl Into<Arc<S>>) -> bool {
        self.dispatch(Action::checkpoint(snapshot))
    }

    /// Replace the present and clear all history, even if unchanged.
    pub fn reset(&mut self, snapshot: impl Into<Arc<S>>) -> bool {
        self.dispatch(Action::reset(snapshot))
    }

    /// Step back one snapshot. Returns `false` without dispatching when
    /// there is no past.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            debug!(store = %self.id, "nothing to undo");
            return false;
        }
        self.dispatch(Action::Undo)
    }

    /// Step forward one snapshot. Returns `false` without dispatching when
    /// there is no future.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            debug!(store = %self.id, "nothing to redo");
            return false;
        }
        self.dispatch(Action::Redo)
    }
}
