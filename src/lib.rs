//! Undoable: a pure functional undo/redo history
//!
//! Undoable follows a "pure core, imperative shell" design. The core is a
//! reducer that maps a timeline and an action to the next timeline without
//! side effects. A thin store owns the current timeline for hosts that
//! prefer an imperative API.
//!
//! # Core Concepts
//!
//! - **Snapshot**: an opaque, whole-value picture of host state
//! - **Timeline**: immutable past / present / future with a cached count
//! - **TransitionEngine**: the pure undo / redo / set / reset reducer
//! - **Checkpoints**: optional batching of many sets into one undo step
//! - **Capacity**: an optional bound on how much past is kept
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use undoable::core::{Action, Timeline, TransitionEngine};
//! use undoable::options::HistoryOptions;
//!
//! let options = HistoryOptions::builder().max_capacity(10).build().unwrap();
//! let engine = TransitionEngine::<Vec<&str>>::new(options);
//!
//! let start: Arc<Timeline<Vec<&str>>> = engine.initial(vec!["a"]);
//! let next = engine.transition(&start, Action::set(vec!["a", "b"]));
//! assert_eq!(next.count(), 2);
//!
//! // A structurally equal set is a no-op and hands back the same timeline.
//! let same = engine.transition(&next, Action::set(vec!["a", "b"]));
//! assert!(Arc::ptr_eq(&same, &next));
//! ```

pub mod core;
pub mod options;
pub mod store;

// Re-export commonly used types
pub use crate::core::{Action, Comparator, Sizer, Snapshot, Timeline, TransitionEngine};
pub use crate::options::{ConfigError, HistoryOptions};
pub use crate::store::HistoryStore;
