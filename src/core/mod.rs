//! Core undo/redo types and logic.
//!
//! This module contains the pure functional core of the history:
//! - Snapshot values via the `Snapshot` trait
//! - Pluggable equality and size functions
//! - The immutable `Timeline`
//! - The `TransitionEngine` reducer
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod compare;
mod engine;
mod snapshot;
mod timeline;

pub use compare::{Comparator, Sizer};
pub use engine::{transition, Action, TransitionEngine};
pub use snapshot::Snapshot;
pub use timeline::Timeline;
