//! Drag Gesture
//!
//! This demo shows checkpoint batching: a drag emits many intermediate
//! positions, but only the drop is recorded as an undoable step.
//!
//! Key concepts:
//! - Explicit-checkpoint mode coalesces unmarked sets
//! - Equal sets are suppressed without touching history
//! - Undo/redo are guarded no-ops at the ends of the timeline
//!
//! Run with: cargo run --example drag_gesture

use undoable::core::Snapshot;
use undoable::{HistoryOptions, HistoryStore};

#[derive(Clone, Copy, PartialEq, Debug)]
struct Position {
    x: i32,
    y: i32,
}

impl Snapshot for Position {}

fn main() {
    println!("=== Drag Gesture Demo ===\n");

    let options = HistoryOptions::builder()
        .use_checkpoints(true)
        .max_capacity(20)
        .build()
        .unwrap();
    let mut store = HistoryStore::with_options(Position { x: 0, y: 0 }, options);

    // Pointer down: mark where the drag starts.
    store.set_checkpoint(Position { x: 1, y: 1 });

    for step in 2..=10 {
        store.set(Position { x: step, y: step * 2 });
    }
    // Pointer held still: nothing new is recorded.
    let changed = store.set(Position { x: 10, y: 20 });
    println!("Repeated position changed history: {}", changed);

    // Pointer up: the drop becomes its own undo step.
    store.set_checkpoint(Position { x: 12, y: 24 });

    println!("Present: {:?}", store.present());
    println!("Undo steps available: {}", store.state().past().len());

    while store.undo() {
        println!("Undo -> {:?}", store.present());
    }
    println!("Can undo further: {}", store.can_undo());

    while store.redo() {
        println!("Redo -> {:?}", store.present());
    }

    println!("\n=== Demo Complete ===");
}
