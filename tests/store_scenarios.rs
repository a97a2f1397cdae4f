//! End-to-end scenarios driving a `HistoryStore` the way a host would.

use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use undoable::{HistoryOptions, HistoryStore, Timeline};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

#[test]
fn list_editing_session() {
    init_tracing();
    let mut store = HistoryStore::new(vec![1, 2, 3]);

    store.set(vec![1, 2, 3, 4]);
    assert_eq!(store.count(), 4);
    assert_eq!(store.state().past().len(), 1);
    assert_eq!(store.state().past()[0].as_ref(), &vec![1, 2, 3]);

    store.undo();
    assert_eq!(store.present(), &vec![1, 2, 3]);
    assert_eq!(store.count(), 3);
    assert_eq!(store.state().future()[0].as_ref(), &vec![1, 2, 3, 4]);

    store.redo();
    assert_eq!(store.count(), 4);
    assert!(store.state().future().is_empty());
}

#[test]
fn host_skips_rerender_on_unchanged_state() {
    init_tracing();
    let mut store = HistoryStore::new(json!({"title": "Untitled", "blocks": []}));
    let mut renders = 0;
    let mut last_seen: Arc<Timeline<Value>> = Arc::clone(store.state());

    let edits = [
        json!({"title": "Untitled", "blocks": []}),
        json!({"blocks": [], "title": "Untitled"}),
        json!({"title": "Notes", "blocks": []}),
        json!({"title": "Notes", "blocks": []}),
        json!({"title": "Notes", "blocks": [{"text": "hi"}]}),
    ];
    for edit in edits {
        store.set(edit);
        if !Arc::ptr_eq(&last_seen, store.state()) {
            renders += 1;
            last_seen = Arc::clone(store.state());
        }
    }

    assert_eq!(renders, 2);
    assert_eq!(store.state().past().len(), 2);
}

#[test]
fn drag_gesture_is_one_undo_step() {
    init_tracing();
    let options = HistoryOptions::from_json(r#"{"useCheckpoints": true}"#).unwrap();
    let mut store = HistoryStore::with_options(0i32, options);

    store.set_checkpoint(10);
    for x in 11..=20 {
        store.set(x);
    }
    store.set_checkpoint(21);

    assert_eq!(store.state().past().len(), 2);
    assert!(store.undo());
    assert_eq!(store.present(), &20);
    assert!(store.undo());
    assert_eq!(store.present(), &0);
    assert!(!store.undo());
}

#[test]
fn bounded_history_forgets_oldest() {
    init_tracing();
    let options = HistoryOptions::from_json(r#"{"maxCapacity": 3}"#).unwrap();
    let mut store = HistoryStore::with_options(String::from("v0"), options);

    for n in 1..=10 {
        store.set(format!("v{n}"));
    }

    let past: Vec<&str> = store.state().past().iter().map(|s| s.as_str()).collect();
    assert_eq!(past, vec!["v7", "v8", "v9"]);
}

#[test]
fn earlier_states_survive_later_edits() {
    let mut store = HistoryStore::new(vec!['a']);
    let first = Arc::clone(store.state());

    store.set(vec!['a', 'b']);
    let second = Arc::clone(store.state());
    store.undo();
    store.reset(vec!['z']);

    assert_eq!(first.present(), &vec!['a']);
    assert_eq!(second.present(), &vec!['a', 'b']);
    assert_eq!(second.past().len(), 1);
    assert_eq!(store.present(), &vec!['z']);
    assert_eq!(store.state().total_entries(), 1);
}

#[test]
fn shared_store_behind_mutex() {
    let store = Arc::new(Mutex::new(HistoryStore::new(Vec::<u32>::new())));

    let handles: Vec<_> = (0..4u32)
        .map(|n| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                let mut store = store.lock().unwrap();
                let mut next = store.present().clone();
                next.push(n);
                store.set(next);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let store = store.lock().unwrap();
    assert_eq!(store.count(), 4);
    assert_eq!(store.state().past().len(), 4);
}

#[test]
fn timeline_view_serializes_for_inspection() {
    let mut store = HistoryStore::new(vec![1u8]);
    store.set(vec![1, 2]);
    store.undo();

    let view = serde_json::to_value(store.state().as_ref()).unwrap();

    assert_eq!(
        view,
        json!({"past": [], "present": [1], "future": [[1, 2]], "count": 1})
    );
}
