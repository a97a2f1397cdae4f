//! Snapshot trait for values tracked by a history timeline.
//!
//! A snapshot is an opaque, whole-value picture of host state. The history
//! never looks inside it except to compare two snapshots and to derive a
//! size used as the timeline's cached `count`.

use serde_json::Value;
use std::collections::VecDeque;
use std::fmt::Debug;

/// Trait for values stored in an undo/redo timeline.
///
/// # Required Traits
///
/// - `Clone`: hosts commonly keep their own copy of the present value
/// - `PartialEq`: default equality used to suppress redundant sets
/// - `Debug`: snapshots must be debuggable for diagnostics
/// - `Send` + `Sync`: timelines are shared behind `Arc`
///
/// Equality is whatever `PartialEq` says. For derived impls that is a
/// recursive structural comparison over every field and element. Cyclic
/// structures are not supported. Floats compare by IEEE rules, so `NaN`
/// never equals itself and `-0.0` equals `0.0`; use a custom
/// [`Comparator`](super::Comparator) when that is not wanted.
///
/// # Example
///
/// ```rust
/// use undoable::core::Snapshot;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Canvas {
///     shapes: Vec<u32>,
/// }
///
/// impl Snapshot for Canvas {
///     fn length(&self) -> usize {
///         self.shapes.len()
///     }
/// }
///
/// assert_eq!(Canvas { shapes: vec![1, 2] }.length(), 2);
/// assert_eq!(vec!["a", "b", "c"].length(), 3);
/// assert_eq!(42u32.length(), 0);
/// ```
pub trait Snapshot: Clone + PartialEq + Debug + Send + Sync {
    /// Element count of the snapshot.
    ///
    /// Ordered sequences report how many elements they hold. Everything
    /// else reports `0`, which is the default.
    fn length(&self) -> usize {
        0
    }
}

impl<T> Snapshot for Vec<T>
where
    T: Clone + PartialEq + Debug + Send + Sync,
{
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Snapshot for VecDeque<T>
where
    T: Clone + PartialEq + Debug + Send + Sync,
{
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Snapshot for [T; N]
where
    T: Clone + PartialEq + Debug + Send + Sync,
{
    fn length(&self) -> usize {
        N
    }
}

/// `None` stands in for an absent value and always measures `0`.
impl<T: Snapshot> Snapshot for Option<T> {
    fn length(&self) -> usize {
        self.as_ref().map_or(0, Snapshot::length)
    }
}

impl<T: Snapshot> Snapshot for Box<T> {
    fn length(&self) -> usize {
        (**self).length()
    }
}

/// Dynamic JSON documents: arrays measure their length, objects and
/// scalars measure `0`.
impl Snapshot for Value {
    fn length(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            _ => 0,
        }
    }
}

macro_rules! scalar_snapshot {
    ($($ty:ty),* $(,)?) => {
        $(impl Snapshot for $ty {})*
    };
}

scalar_snapshot!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    String,
    &'static str,
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Clone, PartialEq, Debug)]
    enum Tool {
        Pen,
        Eraser,
    }

    impl Snapshot for Tool {}

    #[test]
    fn sequences_report_their_length() {
        assert_eq!(vec![1, 2, 3].length(), 3);
        assert_eq!(Vec::<u8>::new().length(), 0);
        assert_eq!(VecDeque::from(vec!['a', 'b']).length(), 2);
        assert_eq!([0u8; 4].length(), 4);
    }

    #[test]
    fn non_sequences_report_zero() {
        assert_eq!(7i32.length(), 0);
        assert_eq!(String::from("hello").length(), 0);
        assert_eq!("hello".length(), 0);
        assert_eq!(().length(), 0);
        assert_eq!(Tool::Pen.length(), 0);
    }

    #[test]
    fn absent_value_reports_zero() {
        let absent: Option<Vec<u8>> = None;
        assert_eq!(absent.length(), 0);
        assert_eq!(Some(vec![1u8, 2]).length(), 2);
    }

    #[test]
    fn boxed_snapshot_delegates() {
        assert_eq!(Box::new(vec![1, 2, 3, 4]).length(), 4);
    }

    #[test]
    fn json_arrays_report_length() {
        assert_eq!(json!([1, 2, 3]).length(), 3);
        assert_eq!(json!({"a": [1, 2]}).length(), 0);
        assert_eq!(json!(null).length(), 0);
        assert_eq!(json!("text").length(), 0);
    }

    #[test]
    fn json_equality_is_structural() {
        let a = json!({"shapes": [{"x": 1, "y": [2, 3]}], "name": "doc"});
        let b = json!({"name": "doc", "shapes": [{"x": 1, "y": [2, 3]}]});
        let c = json!({"name": "doc", "shapes": [{"x": 1, "y": [3, 2]}]});

        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, c);
    }

    #[test]
    fn derived_equality_distinguishes_variants() {
        assert_eq!(Tool::Eraser, Tool::Eraser);
        assert_ne!(Tool::Pen, Tool::Eraser);
    }
}
