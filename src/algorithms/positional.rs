//! Positional (index-zipped) comparison.
//!
//! * time: `O(max(N, M))`
//! * space: `O(1)` beyond the output
//!
//! This comparator walks both sequences by identical index and never
//! realigns.  Unit `i` of the old sequence is only ever compared against
//! unit `i` of the new one, with out-of-range treated as absent.  A single
//! insertion near the start of the new sequence therefore shifts every
//! later index out of phase and the remainder is reported as one long run
//! of paired replacements.  That behavior is part of the output contract of
//! the strategies built on top of this module and must not be "improved"
//! into an edit-distance alignment.
use crate::algorithms::ChangeTag;

/// Compares `old` and `new` position by position and returns the change
/// script.
///
/// A position where both units are present but differ is reported as a
/// deletion of the old unit immediately followed by an insertion of the
/// new one.
pub fn diff<'x, T: PartialEq>(old: &'x [T], new: &'x [T]) -> Vec<(ChangeTag, &'x T)> {
    let mut ops = Vec::with_capacity(old.len().max(new.len()));
    for i in 0..old.len().max(new.len()) {
        match (old.get(i), new.get(i)) {
            (Some(a), Some(b)) if a == b => ops.push((ChangeTag::Equal, a)),
            (Some(a), Some(b)) => {
                ops.push((ChangeTag::Delete, a));
                ops.push((ChangeTag::Insert, b));
            }
            (Some(a), None) => ops.push((ChangeTag::Delete, a)),
            (None, Some(b)) => ops.push((ChangeTag::Insert, b)),
            (None, None) => unreachable!(),
        }
    }
    ops
}

#[test]
fn test_single_replace() {
    let old = ['c', 'a', 't'];
    let new = ['c', 'o', 't'];
    assert_eq!(
        diff(&old, &new),
        vec![
            (ChangeTag::Equal, &'c'),
            (ChangeTag::Delete, &'a'),
            (ChangeTag::Insert, &'o'),
            (ChangeTag::Equal, &'t'),
        ]
    );
}

#[test]
fn test_tail_mismatch() {
    let old = ["x"];
    let new = ["x", "y", "z"];
    assert_eq!(
        diff(&old, &new),
        vec![
            (ChangeTag::Equal, &"x"),
            (ChangeTag::Insert, &"y"),
            (ChangeTag::Insert, &"z"),
        ]
    );
}

#[test]
fn test_phase_shift() {
    // A leading insertion knocks every later position out of phase.  The
    // entire old sequence is reported as replaced plus one trailing insert.
    let old = ['a', 'b', 'c'];
    let new = ['x', 'a', 'b', 'c'];
    assert_eq!(
        diff(&old, &new),
        vec![
            (ChangeTag::Delete, &'a'),
            (ChangeTag::Insert, &'x'),
            (ChangeTag::Delete, &'b'),
            (ChangeTag::Insert, &'a'),
            (ChangeTag::Delete, &'c'),
            (ChangeTag::Insert, &'b'),
            (ChangeTag::Insert, &'c'),
        ]
    );
}

#[test]
fn test_empty_sides() {
    let empty: [char; 0] = [];
    let one = ['x'];
    assert_eq!(diff(&empty, &one), vec![(ChangeTag::Insert, &'x')]);
    assert_eq!(diff(&one, &empty), vec![(ChangeTag::Delete, &'x')]);
    assert!(diff(&empty, &empty).is_empty());
}
