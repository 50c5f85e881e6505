//! Longest-common-subsequence alignment.
//!
//! * time: `O(NM)`
//! * space: `O(NM)`
//!
//! This is the classic dynamic programming LCS with a membership backtrack.
//! It is used by the line strategy where a real alignment is wanted so that
//! an inserted or deleted line does not throw off everything after it.
use crate::algorithms::ChangeTag;

/// Aligns `old` and `new` and returns the change script.
///
/// Every unit of both inputs appears exactly once in the returned vector.
/// Matched units are reported as [`ChangeTag::Equal`] (carrying the old
/// side's unit); the rest are deletions of old units and insertions of new
/// units.  When the walk has both a deletion and an insertion available it
/// emits the deletion first, so a run of ambiguous lines is absorbed by the
/// old side.  The output is deterministic for a given input pair.
pub fn diff<'x, T: PartialEq>(old: &'x [T], new: &'x [T]) -> Vec<(ChangeTag, &'x T)> {
    let table = make_table(old, new);
    let in_lcs = make_membership(&table, old, new);

    let mut ops = Vec::with_capacity(old.len().max(new.len()));
    let mut i = 0;
    let mut j = 0;
    while i < old.len() || j < new.len() {
        if i < old.len() && j < new.len() && old[i] == new[j] {
            ops.push((ChangeTag::Equal, &old[i]));
            i += 1;
            j += 1;
        } else if i < old.len() && (j >= new.len() || !in_lcs[i][j]) {
            ops.push((ChangeTag::Delete, &old[i]));
            i += 1;
        } else {
            ops.push((ChangeTag::Insert, &new[j]));
            j += 1;
        }
    }
    ops
}

/// Builds the `(old.len() + 1) x (new.len() + 1)` LCS length table.
///
/// `table[i][j]` is the LCS length of `old[..i]` and `new[..j]`.
fn make_table<T: PartialEq>(old: &[T], new: &[T]) -> Vec<Vec<usize>> {
    let mut table = vec![vec![0; new.len() + 1]; old.len() + 1];
    for i in 1..=old.len() {
        for j in 1..=new.len() {
            table[i][j] = if old[i - 1] == new[j - 1] {
                table[i - 1][j - 1] + 1
            } else {
                table[i - 1][j].max(table[i][j - 1])
            };
        }
    }
    table
}

/// Backtracks one optimal path through the table and marks every matched
/// `(i, j)` pair on it.
///
/// The result is an `old.len() x new.len()` matrix where `true` means the
/// pair is part of the chosen LCS.  Only matched pairs are marked, so a
/// `true` entry implies `old[i] == new[j]`.
fn make_membership<T: PartialEq>(table: &[Vec<usize>], old: &[T], new: &[T]) -> Vec<Vec<bool>> {
    let mut in_lcs = vec![vec![false; new.len()]; old.len()];
    let mut i = old.len();
    let mut j = new.len();
    while i > 0 && j > 0 {
        if old[i - 1] == new[j - 1] {
            in_lcs[i - 1][j - 1] = true;
            i -= 1;
            j -= 1;
        } else if table[i - 1][j] >= table[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    in_lcs
}

#[test]
fn test_table() {
    let table = make_table(&[2, 3], &[0, 1, 2]);
    assert_eq!(
        table,
        vec![vec![0, 0, 0, 0], vec![0, 0, 0, 1], vec![0, 0, 0, 1]]
    );
}

#[test]
fn test_identical() {
    let a = ["x", "y", "z"];
    assert_eq!(
        diff(&a, &a),
        vec![
            (ChangeTag::Equal, &"x"),
            (ChangeTag::Equal, &"y"),
            (ChangeTag::Equal, &"z"),
        ]
    );
}

#[test]
fn test_replace_in_middle() {
    let old = ["foo", "bar", "baz"];
    let new = ["foo", "blah", "baz"];
    assert_eq!(
        diff(&old, &new),
        vec![
            (ChangeTag::Equal, &"foo"),
            (ChangeTag::Delete, &"bar"),
            (ChangeTag::Insert, &"blah"),
            (ChangeTag::Equal, &"baz"),
        ]
    );
}

#[test]
fn test_append() {
    let old = ["a", "b"];
    let new = ["a", "b", "c"];
    assert_eq!(
        diff(&old, &new),
        vec![
            (ChangeTag::Equal, &"a"),
            (ChangeTag::Equal, &"b"),
            (ChangeTag::Insert, &"c"),
        ]
    );
}

#[test]
fn test_delete_in_middle() {
    let old = ["a", "b", "c"];
    let new = ["a", "c"];
    assert_eq!(
        diff(&old, &new),
        vec![
            (ChangeTag::Equal, &"a"),
            (ChangeTag::Delete, &"b"),
            (ChangeTag::Equal, &"c"),
        ]
    );
}

#[test]
fn test_empty_sides() {
    let empty: [&str; 0] = [];
    let new = ["x"];
    assert_eq!(diff(&empty, &new), vec![(ChangeTag::Insert, &"x")]);
    assert_eq!(diff(&new, &empty), vec![(ChangeTag::Delete, &"x")]);
    assert!(diff(&empty, &empty).is_empty());
}

#[test]
fn test_deletion_absorbs_ambiguous_run() {
    // When a unit matched later in the new sequence is reached before its
    // partner, the walk deletes it rather than inserting around it.
    let old = ["a"];
    let new = ["b", "a"];
    assert_eq!(
        diff(&old, &new),
        vec![
            (ChangeTag::Delete, &"a"),
            (ChangeTag::Insert, &"b"),
            (ChangeTag::Insert, &"a"),
        ]
    );
}

#[test]
fn test_every_unit_reported_once() {
    let old = [1, 3, 5, 7, 9, 11];
    let new = [1, 4, 5, 9, 10];
    let ops = diff(&old, &new);
    let old_side = ops
        .iter()
        .filter(|(tag, _)| *tag != ChangeTag::Insert)
        .count();
    let new_side = ops
        .iter()
        .filter(|(tag, _)| *tag != ChangeTag::Delete)
        .count();
    assert_eq!(old_side, old.len());
    assert_eq!(new_side, new.len());
}
