//! The comparison strategies and the result type.
//!
//! This module ties the tokenizers and the raw comparators together and
//! renders the annotated output each strategy promises.  The markup
//! conventions produced here (`"  "`/`"- "`/`"+ "` line prefixes,
//! `[-x-]`/`[+x+]` character spans, `{-x-}`/`{+x+}` word spans and the
//! pipe-delimited side-by-side table) are a de facto wire format consumed
//! by renderers and must stay stable.
use std::fmt;

use crate::algorithms::{lcs, positional, ChangeTag};
use crate::tokenize::{split_lines, split_words};

/// The fixed message reported when both inputs are byte-for-byte equal.
pub const IDENTICAL_MESSAGE: &str = "No differences found";

/// The column width of the left cell in the side-by-side table.
const LEFT_WIDTH: usize = 30;

/// The outcome of a comparison.
///
/// Note that the meaning of [`changes`](ComparisonResult::changes) is
/// strategy specific: the line and side-by-side strategies report
/// `max(additions, deletions)` while the character and word strategies
/// report `additions + deletions`.  The formulas are part of the output
/// contract of each strategy and are deliberately not unified.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonResult {
    /// The annotated rendering of the differences.  The markup convention
    /// depends on the strategy that produced the result.
    pub unified: String,
    /// Number of inserted units.
    pub additions: usize,
    /// Number of removed units.
    pub deletions: usize,
    /// Strategy specific aggregate of the two counts above.
    pub changes: usize,
    /// True iff the two inputs were byte-for-byte equal.  When set, all
    /// counts are zero and `unified` is [`IDENTICAL_MESSAGE`].
    pub identical: bool,
}

impl ComparisonResult {
    fn identical() -> ComparisonResult {
        ComparisonResult {
            unified: IDENTICAL_MESSAGE.to_string(),
            additions: 0,
            deletions: 0,
            changes: 0,
            identical: true,
        }
    }
}

/// The closed set of comparison strategies.
///
/// The set is fixed and small, so it is an enum rather than an open
/// registry; callers enumerate it with [`Strategy::all`] and look a
/// strategy up by its exact name with [`Strategy::from_name`].  Strategies
/// carry no state, so values are freely copyable and safe to share across
/// threads.
#[derive(Clone, Copy, Hash, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// LCS aligned line comparison.
    Line,
    /// Positional comparison of characters.
    Character,
    /// Positional comparison of word and separator tokens.
    Word,
    /// Positional line comparison rendered as a two-column table.
    SideBySide,
}

impl Strategy {
    /// Returns every available strategy, in presentation order.
    pub fn all() -> &'static [Strategy] {
        &[
            Strategy::Line,
            Strategy::Character,
            Strategy::Word,
            Strategy::SideBySide,
        ]
    }

    /// Looks a strategy up by its exact [`name`](Strategy::name).
    pub fn from_name(name: &str) -> Option<Strategy> {
        Strategy::all().iter().copied().find(|s| s.name() == name)
    }

    /// The stable identifier of the strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Line => "line",
            Strategy::Character => "character",
            Strategy::Word => "word",
            Strategy::SideBySide => "side-by-side",
        }
    }

    /// A short human readable description for menus.
    pub fn description(&self) -> &'static str {
        match self {
            Strategy::Line => "Aligns the texts line by line and marks added and removed lines",
            Strategy::Character => "Marks character differences at matching positions",
            Strategy::Word => "Marks word differences at matching positions",
            Strategy::SideBySide => "Renders both texts as a two-column table with row tags",
        }
    }

    /// Compares two texts under this strategy.
    ///
    /// This is a pure function: it never panics for any pair of inputs,
    /// including empty strings, and owns all of its working buffers, so it
    /// may be called concurrently from any number of threads.
    ///
    /// Byte-for-byte equal inputs short-circuit before any tokenization or
    /// alignment work is done.
    pub fn compare(&self, old: &str, new: &str) -> ComparisonResult {
        if old == new {
            return ComparisonResult::identical();
        }
        match self {
            Strategy::Line => compare_lines(old, new),
            Strategy::Character => compare_chars(old, new),
            Strategy::Word => compare_words(old, new),
            Strategy::SideBySide => compare_side_by_side(old, new),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compares two texts under the given strategy.
///
/// Shortcut for [`Strategy::compare`].
pub fn compare(strategy: Strategy, old: &str, new: &str) -> ComparisonResult {
    strategy.compare(old, new)
}

fn compare_lines(old: &str, new: &str) -> ComparisonResult {
    let old_lines = split_lines(old);
    let new_lines = split_lines(new);
    let ops = lcs::diff(&old_lines, &new_lines);

    let mut additions = 0;
    let mut deletions = 0;
    let mut rows = Vec::with_capacity(ops.len());
    for (tag, line) in ops {
        match tag {
            ChangeTag::Equal => rows.push(format!("  {}", line)),
            ChangeTag::Delete => {
                deletions += 1;
                rows.push(format!("- {}", line));
            }
            ChangeTag::Insert => {
                additions += 1;
                rows.push(format!("+ {}", line));
            }
        }
    }
    // Only the tail is trimmed; a full trim would eat the two-column
    // marker of a leading context line.
    let unified = rows.join("\n").trim_end().to_string();
    ComparisonResult {
        unified,
        additions,
        deletions,
        changes: additions.max(deletions),
        identical: false,
    }
}

fn compare_chars(old: &str, new: &str) -> ComparisonResult {
    let old_chars: Vec<char> = old.chars().collect();
    let new_chars: Vec<char> = new.chars().collect();
    let ops = positional::diff(&old_chars, &new_chars);

    let mut additions = 0;
    let mut deletions = 0;
    let mut unified = String::with_capacity(old.len().max(new.len()));
    for (tag, c) in ops {
        match tag {
            ChangeTag::Equal => unified.push(*c),
            ChangeTag::Delete => {
                deletions += 1;
                unified.push_str("[-");
                unified.push(*c);
                unified.push_str("-]");
            }
            ChangeTag::Insert => {
                additions += 1;
                unified.push_str("[+");
                unified.push(*c);
                unified.push_str("+]");
            }
        }
    }
    ComparisonResult {
        unified,
        additions,
        deletions,
        changes: additions + deletions,
        identical: false,
    }
}

fn compare_words(old: &str, new: &str) -> ComparisonResult {
    let old_words = split_words(old);
    let new_words = split_words(new);
    let ops = positional::diff(&old_words, &new_words);

    let mut additions = 0;
    let mut deletions = 0;
    let mut unified = String::with_capacity(old.len().max(new.len()));
    for (tag, word) in ops {
        match tag {
            ChangeTag::Equal => unified.push_str(word),
            ChangeTag::Delete => {
                deletions += 1;
                unified.push_str("{-");
                unified.push_str(word);
                unified.push_str("-}");
            }
            ChangeTag::Insert => {
                additions += 1;
                unified.push_str("{+");
                unified.push_str(word);
                unified.push_str("+}");
            }
        }
    }
    ComparisonResult {
        unified,
        additions,
        deletions,
        changes: additions + deletions,
        identical: false,
    }
}

fn compare_side_by_side(old: &str, new: &str) -> ComparisonResult {
    let old_lines = split_lines(old);
    let new_lines = split_lines(new);

    let mut additions = 0;
    let mut deletions = 0;
    let mut rows = Vec::with_capacity(old_lines.len().max(new_lines.len()) + 2);
    rows.push(format!("{:<width$} | RIGHT SIDE", "LEFT SIDE", width = LEFT_WIDTH));
    rows.push("-".repeat(LEFT_WIDTH + 13));

    for i in 0..old_lines.len().max(new_lines.len()) {
        match (old_lines.get(i), new_lines.get(i)) {
            (Some(a), Some(b)) if a == b => {
                rows.push(format!("{:<width$} | {}", a, b, width = LEFT_WIDTH));
            }
            (Some(a), Some(b)) => {
                additions += 1;
                deletions += 1;
                rows.push(format!("{:<width$} | {} [CHANGED]", a, b, width = LEFT_WIDTH));
            }
            (Some(a), None) => {
                deletions += 1;
                rows.push(format!("{:<width$} | [DELETED]", a, width = LEFT_WIDTH));
            }
            (None, Some(b)) => {
                additions += 1;
                rows.push(format!("{:<width$} | {} [ADDED]", "", b, width = LEFT_WIDTH));
            }
            (None, None) => unreachable!(),
        }
    }
    ComparisonResult {
        unified: rows.join("\n"),
        additions,
        deletions,
        changes: additions.max(deletions),
        identical: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_short_circuit() {
        for &strategy in Strategy::all() {
            for s in ["", "x", "a\nb\nc", "punct, and space!"] {
                let result = strategy.compare(s, s);
                assert!(result.identical);
                assert_eq!(result.additions, 0);
                assert_eq!(result.deletions, 0);
                assert_eq!(result.changes, 0);
                assert_eq!(result.unified, IDENTICAL_MESSAGE);
            }
        }
    }

    #[test]
    fn test_empty_against_one_unit() {
        for &strategy in Strategy::all() {
            let result = strategy.compare("", "x");
            assert_eq!(result.additions, 1, "strategy {}", strategy);
            assert_eq!(result.deletions, 0, "strategy {}", strategy);
            assert!(!result.identical);

            let result = strategy.compare("x", "");
            assert_eq!(result.additions, 0, "strategy {}", strategy);
            assert_eq!(result.deletions, 1, "strategy {}", strategy);
        }
    }

    #[test]
    fn test_line_pure_append() {
        let result = Strategy::Line.compare("a\nb", "a\nb\nc");
        assert_eq!(result.additions, 1);
        assert_eq!(result.deletions, 0);
        assert_eq!(result.changes, 1);
        assert_eq!(result.unified, "  a\n  b\n+ c");
    }

    #[test]
    fn test_line_pure_deletion() {
        let result = Strategy::Line.compare("a\nb\nc", "a\nc");
        assert_eq!(result.additions, 0);
        assert_eq!(result.deletions, 1);
        assert_eq!(result.changes, 1);
        assert_eq!(result.unified, "  a\n- b\n  c");
    }

    #[test]
    fn test_line_replace_uses_max_formula() {
        let result = Strategy::Line.compare("foo\nbar\nbaz", "foo\nblah\nbaz");
        assert_eq!(result.additions, 1);
        assert_eq!(result.deletions, 1);
        assert_eq!(result.changes, 1);
        assert_eq!(result.unified, "  foo\n- bar\n+ blah\n  baz");
    }

    #[test]
    fn test_line_trailing_whitespace_trimmed() {
        let result = Strategy::Line.compare("a\nb", "a\n");
        assert_eq!(result.unified, "  a\n- b\n+");
    }

    #[test]
    fn test_character_paired_replace() {
        let result = Strategy::Character.compare("cat", "cot");
        assert_eq!(result.additions, 1);
        assert_eq!(result.deletions, 1);
        assert_eq!(result.changes, 2);
        insta::assert_snapshot!(result.unified, @"c[-a-][+o+]t");
    }

    #[test]
    fn test_character_positional_shift() {
        // A leading insertion is reported as a cascade of replacements,
        // not as a single insert.  Contractual behavior.
        let result = Strategy::Character.compare("abc", "xabc");
        assert_eq!(result.additions, 4);
        assert_eq!(result.deletions, 3);
        assert_eq!(result.changes, 7);
        insta::assert_snapshot!(result.unified, @"[-a-][+x+][-b-][+a+][-c-][+b+][+c+]");
    }

    #[test]
    fn test_character_append_only() {
        let result = Strategy::Character.compare("", "hi");
        assert_eq!(result.additions, 2);
        assert_eq!(result.deletions, 0);
        insta::assert_snapshot!(result.unified, @"[+h+][+i+]");
    }

    #[test]
    fn test_word_mid_sentence_edit() {
        let result = Strategy::Word.compare("the quick fox", "the slow fox");
        assert_eq!(result.additions, 1);
        assert_eq!(result.deletions, 1);
        assert_eq!(result.changes, 2);
        insta::assert_snapshot!(result.unified, @"the {-quick-}{+slow+} fox");
    }

    #[test]
    fn test_word_keeps_punctuation_tokens() {
        let result = Strategy::Word.compare("yes, sir", "yes, madam");
        assert_eq!(result.changes, 2);
        insta::assert_snapshot!(result.unified, @"yes, {-sir-}{+madam+}");
    }

    #[test]
    fn test_side_by_side_added_row() {
        let result = Strategy::SideBySide.compare("a", "a\nb");
        assert_eq!(result.additions, 1);
        assert_eq!(result.deletions, 0);
        assert_eq!(result.changes, 1);
        let rows: Vec<&str> = result.unified.split('\n').collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], format!("{:<30} | RIGHT SIDE", "LEFT SIDE"));
        assert_eq!(rows[1], "-".repeat(43));
        assert_eq!(rows[2], format!("{:<30} | a", "a"));
        assert_eq!(rows[3], format!("{:<30} | b [ADDED]", ""));
    }

    #[test]
    fn test_side_by_side_changed_and_deleted_rows() {
        let result = Strategy::SideBySide.compare("one\ntwo\nthree", "one\n2");
        assert_eq!(result.additions, 1);
        assert_eq!(result.deletions, 2);
        assert_eq!(result.changes, 2);
        let rows: Vec<&str> = result.unified.split('\n').collect();
        assert_eq!(rows[2], format!("{:<30} | one", "one"));
        assert_eq!(rows[3], format!("{:<30} | 2 [CHANGED]", "two"));
        assert_eq!(rows[4], format!("{:<30} | [DELETED]", "three"));
    }

    #[test]
    fn test_changes_formula_differs_per_strategy() {
        // One replaced unit: sum-based strategies report 2, max-based 1.
        assert_eq!(Strategy::Character.compare("a", "b").changes, 2);
        assert_eq!(Strategy::Word.compare("a", "b").changes, 2);
        assert_eq!(Strategy::Line.compare("a", "b").changes, 1);
        assert_eq!(Strategy::SideBySide.compare("a", "b").changes, 1);
    }

    #[test]
    fn test_strategy_registry() {
        assert_eq!(Strategy::all().len(), 4);
        for &strategy in Strategy::all() {
            assert_eq!(Strategy::from_name(strategy.name()), Some(strategy));
            assert!(!strategy.description().is_empty());
        }
        assert_eq!(Strategy::from_name("Line"), None);
        assert_eq!(Strategy::from_name("semantic"), None);
    }

    #[test]
    fn test_compare_shortcut() {
        assert_eq!(
            compare(Strategy::Line, "a", "b"),
            Strategy::Line.compare("a", "b")
        );
    }

    #[test]
    fn test_strategies_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Strategy>();
        assert_send_sync::<ComparisonResult>();
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_result_serde_round_trip() {
        let result = Strategy::Word.compare("the quick fox", "the slow fox");
        let json = serde_json::to_string(&result).unwrap();
        let back: ComparisonResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
