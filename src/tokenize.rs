//! Tokenizers for the text strategies.
//!
//! These split a string into the unit sequence a comparison strategy walks.
//! Character units need no tokenizer; the character strategy iterates
//! [`str::chars`] directly.
//!
//! Both tokenizers are zero-copy: every returned token is a slice of the
//! input, and concatenating the tokens of either tokenizer in order
//! reproduces the input exactly.

/// The punctuation characters that form their own word tokens.
const PUNCTUATION: [char; 6] = ['.', ',', ';', ':', '!', '?'];

/// Splits a string into lines on `'\n'`.
///
/// No trimming and no `\r\n` normalization is performed; a `'\r'` stays
/// attached to its line's content.  A trailing `'\n'` produces a final
/// empty-string line.  An empty input produces no lines at all, so a text
/// compared against the empty string is reported purely as additions or
/// purely as deletions.
pub fn split_lines(s: &str) -> Vec<&str> {
    if s.is_empty() {
        Vec::new()
    } else {
        s.split('\n').collect()
    }
}

/// Splits a string into word and separator tokens.
///
/// A maximal run of whitespace is one token, each punctuation character
/// from `. , ; : ! ?` is its own token, and every maximal run of remaining
/// characters is a word token.  Separators are kept as real units so the
/// word strategy can report them unchanged and the rendered output can
/// reproduce the original spacing.
pub fn split_words(s: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut iter = s.char_indices().peekable();
    let mut word_start = None;

    while let Some((idx, c)) = iter.next() {
        if c.is_whitespace() {
            if let Some(start) = word_start.take() {
                tokens.push(&s[start..idx]);
            }
            let mut end = idx + c.len_utf8();
            while let Some(&(next_idx, next_char)) = iter.peek() {
                if !next_char.is_whitespace() {
                    break;
                }
                iter.next();
                end = next_idx + next_char.len_utf8();
            }
            tokens.push(&s[idx..end]);
        } else if PUNCTUATION.contains(&c) {
            if let Some(start) = word_start.take() {
                tokens.push(&s[start..idx]);
            }
            tokens.push(&s[idx..idx + c.len_utf8()]);
        } else if word_start.is_none() {
            word_start = Some(idx);
        }
    }
    if let Some(start) = word_start {
        tokens.push(&s[start..]);
    }
    tokens
}

#[test]
fn test_split_lines() {
    assert_eq!(split_lines("a\nb\nc"), vec!["a", "b", "c"]);
    assert_eq!(split_lines("a\r\nb"), vec!["a\r", "b"]);
    assert_eq!(split_lines("a\n"), vec!["a", ""]);
    assert_eq!(split_lines("\n"), vec!["", ""]);
    assert!(split_lines("").is_empty());
}

#[test]
fn test_split_words() {
    assert_eq!(split_words("the quick fox"), vec!["the", " ", "quick", " ", "fox"]);
    assert_eq!(
        split_words("Hello, world!"),
        vec!["Hello", ",", " ", "world", "!"]
    );
    assert_eq!(split_words("a..b"), vec!["a", ".", ".", "b"]);
    assert_eq!(split_words("foo  \t bar"), vec!["foo", "  \t ", "bar"]);
    assert_eq!(split_words("  edge "), vec!["  ", "edge", " "]);
    assert!(split_words("").is_empty());
}

#[test]
fn test_split_words_round_trip() {
    let corpus = [
        "",
        "plain",
        "the quick fox",
        "Hello, world!  How are you?",
        "trailing space ",
        " leading",
        "punct...runs!!,;:?",
        "h\u{e9}llo w\u{f6}rld \u{2603}",
        "line\nbreaks\tand\ttabs",
    ];
    for s in corpus {
        assert_eq!(split_words(s).concat(), *s, "round trip failed for {:?}", s);
    }
}
