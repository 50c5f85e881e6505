//! The raw sequence comparators.
//!
//! The implementations in this module are relatively low level and operate
//! on generic slices rather than text.  Both comparators walk the two
//! sequences and report every unit exactly once, tagged with a
//! [`ChangeTag`].  To compare text you would typically use the higher level
//! [`Strategy`](crate::Strategy) API instead.
//!
//! Two comparators are provided:
//!
//! * [`lcs`]: a dynamic programming longest-common-subsequence aligner.
//!   Quadratic in time and space, so callers should bound input sizes
//!   before handing very large sequences to it.
//! * [`positional`]: an index-zipped walk that never realigns.  Linear,
//!   but an early insertion or deletion shifts every later position out of
//!   phase and the rest of the sequence is reported as replaced.
use std::fmt;

pub mod lcs;
pub mod positional;

/// The tag attached to every unit a comparator reports.
///
/// A replaced unit is reported as a [`ChangeTag::Delete`] of the old unit
/// immediately followed by a [`ChangeTag::Insert`] of the new one; there is
/// no combined replace tag.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChangeTag {
    /// The unit appears in both sequences.
    Equal,
    /// The unit only appears in the old sequence.
    Delete,
    /// The unit only appears in the new sequence.
    Insert,
}

impl fmt::Display for ChangeTag {
    /// Renders the conventional single character diff marker.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChangeTag::Equal => " ",
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
        })
    }
}
