//! This crate implements a small text comparison engine.  It exposes a set
//! of interchangeable comparison strategies behind one synchronous function
//! contract and produces an annotated rendering of the differences together
//! with addition/deletion/change counts.
//!
//! The crate is split into three levels:
//!
//! * [`algorithms`]: the raw sequence comparators.  An LCS based aligner
//!   used for line comparison and a positional (index-zipped) comparator
//!   used by the remaining strategies.  Both operate on generic slices.
//! * [`tokenize`]: splits text into the unit sequences (lines or words)
//!   the comparators walk.
//! * [`Strategy`]: the closed set of comparison strategies and the
//!   [`compare`] entry point that ties tokenization, alignment and
//!   rendering together into a [`ComparisonResult`].
//!
//! # Example
//!
//! ```rust
//! use textcompare::{compare, Strategy};
//!
//! let result = compare(Strategy::Line, "foo\nbar", "foo\nbaz");
//! assert_eq!(result.additions, 1);
//! assert_eq!(result.deletions, 1);
//! ```
//!
//! # A note on the positional strategies
//!
//! Only the [`Strategy::Line`] strategy realigns the two inputs (via LCS).
//! The character, word and side-by-side strategies compare unit *i* of one
//! text against unit *i* of the other without realignment, which keeps them
//! cheap but means a single early insertion shifts every later position out
//! of phase and the remainder is reported as replaced.  This is part of the
//! output contract, not a defect; see [`algorithms::positional`].
pub mod algorithms;
pub mod tokenize;

mod strategy;

pub use crate::strategy::{compare, ComparisonResult, Strategy, IDENTICAL_MESSAGE};
