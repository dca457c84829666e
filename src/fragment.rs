use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A changed region between two versions of a text, as half-open byte ranges
/// into the "before" and "after" sides.
///
/// At least one side is non-empty; an empty side marks the position of a pure
/// insertion or deletion. A fragment list is always strictly ordered and
/// non-overlapping on both sides.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffFragment {
    pub start1: usize,
    pub end1: usize,
    pub start2: usize,
    pub end2: usize,
}

impl DiffFragment {
    #[must_use]
    pub fn new(start1: usize, end1: usize, start2: usize, end2: usize) -> Self {
        debug_assert!(start1 <= end1 && start2 <= end2);
        debug_assert!(
            start1 != end1 || start2 != end2,
            "a fragment must be non-empty on at least one side"
        );
        DiffFragment {
            start1,
            end1,
            start2,
            end2,
        }
    }

    #[must_use]
    pub fn range1(&self) -> Range<usize> { self.start1..self.end1 }

    #[must_use]
    pub fn range2(&self) -> Range<usize> { self.start2..self.end2 }
}

/// A changed region between two versions of a text at line granularity.
///
/// Carries both the line numbers and the byte offsets of the changed range,
/// plus optionally a finer word-level diff of the range. `inner` offsets are
/// relative to the fragment's own `start1`/`start2`.
///
/// `inner == None` means no inner diff was computed (the range was too large
/// for the complexity guard, or the caller asked for line granularity only);
/// treat it as "the whole range changed". `inner == Some(vec![])` means an
/// inner diff was computed and found only policy-ignored differences.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFragment {
    pub start_line1: usize,
    pub end_line1: usize,
    pub start_line2: usize,
    pub end_line2: usize,
    pub start1: usize,
    pub end1: usize,
    pub start2: usize,
    pub end2: usize,
    pub inner: Option<Vec<DiffFragment>>,
}

impl LineFragment {
    #[must_use]
    pub fn new(
        line_range1: Range<usize>,
        line_range2: Range<usize>,
        range1: Range<usize>,
        range2: Range<usize>,
        inner: Option<Vec<DiffFragment>>,
    ) -> Self {
        debug_assert!(
            !line_range1.is_empty() || !line_range2.is_empty(),
            "a line fragment must span lines on at least one side"
        );
        LineFragment {
            start_line1: line_range1.start,
            end_line1: line_range1.end,
            start_line2: line_range2.start,
            end_line2: line_range2.end,
            start1: range1.start,
            end1: range1.end,
            start2: range2.start,
            end2: range2.end,
            inner,
        }
    }

    #[must_use]
    pub fn line_range1(&self) -> Range<usize> { self.start_line1..self.end_line1 }

    #[must_use]
    pub fn line_range2(&self) -> Range<usize> { self.start_line2..self.end_line2 }

    #[must_use]
    pub fn range1(&self) -> Range<usize> { self.start1..self.end1 }

    #[must_use]
    pub fn range2(&self) -> Range<usize> { self.start2..self.end2 }

    /// Whether `other` starts exactly where `self` ends, on both sides.
    #[must_use]
    pub fn is_adjacent_to(&self, other: &LineFragment) -> bool {
        self.end_line1 == other.start_line1 && self.end_line2 == other.start_line2
    }
}
