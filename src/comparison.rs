use std::ops::Range;

use crate::{
    fragment::{DiffFragment, LineFragment},
    policy::ComparisonPolicy,
    progress::Cancellation,
    tokenizer::token::Token,
};

mod by_char;
mod by_line;
mod by_word;
mod comparison_error;
mod postprocess;

pub use comparison_error::ComparisonError;
pub use postprocess::{process_blocks, squash};

/// Compares two texts character by character.
///
/// Under [`ComparisonPolicy::IgnoreWhitespaces`] any whitespace character
/// matches any other and changes touching only whitespace are dropped from
/// the result. [`ComparisonPolicy::TrimWhitespaces`] behaves like the default
/// policy here: trimming is a line-level concept.
///
/// # Errors
///
/// Returns [`ComparisonError::Cancelled`] if `cancellation` fires.
pub fn compare_chars(
    text1: &str,
    text2: &str,
    policy: ComparisonPolicy,
    cancellation: &dyn Cancellation,
) -> Result<Vec<DiffFragment>, ComparisonError> {
    by_char::by_char(text1, text2, policy, cancellation)
}

/// Compares two texts word by word, where a word is a maximal alphanumeric
/// run, a maximal whitespace run or a single punctuation character.
///
/// Words anchor the alignment: punctuation and whitespace between two
/// matched words never pair up with content outside their gap.
///
/// # Errors
///
/// Returns [`ComparisonError::Cancelled`] if `cancellation` fires.
pub fn compare_words(
    text1: &str,
    text2: &str,
    policy: ComparisonPolicy,
    cancellation: &dyn Cancellation,
) -> Result<Vec<DiffFragment>, ComparisonError> {
    by_word::by_word(text1, text2, policy, cancellation)
}

/// Compares two texts line by line and, for every changed range small enough
/// for the complexity guard, computes a nested word-level diff of the range.
///
/// The result is raw: fragments are neither squashed nor trimmed. Use
/// [`compare_lines`] for the post-processed form.
///
/// # Errors
///
/// Returns [`ComparisonError::Cancelled`] if `cancellation` fires.
pub fn compare_lines_inner(
    text1: &str,
    text2: &str,
    policy: ComparisonPolicy,
    cancellation: &dyn Cancellation,
) -> Result<Vec<LineFragment>, ComparisonError> {
    by_line::by_line(text1, text2, policy, true, cancellation)
}

/// Compares two texts line by line: the typical entry point.
///
/// Equivalent to a raw line diff followed by
/// [`process_blocks`] with trimming and squashing enabled, so under the
/// whitespace-ignoring policies matched blank edges are given back to the
/// unchanged region. The returned fragments carry no inner word-level diff.
///
/// # Errors
///
/// Returns [`ComparisonError::Cancelled`] if `cancellation` fires.
pub fn compare_lines(
    text1: &str,
    text2: &str,
    policy: ComparisonPolicy,
    cancellation: &dyn Cancellation,
) -> Result<Vec<LineFragment>, ComparisonError> {
    let fragments = by_line::by_line(text1, text2, policy, false, cancellation)?;
    Ok(process_blocks(
        fragments, text1, text2, policy, true, true,
    ))
}

/// Policy-aware equality of two whole texts, usable as a fast-path check
/// before computing a full diff.
#[must_use]
pub fn is_equal(text1: &str, text2: &str, policy: ComparisonPolicy) -> bool {
    policy.texts_equal(text1, text2)
}

/// Maps a range of token indices back to byte offsets in the source text. An
/// empty range maps to the start of the token it points at, or to the end of
/// the text when it points past the last token.
pub(crate) fn token_range_offsets(
    tokens: &[Token<'_>],
    range: &Range<usize>,
    text_len: usize,
) -> (usize, usize) {
    if range.is_empty() {
        let offset = tokens.get(range.start).map_or(text_len, Token::start);
        (offset, offset)
    } else {
        (tokens[range.start].start(), tokens[range.end - 1].end())
    }
}

/// Converts token-space spans into byte-offset fragments. Under
/// [`ComparisonPolicy::IgnoreWhitespaces`] fragments whose two sides consist
/// entirely of whitespace are policy-equal and therefore dropped.
pub(crate) fn spans_to_fragments(
    spans: &[crate::diff::SpanPair],
    tokens1: &[Token<'_>],
    tokens2: &[Token<'_>],
    text1: &str,
    text2: &str,
    policy: ComparisonPolicy,
) -> Vec<DiffFragment> {
    let whitespace_only = |text: &str| text.chars().all(char::is_whitespace);

    spans
        .iter()
        .map(|span| {
            let (start1, end1) = token_range_offsets(tokens1, &span.before, text1.len());
            let (start2, end2) = token_range_offsets(tokens2, &span.after, text2.len());
            DiffFragment::new(start1, end1, start2, end2)
        })
        .filter(|fragment| {
            policy != ComparisonPolicy::IgnoreWhitespaces
                || !whitespace_only(&text1[fragment.range1()])
                || !whitespace_only(&text2[fragment.range2()])
        })
        .collect()
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use test_case::test_matrix;

    use super::*;
    use crate::progress::{CancellationFlag, Never};

    fn chars(
        text1: &str,
        text2: &str,
        policy: ComparisonPolicy,
    ) -> Vec<(usize, usize, usize, usize)> {
        compare_chars(text1, text2, policy, &Never)
            .unwrap()
            .into_iter()
            .map(|f| (f.start1, f.end1, f.start2, f.end2))
            .collect()
    }

    fn lines(
        text1: &str,
        text2: &str,
        policy: ComparisonPolicy,
    ) -> Vec<(usize, usize, usize, usize)> {
        compare_lines(text1, text2, policy, &Never)
            .unwrap()
            .into_iter()
            .map(|f| (f.start_line1, f.end_line1, f.start_line2, f.end_line2))
            .collect()
    }

    #[test]
    fn test_equal_texts_have_no_fragments() {
        assert_eq!(chars("", "", ComparisonPolicy::Default), vec![]);
        assert_eq!(chars("xyz", "xyz", ComparisonPolicy::Default), vec![]);
    }

    #[test]
    fn test_character_deletions() {
        assert_eq!(chars("x", "", ComparisonPolicy::Default), vec![(0, 1, 0, 0)]);
        assert_eq!(chars("xyx", "xx", ComparisonPolicy::Default), vec![(
            1, 2, 1, 1
        )]);
        assert_eq!(chars("xy", "x", ComparisonPolicy::Default), vec![(
            1, 2, 1, 1
        )]);
    }

    #[test]
    fn test_line_modifications() {
        assert_eq!(lines("x\ny\nz", "n\ny\nm", ComparisonPolicy::Default), vec![
            (0, 1, 0, 1),
            (2, 3, 2, 3)
        ]);
    }

    #[test]
    fn test_whitespace_only_line_change_under_each_policy() {
        assert_eq!(lines("x ", " x", ComparisonPolicy::Default), vec![(
            0, 1, 0, 1
        )]);
        assert_eq!(lines("x ", " x", ComparisonPolicy::TrimWhitespaces), vec![]);
        assert_eq!(lines("x ", " x", ComparisonPolicy::IgnoreWhitespaces), vec![]);
    }

    #[test]
    fn test_ignored_whitespace_changes_are_dropped_at_char_level() {
        assert_eq!(
            chars("a  b", "a b", ComparisonPolicy::IgnoreWhitespaces),
            vec![]
        );
        assert_eq!(chars("a  b", "a b", ComparisonPolicy::Default), vec![(
            1, 2, 1, 1
        )]);
    }

    #[test]
    fn test_is_equal() {
        assert!(is_equal("x\ny", "x\ny", ComparisonPolicy::Default));
        assert!(!is_equal("x ", " x", ComparisonPolicy::Default));
        assert!(is_equal("x ", " x", ComparisonPolicy::TrimWhitespaces));
        assert!(is_equal("a b", "ab", ComparisonPolicy::IgnoreWhitespaces));
        assert!(!is_equal("a b", "ac", ComparisonPolicy::IgnoreWhitespaces));
    }

    #[test_matrix([
        ComparisonPolicy::Default,
        ComparisonPolicy::TrimWhitespaces,
        ComparisonPolicy::IgnoreWhitespaces
    ])]
    fn test_cancellation_is_reported(policy: ComparisonPolicy) {
        let flag = CancellationFlag::new();
        flag.cancel();

        assert_eq!(
            compare_lines("first\nsecond", "first\nthird", policy, &flag),
            Err(ComparisonError::Cancelled)
        );
    }
}
