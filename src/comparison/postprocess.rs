use super::token_range_offsets;
use crate::{
    fragment::LineFragment,
    policy::ComparisonPolicy,
    tokenizer::{line_tokenizer::line_tokenizer, token::Token},
};

/// Merges adjacent fragments, i.e. fragments whose line ranges are contiguous
/// on both sides, into single coarser fragments. Merged fragments drop their
/// inner word-level diff; recomputing it on the merged range is the caller's
/// responsibility. Idempotent.
#[must_use]
pub fn squash(fragments: Vec<LineFragment>) -> Vec<LineFragment> {
    let mut result: Vec<LineFragment> = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        if let Some(last) = result.last_mut() {
            if last.is_adjacent_to(&fragment) {
                *last = LineFragment::new(
                    last.start_line1..fragment.end_line1,
                    last.start_line2..fragment.end_line2,
                    last.start1..fragment.end1,
                    last.start2..fragment.end2,
                    None,
                );
                continue;
            }
        }
        result.push(fragment);
    }
    result
}

/// Post-processes a line-fragment list.
///
/// With `trim`, and under a whitespace-ignoring policy, leading and trailing
/// line pairs of each fragment that are policy-equal are given back to the
/// unchanged region; fragments trimmed down to nothing are dropped, and a
/// fragment is never trimmed into one that is degenerate on both sides. With
/// `squash`, the surviving fragments are merged as per [`squash`].
#[must_use]
pub fn process_blocks(
    fragments: Vec<LineFragment>,
    text1: &str,
    text2: &str,
    policy: ComparisonPolicy,
    trim: bool,
    squash_fragments: bool,
) -> Vec<LineFragment> {
    let mut result = fragments;

    if trim && policy != ComparisonPolicy::Default {
        let lines1 = line_tokenizer(text1);
        let lines2 = line_tokenizer(text2);
        result = result
            .into_iter()
            .filter_map(|fragment| {
                trim_fragment(fragment, &lines1, &lines2, text1.len(), text2.len(), policy)
            })
            .collect();
    }

    if squash_fragments {
        result = squash(result);
    }

    result
}

/// Shrinks a fragment by its policy-equal edge line pairs. Returns `None`
/// when nothing but equal pairs remains.
fn trim_fragment(
    fragment: LineFragment,
    lines1: &[Token<'_>],
    lines2: &[Token<'_>],
    len1: usize,
    len2: usize,
    policy: ComparisonPolicy,
) -> Option<LineFragment> {
    let mut line_range1 = fragment.line_range1();
    let mut line_range2 = fragment.line_range2();

    while !line_range1.is_empty()
        && !line_range2.is_empty()
        && policy.lines_equal(
            lines1[line_range1.start].text(),
            lines2[line_range2.start].text(),
        )
    {
        line_range1.start += 1;
        line_range2.start += 1;
    }
    while !line_range1.is_empty()
        && !line_range2.is_empty()
        && policy.lines_equal(
            lines1[line_range1.end - 1].text(),
            lines2[line_range2.end - 1].text(),
        )
    {
        line_range1.end -= 1;
        line_range2.end -= 1;
    }

    if line_range1.is_empty() && line_range2.is_empty() {
        return None;
    }
    if line_range1 == fragment.line_range1() && line_range2 == fragment.line_range2() {
        return Some(fragment);
    }

    let (start1, end1) = token_range_offsets(lines1, &line_range1, len1);
    let (start2, end2) = token_range_offsets(lines2, &line_range2, len2);
    Some(LineFragment::new(
        line_range1,
        line_range2,
        start1..end1,
        start2..end2,
        None,
    ))
}
