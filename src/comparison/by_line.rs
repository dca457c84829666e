use super::{by_word::word_spans, spans_to_fragments, token_range_offsets};
use crate::{
    comparison::ComparisonError,
    diff::{diff_spans, exceeds_work_limit},
    fragment::{DiffFragment, LineFragment},
    policy::ComparisonPolicy,
    progress::Cancellation,
    tokenizer::{line_tokenizer::line_tokenizer, token::Token, word_tokenizer::word_tokenizer},
};

/// Line-granularity comparison. With `compute_inner`, every changed range
/// small enough for the complexity guard also gets a nested word-level diff;
/// ranges the guard rejects keep `inner == None`.
pub(crate) fn by_line(
    text1: &str,
    text2: &str,
    policy: ComparisonPolicy,
    compute_inner: bool,
    cancellation: &dyn Cancellation,
) -> Result<Vec<LineFragment>, ComparisonError> {
    let lines1 = line_tokenizer(text1);
    let lines2 = line_tokenizer(text2);

    let eq = |a: &Token<'_>, b: &Token<'_>| policy.lines_equal(a.text(), b.text());
    let spans = diff_spans(&lines1, &lines2, &eq, cancellation)?;

    spans
        .into_iter()
        .map(|span| {
            let (start1, end1) = token_range_offsets(&lines1, &span.before, text1.len());
            let (start2, end2) = token_range_offsets(&lines2, &span.after, text2.len());

            let inner = if compute_inner {
                inner_fragments(&text1[start1..end1], &text2[start2..end2], policy, cancellation)?
            } else {
                None
            };

            Ok(LineFragment::new(
                span.before,
                span.after,
                start1..end1,
                start2..end2,
                inner,
            ))
        })
        .collect()
}

/// Word-level diff of a single changed range, in offsets relative to the
/// range itself. Returns `None` when the range is too large to align.
fn inner_fragments(
    range_text1: &str,
    range_text2: &str,
    policy: ComparisonPolicy,
    cancellation: &dyn Cancellation,
) -> Result<Option<Vec<DiffFragment>>, ComparisonError> {
    let tokens1 = word_tokenizer(range_text1);
    let tokens2 = word_tokenizer(range_text2);

    if exceeds_work_limit(tokens1.len(), tokens2.len()) {
        return Ok(None);
    }

    let spans = word_spans(&tokens1, &tokens2, policy, cancellation)?;
    Ok(Some(spans_to_fragments(
        &spans,
        &tokens1,
        &tokens2,
        range_text1,
        range_text2,
        policy,
    )))
}
