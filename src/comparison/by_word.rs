use super::spans_to_fragments;
use crate::{
    comparison::ComparisonError,
    diff::{SpanPair, diff_spans},
    fragment::DiffFragment,
    policy::ComparisonPolicy,
    progress::Cancellation,
    tokenizer::{
        token::{Token, TokenKind},
        word_tokenizer::word_tokenizer,
    },
};

/// Word-granularity comparison.
pub(crate) fn by_word(
    text1: &str,
    text2: &str,
    policy: ComparisonPolicy,
    cancellation: &dyn Cancellation,
) -> Result<Vec<DiffFragment>, ComparisonError> {
    let tokens1 = word_tokenizer(text1);
    let tokens2 = word_tokenizer(text2);

    let spans = word_spans(&tokens1, &tokens2, policy, cancellation)?;

    Ok(spans_to_fragments(
        &spans, &tokens1, &tokens2, text1, text2, policy,
    ))
}

/// Aligns two word-token sequences in two phases: first only the word runs,
/// which anchor the result, then the gaps between consecutive anchors. This
/// keeps punctuation and whitespace from stealing matches that belong to
/// content: in `"a;\nb;" -> "b;"` the surviving `b` pairs up with `b`, not
/// with the earlier `;`.
pub(crate) fn word_spans<'a>(
    tokens1: &[Token<'a>],
    tokens2: &[Token<'a>],
    policy: ComparisonPolicy,
    cancellation: &dyn Cancellation,
) -> Result<Vec<SpanPair>, ComparisonError> {
    let words1: Vec<usize> = word_indices(tokens1);
    let words2: Vec<usize> = word_indices(tokens2);

    // Phase 1: align the word runs alone. Words compare exactly under every
    // policy, so no predicate indirection is needed here.
    let projected1: Vec<Token<'a>> = words1.iter().map(|&i| tokens1[i]).collect();
    let projected2: Vec<Token<'a>> = words2.iter().map(|&i| tokens2[i]).collect();
    let word_eq = |a: &Token<'_>, b: &Token<'_>| a.text() == b.text();
    let word_diff = diff_spans(&projected1, &projected2, &word_eq, cancellation)?;

    let anchors = matched_pairs(&word_diff, &words1, &words2);

    // Phase 2: align each gap between consecutive anchors with the full
    // policy equality.
    let unit_eq = |a: &Token<'_>, b: &Token<'_>| policy.units_equal(a, b);
    let mut result = Vec::new();
    let mut gap_start1 = 0;
    let mut gap_start2 = 0;
    for &(anchor1, anchor2) in anchors
        .iter()
        .chain(std::iter::once(&(tokens1.len(), tokens2.len())))
    {
        let gap_diff = diff_spans(
            &tokens1[gap_start1..anchor1],
            &tokens2[gap_start2..anchor2],
            &unit_eq,
            cancellation,
        )?;
        result.extend(gap_diff.into_iter().map(|span| SpanPair {
            before: span.before.start + gap_start1..span.before.end + gap_start1,
            after: span.after.start + gap_start2..span.after.end + gap_start2,
        }));

        gap_start1 = anchor1 + 1;
        gap_start2 = anchor2 + 1;
    }

    Ok(result)
}

fn word_indices(tokens: &[Token<'_>]) -> Vec<usize> {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| token.kind() == TokenKind::Word)
        .map(|(i, _)| i)
        .collect()
}

/// Converts the changed spans of the projected word diff back into the pairs
/// of full-sequence indices that matched.
fn matched_pairs(
    word_diff: &[SpanPair],
    words1: &[usize],
    words2: &[usize],
) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    let mut i1 = 0;
    let mut i2 = 0;
    for span in word_diff {
        while i1 < span.before.start {
            pairs.push((words1[i1], words2[i2]));
            i1 += 1;
            i2 += 1;
        }
        i1 = span.before.end;
        i2 = span.after.end;
    }
    while i1 < words1.len() {
        pairs.push((words1[i1], words2[i2]));
        i1 += 1;
        i2 += 1;
    }
    pairs
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::progress::Never;

    fn fragments(text1: &str, text2: &str, policy: ComparisonPolicy) -> Vec<(String, String)> {
        by_word(text1, text2, policy, &Never)
            .unwrap()
            .into_iter()
            .map(|f| {
                (
                    text1[f.range1()].to_owned(),
                    text2[f.range2()].to_owned(),
                )
            })
            .collect()
    }

    #[test]
    fn test_replaced_word() {
        assert_eq!(
            fragments("merging is hard", "merging is easy", ComparisonPolicy::Default),
            vec![("hard".to_owned(), "easy".to_owned())]
        );
    }

    #[test]
    fn test_words_anchor_over_punctuation() {
        // Without anchoring, the `;` of the deleted statement could pair up
        // with the surviving one and split the change in two.
        assert_eq!(
            fragments("a;\nb;", "b;", ComparisonPolicy::Default),
            vec![("a;\n".to_owned(), String::new())]
        );
    }

    #[test]
    fn test_whitespace_reflow_is_ignored_under_ignore() {
        assert_eq!(
            fragments(
                "one two\nthree",
                "one two three",
                ComparisonPolicy::IgnoreWhitespaces
            ),
            vec![]
        );
        assert_eq!(
            fragments(
                "one two\nthree",
                "one two three",
                ComparisonPolicy::Default
            ),
            vec![("\n".to_owned(), " ".to_owned())]
        );
    }

    #[test]
    fn test_changed_punctuation_between_matched_words() {
        assert_eq!(
            fragments("a.b", "a,b", ComparisonPolicy::Default),
            vec![(".".to_owned(), ",".to_owned())]
        );
    }
}
