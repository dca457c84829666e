use super::spans_to_fragments;
use crate::{
    comparison::ComparisonError,
    diff::diff_spans,
    fragment::DiffFragment,
    policy::ComparisonPolicy,
    progress::Cancellation,
    tokenizer::{char_tokenizer::char_tokenizer, token::Token},
};

/// Character-granularity comparison.
pub(crate) fn by_char(
    text1: &str,
    text2: &str,
    policy: ComparisonPolicy,
    cancellation: &dyn Cancellation,
) -> Result<Vec<DiffFragment>, ComparisonError> {
    let tokens1 = char_tokenizer(text1);
    let tokens2 = char_tokenizer(text2);

    let eq = |a: &Token<'_>, b: &Token<'_>| policy.units_equal(a, b);
    let spans = diff_spans(&tokens1, &tokens2, &eq, cancellation)?;

    Ok(spans_to_fragments(
        &spans, &tokens1, &tokens2, text1, text2, policy,
    ))
}
