#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tokenizer::token::Token;

/// Whitespace-handling mode. A policy alters how two units are matched
/// without altering the alignment algorithm itself; the comparison entry
/// points pass the relevant policy predicate into the engine.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComparisonPolicy {
    /// Exact content equality.
    #[default]
    Default,
    /// Leading and trailing whitespace on each line is ignored. Trimming is
    /// a line-level concept: at word and character granularity this policy
    /// behaves like [`ComparisonPolicy::Default`].
    TrimWhitespaces,
    /// All whitespace is ignored: whitespace-only units match each other and
    /// line content is compared with its whitespace dropped.
    IgnoreWhitespaces,
}

impl ComparisonPolicy {
    /// Equality of two word- or character-granularity units.
    #[must_use]
    pub fn units_equal(self, a: &Token<'_>, b: &Token<'_>) -> bool {
        match self {
            ComparisonPolicy::Default | ComparisonPolicy::TrimWhitespaces => a.text() == b.text(),
            ComparisonPolicy::IgnoreWhitespaces => {
                a.text() == b.text() || (a.is_whitespace() && b.is_whitespace())
            }
        }
    }

    /// Equality of two lines, given their full content (including any
    /// trailing newline).
    #[must_use]
    pub fn lines_equal(self, a: &str, b: &str) -> bool {
        match self {
            ComparisonPolicy::Default => a == b,
            ComparisonPolicy::TrimWhitespaces => a.trim() == b.trim(),
            ComparisonPolicy::IgnoreWhitespaces => {
                let significant = |c: &char| !c.is_whitespace();
                a.chars().filter(significant).eq(b.chars().filter(significant))
            }
        }
    }

    /// Policy-aware equality of two whole texts, usable as a fast-path check
    /// before computing a full diff.
    #[must_use]
    pub fn texts_equal(self, text1: &str, text2: &str) -> bool {
        match self {
            ComparisonPolicy::Default => text1 == text2,
            ComparisonPolicy::TrimWhitespaces => {
                text1.lines().map(str::trim).eq(text2.lines().map(str::trim))
            }
            ComparisonPolicy::IgnoreWhitespaces => {
                let significant = |c: &char| !c.is_whitespace();
                text1
                    .chars()
                    .filter(significant)
                    .eq(text2.chars().filter(significant))
            }
        }
    }
}
