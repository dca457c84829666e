#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The unit class a tokenizer assigned to a token.
///
/// Word runs, whitespace runs and punctuation only appear at word
/// granularity; line tokens always carry `Line` and character tokens are
/// classified individually.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A maximal run of alphanumeric characters and underscores.
    Word,
    /// A maximal run of whitespace characters.
    Whitespace,
    /// A single character that is neither a word character nor whitespace.
    Punctuation,
    /// A physical line, including its trailing newline if one exists.
    Line,
}

/// A comparable unit of text produced by a tokenizer.
///
/// A token borrows its content from the input and remembers where in the
/// input it came from, so any diff computed over tokens can be reported in
/// the original byte coordinates. No normalisation happens here; the
/// `ComparisonPolicy` decides at comparison time how two tokens are matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    text: &'a str,
    offset: usize,
    kind: TokenKind,
}

impl<'a> Token<'a> {
    #[must_use]
    pub fn new(text: &'a str, offset: usize, kind: TokenKind) -> Self {
        Token { text, offset, kind }
    }

    #[must_use]
    pub fn text(&self) -> &'a str { self.text }

    /// Byte offset of the token's first character in the source text.
    #[must_use]
    pub fn start(&self) -> usize { self.offset }

    /// Byte offset one past the token's last character in the source text.
    #[must_use]
    pub fn end(&self) -> usize { self.offset + self.text.len() }

    #[must_use]
    pub fn kind(&self) -> TokenKind { self.kind }

    /// Whether the token consists entirely of whitespace. An empty token
    /// counts as whitespace.
    #[must_use]
    pub fn is_whitespace(&self) -> bool { self.text.chars().all(char::is_whitespace) }
}
