use super::token::{Token, TokenKind};

/// Classifies a single character the way the word tokenizer does: letters,
/// digits and underscores form words, whitespace forms whitespace runs and
/// everything else is punctuation.
#[must_use]
pub(crate) fn classify(c: char) -> TokenKind {
    if c.is_whitespace() {
        TokenKind::Whitespace
    } else if c.is_alphanumeric() || c == '_' {
        TokenKind::Word
    } else {
        TokenKind::Punctuation
    }
}

/// Splits text into maximal word runs, maximal whitespace runs and single
/// punctuation characters. Punctuation is never merged with an adjacent word
/// run, so `"a.b"` yields three tokens rather than one.
///
/// ## Example
///
/// ```not_rust
/// "Hi there!" -> ["Hi", " ", "there", "!"]
/// ```
#[must_use]
pub fn word_tokenizer(text: &str) -> Vec<Token<'_>> {
    let mut result = Vec::new();

    let mut run_start = 0;
    let mut run_kind = None;

    for (i, c) in text.char_indices() {
        let kind = classify(c);
        // Punctuation tokens are always a single character long.
        if run_kind != Some(kind) || kind == TokenKind::Punctuation {
            if let Some(previous) = run_kind {
                result.push(Token::new(&text[run_start..i], run_start, previous));
            }
            run_start = i;
            run_kind = Some(kind);
        }
    }

    if let Some(kind) = run_kind {
        result.push(Token::new(&text[run_start..], run_start, kind));
    }

    result
}

#[cfg(test)]
mod tests {
    use insta::assert_debug_snapshot;
    use pretty_assertions::assert_eq;

    use super::*;

    fn texts<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
        tokens.iter().map(Token::text).collect()
    }

    #[test]
    fn test_empty() {
        assert_eq!(word_tokenizer(""), vec![]);
    }

    #[test]
    fn test_words_and_whitespace() {
        assert_debug_snapshot!(
            texts(&word_tokenizer("Hi there!")),
            @r#"
        [
            "Hi",
            " ",
            "there",
            "!",
        ]
        "#
        );
    }

    #[test]
    fn test_punctuation_is_never_merged() {
        assert_debug_snapshot!(
            texts(&word_tokenizer("a.b, c..")),
            @r#"
        [
            "a",
            ".",
            "b",
            ",",
            " ",
            "c",
            ".",
            ".",
        ]
        "#
        );
    }

    #[test]
    fn test_whitespace_runs_are_maximal() {
        assert_eq!(texts(&word_tokenizer(" \t\nx  ")), vec![" \t\n", "x", "  "]);
    }

    #[test]
    fn test_underscores_and_digits_are_word_characters() {
        assert_eq!(texts(&word_tokenizer("foo_bar2 baz")), vec![
            "foo_bar2",
            " ",
            "baz"
        ]);
    }

    #[test]
    fn test_reconstruction() {
        let text = " hello, \nwhere are you?";
        let concatenated: String = word_tokenizer(text).iter().map(Token::text).collect();
        assert_eq!(concatenated, text);
    }
}
