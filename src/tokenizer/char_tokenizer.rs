use super::{token::Token, word_tokenizer::classify};

/// Splits text into UTF-8 characters, one token per `char`.
///
/// ## Example
///
/// ```not_rust
/// "Hey!" -> ["H", "e", "y", "!"]
/// ```
#[must_use]
pub fn char_tokenizer(text: &str) -> Vec<Token<'_>> {
    text.char_indices()
        .map(|(i, c)| Token::new(&text[i..i + c.len_utf8()], i, classify(c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use insta::assert_debug_snapshot;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tokenizer::token::TokenKind;

    #[test]
    fn test_empty() {
        assert_eq!(char_tokenizer(""), vec![]);
    }

    #[test]
    fn test_texts() {
        assert_debug_snapshot!(
            char_tokenizer("a b!").iter().map(Token::text).collect::<Vec<_>>(),
            @r#"
        [
            "a",
            " ",
            "b",
            "!",
        ]
        "#
        );
    }

    #[test]
    fn test_multi_byte_characters() {
        let tokens = char_tokenizer("aéb");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].text(), "é");
        assert_eq!(tokens[1].start(), 1);
        assert_eq!(tokens[2].start(), 3);
    }

    #[test]
    fn test_kinds() {
        let tokens = char_tokenizer("a !");
        assert_eq!(tokens[0].kind(), TokenKind::Word);
        assert_eq!(tokens[1].kind(), TokenKind::Whitespace);
        assert_eq!(tokens[2].kind(), TokenKind::Punctuation);
    }
}
