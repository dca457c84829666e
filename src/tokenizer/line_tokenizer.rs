use super::token::{Token, TokenKind};

/// Splits text into physical lines. A line's content includes its trailing
/// newline, except possibly for the final line; text ending in a newline
/// yields no trailing empty token.
///
/// ## Example
///
/// ```not_rust
/// "Hello\nWorld!" -> ["Hello\n", "World!"]
/// "Hello\nWorld!\n" -> ["Hello\n", "World!\n"]
/// ```
#[must_use]
pub fn line_tokenizer(text: &str) -> Vec<Token<'_>> {
    let mut result = Vec::new();

    let mut line_start = 0;
    for (i, byte) in text.bytes().enumerate() {
        if byte == b'\n' {
            result.push(Token::new(
                &text[line_start..=i],
                line_start,
                TokenKind::Line,
            ));
            line_start = i + 1;
        }
    }

    if line_start < text.len() {
        result.push(Token::new(&text[line_start..], line_start, TokenKind::Line));
    }

    result
}
