use crate::lang::source_buffer::{SourceBuffer, SourceLocation};
use std::fmt::{self, Debug, Display, Formatter};

/// A token is a maximal run of non-whitespace characters.  Whether it names a word, is a number
/// literal, or is part of a string literal is decided by whoever consumes it.
///
/// The token also holds the location in the original source code where it was found.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    location: SourceLocation,
    text: String,
}

/// Make sure that the tokens are nicely printable.
impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Include the original location for debugging purposes.
impl Debug for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.text)
    }
}

impl Token {
    pub fn new(location: SourceLocation, text: String) -> Token {
        Token { location, text }
    }

    /// Get the token's location in the original source text.
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    /// The raw text of the token.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Is this token exactly the given text?
    pub fn is(&self, text: &str) -> bool {
        self.text == text
    }

    /// Attempt to read the token as a base 10 signed integer literal.
    pub fn number(&self) -> Option<i64> {
        parse_number(&self.text)
    }
}

/// Parse a base 10 signed integer.  An optional leading `+` or `-` is accepted, anything else that
/// isn't a digit, or a value that doesn't fit in 64 bits, is not a number.
pub fn parse_number(text: &str) -> Option<i64> {
    text.parse::<i64>().ok()
}

/// Skip over whitespace in the text.  Stopping only at either the end of the buffer or the next
/// non-whitespace character.
fn skip_whitespace(buffer: &mut SourceBuffer) {
    while let Some(next) = buffer.peek_next() {
        if !next.is_whitespace() {
            break;
        }

        let _ = buffer.next_char();
    }
}

/// Pull the next token out of the buffer.  Returns None once the buffer only holds whitespace.
pub fn next_token(buffer: &mut SourceBuffer) -> Option<Token> {
    skip_whitespace(buffer);

    let location = buffer.location().clone();
    let mut text = String::new();

    while let Some(next) = buffer.peek_next() {
        if next.is_whitespace() {
            break;
        }

        text.push(next);
        let _ = buffer.next_char();
    }

    if text.is_empty() {
        None
    } else {
        Some(Token::new(location, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize_from_source(path: &str, source: &str) -> Vec<Token> {
        let mut buffer = SourceBuffer::new(path, source.into());
        let mut tokens = Vec::new();

        while let Some(token) = next_token(&mut buffer) {
            tokens.push(token);
        }

        tokens
    }

    fn texts(source: &str) -> Vec<String> {
        tokenize_from_source("<test>", source)
            .iter()
            .map(|token| token.text().to_string())
            .collect()
    }

    #[test]
    fn splits_on_any_whitespace() {
        assert_eq!(texts("  1 2\t+\n.\r\n"), vec!["1", "2", "+", "."]);
        assert!(texts(" \n\t ").is_empty());
    }

    #[test]
    fn quotes_stay_glued_to_their_words() {
        assert_eq!(texts(".\" Hello World\""), vec![".\"", "Hello", "World\""]);
    }

    #[test]
    fn tokens_remember_where_they_started() {
        let tokens = tokenize_from_source("<test>", "1\n  dup");

        assert_eq!(tokens[1].location().line(), 2);
        assert_eq!(tokens[1].location().column(), 3);
    }

    #[test]
    fn number_literals() {
        assert_eq!(parse_number("42"), Some(42));
        assert_eq!(parse_number("-7"), Some(-7));
        assert_eq!(parse_number("+7"), Some(7));
        assert_eq!(parse_number("4x"), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("99999999999999999999"), None);
    }
}
