//! Numeric literal handling.
//!
//! A numeric literal is scanned over the character class `{0-9, '.', '-'}`
//! and then parsed as a decimal `f64`. The class admits interior hyphens and
//! periods; the scan does not validate numeric grammar, the parse does.

use crate::error::{LexError, LexResult};
use crate::reader::CharOrEof;
use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a numeric literal, including a leading sign and decimals.
    ///
    /// The scan only stops when it observes a non-matching character; end of
    /// input mid-scan means the literal is structurally incomplete and is an
    /// error, so a bare trailing number with nothing at all after it is
    /// rejected.
    pub(crate) fn lex_number(&mut self) -> LexResult<Token> {
        let mut literal = String::new();

        loop {
            match self.reader.peek(0) {
                CharOrEof::Eof => {
                    return Err(LexError::UnexpectedEndOfInput {
                        position: self.reader.position(),
                    });
                },
                CharOrEof::Char(c) if is_number_char(c) => {
                    literal.push(c);
                    self.reader.consume();
                },
                _ => break,
            }
        }

        match literal.parse::<f64>() {
            Ok(value) => Ok(Token::Number(value)),
            Err(_) => Err(LexError::ValueMismatch {
                expected: "a numeric literal",
                found: format!("`{literal}`"),
                position: self.reader.position(),
            }),
        }
    }
}

/// The characters a numeric literal is scanned over.
fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '-'
}
