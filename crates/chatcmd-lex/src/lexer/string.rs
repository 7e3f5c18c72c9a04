//! String literal handling.
//!
//! Strings come in two forms. Quoted strings are delimited by `"` and may
//! contain whitespace; they must be closed before end of input. Unquoted
//! strings start at a letter and run to the next whitespace or end of input.
//! Neither form supports escaping, trimming, or case folding: the payload is
//! the exact character sequence scanned.

use crate::error::{LexError, LexResult};
use crate::reader::CharOrEof;
use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a quoted string literal.
    ///
    /// Consumes the opening `"`, accumulates characters verbatim until the
    /// closing `"` (consumed and discarded), and returns the contents.
    /// Reaching end of input inside the quotes is an error.
    pub(crate) fn lex_quoted(&mut self) -> LexResult<Token> {
        // opening quote
        self.expect_quote()?;

        let mut value = String::new();
        loop {
            match self.reader.peek(0) {
                CharOrEof::Eof => {
                    return Err(LexError::UnterminatedString {
                        position: self.reader.position(),
                    });
                },
                CharOrEof::Char('"') => break,
                CharOrEof::Char(c) => {
                    value.push(c);
                    self.reader.consume();
                },
            }
        }

        // closing quote
        self.expect_quote()?;

        Ok(Token::String(value))
    }

    /// Lexes an unquoted string literal.
    ///
    /// Accumulates characters verbatim until whitespace or end of input.
    /// The terminator is not consumed: whitespace is left for the next call
    /// to skip, end of input for the next call to report.
    pub(crate) fn lex_unquoted(&mut self) -> LexResult<Token> {
        let mut value = String::new();
        loop {
            let next = self.reader.peek(0);
            if next.is_eof() || next.is_whitespace() {
                break;
            }
            if let CharOrEof::Char(c) = next {
                value.push(c);
                self.reader.consume();
            }
        }
        Ok(Token::String(value))
    }

    /// Consumes one character that must be a `"`.
    fn expect_quote(&mut self) -> LexResult<()> {
        match self.reader.consume() {
            CharOrEof::Char('"') => Ok(()),
            CharOrEof::Char(c) => Err(LexError::ValueMismatch {
                expected: "`\"`",
                found: format!("`{c}`"),
                position: self.reader.position(),
            }),
            CharOrEof::Eof => Err(LexError::ValueMismatch {
                expected: "`\"`",
                found: "end of input".to_string(),
                position: self.reader.position(),
            }),
        }
    }
}
