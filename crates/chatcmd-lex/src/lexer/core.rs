//! Core lexer implementation.
//!
//! This module contains the main [`Lexer`] struct, the token dispatch, and
//! the whitespace handling.

use crate::error::{LexError, LexResult};
use crate::reader::{CharOrEof, Reader};
use crate::token::Token;

/// Lexer for the chat command language.
///
/// The lexer turns raw chat text into a stream of tokens, one per call to
/// [`Lexer::next_token`]. It keeps no state between calls beyond the reader
/// it owns: every call consumes exactly the characters of the token it
/// returns, plus any leading whitespace.
///
/// # Example
///
/// ```
/// use chatcmd_lex::{Lexer, Reader, Token};
///
/// let mut lexer = Lexer::new(Reader::new("spawn 2 tanks\n"));
/// assert_eq!(lexer.next_token().unwrap(), Token::String("spawn".into()));
/// assert_eq!(lexer.next_token().unwrap(), Token::Number(2.0));
/// assert_eq!(lexer.next_token().unwrap(), Token::String("tanks".into()));
/// assert_eq!(lexer.next_token().unwrap(), Token::Eof);
/// ```
pub struct Lexer<'a> {
    /// The character source. Owned by this lexer for its entire lifetime.
    pub(crate) reader: Reader<'a>,

    /// Set once iteration has yielded `Eof` or an error.
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over the given reader.
    pub fn new(reader: Reader<'a>) -> Self {
        Self {
            reader,
            done: false,
        }
    }

    /// Returns the next token from the command text.
    ///
    /// This is the only entry point for tokenization. Leading whitespace is
    /// consumed silently, then the lexer dispatches on the next character.
    /// Once the source is exhausted every further call returns
    /// [`Token::Eof`].
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if the next character starts no recognized
    /// token, or if input ends inside a quoted string or numeric literal.
    /// Errors are terminal: the lexer does not resynchronize.
    pub fn next_token(&mut self) -> LexResult<Token> {
        loop {
            let next = match self.reader.peek(0) {
                CharOrEof::Eof => {
                    self.reader.consume();
                    return Ok(Token::Eof);
                },
                c if c.is_whitespace() => {
                    self.skip_whitespace();
                    continue;
                },
                CharOrEof::Char(c) => c,
            };

            return match next {
                // numbers, including a leading sign
                '-' if self.reader.peek(1).is_digit() => self.lex_number(),
                c if c.is_ascii_digit() => self.lex_number(),
                '!' => {
                    self.reader.consume();
                    Ok(Token::Exclamation)
                },
                '-' => {
                    self.reader.consume();
                    Ok(Token::Hyphen)
                },
                '"' => self.lex_quoted(),
                c if c.is_ascii_alphabetic() => self.lex_unquoted(),
                found => Err(LexError::UnexpectedCharacter {
                    found,
                    position: self.reader.position(),
                }),
            };
        }
    }

    /// Consumes contiguous whitespace. Never visible as a token.
    fn skip_whitespace(&mut self) {
        while self.reader.peek(0).is_whitespace() {
            self.reader.consume();
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = LexResult<Token>;

    /// Yields tokens until [`Token::Eof`], which ends iteration. Because
    /// lexical errors are terminal, the iterator fuses after yielding one.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(Token::Eof) => {
                self.done = true;
                None
            },
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.done = true;
                Some(Err(err))
            },
        }
    }
}
