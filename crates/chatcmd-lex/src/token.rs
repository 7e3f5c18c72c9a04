//! Token definitions for the chat command language.

use std::fmt;

/// The minimal classified unit produced by the lexer.
///
/// A token is constructed, returned, and owned solely by the caller; the
/// lexer keeps no token state between calls (no buffering, no pushback).
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// End of input. Emitted once the source is exhausted, and again on
    /// every further call.
    Eof,

    /// A numeric literal, e.g. `42`, `-5`, `0.3`.
    Number(f64),

    /// A string literal: the contents of a pair of double quotes, or an
    /// unquoted run of characters ending at whitespace or end of input.
    String(String),

    /// The `!` punctuation token.
    Exclamation,

    /// The `-` punctuation token. Only produced for a lone `-`; a `-`
    /// immediately followed by a digit is absorbed into a [`Token::Number`].
    Hyphen,
}

impl Token {
    /// Returns true if this is the end-of-input token.
    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Eof => write!(f, "eof"),
            Token::Number(value) => write!(f, "number {}", value),
            Token::String(value) => write!(f, "string {:?}", value),
            Token::Exclamation => write!(f, "exclamation"),
            Token::Hyphen => write!(f, "hyphen"),
        }
    }
}
