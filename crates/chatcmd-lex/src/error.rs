//! Error types for lexical analysis.
//!
//! Lexical failures are non-recoverable: the lexer aborts the current token
//! and propagates one of these values to the caller. Callers are expected to
//! surface them to the command-issuing user as "malformed command" feedback
//! rather than retry internally.

use thiserror::Error;

/// An error raised while tokenizing a chat command.
///
/// Every variant carries the reader's position (a byte offset into the
/// command text) at the point of failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    /// A character outside every recognized leading-character class: not
    /// whitespace, digit, `-`, `!`, `"`, or letter.
    #[error("unexpected character `{found}` at position {position}")]
    UnexpectedCharacter {
        /// The offending character.
        found: char,
        /// Reader position of the offending character.
        position: usize,
    },

    /// End of input was reached inside a quoted string. Quoted strings must
    /// be closed.
    #[error("unterminated quoted string at position {position}")]
    UnterminatedString {
        /// Reader position where input ran out.
        position: usize,
    },

    /// End of input was reached in the middle of a numeric literal, before
    /// any terminating character.
    #[error("unexpected end of input at position {position}")]
    UnexpectedEndOfInput {
        /// Reader position where input ran out.
        position: usize,
    },

    /// A consumed value did not have the shape the lexer had already
    /// committed to. Indicates a bug in dispatch or an unparseable numeric
    /// buffer, not ordinary bad input.
    #[error("expected {expected}, found {found} at position {position}")]
    ValueMismatch {
        /// What the lexer required at this point.
        expected: &'static str,
        /// What was actually there.
        found: String,
        /// Reader position of the mismatch.
        position: usize,
    },
}

impl LexError {
    /// Returns the reader position at the point of failure.
    pub fn position(&self) -> usize {
        match self {
            LexError::UnexpectedCharacter { position, .. }
            | LexError::UnterminatedString { position }
            | LexError::UnexpectedEndOfInput { position }
            | LexError::ValueMismatch { position, .. } => *position,
        }
    }
}

/// Result type alias for lexer operations.
pub type LexResult<T> = std::result::Result<T, LexError>;
