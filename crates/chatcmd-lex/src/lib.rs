//! chatcmd-lex - Lexical Analyzer for the chatcmd Command Language
//!
//! This crate provides the lexer (tokenizer) for chat commands typed by
//! players in game. It transforms a raw chat message into a stream of tokens
//! that can be consumed by the command parser.
//!
//! # Overview
//!
//! Chat commands are a loosely-specified, human-typed micro-language: quoted
//! and unquoted strings, signed decimal numbers, and two punctuation marks,
//! separated by arbitrary whitespace. The lexer produces exactly one token
//! per call to [`Lexer::next_token`], consuming the characters that make up
//! that token plus any leading whitespace, and reports everything else as a
//! [`LexError`] carrying the position of the failure.
//!
//! # Example Usage
//!
//! ```
//! use chatcmd_lex::{Lexer, Reader, Token};
//!
//! let mut lexer = Lexer::new(Reader::new("!spawn 2 \"alpha group\"\n"));
//!
//! assert_eq!(lexer.next_token().unwrap(), Token::Exclamation);
//! assert_eq!(lexer.next_token().unwrap(), Token::String("spawn".into()));
//! assert_eq!(lexer.next_token().unwrap(), Token::Number(2.0));
//! assert_eq!(lexer.next_token().unwrap(), Token::String("alpha group".into()));
//! assert_eq!(lexer.next_token().unwrap(), Token::Eof);
//! ```
//!
//! The lexer also implements [`Iterator`]:
//!
//! ```
//! use chatcmd_lex::{Lexer, Reader, Token};
//!
//! let lexer = Lexer::new(Reader::new("destroy\n"));
//! let tokens: Result<Vec<Token>, _> = lexer.collect();
//! assert_eq!(tokens.unwrap(), vec![Token::String("destroy".into())]);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Main lexer implementation
//! - [`reader`] - Character reader with bounded lookahead
//! - [`error`] - Lexical error types
//!
//! # Token Categories
//!
//! - **Numbers**: `42`, `-5`, `0.3` — signed decimals, one numeric type.
//! - **Strings**: `"alpha group"` (quoted, must be closed) or `tanks`
//!   (unquoted, ends at whitespace or end of input).
//! - **Punctuation**: `!` and a lone `-`.
//! - **Eof**: end-of-input marker, repeated on every call past the end.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod lexer;
pub mod reader;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use reader::{CharOrEof, Reader};
pub use token::Token;
