//! Error handling module for the chatcmd CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the chatcmd CLI application.
#[derive(Error, Debug)]
pub enum CliError {
    /// A chat command failed to tokenize. This is the feedback a
    /// command-issuing user sees; the lexer never retries internally.
    #[error("malformed command: {0}")]
    Malformed(#[from] chatcmd_lex::LexError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when setting up the tool itself fails.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using CliError.
pub type Result<T> = std::result::Result<T, CliError>;
