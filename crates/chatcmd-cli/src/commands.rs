//! Command implementations for the chatcmd CLI.

use std::io::{self, BufRead};

use chatcmd_lex::{Lexer, Reader};
use tracing::debug;

use crate::error::Result;

/// Lexes each command and prints its token stream, one token per line.
pub fn run_tokenize(text: Option<&str>) -> Result<()> {
    for_each_command(text, |source| {
        debug!("tokenizing {} bytes", source.len());
        let mut lexer = Lexer::new(Reader::new(source));
        loop {
            let token = lexer.next_token()?;
            let done = token.is_eof();
            println!("{token}");
            if done {
                break;
            }
        }
        Ok(())
    })
}

/// Lexes each command and reports whether it is well formed.
pub fn run_check(text: Option<&str>) -> Result<()> {
    for_each_command(text, |source| {
        let mut lexer = Lexer::new(Reader::new(source));
        let mut count = 0usize;
        loop {
            if lexer.next_token()?.is_eof() {
                break;
            }
            count += 1;
        }
        debug!("command checked out at {count} tokens");
        println!("ok ({count} tokens)");
        Ok(())
    })
}

/// Runs `f` over the given command text, or over each stdin line when no
/// text was given.
fn for_each_command<F>(text: Option<&str>, mut f: F) -> Result<()>
where
    F: FnMut(&str) -> Result<()>,
{
    match text {
        Some(text) => f(&terminated(text)),
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                f(&terminated(&line?))?;
            }
            Ok(())
        },
    }
}

/// Restores the newline a chat message arrives with. The lexer requires a
/// terminator after a trailing number, and shell arguments and `lines()`
/// both strip it.
fn terminated(text: &str) -> String {
    let mut source = text.to_string();
    if !source.ends_with('\n') {
        source.push('\n');
    }
    source
}
