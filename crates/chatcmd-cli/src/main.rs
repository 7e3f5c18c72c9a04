//! Chatcmd CLI - inspect how in-game chat commands tokenize.
//!
//! This is the main entry point for the chatcmd CLI application. It uses
//! clap for argument parsing and dispatches to the appropriate command
//! handler based on user input.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_check, run_tokenize};
use error::{CliError, Result};

/// Chatcmd - a developer tool for the chat command lexer
///
/// Chatcmd lexes chat commands the way the in-game command pipeline does,
/// so malformed input can be diagnosed outside the game.
#[derive(Parser, Debug)]
#[command(name = "chatcmd")]
#[command(author = "Chatcmd Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect how chat commands tokenize", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "CHATCMD_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, global = true, env = "CHATCMD_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the chatcmd CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream for a command
    ///
    /// Lexes the given command (or each line read from stdin) and prints
    /// one token per line, ending with the end-of-input token.
    Tokenize(TokenizeCommand),

    /// Check that a command tokenizes cleanly
    ///
    /// Lexes the given command (or each line read from stdin) and reports
    /// `ok` with a token count, or the malformed-command diagnostic a
    /// player would receive.
    Check(CheckCommand),
}

/// Arguments for the tokenize subcommand.
#[derive(Parser, Debug)]
struct TokenizeCommand {
    /// Command text to lex (default: read lines from stdin)
    text: Option<String>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Command text to check (default: read lines from stdin)
    text: Option<String>,
}

/// Main entry point for the chatcmd CLI.
///
/// Parses command-line arguments, initializes logging, and dispatches to
/// the appropriate command handler.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.no_color)?;

    // Execute the selected command
    execute_command(cli.command)?;

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CliError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Execute the selected command.
fn execute_command(command: Commands) -> Result<()> {
    match command {
        Commands::Tokenize(args) => run_tokenize(args.text.as_deref()),
        Commands::Check(args) => run_check(args.text.as_deref()),
    }
}
