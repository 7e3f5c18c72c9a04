//! Edge case tests for chatcmd-lex.

use crate::{LexError, Lexer, Reader, Token};

/// Collects tokens until Eof or the first error.
fn lex_stream(source: &str) -> (Vec<Token>, Option<LexError>) {
    let mut lexer = Lexer::new(Reader::new(source));
    let mut tokens = Vec::new();
    loop {
        match lexer.next_token() {
            Ok(Token::Eof) => return (tokens, None),
            Ok(token) => tokens.push(token),
            Err(err) => return (tokens, Some(err)),
        }
    }
}

fn lex_all(source: &str) -> Vec<Token> {
    let (tokens, err) = lex_stream(source);
    assert_eq!(err, None);
    tokens
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_number_then_exclamation() {
    assert_eq!(
        lex_all("3! "),
        vec![Token::Number(3.0), Token::Exclamation]
    );
}

#[test]
fn test_edge_exclamation_then_negative_number() {
    assert_eq!(
        lex_all("!-3 "),
        vec![Token::Exclamation, Token::Number(-3.0)]
    );
}

#[test]
fn test_edge_double_hyphen() {
    assert_eq!(lex_all("--"), vec![Token::Hyphen, Token::Hyphen]);
}

#[test]
fn test_edge_crlf_between_tokens() {
    assert_eq!(
        lex_all("a\r\nb\r\n"),
        vec![Token::String("a".into()), Token::String("b".into())]
    );
}

#[test]
fn test_edge_huge_whitespace_run() {
    // whitespace skipping is a loop, so this cannot blow the stack
    let source = " ".repeat(1_000_000);
    assert_eq!(lex_all(&source), Vec::new());
}

#[test]
fn test_edge_long_unquoted_word() {
    let word = "a".repeat(10_000);
    assert_eq!(
        lex_all(&format!("{} ", word)),
        vec![Token::String(word)]
    );
}

#[test]
fn test_edge_quoted_holds_dispatch_characters() {
    // inside quotes, nothing is special except the closing quote
    assert_eq!(
        lex_all("\"! -5 # abc\""),
        vec![Token::String("! -5 # abc".into())]
    );
}

#[test]
fn test_edge_case_insensitive_word_start() {
    assert_eq!(
        lex_all("Spawn SPAWN spawn "),
        vec![
            Token::String("Spawn".into()),
            Token::String("SPAWN".into()),
            Token::String("spawn".into()),
        ]
    );
}

// ==================== SHARP EDGES ====================
//
// A numeric literal only ends when the scan observes a non-matching
// character. A number that runs straight into end of input is therefore an
// error, even though the digits themselves are well formed.

#[test]
fn test_sharp_bare_trailing_number() {
    let (tokens, err) = lex_stream("42");
    assert_eq!(tokens, Vec::new());
    assert_eq!(err, Some(LexError::UnexpectedEndOfInput { position: 2 }));
}

#[test]
fn test_sharp_trailing_number_after_other_tokens() {
    let (tokens, err) = lex_stream("spawn 42");
    assert_eq!(tokens, vec![Token::String("spawn".into())]);
    assert_eq!(err, Some(LexError::UnexpectedEndOfInput { position: 8 }));
}

#[test]
fn test_sharp_terminated_numbers_are_fine() {
    assert_eq!(lex_all("42 "), vec![Token::Number(42.0)]);
    assert_eq!(lex_all("42\n"), vec![Token::Number(42.0)]);
    assert_eq!(lex_all("-7\r"), vec![Token::Number(-7.0)]);
}

#[test]
fn test_sharp_interior_sign_rejected_at_parse() {
    let (tokens, err) = lex_stream("-5-2 ");
    assert_eq!(tokens, Vec::new());
    assert!(matches!(err, Some(LexError::ValueMismatch { .. })));
}

// ==================== ERROR CASES ====================

#[test]
fn test_err_unexpected_leading_characters() {
    for (source, found) in [("#", '#'), ("?", '?'), ("=", '='), ("'", '\'')] {
        let (_, err) = lex_stream(source);
        assert_eq!(
            err,
            Some(LexError::UnexpectedCharacter { found, position: 0 }),
            "source: {source:?}"
        );
    }
}

#[test]
fn test_err_position_counts_skipped_whitespace() {
    let (tokens, err) = lex_stream("  \n#");
    assert_eq!(tokens, Vec::new());
    assert_eq!(
        err,
        Some(LexError::UnexpectedCharacter {
            found: '#',
            position: 3,
        })
    );
}

#[test]
fn test_err_unterminated_quote_mid_command() {
    let (tokens, err) = lex_stream("spawn \"alpha");
    assert_eq!(tokens, vec![Token::String("spawn".into())]);
    assert_eq!(err, Some(LexError::UnterminatedString { position: 12 }));
}

// ==================== PROPERTIES ====================

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn whitespace_only_input_lexes_to_nothing(source in "[ \n\r]{0,64}") {
            let (tokens, err) = lex_stream(&source);
            prop_assert_eq!(tokens, Vec::new());
            prop_assert_eq!(err, None);
        }

        #[test]
        fn lexing_is_deterministic(source in "[ -~]{0,48}") {
            prop_assert_eq!(lex_stream(&source), lex_stream(&source));
        }

        #[test]
        fn terminated_integers_round_trip(value in -9_999_999i64..=9_999_999) {
            let source = format!("{} ", value);
            let (tokens, err) = lex_stream(&source);
            prop_assert_eq!(err, None);
            prop_assert_eq!(tokens, vec![Token::Number(value as f64)]);
        }

        #[test]
        fn quoted_payload_is_verbatim(payload in "[a-zA-Z0-9 !#%&*+,./:;<=>?@_-]{0,32}") {
            let source = format!("\"{}\"", payload);
            let (tokens, err) = lex_stream(&source);
            prop_assert_eq!(err, None);
            prop_assert_eq!(tokens, vec![Token::String(payload)]);
        }
    }
}
