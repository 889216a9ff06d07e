//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, ExpectedTokens};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

fn position(offset: u32, line: u32, column: u32) -> Position {
    Position::new(offset, line, column, Rc::new("test.c".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        position(10, 1, 11),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert!(error.is_lex_error());
}

#[test]
fn test_error_position() {
    let error = Error::syntax([TokenKind::Semicolon], TokenKind::EOF, "EOF", position(42, 3, 7));

    assert_eq!(error.get_position().offset, 42);
    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 7);
    assert_eq!(error.to_string(), "test.c:3:7: expected `;`, found end of input");
}

#[test]
fn test_syntax_error() {
    let error = Error::syntax(
        [TokenKind::Identifier, TokenKind::Star, TokenKind::OpenParen],
        TokenKind::IntLiteral,
        "5",
        position(0, 1, 1),
    );

    assert_eq!(error.get_error_name(), "SyntaxError");
    assert!(error.is_syntax_error());
    assert!(!error.is_lex_error());

    match error.get_impl() {
        ErrorImpl::SyntaxError { expected, found, lexeme } => {
            assert_eq!(
                expected.kinds(),
                &[TokenKind::Identifier, TokenKind::OpenParen, TokenKind::Star]
            );
            assert_eq!(*found, TokenKind::IntLiteral);
            assert_eq!(lexeme, "5");
        }
        other => panic!("Expected syntax error, found {:?}", other),
    }
}

#[test]
fn test_expected_tokens_are_sorted_and_deduplicated() {
    let expected = ExpectedTokens::new([
        TokenKind::Semicolon,
        TokenKind::Identifier,
        TokenKind::Semicolon,
    ]);

    assert_eq!(expected.kinds(), &[TokenKind::Identifier, TokenKind::Semicolon]);
    assert!(expected.contains(TokenKind::Semicolon));
    assert!(!expected.contains(TokenKind::Comma));
    assert_eq!(expected.to_string(), "one of identifier, `;`");
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        position(0, 1, 1),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert!(error.is_lex_error());
}

#[test]
fn test_invalid_escape_error() {
    let error = Error::new(
        ErrorImpl::InvalidEscape {
            sequence: "\\q".to_string(),
        },
        position(0, 1, 1),
    );

    assert_eq!(error.get_error_name(), "InvalidEscape");
    assert_eq!(error.get_tip().to_string(), "Unknown escape sequence `\\q`");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        position(0, 1, 1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_missing_semicolon() {
    let error = Error::syntax([TokenKind::Semicolon], TokenKind::Identifier, "y", position(0, 1, 1));

    assert_eq!(
        error.get_tip().to_string(),
        "expected `;`, found identifier `y`, did you miss a semicolon?"
    );
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_classes() {
    let error = Error::new(ErrorImpl::UnterminatedComment, position(6, 1, 7));
    assert_eq!(error.get_error_name(), "UnterminatedComment");
    assert!(error.is_lex_error());
    assert!(!error.is_syntax_error());

    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 256 }, position(0, 1, 1));
    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert!(!error.is_lex_error());
    assert!(!error.is_syntax_error());
    assert_eq!(
        error.get_tip().to_string(),
        "expression nests deeper than 256 levels, split it up"
    );
}
