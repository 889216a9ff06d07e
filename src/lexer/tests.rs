//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer, float and char literals
//! - Operators and punctuation (maximal munch)
//! - Comments and positions
//! - Lexical error cases

use super::{
    lexer::{decode_char_literal, decode_float_literal, decode_int_literal, tokenize},
    tokens::TokenKind,
};
use crate::errors::errors::ErrorImpl;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.c".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "const int float char double void return".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Const);
    assert_eq!(tokens[1].kind, TokenKind::Int);
    assert_eq!(tokens[2].kind, TokenKind::Float);
    assert_eq!(tokens[3].kind, TokenKind::Char);
    assert_eq!(tokens[4].kind, TokenKind::Double);
    assert_eq!(tokens[5].kind, TokenKind::Void);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore integer constant".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "_underscore");
    // keywords only match whole words
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "integer");
    assert_eq!(tokens[5].kind, TokenKind::Identifier);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 0x1F 1e10 .5 2.".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::FloatLiteral);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[3].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[3].value, "0x1F");
    assert_eq!(tokens[4].kind, TokenKind::FloatLiteral);
    assert_eq!(tokens[5].kind, TokenKind::FloatLiteral);
    assert_eq!(tokens[6].kind, TokenKind::FloatLiteral);
    assert_eq!(tokens[6].value, "2.");
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_chars() {
    let source = r"'a' '\n' '\'' '\\'".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::CharLiteral);
    assert_eq!(tokens[0].value, "'a'");
    assert_eq!(tokens[1].value, r"'\n'");
    assert_eq!(tokens[2].value, r"'\''");
    assert_eq!(tokens[3].value, r"'\\'");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / % << >> < > <= >= == != & ^ | && || ! ~ ++ -- ="),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::ShiftLeft,
            TokenKind::ShiftRight,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Ampersand,
            TokenKind::Caret,
            TokenKind::Pipe,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Not,
            TokenKind::Tilde,
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
            TokenKind::Assignment,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } ; ,"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_maximal_munch() {
    assert_eq!(
        kinds("x+++y"),
        vec![
            TokenKind::Identifier,
            TokenKind::PlusPlus,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
    assert_eq!(
        kinds("a&&&b"),
        vec![
            TokenKind::Identifier,
            TokenKind::And,
            TokenKind::Ampersand,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let source = "int x; // trailing\n/* block\n comment */ x = 1;";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Int,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::IntLiteral,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_unterminated_block_comment() {
    let error = tokenize("x = a /* b;".to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnterminatedComment");
    assert!(error.is_lex_error());
    assert_eq!(error.get_position().column, 7);

    let error = tokenize("/* one */ x = 1; /* two\n".to_string(), None).unwrap_err();
    assert_eq!(error.get_error_name(), "UnterminatedComment");
    assert_eq!(error.get_position().column, 18);

    // `*/` on its own is just two operators
    assert_eq!(
        kinds("a */ b"),
        vec![
            TokenKind::Identifier,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_token_positions() {
    let source = "int x;\n  x = 'a';".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].span.start.line, 1);
    assert_eq!(tokens[0].span.start.column, 1);
    assert_eq!(tokens[1].span.start.column, 5);
    assert_eq!(tokens[3].span.start.line, 2);
    assert_eq!(tokens[3].span.start.column, 3);
    assert_eq!(tokens[3].span.start.offset, 9);
    assert_eq!(tokens[5].span.start.column, 7);
    assert_eq!(tokens[5].span.end.column, 10);

    let eof = tokens.last().unwrap();
    assert_eq!(eof.kind, TokenKind::EOF);
    assert_eq!(eof.span.start.line, 2);
    assert_eq!(eof.span.start.column, 11);
    assert_eq!(&*eof.span.start.file, "test.c");
}

#[test]
fn test_tokenize_empty() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("  \n\t // nothing here\n"), vec![TokenKind::EOF]);
}

#[test]
fn test_unrecognised_character() {
    let error = tokenize("int x = 1 @ 2;".to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().column, 11);
    assert_eq!(&*error.get_position().file, "shell");
}

#[test]
fn test_integer_overflow_is_lex_error() {
    let error = tokenize("x = 99999999999999999999;".to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert!(error.is_lex_error());
    assert_eq!(error.get_position().column, 5);
}

#[test]
fn test_invalid_char_literals() {
    let error = tokenize(r"c = '\q';".to_string(), None).unwrap_err();
    assert_eq!(error.get_error_name(), "InvalidEscape");

    let error = tokenize("c = 'ab';".to_string(), None).unwrap_err();
    assert_eq!(error.get_error_name(), "InvalidCharLiteral");

    let error = tokenize("c = '';".to_string(), None).unwrap_err();
    assert_eq!(error.get_error_name(), "InvalidCharLiteral");

    let error = tokenize("c = 'a".to_string(), None).unwrap_err();
    assert_eq!(error.get_error_name(), "InvalidCharLiteral");
}

#[test]
fn test_decode_literals() {
    assert_eq!(decode_int_literal("42").unwrap(), 42);
    assert_eq!(decode_int_literal("0xff").unwrap(), 255);
    assert!(matches!(
        decode_int_literal("9223372036854775808"),
        Err(ErrorImpl::NumberParseError { .. })
    ));

    assert_eq!(decode_float_literal("2.5").unwrap(), 2.5);
    assert!(decode_float_literal("1e999").is_err());

    assert_eq!(decode_char_literal("'x'").unwrap(), 'x');
    assert_eq!(decode_char_literal(r"'\0'").unwrap(), '\0');
    assert_eq!(decode_char_literal(r"'\''").unwrap(), '\'');
    assert!(matches!(
        decode_char_literal(r"'\z'"),
        Err(ErrorImpl::InvalidEscape { .. })
    ));
}
