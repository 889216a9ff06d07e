use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Builds the syntax error raised when `found` does not match any of
    /// the `expected` token kinds.
    pub fn syntax(
        expected: impl IntoIterator<Item = TokenKind>,
        found: TokenKind,
        lexeme: &str,
        position: Position,
    ) -> Self {
        Error::new(
            ErrorImpl::SyntaxError {
                expected: ExpectedTokens::new(expected),
                found,
                lexeme: lexeme.to_string(),
            },
            position,
        )
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Malformed literals and unknown characters are lexical errors, even
    /// when a literal token only gets decoded by the parser.
    pub fn is_lex_error(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::UnrecognisedToken { .. }
                | ErrorImpl::UnterminatedComment
                | ErrorImpl::NumberParseError { .. }
                | ErrorImpl::InvalidEscape { .. }
                | ErrorImpl::InvalidCharLiteral { .. }
        )
    }

    pub fn is_syntax_error(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::SyntaxError { .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::InvalidEscape { .. } => "InvalidEscape",
            ErrorImpl::InvalidCharLiteral { .. } => "InvalidCharLiteral",
            ErrorImpl::SyntaxError { .. } => "SyntaxError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("block comment is missing its closing `*/`"))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::InvalidEscape { sequence } => {
                ErrorTip::Suggestion(format!("Unknown escape sequence `{}`", sequence))
            }
            ErrorImpl::InvalidCharLiteral { token } => ErrorTip::Suggestion(format!(
                "Invalid char literal: `{}`, it must hold exactly one character",
                token
            )),
            ErrorImpl::SyntaxError { expected, found, lexeme } => {
                let found = match found {
                    TokenKind::Identifier
                    | TokenKind::IntLiteral
                    | TokenKind::FloatLiteral
                    | TokenKind::CharLiteral => format!("{} `{}`", found, lexeme),
                    _ => found.to_string(),
                };
                if expected.contains(TokenKind::Semicolon) && expected.kinds().len() == 1 {
                    ErrorTip::Suggestion(format!("expected `;`, found {}, did you miss a semicolon?", found))
                } else {
                    ErrorTip::Suggestion(format!("expected {}, found {}", expected, found))
                }
            }
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "expression nests deeper than {} levels, split it up",
                limit
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.position, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// A sorted, duplicate free set of token kinds a parser routine would have
/// accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedTokens(Vec<TokenKind>);

impl ExpectedTokens {
    pub fn new(kinds: impl IntoIterator<Item = TokenKind>) -> Self {
        let mut kinds: Vec<TokenKind> = kinds.into_iter().collect();
        kinds.sort();
        kinds.dedup();
        ExpectedTokens(kinds)
    }

    pub fn contains(&self, kind: TokenKind) -> bool {
        self.0.binary_search(&kind).is_ok()
    }

    pub fn kinds(&self) -> &[TokenKind] {
        &self.0
    }
}

impl Display for ExpectedTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.as_slice() {
            [] => write!(f, "nothing"),
            [single] => write!(f, "{}", single),
            kinds => {
                write!(f, "one of ")?;
                for (i, kind) in kinds.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", kind)?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("invalid escape sequence: {sequence:?}")]
    InvalidEscape { sequence: String },
    #[error("invalid char literal: {token:?}")]
    InvalidCharLiteral { token: String },
    #[error("expected {expected}, found {found}")]
    SyntaxError {
        expected: ExpectedTokens,
        found: TokenKind,
        lexeme: String,
    },
    #[error("expression nested more than {limit} levels deep")]
    NestingTooDeep { limit: usize },
}
