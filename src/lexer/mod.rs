//! Lexical analysis module.
//!
//! The scanner turns source text into the classified token stream the
//! parser consumes. It handles:
//!
//! - Tokenization of source code using an anchored regex pattern table
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line/column tracking for error reporting
//! - Comments and whitespace handling
//! - Validation of numeric and character literals

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
