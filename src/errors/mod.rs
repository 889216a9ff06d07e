//! Error types and error handling for the parser.
//!
//! - Error structures with source position information
//! - Lexical error variants raised by the scanner
//! - The syntax error raised by the parser, carrying the expected token set
//! - Error formatting and display helpers

pub mod errors;

#[cfg(test)]
mod tests;
