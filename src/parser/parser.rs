//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the top-level driver.
//! Expressions are parsed by precedence climbing over the static table in
//! `lookups`, everything else by recursive descent.
//!
//! The parser maintains lookup tables for:
//! - Statement handlers, keyed by the token opening the statement
//! - NUD (null denotation) handlers for tokens that start an expression

use std::{collections::HashMap, rc::Rc};

use log::{debug, info};

use crate::{
    ast::{ast::Program, expressions::Expr},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    expr::parse_expr,
    lookups::{
        create_token_lookups, BindingPower, NUDHandler, NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Deepest chain of nested unary, cast and parenthesized expressions.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// The parser owns its token stream exclusively and only ever moves the
/// cursor forward. The stream always ends in an EOF token, and the cursor
/// never moves past it.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Set while parsing a function body; enables `return`
    in_function: bool,
    /// Unary expressions currently open on the call stack
    depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// An EOF token is appended when the stream does not already end in one.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens.last().map_or_else(
                || Position::new(0, 1, 1, Rc::clone(&file)),
                |token| token.span.end.clone(),
            );
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: Span {
                    start: end.clone(),
                    end,
                },
            });
        }

        Parser {
            tokens,
            pos: 0,
            file,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            in_function: false,
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the kind of the token `n` places ahead, EOF past the end.
    pub fn peek_kind(&self, n: usize) -> TokenKind {
        self.tokens
            .get(self.pos + n)
            .map_or(TokenKind::EOF, |token| token.kind)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> &Token {
        let current = self.pos;
        if self.tokens[current].kind != TokenKind::EOF {
            self.pos += 1;
        }
        &self.tokens[current]
    }

    /// Expects a token of the specified kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise a syntax
    /// error naming `expected_kind`.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(self.unexpected([expected_kind]));
        }
        Ok(self.advance().clone())
    }

    /// Builds a syntax error for the current token.
    pub fn unexpected(&self, expected: impl IntoIterator<Item = TokenKind>) -> Error {
        let token = self.current_token();
        let error = Error::syntax(expected, token.kind, &token.value, token.span.start.clone());
        debug!("syntax error at {}: {}", token.span.start, error.get_impl());
        error
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Tokens that can start an expression.
    pub fn expression_starts(&self) -> Vec<TokenKind> {
        self.nud_lookup.keys().copied().collect()
    }

    /// Tokens that can start a statement here. `return` only opens one inside
    /// a function body, `void` only outside it.
    pub fn statement_starts(&self) -> Vec<TokenKind> {
        self.nud_lookup
            .keys()
            .chain(self.stmt_lookup.keys())
            .copied()
            .filter(|kind| match kind {
                TokenKind::Return => self.in_function,
                TokenKind::Void => !self.in_function,
                _ => true,
            })
            .collect()
    }

    /// Opens one level of expression nesting, failing past
    /// [`MAX_NESTING_DEPTH`] so that the recursion cannot exhaust the stack.
    pub fn enter_nested(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            debug!("nesting limit reached at {}", self.get_position());
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn leave_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn in_function(&self) -> bool {
        self.in_function
    }

    pub fn set_in_function(&mut self, in_function: bool) {
        self.in_function = in_function;
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }
}

fn new_parser(tokens: Vec<Token>, file: Rc<String>) -> Parser {
    let mut parser = Parser::new(tokens, file);
    create_token_lookups(&mut parser);
    parser
}

/// Parses a stream of tokens into a [`Program`].
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables, and parses statements until EOF. The
/// first error aborts the parse.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Program, Error> {
    let mut parser = new_parser(tokens, file);
    info!("parsing {} ({} tokens)", parser.file, parser.tokens.len());

    let program = parse_program(&mut parser)?;

    info!("parsed {} top-level statements", program.len());
    Ok(program)
}

/// Parses statements until EOF. Empty input is rejected.
pub fn parse_program(parser: &mut Parser) -> Result<Program, Error> {
    if !parser.has_tokens() {
        return Err(parser.unexpected(parser.statement_starts()));
    }

    let start = parser.get_position();
    let mut body = vec![];

    while parser.has_tokens() {
        body.push(parse_stmt(parser)?);
    }

    Ok(Program {
        body,
        span: Span {
            start,
            end: parser.get_position(),
        },
    })
}

/// Parses a single expression that must span the whole token stream.
pub fn parse_expression(tokens: Vec<Token>, file: Rc<String>) -> Result<Expr, Error> {
    let mut parser = new_parser(tokens, file);

    let expr = parse_expr(&mut parser, BindingPower::Default)?;
    parser.expect(TokenKind::EOF)?;

    Ok(expr)
}
