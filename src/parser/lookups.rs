use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::{expressions::{BinaryOp, Expr}, statements::Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Precedence levels, loosest first. Every binary level is left-associative.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum BindingPower {
    Default,
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
    Unary,
}

impl BindingPower {
    /// The next tighter level. Right operands are parsed at this level so
    /// that equal-precedence operators fold to the left.
    pub fn next(self) -> BindingPower {
        match self {
            BindingPower::Default => BindingPower::LogicalOr,
            BindingPower::LogicalOr => BindingPower::LogicalAnd,
            BindingPower::LogicalAnd => BindingPower::BitwiseOr,
            BindingPower::BitwiseOr => BindingPower::BitwiseXor,
            BindingPower::BitwiseXor => BindingPower::BitwiseAnd,
            BindingPower::BitwiseAnd => BindingPower::Equality,
            BindingPower::Equality => BindingPower::Relational,
            BindingPower::Relational => BindingPower::Shift,
            BindingPower::Shift => BindingPower::Additive,
            BindingPower::Additive => BindingPower::Multiplicative,
            BindingPower::Multiplicative | BindingPower::Unary => BindingPower::Unary,
        }
    }
}

const BINARY_OPERATORS: [(TokenKind, BinaryOp, BindingPower); 18] = [
    (TokenKind::Or, BinaryOp::LogicalOr, BindingPower::LogicalOr),
    (TokenKind::And, BinaryOp::LogicalAnd, BindingPower::LogicalAnd),
    (TokenKind::Pipe, BinaryOp::BitOr, BindingPower::BitwiseOr),
    (TokenKind::Caret, BinaryOp::BitXor, BindingPower::BitwiseXor),
    (TokenKind::Ampersand, BinaryOp::BitAnd, BindingPower::BitwiseAnd),
    (TokenKind::Equals, BinaryOp::Equals, BindingPower::Equality),
    (TokenKind::NotEquals, BinaryOp::NotEquals, BindingPower::Equality),
    (TokenKind::Less, BinaryOp::Less, BindingPower::Relational),
    (TokenKind::Greater, BinaryOp::Greater, BindingPower::Relational),
    (TokenKind::LessEquals, BinaryOp::LessEquals, BindingPower::Relational),
    (TokenKind::GreaterEquals, BinaryOp::GreaterEquals, BindingPower::Relational),
    (TokenKind::ShiftLeft, BinaryOp::ShiftLeft, BindingPower::Shift),
    (TokenKind::ShiftRight, BinaryOp::ShiftRight, BindingPower::Shift),
    (TokenKind::Plus, BinaryOp::Add, BindingPower::Additive),
    (TokenKind::Dash, BinaryOp::Sub, BindingPower::Additive),
    (TokenKind::Star, BinaryOp::Mul, BindingPower::Multiplicative),
    (TokenKind::Slash, BinaryOp::Div, BindingPower::Multiplicative),
    (TokenKind::Percent, BinaryOp::Mod, BindingPower::Multiplicative),
];

lazy_static! {
    static ref PRECEDENCE_TABLE: HashMap<TokenKind, BindingPower> = BINARY_OPERATORS
        .iter()
        .map(|(kind, _, bp)| (*kind, *bp))
        .collect();
}

/// Binding power of `kind` in infix position, `None` when it is not a
/// binary operator.
pub fn precedence_of(kind: TokenKind) -> Option<BindingPower> {
    PRECEDENCE_TABLE.get(&kind).copied()
}

pub fn binding_power_of(op: BinaryOp) -> BindingPower {
    BINARY_OPERATORS
        .iter()
        .find(|(_, candidate, _)| *candidate == op)
        .map_or(BindingPower::Default, |(_, _, bp)| *bp)
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Literals and symbols
    parser.nud(TokenKind::IntLiteral, parse_primary_expr);
    parser.nud(TokenKind::FloatLiteral, parse_primary_expr);
    parser.nud(TokenKind::CharLiteral, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::OpenParen, parse_paren_expr);

    // Prefix operators
    parser.nud(TokenKind::Not, parse_prefix_expr);
    parser.nud(TokenKind::Tilde, parse_prefix_expr);
    parser.nud(TokenKind::Plus, parse_prefix_expr);
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::Star, parse_prefix_expr);
    parser.nud(TokenKind::Ampersand, parse_prefix_expr);
    parser.nud(TokenKind::PlusPlus, parse_prefix_expr);
    parser.nud(TokenKind::MinusMinus, parse_prefix_expr);

    // Statements
    parser.stmt(TokenKind::Const, parse_declaration_stmt);
    parser.stmt(TokenKind::Int, parse_declaration_stmt);
    parser.stmt(TokenKind::Float, parse_declaration_stmt);
    parser.stmt(TokenKind::Char, parse_declaration_stmt);
    parser.stmt(TokenKind::Double, parse_declaration_stmt);
    parser.stmt(TokenKind::Void, parse_declaration_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
