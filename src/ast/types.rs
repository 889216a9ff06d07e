use std::fmt::Display;

use crate::{lexer::tokens::TokenKind, Span};

/// Scalar types that can be declared or cast to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    Int,
    Float,
    Char,
    Double,
}

impl BaseType {
    pub fn from_token(kind: TokenKind) -> Option<BaseType> {
        match kind {
            TokenKind::Int => Some(BaseType::Int),
            TokenKind::Float => Some(BaseType::Float),
            TokenKind::Char => Some(BaseType::Char),
            TokenKind::Double => Some(BaseType::Double),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            BaseType::Int => "int",
            BaseType::Float => "float",
            BaseType::Char => "char",
            BaseType::Double => "double",
        }
    }
}

impl Display for BaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Return type of a function definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnType {
    Void,
    Base(BaseType),
}

impl Display for ReturnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReturnType::Void => write!(f, "void"),
            ReturnType::Base(base) => write!(f, "{}", base),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralType {
    Int,
    Float,
    Char,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    Int(i64),
    Float(f64),
    Char(char),
}

impl LiteralValue {
    pub fn ty(&self) -> LiteralType {
        match self {
            LiteralValue::Int(_) => LiteralType::Int,
            LiteralValue::Float(_) => LiteralType::Float,
            LiteralValue::Char(_) => LiteralType::Char,
        }
    }
}

/// A function parameter, `char** argv`.
#[derive(Debug, Clone)]
pub struct Param {
    pub base_type: BaseType,
    pub pointer_depth: u32,
    pub name: String,
    pub span: Span,
}

/// `*` repeated `depth` times.
pub fn stars(depth: u32) -> String {
    "*".repeat(depth as usize)
}
