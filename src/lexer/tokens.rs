use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("const", TokenKind::Const);
        map.insert("int", TokenKind::Int);
        map.insert("float", TokenKind::Float);
        map.insert("char", TokenKind::Char);
        map.insert("double", TokenKind::Double);
        map.insert("void", TokenKind::Void);
        map.insert("return", TokenKind::Return);
        map
    };
}

/// Token classes produced by the scanner.
///
/// The declaration order doubles as the order in which expected-token sets
/// are listed in diagnostics.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    IntLiteral,
    FloatLiteral,
    CharLiteral,
    Identifier,

    // Reserved
    Const,
    Int,
    Float,
    Char,
    Double,
    Void,
    Return,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    Semicolon,
    Comma,

    Assignment, // =

    Plus,
    Dash,
    Star,
    Slash,
    Percent,
    ShiftLeft,
    ShiftRight,

    Less,
    Greater,
    LessEquals,
    GreaterEquals,
    Equals,    // ==
    NotEquals, // !=

    Ampersand,
    Caret,
    Pipe,
    And, // &&
    Or,  // ||

    Not,   // !
    Tilde, // ~
    PlusPlus,
    MinusMinus,
}

impl TokenKind {
    /// Base type keywords, the ones that can open a declaration or a cast.
    pub fn is_base_type(&self) -> bool {
        matches!(
            self,
            TokenKind::Int | TokenKind::Float | TokenKind::Char | TokenKind::Double
        )
    }

    /// Human readable name used in diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::EOF => "end of input",
            TokenKind::IntLiteral => "integer literal",
            TokenKind::FloatLiteral => "float literal",
            TokenKind::CharLiteral => "char literal",
            TokenKind::Identifier => "identifier",
            TokenKind::Const => "`const`",
            TokenKind::Int => "`int`",
            TokenKind::Float => "`float`",
            TokenKind::Char => "`char`",
            TokenKind::Double => "`double`",
            TokenKind::Void => "`void`",
            TokenKind::Return => "`return`",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::OpenCurly => "`{`",
            TokenKind::CloseCurly => "`}`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Comma => "`,`",
            TokenKind::Assignment => "`=`",
            TokenKind::Plus => "`+`",
            TokenKind::Dash => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Percent => "`%`",
            TokenKind::ShiftLeft => "`<<`",
            TokenKind::ShiftRight => "`>>`",
            TokenKind::Less => "`<`",
            TokenKind::Greater => "`>`",
            TokenKind::LessEquals => "`<=`",
            TokenKind::GreaterEquals => "`>=`",
            TokenKind::Equals => "`==`",
            TokenKind::NotEquals => "`!=`",
            TokenKind::Ampersand => "`&`",
            TokenKind::Caret => "`^`",
            TokenKind::Pipe => "`|`",
            TokenKind::And => "`&&`",
            TokenKind::Or => "`||`",
            TokenKind::Not => "`!`",
            TokenKind::Tilde => "`~`",
            TokenKind::PlusPlus => "`++`",
            TokenKind::MinusMinus => "`--`",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} {:?} {:?}",
            self.span.start.line, self.span.start.column, self.kind, self.value
        )
    }
}

impl Token {
    /// True for tokens that become a leaf of the tree when consumed.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Identifier
                | TokenKind::IntLiteral
                | TokenKind::FloatLiteral
                | TokenKind::CharLiteral
        )
    }
}
