use crate::{lexer::tokens::TokenKind, Span};

use super::{
    ast::Node,
    types::{BaseType, LiteralValue},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Not,
    BitNot,
    Plus,
    Minus,
    Deref,
    AddressOf,
    Increment,
    Decrement,
}

impl UnaryOp {
    pub fn from_prefix_token(kind: TokenKind) -> Option<UnaryOp> {
        match kind {
            TokenKind::Not => Some(UnaryOp::Not),
            TokenKind::Tilde => Some(UnaryOp::BitNot),
            TokenKind::Plus => Some(UnaryOp::Plus),
            TokenKind::Dash => Some(UnaryOp::Minus),
            TokenKind::Star => Some(UnaryOp::Deref),
            TokenKind::Ampersand => Some(UnaryOp::AddressOf),
            TokenKind::PlusPlus => Some(UnaryOp::Increment),
            TokenKind::MinusMinus => Some(UnaryOp::Decrement),
            _ => None,
        }
    }

    pub fn from_postfix_token(kind: TokenKind) -> Option<UnaryOp> {
        match kind {
            TokenKind::PlusPlus => Some(UnaryOp::Increment),
            TokenKind::MinusMinus => Some(UnaryOp::Decrement),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::BitNot => "~",
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
            UnaryOp::Deref => "*",
            UnaryOp::AddressOf => "&",
            UnaryOp::Increment => "++",
            UnaryOp::Decrement => "--",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Mul,
    Div,
    Mod,
    Add,
    Sub,
    ShiftLeft,
    ShiftRight,
    Less,
    Greater,
    LessEquals,
    GreaterEquals,
    Equals,
    NotEquals,
    BitAnd,
    BitXor,
    BitOr,
    LogicalAnd,
    LogicalOr,
}

impl BinaryOp {
    pub fn from_token(kind: TokenKind) -> Option<BinaryOp> {
        match kind {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Percent => Some(BinaryOp::Mod),
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Dash => Some(BinaryOp::Sub),
            TokenKind::ShiftLeft => Some(BinaryOp::ShiftLeft),
            TokenKind::ShiftRight => Some(BinaryOp::ShiftRight),
            TokenKind::Less => Some(BinaryOp::Less),
            TokenKind::Greater => Some(BinaryOp::Greater),
            TokenKind::LessEquals => Some(BinaryOp::LessEquals),
            TokenKind::GreaterEquals => Some(BinaryOp::GreaterEquals),
            TokenKind::Equals => Some(BinaryOp::Equals),
            TokenKind::NotEquals => Some(BinaryOp::NotEquals),
            TokenKind::Ampersand => Some(BinaryOp::BitAnd),
            TokenKind::Caret => Some(BinaryOp::BitXor),
            TokenKind::Pipe => Some(BinaryOp::BitOr),
            TokenKind::And => Some(BinaryOp::LogicalAnd),
            TokenKind::Or => Some(BinaryOp::LogicalOr),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::ShiftLeft => "<<",
            BinaryOp::ShiftRight => ">>",
            BinaryOp::Less => "<",
            BinaryOp::Greater => ">",
            BinaryOp::LessEquals => "<=",
            BinaryOp::GreaterEquals => ">=",
            BinaryOp::Equals => "==",
            BinaryOp::NotEquals => "!=",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitXor => "^",
            BinaryOp::BitOr => "|",
            BinaryOp::LogicalAnd => "&&",
            BinaryOp::LogicalOr => "||",
        }
    }
}

/// Literal Expression
/// An integer, float or char constant.
#[derive(Debug, Clone)]
pub struct LiteralExpr {
    pub value: LiteralValue,
    pub span: Span,
}

/// Identifier Expression
/// A variable name used as a value.
#[derive(Debug, Clone)]
pub struct IdentifierExpr {
    pub name: String,
    pub span: Span,
}

/// Unary Expression
/// Prefix operators, plus postfix `++`/`--` when `is_postfix` is set.
#[derive(Debug, Clone)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub operand: Box<Expr>,
    pub is_postfix: bool,
    pub span: Span,
}

/// Cast Expression
/// `(int**) operand`
#[derive(Debug, Clone)]
pub struct CastExpr {
    pub target_type: BaseType,
    pub pointer_depth: u32,
    pub operand: Box<Expr>,
    pub span: Span,
}

/// Binary Expression
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

/// Grouping Expression
/// A parenthesized expression.
#[derive(Debug, Clone)]
pub struct GroupingExpr {
    pub inner: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum Expr {
    Literal(LiteralExpr),
    Identifier(IdentifierExpr),
    Unary(UnaryExpr),
    Cast(CastExpr),
    Binary(BinaryExpr),
    Grouping(GroupingExpr),
}

impl Expr {
    /// Literals, identifiers and parenthesized expressions, the operands
    /// postfix operators attach to.
    pub fn is_primary(&self) -> bool {
        matches!(
            self,
            Expr::Literal(_) | Expr::Identifier(_) | Expr::Grouping(_)
        )
    }
}

impl Node for Expr {
    fn get_span(&self) -> &Span {
        match self {
            Expr::Literal(expr) => &expr.span,
            Expr::Identifier(expr) => &expr.span,
            Expr::Unary(expr) => &expr.span,
            Expr::Cast(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Grouping(expr) => &expr.span,
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            Expr::Literal(_) | Expr::Identifier(_) => 1,
            Expr::Unary(expr) => expr.operand.leaf_count(),
            Expr::Cast(expr) => expr.operand.leaf_count(),
            Expr::Binary(expr) => expr.left.leaf_count() + expr.right.leaf_count(),
            Expr::Grouping(expr) => expr.inner.leaf_count(),
        }
    }
}

/// `*operand` on the left of an assignment.
#[derive(Debug, Clone)]
pub struct DerefTarget {
    pub operand: Box<Expr>,
    pub span: Span,
}

/// `( target )` on the left of an assignment.
#[derive(Debug, Clone)]
pub struct GroupedTarget {
    pub inner: Box<AssignTarget>,
    pub span: Span,
}

/// Left-hand side of an assignment.
///
/// Only names, dereferences and parenthesized targets can be assigned to;
/// anything else is rejected when converting from an [`Expr`].
#[derive(Debug, Clone)]
pub enum AssignTarget {
    Identifier(IdentifierExpr),
    Deref(DerefTarget),
    Grouping(GroupedTarget),
}

impl TryFrom<Expr> for AssignTarget {
    type Error = Expr;

    fn try_from(expr: Expr) -> Result<Self, Self::Error> {
        match expr {
            Expr::Identifier(ident) => Ok(AssignTarget::Identifier(ident)),
            Expr::Unary(UnaryExpr {
                op: UnaryOp::Deref,
                operand,
                is_postfix: false,
                span,
            }) => Ok(AssignTarget::Deref(DerefTarget { operand, span })),
            Expr::Grouping(GroupingExpr { inner, span }) => match AssignTarget::try_from(*inner) {
                Ok(target) => Ok(AssignTarget::Grouping(GroupedTarget {
                    inner: Box::new(target),
                    span,
                })),
                Err(inner) => Err(Expr::Grouping(GroupingExpr {
                    inner: Box::new(inner),
                    span,
                })),
            },
            other => Err(other),
        }
    }
}

impl From<AssignTarget> for Expr {
    fn from(target: AssignTarget) -> Self {
        match target {
            AssignTarget::Identifier(ident) => Expr::Identifier(ident),
            AssignTarget::Deref(DerefTarget { operand, span }) => Expr::Unary(UnaryExpr {
                op: UnaryOp::Deref,
                operand,
                is_postfix: false,
                span,
            }),
            AssignTarget::Grouping(GroupedTarget { inner, span }) => Expr::Grouping(GroupingExpr {
                inner: Box::new(Expr::from(*inner)),
                span,
            }),
        }
    }
}

impl Node for AssignTarget {
    fn get_span(&self) -> &Span {
        match self {
            AssignTarget::Identifier(target) => &target.span,
            AssignTarget::Deref(target) => &target.span,
            AssignTarget::Grouping(target) => &target.span,
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            AssignTarget::Identifier(_) => 1,
            AssignTarget::Deref(target) => target.operand.leaf_count(),
            AssignTarget::Grouping(target) => target.inner.leaf_count(),
        }
    }
}
