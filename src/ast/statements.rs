use std::slice::Iter;

use crate::Span;

use super::{
    ast::Node,
    expressions::{AssignTarget, Expr},
    types::{BaseType, Param, ReturnType},
};

/// `const int* p = &x;`
#[derive(Debug, Clone)]
pub struct VarDeclStmt {
    pub is_const: bool,
    pub base_type: BaseType,
    pub pointer_depth: u32,
    pub name: String,
    pub initializer: Option<Expr>,
    pub span: Span,
}

/// `*p = 5;`
#[derive(Debug, Clone)]
pub struct AssignmentStmt {
    pub target: AssignTarget,
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub span: Span,
}

/// A top-level function definition, `int main() { ... }`.
#[derive(Debug, Clone)]
pub struct FnDeclStmt {
    pub return_type: ReturnType,
    pub pointer_depth: u32,
    pub name: String,
    pub params: Vec<Param>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl FnDeclStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

#[derive(Debug, Clone)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
    Assignment(AssignmentStmt),
    Expression(ExpressionStmt),
    Return(ReturnStmt),
    FnDecl(FnDeclStmt),
}

impl Node for Stmt {
    fn get_span(&self) -> &Span {
        match self {
            Stmt::VarDecl(stmt) => &stmt.span,
            Stmt::Assignment(stmt) => &stmt.span,
            Stmt::Expression(stmt) => &stmt.span,
            Stmt::Return(stmt) => &stmt.span,
            Stmt::FnDecl(stmt) => &stmt.span,
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            // the declared name is an identifier token of its own
            Stmt::VarDecl(stmt) => 1 + stmt.initializer.as_ref().map_or(0, Node::leaf_count),
            Stmt::Assignment(stmt) => stmt.target.leaf_count() + stmt.value.leaf_count(),
            Stmt::Expression(stmt) => stmt.expression.leaf_count(),
            Stmt::Return(stmt) => stmt.value.as_ref().map_or(0, Node::leaf_count),
            Stmt::FnDecl(stmt) => {
                1 + stmt.params.len() + stmt.body.iter().map(Node::leaf_count).sum::<usize>()
            }
        }
    }
}
