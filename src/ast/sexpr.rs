//! S-expression rendering.
//!
//! Spans are left out, so two trees render the same exactly when they have
//! the same shape. Tests compare trees this way.
//!
//! ```text
//! 2 + 3 * 4       (+ 2 (* 3 4))
//! (int*) p        (cast int* p)
//! x++             (post++ x)
//! int** p = 0;    (decl int** p 0)
//! ```

use super::{
    ast::Program,
    expressions::{AssignTarget, Expr},
    printer::escape_char,
    statements::Stmt,
    types::{stars, LiteralValue},
};

fn literal(value: &LiteralValue) -> String {
    match value {
        LiteralValue::Int(value) => value.to_string(),
        LiteralValue::Float(value) => format!("{:?}", value),
        LiteralValue::Char(value) => escape_char(*value),
    }
}

impl Expr {
    pub fn sexpr(&self) -> String {
        match self {
            Expr::Literal(expr) => literal(&expr.value),
            Expr::Identifier(expr) => expr.name.clone(),
            Expr::Unary(expr) if expr.is_postfix => {
                format!("(post{} {})", expr.op.symbol(), expr.operand.sexpr())
            }
            Expr::Unary(expr) => format!("({} {})", expr.op.symbol(), expr.operand.sexpr()),
            Expr::Cast(expr) => format!(
                "(cast {}{} {})",
                expr.target_type,
                stars(expr.pointer_depth),
                expr.operand.sexpr()
            ),
            Expr::Binary(expr) => format!(
                "({} {} {})",
                expr.op.symbol(),
                expr.left.sexpr(),
                expr.right.sexpr()
            ),
            Expr::Grouping(expr) => format!("(group {})", expr.inner.sexpr()),
        }
    }
}

impl AssignTarget {
    pub fn sexpr(&self) -> String {
        match self {
            AssignTarget::Identifier(target) => target.name.clone(),
            AssignTarget::Deref(target) => format!("(* {})", target.operand.sexpr()),
            AssignTarget::Grouping(target) => format!("(group {})", target.inner.sexpr()),
        }
    }
}

impl Stmt {
    pub fn sexpr(&self) -> String {
        match self {
            Stmt::VarDecl(decl) => {
                let mut out = String::from("(decl ");
                if decl.is_const {
                    out.push_str("const ");
                }
                out.push_str(&format!(
                    "{}{} {}",
                    decl.base_type,
                    stars(decl.pointer_depth),
                    decl.name
                ));
                if let Some(initializer) = &decl.initializer {
                    out.push(' ');
                    out.push_str(&initializer.sexpr());
                }
                out.push(')');
                out
            }
            Stmt::Assignment(stmt) => {
                format!("(= {} {})", stmt.target.sexpr(), stmt.value.sexpr())
            }
            Stmt::Expression(stmt) => format!("(expr {})", stmt.expression.sexpr()),
            Stmt::Return(stmt) => match &stmt.value {
                Some(value) => format!("(return {})", value.sexpr()),
                None => String::from("(return)"),
            },
            Stmt::FnDecl(decl) => {
                let params = decl
                    .params
                    .iter()
                    .map(|param| param.to_string())
                    .collect::<Vec<String>>()
                    .join(", ");
                let mut out = format!(
                    "(fn {}{} {} ({})",
                    decl.return_type,
                    stars(decl.pointer_depth),
                    decl.name,
                    params
                );
                for stmt in decl.iter() {
                    out.push(' ');
                    out.push_str(&stmt.sexpr());
                }
                out.push(')');
                out
            }
        }
    }
}

impl Program {
    pub fn sexpr(&self) -> String {
        let body = self
            .iter()
            .map(Stmt::sexpr)
            .collect::<Vec<String>>()
            .join(" ");
        format!("(program {})", body)
    }
}
