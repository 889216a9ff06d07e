//! Renders the tree back to C source.
//!
//! The output re-parses to a structurally identical tree. Parentheses are
//! only emitted for `Grouping` nodes, or where a hand-built tree nests a
//! looser operator inside a tighter one.

use std::fmt::{self, Display, Formatter};

use crate::parser::lookups::{binding_power_of, BindingPower};

use super::{
    ast::Program,
    expressions::{AssignTarget, Expr},
    statements::Stmt,
    types::{stars, LiteralValue, Param},
};

/// Source spelling of a char literal, quotes included.
pub fn escape_char(value: char) -> String {
    let escaped = match value {
        '\n' => "\\n".to_string(),
        '\t' => "\\t".to_string(),
        '\r' => "\\r".to_string(),
        '\0' => "\\0".to_string(),
        '\x07' => "\\a".to_string(),
        '\x08' => "\\b".to_string(),
        '\x0c' => "\\f".to_string(),
        '\x0b' => "\\v".to_string(),
        '\\' => "\\\\".to_string(),
        '\'' => "\\'".to_string(),
        other => other.to_string(),
    };
    format!("'{}'", escaped)
}

impl Display for LiteralValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Int(value) => write!(f, "{}", value),
            // Debug keeps the `.0` so the literal lexes as a float again
            LiteralValue::Float(value) => write!(f, "{:?}", value),
            LiteralValue::Char(value) => write!(f, "{}", escape_char(*value)),
        }
    }
}

fn binding_power(expr: &Expr) -> BindingPower {
    match expr {
        Expr::Binary(binary) => binding_power_of(binary.op),
        _ => BindingPower::Unary,
    }
}

fn write_operand(f: &mut Formatter<'_>, expr: &Expr, parenthesize: bool) -> fmt::Result {
    if parenthesize {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(literal) => write!(f, "{}", literal.value),
            Expr::Identifier(ident) => write!(f, "{}", ident.name),
            Expr::Unary(unary) if unary.is_postfix => {
                write_operand(f, &unary.operand, !unary.operand.is_primary())?;
                write!(f, "{}", unary.op.symbol())
            }
            Expr::Unary(unary) => {
                let symbol = unary.op.symbol();
                let operand = if binding_power(&unary.operand) < BindingPower::Unary {
                    format!("({})", unary.operand)
                } else {
                    unary.operand.to_string()
                };

                // `- -x` must not collapse into `--x`
                if symbol.chars().last() == operand.chars().next() {
                    write!(f, "{} {}", symbol, operand)
                } else {
                    write!(f, "{}{}", symbol, operand)
                }
            }
            Expr::Cast(cast) => {
                write!(f, "({}{}) ", cast.target_type, stars(cast.pointer_depth))?;
                write_operand(f, &cast.operand, binding_power(&cast.operand) < BindingPower::Unary)
            }
            Expr::Binary(binary) => {
                let bp = binding_power_of(binary.op);
                write_operand(f, &binary.left, binding_power(&binary.left) < bp)?;
                write!(f, " {} ", binary.op.symbol())?;
                write_operand(f, &binary.right, binding_power(&binary.right) <= bp)
            }
            Expr::Grouping(grouping) => write!(f, "({})", grouping.inner),
        }
    }
}

impl Display for AssignTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Expr::from(self.clone()))
    }
}

impl Display for Param {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} {}", self.base_type, stars(self.pointer_depth), self.name)
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::VarDecl(decl) => {
                if decl.is_const {
                    write!(f, "const ")?;
                }
                write!(f, "{}{} {}", decl.base_type, stars(decl.pointer_depth), decl.name)?;
                if let Some(initializer) = &decl.initializer {
                    write!(f, " = {}", initializer)?;
                }
                write!(f, ";")
            }
            Stmt::Assignment(assignment) => {
                write!(f, "{} = {};", assignment.target, assignment.value)
            }
            Stmt::Expression(stmt) => write!(f, "{};", stmt.expression),
            Stmt::Return(stmt) => match &stmt.value {
                Some(value) => write!(f, "return {};", value),
                None => write!(f, "return;"),
            },
            Stmt::FnDecl(decl) => {
                let params = decl
                    .params
                    .iter()
                    .map(Param::to_string)
                    .collect::<Vec<String>>()
                    .join(", ");

                writeln!(
                    f,
                    "{}{} {}({}) {{",
                    decl.return_type,
                    stars(decl.pointer_depth),
                    decl.name,
                    params
                )?;
                for stmt in decl.iter() {
                    writeln!(f, "    {}", stmt)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for stmt in self.iter() {
            writeln!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
