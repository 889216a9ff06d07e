//! Graphviz rendering of the tree.
//!
//! ```text
//! csubset main.c --emit dot > ast.dot
//! dot -Tpng ast.dot -o ast.png
//! ```

use super::{
    ast::Program,
    expressions::{AssignTarget, Expr},
    printer::escape_char,
    statements::Stmt,
    types::{stars, LiteralValue},
};

/// Renders `program` as a `digraph`, one graph node per tree node.
pub fn to_dot(program: &Program) -> String {
    let mut writer = DotWriter::default();

    writer.lines.push(String::from("digraph AST {"));
    writer.lines.push(String::from("    node [fontname=\"Helvetica\"];"));

    let root = writer.add_node("Program", "rectangle");
    for stmt in program.iter() {
        let child = writer.visit_stmt(stmt);
        writer.add_edge(&root, &child);
    }

    writer.lines.push(String::from("}"));
    writer.lines.join("\n")
}

#[derive(Default)]
struct DotWriter {
    lines: Vec<String>,
    counter: usize,
}

impl DotWriter {
    fn add_node(&mut self, label: &str, shape: &str) -> String {
        self.counter += 1;
        let id = format!("node{}", self.counter);

        let label = label.replace('\\', "\\\\").replace('"', "\\\"");
        self.lines
            .push(format!("    {} [label=\"{}\", shape={}];", id, label, shape));
        id
    }

    fn add_edge(&mut self, parent: &str, child: &str) {
        self.lines.push(format!("    {} -> {};", parent, child));
    }

    fn visit_stmt(&mut self, stmt: &Stmt) -> String {
        match stmt {
            Stmt::VarDecl(decl) => {
                let label = format!(
                    "VarDecl {}{}{} {}",
                    if decl.is_const { "const " } else { "" },
                    decl.base_type,
                    stars(decl.pointer_depth),
                    decl.name
                );
                let id = self.add_node(&label, "box");
                if let Some(initializer) = &decl.initializer {
                    let child = self.visit_expr(initializer);
                    self.add_edge(&id, &child);
                }
                id
            }
            Stmt::Assignment(stmt) => {
                let id = self.add_node("Assign =", "box");
                let target = self.visit_target(&stmt.target);
                let value = self.visit_expr(&stmt.value);
                self.add_edge(&id, &target);
                self.add_edge(&id, &value);
                id
            }
            Stmt::Expression(stmt) => {
                let id = self.add_node("ExprStatement", "box");
                let child = self.visit_expr(&stmt.expression);
                self.add_edge(&id, &child);
                id
            }
            Stmt::Return(stmt) => {
                let id = self.add_node("Return", "box");
                if let Some(value) = &stmt.value {
                    let child = self.visit_expr(value);
                    self.add_edge(&id, &child);
                }
                id
            }
            Stmt::FnDecl(decl) => {
                let params = decl
                    .params
                    .iter()
                    .map(|param| param.to_string())
                    .collect::<Vec<String>>()
                    .join(", ");
                let label = format!(
                    "Function {}{} {}({})",
                    decl.return_type,
                    stars(decl.pointer_depth),
                    decl.name,
                    params
                );
                let id = self.add_node(&label, "rectangle");
                for stmt in decl.iter() {
                    let child = self.visit_stmt(stmt);
                    self.add_edge(&id, &child);
                }
                id
            }
        }
    }

    fn visit_target(&mut self, target: &AssignTarget) -> String {
        match target {
            AssignTarget::Identifier(ident) => self.add_node(&ident.name, "rectangle"),
            AssignTarget::Deref(target) => {
                let id = self.add_node("*", "ellipse");
                let child = self.visit_expr(&target.operand);
                self.add_edge(&id, &child);
                id
            }
            AssignTarget::Grouping(target) => {
                let id = self.add_node("( )", "ellipse");
                let child = self.visit_target(&target.inner);
                self.add_edge(&id, &child);
                id
            }
        }
    }

    fn visit_expr(&mut self, expr: &Expr) -> String {
        match expr {
            Expr::Literal(literal) => {
                let label = match literal.value {
                    LiteralValue::Int(value) => value.to_string(),
                    LiteralValue::Float(value) => format!("{:?}", value),
                    LiteralValue::Char(value) => escape_char(value),
                };
                self.add_node(&label, "rectangle")
            }
            Expr::Identifier(ident) => self.add_node(&ident.name, "rectangle"),
            Expr::Unary(unary) => {
                let label = if unary.is_postfix {
                    format!("postfix {}", unary.op.symbol())
                } else {
                    unary.op.symbol().to_string()
                };
                let id = self.add_node(&label, "ellipse");
                let child = self.visit_expr(&unary.operand);
                self.add_edge(&id, &child);
                id
            }
            Expr::Cast(cast) => {
                let label = format!("cast ({}{})", cast.target_type, stars(cast.pointer_depth));
                let id = self.add_node(&label, "ellipse");
                let child = self.visit_expr(&cast.operand);
                self.add_edge(&id, &child);
                id
            }
            Expr::Binary(binary) => {
                let id = self.add_node(binary.op.symbol(), "ellipse");
                let left = self.visit_expr(&binary.left);
                let right = self.visit_expr(&binary.right);
                self.add_edge(&id, &left);
                self.add_edge(&id, &right);
                id
            }
            Expr::Grouping(grouping) => {
                let id = self.add_node("( )", "ellipse");
                let child = self.visit_expr(&grouping.inner);
                self.add_edge(&id, &child);
                id
            }
        }
    }
}
