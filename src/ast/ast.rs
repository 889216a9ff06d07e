use std::{fmt::Debug, slice::Iter};

use crate::Span;

use super::statements::Stmt;

/// Behaviour shared by every node of the tree.
pub trait Node: Debug {
    /// Returns the source span of the node.
    fn get_span(&self) -> &Span;
    /// Number of literal and identifier leaves below (and including) the node.
    fn leaf_count(&self) -> usize;
}

/// Root of a parsed translation unit.
#[derive(Debug, Clone)]
pub struct Program {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Node for Program {
    fn get_span(&self) -> &Span {
        &self.span
    }

    fn leaf_count(&self) -> usize {
        self.body.iter().map(Node::leaf_count).sum()
    }
}
