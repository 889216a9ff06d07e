//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It handles:
//!
//! - Statement parsing (declarations, assignments, expression statements,
//!   function definitions)
//! - Expression parsing by precedence climbing, with recursive descent for
//!   prefix, postfix, cast and primary expressions
//! - Type specifiers with pointer declarators
//! - Syntax error reporting with the set of expected tokens
//!
//! NUD (null denotation) handlers are looked up by the token that starts
//! an expression; binary operators are driven by the precedence table.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
