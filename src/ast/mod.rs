/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Node` trait and the `Program` root
/// - expressions: Expression nodes and assignment targets
/// - statements: Statement nodes
/// - types: Base types, literal values and parameters
/// - printer: Re-parsable C source rendering (`Display`)
/// - sexpr: Span-free structural rendering
/// - dot: Graphviz rendering
pub mod ast;
pub mod dot;
pub mod expressions;
pub mod printer;
pub mod sexpr;
pub mod statements;
pub mod types;
