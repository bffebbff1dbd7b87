/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Statement` and `Expression` sum types and the `Program` root
/// - expressions: Definitions for the expression nodes
/// - statements: Definitions for the statement nodes
pub mod ast;
pub mod expressions;
pub mod statements;
