/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Expr` and `Executable` sum types and the `Node` trait
/// - expressions: Definitions for the expression node kinds
/// - statements: Definitions for the executable statement kinds
pub mod ast;
pub mod expressions;
pub mod statements;
