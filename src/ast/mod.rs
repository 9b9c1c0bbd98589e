/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Core AST traits and wrappers
/// - expressions: Definitions for various expression types
/// - statements: Definitions for various statement types
/// - types: Definitions for type annotations in the AST
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
