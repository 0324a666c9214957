/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - expressions: Definitions for expression nodes and operator tags
/// - statements: Definitions for statement nodes
pub mod expressions;
pub mod statements;
