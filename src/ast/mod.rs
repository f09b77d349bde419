/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - builders: Constructor functions used to assemble programs by hand
/// - expressions: The closed set of expression nodes
/// - statements: The closed set of statement nodes, blocks and programs
/// - types: The static types assigned by the type checker
pub mod builders;
pub mod expressions;
pub mod statements;
pub mod types;
