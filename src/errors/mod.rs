//! Error types and diagnostics for the interpreter.
//!
//! Nothing in the evaluator or the type checker aborts a run. Ill-formed
//! expressions reduce to `Undefined` / `IllTyped` sentinels instead, and the
//! statement executor reports local failures through this module:
//!
//! - Assignments to undeclared variables or with a changed kind
//! - Non-boolean `while` / `if` conditions
//! - Misuse of the AST builders (empty statement lists)

pub mod errors;

#[cfg(test)]
mod tests;
