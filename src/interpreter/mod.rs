//! Tree-walking evaluation.
//!
//! This module runs programs directly from the AST. It handles:
//!
//! - The runtime value model (`Int`, `Bool`, `Undefined`)
//! - Expression evaluation against a flat environment
//! - Statement execution, including the snapshot-and-merge scoping used by
//!   `while` and `if`: assignments to existing variables leak out of a
//!   nested scope, new declarations and kind changes do not
//! - The output sink receiving printed lines and diagnostics

pub mod environment;
pub mod expr;
pub mod interpreter;
pub mod output;
pub mod stmt;
pub mod value;
