//! Type inference and statement checking.
//!
//! This pass is independent of evaluation and its verdict does not gate it.
//! It:
//!
//! - Infers `Int`, `Bool` or `IllTyped` for every expression
//! - Checks statements, recording declared variable types
//! - Requires `while` / `if` conditions to be `Bool` and their bodies to
//!   check
//!
//! By default the type environment is not scoped: a declaration inside a
//! nested body stays visible to everything checked after it. The runtime
//! environment is scoped, so the two passes can disagree on programs that
//! re-declare variables inside branches. `TypeScoping::Scoped` opts into
//! restoring the type environment after each nested body instead.

pub mod infer;
pub mod type_checker;
