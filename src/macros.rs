//! Utility macros for building programs.
//!
//! - `MK_SEQ!` - Folds statements into a right-nested `Sequence`
//! - `MK_PROGRAM!` - Wraps statements into a `Program`
//!
//! Unlike `generate_seq`, these cannot be called with zero statements, so
//! they need no error handling.

/// Folds one or more statements into a right-nested sequence.
///
/// # Example
///
/// ```ignore
/// let body = MK_SEQ!(print(variable("x")), assignment("x", plus(variable("x"), number(1))));
/// ```
#[macro_export]
macro_rules! MK_SEQ {
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::ast::builders::sequence($first, $crate::MK_SEQ!($($rest),+))
    };
    ($last:expr $(,)?) => {
        $last
    };
}

/// Builds a program from one or more statements.
///
/// # Example
///
/// ```ignore
/// let program = MK_PROGRAM!(declaration("x", number(2)), print(variable("x")));
/// ```
#[macro_export]
macro_rules! MK_PROGRAM {
    ($($line:expr),+ $(,)?) => {
        $crate::ast::builders::program($crate::ast::builders::block($crate::MK_SEQ!($($line),+)))
    };
}
