//! Static types of the language.
//!
//! There are exactly three: `Int`, `Bool` and the `IllTyped` sentinel the
//! inferencer propagates upward for ill-formed expressions, the static
//! counterpart of the runtime `Undefined` value.

use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Type {
    /// Also what an unrecorded variable looks up as.
    #[default]
    IllTyped,
    Int,
    Bool,
}

impl Type {
    pub fn is_ill_typed(self) -> bool {
        self == Type::IllTyped
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Type::Int => "Int",
            Type::Bool => "Bool",
            Type::IllTyped => "Illtyped",
        };
        write!(f, "{}", name)
    }
}
