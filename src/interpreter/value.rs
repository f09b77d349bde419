//! Runtime values.

use std::fmt::{self, Display};

/// Tagged runtime value.
///
/// `Undefined` is an ordinary result, not an error: it is what an
/// expression reduces to when its operands have the wrong kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Undefined,
}

/// The tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Int,
    Bool,
    Undefined,
}

pub fn mk_int(value: i64) -> Value {
    Value::Int(value)
}

pub fn mk_bool(value: bool) -> Value {
    Value::Bool(value)
}

pub fn mk_undefined() -> Value {
    Value::Undefined
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Int(_) => Kind::Int,
            Value::Bool(_) => Kind::Bool,
            Value::Undefined => Kind::Undefined,
        }
    }

    pub fn same_kind(&self, other: &Value) -> bool {
        self.kind() == other.kind()
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{}", value),
            Value::Bool(value) => write!(f, "{}", value),
            Value::Undefined => write!(f, "Undefined"),
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Int => "Int",
            Kind::Bool => "Bool",
            Kind::Undefined => "Undefined",
        };
        write!(f, "{}", name)
    }
}
