use std::collections::HashMap;

use tracing::{debug, trace};

use crate::ast::{
    statements::{Block, Program, Stmt},
    types::Type,
};

use super::infer::infer_expression;

/// Static environment: a flat mapping from variable name to type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeEnvironment {
    type_lookup: HashMap<String, Type>,
}

impl TypeEnvironment {
    pub fn new() -> Self {
        TypeEnvironment::default()
    }

    pub fn get_type(&self, variable_name: &str) -> Option<Type> {
        self.type_lookup.get(variable_name).copied()
    }

    pub fn declare_variable(&mut self, variable_name: String, variable_type: Type) {
        self.type_lookup.insert(variable_name, variable_type);
    }

    pub fn contains(&self, variable_name: &str) -> bool {
        self.type_lookup.contains_key(variable_name)
    }

    pub fn len(&self) -> usize {
        self.type_lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.type_lookup.is_empty()
    }
}

impl FromIterator<(String, Type)> for TypeEnvironment {
    fn from_iter<T: IntoIterator<Item = (String, Type)>>(iter: T) -> Self {
        TypeEnvironment {
            type_lookup: iter.into_iter().collect(),
        }
    }
}

/// How declarations inside `while` / `if` bodies affect the type environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeScoping {
    /// Nested declarations stay recorded after the body is checked.
    #[default]
    Unscoped,
    /// Nested bodies are checked against a copy; the type environment is
    /// restored once the body has been checked.
    Scoped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckerConfig {
    pub scoping: TypeScoping,
}

impl CheckerConfig {
    pub fn scoped() -> Self {
        CheckerConfig {
            scoping: TypeScoping::Scoped,
        }
    }
}

#[derive(Debug, Default)]
pub struct TypeChecker {
    pub config: CheckerConfig,
}

impl TypeChecker {
    pub fn new(config: CheckerConfig) -> Self {
        TypeChecker { config }
    }

    pub fn check_program(&self, program: &Program, type_environment: &mut TypeEnvironment) -> bool {
        let verdict = check_block(self, program.block(), type_environment);
        debug!(
            verdict,
            scoping = ?self.config.scoping,
            variables = type_environment.len(),
            "type check finished"
        );
        verdict
    }

    /// Checks a `while` / `if` body under the configured scoping.
    fn check_nested(&self, body: &Block, type_environment: &mut TypeEnvironment) -> bool {
        match self.config.scoping {
            TypeScoping::Unscoped => check_block(self, body, type_environment),
            TypeScoping::Scoped => {
                let mut inner = type_environment.clone();
                check_block(self, body, &mut inner)
            }
        }
    }
}

pub fn check_statement(
    type_checker: &TypeChecker,
    statement: &Stmt,
    type_environment: &mut TypeEnvironment,
) -> bool {
    let verdict = match statement {
        Stmt::Sequence(first, second) => {
            check_statement(type_checker, first, type_environment)
                && check_statement(type_checker, second, type_environment)
        }
        Stmt::Declaration { identifier, value } => {
            match infer_expression(value, type_environment) {
                Type::IllTyped => false,
                value_type => {
                    type_environment.declare_variable(identifier.clone(), value_type);
                    true
                }
            }
        }
        Stmt::Assignment { identifier, value } => match type_environment.get_type(identifier) {
            Some(recorded) => recorded == infer_expression(value, type_environment),
            None => false,
        },
        Stmt::While { condition, body } => {
            infer_expression(condition, type_environment) == Type::Bool
                && type_checker.check_nested(body, type_environment)
        }
        Stmt::IfThenElse {
            condition,
            then_body,
            else_body,
        } => {
            infer_expression(condition, type_environment) == Type::Bool
                && type_checker.check_nested(then_body, type_environment)
                && type_checker.check_nested(else_body, type_environment)
        }
        Stmt::Print(value) => !infer_expression(value, type_environment).is_ill_typed(),
        Stmt::Block(block) => check_block(type_checker, block, type_environment),
    };

    if !verdict {
        trace!(statement = %statement, "statement does not type check");
    }
    verdict
}

pub fn check_block(type_checker: &TypeChecker, block: &Block, type_environment: &mut TypeEnvironment) -> bool {
    check_statement(type_checker, block.statement(), type_environment)
}
