use std::fmt::{self, Display};

use crate::{
    interpreter::{environment::Environment, interpreter::Interpreter, output::Output},
    type_checker::type_checker::{CheckerConfig, TypeChecker, TypeEnvironment},
};

use super::expressions::Expr;

/// Block wrapper around a single statement.
///
/// Loop and branch bodies are blocks. Executing a block on its own is
/// transparent; the scope boundary belongs to the `While` / `IfThenElse`
/// that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block(pub Box<Stmt>);

impl Block {
    pub fn new(statement: Stmt) -> Self {
        Block(Box::new(statement))
    }

    pub fn statement(&self) -> &Stmt {
        &self.0
    }
}

/// Statement node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Sequence(Box<Stmt>, Box<Stmt>),
    Declaration {
        identifier: String,
        value: Expr,
    },
    Assignment {
        identifier: String,
        value: Expr,
    },
    While {
        condition: Expr,
        body: Block,
    },
    IfThenElse {
        condition: Expr,
        then_body: Block,
        else_body: Block,
    },
    Print(Expr),
    Block(Block),
}

/// Top-level entry: a program is a single block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program(pub Block);

impl Program {
    pub fn new(block: Block) -> Self {
        Program(block)
    }

    pub fn block(&self) -> &Block {
        &self.0
    }

    pub fn pretty_print(&self) -> String {
        self.to_string()
    }

    /// Type checks the program with the default (unscoped) configuration,
    /// recording declarations into `type_environment`.
    pub fn check(&self, type_environment: &mut TypeEnvironment) -> bool {
        self.check_with(CheckerConfig::default(), type_environment)
    }

    pub fn check_with(&self, config: CheckerConfig, type_environment: &mut TypeEnvironment) -> bool {
        TypeChecker::new(config).check_program(self, type_environment)
    }

    /// Evaluates the program against `environment`, sending printed lines
    /// and diagnostics to `output`.
    pub fn run(&self, environment: &mut Environment, output: &mut dyn Output) {
        Interpreter::new(output).run_program(self, environment);
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{\n{}\n}}", self.0)
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Sequence(first, second) => write!(f, "{};\n{}", first, second),
            Stmt::Declaration { identifier, value } => write!(f, "{} := {}", identifier, value),
            Stmt::Assignment { identifier, value } => write!(f, "{} = {}", identifier, value),
            Stmt::While { condition, body } => write!(f, "while {}{}", condition, body),
            Stmt::IfThenElse {
                condition,
                then_body,
                else_body,
            } => write!(f, "if {}{} else {}", condition, then_body, else_body),
            Stmt::Print(value) => write!(f, "print {}", value),
            Stmt::Block(block) => write!(f, "{}", block),
        }
    }
}
