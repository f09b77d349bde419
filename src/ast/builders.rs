//! Helper functions to build ASTs by hand.
//!
//! There is no textual front end: every program is assembled bottom-up
//! from these constructors.

use crate::errors::errors::{Error, ErrorImpl};

use super::{
    expressions::Expr,
    statements::{Block, Program, Stmt},
};

// EXPRESSIONS

pub fn number(value: i64) -> Expr {
    Expr::Num(value)
}

pub fn boolean(value: bool) -> Expr {
    Expr::Bool(value)
}

pub fn plus(left: Expr, right: Expr) -> Expr {
    Expr::Plus(Box::new(left), Box::new(right))
}

pub fn mult(left: Expr, right: Expr) -> Expr {
    Expr::Mult(Box::new(left), Box::new(right))
}

pub fn or(left: Expr, right: Expr) -> Expr {
    Expr::Or(Box::new(left), Box::new(right))
}

pub fn and(left: Expr, right: Expr) -> Expr {
    Expr::And(Box::new(left), Box::new(right))
}

pub fn negation(inner: Expr) -> Expr {
    Expr::Negation(Box::new(inner))
}

pub fn equal(left: Expr, right: Expr) -> Expr {
    Expr::Equal(Box::new(left), Box::new(right))
}

pub fn lesser(left: Expr, right: Expr) -> Expr {
    Expr::Lesser(Box::new(left), Box::new(right))
}

pub fn group(inner: Expr) -> Expr {
    Expr::Group(Box::new(inner))
}

pub fn variable(name: &str) -> Expr {
    Expr::Var(name.to_string())
}

// STATEMENTS

pub fn program(block: Block) -> Program {
    Program::new(block)
}

pub fn block(statement: Stmt) -> Block {
    Block::new(statement)
}

pub fn sequence(first: Stmt, second: Stmt) -> Stmt {
    Stmt::Sequence(Box::new(first), Box::new(second))
}

pub fn declaration(identifier: &str, value: Expr) -> Stmt {
    Stmt::Declaration {
        identifier: identifier.to_string(),
        value,
    }
}

pub fn assignment(identifier: &str, value: Expr) -> Stmt {
    Stmt::Assignment {
        identifier: identifier.to_string(),
        value,
    }
}

pub fn while_loop(condition: Expr, body: Block) -> Stmt {
    Stmt::While { condition, body }
}

pub fn if_then_else(condition: Expr, then_body: Block, else_body: Block) -> Stmt {
    Stmt::IfThenElse {
        condition,
        then_body,
        else_body,
    }
}

pub fn print(value: Expr) -> Stmt {
    Stmt::Print(value)
}

/// Folds "lines" of statements into a right-nested sequence.
///
/// A single line is returned as is; zero lines is a construction error.
pub fn generate_seq(lines: Vec<Stmt>) -> Result<Stmt, Error> {
    let mut lines = lines.into_iter().rev();
    let last = lines
        .next()
        .ok_or_else(|| Error::new(ErrorImpl::EmptySequence, ""))?;

    Ok(lines.fold(last, |rest, line| sequence(line, rest)))
}

/// Wraps the given lines into a program: `program(block(generate_seq(lines)))`.
pub fn generate_program(lines: Vec<Stmt>) -> Result<Program, Error> {
    Ok(program(block(generate_seq(lines)?)))
}
