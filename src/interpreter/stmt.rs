use tracing::{debug, trace};

use crate::{
    ast::{
        expressions::Expr,
        statements::{Block, Stmt},
    },
    errors::errors::{Error, ErrorImpl},
};

use super::{
    environment::Environment, expr::eval_expression, interpreter::Interpreter, value::Value,
};

pub fn exec_statement(interpreter: &mut Interpreter, statement: &Stmt, environment: &mut Environment) {
    match statement {
        Stmt::Sequence(first, second) => {
            exec_statement(interpreter, first, environment);
            exec_statement(interpreter, second, environment);
        }
        Stmt::Declaration { identifier, value } => {
            let value = eval_expression(value, environment);
            trace!(variable = %identifier, %value, "declare");
            environment.declare_variable(identifier.clone(), value);
        }
        Stmt::Assignment { identifier, value } => {
            let value = eval_expression(value, environment);
            trace!(variable = %identifier, %value, "assign");
            if let Err(error) = environment.assign_variable(identifier, value) {
                interpreter.report(Error::new(error, statement.to_string()));
            }
        }
        Stmt::While { condition, body } => {
            exec_while(interpreter, condition, body, environment);
        }
        Stmt::IfThenElse {
            condition,
            then_body,
            else_body,
        } => {
            // The condition sees the live outer environment
            let condition_value = eval_expression(condition, environment);
            let mut inner = environment.snapshot();

            match condition_value {
                Value::Bool(true) => exec_block(interpreter, then_body, &mut inner),
                Value::Bool(false) => exec_block(interpreter, else_body, &mut inner),
                other => interpreter.report(Error::new(
                    ErrorImpl::NonBooleanCondition {
                        construct: "if",
                        received: other.kind(),
                    },
                    format!("if {}", condition),
                )),
            }

            let merged = environment.merge(&inner);
            environment.absorb(&merged);
        }
        Stmt::Print(value) => {
            let value = eval_expression(value, environment);
            interpreter.print_value(value);
        }
        Stmt::Block(block) => exec_block(interpreter, block, environment),
    }
}

pub fn exec_block(interpreter: &mut Interpreter, block: &Block, environment: &mut Environment) {
    exec_statement(interpreter, block.statement(), environment);
}

fn exec_while(
    interpreter: &mut Interpreter,
    condition: &Expr,
    body: &Block,
    outer: &mut Environment,
) {
    let mut inner = outer.snapshot();
    let mut iterations: u64 = 0;

    loop {
        match eval_expression(condition, &inner) {
            Value::Bool(true) => {
                exec_block(interpreter, body, &mut inner);
                // Next condition check sees the merged view
                inner = outer.merge(&inner);
                iterations += 1;
                trace!(iterations, "loop iteration done");
            }
            Value::Bool(false) => break,
            other => {
                interpreter.report(Error::new(
                    ErrorImpl::NonBooleanCondition {
                        construct: "while",
                        received: other.kind(),
                    },
                    format!("while {}", condition),
                ));
                break;
            }
        }
    }

    let merged = outer.merge(&inner);
    outer.absorb(&merged);
    debug!(iterations, "loop finished");
}
