use crate::ast::expressions::Expr;

use super::{
    environment::Environment,
    value::{mk_bool, mk_int, mk_undefined, Value},
};

/// Reduces an expression to a value. Total: operand kinds that make no sense
/// for an operator give `Undefined`.
///
/// Both operands of a binary operator are always evaluated, left first.
/// `||` and `&&` only short-circuit in what they return.
pub fn eval_expression(expression: &Expr, environment: &Environment) -> Value {
    match expression {
        Expr::Num(value) => mk_int(*value),
        Expr::Bool(value) => mk_bool(*value),
        Expr::Plus(left, right) => {
            match (eval_expression(left, environment), eval_expression(right, environment)) {
                (Value::Int(left), Value::Int(right)) => mk_int(left.wrapping_add(right)),
                _ => mk_undefined(),
            }
        }
        Expr::Mult(left, right) => {
            match (eval_expression(left, environment), eval_expression(right, environment)) {
                (Value::Int(left), Value::Int(right)) => mk_int(left.wrapping_mul(right)),
                _ => mk_undefined(),
            }
        }
        Expr::Or(left, right) => {
            match (eval_expression(left, environment), eval_expression(right, environment)) {
                (Value::Bool(true), _) => mk_bool(true),
                (Value::Bool(left), Value::Bool(right)) => mk_bool(left || right),
                _ => mk_undefined(),
            }
        }
        Expr::And(left, right) => {
            match (eval_expression(left, environment), eval_expression(right, environment)) {
                (Value::Bool(false), _) => mk_bool(false),
                (Value::Bool(left), Value::Bool(right)) => mk_bool(left && right),
                _ => mk_undefined(),
            }
        }
        Expr::Negation(inner) => match eval_expression(inner, environment) {
            Value::Bool(value) => mk_bool(!value),
            _ => mk_undefined(),
        },
        Expr::Equal(left, right) => {
            match (eval_expression(left, environment), eval_expression(right, environment)) {
                (Value::Int(left), Value::Int(right)) => mk_bool(left == right),
                (Value::Bool(left), Value::Bool(right)) => mk_bool(left == right),
                // Undefined == Undefined is Undefined as well
                _ => mk_undefined(),
            }
        }
        Expr::Lesser(left, right) => {
            match (eval_expression(left, environment), eval_expression(right, environment)) {
                (Value::Int(left), Value::Int(right)) => mk_bool(left < right),
                _ => mk_undefined(),
            }
        }
        Expr::Group(inner) => eval_expression(inner, environment),
        Expr::Var(name) => match environment.get_variable(name) {
            Some(Value::Int(value)) => mk_int(value),
            Some(Value::Bool(value)) => mk_bool(value),
            Some(Value::Undefined) | None => mk_undefined(),
        },
    }
}
