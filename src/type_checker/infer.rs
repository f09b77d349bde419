use crate::ast::{expressions::Expr, types::Type};

use super::type_checker::TypeEnvironment;

/// Infers the type of an expression. Total: ill-formed expressions are
/// `IllTyped`.
pub fn infer_expression(expression: &Expr, type_environment: &TypeEnvironment) -> Type {
    match expression {
        Expr::Num(_) => Type::Int,
        Expr::Bool(_) => Type::Bool,
        Expr::Plus(left, right) | Expr::Mult(left, right) => {
            match (
                infer_expression(left, type_environment),
                infer_expression(right, type_environment),
            ) {
                (Type::Int, Type::Int) => Type::Int,
                _ => Type::IllTyped,
            }
        }
        Expr::Or(left, right) | Expr::And(left, right) => {
            match (
                infer_expression(left, type_environment),
                infer_expression(right, type_environment),
            ) {
                (Type::Bool, Type::Bool) => Type::Bool,
                _ => Type::IllTyped,
            }
        }
        Expr::Negation(inner) => match infer_expression(inner, type_environment) {
            Type::Bool => Type::Bool,
            _ => Type::IllTyped,
        },
        Expr::Equal(left, right) => {
            let left = infer_expression(left, type_environment);
            let right = infer_expression(right, type_environment);
            if left == right {
                Type::Bool
            } else {
                Type::IllTyped
            }
        }
        Expr::Lesser(left, right) => {
            match (
                infer_expression(left, type_environment),
                infer_expression(right, type_environment),
            ) {
                (Type::Int, Type::Int) => Type::Bool,
                _ => Type::IllTyped,
            }
        }
        Expr::Group(inner) => infer_expression(inner, type_environment),
        Expr::Var(name) => type_environment.get_type(name).unwrap_or(Type::IllTyped),
    }
}
