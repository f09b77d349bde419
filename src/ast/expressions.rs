use std::fmt::{self, Display};

/// Expression node.
///
/// The set of expressions is closed; every pass (`eval_expression`,
/// `infer_expression`, pretty printing) matches on it exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Num(i64),
    Bool(bool),
    Plus(Box<Expr>, Box<Expr>),
    Mult(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Negation(Box<Expr>),
    Equal(Box<Expr>, Box<Expr>),
    Lesser(Box<Expr>, Box<Expr>),
    /// Parenthesization, semantically transparent.
    Group(Box<Expr>),
    Var(String),
}

impl Expr {
    /// Returns the operator and both operands of a binary expression.
    pub fn as_binary(&self) -> Option<(BinaryOperator, &Expr, &Expr)> {
        match self {
            Expr::Plus(left, right) => Some((BinaryOperator::Plus, left, right)),
            Expr::Mult(left, right) => Some((BinaryOperator::Mult, left, right)),
            Expr::Or(left, right) => Some((BinaryOperator::Or, left, right)),
            Expr::And(left, right) => Some((BinaryOperator::And, left, right)),
            Expr::Equal(left, right) => Some((BinaryOperator::Equal, left, right)),
            Expr::Lesser(left, right) => Some((BinaryOperator::Lesser, left, right)),
            Expr::Num(_)
            | Expr::Bool(_)
            | Expr::Negation(_)
            | Expr::Group(_)
            | Expr::Var(_) => None,
        }
    }
}

/// Binary operators, used for printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Plus,
    Mult,
    Or,
    And,
    Equal,
    Lesser,
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Mult => "*",
            BinaryOperator::Or => " || ",
            BinaryOperator::And => " && ",
            BinaryOperator::Equal => "==",
            BinaryOperator::Lesser => "<",
        };
        write!(f, "{}", symbol)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(value) => write!(f, "{}", value),
            Expr::Bool(value) => write!(f, "{}", value),
            Expr::Negation(inner) => write!(f, "(!{})", inner),
            Expr::Group(inner) => write!(f, "({})", inner),
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Plus(..)
            | Expr::Mult(..)
            | Expr::Or(..)
            | Expr::And(..)
            | Expr::Equal(..)
            | Expr::Lesser(..) => match self.as_binary() {
                Some((operator, left, right)) => write!(f, "({}{}{})", left, operator, right),
                None => Ok(()),
            },
        }
    }
}
