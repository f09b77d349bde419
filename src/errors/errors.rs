use std::fmt::Display;

use thiserror::Error;

use crate::interpreter::value::Kind;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    snippet: String,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, snippet: impl Into<String>) -> Self {
        Error {
            internal_error: error_impl,
            snippet: snippet.into(),
        }
    }

    /// The pretty-printed code the diagnostic was raised for.
    pub fn get_snippet(&self) -> &str {
        &self.snippet
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::AssignmentToUndeclared { .. } => "AssignmentToUndeclared",
            ErrorImpl::AssignmentKindMismatch { .. } => "AssignmentKindMismatch",
            ErrorImpl::NonBooleanCondition { .. } => "NonBooleanCondition",
            ErrorImpl::EmptySequence => "EmptySequence",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::AssignmentToUndeclared { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` is not declared, did you mean `{} := ...`?",
                variable, variable
            )),
            ErrorImpl::AssignmentKindMismatch {
                variable,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "Variable `{}` holds `{}`, received `{}`; re-declare it to change its kind",
                variable, expected, received
            )),
            ErrorImpl::NonBooleanCondition { construct, received } => {
                ErrorTip::Suggestion(format!(
                    "The `{}` condition evaluated to `{}`, expected `Bool`",
                    construct, received
                ))
            }
            ErrorImpl::EmptySequence => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("assignment to undeclared variable {variable:?}")]
    AssignmentToUndeclared { variable: String },
    #[error("assignment to {variable:?} changes its kind: expected {expected}, received {received}")]
    AssignmentKindMismatch {
        variable: String,
        expected: Kind,
        received: Kind,
    },
    #[error("{construct} condition is not a boolean: received {received}")]
    NonBooleanCondition {
        construct: &'static str,
        received: Kind,
    },
    #[error("cannot build a statement sequence from zero statements")]
    EmptySequence,
}
