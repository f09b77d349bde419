//! Unit tests for error handling.
//!
//! This module contains tests for error names, tips and display.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::interpreter::value::Kind;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::AssignmentToUndeclared {
            variable: "x".to_string(),
        },
        "x = 1",
    );

    assert_eq!(error.get_error_name(), "AssignmentToUndeclared");
    assert_eq!(error.get_snippet(), "x = 1");
}

#[test]
fn test_kind_mismatch_error() {
    let error = Error::new(
        ErrorImpl::AssignmentKindMismatch {
            variable: "x".to_string(),
            expected: Kind::Int,
            received: Kind::Bool,
        },
        "x = false",
    );

    assert_eq!(error.get_error_name(), "AssignmentKindMismatch");
    assert_eq!(
        error.to_string(),
        "assignment to \"x\" changes its kind: expected Int, received Bool"
    );
}

#[test]
fn test_non_boolean_condition_error() {
    let error = Error::new(
        ErrorImpl::NonBooleanCondition {
            construct: "while",
            received: Kind::Undefined,
        },
        "(x==true)",
    );

    assert_eq!(error.get_error_name(), "NonBooleanCondition");
    assert_eq!(
        error.get_tip().to_string(),
        "The `while` condition evaluated to `Undefined`, expected `Bool`"
    );
}

#[test]
fn test_empty_sequence_error() {
    let error = Error::new(ErrorImpl::EmptySequence, "");

    assert_eq!(error.get_error_name(), "EmptySequence");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::AssignmentToUndeclared {
            variable: "y".to_string(),
        },
        "y = 2",
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("y := ...")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
