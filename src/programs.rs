//! Hand-built example programs.
//!
//! Every program is assembled with the AST builders; the driver binary runs
//! them by name and the integration tests pin down their output.

use crate::ast::{
    builders::*,
    expressions::Expr,
    statements::{Block, Program},
};

pub struct Example {
    pub name: &'static str,
    pub description: &'static str,
    pub build: fn() -> Program,
}

pub struct ExpressionExample {
    pub name: &'static str,
    pub build: fn() -> Expr,
}

pub const PROGRAMS: &[Example] = &[
    Example {
        name: "fib",
        description: "fibonacci numbers below 50, a loop-local sum",
        build: fib,
    },
    Example {
        name: "multiply",
        description: "declarations and print",
        build: multiply,
    },
    Example {
        name: "count_to_three",
        description: "while loop assigning its counter",
        build: count_to_three,
    },
    Example {
        name: "if_scoping",
        description: "if-then-else scoping with || and negation",
        build: if_scoping,
    },
    Example {
        name: "and_short_circuit",
        description: "if-then-else scoping with a && that returns early",
        build: and_short_circuit,
    },
    Example {
        name: "while_scoping",
        description: "while loop scoping: assignments leak, re-declarations do not",
        build: while_scoping,
    },
    Example {
        name: "assign_kind_mismatch",
        description: "assigning a bool to an int is skipped",
        build: assign_kind_mismatch,
    },
    Example {
        name: "redeclare_kind",
        description: "re-declaring a variable with another kind",
        build: redeclare_kind,
    },
    Example {
        name: "undeclared",
        description: "printing a variable that was never declared",
        build: undeclared,
    },
    Example {
        name: "equal_kind_mismatch",
        description: "while condition comparing an int with a bool",
        build: equal_kind_mismatch,
    },
    Example {
        name: "assign_bool_to_int",
        description: "assignment changing kind without a print",
        build: assign_bool_to_int,
    },
    Example {
        name: "redeclare_from_expression",
        description: "re-declaring a variable from an expression using it",
        build: redeclare_from_expression,
    },
];

pub const EXPRESSIONS: &[ExpressionExample] = &[
    ExpressionExample {
        name: "arith",
        build: || plus(mult(number(1), number(2)), number(0)),
    },
    ExpressionExample {
        name: "and_mixed",
        build: || and(boolean(false), number(0)),
    },
    ExpressionExample {
        name: "or_mixed",
        build: || or(boolean(false), number(0)),
    },
    ExpressionExample {
        name: "nested_comparison",
        build: || {
            negation(negation(equal(
                lesser(number(3), number(5)),
                lesser(number(1), number(10)),
            )))
        },
    },
];

pub fn find_program(name: &str) -> Option<&'static Example> {
    PROGRAMS.iter().find(|example| example.name == name)
}

pub fn fib() -> Program {
    let body = block(crate::MK_SEQ!(
        declaration("sum", plus(variable("prev"), variable("result"))),
        assignment("prev", variable("result")),
        assignment("result", variable("sum")),
        print(variable("result")),
    ));

    crate::MK_PROGRAM!(
        declaration("prev", number(-1)),
        declaration("result", number(1)),
        while_loop(lesser(variable("result"), number(50)), body),
    )
}

pub fn multiply() -> Program {
    crate::MK_PROGRAM!(
        declaration("x", number(2)),
        declaration("y", mult(variable("x"), number(3))),
        print(variable("y")),
    )
}

pub fn count_to_three() -> Program {
    let body = block(crate::MK_SEQ!(
        print(variable("x")),
        assignment("x", plus(variable("x"), number(1))),
    ));

    crate::MK_PROGRAM!(
        declaration("x", number(0)),
        while_loop(lesser(variable("x"), number(3)), body),
    )
}

fn scoping_then_block() -> Block {
    block(crate::MK_SEQ!(
        assignment("x", plus(variable("x"), number(10))),
        declaration("y", number(7)),
        declaration("z", boolean(false)),
    ))
}

fn scoping_else_block() -> Block {
    block(crate::MK_SEQ!(
        declaration("y", number(7)),
        declaration("x", mult(number(7), variable("y"))),
        declaration("z", number(1)),
        assignment("x", plus(variable("x"), variable("z"))),
    ))
}

/// Prints 11, true, Undefined.
pub fn if_scoping() -> Program {
    // (x == 0) || ((!y) == false)
    let condition = or(
        equal(variable("x"), number(0)),
        equal(negation(variable("y")), boolean(false)),
    );

    crate::MK_PROGRAM!(
        declaration("x", number(1)),
        declaration("y", boolean(true)),
        if_then_else(condition, scoping_then_block(), scoping_else_block()),
        print(variable("x")),
        print(variable("y")),
        print(variable("z")),
    )
}

/// Prints 50, true, Undefined.
pub fn and_short_circuit() -> Program {
    // y == 0 is Undefined, but x == 0 is already false
    let condition = and(equal(variable("x"), number(0)), equal(variable("y"), number(0)));

    crate::MK_PROGRAM!(
        declaration("x", number(1)),
        declaration("y", boolean(true)),
        if_then_else(condition, scoping_then_block(), scoping_else_block()),
        print(variable("x")),
        print(variable("y")),
        print(variable("z")),
    )
}

pub fn while_scoping() -> Program {
    let body = block(crate::MK_SEQ!(
        assignment("i", plus(variable("i"), number(1))),
        declaration("j", boolean(true)),
        print(variable("i")),
        print(variable("j")),
    ));

    crate::MK_PROGRAM!(
        declaration("i", number(0)),
        declaration("j", number(5)),
        while_loop(lesser(variable("i"), variable("j")), body),
    )
}

pub fn assign_kind_mismatch() -> Program {
    crate::MK_PROGRAM!(
        declaration("x", number(4)),
        assignment("x", boolean(false)),
        print(variable("x")),
    )
}

pub fn redeclare_kind() -> Program {
    crate::MK_PROGRAM!(
        declaration("x", number(4)),
        declaration("x", boolean(false)),
        print(variable("x")),
    )
}

pub fn undeclared() -> Program {
    crate::MK_PROGRAM!(print(variable("x")))
}

pub fn equal_kind_mismatch() -> Program {
    crate::MK_PROGRAM!(
        declaration("x", number(4)),
        while_loop(
            equal(variable("x"), boolean(true)),
            block(print(variable("x"))),
        ),
    )
}

pub fn assign_bool_to_int() -> Program {
    crate::MK_PROGRAM!(declaration("x", number(5)), assignment("x", boolean(true)))
}

pub fn redeclare_from_expression() -> Program {
    crate::MK_PROGRAM!(
        declaration("x", number(5)),
        declaration("x", group(lesser(variable("x"), number(10)))),
        print(variable("x")),
    )
}
