//! Integration tests for the whole pipeline.
//!
//! These tests run the example programs end to end: pretty printing, type
//! checking and evaluation, and verify the printed lines, the diagnostics and
//! the final environments.

use pretty_assertions::assert_eq;
use scopewalk::{
    ast::builders::*,
    errors::errors::ErrorImpl,
    format_error,
    interpreter::{
        output::OutputEvent,
        value::{mk_bool, mk_int, Kind},
    },
    programs::{self, find_program, EXPRESSIONS, PROGRAMS},
    run_expression, run_program,
    type_checker::type_checker::CheckerConfig,
    ProgramReport,
};

fn run_example(name: &str) -> ProgramReport {
    let example = find_program(name).unwrap();
    run_program(&(example.build)(), CheckerConfig::default())
}

#[test]
fn test_every_example_runs() {
    for example in PROGRAMS {
        let report = run_program(&(example.build)(), CheckerConfig::default());
        assert!(!report.code.is_empty(), "{} printed no code", example.name);
        assert!(report.code.starts_with('{'), "{} is not a block", example.name);
    }
}

#[test]
fn test_example_names_are_unique() {
    for (index, example) in PROGRAMS.iter().enumerate() {
        assert!(
            PROGRAMS[index + 1..].iter().all(|other| other.name != example.name),
            "duplicate example {}",
            example.name
        );
    }
    assert!(find_program("missing").is_none());
}

#[test]
fn test_fib() {
    let report = run_example("fib");

    assert!(report.type_check);
    assert_eq!(
        report.output.lines(),
        vec!["0", "1", "1", "2", "3", "5", "8", "13", "21", "34", "55"]
    );
    assert!(report.output.diagnostics().is_empty());
    assert_eq!(report.environment.get_variable("result"), Some(mk_int(55)));
    assert_eq!(report.environment.get_variable("prev"), Some(mk_int(34)));
    assert!(!report.environment.contains("sum"));
}

#[test]
fn test_fib_code() {
    let report = run_example("fib");

    assert_eq!(
        report.code,
        "{\nprev := -1;\nresult := 1;\nwhile (result<50){\nsum := (prev+result);\nprev = result;\nresult = sum;\nprint result\n}\n}"
    );
}

#[test]
fn test_multiply() {
    let report = run_example("multiply");

    assert!(report.type_check);
    assert_eq!(report.code, "{\nx := 2;\ny := (x*3);\nprint y\n}");
    assert_eq!(report.output.lines(), vec!["6"]);
}

#[test]
fn test_count_to_three() {
    let report = run_example("count_to_three");

    assert!(report.type_check);
    assert_eq!(report.output.lines(), vec!["0", "1", "2"]);
    assert_eq!(report.environment.get_variable("x"), Some(mk_int(3)));
}

#[test]
fn test_if_scoping() {
    let report = run_example("if_scoping");

    assert!(report.type_check);
    assert_eq!(report.output.lines(), vec!["11", "true", "Undefined"]);
    assert_eq!(report.environment.get_variable("x"), Some(mk_int(11)));
    assert_eq!(report.environment.get_variable("y"), Some(mk_bool(true)));
    assert!(!report.environment.contains("z"));
}

#[test]
fn test_and_short_circuit() {
    let report = run_example("and_short_circuit");

    // y == 0 compares a bool with an int, the checker rejects it
    assert!(!report.type_check);
    assert_eq!(report.output.lines(), vec!["50", "true", "Undefined"]);
    assert!(report.output.diagnostics().is_empty());
}

#[test]
fn test_while_scoping() {
    let report = run_example("while_scoping");

    assert!(report.type_check);
    assert_eq!(
        report.output.lines(),
        vec!["1", "true", "2", "true", "3", "true", "4", "true", "5", "true"]
    );
    assert_eq!(report.environment.get_variable("i"), Some(mk_int(5)));
    assert_eq!(report.environment.get_variable("j"), Some(mk_int(5)));
}

#[test]
fn test_assign_kind_mismatch() {
    let report = run_example("assign_kind_mismatch");

    assert!(!report.type_check);
    assert_eq!(report.output.lines(), vec!["4"]);

    let diagnostics = report.output.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].get_internal_error(),
        &ErrorImpl::AssignmentKindMismatch {
            variable: "x".to_string(),
            expected: Kind::Int,
            received: Kind::Bool,
        }
    );
    assert_eq!(diagnostics[0].get_snippet(), "x = false");
}

#[test]
fn test_diagnostic_comes_before_later_prints() {
    let report = run_example("assign_kind_mismatch");

    let events = report.output.events();
    assert_eq!(events.len(), 2);
    assert!(matches!(&events[0], OutputEvent::Diagnostic(_)));
    assert_eq!(events[1], OutputEvent::Line("4".to_string()));
}

#[test]
fn test_redeclare_kind() {
    let report = run_example("redeclare_kind");

    assert!(report.type_check);
    assert_eq!(report.output.lines(), vec!["false"]);
    assert!(report.output.diagnostics().is_empty());
}

#[test]
fn test_undeclared() {
    let report = run_example("undeclared");

    assert!(!report.type_check);
    assert_eq!(report.output.lines(), vec!["Undefined"]);
    assert!(report.environment.is_empty());
}

#[test]
fn test_equal_kind_mismatch() {
    let report = run_example("equal_kind_mismatch");

    assert!(!report.type_check);
    assert!(report.output.lines().is_empty());

    let diagnostics = report.output.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].get_internal_error(),
        &ErrorImpl::NonBooleanCondition {
            construct: "while",
            received: Kind::Undefined,
        }
    );
    assert_eq!(
        format_error(diagnostics[0]),
        "Error: NonBooleanCondition (The `while` condition evaluated to `Undefined`, expected `Bool`)\n-> while (x==true)"
    );
    assert_eq!(report.environment.get_variable("x"), Some(mk_int(4)));
}

#[test]
fn test_assign_bool_to_int() {
    let report = run_example("assign_bool_to_int");

    assert!(!report.type_check);
    assert!(report.output.lines().is_empty());
    assert_eq!(report.output.diagnostics().len(), 1);
    assert_eq!(report.environment.get_variable("x"), Some(mk_int(5)));
}

#[test]
fn test_redeclare_from_expression() {
    let report = run_example("redeclare_from_expression");

    assert!(report.type_check);
    assert_eq!(report.output.lines(), vec!["true"]);
    assert_eq!(report.environment.get_variable("x"), Some(mk_bool(true)));
}

#[test]
fn test_scoped_type_checking() {
    let report = run_program(&programs::if_scoping(), CheckerConfig::scoped());

    // z only exists inside the branches
    assert!(!report.type_check);
    assert!(!report.type_environment.contains("z"));
    // Evaluation does not depend on the checker configuration
    assert_eq!(report.output.lines(), vec!["11", "true", "Undefined"]);

    let report = run_program(&programs::while_scoping(), CheckerConfig::scoped());
    assert!(report.type_check);
    assert_eq!(
        report.type_environment.get_type("j").map(|ty| ty.to_string()),
        Some("Int".to_string())
    );
}

#[test]
fn test_expression_examples() {
    let reports: Vec<(String, String, String)> = EXPRESSIONS
        .iter()
        .map(|example| {
            let report = run_expression(&(example.build)());
            (report.code, report.value.to_string(), report.type_.to_string())
        })
        .collect();

    assert_eq!(
        reports,
        vec![
            ("((1*2)+0)".to_string(), "2".to_string(), "Int".to_string()),
            ("(false && 0)".to_string(), "false".to_string(), "Illtyped".to_string()),
            ("(false || 0)".to_string(), "Undefined".to_string(), "Illtyped".to_string()),
            (
                "(!(!((3<5)==(1<10))))".to_string(),
                "true".to_string(),
                "Bool".to_string()
            ),
        ]
    );
}

#[test]
fn test_built_program_with_generate_program() {
    let program = generate_program(vec![
        declaration("x", number(0)),
        while_loop(
            lesser(variable("x"), number(2)),
            block(sequence(
                declaration("x", boolean(true)),
                print(variable("x")),
            )),
        ),
    ])
    .unwrap();

    // Only printed: the re-declaration never leaks, so this loop never ends
    let code = program.pretty_print();
    assert_eq!(
        code,
        "{\nx := 0;\nwhile (x<2){\nx := true;\nprint x\n}\n}"
    );
}
