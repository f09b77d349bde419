#![allow(clippy::module_inception)]

use std::sync::Once;

use crate::{
    ast::{expressions::Expr, statements::Program, types::Type},
    errors::errors::{Error, ErrorTip},
    interpreter::{
        environment::Environment,
        expr::eval_expression,
        output::CapturedOutput,
        value::Value,
    },
    type_checker::{
        infer::infer_expression,
        type_checker::{CheckerConfig, TypeEnvironment},
    },
};

pub mod ast;
pub mod errors;
pub mod interpreter;
pub mod macros;
pub mod programs;
pub mod type_checker;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=scopewalk=debug` or
/// `RUST_LOG=scopewalk=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}

/// Everything one pass over a program produced.
#[derive(Debug)]
pub struct ProgramReport {
    pub code: String,
    pub type_check: bool,
    pub type_environment: TypeEnvironment,
    pub environment: Environment,
    pub output: CapturedOutput,
}

/// Pretty prints, type checks and evaluates a program, each against fresh
/// environments. The type check verdict does not stop evaluation.
pub fn run_program(program: &Program, config: CheckerConfig) -> ProgramReport {
    let code = program.pretty_print();

    let mut type_environment = TypeEnvironment::new();
    let type_check = program.check_with(config, &mut type_environment);

    let mut environment = Environment::new();
    let mut output = CapturedOutput::new();
    program.run(&mut environment, &mut output);

    ProgramReport {
        code,
        type_check,
        type_environment,
        environment,
        output,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionReport {
    pub code: String,
    pub value: Value,
    pub type_: Type,
}

/// Evaluates and infers a standalone expression under empty environments.
pub fn run_expression(expression: &Expr) -> ExpressionReport {
    ExpressionReport {
        code: expression.to_string(),
        value: eval_expression(expression, &Environment::new()),
        type_: infer_expression(expression, &TypeEnvironment::new()),
    }
}

pub fn format_error(error: &Error) -> String {
    /*
        Error: AssignmentKindMismatch (Variable `x` holds `Int`, received `Bool`; ...)
        -> x = false
    */

    let header = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };

    if error.get_snippet().is_empty() {
        header
    } else {
        format!("{}\n-> {}", header, first_line(error.get_snippet()))
    }
}

pub fn display_error(error: &Error) {
    println!("{}", format_error(error));
}

fn first_line(string: &str) -> &str {
    string.lines().next().unwrap_or(string)
}
