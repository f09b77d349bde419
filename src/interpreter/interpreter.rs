use tracing::{debug, warn};

use crate::{ast::statements::Program, errors::errors::Error};

use super::{environment::Environment, output::Output, stmt::exec_block, value::Value};

/// State threaded through statement execution.
///
/// The environment is not part of it: every call receives the environment
/// of its own scope explicitly.
pub struct Interpreter<'a> {
    output: &'a mut dyn Output,
    printed: usize,
    diagnostics: usize,
}

impl<'a> Interpreter<'a> {
    pub fn new(output: &'a mut dyn Output) -> Self {
        Interpreter {
            output,
            printed: 0,
            diagnostics: 0,
        }
    }

    pub fn run_program(&mut self, program: &Program, environment: &mut Environment) {
        debug!(variables = environment.len(), "running program");
        exec_block(self, program.block(), environment);
        debug!(
            printed = self.printed,
            diagnostics = self.diagnostics,
            variables = environment.len(),
            "program finished"
        );
    }

    pub fn print_value(&mut self, value: Value) {
        self.printed += 1;
        self.output.print_line(&value.to_string());
    }

    pub fn report(&mut self, error: Error) {
        warn!(kind = error.get_error_name(), snippet = error.get_snippet(), "{}", error);
        self.diagnostics += 1;
        self.output.report(error);
    }

    pub fn diagnostics(&self) -> usize {
        self.diagnostics
    }
}
