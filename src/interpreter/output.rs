use crate::{display_error, errors::errors::Error};

/// Where `print` lines and non-fatal diagnostics go.
pub trait Output {
    /// One rendered value per executed `print`.
    fn print_line(&mut self, line: &str);
    /// A diagnostic for a statement whose effect was skipped.
    fn report(&mut self, error: Error);
}

/// Writes lines and diagnostics to stdout, in execution order.
#[derive(Debug, Default)]
pub struct StdOutput;

impl Output for StdOutput {
    fn print_line(&mut self, line: &str) {
        println!("{}", line);
    }

    fn report(&mut self, error: Error) {
        display_error(&error);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OutputEvent {
    Line(String),
    Diagnostic(Error),
}

/// Keeps everything in memory, in execution order.
#[derive(Debug, Default)]
pub struct CapturedOutput {
    events: Vec<OutputEvent>,
}

impl CapturedOutput {
    pub fn new() -> Self {
        CapturedOutput::default()
    }

    pub fn events(&self) -> &[OutputEvent] {
        &self.events
    }

    pub fn lines(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                OutputEvent::Line(line) => Some(line.as_str()),
                OutputEvent::Diagnostic(_) => None,
            })
            .collect()
    }

    pub fn diagnostics(&self) -> Vec<&Error> {
        self.events
            .iter()
            .filter_map(|event| match event {
                OutputEvent::Diagnostic(error) => Some(error),
                OutputEvent::Line(_) => None,
            })
            .collect()
    }
}

impl Output for CapturedOutput {
    fn print_line(&mut self, line: &str) {
        self.events.push(OutputEvent::Line(line.to_string()));
    }

    fn report(&mut self, error: Error) {
        self.events.push(OutputEvent::Diagnostic(error));
    }
}
