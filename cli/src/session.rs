//! One interactive session: a persistent variable mapping plus the shell
//! commands `vars`, `clear` and `exit`.

use std::collections::BTreeMap;
use uexpr::{BoolExprParser, Calculator, Diagnostic};

/// Which evaluator input lines are sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Calculator,
    Boolean,
}

/// What the front end should do after a line was handled.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// Nothing to print.
    Skip,
    /// Leave the shell.
    Exit,
    /// Print these lines.
    Output(Vec<String>),
    /// Render this diagnostic against the line that produced it.
    Error(Diagnostic),
}

pub struct Session {
    mode: Mode,
    // Sorted so `vars` lists bindings by name.
    variables: BTreeMap<String, f64>,
}

impl Session {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            variables: BTreeMap::new(),
        }
    }

    pub fn variables(&self) -> &BTreeMap<String, f64> {
        &self.variables
    }

    pub fn handle_line(&mut self, line: &str) -> Outcome {
        match line.trim() {
            "" => Outcome::Skip,
            "exit" => Outcome::Exit,
            "vars" => Outcome::Output(self.list_variables()),
            "clear" => {
                tracing::debug!(count = self.variables.len(), "clearing variables");
                self.variables.clear();
                Outcome::Skip
            }
            _ => self.evaluate(line),
        }
    }

    /// Evaluate `input` without interpreting shell commands.
    pub fn evaluate(&mut self, input: &str) -> Outcome {
        let result = match self.mode {
            Mode::Calculator => Calculator::new(&mut self.variables)
                .evaluate(input)
                .map(|value| value.to_string())
                .map_err(Diagnostic::from),
            Mode::Boolean => BoolExprParser::new()
                .evaluate(input)
                .map(|value| if value { "TRUE" } else { "FALSE" }.to_string())
                .map_err(Diagnostic::from),
        };
        match result {
            Ok(value) => Outcome::Output(vec![format!("Result: {}", value)]),
            Err(diagnostic) => Outcome::Error(diagnostic),
        }
    }

    fn list_variables(&self) -> Vec<String> {
        if self.variables.is_empty() {
            return Vec::new();
        }
        let mut lines = vec!["variables:".to_string()];
        lines.extend(
            self.variables
                .iter()
                .map(|(name, value)| format!("\t{} : {}", name, value)),
        );
        lines
    }
}
