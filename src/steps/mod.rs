//! Step definitions and execution.
//!
//! This module provides the units of work a flow is built from:
//!
//! - [`Step`] - The nine step kinds, as one closed enum
//! - [`execute`](executor::execute) - Run a step against a console port
//! - [`StepOutcome`] - Completed, or a step-local failure already reported
//! - [`StepId`] / [`InputRegistry`] - How calculus steps find their inputs
//! - [`tokenizer`] - Field splitters used by the file-echo steps
//!
//! # Example
//!
//! ```
//! use stepflow::steps::{InputRegistry, Step, StepOutcome};
//! use stepflow::ui::MockUI;
//!
//! let mut step = Step::title("Welcome", "Daily numbers");
//! let mut ui = MockUI::new();
//!
//! let outcome = step.execute(&InputRegistry::empty(), &mut ui).unwrap();
//! assert_eq!(outcome, StepOutcome::Completed);
//! assert!(ui.has_message("Title: Welcome, Subtitle: Daily numbers"));
//! ```

pub mod calculus;
pub mod executor;
pub mod inputs;
pub mod report;
pub mod tokenizer;

pub use calculus::{evaluate, CalcError, Operation};
pub use executor::{execute, StepOutcome, StepStatus};
pub use inputs::{InputRegistry, StepId};
pub use report::Report;

use std::path::PathBuf;

/// One executable unit within a flow.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Prints a title and subtitle.
    Title { title: String, subtitle: String },

    /// Prints a titled block of text.
    Text { title: String, body: String },

    /// Prompts for a number and keeps the latest answer.
    NumberInput { description: String, value: f64 },

    /// Folds the current values of earlier number inputs.
    Calculus {
        inputs: Vec<StepId>,
        operation: String,
    },

    /// Prints a file, splitting lines with the quote-aware tokenizer.
    Display { path: PathBuf },

    /// Overwrites a file with one line typed by the user.
    TextFileInput { description: String, path: PathBuf },

    /// Prints a CSV file, splitting lines on every comma.
    CsvFileInput { description: String, path: PathBuf },

    /// Writes a report file.
    Output(Report),

    /// Marks the end of the flow.
    End,
}

impl Step {
    pub fn title(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self::Title {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }

    pub fn text(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Text {
            title: title.into(),
            body: body.into(),
        }
    }

    /// A number input whose value starts at zero.
    pub fn number_input(description: impl Into<String>) -> Self {
        Self::NumberInput {
            description: description.into(),
            value: 0.0,
        }
    }

    /// A calculus step over `inputs`, using the operation named by `operation`.
    ///
    /// The symbol is not checked here; an unknown one is reported when the
    /// step runs.
    pub fn calculus(inputs: Vec<StepId>, operation: impl Into<String>) -> Self {
        Self::Calculus {
            inputs,
            operation: operation.into(),
        }
    }

    pub fn display(path: impl Into<PathBuf>) -> Self {
        Self::Display { path: path.into() }
    }

    pub fn text_file_input(description: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::TextFileInput {
            description: description.into(),
            path: path.into(),
        }
    }

    pub fn csv_file_input(description: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::CsvFileInput {
            description: description.into(),
            path: path.into(),
        }
    }

    /// An output step; its creation time is captured now.
    pub fn output(
        path: impl Into<PathBuf>,
        title: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self::Output(Report::new(path, title, description, content))
    }

    /// Short name of the step kind, used in logs and listings.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Title { .. } => "title",
            Self::Text { .. } => "text",
            Self::NumberInput { .. } => "number_input",
            Self::Calculus { .. } => "calculus",
            Self::Display { .. } => "display",
            Self::TextFileInput { .. } => "text_file_input",
            Self::CsvFileInput { .. } => "csv_file_input",
            Self::Output(_) => "output",
            Self::End => "end",
        }
    }

    /// Latest value if this is a number input.
    pub fn number_value(&self) -> Option<f64> {
        match self {
            Self::NumberInput { value, .. } => Some(*value),
            _ => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_number_value(&mut self, new_value: f64) {
        if let Self::NumberInput { value, .. } = self {
            *value = new_value;
        }
    }

    /// Handles this step reads from, if any.
    pub fn dependencies(&self) -> &[StepId] {
        match self {
            Self::Calculus { inputs, .. } => inputs,
            _ => &[],
        }
    }
}
