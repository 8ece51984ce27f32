//! Step execution.
//!
//! Executes a single step against a console port. Failures come in two
//! tiers:
//!
//! - `Ok(StepOutcome::SoftFailure(_))`: the step hit a local problem, told
//!   the user, and gave up. The flow moves on as if it completed.
//! - `Err(_)`: something the flow runner should offer to retry, skip, or
//!   abort.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::steps::calculus;
use crate::steps::inputs::InputRegistry;
use crate::steps::report::Report;
use crate::steps::tokenizer::{split_plain, split_quoted};
use crate::steps::Step;
use crate::ui::{Prompt, UserInterface};

/// Prompt key used by number-input steps.
pub const NUMBER_INPUT_KEY: &str = "number_input";

/// Prompt key used by text-file-input steps.
pub const TEXT_FILE_INPUT_KEY: &str = "text_file_input";

/// Status of a step in a flow run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Step is waiting to run.
    Pending,

    /// Step is currently executing.
    Running,

    /// Step completed (including step-local failures already reported).
    Completed,

    /// Step failed and is waiting on a recovery decision.
    Failed,

    /// Step failed and the user chose to skip it.
    Skipped,
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StepStatus::Pending => "pending",
            StepStatus::Running => "running",
            StepStatus::Completed => "completed",
            StepStatus::Failed => "failed",
            StepStatus::Skipped => "skipped",
        };
        write!(f, "{}", s)
    }
}

/// What a step reported back after running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step did its work.
    Completed,

    /// The step could not do its work and has already said why.
    SoftFailure(String),
}

impl StepOutcome {
    pub fn is_soft_failure(&self) -> bool {
        matches!(self, Self::SoftFailure(_))
    }
}

impl Step {
    /// Execute this step. See [`execute`].
    pub fn execute(
        &mut self,
        inputs: &InputRegistry<'_>,
        ui: &mut dyn UserInterface,
    ) -> Result<StepOutcome> {
        execute(self, inputs, ui)
    }
}

/// Execute a step.
///
/// `inputs` must cover every step before this one in its flow; calculus
/// steps resolve their handles through it.
pub fn execute(
    step: &mut Step,
    inputs: &InputRegistry<'_>,
    ui: &mut dyn UserInterface,
) -> Result<StepOutcome> {
    debug!("Executing {} step", step.kind());

    match step {
        Step::Title { title, subtitle } => {
            ui.message(&format!("Title: {}, Subtitle: {}", title, subtitle));
            Ok(StepOutcome::Completed)
        }
        Step::Text { title, body } => {
            ui.message(&format!("Title: {}", title));
            ui.message(&format!("Text: {}", body));
            Ok(StepOutcome::Completed)
        }
        Step::NumberInput { description, value } => {
            *value = read_number(description, ui)?;
            ui.message(&format!("You entered: {}", value));
            Ok(StepOutcome::Completed)
        }
        Step::Calculus {
            inputs: ids,
            operation,
        } => {
            let values = match inputs.values(ids) {
                Ok(values) => values,
                Err(missing) => {
                    return Ok(soft_failure(
                        ui,
                        format!("Calculus step error: input {} is not a number input.", missing),
                    ))
                }
            };
            match calculus::evaluate(operation, &values) {
                Ok(result) => {
                    ui.message(&format!("Calculus result: {}", result));
                    Ok(StepOutcome::Completed)
                }
                Err(e) => Ok(soft_failure(ui, e.to_string())),
            }
        }
        Step::Display { path } => echo_file(path, split_quoted, ui),
        Step::TextFileInput { description, path } => {
            ui.message(description);
            let answer = ui
                .prompt(&Prompt::input(TEXT_FILE_INPUT_KEY, "Enter text"))?
                .into_string();

            let mut file = match File::create(&*path) {
                Ok(file) => file,
                Err(e) => return Ok(open_failure(ui, path, e)),
            };
            file.write_all(answer.as_bytes())?;
            Ok(StepOutcome::Completed)
        }
        Step::CsvFileInput { description, path } => {
            ui.message(description);
            echo_file(path, split_plain, ui)
        }
        Step::Output(report) => write_report(report, ui),
        Step::End => {
            ui.message("End of the flow reached.");
            Ok(StepOutcome::Completed)
        }
    }
}

/// Prompt until the answer parses as a finite number.
fn read_number(description: &str, ui: &mut dyn UserInterface) -> Result<f64> {
    let mut prompt = Prompt::input(NUMBER_INPUT_KEY, description);
    loop {
        let answer = ui.prompt(&prompt)?.into_string();
        match answer.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => return Ok(value),
            _ => {
                debug!("Rejected number input {:?}", answer);
                ui.warning("Invalid input. Please enter a number.");
                prompt.question = "Please enter a number".to_string();
            }
        }
    }
}

/// Print every line of a file, tab-separated after tokenizing.
fn echo_file(
    path: &Path,
    tokenize: fn(&str) -> Vec<String>,
    ui: &mut dyn UserInterface,
) -> Result<StepOutcome> {
    let file = match open_for_reading(path) {
        Ok(file) => file,
        Err(e) => return Ok(open_failure(ui, path, e)),
    };

    for line in BufReader::new(file).lines() {
        let line = line?;
        ui.message(&tokenize(&line).join("\t"));
    }
    Ok(StepOutcome::Completed)
}

/// A directory opens fine on Unix and only fails on the first read, so it
/// is rejected up front.
fn open_for_reading(path: &Path) -> std::io::Result<File> {
    let file = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(std::io::Error::other("is a directory"));
    }
    Ok(file)
}

fn write_report(report: &Report, ui: &mut dyn UserInterface) -> Result<StepOutcome> {
    let mut file = match File::create(report.path()) {
        Ok(file) => file,
        Err(e) => {
            debug!("Cannot create {}: {}", report.path().display(), e);
            return Ok(soft_failure(
                ui,
                format!("Error creating file: {}", report.path().display()),
            ));
        }
    };
    file.write_all(report.render().as_bytes())?;
    ui.success(&format!("Output saved to {}", report.path().display()));
    Ok(StepOutcome::Completed)
}

fn open_failure(ui: &mut dyn UserInterface, path: &Path, e: std::io::Error) -> StepOutcome {
    debug!("Cannot open {}: {}", path.display(), e);
    soft_failure(ui, format!("Unable to open file: {}", path.display()))
}

fn soft_failure(ui: &mut dyn UserInterface, reason: String) -> StepOutcome {
    ui.error(&reason);
    StepOutcome::SoftFailure(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlowError;
    use crate::steps::StepId;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn run(step: &mut Step, ui: &mut MockUI) -> Result<StepOutcome> {
        execute(step, &InputRegistry::empty(), ui)
    }

    fn numbers(values: &[f64]) -> Vec<Step> {
        values
            .iter()
            .map(|&v| {
                let mut step = Step::number_input("n");
                step.set_number_value(v);
                step
            })
            .collect()
    }

    fn calculate(values: &[f64], op: &str) -> (StepOutcome, MockUI) {
        let preceding = numbers(values);
        let ids = (0..values.len()).map(StepId::new).collect();
        let mut step = Step::calculus(ids, op);
        let mut ui = MockUI::new();
        let outcome = execute(&mut step, &InputRegistry::new(&preceding), &mut ui).unwrap();
        (outcome, ui)
    }

    #[test]
    fn title_and_text_print() {
        let mut ui = MockUI::new();
        run(&mut Step::title("Intro", "Part 1"), &mut ui).unwrap();
        run(&mut Step::text("Note", "Read this"), &mut ui).unwrap();

        assert_eq!(
            ui.messages(),
            &["Title: Intro, Subtitle: Part 1", "Title: Note", "Text: Read this"]
        );
    }

    #[test]
    fn end_prints_marker() {
        let mut ui = MockUI::new();
        assert_eq!(run(&mut Step::End, &mut ui).unwrap(), StepOutcome::Completed);
        assert!(ui.has_message("End of the flow reached."));
    }

    #[test]
    fn number_input_stores_and_echoes() {
        let mut ui = MockUI::new();
        ui.set_prompt_response(NUMBER_INPUT_KEY, " 12.5 ");
        let mut step = Step::number_input("Weight");

        run(&mut step, &mut ui).unwrap();

        assert_eq!(step.number_value(), Some(12.5));
        assert!(ui.has_message("You entered: 12.5"));
    }

    #[test]
    fn number_input_reprompts_until_valid() {
        let mut ui = MockUI::new();
        ui.queue_prompt_responses(NUMBER_INPUT_KEY, vec!["abc", "", "NaN", "7"]);
        let mut step = Step::number_input("Count");

        run(&mut step, &mut ui).unwrap();

        assert_eq!(step.number_value(), Some(7.0));
        assert_eq!(ui.warnings().len(), 3);
        assert_eq!(ui.prompts_shown().len(), 4);
        assert!(ui.has_message("You entered: 7"));
    }

    #[test]
    fn number_input_prompt_failure_is_recoverable() {
        let mut ui = MockUI::new();
        ui.queue_prompt_failure(NUMBER_INPUT_KEY, "detached");
        let mut step = Step::number_input("Count");
        step.set_number_value(3.0);

        let err = run(&mut step, &mut ui).unwrap_err();

        assert!(matches!(err, FlowError::Prompt { .. }));
        assert_eq!(step.number_value(), Some(3.0));
    }

    #[test]
    fn calculus_prints_result() {
        let cases = [
            ("+", 9.0),
            ("-", 3.0),
            ("*", 18.0),
            ("/", 2.0),
            ("min", 3.0),
            ("max", 6.0),
        ];
        for (op, expected) in cases {
            let (outcome, ui) = calculate(&[6.0, 3.0], op);
            assert_eq!(outcome, StepOutcome::Completed, "op {}", op);
            assert_eq!(ui.messages(), &[format!("Calculus result: {}", expected)]);
        }
    }

    #[test]
    fn calculus_division_by_zero_is_soft() {
        let (outcome, ui) = calculate(&[6.0, 0.0], "/");
        assert!(outcome.is_soft_failure());
        assert!(ui.has_error("Division by zero"));
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn calculus_unknown_operation_is_soft() {
        let (outcome, ui) = calculate(&[1.0, 2.0], "^");
        assert_eq!(outcome, StepOutcome::SoftFailure("Unknown operation.".into()));
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn calculus_without_inputs_is_soft() {
        let (outcome, ui) = calculate(&[], "+");
        assert!(outcome.is_soft_failure());
        assert!(ui.has_error("No inputs provided"));
    }

    #[test]
    fn calculus_reads_values_lazily() {
        let mut preceding = numbers(&[1.0, 2.0]);
        let mut step = Step::calculus(vec![StepId::new(0), StepId::new(1)], "+");

        let mut ui = MockUI::new();
        execute(&mut step, &InputRegistry::new(&preceding), &mut ui).unwrap();
        preceding[1].set_number_value(10.0);
        execute(&mut step, &InputRegistry::new(&preceding), &mut ui).unwrap();

        assert_eq!(ui.messages(), &["Calculus result: 3", "Calculus result: 11"]);
    }

    #[test]
    fn display_uses_quote_aware_split() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("table.csv");
        fs::write(&path, "name,note\nann,\"likes, commas\"\n").unwrap();

        let mut ui = MockUI::new();
        let outcome = run(&mut Step::display(&path), &mut ui).unwrap();

        assert_eq!(outcome, StepOutcome::Completed);
        assert_eq!(ui.messages(), &["name\tnote", "ann\tlikes, commas"]);
    }

    #[test]
    fn display_missing_file_is_soft() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.csv");

        let mut ui = MockUI::new();
        let outcome = run(&mut Step::display(&path), &mut ui).unwrap();

        assert!(outcome.is_soft_failure());
        assert!(ui.has_error("Unable to open file"));
    }

    #[test]
    fn display_directory_is_an_open_failure() {
        let temp = TempDir::new().unwrap();

        let mut ui = MockUI::new();
        let outcome = run(&mut Step::display(temp.path()), &mut ui).unwrap();

        assert!(outcome.is_soft_failure());
        assert!(ui.has_error("Unable to open file"));
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn csv_file_input_directory_is_an_open_failure() {
        let temp = TempDir::new().unwrap();

        let mut ui = MockUI::new();
        let outcome = run(&mut Step::csv_file_input("Rows", temp.path()), &mut ui).unwrap();

        assert!(outcome.is_soft_failure());
        assert_eq!(ui.messages(), &["Rows"]);
    }

    #[test]
    fn display_invalid_utf8_is_recoverable() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("binary.csv");
        fs::write(&path, [0x66, 0x6f, 0xff, 0xfe, b'\n']).unwrap();

        let mut ui = MockUI::new();
        let err = run(&mut Step::display(&path), &mut ui).unwrap_err();
        assert!(matches!(err, FlowError::Io(_)));
    }

    #[test]
    fn csv_file_input_uses_plain_split() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.csv");
        fs::write(&path, "a,\"b,c\"\n1,2\n").unwrap();

        let mut ui = MockUI::new();
        run(&mut Step::csv_file_input("Loading data", &path), &mut ui).unwrap();

        assert_eq!(ui.messages(), &["Loading data", "a\t\"b\tc\"", "1\t2"]);
    }

    #[test]
    fn csv_file_input_missing_file_is_soft() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let outcome = run(
            &mut Step::csv_file_input("Loading", temp.path().join("missing.csv")),
            &mut ui,
        )
        .unwrap();
        assert!(outcome.is_soft_failure());
    }

    #[test]
    fn text_file_input_overwrites_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("note.txt");
        fs::write(&path, "old contents that are longer").unwrap();

        let mut ui = MockUI::new();
        ui.set_prompt_response(TEXT_FILE_INPUT_KEY, "hello, \"world\"");
        run(&mut Step::text_file_input("Write a note", &path), &mut ui).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello, \"world\"");
    }

    #[test]
    fn text_file_input_prints_description_before_asking() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("note.txt");

        let mut ui = MockUI::new();
        ui.set_prompt_response(TEXT_FILE_INPUT_KEY, "done");
        run(&mut Step::text_file_input("Write a note", &path), &mut ui).unwrap();

        assert_eq!(ui.messages(), &["Write a note"]);
        assert_eq!(ui.prompts_shown(), &[TEXT_FILE_INPUT_KEY]);
    }

    #[test]
    fn text_file_input_open_failure_is_soft() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("no_such_dir").join("note.txt");

        let mut ui = MockUI::new();
        ui.set_prompt_response(TEXT_FILE_INPUT_KEY, "x");
        let outcome = run(&mut Step::text_file_input("Write", &path), &mut ui).unwrap();

        assert!(outcome.is_soft_failure());
        assert!(ui.has_error("Unable to open file"));
    }

    #[test]
    fn output_writes_report() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("report.txt");

        let mut ui = MockUI::new();
        run(&mut Step::output(&path, "T", "D", "C"), &mut ui).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert!(lines[0].starts_with("Title: T"));
        assert!(lines[1].starts_with("Description: D"));
        assert!(lines[2].starts_with("Creation Time:"));
        assert_eq!(lines[3], "Content:");
        assert_eq!(lines[4], "C");
        assert!(ui.has_success("Output saved to"));
    }

    #[test]
    fn output_create_failure_is_soft() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing_dir").join("report.txt");

        let mut ui = MockUI::new();
        let outcome = run(&mut Step::output(&path, "T", "D", "C"), &mut ui).unwrap();

        assert!(outcome.is_soft_failure());
        assert!(ui.has_error("Error creating file"));
    }

    #[test]
    fn step_status_display() {
        assert_eq!(StepStatus::Skipped.to_string(), "skipped");
        assert_eq!(StepStatus::Failed.to_string(), "failed");
    }
}
