//! Interactive step builder.
//!
//! Asks which kind of step to add, then the parameters for that kind,
//! until the user picks Finish.

use std::str::FromStr;

use tracing::debug;

use crate::error::Result;
use crate::runner::Flow;
use crate::steps::{Operation, Step};
use crate::ui::{Prompt, PromptOption, UserInterface};

pub const STEP_TYPE_KEY: &str = "step_type";
pub const TITLE_KEY: &str = "step_title";
pub const SUBTITLE_KEY: &str = "step_subtitle";
pub const TEXT_KEY: &str = "step_text";
pub const DESCRIPTION_KEY: &str = "step_description";
pub const FILE_KEY: &str = "step_file";
pub const OPERATION_KEY: &str = "step_operation";
pub const CONTENT_KEY: &str = "step_content";

/// Step kinds offered by the builder, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Title,
    Text,
    NumberInput,
    Calculus,
    Display,
    TextFileInput,
    CsvFileInput,
    Output,
    End,
}

impl StepKind {
    pub const ALL: [StepKind; 9] = [
        StepKind::Title,
        StepKind::Text,
        StepKind::NumberInput,
        StepKind::Calculus,
        StepKind::Display,
        StepKind::TextFileInput,
        StepKind::CsvFileInput,
        StepKind::Output,
        StepKind::End,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title Step",
            Self::Text => "Text Step",
            Self::NumberInput => "Number Input Step",
            Self::Calculus => "Calculus Step",
            Self::Display => "Display Step",
            Self::TextFileInput => "Text File Input Step",
            Self::CsvFileInput => "CSV File Input Step",
            Self::Output => "Output Step",
            Self::End => "End Step",
        }
    }

    /// Matches [`Step::kind`] for the step this builds.
    pub fn value(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Text => "text",
            Self::NumberInput => "number_input",
            Self::Calculus => "calculus",
            Self::Display => "display",
            Self::TextFileInput => "text_file_input",
            Self::CsvFileInput => "csv_file_input",
            Self::Output => "output",
            Self::End => "end",
        }
    }
}

/// One answer to the step-type question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderChoice {
    Add(StepKind),
    Finish,
}

impl FromStr for BuilderChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s == "finish" || s == "0" {
            return Ok(Self::Finish);
        }
        StepKind::ALL
            .iter()
            .find(|kind| kind.value() == s)
            .map(|kind| Self::Add(*kind))
            .ok_or_else(|| format!("unknown step type: {}", s))
    }
}

fn step_type_prompt() -> Prompt {
    let mut options: Vec<PromptOption> = StepKind::ALL
        .iter()
        .map(|kind| PromptOption::new(kind.label(), kind.value()))
        .collect();
    options.push(PromptOption::new("Finish", "finish"));
    Prompt::select(STEP_TYPE_KEY, "Enter step type to add", options)
}

fn ask(ui: &mut dyn UserInterface, key: &str, question: &str) -> Result<String> {
    Ok(ui.prompt(&Prompt::input(key, question))?.into_string())
}

/// Add steps to `flow` until the user finishes.
pub fn build_steps(flow: &mut Flow, ui: &mut dyn UserInterface) -> Result<()> {
    let prompt = step_type_prompt();
    loop {
        ui.show_header("Available Step Types");
        let answer = ui.prompt(&prompt)?.into_string();
        match answer.parse::<BuilderChoice>() {
            Ok(BuilderChoice::Finish) => return Ok(()),
            Ok(BuilderChoice::Add(kind)) => add_step(flow, kind, ui)?,
            Err(reason) => {
                debug!("{}", reason);
                ui.warning("Invalid choice.");
            }
        }
    }
}

/// Ask for the parameters of one step kind and append it.
pub fn add_step(flow: &mut Flow, kind: StepKind, ui: &mut dyn UserInterface) -> Result<()> {
    let step = match kind {
        StepKind::Title => {
            let title = ask(ui, TITLE_KEY, "Enter title")?;
            let subtitle = ask(ui, SUBTITLE_KEY, "Enter subtitle")?;
            Step::title(title, subtitle)
        }
        StepKind::Text => {
            let title = ask(ui, TITLE_KEY, "Enter text step title")?;
            let body = ask(ui, TEXT_KEY, "Enter text")?;
            Step::text(title, body)
        }
        StepKind::NumberInput => {
            Step::number_input(ask(ui, DESCRIPTION_KEY, "Enter description for number input")?)
        }
        StepKind::Calculus => return add_calculus(flow, ui),
        StepKind::Display => Step::display(ask(ui, FILE_KEY, "Enter file name to display")?),
        StepKind::TextFileInput => {
            let description = ask(ui, DESCRIPTION_KEY, "Enter description")?;
            let path = ask(ui, FILE_KEY, "Enter file name")?;
            Step::text_file_input(description, path)
        }
        StepKind::CsvFileInput => {
            let description = ask(ui, DESCRIPTION_KEY, "Enter description")?;
            let path = ask(ui, FILE_KEY, "Enter file name")?;
            Step::csv_file_input(description, path)
        }
        StepKind::Output => {
            let path = ask(ui, FILE_KEY, "Enter file name")?;
            let title = ask(ui, TITLE_KEY, "Enter title")?;
            let description = ask(ui, DESCRIPTION_KEY, "Enter description")?;
            let content = ask(ui, CONTENT_KEY, "Enter content")?;
            Step::output(path, title, description, content)
        }
        StepKind::End => Step::End,
    };

    flow.add_step(step)?;
    Ok(())
}

/// Append two fresh number inputs and a calculus step that reads them.
fn add_calculus(flow: &mut Flow, ui: &mut dyn UserInterface) -> Result<()> {
    let answer = ask(ui, OPERATION_KEY, "Enter operation (+, -, *, /, min, max)")?;
    let operation = match Operation::ALL
        .iter()
        .find(|op| op.symbol() == answer.trim())
    {
        Some(op) => *op,
        None => {
            ui.warning("Invalid operation. Defaulting to addition.");
            Operation::Add
        }
    };

    let first = flow.add_number_input("Input 1");
    let second = flow.add_number_input("Input 2");
    flow.add_step(Step::calculus(vec![first, second], operation.symbol()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlowError;
    use crate::ui::MockUI;

    #[test]
    fn parses_choices() {
        let parse = |s: &str| s.parse::<BuilderChoice>();
        assert_eq!(parse("finish"), Ok(BuilderChoice::Finish));
        assert_eq!(parse("0"), Ok(BuilderChoice::Finish));
        assert_eq!(parse(" end "), Ok(BuilderChoice::Add(StepKind::End)));
        assert_eq!(
            parse("csv_file_input"),
            Ok(BuilderChoice::Add(StepKind::CsvFileInput))
        );
        assert!(parse("bogus").is_err());
    }

    #[test]
    fn kind_values_match_step_kinds() {
        let steps = [
            Step::title("", ""),
            Step::text("", ""),
            Step::number_input(""),
            Step::calculus(vec![], "+"),
            Step::display(""),
            Step::text_file_input("", ""),
            Step::csv_file_input("", ""),
            Step::output("", "", "", ""),
            Step::End,
        ];
        for (kind, step) in StepKind::ALL.iter().zip(steps.iter()) {
            assert_eq!(kind.value(), step.kind());
        }
    }

    #[test]
    fn builds_steps_until_finish() {
        let mut flow = Flow::new("f");
        let mut ui = MockUI::new();
        ui.queue_prompt_responses(STEP_TYPE_KEY, vec!["title", "text", "end", "finish"]);
        ui.queue_prompt_responses(TITLE_KEY, vec!["Hello", "Notes"]);
        ui.queue_prompt_responses(SUBTITLE_KEY, vec!["World"]);
        ui.queue_prompt_responses(TEXT_KEY, vec!["Some text"]);

        build_steps(&mut flow, &mut ui).unwrap();

        assert_eq!(
            flow.steps(),
            &[
                Step::title("Hello", "World"),
                Step::text("Notes", "Some text"),
                Step::End
            ]
        );
    }

    #[test]
    fn invalid_step_type_warns() {
        let mut flow = Flow::new("f");
        let mut ui = MockUI::new();
        ui.queue_prompt_responses(STEP_TYPE_KEY, vec!["42", "finish"]);

        build_steps(&mut flow, &mut ui).unwrap();

        assert!(ui.has_warning("Invalid choice."));
        assert!(flow.is_empty());
    }

    #[test]
    fn calculus_adds_two_inputs_and_links_them() {
        let mut flow = Flow::new("f");
        let mut ui = MockUI::new();
        ui.set_prompt_response(OPERATION_KEY, "max");

        add_step(&mut flow, StepKind::Calculus, &mut ui).unwrap();

        let steps = flow.steps();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0], Step::number_input("Input 1"));
        assert_eq!(steps[1], Step::number_input("Input 2"));
        match &steps[2] {
            Step::Calculus { inputs, operation } => {
                assert_eq!(operation, "max");
                let indices: Vec<_> = inputs.iter().map(|id| id.index()).collect();
                assert_eq!(indices, vec![0, 1]);
            }
            other => panic!("expected calculus step, got {:?}", other),
        }
    }

    #[test]
    fn invalid_operation_defaults_to_addition() {
        let mut flow = Flow::new("f");
        let mut ui = MockUI::new();
        ui.set_prompt_response(OPERATION_KEY, "pow");

        add_step(&mut flow, StepKind::Calculus, &mut ui).unwrap();

        assert!(ui.has_warning("Invalid operation. Defaulting to addition."));
        assert!(matches!(&flow.steps()[2], Step::Calculus { operation, .. } if operation == "+"));
    }

    #[test]
    fn short_operation_aliases_are_not_offered() {
        let mut flow = Flow::new("f");
        let mut ui = MockUI::new();
        ui.set_prompt_response(OPERATION_KEY, "m");

        add_step(&mut flow, StepKind::Calculus, &mut ui).unwrap();

        assert!(ui.has_warning("Defaulting to addition"));
    }

    #[test]
    fn output_step_asks_four_fields() {
        let mut flow = Flow::new("f");
        let mut ui = MockUI::new();
        ui.set_prompt_response(FILE_KEY, "report.txt");
        ui.set_prompt_response(TITLE_KEY, "Weekly");
        ui.set_prompt_response(DESCRIPTION_KEY, "Numbers");
        ui.set_prompt_response(CONTENT_KEY, "42");

        add_step(&mut flow, StepKind::Output, &mut ui).unwrap();

        match &flow.steps()[0] {
            Step::Output(report) => {
                assert_eq!(report.path().to_str(), Some("report.txt"));
                assert!(report.render().starts_with("Title: Weekly\nDescription: Numbers\n"));
                assert!(report.render().ends_with("Content:\n42\n"));
            }
            other => panic!("expected output step, got {:?}", other),
        }
    }

    #[test]
    fn output_step_is_not_written_while_building() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("report.txt");
        let mut flow = Flow::new("f");
        let mut ui = MockUI::new();
        ui.set_prompt_response(FILE_KEY, path.to_str().unwrap());
        ui.set_prompt_response(TITLE_KEY, "t");
        ui.set_prompt_response(DESCRIPTION_KEY, "d");
        ui.set_prompt_response(CONTENT_KEY, "c");

        add_step(&mut flow, StepKind::Output, &mut ui).unwrap();

        assert!(!path.exists());
        assert!(ui.successes().is_empty());
    }

    #[test]
    fn closed_input_stops_the_builder() {
        let mut flow = Flow::new("f");
        let mut ui = MockUI::new();
        ui.queue_prompt_responses(STEP_TYPE_KEY, vec!["display"]);

        let err = build_steps(&mut flow, &mut ui).unwrap_err();
        assert!(matches!(err, FlowError::InputClosed));
        assert!(flow.is_empty());
    }
}
