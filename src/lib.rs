//! Stepflow - Build and replay interactive console flows.
//!
//! A flow is a named, ordered list of steps: titles, text, number prompts,
//! calculations over earlier prompts, file echoes, file writes and reports.
//! Flows can be run again and again; each run counts towards the flow's
//! analytics, and a failing step can be retried, skipped or abort the run.
//!
//! # Modules
//!
//! - [`cli`] - Command-line arguments, main menu and step builder
//! - [`config`] - Settings file loading
//! - [`error`] - Error types and result aliases
//! - [`runner`] - Flow execution and failure recovery
//! - [`state`] - The in-memory flow store
//! - [`steps`] - Step definitions and execution
//! - [`ui`] - Console ports: terminal, piped stdin and a test mock
//!
//! # Example
//!
//! ```
//! use stepflow::runner::Flow;
//! use stepflow::steps::executor::NUMBER_INPUT_KEY;
//! use stepflow::steps::Step;
//! use stepflow::ui::MockUI;
//!
//! let mut flow = Flow::new("sum");
//! let a = flow.add_number_input("First");
//! let b = flow.add_number_input("Second");
//! flow.add_step(Step::calculus(vec![a, b], "+")).unwrap();
//!
//! let mut ui = MockUI::new();
//! ui.queue_prompt_responses(NUMBER_INPUT_KEY, vec!["2", "40"]);
//! let report = flow.run(&mut ui).unwrap();
//!
//! assert!(report.completed());
//! assert!(ui.has_message("Calculus result: 42"));
//! assert_eq!(flow.stats().completions, 1);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod state;
pub mod steps;
pub mod ui;

pub use error::{FlowError, Result};
