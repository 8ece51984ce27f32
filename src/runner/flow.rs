//! Flow definition and execution.

use chrono::{DateTime, Local};
use tracing::{debug, warn};

use crate::error::{FlowError, Result};
use crate::steps::report::TIMESTAMP_FORMAT;
use crate::steps::{InputRegistry, Step, StepId, StepOutcome, StepStatus};
use crate::ui::UserInterface;

use super::recovery::{self, RecoveryAction};

/// Run counters for a flow. They never decrease.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlowStats {
    /// Times `run` was called.
    pub starts: u64,
    /// Runs that reached the end without an abort.
    pub completions: u64,
    /// Failed steps the user chose to skip.
    pub skipped_steps: u64,
    /// Times the recovery prompt was shown.
    pub error_screens: u64,
    /// Errors tallied against completions. Nothing increments this yet.
    pub total_errors: u64,
}

impl FlowStats {
    /// Average of `total_errors` over completed runs, or 0 with none.
    pub fn average_errors_per_completion(&self) -> f64 {
        if self.completions == 0 {
            0.0
        } else {
            self.total_errors as f64 / self.completions as f64
        }
    }
}

/// Result of one call to [`Flow::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Whether the user aborted during recovery.
    pub aborted: bool,
    /// Final status of every step, in flow order. Steps after an abort stay
    /// `Pending`.
    pub statuses: Vec<StepStatus>,
}

impl RunReport {
    /// Whether the run reached the end of the flow.
    pub fn completed(&self) -> bool {
        !self.aborted
    }
}

/// A named, ordered, replayable sequence of steps.
#[derive(Debug, Clone)]
pub struct Flow {
    name: String,
    created_at: DateTime<Local>,
    steps: Vec<Step>,
    stats: FlowStats,
}

impl Flow {
    /// Create an empty flow.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created_at: Local::now(),
            steps: Vec::new(),
            stats: FlowStats::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn stats(&self) -> FlowStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Append a step, returning its handle.
    ///
    /// A calculus step may only reference number-input steps that are
    /// already in this flow.
    pub fn add_step(&mut self, step: Step) -> Result<StepId> {
        for dep in step.dependencies() {
            match self.steps.get(dep.index()) {
                Some(Step::NumberInput { .. }) => {}
                Some(other) => {
                    return Err(FlowError::InvalidInputReference {
                        index: dep.index(),
                        reason: format!("{} step is not a number input", other.kind()),
                    })
                }
                None => {
                    return Err(FlowError::InvalidInputReference {
                        index: dep.index(),
                        reason: "no such step earlier in the flow".to_string(),
                    })
                }
            }
        }

        let id = StepId::new(self.steps.len());
        debug!("Flow '{}': added {} step {}", self.name, step.kind(), id);
        self.steps.push(step);
        Ok(id)
    }

    /// Append a number-input step, returning the handle a calculus step
    /// needs to read it.
    pub fn add_number_input(&mut self, description: impl Into<String>) -> StepId {
        let id = StepId::new(self.steps.len());
        self.steps.push(Step::number_input(description));
        id
    }

    /// Execute every step in order.
    ///
    /// A step that fails with an error opens the recovery prompt:
    /// retry re-runs it, skip moves on, abort stops the run without
    /// counting a completion. Returns `Err` only if the console fails
    /// while the recovery prompt is open.
    pub fn run(&mut self, ui: &mut dyn UserInterface) -> Result<RunReport> {
        self.stats.starts += 1;
        debug!("Flow '{}': run #{} started", self.name, self.stats.starts);

        let mut statuses = vec![StepStatus::Pending; self.steps.len()];

        for index in 0..self.steps.len() {
            let (before, rest) = self.steps.split_at_mut(index);
            let step = &mut rest[0];
            let inputs = InputRegistry::new(before);

            loop {
                statuses[index] = StepStatus::Running;

                let err = match step.execute(&inputs, ui) {
                    Ok(outcome) => {
                        if let StepOutcome::SoftFailure(reason) = outcome {
                            debug!("Step {} gave up: {}", index + 1, reason);
                        }
                        statuses[index] = StepStatus::Completed;
                        break;
                    }
                    Err(e) => e,
                };

                statuses[index] = StepStatus::Failed;
                warn!("Step {} ({}) failed: {}", index + 1, step.kind(), err);
                ui.error(&format!("An error occurred during step execution: {}", err));
                self.stats.error_screens += 1;

                match recovery::prompt_recovery(ui)? {
                    RecoveryAction::Retry => continue,
                    RecoveryAction::Skip => {
                        self.stats.skipped_steps += 1;
                        statuses[index] = StepStatus::Skipped;
                        break;
                    }
                    RecoveryAction::Abort => {
                        ui.warning("Flow execution aborted by the user.");
                        return Ok(RunReport {
                            aborted: true,
                            statuses,
                        });
                    }
                }
            }
            debug!("Step {} {}", index + 1, statuses[index]);
        }

        self.stats.completions += 1;
        ui.success("Flow completed successfully.");
        Ok(RunReport {
            aborted: false,
            statuses,
        })
    }

    /// Print the run counters.
    pub fn display_analytics(&self, ui: &mut dyn UserInterface) {
        let stats = &self.stats;
        ui.message(&format!("Flow: {}", self.name));
        ui.message(&format!(
            "Created: {}",
            self.created_at.format(TIMESTAMP_FORMAT)
        ));
        ui.message(&format!(
            "Started: {}, Completed: {}",
            stats.starts, stats.completions
        ));
        ui.message(&format!(
            "Skipped Steps: {}, Error Screens: {}",
            stats.skipped_steps, stats.error_screens
        ));
        ui.message(&format!(
            "Average Errors per Completion: {}",
            stats.average_errors_per_completion()
        ));
    }
}
