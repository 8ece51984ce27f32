//! Interactive recovery for step failures.
//!
//! When a step fails with a recoverable error during a flow run, this module
//! asks the user whether to retry the step, skip it, or abort the flow.

use std::str::FromStr;

use tracing::debug;

use crate::error::Result;
use crate::ui::{Prompt, UserInterface};

/// Prompt key for the recovery question.
pub const RECOVERY_KEY: &str = "recovery";

const RECOVERY_QUESTION: &str = "Choose action - Retry (r), Skip (s), Abort (a)";

/// Recovery action chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryAction {
    /// Re-execute the step.
    Retry,
    /// Skip this step and continue.
    Skip,
    /// Stop the flow.
    Abort,
}

impl FromStr for RecoveryAction {
    type Err = String;

    /// Accepts exactly one of `r`, `s`, `a` in either case, ignoring
    /// surrounding whitespace.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "r" | "R" => Ok(Self::Retry),
            "s" | "S" => Ok(Self::Skip),
            "a" | "A" => Ok(Self::Abort),
            other => Err(format!("unknown recovery action: {}", other)),
        }
    }
}

/// Prompt the user for a recovery action after a step failure.
///
/// Keeps asking until a valid action is given. Only a console failure
/// ends the loop early.
pub fn prompt_recovery(ui: &mut dyn UserInterface) -> Result<RecoveryAction> {
    let prompt = Prompt::input(RECOVERY_KEY, RECOVERY_QUESTION);
    loop {
        let answer = ui.prompt(&prompt)?.into_string();
        match answer.parse::<RecoveryAction>() {
            Ok(action) => {
                debug!("Recovery action chosen: {:?}", action);
                return Ok(action);
            }
            Err(reason) => {
                debug!("{}", reason);
                ui.warning("Invalid choice. Please enter 'r', 's', or 'a'.");
            }
        }
    }
}
