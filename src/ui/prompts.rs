//! Interactive prompts.

use console::Term;
use dialoguer::{Input, Select};

use crate::error::{FlowError, Result};

use super::{Prompt, PromptOption, PromptResult, PromptType};

/// Convert dialoguer errors to FlowError.
fn map_dialoguer_err(e: dialoguer::Error) -> FlowError {
    let io: std::io::Error = e.into();
    if io.kind() == std::io::ErrorKind::UnexpectedEof {
        FlowError::InputClosed
    } else {
        FlowError::Io(io)
    }
}

/// Prompt the user for input.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    match &prompt.prompt_type {
        PromptType::Input => prompt_input(prompt, term),
        PromptType::Select { options } => prompt_select(prompt, options, term),
    }
}

fn prompt_input(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    // Validation is left to the caller; any line is accepted here.
    let result: String = Input::<String>::new()
        .with_prompt(&prompt.question)
        .allow_empty(true)
        .interact_text_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(PromptResult::String(result))
}

fn prompt_select(prompt: &Prompt, options: &[PromptOption], term: &Term) -> Result<PromptResult> {
    if options.is_empty() {
        return Err(FlowError::Prompt {
            message: format!("select prompt '{}' has no options", prompt.key),
        });
    }

    let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();

    let selection = Select::new()
        .with_prompt(&prompt.question)
        .items(&labels)
        .default(0)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(PromptResult::String(options[selection].value.clone()))
}
