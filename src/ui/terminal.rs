//! Interactive terminal UI.

use console::Term;
use std::io::{self, Write};

use crate::error::Result;

use super::{
    prompt_user, should_use_colors, NonInteractiveUI, OutputMode, Prompt, PromptResult,
    StepflowTheme, UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: StepflowTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(mode: OutputMode, theme: StepflowTheme) -> Self {
        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(io::stderr(), "{}", self.theme.format_error(msg)).ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        prompt_user(prompt, &self.term)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_headers() {
            writeln!(self.term, "\n{}", self.theme.format_header(title)).ok();
        }
    }
}

/// Create the appropriate UI based on context.
///
/// Falls back to reading answers from stdin line by line when stdout is not
/// a terminal or interaction was disabled.
pub fn create_ui(interactive: bool, mode: OutputMode, color: bool) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        let theme = if color && should_use_colors() {
            StepflowTheme::new()
        } else {
            StepflowTheme::plain()
        };
        Box::new(TerminalUI::with_theme(mode, theme))
    } else {
        Box::new(NonInteractiveUI::stdin(mode))
    }
}
