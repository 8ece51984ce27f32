//! Line-oriented UI for piped input.
//!
//! Answers are read one line at a time from any [`BufRead`]. This is what
//! the binary uses when stdout is not a terminal, which makes the tool
//! scriptable with plain `echo ... | stepflow`.

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use crate::error::{FlowError, Result};

use super::{OutputMode, Prompt, PromptOption, PromptResult, PromptType, UserInterface};

/// UI implementation that reads answers line by line.
pub struct NonInteractiveUI<R = StdinLock<'static>, W = Stdout> {
    mode: OutputMode,
    input: R,
    out: W,
}

impl NonInteractiveUI {
    /// Read from stdin and write to stdout.
    pub fn stdin(mode: OutputMode) -> Self {
        Self::new(mode, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> NonInteractiveUI<R, W> {
    /// Create with explicit reader and writer (for testing).
    pub fn new(mode: OutputMode, input: R, out: W) -> Self {
        Self { mode, input, out }
    }

    /// Consume the UI, returning the writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Read one line. Bytes that are not UTF-8 are replaced, so a garbled
    /// line is just an answer the caller will reject.
    fn read_answer(&mut self) -> Result<String> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(FlowError::InputClosed);
        }
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

/// Resolve a typed answer against select options.
///
/// Accepts a 1-based index or an option value; anything else is returned
/// verbatim so the caller can report it as invalid.
fn resolve_selection(answer: &str, options: &[PromptOption]) -> String {
    let trimmed = answer.trim();
    if let Ok(n) = trimmed.parse::<usize>() {
        if (1..=options.len()).contains(&n) {
            return options[n - 1].value.clone();
        }
    }
    options
        .iter()
        .find(|o| o.value == trimmed)
        .map(|o| o.value.clone())
        .unwrap_or_else(|| trimmed.to_string())
}

impl<R: BufRead, W: Write> UserInterface for NonInteractiveUI<R, W> {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "✓ {}", msg).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "⚠ {}", msg).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        if let PromptType::Select { options } = &prompt.prompt_type {
            for (i, option) in options.iter().enumerate() {
                writeln!(self.out, "{}. {}", i + 1, option.label)?;
            }
        }
        write!(self.out, "{}: ", prompt.question)?;
        self.out.flush()?;

        let answer = self.read_answer()?;
        match &prompt.prompt_type {
            PromptType::Input => Ok(PromptResult::String(answer)),
            PromptType::Select { options } => {
                Ok(PromptResult::String(resolve_selection(&answer, options)))
            }
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_headers() {
            writeln!(self.out, "\n--- {} ---", title).ok();
        }
    }
}
