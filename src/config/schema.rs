//! Settings file schema.

use serde::Deserialize;

use crate::ui::OutputMode;

/// Contents of a stepflow settings file.
///
/// Every field is optional; an absent field leaves the built-in default
/// or the command-line flag in charge.
///
/// ```yaml
/// output: quiet
/// color: false
/// interactive: true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Output verbosity: verbose, normal, quiet, silent
    pub output: Option<OutputMode>,

    /// Colored terminal output
    pub color: Option<bool>,

    /// Use the interactive terminal when stdout is a TTY
    pub interactive: Option<bool>,
}

/// Settings after command-line flags have been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub output: OutputMode,
    pub color: bool,
    pub interactive: bool,
}

impl Default for Resolved {
    fn default() -> Self {
        Self {
            output: OutputMode::Normal,
            color: true,
            interactive: true,
        }
    }
}

impl Settings {
    /// Fill unset fields from the defaults.
    pub fn resolve(&self) -> Resolved {
        let defaults = Resolved::default();
        Resolved {
            output: self.output.unwrap_or(defaults.output),
            color: self.color.unwrap_or(defaults.color),
            interactive: self.interactive.unwrap_or(defaults.interactive),
        }
    }
}
