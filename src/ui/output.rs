//! Output verbosity.

use serde::Deserialize;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Show everything, including headers.
    Verbose,
    /// Show step output and status.
    #[default]
    Normal,
    /// Show step output only; no headers.
    Quiet,
    /// Show nothing except errors and prompts.
    Silent,
}

impl OutputMode {
    /// Check if this mode shows headers and banners.
    pub fn shows_headers(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}
