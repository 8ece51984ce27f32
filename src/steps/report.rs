//! Fixed-format report files written by output steps.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// `ctime`-style timestamp, e.g. `Sun Oct 18 09:05:00 2026`.
pub const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// A report whose creation time is fixed when it is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    path: PathBuf,
    title: String,
    description: String,
    content: String,
    created_at: DateTime<Local>,
}

impl Report {
    /// Build a report stamped with the current local time.
    pub fn new(
        path: impl Into<PathBuf>,
        title: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self::with_timestamp(path, title, description, content, Local::now())
    }

    /// Build a report with an explicit creation time.
    pub fn with_timestamp(
        path: impl Into<PathBuf>,
        title: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Local>,
    ) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            description: description.into(),
            content: content.into(),
            created_at,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render the file body.
    pub fn render(&self) -> String {
        format!(
            "Title: {}\nDescription: {}\nCreation Time: {}\nContent:\n{}\n",
            self.title,
            self.description,
            self.created_at.format(TIMESTAMP_FORMAT),
            self.content
        )
    }
}
