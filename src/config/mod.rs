//! Settings for the stepflow binary.
//!
//! Settings come from an optional YAML file named with `--config`.
//! Command-line flags override whatever the file sets.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use stepflow::config::parse_settings;
//! use stepflow::ui::OutputMode;
//!
//! let settings = parse_settings("output: quiet", Path::new("stepflow.yml")).unwrap();
//! assert_eq!(settings.resolve().output, OutputMode::Quiet);
//! assert!(settings.resolve().color);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_settings, parse_settings};
pub use schema::{Resolved, Settings};
