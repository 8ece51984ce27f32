//! Command-line interface for Stepflow.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`menu`] - The main menu loop over the flow store
//! - [`builder`] - Interactive construction of flow steps

pub mod args;
pub mod builder;
pub mod menu;

pub use args::Cli;
pub use builder::{build_steps, BuilderChoice, StepKind};
pub use menu::{Menu, MenuChoice};
