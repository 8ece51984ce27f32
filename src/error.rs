//! Error types for stepflow operations.
//!
//! This module defines [`FlowError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A step that returns `Err(FlowError)` has hit a recoverable failure; the
//!   flow runner offers retry, skip, or abort.
//! - Step-local problems (missing file, bad operation) are not errors; they
//!   are reported by the step and surface as a soft outcome instead.
//! - The binary wraps these in `anyhow` at its top level.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for stepflow operations.
#[derive(Debug, Error)]
pub enum FlowError {
    /// The console input stream reached end of input.
    #[error("Input stream closed")]
    InputClosed,

    /// A prompt could not be shown or answered.
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// A flow with this name already exists in the store.
    #[error("Flow already exists: {name}")]
    DuplicateFlow { name: String },

    /// No flow with this name exists in the store.
    #[error("Flow not found: {name}")]
    FlowNotFound { name: String },

    /// A calculus step referenced something other than an earlier number input.
    #[error("Invalid input reference to step {index}: {reason}")]
    InvalidInputReference { index: usize, reason: String },

    /// Settings file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for stepflow operations.
pub type Result<T> = std::result::Result<T, FlowError>;
