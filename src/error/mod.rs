// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the cml application.
//!
//! Lint findings are not errors: they are reported as violations. The types
//! here cover operational failures such as unreadable input or a broken
//! configuration file.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cml operations.
#[derive(Error, Debug)]
pub enum CmlError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Input errors
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    // Template rendering errors
    #[error("Template error: {0}")]
    Template(String),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {path} (use --force to overwrite)")]
    AlreadyExists { path: PathBuf },
}

/// Errors raised while reading a commit message.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("{path} is not valid UTF-8")]
    NotUtf8 { path: String },
}

impl From<handlebars::RenderError> for CmlError {
    fn from(err: handlebars::RenderError) -> Self {
        CmlError::Template(err.to_string())
    }
}

impl From<handlebars::TemplateError> for CmlError {
    fn from(err: handlebars::TemplateError) -> Self {
        CmlError::Template(err.to_string())
    }
}

/// Result type alias for cml operations.
pub type Result<T> = std::result::Result<T, CmlError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CmlError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
