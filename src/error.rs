//! Error types for list-pager
//!
//! The pagination core itself never fails. These errors cover the outer
//! layers: loading metadata, parsing CLI input and writing output.

use thiserror::Error;

/// The main error type for list-pager
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Command Errors
    // ============================================================================
    #[error("Unknown command '{command}'")]
    UnknownCommand { command: String },

    #[error("Invalid arguments for '{command}': {message}")]
    InvalidArguments { command: String, message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an unknown command error
    pub fn unknown_command(command: impl Into<String>) -> Self {
        Self::UnknownCommand {
            command: command.into(),
        }
    }

    /// Create an invalid arguments error
    pub fn invalid_arguments(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Check if the error came from user input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownCommand { .. }
                | Error::InvalidArguments { .. }
                | Error::MissingConfigField { .. }
                | Error::YamlParse(_)
                | Error::JsonParse(_)
        )
    }

    /// Process exit code for this error
    ///
    /// Bad input exits with 2, the same code clap uses for usage errors.
    pub fn exit_code(&self) -> i32 {
        if self.is_input_error() {
            2
        } else {
            1
        }
    }
}

/// Result type alias for list-pager
pub type Result<T> = std::result::Result<T, Error>;
