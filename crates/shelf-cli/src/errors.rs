//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes so that scripts can tell a bad
//! argument apart from a damaged library file.

use std::fmt;

use shelf_core::ShelfError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config file, book, etc.)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput {
        message: String,
        hint: Option<String>,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\nHint: {}", message, hint),
            CliError::InvalidInput { message, hint } => match hint {
                Some(h) => write!(f, "{}\nHint: {}", message, h),
                None => write!(f, "{}", message),
            },
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }

    /// Create an InvalidInput error with a hint.
    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
        }
    }
}

/// Pick the exit code for any error reaching the top level.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<ShelfError>() {
        Some(ShelfError::Corrupt(_)) => exit_codes::CORRUPT_LIBRARY,
        Some(ShelfError::InvalidInput(_)) => exit_codes::INVALID_INPUT,
        _ => exit_codes::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_hint() {
        let err = CliError::not_found("Config not found", "Create ~/.config/shelf/config.toml");
        assert_eq!(
            err.to_string(),
            "Config not found\nHint: Create ~/.config/shelf/config.toml"
        );
        assert_eq!(CliError::invalid_input("bad").to_string(), "bad");
    }

    #[test]
    fn test_exit_codes() {
        let not_found: anyhow::Error = CliError::not_found("x", "y").into();
        assert_eq!(exit_code_for(&not_found), exit_codes::NOT_FOUND);

        let invalid: anyhow::Error = CliError::invalid_input("x").into();
        assert_eq!(exit_code_for(&invalid), exit_codes::INVALID_INPUT);

        let corrupt: anyhow::Error = ShelfError::Corrupt("x".to_string()).into();
        assert_eq!(exit_code_for(&corrupt), exit_codes::CORRUPT_LIBRARY);

        let other = anyhow::anyhow!("boom");
        assert_eq!(exit_code_for(&other), exit_codes::FAILURE);
    }
}
