//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, also used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const FAILURE: i32 = 1;

    /// Resource not found (config, library file).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Library file exists but could not be parsed.
    pub const CORRUPT_LIBRARY: i32 = 6;
}

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "SHELF_CONFIG";

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "SHELF_LOG";
