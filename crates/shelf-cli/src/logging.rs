//! Logging bootstrap for the CLI.
//!
//! Logs go to stderr so they never mix with table or JSON output. The level
//! is `warn` unless raised with `-v`/`-vv`; `SHELF_LOG` takes a full
//! flexi_logger spec (e.g. `shelf_core=debug`) and wins over the flags.

use flexi_logger::{Logger, LoggerHandle};
use log::debug;

use crate::constants::LOG_ENV;

/// Map the `-v` count to a log level.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn log_spec(verbose: u8) -> String {
    std::env::var(LOG_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| level_for_verbosity(verbose).to_string())
}

/// Start the stderr logger. The returned handle must stay alive for the
/// process lifetime.
///
/// Failure to start logging is reported and otherwise ignored.
pub fn init_logging(verbose: u8) -> Option<LoggerHandle> {
    let spec = log_spec(verbose);
    let started = Logger::try_with_str(&spec).and_then(|logger| {
        logger
            .log_to_stderr()
            .format(flexi_logger::default_format)
            .start()
    });
    match started {
        Ok(handle) => {
            debug!("event=cli_start version={} log_spec={}", shelf_core::VERSION, spec);
            Some(handle)
        }
        Err(err) => {
            eprintln!("Warning: logging disabled: {}", err);
            None
        }
    }
}
