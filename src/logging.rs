//! Logger bootstrap for the command-line binary.
//!
//! The library only talks to the `log` facade. The binary installs a
//! `flexi_logger` backend writing to stderr, so stdout carries results only.

use flexi_logger::{Logger, LoggerHandle};

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Starts stderr logging with a level or a full logger spec ("info",
/// "unitconv::extract=debug"). Keep the returned handle alive for the
/// lifetime of the process.
///
/// # Errors
/// Returns a human-readable message when the spec is invalid or the backend
/// cannot start.
pub fn init_logging(spec: &str) -> Result<LoggerHandle, String> {
    let spec = normalize_spec(spec);
    Logger::try_with_str(&spec)
        .map_err(|err| format!("invalid log level `{}`: {}", spec, err))?
        .log_to_stderr()
        .start()
        .map_err(|err| format!("failed to start logger: {}", err))
}

fn normalize_spec(spec: &str) -> String {
    let trimmed = spec.trim();
    if trimmed.is_empty() {
        DEFAULT_LOG_LEVEL.to_string()
    } else {
        trimmed.to_lowercase()
    }
}
