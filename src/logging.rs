//! Logging bootstrap for the command-line binary
//!
//! The library only talks to the `log` facade. The binary installs a
//! `flexi_logger` backend writing to stderr; `RUST_LOG` overrides the level.
//! In the browser build the WASM entry point installs `console_log` instead.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

/// Default log specification for normal runs
pub const DEFAULT_SPEC: &str = "info";

/// Log specification with `-v`
pub const VERBOSE_SPEC: &str = "debug";

/// Level specification for the given verbosity
pub fn log_spec(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_SPEC
    } else {
        DEFAULT_SPEC
    }
}

/// Start stderr logging. Keep the returned handle alive for the whole run.
pub fn init_logging(verbose: bool) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(log_spec(verbose))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_spec() {
        assert_eq!(log_spec(false), "info");
        assert_eq!(log_spec(true), "debug");
    }
}
