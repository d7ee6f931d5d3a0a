use flexi_logger::{opt_format, Logger, LoggerHandle};

/// Start logging to stderr. `RUST_LOG` overrides `level` when set.
///
/// Keep the returned handle alive for the whole session. Logging is
/// optional, so a failure only prints a warning.
pub fn setup_logging(level: &str) -> Option<LoggerHandle> {
    let started = Logger::try_with_env_or_str(level)
        .and_then(|logger| logger.log_to_stderr().format(opt_format).start());

    match started {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("logging disabled: {}", e);
            None
        }
    }
}
