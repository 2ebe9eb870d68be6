use std::path::PathBuf;

use anyhow::{Context, Result};
use flexi_logger::{FileSpec, Logger, LoggerHandle};

const LOG_FILE_BASENAME: &str = "moodboard";

pub enum LogTarget {
    Stderr,
    /// Used while the dashboard owns the terminal.
    File(PathBuf),
}

/// Maps `-v` occurrences to a log spec; `RUST_LOG` wins when set.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Starts the logger. Keep the returned handle alive for the whole run.
pub fn init(verbosity: u8, target: LogTarget) -> Result<LoggerHandle> {
    let logger = Logger::try_with_env_or_str(level_for(verbosity))
        .context("Invalid log specification")?;

    let logger = match target {
        LogTarget::Stderr => logger.log_to_stderr(),
        LogTarget::File(dir) => logger
            .log_to_file(
                FileSpec::default()
                    .directory(dir)
                    .basename(LOG_FILE_BASENAME)
                    .suppress_timestamp(),
            )
            .append(),
    };

    logger.start().context("Failed to start logger")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(9), "debug");
    }
}
