//! Log output for the `jira-sdk` binary.
//!
//! The library itself only emits `tracing` events: request dispatch at
//! `debug`, response status at `trace`, retries and insecure site URLs at
//! `warn`. Applications embedding the SDK install whatever subscriber they
//! like. The binary calls [`init`], which writes to a daily-rotated file so
//! stdout stays clean JSON.

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset: SDK events at info, everything
/// else (reqwest, hyper) only at warn.
const DEFAULT_LOG_FILTER: &str = "jira_sdk=info,warn";

const APP_DIR: &str = "jira-sdk";
const LOG_FILE_PREFIX: &str = "jira-sdk.log";

/// Install the binary's global subscriber.
///
/// Files go to `<local data dir>/jira-sdk/logs/jira-sdk.log.<date>`, e.g.
/// `~/.local/share/jira-sdk/logs/` on Linux. `RUST_LOG=jira_sdk=debug`
/// records every request the services send; `jira_sdk=trace` adds the
/// connector spans with method and URL.
///
/// # Errors
///
/// Fails if the log directory cannot be found or created, or a global
/// subscriber is already installed. The binary treats this as a warning.
pub fn init() -> anyhow::Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter);

    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "jira-sdk command started");
    tracing::debug!(log_dir = %log_dir.display(), "Writing logs");

    Ok(())
}

fn get_log_directory() -> anyhow::Result<PathBuf> {
    let base_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(base_dir.join(APP_DIR).join("logs"))
}

/// Where the binary writes its logs, if the platform has a data directory.
pub fn log_directory() -> Option<PathBuf> {
    get_log_directory().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_under_app_dir() {
        let dir = get_log_directory().unwrap();
        assert!(dir.ends_with("jira-sdk/logs"));
        assert_eq!(log_directory(), Some(dir));
    }

    #[test]
    fn test_default_filter_parses() {
        let filter = EnvFilter::try_new(DEFAULT_LOG_FILTER).unwrap();
        assert!(filter.to_string().contains("jira_sdk=info"));
    }
}
