//! Logging and tracing initialization.
//!
//! Diagnostics go to a JSONL log file, never to stdout — stdout belongs to
//! command output (and, under `serve`, to the MCP protocol). The file
//! writer is non-blocking; keep the returned guard alive for the process
//! lifetime so buffered events flush on exit.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Environment variable naming an explicit log file path.
const ENV_LOG_PATH: &str = "SEOSCOPE_LOG_PATH";

/// Environment variable naming the log directory.
const ENV_LOG_DIR: &str = "SEOSCOPE_LOG_DIR";

/// Log file name used inside a log directory.
const LOG_FILE_NAME: &str = "seoscope.jsonl";

/// Where log output should be written.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Full path of the log file, or `None` to disable file logging.
    pub log_path: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve the log destination from environment variables with an
    /// optional config-file directory override.
    ///
    /// Precedence: `SEOSCOPE_LOG_PATH` > `SEOSCOPE_LOG_DIR` > the config
    /// `log_dir` > the platform data-local directory. Resolution cannot
    /// fail; when no home directory exists, file logging is disabled.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os(ENV_LOG_PATH).map(PathBuf::from).or_else(|| {
            std::env::var_os(ENV_LOG_DIR)
                .map(PathBuf::from)
                .or(config_log_dir)
                .or_else(default_log_dir)
                .map(|dir| dir.join(LOG_FILE_NAME))
        });
        Self { log_path }
    }
}

/// Build the env filter from CLI verbosity flags and the configured level.
///
/// `RUST_LOG` wins when set; otherwise `--quiet` forces `error`, each
/// `-v` raises the level (debug, then trace), and the config level is the
/// baseline.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(filter_directive(quiet, verbose, config_level))
}

/// Pick the base level directive from the verbosity flags.
fn filter_directive(quiet: bool, verbose: u8, config_level: &str) -> &str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Install the global tracing subscriber.
///
/// Returns the appender worker guard when file logging is active; dropping
/// it flushes and stops the background writer.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let Some(ref path) = config.log_path else {
        // No usable log destination; events are dropped.
        tracing_subscriber::registry().with(filter).init();
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    Ok(Some(guard))
}

/// Platform default log directory (`~/.local/share/seoscope` on Linux).
fn default_log_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "seoscope")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(filter_directive(true, 3, "info"), "error");
    }

    #[test]
    fn verbose_raises_level() {
        assert_eq!(filter_directive(false, 1, "info"), "debug");
        assert_eq!(filter_directive(false, 2, "info"), "trace");
    }

    #[test]
    fn config_level_is_baseline() {
        assert_eq!(filter_directive(false, 0, "warn"), "warn");
    }
}
