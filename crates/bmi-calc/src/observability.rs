//! Logging and tracing setup.
//!
//! Logs go to stderr unless a log file location is configured, in which case
//! they are written as JSON lines through a non-blocking appender. Stdout is
//! never used so `--json` output and the MCP stdio transport stay clean.

use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Explicit log file path.
const ENV_LOG_PATH: &str = "BMI_CALC_LOG_PATH";
/// Directory for daily-rolled log files.
const ENV_LOG_DIR: &str = "BMI_CALC_LOG_DIR";
/// File name prefix used inside a log directory.
const LOG_FILE_NAME: &str = "bmi-calc.jsonl";

/// Where log output should go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Write to exactly this file (wins over `log_dir`).
    pub log_path: Option<PathBuf>,
    /// Write daily-rolled files into this directory.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read `BMI_CALC_LOG_PATH` / `BMI_CALC_LOG_DIR`, falling back to the
    /// configured `log_dir` when the environment sets no directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::from_lookup(|key| std::env::var_os(key), config_log_dir)
    }

    fn from_lookup<F>(lookup: F, config_log_dir: Option<PathBuf>) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);
        Self {
            log_path: non_empty(ENV_LOG_PATH),
            log_dir: non_empty(ENV_LOG_DIR).or(config_log_dir),
        }
    }
}

/// Build the level filter.
///
/// `-q` and `-v` flags win, then `RUST_LOG`, then the configured level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Some(level) = flag_level(quiet, verbose) {
        return EnvFilter::new(level);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_level))
}

fn flag_level(quiet: bool, verbose: u8) -> Option<&'static str> {
    match (quiet, verbose) {
        (true, _) => Some("error"),
        (false, 0) => None,
        (false, 1) => Some("debug"),
        (false, _) => Some("trace"),
    }
}

/// Install the global subscriber.
///
/// Returns the appender guard when logging to a file; keep it alive for the
/// life of the process so buffered lines are flushed on exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let appender = if let Some(ref path) = config.log_path {
        let (dir, file_name) = split_log_path(path)?;
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        tracing_appender::rolling::never(dir, file_name)
    } else if let Some(ref dir) = config.log_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        tracing_appender::rolling::daily(dir, LOG_FILE_NAME)
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_target(false)
                    .compact(),
            )
            .try_init()
            .context("failed to install tracing subscriber")?;
        return Ok(None);
    };

    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_writer(writer))
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(Some(guard))
}

/// Split an explicit log path into its directory and file name.
fn split_log_path(path: &Path) -> anyhow::Result<(PathBuf, OsString)> {
    let file_name = path
        .file_name()
        .with_context(|| format!("log path has no file name: {}", path.display()))?
        .to_os_string();
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    Ok((dir, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<OsString> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| OsString::from(v))
        }
    }

    #[test]
    fn defaults_to_stderr() {
        let config = ObservabilityConfig::from_lookup(lookup(&[]), None);
        assert_eq!(config, ObservabilityConfig::default());
    }

    #[test]
    fn env_dir_overrides_config_dir() {
        let config = ObservabilityConfig::from_lookup(
            lookup(&[(ENV_LOG_DIR, "/var/log/bmi")]),
            Some(PathBuf::from("/tmp/from-config")),
        );
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/bmi")));
    }

    #[test]
    fn config_dir_used_when_env_empty() {
        let config = ObservabilityConfig::from_lookup(
            lookup(&[(ENV_LOG_DIR, "")]),
            Some(PathBuf::from("/tmp/from-config")),
        );
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/from-config")));
        assert!(config.log_path.is_none());
    }

    #[test]
    fn log_path_read_from_env() {
        let config =
            ObservabilityConfig::from_lookup(lookup(&[(ENV_LOG_PATH, "/tmp/bmi.jsonl")]), None);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/bmi.jsonl")));
    }

    #[test]
    fn flags_pick_level() {
        assert_eq!(flag_level(true, 3), Some("error"));
        assert_eq!(flag_level(false, 0), None);
        assert_eq!(flag_level(false, 1), Some("debug"));
        assert_eq!(flag_level(false, 2), Some("trace"));
    }

    #[test]
    fn splits_log_paths() {
        let (dir, name) = split_log_path(Path::new("/tmp/logs/app.jsonl")).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/logs"));
        assert_eq!(name, OsString::from("app.jsonl"));

        let (dir, name) = split_log_path(Path::new("app.jsonl")).unwrap();
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, OsString::from("app.jsonl"));

        assert!(split_log_path(Path::new("/")).is_err());
    }
}
