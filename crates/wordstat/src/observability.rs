//! Logging setup.
//!
//! Human-readable events go to stderr. When a log file is configured, the
//! same events are also written there as JSON lines through a non-blocking
//! appender; the returned guard flushes it on drop.

use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_PATH_ENV: &str = "WORDSTAT_LOG_PATH";
const LOG_DIR_ENV: &str = "WORDSTAT_LOG_DIR";
const DEFAULT_LOG_FILE: &str = "wordstat.jsonl";

/// Where log files go, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Exact log file path; wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for `wordstat.jsonl`.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read `WORDSTAT_LOG_PATH` / `WORDSTAT_LOG_DIR`, falling back to the
    /// configured directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::from_values(
            std::env::var_os(LOG_PATH_ENV),
            std::env::var_os(LOG_DIR_ENV),
            config_log_dir,
        )
    }

    fn from_values(
        env_path: Option<OsString>,
        env_dir: Option<OsString>,
        config_log_dir: Option<PathBuf>,
    ) -> Self {
        let non_empty = |v: OsString| (!v.is_empty()).then(|| PathBuf::from(v));
        Self {
            log_path: env_path.and_then(non_empty),
            log_dir: env_dir.and_then(non_empty).or(config_log_dir),
        }
    }

    /// Resolve to a `(directory, file name)` pair.
    fn log_file(&self) -> Option<(PathBuf, OsString)> {
        if let Some(ref path) = self.log_path {
            let name = path.file_name()?.to_os_string();
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), PathBuf::from);
            return Some((dir, name));
        }
        self.log_dir
            .as_ref()
            .map(|dir| (dir.clone(), OsString::from(DEFAULT_LOG_FILE)))
    }
}

/// Build the event filter.
///
/// `-q` and `-v` win over `RUST_LOG`, which wins over the configured level.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if quiet {
        return EnvFilter::new("error");
    }
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Keeps the file writer alive; drop it last.
pub struct ObservabilityGuard {
    _file: Option<WorkerGuard>,
}

/// Install the global subscriber.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<ObservabilityGuard> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact();

    let (file_layer, guard) = match config.log_file() {
        Some((dir, name)) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(&dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(ObservabilityGuard { _file: guard })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_path_wins_over_dirs() {
        let config = ObservabilityConfig::from_values(
            Some("/var/log/ws/run.jsonl".into()),
            Some("/ignored".into()),
            Some(PathBuf::from("/also-ignored")),
        );
        assert_eq!(
            config.log_file(),
            Some((PathBuf::from("/var/log/ws"), OsString::from("run.jsonl")))
        );
    }

    #[test]
    fn env_dir_wins_over_config_dir() {
        let config = ObservabilityConfig::from_values(
            None,
            Some("/from-env".into()),
            Some(PathBuf::from("/from-config")),
        );
        assert_eq!(
            config.log_file(),
            Some((PathBuf::from("/from-env"), OsString::from(DEFAULT_LOG_FILE)))
        );
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let config =
            ObservabilityConfig::from_values(Some("".into()), Some("".into()), None);
        assert_eq!(config, ObservabilityConfig::default());
        assert!(config.log_file().is_none());
    }

    #[test]
    fn bare_file_name_logs_to_current_dir() {
        let config = ObservabilityConfig::from_values(Some("out.jsonl".into()), None, None);
        assert_eq!(
            config.log_file(),
            Some((PathBuf::from("."), OsString::from("out.jsonl")))
        );
    }
}
