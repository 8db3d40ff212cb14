//! Harness configuration.
//!
//! Read from the environment once at startup; CLI flags override it:
//! - `AIXNET_LOG`: path of the JSONL structured log. Unset or empty means no
//!   structured log is written; `-` writes it to stdout.
//! - `AIXNET_LOG_LEVEL`: `trace|debug|info|warn|error` (case-insensitive,
//!   default `info`). Unknown values fall back to `info`.
//! - `AIXNET_RUN_ID`: identifier embedded in trace ids. Defaults to
//!   `pid-<process id>`.

use std::path::PathBuf;

use crate::structured_log::LogLevel;

pub const ENV_LOG: &str = "AIXNET_LOG";
pub const ENV_LOG_LEVEL: &str = "AIXNET_LOG_LEVEL";
pub const ENV_RUN_ID: &str = "AIXNET_RUN_ID";

/// Log path that selects stdout.
pub const STDOUT_LOG: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub log_path: Option<PathBuf>,
    pub log_level: LogLevel,
    pub run_id: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LogLevel::Info,
            run_id: format!("pid-{}", std::process::id()),
        }
    }
}

impl HarnessConfig {
    /// Build from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    #[must_use]
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| get(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            log_path: non_empty(ENV_LOG).map(PathBuf::from),
            log_level: non_empty(ENV_LOG_LEVEL)
                .map(|v| LogLevel::from_str_loose(&v))
                .unwrap_or(defaults.log_level),
            run_id: non_empty(ENV_RUN_ID).unwrap_or(defaults.run_id),
        }
    }

    /// True when the structured log goes to stdout rather than a file.
    #[must_use]
    pub fn log_is_stdout(&self) -> bool {
        self.log_path
            .as_deref()
            .is_some_and(|p| p.as_os_str() == STDOUT_LOG)
    }

    /// Apply CLI overrides.
    #[must_use]
    pub fn with_overrides(mut self, log_path: Option<PathBuf>, log_level: Option<&str>) -> Self {
        if let Some(path) = log_path {
            self.log_path = Some(path);
        }
        if let Some(level) = log_level {
            self.log_level = LogLevel::from_str_loose(level);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = HarnessConfig::from_lookup(vars(&[]));
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.log_level, LogLevel::Info);
        assert!(cfg.run_id.starts_with("pid-"));
    }

    #[test]
    fn reads_all_variables() {
        let cfg = HarnessConfig::from_lookup(vars(&[
            (ENV_LOG, "target/aixnet.log.jsonl"),
            (ENV_LOG_LEVEL, "DEBUG"),
            (ENV_RUN_ID, "ci-7"),
        ]));
        assert_eq!(cfg.log_path, Some(PathBuf::from("target/aixnet.log.jsonl")));
        assert_eq!(cfg.log_level, LogLevel::Debug);
        assert_eq!(cfg.run_id, "ci-7");
    }

    #[test]
    fn empty_values_count_as_unset() {
        let cfg = HarnessConfig::from_lookup(vars(&[(ENV_LOG, "  "), (ENV_RUN_ID, "")]));
        assert_eq!(cfg.log_path, None);
        assert!(cfg.run_id.starts_with("pid-"));
    }

    #[test]
    fn cli_overrides_env() {
        let cfg = HarnessConfig::from_lookup(vars(&[(ENV_LOG_LEVEL, "error")]))
            .with_overrides(Some(PathBuf::from("out.jsonl")), Some("trace"));
        assert_eq!(cfg.log_path, Some(PathBuf::from("out.jsonl")));
        assert_eq!(cfg.log_level, LogLevel::Trace);
    }

    #[test]
    fn dash_selects_stdout() {
        let cfg = HarnessConfig::from_lookup(vars(&[(ENV_LOG, "-")]));
        assert!(cfg.log_is_stdout());
        let cfg = HarnessConfig::default().with_overrides(Some(PathBuf::from("run.jsonl")), None);
        assert!(!cfg.log_is_stdout());
        assert!(!HarnessConfig::default().log_is_stdout());
    }
}
