// src/config/model.rs

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

/// Known-good search path handed to every child process, matching what a
/// login shell on a stock install would see. Overridable per deployment via
/// `[default].search_path`; never taken from the caller's environment.
pub const DEFAULT_SEARCH_PATH: &str =
    "/usr/local/sbin:/usr/local/bin:/usr/sbin:/usr/bin:/sbin:/bin";

/// Top-level configuration as read from `Cronwrap.toml`:
///
/// ```toml
/// [default]
/// search_path = "/usr/local/bin:/usr/bin:/bin"
/// log_dir = "logs"
///
/// [task.monitor]
/// label = "Monitor"
/// interpreter = "venv/bin/python3"
/// script = "monitor.py"
/// ```
///
/// All sections are optional and have reasonable defaults, except that at
/// least one task must exist after loading (checked in `validate`).
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    /// Defaults for `search_path` and `log_dir` from `[default]`.
    #[serde(default)]
    pub default: DefaultSection,

    /// All tasks from `[task.<name>]`.
    ///
    /// Keys are the *task names* (e.g. `"monitor"`, `"reporter"`).
    #[serde(default)]
    pub task: BTreeMap<String, TaskConfig>,
}

impl ConfigFile {
    /// Built-in task table used when no `Cronwrap.toml` is present.
    ///
    /// Mirrors the stock deployment this tool wraps: a Python virtualenv
    /// interpreter plus `monitor.py` / `reporter.py` at the install root.
    pub fn builtin() -> Self {
        let mut task = BTreeMap::new();

        task.insert(
            "monitor".to_string(),
            TaskConfig {
                label: "Monitor".to_string(),
                interpreter: PathBuf::from("venv/bin/python3"),
                script: PathBuf::from("monitor.py"),
                log: None,
            },
        );

        task.insert(
            "reporter".to_string(),
            TaskConfig {
                label: "Reporter".to_string(),
                interpreter: PathBuf::from("venv/bin/python3"),
                script: PathBuf::from("reporter.py"),
                log: None,
            },
        );

        Self {
            default: DefaultSection::default(),
            task,
        }
    }
}

/// `[default]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultSection {
    /// `PATH` value for child processes.
    #[serde(default = "default_search_path")]
    pub search_path: String,

    /// Directory (relative to the install root unless absolute) holding task
    /// logs and the run journal.
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
}

fn default_search_path() -> String {
    DEFAULT_SEARCH_PATH.to_string()
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

impl Default for DefaultSection {
    fn default() -> Self {
        Self {
            search_path: default_search_path(),
            log_dir: default_log_dir(),
        }
    }
}

/// `[task.<name>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskConfig {
    /// Label used in the log marker lines, e.g. `"Monitor"`.
    pub label: String,

    /// Interpreter binary, relative to the install root unless absolute.
    pub interpreter: PathBuf,

    /// Target script, relative to the install root unless absolute.
    pub script: PathBuf,

    /// Optional task-local log path.
    ///
    /// If `None`, the task logs to `<log_dir>/<name>.log`.
    #[serde(default)]
    pub log: Option<PathBuf>,
}

impl TaskConfig {
    /// Convenience: the effective log path (still root-relative) given the
    /// `[default]` section.
    pub fn effective_log(&self, name: &str, defaults: &DefaultSection) -> PathBuf {
        match &self.log {
            Some(path) => path.clone(),
            None => defaults.log_dir.join(format!("{name}.log")),
        }
    }
}
