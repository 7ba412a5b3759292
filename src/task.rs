// src/task.rs

//! Resolved task descriptors and run outcomes.

use std::path::{Path, PathBuf};

use crate::config::model::{DefaultSection, TaskConfig};
use crate::install::resolve_under;
use crate::journal::JOURNAL_FILE_NAME;

/// A fully resolved task: every path absolute, fixed for the process
/// lifetime. Constructed once at startup from the installation root plus the
/// deploy-time config entry; nothing in here comes from the ambient
/// environment.
#[derive(Debug, Clone)]
pub struct TaskDescriptor {
    /// Config key, e.g. `"monitor"`.
    pub name: String,

    /// Human-readable label used in the log marker lines, e.g. `"Monitor"`.
    pub label: String,

    pub interpreter: PathBuf,
    pub script: PathBuf,

    /// Append-only task log receiving the framed combined output.
    pub log_path: PathBuf,

    /// Shared structured run journal.
    pub journal_path: PathBuf,

    /// Fixed `PATH` value handed to the child process.
    pub search_path: String,

    /// Working directory for the child process (the installation root, so
    /// scripts using relative data paths behave the same under any caller).
    pub work_dir: PathBuf,
}

impl TaskDescriptor {
    /// Resolve a config entry against the installation root.
    pub fn resolve(
        root: &Path,
        name: &str,
        task: &TaskConfig,
        defaults: &DefaultSection,
    ) -> Self {
        let log_rel = task.effective_log(name, defaults);

        Self {
            name: name.to_string(),
            label: task.label.clone(),
            interpreter: resolve_under(root, &task.interpreter),
            script: resolve_under(root, &task.script),
            log_path: resolve_under(root, &log_rel),
            journal_path: resolve_under(root, &defaults.log_dir.join(JOURNAL_FILE_NAME)),
            search_path: defaults.search_path.clone(),
            work_dir: root.to_path_buf(),
        }
    }
}

/// Result of a task process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    Success,
    Failed(i32), // exit code
}

impl TaskOutcome {
    /// Process exit status the runner itself should terminate with.
    ///
    /// A child killed by a signal has no exit code (the executor records -1
    /// for it); that maps to 1 since negative values are not valid statuses.
    pub fn exit_code(self) -> i32 {
        match self {
            TaskOutcome::Success => 0,
            TaskOutcome::Failed(code) if code > 0 => code,
            TaskOutcome::Failed(_) => 1,
        }
    }
}
