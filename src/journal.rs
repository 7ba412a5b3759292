// src/journal.rs

//! Structured run journal.
//!
//! One JSON object per line in `<log_dir>/runs.jsonl`. The textual task log
//! stays the primary human-readable artifact; these records make run status
//! explicit instead of leaving "missing end marker" as the only failure
//! signal. Each invocation appends a `started` record before the subprocess
//! launches and a `finished` record when it completes, including failed
//! completions, which the textual log deliberately leaves unterminated.
//!
//! Run ids are ULIDs: sortable by creation time, and safe to generate from
//! concurrent invocations without coordination.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ulid::Ulid;

use crate::errors::{CronwrapError, Result};
use crate::task::TaskOutcome;

/// Journal file name under the configured log directory.
pub const JOURNAL_FILE_NAME: &str = "runs.jsonl";

/// Classification of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunStatus {
    Success,
    Failure,
}

/// Lifecycle point a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunEvent {
    Started,
    Finished,
}

/// A single journal line.
///
/// `started` records carry no status or exit code. `finished` records carry
/// both; a run whose `started` record has no matching `finished` record died
/// mid-flight (crash or external kill), same signal as the open-ended text
/// log block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub run_id: Ulid,
    pub task: String,
    pub event: RunEvent,
    pub started_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RunStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
}

/// Append handle to the journal, scoped to one invocation.
#[derive(Debug)]
pub struct Journal {
    path: PathBuf,
    file: File,
    run_id: Ulid,
    task: String,
    started_at: DateTime<Utc>,
}

impl Journal {
    /// Open the journal in append mode, creating it (and its parent
    /// directory) if absent, and mint a fresh run id. Nothing is written
    /// until [`Journal::record_started`].
    pub fn open(path: &Path, task: &str) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| CronwrapError::LogUnwritable {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| CronwrapError::LogUnwritable {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
            run_id: Ulid::new(),
            task: task.to_string(),
            started_at: Utc::now(),
        })
    }

    pub fn run_id(&self) -> Ulid {
        self.run_id
    }

    /// Append the `started` record, flushed before the caller spawns the
    /// subprocess.
    pub fn record_started(&mut self) -> Result<()> {
        self.started_at = Utc::now();
        let record = RunRecord {
            run_id: self.run_id,
            task: self.task.clone(),
            event: RunEvent::Started,
            started_at: self.started_at,
            finished_at: None,
            status: None,
            exit_code: None,
        };
        self.append(&record)
    }

    /// Append the terminal record for the run.
    pub fn record_finished(&mut self, outcome: TaskOutcome) -> Result<()> {
        let (status, exit_code) = match outcome {
            TaskOutcome::Success => (RunStatus::Success, 0),
            TaskOutcome::Failed(code) => (RunStatus::Failure, code),
        };

        let record = RunRecord {
            run_id: self.run_id,
            task: self.task.clone(),
            event: RunEvent::Finished,
            started_at: self.started_at,
            finished_at: Some(Utc::now()),
            status: Some(status),
            exit_code: Some(exit_code),
        };
        self.append(&record)
    }

    fn append(&mut self, record: &RunRecord) -> Result<()> {
        // One line per record keeps concurrent appends from different
        // invocations intact at line granularity.
        let line = serde_json::to_string(record)?;
        writeln!(self.file, "{line}")?;
        self.file.flush()?;

        debug!(
            journal = %self.path.display(),
            run_id = %record.run_id,
            event = ?record.event,
            "journal record written"
        );
        Ok(())
    }
}
