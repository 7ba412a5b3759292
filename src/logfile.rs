// src/logfile.rs

//! Framed append-only task log.
//!
//! Each invocation contributes one block to the file:
//!
//! ```text
//! --- <Label> job started: <timestamp> ---
//! <raw combined stdout+stderr of the invoked script>
//! --- <Label> job finished: <timestamp> ---
//! ```
//!
//! Only the marker lines are structurally significant; the timestamp is
//! human-readable local time, not a parsing contract. A failed run leaves its
//! block without the finished marker. Entries are never mutated or deleted;
//! rotation is an external concern.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use chrono::Local;

use crate::errors::{CronwrapError, Result};

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S %z").to_string()
}

/// Scoped append handle to a task's log file.
///
/// Held for the duration of one invocation; dropping it on any exit path
/// closes the handle.
#[derive(Debug)]
pub struct JobLog {
    path: PathBuf,
    file: File,
}

impl JobLog {
    /// Open the log in append mode, creating it (and its parent directory)
    /// if absent. Open failures surface as `LogUnwritable`.
    pub fn open_append(path: &Path) -> Result<Self> {
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
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the start marker, flushed immediately so a partial run is
    /// visible in the log even if the spawn that follows fails.
    pub fn write_start_marker(&mut self, label: &str) -> Result<()> {
        writeln!(self.file, "--- {label} job started: {} ---", timestamp())?;
        self.file.flush()?;
        Ok(())
    }

    /// Write the end marker with a fresh timestamp.
    ///
    /// Only called after a successful run; a failed run's block stays open.
    pub fn write_end_marker(&mut self, label: &str) -> Result<()> {
        writeln!(self.file, "--- {label} job finished: {} ---", timestamp())?;
        self.file.flush()?;
        Ok(())
    }

    /// Duplicate the underlying handle for child stdout/stderr redirection.
    ///
    /// The duplicates share the append-mode file description, so child output
    /// lands after the start marker with OS append semantics, exactly like a
    /// shell `>> log 2>&1`.
    pub fn child_stdio(&self) -> Result<Stdio> {
        let dup = self.file.try_clone()?;
        Ok(Stdio::from(dup))
    }
}
