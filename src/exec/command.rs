// src/exec/command.rs

use anyhow::Context;
use tokio::process::Command;
use tracing::{info, warn};

use crate::errors::{CronwrapError, Result};
use crate::journal::Journal;
use crate::logfile::JobLog;
use crate::task::{TaskDescriptor, TaskOutcome};

/// Run one task to completion.
///
/// Fail-fast ordering: interpreter and script existence are checked before
/// the log or journal are touched, so a misconfigured deployment leaves both
/// files exactly as they were.
///
/// The runner blocks for the whole child lifetime; there is no internal
/// mutual exclusion between concurrent invocations of the same task, and the
/// child inherits nothing from the ambient environment except the configured
/// `PATH`.
pub async fn run_task(desc: &TaskDescriptor) -> Result<TaskOutcome> {
    if !desc.interpreter.is_file() {
        return Err(CronwrapError::MissingInterpreter(desc.interpreter.clone()));
    }
    if !desc.script.is_file() {
        return Err(CronwrapError::MissingScript(desc.script.clone()));
    }

    let mut log = JobLog::open_append(&desc.log_path)?;
    let mut journal = Journal::open(&desc.journal_path, &desc.name)?;

    info!(
        task = %desc.name,
        run_id = %journal.run_id(),
        interpreter = %desc.interpreter.display(),
        script = %desc.script.display(),
        log = %log.path().display(),
        "starting task process"
    );

    log.write_start_marker(&desc.label)?;
    journal.record_started()?;

    let mut cmd = Command::new(&desc.interpreter);
    cmd.arg(&desc.script)
        .current_dir(&desc.work_dir)
        .env_clear()
        .env("PATH", &desc.search_path)
        .stdout(log.child_stdio()?)
        .stderr(log.child_stdio()?)
        .kill_on_drop(true);

    let mut child = cmd
        .spawn()
        .with_context(|| format!("spawning process for task '{}'", desc.name))?;

    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for process of task '{}'", desc.name))?;

    let code = status.code().unwrap_or(-1);
    let outcome = if status.success() {
        TaskOutcome::Success
    } else {
        TaskOutcome::Failed(code)
    };

    match outcome {
        TaskOutcome::Success => {
            log.write_end_marker(&desc.label)?;
            info!(task = %desc.name, run_id = %journal.run_id(), "task process exited successfully");
        }
        TaskOutcome::Failed(code) => {
            // No end marker: the open-ended block is the log-level failure
            // signal. The journal record below carries the explicit one.
            warn!(
                task = %desc.name,
                run_id = %journal.run_id(),
                exit_code = code,
                "task process failed"
            );
        }
    }

    journal.record_finished(outcome)?;

    Ok(outcome)
}
