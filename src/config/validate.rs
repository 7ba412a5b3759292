// src/config/validate.rs

use crate::config::model::ConfigFile;
use crate::errors::{CronwrapError, Result};

/// Run basic semantic validation against a loaded configuration.
///
/// This checks:
/// - there is at least one task
/// - `search_path` and `log_dir` are non-empty
/// - every task has a non-empty label, interpreter, and script
///
/// It does **not** check that interpreter/script files exist; that happens at
/// run time, per task, so `--list` works on a partially deployed tree.
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    ensure_has_tasks(cfg)?;
    validate_defaults(cfg)?;
    validate_tasks(cfg)?;
    Ok(())
}

fn ensure_has_tasks(cfg: &ConfigFile) -> Result<()> {
    if cfg.task.is_empty() {
        return Err(CronwrapError::Config(
            "config must contain at least one [task.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_defaults(cfg: &ConfigFile) -> Result<()> {
    if cfg.default.search_path.trim().is_empty() {
        return Err(CronwrapError::Config(
            "[default].search_path must not be empty".to_string(),
        ));
    }

    if cfg.default.log_dir.as_os_str().is_empty() {
        return Err(CronwrapError::Config(
            "[default].log_dir must not be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_tasks(cfg: &ConfigFile) -> Result<()> {
    for (name, task) in cfg.task.iter() {
        if task.label.trim().is_empty() {
            return Err(CronwrapError::Config(format!(
                "task '{}' has an empty label",
                name
            )));
        }
        if task.interpreter.as_os_str().is_empty() {
            return Err(CronwrapError::Config(format!(
                "task '{}' has an empty interpreter path",
                name
            )));
        }
        if task.script.as_os_str().is_empty() {
            return Err(CronwrapError::Config(format!(
                "task '{}' has an empty script path",
                name
            )));
        }
    }
    Ok(())
}
