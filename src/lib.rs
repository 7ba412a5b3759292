// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod install;
pub mod journal;
pub mod logfile;
pub mod logging;
pub mod task;

use std::path::Path;

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::loader::load_for_root;
use crate::config::model::ConfigFile;
use crate::errors::{CronwrapError, Result};
use crate::install::install_root;
use crate::task::{TaskDescriptor, TaskOutcome};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - installation-root resolution (independent of the caller's cwd)
/// - config loading (deploy-time task table or built-in defaults)
/// - task selection and descriptor resolution
/// - process execution with log framing and journal records
pub async fn run(args: CliArgs) -> Result<TaskOutcome> {
    let root = install_root()?;
    let cfg = load_for_root(&root)?;

    if args.list {
        print_task_list(&root, &cfg);
        return Ok(TaskOutcome::Success);
    }

    let name = select_task_name(&args, &cfg)?;
    let desc = resolve_descriptor(&root, &cfg, &name)?;

    if args.dry_run {
        print_dry_run(&desc);
        return Ok(TaskOutcome::Success);
    }

    exec::run_task(&desc).await
}

/// Look up a task by name and resolve it against the installation root.
pub fn resolve_descriptor(root: &Path, cfg: &ConfigFile, name: &str) -> Result<TaskDescriptor> {
    let task = cfg
        .task
        .get(name)
        .ok_or_else(|| CronwrapError::TaskNotFound(name.to_string()))?;
    Ok(TaskDescriptor::resolve(root, name, task, &cfg.default))
}

/// Pick the task to run: explicit argument, then program-name dispatch, then
/// the sole configured task.
fn select_task_name(args: &CliArgs, cfg: &ConfigFile) -> Result<String> {
    if let Some(ref name) = args.task {
        return Ok(name.clone());
    }

    if let Some(name) = cli::task_from_program_name() {
        if cfg.task.contains_key(&name) {
            debug!(task = %name, "task selected from program name");
            return Ok(name);
        }
    }

    if cfg.task.len() == 1 {
        if let Some(name) = cfg.task.keys().next() {
            return Ok(name.clone());
        }
    }

    Err(CronwrapError::Config(format!(
        "no task given; configured tasks: {}",
        cfg.task.keys().cloned().collect::<Vec<_>>().join(", ")
    )))
}

/// Simple `--list` output: task names and their resolved paths.
fn print_task_list(root: &Path, cfg: &ConfigFile) {
    println!("cronwrap tasks at {}:", root.display());
    for (name, task) in cfg.task.iter() {
        let desc = TaskDescriptor::resolve(root, name, task, &cfg.default);
        println!("  - {name} ({})", desc.label);
        println!("      interpreter: {}", desc.interpreter.display());
        println!("      script: {}", desc.script.display());
        println!("      log: {}", desc.log_path.display());
    }
}

/// Simple `--dry-run` output: the fully resolved descriptor, no execution.
fn print_dry_run(desc: &TaskDescriptor) {
    println!("cronwrap dry-run");
    println!("  task: {} ({})", desc.name, desc.label);
    println!("  interpreter: {}", desc.interpreter.display());
    println!("  script: {}", desc.script.display());
    println!("  log: {}", desc.log_path.display());
    println!("  journal: {}", desc.journal_path.display());
    println!("  PATH: {}", desc.search_path);
    println!("  workdir: {}", desc.work_dir.display());

    debug!("dry-run complete (no execution)");
}
