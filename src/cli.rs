// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use std::path::Path;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `cronwrap`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cronwrap",
    version,
    about = "Run a configured script under a fixed environment, logging its output between timestamp markers.",
    long_about = None
)]
pub struct CliArgs {
    /// Name of the task to run, as configured in `Cronwrap.toml`.
    ///
    /// May be omitted when the program (or a symlink to it) is named after a
    /// task, e.g. `run-monitor`, or when exactly one task is configured.
    #[arg(value_name = "TASK")]
    pub task: Option<String>,

    /// Print configured tasks with their resolved paths, then exit.
    #[arg(long)]
    pub list: bool,

    /// Resolve the task and print its descriptor, but don't execute anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level for diagnostics on stderr (error, warn, info, debug, trace).
    ///
    /// If omitted, `CRONWRAP_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

/// Task name implied by the program's own invocation name.
///
/// A `run-monitor` (or `run_monitor`) symlink to the `cronwrap` binary runs
/// the `monitor` task with no arguments, so a scheduler entry can stay a bare
/// executable path. Uses `argv[0]` rather than `current_exe()` because the
/// latter resolves symlinks and would lose the invocation name.
pub fn task_from_program_name() -> Option<String> {
    let arg0 = std::env::args_os().next()?;
    let stem = Path::new(&arg0).file_stem()?.to_str()?;
    let name = stem
        .strip_prefix("run-")
        .or_else(|| stem.strip_prefix("run_"))
        .unwrap_or(stem);

    if name.is_empty() || name == "cronwrap" {
        None
    } else {
        Some(name.to_string())
    }
}
