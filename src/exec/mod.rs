// src/exec/mod.rs

//! Process execution layer.
//!
//! Runs the resolved interpreter + script as a child process with a cleared,
//! explicit environment, redirecting its combined output into the task log
//! between the start/end markers, using `tokio::process::Command`.

pub mod command;

pub use command::run_task;
