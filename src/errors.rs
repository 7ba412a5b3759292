// src/errors.rs

//! Crate-wide error taxonomy.
//!
//! Setup problems (bad config, missing executables, unwritable log) are all
//! fatal to the invocation and exit with a fixed code. A task process exiting
//! non-zero is *not* an error here; it is a [`crate::task::TaskOutcome`] that
//! carries the exit code the runner propagates.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CronwrapError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("task not found: {0}")]
    TaskNotFound(String),

    #[error("interpreter not found at {0}")]
    MissingInterpreter(PathBuf),

    #[error("script not found at {0}")]
    MissingScript(PathBuf),

    #[error("log file not writable at {path}")]
    LogUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, CronwrapError>;
