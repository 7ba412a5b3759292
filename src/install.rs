// src/install.rs

//! Installation-root resolution.
//!
//! The runner derives every path from its own location on disk, never from
//! the caller's working directory or ambient environment. Schedulers like
//! cron invoke jobs from arbitrary directories with a near-empty environment;
//! resolving against the executable keeps behaviour identical in all of them.

use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};

use crate::errors::Result;

/// Directory containing the running executable, canonicalized.
///
/// Symlinked invocations (e.g. a `run-monitor` link) resolve to the real
/// install directory, so the link can live anywhere.
pub fn install_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("locating the running executable")?;
    let exe = exe
        .canonicalize()
        .with_context(|| format!("canonicalizing executable path {:?}", exe))?;
    let root = exe
        .parent()
        .ok_or_else(|| anyhow!("executable path {:?} has no parent directory", exe))?;
    Ok(root.to_path_buf())
}

/// Join a configured path onto the installation root.
///
/// Absolute paths are taken as-is; relative ones resolve under the root,
/// regardless of the invoking process's working directory.
pub fn resolve_under(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
