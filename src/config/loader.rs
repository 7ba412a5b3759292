// src/config/loader.rs

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::config::model::ConfigFile;
use crate::config::validate::validate_config;
use crate::errors::Result;

/// Config file name, looked up beside the executable only.
pub const CONFIG_FILE_NAME: &str = "Cronwrap.toml";

/// Load a configuration file from a given path and return the raw `ConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading config file at {:?}", path))?;

    let config: ConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run basic validation.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let config = load_from_path(&path)?;
    validate_config(&config)?;
    Ok(config)
}

/// Load the task table for a given installation root.
///
/// `<root>/Cronwrap.toml` when present, otherwise the built-in
/// monitor/reporter table. Both go through the same validation.
pub fn load_for_root(root: &Path) -> Result<ConfigFile> {
    let path = root.join(CONFIG_FILE_NAME);

    if path.is_file() {
        debug!(path = %path.display(), "loading config file");
        load_and_validate(path)
    } else {
        debug!(path = %path.display(), "no config file, using built-in task table");
        let config = ConfigFile::builtin();
        validate_config(&config)?;
        Ok(config)
    }
}
