// src/config/mod.rs

//! Deploy-time configuration: `Cronwrap.toml` parsing, built-in defaults,
//! and validation.
//!
//! The config file lives beside the executable and is the only place task
//! descriptors come from. There is deliberately no flag or environment
//! variable to point elsewhere; the task table is a deploy-time constant.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_for_root};
pub use model::{ConfigFile, DefaultSection, TaskConfig};
