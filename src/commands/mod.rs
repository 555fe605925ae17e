//! Subcommand handlers for the finch-demo binary.

pub mod completions;
pub mod config;
pub mod copy;
pub mod play;
pub mod render;
pub mod script;

use std::path::Path;

use anyhow::{Context, Result};

use finch_demo::{Config, Script};

/// Resolve the script to play: the explicit file, the configured file, or
/// the built-in demo.
fn load_script(explicit: Option<&Path>, config: &Config) -> Result<Script> {
    match explicit.or(config.playback.script.as_deref()) {
        Some(path) => Script::load(path)
            .with_context(|| format!("Failed to load script {}", path.display())),
        None => Ok(Script::finch_demo()),
    }
}
