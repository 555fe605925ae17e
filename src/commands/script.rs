//! Script command handler

use anyhow::{Context, Result};

use finch_demo::cli::ScriptArgs;
use finch_demo::Script;

/// Print a script as JSON, validating it on the way.
pub fn handle(args: ScriptArgs) -> Result<()> {
    let script = match &args.script {
        Some(path) => Script::load(path)
            .with_context(|| format!("Failed to load script {}", path.display()))?,
        None => Script::finch_demo(),
    };
    println!("{}", script.to_json()?);
    Ok(())
}
