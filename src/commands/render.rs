//! Render command handler

use anyhow::Result;

use finch_demo::cli::{RenderArgs, RenderFormat};
use finch_demo::scheduler;
use finch_demo::Config;

/// Print the fully rendered demo output.
pub fn handle(args: RenderArgs, config: &Config) -> Result<()> {
    let script = super::load_script(args.script.as_deref(), config)?;
    let (transcript, _) = scheduler::replay(&script, config.timing())?;

    match args.format {
        RenderFormat::Text => print!("{}", transcript.plain_text()),
        RenderFormat::Markup => print!("{}", transcript.to_markup()),
        RenderFormat::Json => println!("{}", serde_json::to_string_pretty(transcript.nodes())?),
    }
    Ok(())
}
