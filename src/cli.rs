//! Command-line interface definitions.
//!
//! Lives in the library so `xtask` can build the man page from the same
//! definitions the binary parses.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Version string with build information.
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("FINCH_DEMO_BUILD_DATE"),
    ")"
);

/// Finch terminal demo - replay the hero animation and copy the install command
#[derive(Debug, Parser)]
#[command(name = "finch-demo", version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play the demo animation in the terminal
    #[command(long_about = "Play the demo animation in the terminal.\n\n\
        Lines are typed and streamed with the scripted timing. Press Ctrl-C to stop.\n\
        When stdout is not a terminal the final transcript is printed instead.")]
    Play(PlayArgs),

    /// Print the final demo output without animation
    Render(RenderArgs),

    /// Copy the install command to the clipboard
    Copy(CopyArgs),

    /// Print the demo script as JSON
    Script(ScriptArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Print shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Script file to play instead of the built-in demo
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Playback speed multiplier (0.1 to 16)
    #[arg(long, value_name = "X")]
    pub speed: Option<f64>,

    /// Skip the initial pause before the first line
    #[arg(long)]
    pub no_delay: bool,

    /// Print the final transcript instead of animating
    #[arg(long)]
    pub transcript: bool,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Script file to render instead of the built-in demo
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = RenderFormat::Text)]
    pub format: RenderFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    /// Plain text, one line per line break
    Text,
    /// HTML-like spans with style classes
    Markup,
    /// Rendered nodes as JSON
    Json,
}

#[derive(Debug, Args)]
pub struct CopyArgs {
    /// Text to copy (defaults to the configured install command)
    pub text: Option<String>,

    /// Don't wait for the COPIED! label to revert
    #[arg(long)]
    pub no_wait: bool,
}

#[derive(Debug, Args)]
pub struct ScriptArgs {
    /// Validate and print this script file instead of the built-in demo
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
