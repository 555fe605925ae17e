//! finch-demo CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use finch_demo::cli::{Cli, Commands};
use finch_demo::Config;

fn init_logging(verbose: bool) {
    let default = if verbose {
        "warn,finch_demo=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Play(args) => commands::play::handle(args, &Config::load()?),
        Commands::Render(args) => commands::render::handle(args, &Config::load()?),
        Commands::Copy(args) => commands::copy::handle(args, &Config::load()?),
        Commands::Script(args) => commands::script::handle(args),
        Commands::Config(cmd) => commands::config::handle(cmd),
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
