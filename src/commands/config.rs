//! Config subcommands handler

use anyhow::Result;

use finch_demo::cli::ConfigCommands;
use finch_demo::theme::Theme;
use finch_demo::Config;

pub fn handle(cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Show => handle_show(),
        ConfigCommands::Path => handle_path(),
        ConfigCommands::Init { force } => handle_init(force),
    }
}

/// Show current configuration as TOML.
fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{}", config.theme().primary_text(toml_str.trim_end()));
    Ok(())
}

/// Print where the config file is (or would be).
fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write the default configuration, refusing to clobber an existing file.
fn handle_init(force: bool) -> Result<()> {
    let theme = Theme::default();
    let config_path = Config::config_path()?;

    if config_path.exists() && !force {
        println!(
            "{}",
            theme.primary_text(&format!(
                "Config file already exists at {} (use --force to overwrite)",
                config_path.display()
            ))
        );
        return Ok(());
    }

    Config::default().save()?;
    println!(
        "{}",
        theme.success_text(&format!("Wrote {}", config_path.display()))
    );
    Ok(())
}
