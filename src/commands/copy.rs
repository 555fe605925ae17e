//! Copy command handler

use std::io::{self, Write};
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::cursor;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use tracing::debug;

use finch_demo::cli::CopyArgs;
use finch_demo::clipboard::{Copy, CopyButton};
use finch_demo::theme::Theme;
use finch_demo::Config;

/// Copy the install command and show the button's confirmation.
pub fn handle(args: CopyArgs, config: &Config) -> Result<()> {
    let text = args
        .text
        .unwrap_or_else(|| config.copy.install_command.clone());
    let theme = config.theme();
    let interactive = atty::is(atty::Stream::Stdout);

    let copy = Copy::new();
    debug!(
        tools = ?copy.tools().iter().map(|tool| tool.name()).collect::<Vec<_>>(),
        "clipboard tools"
    );

    let mut button = CopyButton::new(config.confirm_duration());
    let result = button
        .press(&copy, &text, Instant::now())
        .context("Failed to copy to clipboard")?;
    debug!(tool = result.tool().name(), "copied");

    show_label(&theme, button.label(Instant::now()), &text, interactive)?;
    if !interactive {
        println!("{}", result.message());
    }
    if args.no_wait {
        if interactive {
            println!();
        }
        return Ok(());
    }

    if let Some(reverts_at) = button.reverts_at() {
        thread::sleep(reverts_at.saturating_duration_since(Instant::now()));
    }
    show_label(&theme, button.label(Instant::now()), &text, interactive)?;
    if interactive {
        println!();
    }
    Ok(())
}

/// Draw the button. On a terminal the label is redrawn in place.
fn show_label(theme: &Theme, label: &str, text: &str, interactive: bool) -> Result<()> {
    let stdout = io::stdout();
    draw_label(&mut stdout.lock(), theme, label, text, interactive)
}

fn draw_label<W: Write>(
    out: &mut W,
    theme: &Theme,
    label: &str,
    text: &str,
    interactive: bool,
) -> Result<()> {
    if interactive {
        queue!(
            out,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(format!(
                "{}  [ {} ]",
                theme.primary_text(text),
                theme.accent_text(label)
            ))
        )?;
    } else {
        writeln!(out, "{}", label)?;
    }
    out.flush()?;
    Ok(())
}
