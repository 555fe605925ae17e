//! Play command handler

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use finch_demo::cli::PlayArgs;
use finch_demo::scheduler::{self, stop_channel, PlaybackResult, SystemClock};
use finch_demo::surface::TerminalSurface;
use finch_demo::{Config, DemoPlayer};

/// Play the demo in the terminal.
///
/// Falls back to printing the transcript when stdout isn't a terminal,
/// since nobody is there to watch the animation.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: PlayArgs, config: &Config) -> Result<()> {
    let script = super::load_script(args.script.as_deref(), config)?;
    let mut timing = config.timing();
    if let Some(speed) = args.speed {
        timing = timing.with_speed(speed);
    }

    if args.transcript || !atty::is(atty::Stream::Stdout) {
        debug!("printing transcript instead of animating");
        let (transcript, _) = scheduler::replay(&script, timing)?;
        print!("{}", transcript.plain_text());
        return Ok(());
    }

    let (stop, signal) = stop_channel();
    let on_ctrl_c = stop.clone();
    ctrlc::set_handler(move || on_ctrl_c.stop()).context("Failed to install Ctrl-C handler")?;

    let start_delay = if args.no_delay {
        Duration::ZERO
    } else {
        timing.scale(config.start_delay())
    };

    let mut player = DemoPlayer::new(script, timing);
    let mut clock = SystemClock::with_stop(signal);
    let result = {
        let stdout = io::stdout();
        let mut surface = TerminalSurface::with_hidden_cursor(stdout.lock(), config.theme())?;
        scheduler::run_to_completion(&mut player, &mut surface, &mut clock, start_delay)?
    };

    // Only a Ctrl-C is worth reporting; other early exits are silent
    if let PlaybackResult::Interrupted { cursor } = result {
        if !stop.is_stopped() {
            debug!(cursor, "playback ended early without a stop request");
            return Ok(());
        }
        let theme = config.theme();
        eprintln!(
            "{}",
            theme.secondary_text(&format!(
                "Stopped at event {} of {}",
                cursor,
                player.script().len()
            ))
        );
    }
    Ok(())
}
