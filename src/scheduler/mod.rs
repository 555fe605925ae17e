//! Playback scheduling.
//!
//! The player yields a wait after every tick; a [`Clock`] carries it out.
//! [`SystemClock`] really sleeps and wakes early when its [`StopHandle`]
//! fires. [`ManualClock`] only adds the wait to a virtual timeline, which
//! makes playback instant and deterministic.

mod clock;

pub use clock::{stop_channel, Clock, ManualClock, Sleep, StopHandle, StopSignal, SystemClock};

use std::io;
use std::time::Duration;

use tracing::{debug, info};

use crate::player::{DemoPlayer, PlayerTiming, Tick};
use crate::script::Script;
use crate::surface::{OutputSurface, Transcript};

/// Default pause before playback begins, letting the screen settle.
pub const DEFAULT_START_DELAY_MS: u64 = 900;

/// Outcome of a playback session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackResult {
    /// Every event was rendered
    Finished { elapsed: Duration },
    /// Stopped before the end; `cursor` is the frozen next-event index
    Interrupted { cursor: usize },
}

/// Drive `player` to the end of its script.
///
/// Sleeps `start_delay` first, then starts the player and alternates
/// between stepping and sleeping. Output is flushed before every sleep so
/// each tick becomes visible on its own.
pub fn run_to_completion<S, C>(
    player: &mut DemoPlayer,
    out: &mut S,
    clock: &mut C,
    start_delay: Duration,
) -> io::Result<PlaybackResult>
where
    S: OutputSurface + ?Sized,
    C: Clock + ?Sized,
{
    if clock.sleep(start_delay) == Sleep::Interrupted {
        player.stop();
        return Ok(PlaybackResult::Interrupted {
            cursor: player.cursor(),
        });
    }
    player.start();

    loop {
        match player.step(out)? {
            Tick::Wait(wait) => {
                out.flush()?;
                if clock.sleep(wait) == Sleep::Interrupted {
                    player.stop();
                    debug!(cursor = player.cursor(), "playback interrupted");
                    return Ok(PlaybackResult::Interrupted {
                        cursor: player.cursor(),
                    });
                }
            }
            Tick::Finished => {
                out.flush()?;
                let elapsed = clock.elapsed();
                info!(elapsed_ms = elapsed.as_millis() as u64, "playback finished");
                return Ok(PlaybackResult::Finished { elapsed });
            }
            Tick::Stopped | Tick::Idle => {
                out.flush()?;
                return Ok(PlaybackResult::Interrupted {
                    cursor: player.cursor(),
                });
            }
        }
    }
}

/// Play `script` against a virtual clock and return the final transcript.
///
/// Also returns how long the playback would take in real time (without the
/// start delay).
pub fn replay(script: &Script, timing: PlayerTiming) -> io::Result<(Transcript, Duration)> {
    let mut player = DemoPlayer::new(script.clone(), timing);
    let mut transcript = Transcript::new();
    let mut clock = ManualClock::new();
    let elapsed = match run_to_completion(&mut player, &mut transcript, &mut clock, Duration::ZERO)?
    {
        PlaybackResult::Finished { elapsed } => elapsed,
        PlaybackResult::Interrupted { .. } => clock.elapsed(),
    };
    Ok((transcript, elapsed))
}
