//! Player state management
//!
//! Contains the `PlayerState` machine states, the `Tick` a step yields to
//! the scheduler, and the `PlayerTiming` knobs.

use std::time::Duration;

use crate::script::{DEFAULT_CHAR_INTERVAL_MS, STREAM_INTERVAL_MS};

/// Where the player is in the script.
///
/// `Playing { cursor }` means event `cursor` is next. Once its delay has been
/// scheduled the player moves to `Delaying`, and the event renders on the
/// following step. Animated events then spend their ticks in `Typing` or
/// `Streaming` before returning to `Playing` with the next cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// Not started yet
    Idle,
    /// Next event to play is `cursor`
    Playing { cursor: usize },
    /// Delay of event `index` is pending
    Delaying { index: usize },
    /// Revealing event `index`; `offset` is the byte offset of the next char
    Typing { index: usize, offset: usize },
    /// Streaming event `index`; `next_line` is the next line to append
    Streaming { index: usize, next_line: usize },
    /// Script exhausted (terminal)
    Done,
    /// Cancelled with `cursor` frozen (terminal)
    Stopped { cursor: usize },
}

impl PlayerState {
    /// Whether no further transitions can happen.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Stopped { .. })
    }
}

/// What the scheduler should do after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Step again after this long
    Wait(Duration),
    /// The whole script has been rendered
    Finished,
    /// Playback was stopped before the end
    Stopped,
    /// `start()` hasn't been called
    Idle,
}

/// Timing knobs for playback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerTiming {
    /// Interval for typed lines without their own `charInterval`
    pub default_char_interval: Duration,
    /// Interval between streamed lines
    pub stream_interval: Duration,
    /// Playback speed multiplier (1.0 = normal)
    pub speed: f64,
}

impl PlayerTiming {
    pub const MIN_SPEED: f64 = 0.1;
    pub const MAX_SPEED: f64 = 16.0;

    /// Set the speed multiplier, clamped to 0.1x..16x.
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = if speed.is_finite() {
            speed.clamp(Self::MIN_SPEED, Self::MAX_SPEED)
        } else {
            1.0
        };
        self
    }

    /// Wall-clock duration of a scripted wait at the current speed.
    pub fn scale(&self, wait: Duration) -> Duration {
        if self.speed == 1.0 {
            wait
        } else {
            Duration::from_nanos((wait.as_nanos() as f64 / self.speed).round() as u64)
        }
    }

    /// Per-character interval for a typed line.
    pub fn char_interval(&self, event_interval: Option<u64>) -> Duration {
        let base = event_interval
            .map(Duration::from_millis)
            .unwrap_or(self.default_char_interval);
        self.scale(base)
    }

    /// Interval between streamed lines.
    pub fn stream_interval(&self) -> Duration {
        self.scale(self.stream_interval)
    }
}

impl Default for PlayerTiming {
    fn default() -> Self {
        Self {
            default_char_interval: Duration::from_millis(DEFAULT_CHAR_INTERVAL_MS),
            stream_interval: Duration::from_millis(STREAM_INTERVAL_MS),
            speed: 1.0,
        }
    }
}
