//! The demo player state machine.
//!
//! `DemoPlayer::step` performs every transition that needs no wait and then
//! hands a single `Tick::Wait` back to the scheduler. Nothing recurses and
//! nothing sleeps here, so the same player runs against a real clock in the
//! terminal and against a virtual one in tests.

use std::io;

use tracing::{debug, info};

use super::state::{PlayerState, PlayerTiming, Tick};
use crate::script::{Event, Script};
use crate::surface::OutputSurface;

/// Replays a [`Script`] into an output surface, exactly once.
#[derive(Debug, Clone)]
pub struct DemoPlayer {
    script: Script,
    timing: PlayerTiming,
    state: PlayerState,
}

impl DemoPlayer {
    pub fn new(script: Script, timing: PlayerTiming) -> Self {
        Self {
            script,
            timing,
            state: PlayerState::Idle,
        }
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Index of the next event to play.
    pub fn cursor(&self) -> usize {
        match self.state {
            PlayerState::Idle => 0,
            PlayerState::Playing { cursor } | PlayerState::Stopped { cursor } => cursor,
            PlayerState::Delaying { index }
            | PlayerState::Typing { index, .. }
            | PlayerState::Streaming { index, .. } => index + 1,
            PlayerState::Done => self.script.len(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state == PlayerState::Done
    }

    /// Begin playback from the first event.
    ///
    /// Returns false (and changes nothing) if playback already started.
    pub fn start(&mut self) -> bool {
        if self.state != PlayerState::Idle {
            debug!(state = ?self.state, "ignoring repeated start");
            return false;
        }
        info!(events = self.script.len(), "starting demo playback");
        self.state = PlayerState::Playing { cursor: 0 };
        true
    }

    /// Cancel playback, freezing the cursor. Finished players stay finished.
    pub fn stop(&mut self) {
        if self.state.is_terminal() {
            return;
        }
        let cursor = self.cursor();
        debug!(cursor, "stopping demo playback");
        self.state = PlayerState::Stopped { cursor };
    }

    /// Advance until the next wait point.
    pub fn step<S: OutputSurface + ?Sized>(&mut self, out: &mut S) -> io::Result<Tick> {
        loop {
            match self.state {
                PlayerState::Idle => return Ok(Tick::Idle),
                PlayerState::Done => return Ok(Tick::Finished),
                PlayerState::Stopped { .. } => return Ok(Tick::Stopped),

                PlayerState::Playing { cursor } => {
                    let Some(event) = self.script.get(cursor) else {
                        info!("demo playback finished");
                        self.state = PlayerState::Done;
                        return Ok(Tick::Finished);
                    };
                    self.state = PlayerState::Delaying { index: cursor };
                    return Ok(Tick::Wait(self.timing.scale(event.delay())));
                }

                PlayerState::Delaying { index } => {
                    let event = &self.script[index];
                    debug!(index, kind = event.kind(), "rendering demo event");
                    match event {
                        Event::BlankLine { .. } => {
                            out.line_break()?;
                            self.state = PlayerState::Playing { cursor: index + 1 };
                        }
                        Event::InstantLine { text, class, .. } => {
                            out.push_line(text, class.as_deref())?;
                            self.state = PlayerState::Playing { cursor: index + 1 };
                        }
                        Event::TypedLine {
                            text,
                            class,
                            char_interval,
                            ..
                        } => {
                            out.open_line(class.as_deref())?;
                            if text.is_empty() {
                                out.close_line()?;
                                self.state = PlayerState::Playing { cursor: index + 1 };
                            } else {
                                self.state = PlayerState::Typing { index, offset: 0 };
                                return Ok(Tick::Wait(self.timing.char_interval(*char_interval)));
                            }
                        }
                        Event::StreamedLines { lines, class, .. } => match lines.first() {
                            Some(first) => {
                                out.push_line(first, class.as_deref())?;
                                self.state = PlayerState::Streaming {
                                    index,
                                    next_line: 1,
                                };
                                return Ok(Tick::Wait(self.timing.stream_interval()));
                            }
                            None => {
                                self.state = PlayerState::Playing { cursor: index + 1 };
                            }
                        },
                    }
                }

                PlayerState::Typing { index, offset } => {
                    let Event::TypedLine {
                        text,
                        char_interval,
                        ..
                    } = &self.script[index]
                    else {
                        unreachable!("typing state always points at a typed line");
                    };
                    let next = text[offset..].chars().next();
                    let offset = match next {
                        Some(ch) => {
                            out.push_char(ch)?;
                            offset + ch.len_utf8()
                        }
                        None => text.len(),
                    };
                    if offset >= text.len() {
                        out.close_line()?;
                        self.state = PlayerState::Playing { cursor: index + 1 };
                    } else {
                        self.state = PlayerState::Typing { index, offset };
                        return Ok(Tick::Wait(self.timing.char_interval(*char_interval)));
                    }
                }

                PlayerState::Streaming { index, next_line } => {
                    let Event::StreamedLines { lines, class, .. } = &self.script[index] else {
                        unreachable!("streaming state always points at streamed lines");
                    };
                    match lines.get(next_line) {
                        Some(line) => {
                            out.push_line(line, class.as_deref())?;
                            self.state = PlayerState::Streaming {
                                index,
                                next_line: next_line + 1,
                            };
                            return Ok(Tick::Wait(self.timing.stream_interval()));
                        }
                        None => {
                            self.state = PlayerState::Playing { cursor: index + 1 };
                        }
                    }
                }
            }
        }
    }
}
