//! Clocks and the stop signal.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// How a sleep ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sleep {
    /// The full duration elapsed
    Completed,
    /// A stop was requested before the duration elapsed
    Interrupted,
}

/// Source of time for the scheduler.
pub trait Clock {
    /// Wait for `duration`, or less if interrupted.
    fn sleep(&mut self, duration: Duration) -> Sleep;

    /// Time since the clock was created.
    fn elapsed(&self) -> Duration;
}

/// Requests playback to stop. Cheap to clone and safe to move into a
/// signal handler.
#[derive(Debug, Clone)]
pub struct StopHandle {
    tx: Sender<()>,
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
        // Ignore send errors (the clock may already be gone)
        let _ = self.tx.send(());
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

/// Receiving end of a [`StopHandle`], owned by a clock.
#[derive(Debug)]
pub struct StopSignal {
    rx: Receiver<()>,
    stopped: Arc<AtomicBool>,
}

/// Create a connected stop handle and signal.
pub fn stop_channel() -> (StopHandle, StopSignal) {
    let (tx, rx) = mpsc::channel();
    let stopped = Arc::new(AtomicBool::new(false));
    (
        StopHandle {
            tx,
            stopped: Arc::clone(&stopped),
        },
        StopSignal { rx, stopped },
    )
}

/// Wall clock that sleeps for real.
#[derive(Debug)]
pub struct SystemClock {
    started: Instant,
    signal: Option<StopSignal>,
}

impl SystemClock {
    /// A clock that can't be interrupted.
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            signal: None,
        }
    }

    /// A clock whose sleeps end early when the paired handle stops.
    pub fn with_stop(signal: StopSignal) -> Self {
        Self {
            started: Instant::now(),
            signal: Some(signal),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) -> Sleep {
        let Some(signal) = &self.signal else {
            thread::sleep(duration);
            return Sleep::Completed;
        };
        if signal.stopped.load(Ordering::SeqCst) {
            return Sleep::Interrupted;
        }
        match signal.rx.recv_timeout(duration) {
            Ok(()) => Sleep::Interrupted,
            Err(RecvTimeoutError::Timeout) => Sleep::Completed,
            Err(RecvTimeoutError::Disconnected) => {
                // Every handle was dropped, nobody can stop us anymore
                self.signal = None;
                thread::sleep(duration);
                Sleep::Completed
            }
        }
    }

    fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Virtual clock: sleeping just advances a counter.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    elapsed: Duration,
    sleeps: Vec<Duration>,
    interrupt_at: Option<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interrupt the first sleep that would run past `at`.
    pub fn interrupt_at(mut self, at: Duration) -> Self {
        self.interrupt_at = Some(at);
        self
    }

    /// Every completed sleep, in order.
    pub fn sleeps(&self) -> &[Duration] {
        &self.sleeps
    }
}

impl Clock for ManualClock {
    fn sleep(&mut self, duration: Duration) -> Sleep {
        if let Some(at) = self.interrupt_at {
            if self.elapsed + duration > at {
                self.elapsed = self.elapsed.max(at);
                return Sleep::Interrupted;
            }
        }
        self.elapsed += duration;
        self.sleeps.push(duration);
        Sleep::Completed
    }

    fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
