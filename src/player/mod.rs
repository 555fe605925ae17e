//! Demo player module
//!
//! Replays a [`Script`](crate::script::Script) into an
//! [`OutputSurface`](crate::surface::OutputSurface), one event at a time.
//!
//! # Architecture
//!
//! - `state`: `PlayerState`, `Tick` and `PlayerTiming`
//! - `engine`: the `DemoPlayer` state machine
//!
//! The player never sleeps itself. Each call to [`DemoPlayer::step`] renders
//! as much as it can without waiting and returns the next wait; the
//! [`scheduler`](crate::scheduler) owns the clock.
//!
//! # Usage
//!
//! ```
//! use finch_demo::player::{DemoPlayer, PlayerTiming, Tick};
//! use finch_demo::script::{Event, Script};
//! use finch_demo::surface::Transcript;
//!
//! let script = Script::new(vec![Event::instant(0, "$ finch", Some("cmd"))]);
//! let mut player = DemoPlayer::new(script, PlayerTiming::default());
//! let mut out = Transcript::new();
//!
//! player.start();
//! while let Tick::Wait(_) = player.step(&mut out).unwrap() {}
//! assert_eq!(out.plain_text(), "$ finch\n");
//! ```

mod engine;
pub mod state;

pub use engine::DemoPlayer;
pub use state::{PlayerState, PlayerTiming, Tick};
