//! Finch terminal demo
//!
//! Replays the Finch hero demo (a scripted terminal session with typed input
//! and a streamed answer) in a real terminal, and copies the install command
//! to the clipboard.
//!
//! - [`script`]: the event model and the built-in demo
//! - [`player`]: the `DemoPlayer` state machine
//! - [`surface`]: where rendered lines go (memory or terminal)
//! - [`scheduler`]: clocks, cancellation and the playback loop
//! - [`clipboard`]: install-command copy with a terminal fallback

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod player;
pub mod scheduler;
pub mod script;
pub mod surface;
pub mod theme;

pub use config::Config;
pub use player::{DemoPlayer, PlayerTiming};
pub use script::{Event, Script};
