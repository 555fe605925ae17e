//! Clipboard support for the install command.
//!
//! - [`Copy`] tries the system clipboard tools, then the OSC 52 fallback
//! - [`CopyButton`] tracks the `COPY` / `COPIED!` label

mod button;
mod copy;
mod error;
mod result;
mod tool;
pub mod tools;

pub use button::{CopyButton, COPIED_LABEL, COPY_LABEL, DEFAULT_CONFIRM_MS};
pub use copy::Copy;
pub use error::ClipboardError;
pub use result::{CopyMethod, CopyResult};
pub use tool::{CopyTool, CopyToolError};
