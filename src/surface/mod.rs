//! Output surfaces the demo player renders into.
//!
//! The player only ever appends: complete lines, bare line breaks, and one
//! line at a time that grows character by character. Two surfaces are
//! provided:
//!
//! - [`Transcript`]: an in-memory tree of line-nodes and breaks
//! - [`TerminalSurface`]: colored output written straight to a terminal

mod terminal;
mod transcript;

pub use terminal::TerminalSurface;
pub use transcript::{LineNode, Node, Transcript};

use std::io;

/// Base style class every line-node carries.
pub const BASE_CLASS: &str = "line";

/// Destination for rendered demo output.
///
/// Callers open at most one line at a time; `push_char` and `close_line`
/// apply to that open line.
pub trait OutputSurface {
    /// Append a bare line break.
    fn line_break(&mut self) -> io::Result<()>;

    /// Append a complete line-node followed by a line break.
    fn push_line(&mut self, text: &str, class: Option<&str>) -> io::Result<()>;

    /// Start an empty line-node that grows through `push_char`.
    fn open_line(&mut self, class: Option<&str>) -> io::Result<()>;

    /// Reveal the next character of the open line.
    fn push_char(&mut self, ch: char) -> io::Result<()>;

    /// Mark the open line as complete.
    fn close_line(&mut self) -> io::Result<()>;

    /// Make everything appended so far visible.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Full class attribute for a line-node: the base class plus the named one.
pub fn class_attr(class: Option<&str>) -> String {
    match class {
        Some(name) if !name.is_empty() => format!("{} {}", BASE_CLASS, name),
        _ => BASE_CLASS.to_string(),
    }
}
