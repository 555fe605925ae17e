//! Terminal output surface.
//!
//! Writes demo lines to any `Write` target using the theme color of each
//! line's style class. Output is queued and only flushed when the player
//! yields, so each tick costs a single write syscall.

use std::io::{self, Write};

use crossterm::{cursor, queue, style::Print};

use super::OutputSurface;
use crate::theme::{Theme, ANSI_RESET};

/// Renders demo output to a terminal.
pub struct TerminalSurface<W: Write> {
    out: W,
    theme: Theme,
    /// True while a typed line is open (its color is active)
    typing: bool,
    /// Whether the cursor was hidden and must be restored on drop
    cursor_hidden: bool,
}

impl<W: Write> TerminalSurface<W> {
    /// Create a surface that leaves the terminal cursor alone.
    pub fn new(out: W, theme: Theme) -> Self {
        Self {
            out,
            theme,
            typing: false,
            cursor_hidden: false,
        }
    }

    /// Create a surface that hides the cursor until it is dropped.
    pub fn with_hidden_cursor(mut out: W, theme: Theme) -> io::Result<Self> {
        queue!(out, cursor::Hide)?;
        out.flush()?;
        Ok(Self {
            out,
            theme,
            typing: false,
            cursor_hidden: true,
        })
    }
}

impl<W: Write> OutputSurface for TerminalSurface<W> {
    fn line_break(&mut self) -> io::Result<()> {
        queue!(self.out, Print("\n"))
    }

    fn push_line(&mut self, text: &str, class: Option<&str>) -> io::Result<()> {
        let color = self.theme.class_ansi(class);
        queue!(
            self.out,
            Print(color),
            Print(text),
            Print(ANSI_RESET),
            Print("\n")
        )
    }

    fn open_line(&mut self, class: Option<&str>) -> io::Result<()> {
        let color = self.theme.class_ansi(class);
        self.typing = true;
        queue!(self.out, Print(color))
    }

    fn push_char(&mut self, ch: char) -> io::Result<()> {
        queue!(self.out, Print(ch))
    }

    fn close_line(&mut self) -> io::Result<()> {
        self.typing = false;
        queue!(self.out, Print(ANSI_RESET), Print("\n"))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> Drop for TerminalSurface<W> {
    fn drop(&mut self) {
        // Interrupted mid-line: don't leak the line color into the shell
        if self.typing {
            let _ = queue!(self.out, Print(ANSI_RESET), Print("\n"));
        }
        if self.cursor_hidden {
            let _ = queue!(self.out, cursor::Show);
        }
        let _ = self.out.flush();
    }
}
