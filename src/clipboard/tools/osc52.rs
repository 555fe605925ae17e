//! Terminal clipboard fallback via OSC 52.
//!
//! Most modern terminals (and tmux with `set-clipboard on`) accept an
//! escape sequence carrying base64 text and place it on the clipboard.
//! Works over SSH where no clipboard helper binary can reach the desktop.

use std::io::{self, Write};
use std::sync::Mutex;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{CopyTool, CopyToolError};

/// Copies by asking the terminal to do it.
pub struct Osc52 {
    sink: Mutex<Box<dyn Write + Send>>,
    available: bool,
}

impl Osc52 {
    /// Write to stdout; only available when stdout is a terminal.
    pub fn stdout() -> Self {
        Self {
            sink: Mutex::new(Box::new(io::stdout())),
            available: atty::is(atty::Stream::Stdout),
        }
    }

    /// Write to an arbitrary sink (always available).
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            sink: Mutex::new(Box::new(writer)),
            available: true,
        }
    }

    /// The escape sequence that puts `text` on the clipboard.
    pub fn sequence(text: &str) -> String {
        format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
    }
}

impl CopyTool for Osc52 {
    fn method(&self) -> CopyMethod {
        CopyMethod::Osc52
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        let mut sink = self
            .sink
            .lock()
            .map_err(|_| CopyToolError::Failed("terminal writer poisoned".to_string()))?;
        sink.write_all(Self::sequence(text).as_bytes())
            .and_then(|()| sink.flush())
            .map_err(|e| CopyToolError::Failed(e.to_string()))
    }
}
