//! Demo script model.
//!
//! A [`Script`] is the fixed, ordered list of [`Event`]s the player replays.
//! Each event carries a `delay` (pause before it begins) and one of four
//! rendering kinds. Scripts are immutable once built; players share them
//! through an `Arc`.
//!
//! The authored file format is JSON, one object per event:
//!
//! ```json
//! [
//!   { "kind": "instant-line", "text": "$ finch", "styleClass": "cmd", "delay": 600 },
//!   { "kind": "blank-line", "delay": 150 },
//!   { "kind": "typed-line", "text": "> hi", "styleClass": "cmd", "charInterval": 32 },
//!   { "kind": "streamed-lines", "lines": ["a", "b"], "styleClass": "response" }
//! ]
//! ```

mod demo;

use std::fs;
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Per-character interval used when a typed line doesn't set one.
pub const DEFAULT_CHAR_INTERVAL_MS: u64 = 30;

/// Interval between streamed lines.
pub const STREAM_INTERVAL_MS: u64 = 70;

/// Errors from loading an authored script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Failed to read script: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid script: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Event {index}: charInterval must be a positive number of milliseconds")]
    ZeroCharInterval { index: usize },
}

/// One scripted unit of playback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Event {
    /// Append a bare line break.
    BlankLine {
        #[serde(default)]
        delay: u64,
    },
    /// Append a complete line at once.
    InstantLine {
        #[serde(default)]
        delay: u64,
        text: String,
        #[serde(rename = "styleClass", default, skip_serializing_if = "Option::is_none")]
        class: Option<String>,
    },
    /// Reveal a line one character at a time.
    TypedLine {
        #[serde(default)]
        delay: u64,
        text: String,
        #[serde(rename = "styleClass", default, skip_serializing_if = "Option::is_none")]
        class: Option<String>,
        #[serde(rename = "charInterval", default, skip_serializing_if = "Option::is_none")]
        char_interval: Option<u64>,
    },
    /// Append several complete lines, one per tick.
    StreamedLines {
        #[serde(default)]
        delay: u64,
        lines: Vec<String>,
        #[serde(rename = "styleClass", default, skip_serializing_if = "Option::is_none")]
        class: Option<String>,
    },
}

impl Event {
    pub fn blank(delay: u64) -> Self {
        Self::BlankLine { delay }
    }

    pub fn instant(delay: u64, text: impl Into<String>, class: Option<&str>) -> Self {
        Self::InstantLine {
            delay,
            text: text.into(),
            class: class.map(str::to_string),
        }
    }

    pub fn typed(
        delay: u64,
        text: impl Into<String>,
        class: Option<&str>,
        char_interval: Option<u64>,
    ) -> Self {
        Self::TypedLine {
            delay,
            text: text.into(),
            class: class.map(str::to_string),
            char_interval,
        }
    }

    pub fn streamed<I, S>(delay: u64, lines: I, class: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::StreamedLines {
            delay,
            lines: lines.into_iter().map(Into::into).collect(),
            class: class.map(str::to_string),
        }
    }

    /// Pause before the event begins.
    pub fn delay(&self) -> Duration {
        let ms = match self {
            Self::BlankLine { delay }
            | Self::InstantLine { delay, .. }
            | Self::TypedLine { delay, .. }
            | Self::StreamedLines { delay, .. } => *delay,
        };
        Duration::from_millis(ms)
    }

    /// Short kind name, as written in script files.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BlankLine { .. } => "blank-line",
            Self::InstantLine { .. } => "instant-line",
            Self::TypedLine { .. } => "typed-line",
            Self::StreamedLines { .. } => "streamed-lines",
        }
    }

    /// Number of line-nodes this event adds to the output surface.
    pub fn line_nodes(&self) -> usize {
        match self {
            Self::BlankLine { .. } => 0,
            Self::InstantLine { .. } | Self::TypedLine { .. } => 1,
            Self::StreamedLines { lines, .. } => lines.len(),
        }
    }
}

/// An ordered, immutable sequence of events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    events: Arc<[Event]>,
}

impl Script {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into(),
        }
    }

    /// The hero demo shown on the Finch website.
    pub fn finch_demo() -> Self {
        Self::new(demo::events())
    }

    /// Parse a script from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        let events: Vec<Event> = serde_json::from_str(json)?;
        for (index, event) in events.iter().enumerate() {
            if let Event::TypedLine {
                char_interval: Some(0),
                ..
            } = event
            {
                return Err(ScriptError::ZeroCharInterval { index });
            }
        }
        Ok(Self::new(events))
    }

    /// Load a script file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serialize the script to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ScriptError> {
        Ok(serde_json::to_string_pretty(&self.events[..])?)
    }

    /// Total line-nodes a full playback appends.
    ///
    /// Blank lines contribute a break but no line-node.
    pub fn expected_line_nodes(&self) -> usize {
        self.events.iter().map(Event::line_nodes).sum()
    }
}

impl Deref for Script {
    type Target = [Event];

    fn deref(&self) -> &Self::Target {
        &self.events
    }
}

impl Default for Script {
    fn default() -> Self {
        Self::finch_demo()
    }
}
