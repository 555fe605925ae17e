//! The "copy install command" control.
//!
//! Pressing the button copies the text and switches its label to
//! `COPIED!` for a fixed confirmation period, after which it reads `COPY`
//! again. The system tool path and the terminal fallback path confirm the
//! same way.

use std::time::{Duration, Instant};

use super::copy::Copy;
use super::error::ClipboardError;
use super::result::CopyResult;

/// Label shown while idle.
pub const COPY_LABEL: &str = "COPY";

/// Label shown during the confirmation period.
pub const COPIED_LABEL: &str = "COPIED!";

/// How long the confirmation stays visible by default.
pub const DEFAULT_CONFIRM_MS: u64 = 2200;

/// Copy button state.
#[derive(Debug, Clone)]
pub struct CopyButton {
    confirm_for: Duration,
    confirmed_until: Option<Instant>,
}

impl CopyButton {
    pub fn new(confirm_for: Duration) -> Self {
        Self {
            confirm_for,
            confirmed_until: None,
        }
    }

    /// Copy `text` and start the confirmation period.
    ///
    /// When no copy path works the label is left unchanged. Pressing again
    /// during a confirmation restarts the period.
    pub fn press(
        &mut self,
        copy: &Copy,
        text: &str,
        now: Instant,
    ) -> Result<CopyResult, ClipboardError> {
        let result = copy.text(text)?;
        self.confirmed_until = Some(now + self.confirm_for);
        Ok(result)
    }

    /// Whether the confirmation is showing at `now`.
    pub fn is_confirmed(&self, now: Instant) -> bool {
        self.confirmed_until.is_some_and(|until| now < until)
    }

    /// The label to display at `now`.
    pub fn label(&self, now: Instant) -> &'static str {
        if self.is_confirmed(now) {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }

    /// When the label goes back to `COPY`, if a confirmation is pending.
    pub fn reverts_at(&self) -> Option<Instant> {
        self.confirmed_until
    }
}

impl Default for CopyButton {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_CONFIRM_MS))
    }
}
