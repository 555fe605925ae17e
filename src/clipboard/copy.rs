//! Copy orchestrator for clipboard operations.

use tracing::debug;

use super::error::ClipboardError;
use super::result::CopyResult;
use super::tool::{CopyTool, CopyToolError};
use super::tools::{platform_tools, Osc52};

/// Orchestrates clipboard copy operations using available tools.
///
/// Tries tools in priority order:
/// 1. System clipboard tools (pbcopy, xclip, xsel, wl-copy)
/// 2. The fallback tool, when every system tool is missing or failed
pub struct Copy {
    tools: Vec<Box<dyn CopyTool>>,
    fallback: Option<Box<dyn CopyTool>>,
}

impl Copy {
    /// Create with platform-appropriate tools and the OSC 52 fallback.
    pub fn new() -> Self {
        Self {
            tools: platform_tools(),
            fallback: Some(Box::new(Osc52::stdout())),
        }
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn CopyTool>>, fallback: Option<Box<dyn CopyTool>>) -> Self {
        Self { tools, fallback }
    }

    /// Get a reference to the tools list.
    pub fn tools(&self) -> &[Box<dyn CopyTool>] {
        &self.tools
    }

    /// Copy text to the clipboard.
    pub fn text(&self, text: &str) -> Result<CopyResult, ClipboardError> {
        let size = text.len();
        let mut last_failure: Option<(&'static str, String)> = None;

        for tool in self.tools.iter().filter(|tool| tool.is_available()) {
            match tool.try_copy_text(text) {
                Ok(()) => return Ok(CopyResult::copied(tool.method(), size)),
                Err(err @ CopyToolError::NotFound) => {
                    debug!(tool = tool.name(), error = %err, "clipboard tool skipped");
                }
                Err(CopyToolError::Failed(message)) => {
                    debug!(tool = tool.name(), %message, "clipboard tool failed");
                    last_failure = Some((tool.name(), message));
                }
            }
        }

        if let Some(fallback) = self.fallback.as_ref().filter(|tool| tool.is_available()) {
            match fallback.try_copy_text(text) {
                Ok(()) => return Ok(CopyResult::fallback_copied(fallback.method(), size)),
                Err(CopyToolError::Failed(message)) => {
                    debug!(tool = fallback.name(), %message, "clipboard fallback failed");
                    last_failure = Some((fallback.name(), message));
                }
                Err(_) => {}
            }
        }

        match last_failure {
            Some((tool, message)) => Err(ClipboardError::ToolFailed { tool, message }),
            None => Err(ClipboardError::NoToolAvailable),
        }
    }
}

impl Default for Copy {
    fn default() -> Self {
        Self::new()
    }
}
