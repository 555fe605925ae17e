//! CopyTool trait and related error types.

use super::result::CopyMethod;

/// A tool that can put text on the system clipboard.
///
/// Each implementation wraps one mechanism (an OS helper binary, or the
/// terminal's OSC 52 escape) and knows how to invoke it.
pub trait CopyTool: Send + Sync {
    /// The method identifier for this tool.
    fn method(&self) -> CopyMethod;

    /// Human-readable name for logs and error messages.
    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Check if this tool can be used right now.
    ///
    /// Should be fast - typically checks if the binary exists.
    fn is_available(&self) -> bool;

    /// Try to copy text to the clipboard.
    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError>;
}

/// Error from a specific tool operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyToolError {
    /// Tool execution failed
    Failed(String),
    /// Tool binary vanished between the availability check and the copy
    NotFound,
}

impl std::fmt::Display for CopyToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Failed(message) => write!(f, "{}", message),
            Self::NotFound => write!(f, "not found"),
        }
    }
}
