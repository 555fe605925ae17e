//! Copy operation results and method identifiers.

/// The result of a clipboard copy operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyResult {
    /// Text went through a system clipboard tool
    Copied { tool: CopyMethod, size_bytes: usize },
    /// System tools were unavailable; the terminal was asked to copy instead
    FallbackCopied { tool: CopyMethod, size_bytes: usize },
}

impl CopyResult {
    /// Create a Copied result.
    pub fn copied(tool: CopyMethod, size_bytes: usize) -> Self {
        Self::Copied { tool, size_bytes }
    }

    /// Create a FallbackCopied result.
    pub fn fallback_copied(tool: CopyMethod, size_bytes: usize) -> Self {
        Self::FallbackCopied { tool, size_bytes }
    }

    /// The tool that performed the copy.
    pub fn tool(&self) -> CopyMethod {
        match self {
            Self::Copied { tool, .. } | Self::FallbackCopied { tool, .. } => *tool,
        }
    }

    /// User-friendly message describing what happened.
    pub fn message(&self) -> String {
        match self {
            Self::Copied { tool, .. } => {
                format!("Copied install command to clipboard ({})", tool.name())
            }
            Self::FallbackCopied { .. } => {
                "Asked the terminal to copy the install command (no clipboard tool found)"
                    .to_string()
            }
        }
    }

    /// Whether the primary path (a system clipboard tool) was used.
    pub fn is_primary(&self) -> bool {
        matches!(self, Self::Copied { .. })
    }
}

/// Which tool was used for the copy operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// macOS pasteboard
    Pbcopy,
    /// Linux X11
    Xclip,
    /// Linux X11 alternative
    Xsel,
    /// Linux Wayland
    WlCopy,
    /// Terminal escape sequence (OSC 52)
    Osc52,
}

impl CopyMethod {
    /// Tool name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pbcopy => "pbcopy",
            Self::Xclip => "xclip",
            Self::Xsel => "xsel",
            Self::WlCopy => "wl-copy",
            Self::Osc52 => "osc52",
        }
    }
}
