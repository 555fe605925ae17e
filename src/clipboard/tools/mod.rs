//! Platform-specific clipboard tools.

mod osc52;
mod pbcopy;
mod wl_copy;
mod xclip;
mod xsel;

pub use osc52::Osc52;
pub use pbcopy::Pbcopy;
pub use wl_copy::WlCopy;
pub use xclip::Xclip;
pub use xsel::Xsel;

use std::io::{self, Write};
use std::process::{Command, Stdio};

use super::tool::{CopyTool, CopyToolError};

/// Get the platform-appropriate tools in priority order.
pub fn platform_tools() -> Vec<Box<dyn CopyTool>> {
    #[cfg(target_os = "macos")]
    {
        vec![Box::new(Pbcopy::new())]
    }

    #[cfg(target_os = "linux")]
    {
        vec![
            Box::new(Xclip::new()),
            Box::new(Xsel::new()),
            Box::new(WlCopy::new()),
        ]
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        vec![]
    }
}

/// Check if a helper binary is on the PATH.
fn binary_exists(program: &str) -> bool {
    Command::new("which")
        .arg(program)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Run `program` with `args` and feed `text` to its stdin.
fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<(), CopyToolError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CopyToolError::NotFound,
            _ => CopyToolError::Failed(e.to_string()),
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| CopyToolError::Failed(e.to_string()))?;
        // Dropping stdin closes the pipe so the tool sees EOF
    }

    let status = child
        .wait()
        .map_err(|e| CopyToolError::Failed(e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(CopyToolError::Failed(format!("{} failed", program)))
    }
}
