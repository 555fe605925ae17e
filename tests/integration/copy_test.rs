//! Integration tests for the copy command and button

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use finch_demo::clipboard::tools::Osc52;
use finch_demo::clipboard::{
    Copy, CopyButton, CopyMethod, CopyTool, CopyToolError, COPIED_LABEL, COPY_LABEL,
};

use super::helpers::run_finch_demo;

/// System tool stand-in with a fixed outcome.
struct FakeTool(Result<(), CopyToolError>);

impl CopyTool for FakeTool {
    fn method(&self) -> CopyMethod {
        CopyMethod::Xclip
    }

    fn is_available(&self) -> bool {
        true
    }

    fn try_copy_text(&self, _text: &str) -> Result<(), CopyToolError> {
        self.0.clone()
    }
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// Button Behaviour
// ============================================================================

#[test]
fn copy_abc_confirms_on_both_paths() {
    let confirm = Duration::from_millis(2200);
    let terminal = Captured::default();

    let primary = Copy::with_tools(vec![Box::new(FakeTool(Ok(())))], None);
    let fallback = Copy::with_tools(
        vec![Box::new(FakeTool(Err(CopyToolError::Failed("no display".into()))))],
        Some(Box::new(Osc52::with_writer(terminal.clone()))),
    );

    for copy in [primary, fallback] {
        let mut button = CopyButton::new(confirm);
        let now = Instant::now();

        button.press(&copy, "abc", now).unwrap();

        assert_eq!(button.label(now), COPIED_LABEL);
        assert_eq!(button.label(now + confirm), COPY_LABEL);
    }

    let written = terminal.0.lock().unwrap().clone();
    assert_eq!(written, Osc52::sequence("abc").into_bytes());
}

// ============================================================================
// CLI
// ============================================================================

#[test]
fn copy_help_exits_0_and_shows_usage() {
    let (stdout, _stderr, exit_code, _dir) = run_finch_demo(&["copy", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("clipboard"));
    assert!(stdout.contains("[TEXT]"));
}

#[test]
fn copy_succeeds_or_fails_gracefully() {
    let (stdout, stderr, exit_code, _dir) = run_finch_demo(&["copy", "abc", "--no-wait"]);

    if exit_code == 0 {
        // A clipboard tool was available
        assert!(stdout.contains("COPIED!"), "got stdout: {}", stdout);
        assert!(stdout.contains("clipboard") || stdout.contains("terminal"));
    } else {
        assert_eq!(exit_code, 1);
        assert!(
            stderr.contains("clipboard")
                || stderr.contains("xclip")
                || stderr.contains("xsel")
                || stderr.contains("wl-copy"),
            "Expected helpful error about clipboard tools, got: {}",
            stderr
        );
        assert!(!stdout.contains("COPIED!"));
    }
}
