//! Theme configuration for the demo and CLI
//!
//! Centralizes all color definitions. Demo lines carry a style class
//! (`cmd`, `bird`, `response`); the theme decides which color each class
//! renders with. Colors are expressed as ratatui colors and converted to
//! ANSI escape codes for plain terminal output.

use ratatui::style::Color;

/// Theme configuration for demo playback and CLI messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Prompt and typed input lines (`cmd`)
    pub prompt: Color,
    /// ASCII banner lines (`bird`)
    pub banner: Color,
    /// Streamed answer lines (`response`)
    pub response: Color,
    /// Lines without a style class, or with an unknown one
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for highlights and important elements
    pub accent: Color,
    /// Success color
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::finch()
    }
}

impl Theme {
    /// Finch theme - green prompt, yellow bird, light gray answers.
    pub fn finch() -> Self {
        Self {
            prompt: Color::Green,
            banner: Color::Yellow,
            response: Color::Gray,
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            success: Color::Green,
        }
    }

    /// Classic terminal theme - white text.
    pub fn classic() -> Self {
        Self {
            prompt: Color::White,
            banner: Color::White,
            response: Color::White,
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            success: Color::Green,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            prompt: Color::LightCyan,
            banner: Color::Blue,
            response: Color::Cyan,
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            success: Color::Green,
        }
    }

    /// Look up a theme preset by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "finch" => Some(Self::finch()),
            "classic" => Some(Self::classic()),
            "ocean" => Some(Self::ocean()),
            _ => None,
        }
    }

    /// Color for a demo line's style class.
    pub fn class_color(&self, class: Option<&str>) -> Color {
        match class {
            Some("cmd") => self.prompt,
            Some("bird") => self.banner,
            Some("response") => self.response,
            _ => self.text_primary,
        }
    }

    /// ANSI escape code that starts a line of the given style class.
    pub fn class_ansi(&self, class: Option<&str>) -> &'static str {
        color_to_ansi(self.class_color(class))
    }

    // ANSI color helpers for CLI output

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.accent), text, ANSI_RESET)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.text_primary), text, ANSI_RESET)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        format!(
            "{}{}{}",
            color_to_ansi(self.text_secondary),
            text,
            ANSI_RESET
        )
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.success), text, ANSI_RESET)
    }
}

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to reset (no color)
        _ => "",
    }
}
